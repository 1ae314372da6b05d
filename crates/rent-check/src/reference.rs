//! Legal rent references from the Paris open-data portal.
//!
//! Resilience policy: the live portal is tried first, and any failure there
//! (transport error, timeout, non-2xx, empty result set) is treated as a
//! cache miss and answered from the snapshot loaded at startup. Reference
//! availability must never block a report. Only when both sources miss does
//! the request fail, with [`ReportError::ReferenceNotFound`].

use std::path::Path;
use std::sync::Arc;

use compliance_engine::constants::MAX_ROOM_BUCKET;
use serde::{Deserialize, Deserializer, Serialize};
use shared_types::{ConstructionPeriod, RentReference};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::error::ReportError;
use crate::zones::{read_dataset, DatasetError};

pub const FURNISHED_LABEL: &str = "meublé";
pub const UNFURNISHED_LABEL: &str = "non meublé";

const SELECT_FIELDS: &str = "annee,nom_quartier,id_quartier,id_zone,piece,epoque,meuble_txt,ref,max,min";

/// One row of the `logement-encadrement-des-loyers` dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenDataRecord {
    #[serde(deserialize_with = "year_as_string")]
    pub annee: String,
    pub nom_quartier: String,
    pub id_quartier: u32,
    pub id_zone: u32,
    pub piece: u32,
    pub epoque: String,
    pub meuble_txt: String,
    #[serde(rename = "ref")]
    pub reference: f64,
    pub max: f64,
    pub min: f64,
}

impl OpenDataRecord {
    /// Map to the domain type. `None` when the period label is unknown.
    pub fn to_reference(&self) -> Option<RentReference> {
        let construction_period = ConstructionPeriod::from_label(&self.epoque)?;
        Some(RentReference {
            year: self.annee.clone(),
            quarter_name: self.nom_quartier.clone(),
            quarter_id: self.id_quartier,
            zone_id: self.id_zone,
            number_of_rooms: self.piece,
            construction_period,
            furnished: self.meuble_txt == FURNISHED_LABEL,
            reference_rent: self.reference,
            max_rent: self.max,
            min_rent: self.min,
        })
    }

    /// Match on everything but the year
    fn matches_ignoring_year(&self, lookup: &RentLookup) -> bool {
        self.nom_quartier == lookup.zone_name
            && self.piece == lookup.rooms
            && self.epoque == lookup.construction_period.label()
            && self.meuble_txt == lookup.furnished_label()
    }
}

fn year_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Text(String),
        Number(i64),
    }

    Ok(match Year::deserialize(deserializer)? {
        Year::Text(s) => s,
        Year::Number(n) => n.to_string(),
    })
}

/// Key of a rent-reference lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentLookup {
    pub zone_name: String,
    /// Already bucketed: 4 means "4 rooms and more"
    pub rooms: u32,
    pub construction_period: ConstructionPeriod,
    pub furnished: bool,
    pub year: String,
}

impl RentLookup {
    pub fn new(
        zone_name: impl Into<String>,
        number_of_rooms: u32,
        construction_period: ConstructionPeriod,
        furnished: bool,
        year: impl Into<String>,
    ) -> Self {
        Self {
            zone_name: zone_name.into(),
            rooms: number_of_rooms.min(MAX_ROOM_BUCKET),
            construction_period,
            furnished,
            year: year.into(),
        }
    }

    pub fn furnished_label(&self) -> &'static str {
        if self.furnished {
            FURNISHED_LABEL
        } else {
            UNFURNISHED_LABEL
        }
    }

    /// ODSQL exact-match filter over the full key
    pub fn where_clause(&self) -> String {
        format!(
            "nom_quartier=\"{}\" AND annee=\"{}\" AND piece={} AND meuble_txt=\"{}\" AND epoque=\"{}\"",
            escape_odsql(&self.zone_name),
            escape_odsql(&self.year),
            self.rooms,
            self.furnished_label(),
            self.construction_period.label()
        )
    }
}

fn escape_odsql(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Static snapshot of the dataset for a single vintage
#[derive(Debug, Clone)]
pub struct RentSnapshot {
    records: Vec<OpenDataRecord>,
}

impl RentSnapshot {
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let records: Vec<OpenDataRecord> = serde_json::from_str(raw)?;
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Self { records })
    }

    /// Read and parse a JSON export of the dataset
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        Self::from_json(&read_dataset(path.as_ref())?)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Year is not part of the key: the snapshot only holds its own vintage
    pub fn find(&self, lookup: &RentLookup) -> Option<&OpenDataRecord> {
        self.records.iter().find(|r| r.matches_ignoring_year(lookup))
    }
}

/// Why the live lookup produced nothing
#[derive(Debug, Error)]
pub enum LiveLookupError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("portal returned {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Deserialize)]
struct RecordsResponse {
    #[serde(default)]
    results: Vec<OpenDataRecord>,
}

#[derive(Debug, Clone)]
pub struct RentReferenceProvider {
    http: reqwest::Client,
    records_url: Url,
    snapshot: Arc<RentSnapshot>,
}

impl RentReferenceProvider {
    pub fn new(http: reqwest::Client, records_url: Url, snapshot: Arc<RentSnapshot>) -> Self {
        Self {
            http,
            records_url,
            snapshot,
        }
    }

    /// Reference for the lookup, live first then snapshot
    pub async fn fetch(&self, lookup: &RentLookup) -> Result<RentReference, ReportError> {
        match self.try_live(lookup).await {
            Ok(Some(reference)) => return Ok(reference),
            Ok(None) => {
                warn!(zone = %lookup.zone_name, year = %lookup.year, "no live rent reference, using snapshot");
            }
            Err(e) => {
                warn!(zone = %lookup.zone_name, year = %lookup.year, error = %e, "live rent reference lookup failed, using snapshot");
            }
        }

        self.fallback(lookup).ok_or_else(|| ReportError::ReferenceNotFound {
            zone: lookup.zone_name.clone(),
        })
    }

    /// Exact-match query against the live portal.
    ///
    /// `Ok(None)` when the portal answers with no usable record.
    pub async fn try_live(&self, lookup: &RentLookup) -> Result<Option<RentReference>, LiveLookupError> {
        let where_clause = lookup.where_clause();
        debug!(%where_clause, "querying live rent reference");

        let response = self
            .http
            .get(self.records_url.clone())
            .query(&[
                ("where", where_clause.as_str()),
                ("select", SELECT_FIELDS),
                ("limit", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LiveLookupError::Status(response.status()));
        }

        let body: RecordsResponse = response.json().await?;
        Ok(body.results.first().and_then(OpenDataRecord::to_reference))
    }

    /// Snapshot record for the lookup, relabelled with the requested year
    pub fn fallback(&self, lookup: &RentLookup) -> Option<RentReference> {
        let mut reference = self.snapshot.find(lookup)?.to_reference()?;
        reference.year = lookup.year.clone();
        Some(reference)
    }
}
