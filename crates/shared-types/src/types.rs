//! Lease facts and location records shared by the engine and its callers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lease facts, extracted from a document or entered by hand.
///
/// Callers validate `surface > 0` and `rent_excluding_charges > 0` before
/// handing a lease to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseData {
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub rent_excluding_charges: f64,
    #[serde(default)]
    pub charges: Option<f64>,
    pub surface: f64,
    pub number_of_rooms: u32,
    pub furnished: bool,
    pub construction_period: ConstructionPeriod,
    pub lease_start_date: NaiveDate,
    #[serde(default)]
    pub complement_loyer: Option<f64>,
    #[serde(default)]
    pub complement_loyer_justification: Option<String>,
    #[serde(default)]
    pub mentions_reference_rent: Option<bool>,
    #[serde(default)]
    pub mentions_max_rent: Option<bool>,
    #[serde(default)]
    pub dpe_class: Option<DpeClass>,
    #[serde(default)]
    pub deposit_amount: Option<f64>,
    #[serde(default)]
    pub agency_fees: Option<f64>,
    #[serde(default)]
    pub lease_type: Option<LeaseType>,
    /// Duration in months
    #[serde(default)]
    pub lease_duration: Option<u32>,
    #[serde(default)]
    pub clause_text: Option<String>,
}

impl LeaseData {
    /// Monthly rent per square metre, excluding charges and complement
    pub fn rent_per_sqm(&self) -> f64 {
        self.rent_excluding_charges / self.surface
    }

    /// True when a non-zero rent complement is declared
    pub fn has_complement_loyer(&self) -> bool {
        self.complement_loyer.is_some_and(|amount| amount != 0.0)
    }

    /// Address line sent to the geocoder
    pub fn full_address(&self) -> String {
        format!("{}, {} {}", self.address, self.postal_code, self.city)
    }
}

/// Construction period buckets used by the rent-reference tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstructionPeriod {
    #[serde(rename = "Avant 1946")]
    Before1946,
    #[serde(rename = "1946-1970")]
    From1946To1970,
    #[serde(rename = "1971-1990")]
    From1971To1990,
    #[serde(rename = "Apres 1990")]
    After1990,
}

impl ConstructionPeriod {
    pub const ALL: [ConstructionPeriod; 4] = [
        ConstructionPeriod::Before1946,
        ConstructionPeriod::From1946To1970,
        ConstructionPeriod::From1971To1990,
        ConstructionPeriod::After1990,
    ];

    /// Label as published in the open-data tables
    pub fn label(&self) -> &'static str {
        match self {
            ConstructionPeriod::Before1946 => "Avant 1946",
            ConstructionPeriod::From1946To1970 => "1946-1970",
            ConstructionPeriod::From1971To1990 => "1971-1990",
            ConstructionPeriod::After1990 => "Apres 1990",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

impl std::fmt::Display for ConstructionPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Energy performance class (DPE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DpeClass {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl DpeClass {
    pub fn letter(&self) -> char {
        match self {
            DpeClass::A => 'A',
            DpeClass::B => 'B',
            DpeClass::C => 'C',
            DpeClass::D => 'D',
            DpeClass::E => 'E',
            DpeClass::F => 'F',
            DpeClass::G => 'G',
        }
    }

    /// F and G, the bands targeted by rental bans
    pub fn is_energy_sieve(&self) -> bool {
        matches!(self, DpeClass::F | DpeClass::G)
    }
}

impl std::fmt::Display for DpeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Legal regime the lease was signed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaseType {
    /// Loi du 6 juillet 1989 (main residence)
    #[serde(rename = "loi_1989")]
    Loi1989,
    /// Bail mobilité, 1 to 10 months, no deposit
    Mobilite,
    /// Civil-code lease, not meant for a main residence
    CodeCivil,
    Other,
}

/// Output of the geocoding collaborator for one address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodingResult {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: String,
    pub postcode: String,
    pub citycode: String,
    pub district: String,
    /// Confidence in [0, 1]
    pub score: f64,
}

/// Smallest geographic unit with its own rent-reference table (quartier)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: u32,
    pub name: String,
    pub arrondissement: u32,
    /// Rate-table zone, only known once a reference record has been fetched
    pub rate_zone_id: Option<u32>,
}

/// Legal rent per square metre for one (zone, rooms, period, furnished, year) tuple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentReference {
    pub year: String,
    pub quarter_name: String,
    pub quarter_id: u32,
    pub zone_id: u32,
    pub number_of_rooms: u32,
    pub construction_period: ConstructionPeriod,
    pub furnished: bool,
    pub reference_rent: f64,
    pub max_rent: f64,
    pub min_rent: f64,
}
