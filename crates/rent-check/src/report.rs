//! Report assembly: geocode → zone → vintage → reference → rules.
//!
//! Stages run strictly in sequence. Any stage failure is terminal for the
//! request; no partial report is ever returned.

use std::sync::Arc;

use chrono::Utc;
use compliance_engine::{action_steps, determine_reference_year, determine_verdict, round2, ComplianceEngine};
use shared_types::{ComplianceIssue, ComplianceReport, LeaseData, Verdict};
use tracing::{debug, info};

use crate::adapters::{AdapterRegistry, ParisAdapter};
use crate::config::{ConfigError, EngineConfig};
use crate::error::ReportError;
use crate::geocoding::Geocoder;
use crate::reference::{RentLookup, RentReferenceProvider, RentSnapshot};
use crate::zones::ZoneSet;

#[derive(Debug, Clone)]
pub struct ReportGenerator {
    geocoder: Geocoder,
    registry: AdapterRegistry,
    engine: ComplianceEngine,
}

impl ReportGenerator {
    pub fn new(geocoder: Geocoder, registry: AdapterRegistry) -> Self {
        Self {
            geocoder,
            registry,
            engine: ComplianceEngine::new(),
        }
    }

    /// Wire the Paris pipeline from configuration and preloaded datasets
    pub fn from_config(
        config: &EngineConfig,
        zones: Arc<ZoneSet>,
        snapshot: Arc<RentSnapshot>,
    ) -> Result<Self, ConfigError> {
        let http = config.http_client()?;
        let geocoder = Geocoder::new(http.clone(), config);
        let provider = RentReferenceProvider::new(http, config.rent_opendata_url.clone(), snapshot);
        let registry = AdapterRegistry::new().with_adapter(Arc::new(ParisAdapter::new(zones, provider)));

        Ok(Self::new(geocoder, registry))
    }

    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    /// Check a lease and build the full report.
    ///
    /// `clause_issues` are appended after the rule battery's own issues and
    /// count towards the verdict.
    pub async fn generate_report(
        &self,
        lease: &LeaseData,
        clause_issues: Option<Vec<ComplianceIssue>>,
    ) -> Result<ComplianceReport, ReportError> {
        let location = self.geocoder.geocode(&lease.full_address()).await?;
        debug!(
            latitude = location.latitude,
            longitude = location.longitude,
            citycode = %location.citycode,
            "address geocoded"
        );

        let adapter = self
            .registry
            .for_citycode(&location.citycode)
            .ok_or_else(|| ReportError::UnsupportedCoverage {
                citycode: location.citycode.clone(),
            })?;

        let mut zone = adapter.resolve_zone(location.latitude, location.longitude)?;

        let year = determine_reference_year(lease.lease_start_date);
        let lookup = RentLookup::new(
            zone.name.clone(),
            lease.number_of_rooms,
            lease.construction_period,
            lease.furnished,
            year.to_string(),
        );
        let reference = adapter.fetch_rent_reference(&lookup).await?;
        zone.rate_zone_id = Some(reference.zone_id);

        let mut issues = self.engine.check(lease, &reference);
        if let Some(extra) = clause_issues {
            issues.extend(extra);
        }

        let verdict = determine_verdict(&issues);

        let rent_per_sqm = lease.rent_per_sqm();
        let max_rent = reference.max_rent;
        let (overcharge_per_sqm, overcharge_total) = if rent_per_sqm > max_rent {
            let overage = rent_per_sqm - max_rent;
            (Some(round2(overage)), Some(round2(overage * lease.surface)))
        } else {
            (None, None)
        };

        let actions = if verdict == Verdict::Compliant {
            Vec::new()
        } else {
            action_steps(contests_complement(lease))
        };

        info!(
            zone = %zone.name,
            year = %reference.year,
            ?verdict,
            issues = issues.len(),
            "compliance report generated"
        );

        Ok(ComplianceReport {
            verdict,
            lease_data: lease.clone(),
            zone,
            rent_per_sqm: round2(rent_per_sqm),
            max_legal_rent_per_sqm: round2(max_rent),
            max_legal_rent_total: round2(max_rent * lease.surface),
            overcharge_per_sqm,
            overcharge_total,
            rent_reference: reference,
            issues,
            actions,
            generated_at: Utc::now(),
        })
    }
}

/// A positive complement gets the 3-month conciliation deadline
fn contests_complement(lease: &LeaseData) -> bool {
    lease.complement_loyer.is_some_and(|amount| amount > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared_types::ConstructionPeriod;

    fn lease(complement: Option<f64>) -> LeaseData {
        LeaseData {
            address: "10 Rue de la Paix".to_string(),
            postal_code: "75002".to_string(),
            city: "Paris".to_string(),
            rent_excluding_charges: 1000.0,
            charges: None,
            surface: 40.0,
            number_of_rooms: 2,
            furnished: false,
            construction_period: ConstructionPeriod::Before1946,
            lease_start_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            complement_loyer: complement,
            complement_loyer_justification: None,
            mentions_reference_rent: None,
            mentions_max_rent: None,
            dpe_class: None,
            deposit_amount: None,
            agency_fees: None,
            lease_type: None,
            lease_duration: None,
            clause_text: None,
        }
    }

    #[test]
    fn test_only_positive_complement_is_contested() {
        assert!(contests_complement(&lease(Some(120.0))));
        assert!(!contests_complement(&lease(Some(0.0))));
        assert!(!contests_complement(&lease(Some(-50.0))));
        assert!(!contests_complement(&lease(None)));
    }

    #[test]
    fn test_negative_complement_uses_general_deadline() {
        let steps = action_steps(contests_complement(&lease(Some(-50.0))));
        assert!(steps[1].deadline.as_deref().unwrap().starts_with("Pas de délai"));
    }
}
