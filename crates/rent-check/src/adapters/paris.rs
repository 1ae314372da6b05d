//! Paris: quartier polygons and the open-data rent references

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::{ConstructionPeriod, RentReference, Zone};

use super::CityAdapter;
use crate::config::PARIS_CITYCODE_PREFIX;
use crate::error::ReportError;
use crate::reference::{RentLookup, RentReferenceProvider};
use crate::zones::ZoneSet;

pub const CITY_ID: &str = "paris";
pub const CITYCODE_PREFIX: &str = PARIS_CITYCODE_PREFIX;

const ROOM_CATEGORIES: [u32; 4] = [1, 2, 3, 4];

#[derive(Debug, Clone)]
pub struct ParisAdapter {
    zones: Arc<ZoneSet>,
    references: RentReferenceProvider,
}

impl ParisAdapter {
    pub fn new(zones: Arc<ZoneSet>, references: RentReferenceProvider) -> Self {
        Self { zones, references }
    }
}

#[async_trait]
impl CityAdapter for ParisAdapter {
    fn city_id(&self) -> &str {
        CITY_ID
    }

    fn city_name(&self) -> &str {
        "Paris"
    }

    fn resolve_zone(&self, latitude: f64, longitude: f64) -> Result<Zone, ReportError> {
        self.zones
            .find_zone(latitude, longitude)
            .ok_or(ReportError::ZoneNotFound {
                latitude,
                longitude,
            })
    }

    async fn fetch_rent_reference(&self, lookup: &RentLookup) -> Result<RentReference, ReportError> {
        self.references.fetch(lookup).await
    }

    fn construction_periods(&self) -> &[ConstructionPeriod] {
        &ConstructionPeriod::ALL
    }

    fn room_categories(&self) -> &[u32] {
        &ROOM_CATEGORIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{snapshot, zones};
    use pretty_assertions::assert_eq;
    use url::Url;

    fn adapter() -> ParisAdapter {
        let provider = RentReferenceProvider::new(
            reqwest::Client::new(),
            Url::parse("http://127.0.0.1:9/records").unwrap(),
            Arc::new(snapshot()),
        );
        ParisAdapter::new(Arc::new(zones()), provider)
    }

    #[test]
    fn test_resolve_zone_outside_paris() {
        let err = adapter().resolve_zone(45.7640, 4.8357).unwrap_err();
        assert_eq!(err.code(), "ZONE_NOT_FOUND");
    }

    #[test]
    fn test_capabilities() {
        let a = adapter();
        assert_eq!(a.city_id(), "paris");
        assert_eq!(a.construction_periods().len(), 4);
        assert_eq!(a.room_categories(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_registry_lists_paris() {
        let registry = crate::adapters::AdapterRegistry::new().with_adapter(Arc::new(adapter()));
        let cities = registry.cities();
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "Paris");
        assert!(registry.for_citycode("75104").is_some());
        assert!(registry.for_citycode("13055").is_none());
    }
}
