//! City-specific behaviour behind one capability trait
//!
//! Paris is the only implementation today. The registry is selected by a
//! pure lookup from the geocoder's INSEE city code.

pub mod paris;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use shared_types::{ConstructionPeriod, RentReference, Zone};

use crate::error::ReportError;
use crate::reference::RentLookup;

pub use paris::ParisAdapter;

/// Trait for cities under rent control
#[async_trait]
pub trait CityAdapter: Send + Sync {
    /// Stable identifier, e.g. `"paris"`
    fn city_id(&self) -> &str;

    /// Display name
    fn city_name(&self) -> &str;

    /// Zone containing the coordinate
    fn resolve_zone(&self, latitude: f64, longitude: f64) -> Result<Zone, ReportError>;

    /// Legal reference for the lookup key
    async fn fetch_rent_reference(&self, lookup: &RentLookup) -> Result<RentReference, ReportError>;

    fn construction_periods(&self) -> &[ConstructionPeriod];

    /// Room buckets; the last one means "this many and more"
    fn room_categories(&self) -> &[u32];
}

/// City id for an INSEE city code, if covered
pub fn detect_city(citycode: &str) -> Option<&'static str> {
    if citycode.starts_with(paris::CITYCODE_PREFIX) {
        Some(paris::CITY_ID)
    } else {
        None
    }
}

/// Summary of a supported city
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityInfo {
    pub id: String,
    pub name: String,
    pub construction_periods: Vec<ConstructionPeriod>,
    pub room_categories: Vec<u32>,
}

/// Adapters keyed by city id
#[derive(Default, Clone)]
pub struct AdapterRegistry {
    adapters: Vec<Arc<dyn CityAdapter>>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self {
            adapters: Vec::new(),
        }
    }

    /// Register an adapter. Lookups return the first one registered under an id.
    pub fn with_adapter(mut self, adapter: Arc<dyn CityAdapter>) -> Self {
        self.adapters.push(adapter);
        self
    }

    pub fn get(&self, city_id: &str) -> Option<&Arc<dyn CityAdapter>> {
        self.adapters.iter().find(|a| a.city_id() == city_id)
    }

    /// Adapter responsible for an INSEE city code
    pub fn for_citycode(&self, citycode: &str) -> Option<&Arc<dyn CityAdapter>> {
        detect_city(citycode).and_then(|id| self.get(id))
    }

    pub fn cities(&self) -> Vec<CityInfo> {
        self.adapters
            .iter()
            .map(|a| CityInfo {
                id: a.city_id().to_string(),
                name: a.city_name().to_string(),
                construction_periods: a.construction_periods().to_vec(),
                room_categories: a.room_categories().to_vec(),
            })
            .collect()
    }
}

impl std::fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.adapters.iter().map(|a| a.city_id()))
            .finish()
    }
}
