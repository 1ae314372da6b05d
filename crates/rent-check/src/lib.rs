//! Rent-control checks for Paris leases
//!
//! Turns a [`LeaseData`](shared_types::LeaseData) into a
//! [`ComplianceReport`](shared_types::ComplianceReport): the address is
//! geocoded, located in its quartier, matched against the legal rent
//! reference for the applicable year, then run through the rule battery of
//! `compliance-engine`.
//!
//! ```ignore
//! let config = EngineConfig::from_env()?;
//! let generator = ReportGenerator::from_config(
//!     &config,
//!     Arc::new(ZoneSet::from_file("quartier_paris.geojson")?),
//!     Arc::new(RentSnapshot::from_file("logement-encadrement-des-loyers.json")?),
//! )?;
//! let report = generator.generate_report(&lease, None).await?;
//! ```

pub mod adapters;
pub mod config;
pub mod error;
pub mod geocoding;
pub mod reference;
pub mod report;
pub mod zones;

pub use adapters::{detect_city, AdapterRegistry, CityAdapter, CityInfo, ParisAdapter};
pub use config::{ConfigError, EngineConfig};
pub use error::ReportError;
pub use geocoding::Geocoder;
pub use reference::{RentLookup, RentReferenceProvider, RentSnapshot};
pub use report::ReportGenerator;
pub use zones::{DatasetError, ZoneSet};
