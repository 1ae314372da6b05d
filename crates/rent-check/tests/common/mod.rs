//! Shared fixtures for the HTTP-backed integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use rent_check::{EngineConfig, ReportGenerator, RentSnapshot, ZoneSet};
use serde_json::{json, Value};
use shared_types::{ConstructionPeriod, DpeClass, LeaseData, LeaseType};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn lease(rent: f64) -> LeaseData {
    LeaseData {
        address: "10 Rue de la Paix".to_string(),
        postal_code: "75002".to_string(),
        city: "Paris".to_string(),
        rent_excluding_charges: rent,
        charges: Some(50.0),
        surface: 40.0,
        number_of_rooms: 2,
        furnished: false,
        construction_period: ConstructionPeriod::Before1946,
        lease_start_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
        complement_loyer: None,
        complement_loyer_justification: None,
        mentions_reference_rent: Some(true),
        mentions_max_rent: Some(true),
        dpe_class: Some(DpeClass::D),
        deposit_amount: Some(rent),
        agency_fees: None,
        lease_type: Some(LeaseType::Loi1989),
        lease_duration: Some(36),
        clause_text: None,
    }
}

/// One-candidate geocoder answer located in Gaillon
pub fn geocoder_body(score: f64, citycode: &str) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [2.3316, 48.8702] },
            "properties": {
                "label": "10 Rue de la Paix 75002 Paris",
                "score": score,
                "postcode": "75002",
                "citycode": citycode,
                "city": "Paris",
                "district": "Paris 2e Arrondissement"
            }
        }]
    })
}

pub fn records_body(records: Vec<Value>) -> Value {
    json!({ "total_count": records.len(), "results": records })
}

pub fn live_record(year: &str, max: f64) -> Value {
    json!({
        "annee": year,
        "nom_quartier": "Gaillon",
        "id_quartier": 5,
        "id_zone": 1,
        "piece": 2,
        "epoque": "Avant 1946",
        "meuble_txt": "non meublé",
        "ref": 29.0,
        "max": max,
        "min": 20.3
    })
}

pub async fn mount_geocoder(server: &MockServer, score: f64, citycode: &str) {
    Mock::given(method("GET"))
        .and(path("/search/"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocoder_body(score, citycode)))
        .mount(server)
        .await;
}

pub fn config(server: &MockServer) -> EngineConfig {
    EngineConfig::with_base_url(&server.uri()).unwrap()
}

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

/// Seven sample quartiers around the centre and Batignolles
pub fn sample_zones() -> ZoneSet {
    ZoneSet::from_file(fixture("sample-quartiers.geojson")).unwrap()
}

/// 2024 rows for the sample quartiers
pub fn sample_snapshot() -> RentSnapshot {
    RentSnapshot::from_file(fixture("sample-rent-references.json")).unwrap()
}

pub fn generator(config: &EngineConfig) -> ReportGenerator {
    ReportGenerator::from_config(config, Arc::new(sample_zones()), Arc::new(sample_snapshot())).unwrap()
}
