mod common;

use rent_check::{DatasetError, RentSnapshot, ZoneSet};

use common::{fixture, sample_snapshot, sample_zones};

#[test]
fn test_datasets_load_from_disk() {
    assert_eq!(sample_zones().len(), 7);
    assert_eq!(sample_snapshot().len(), 224);
}

#[test]
fn test_missing_dataset_file_is_io_error() {
    let err = ZoneSet::from_file(fixture("quartier_paris.geojson")).unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
    assert!(err.to_string().contains("quartier_paris.geojson"));

    let err = RentSnapshot::from_file(fixture("missing.json")).unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
}

#[test]
fn test_zone_file_passed_as_snapshot_is_rejected() {
    assert!(matches!(
        RentSnapshot::from_file(fixture("sample-quartiers.geojson")),
        Err(DatasetError::Json(_))
    ));
}

#[test]
fn test_sample_zones_do_not_cover_outer_arrondissements() {
    // Tour Eiffel, Bastille, Montmartre: the sample is not a production dataset
    let zones = sample_zones();
    assert!(zones.find_zone(48.8584, 2.2945).is_none());
    assert!(zones.find_zone(48.8532, 2.3691).is_none());
    assert!(zones.find_zone(48.8867, 2.3431).is_none());
}
