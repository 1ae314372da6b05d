mod common;

use pretty_assertions::assert_eq;
use rent_check::ReportError;
use shared_types::{ComplianceIssue, IssueCategory, IssueSeverity, Verdict};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{config, generator, lease, mount_geocoder, records_body};

async fn mount_empty_records(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_body(Vec::new())))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_compliant_lease_report() {
    let server = MockServer::start().await;
    mount_geocoder(&server, 0.95, "75102").await;
    mount_empty_records(&server).await;

    let report = generator(&config(&server))
        .generate_report(&lease(1000.0), None)
        .await
        .unwrap();

    assert_eq!(report.verdict, Verdict::Compliant);
    assert!(report.issues.is_empty());
    assert!(report.actions.is_empty());
    assert_eq!(report.rent_per_sqm, 25.0);
    assert_eq!(report.max_legal_rent_per_sqm, 33.6);
    assert_eq!(report.max_legal_rent_total, 1344.0);
    assert_eq!(report.overcharge_per_sqm, None);
    assert_eq!(report.overcharge_total, None);
    assert_eq!(report.zone.name, "Gaillon");
    assert_eq!(report.zone.rate_zone_id, Some(1));
    assert_eq!(report.rent_reference.year, "2024");
}

#[tokio::test]
async fn test_overcharged_lease_report() {
    let server = MockServer::start().await;
    mount_geocoder(&server, 0.95, "75102").await;
    mount_empty_records(&server).await;

    let report = generator(&config(&server))
        .generate_report(&lease(1500.0), None)
        .await
        .unwrap();

    assert_eq!(report.verdict, Verdict::Violation);
    let ids: Vec<&str> = report.issues.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["rent-ceiling"]);
    assert_eq!(report.rent_per_sqm, 37.5);
    assert_eq!(report.overcharge_per_sqm, Some(3.9));
    assert_eq!(report.overcharge_total, Some(156.0));
    assert_eq!(report.actions.len(), 5);
}

#[tokio::test]
async fn test_clause_issues_are_merged() {
    let server = MockServer::start().await;
    mount_geocoder(&server, 0.95, "75102").await;
    mount_empty_records(&server).await;

    let clause = ComplianceIssue {
        id: "clause-penalty".to_string(),
        severity: IssueSeverity::RedFlag,
        category: IssueCategory::Clauses,
        title: "Clause pénale".to_string(),
        description: "Pénalité forfaitaire en cas de retard de paiement".to_string(),
        legal_reference: "Art. 4 i) loi du 6 juillet 1989".to_string(),
        legal_url: None,
        recommendation: None,
    };

    let report = generator(&config(&server))
        .generate_report(&lease(1000.0), Some(vec![clause]))
        .await
        .unwrap();

    assert_eq!(report.verdict, Verdict::Warning);
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].id, "clause-penalty");
    assert_eq!(report.actions.len(), 5);
}

#[tokio::test]
async fn test_outside_coverage_never_queries_references() {
    let server = MockServer::start().await;
    mount_geocoder(&server, 0.95, "69123").await;
    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_body(Vec::new())))
        .expect(0)
        .mount(&server)
        .await;

    let err = generator(&config(&server))
        .generate_report(&lease(1000.0), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::UnsupportedCoverage { ref citycode } if citycode == "69123"));
}

#[tokio::test]
async fn test_fallback_reference_carries_requested_year() {
    let server = MockServer::start().await;
    mount_geocoder(&server, 0.95, "75102").await;
    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut old_lease = lease(1000.0);
    old_lease.lease_start_date = chrono::NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();

    let report = generator(&config(&server))
        .generate_report(&old_lease, None)
        .await
        .unwrap();

    assert_eq!(report.rent_reference.year, "2020");
    assert_eq!(report.rent_reference.max_rent, 33.6);
}

#[tokio::test]
async fn test_point_outside_quartiers_is_zone_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "features": [{
                "geometry": { "type": "Point", "coordinates": [2.2000, 48.8000] },
                "properties": { "label": "Lisière", "score": 0.9, "postcode": "75016", "citycode": "75116" }
            }]
        })))
        .mount(&server)
        .await;

    let err = generator(&config(&server))
        .generate_report(&lease(1000.0), None)
        .await
        .unwrap_err();

    assert_eq!(err.code(), "ZONE_NOT_FOUND");
}
