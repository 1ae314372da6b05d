//! Compliance issues, verdicts and the final report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{LeaseData, RentReference, Zone};

/// Issue severity, ordered from least to most serious
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Ok,
    Attention,
    RedFlag,
    Illegal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Rent,
    LeaseValidity,
    Financial,
    Clauses,
    Decency,
}

/// A single finding about the lease
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceIssue {
    /// Stable slug, e.g. `rent-ceiling`
    pub id: String,
    pub severity: IssueSeverity,
    pub category: IssueCategory,
    pub title: String,
    pub description: String,
    pub legal_reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Compliant,
    Warning,
    Violation,
}

/// A recourse the tenant can take
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStep {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

/// Sole output of the engine. Monetary values are rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub verdict: Verdict,
    pub lease_data: LeaseData,
    pub rent_reference: RentReference,
    pub zone: Zone,

    pub rent_per_sqm: f64,
    pub max_legal_rent_per_sqm: f64,
    pub max_legal_rent_total: f64,
    /// Only set when the rent exceeds the ceiling
    pub overcharge_per_sqm: Option<f64>,
    pub overcharge_total: Option<f64>,

    pub issues: Vec<ComplianceIssue>,
    pub actions: Vec<ActionStep>,
    pub generated_at: DateTime<Utc>,
}

/// Body of `POST /api/check-rent`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRentRequest {
    pub lease_data: LeaseData,
    /// Clause-level issues produced upstream by document analysis
    #[serde(default)]
    pub clause_issues: Option<Vec<ComplianceIssue>>,
}

/// Successful reply of `POST /api/check-rent`. Failures use the server's error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRentResponse {
    pub success: bool,
    pub report: ComplianceReport,
}
