use shared_types::{ComplianceIssue, IssueSeverity, Verdict};

/// Verdict is a total function of the issue severities.
///
/// Any illegal issue is a violation; any red flag or attention item is a
/// warning; otherwise the lease is compliant.
pub fn determine_verdict(issues: &[ComplianceIssue]) -> Verdict {
    match issues.iter().map(|i| i.severity).max() {
        Some(IssueSeverity::Illegal) => Verdict::Violation,
        Some(IssueSeverity::RedFlag) | Some(IssueSeverity::Attention) => Verdict::Warning,
        Some(IssueSeverity::Ok) | None => Verdict::Compliant,
    }
}

/// Rounds a monetary amount to cents for display
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
