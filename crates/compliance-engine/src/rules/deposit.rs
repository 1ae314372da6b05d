// Security deposit cap per article 22 of the loi du 6 juillet 1989
use crate::constants::{DEPOSIT_MAX_MONTHS_FURNISHED, DEPOSIT_MAX_MONTHS_UNFURNISHED};
use shared_types::{ComplianceIssue, IssueCategory, IssueSeverity, LeaseData, LeaseType};

/// Legal deposit cap: one month of rent excluding charges, two when furnished
pub fn max_deposit(lease: &LeaseData) -> f64 {
    let months = if lease.furnished {
        DEPOSIT_MAX_MONTHS_FURNISHED
    } else {
        DEPOSIT_MAX_MONTHS_UNFURNISHED
    };
    lease.rent_excluding_charges * months
}

/// Validates the deposit amount. A bail mobilité cannot require a deposit at all
/// and is left to the lease-type checks.
pub fn check_deposit_amount(lease: &LeaseData) -> Vec<ComplianceIssue> {
    let mut issues = Vec::new();

    let Some(deposit) = lease.deposit_amount else {
        return issues;
    };
    if lease.lease_type == Some(LeaseType::Mobilite) {
        return issues;
    }

    let cap = max_deposit(lease);
    if deposit > cap {
        let label = if lease.furnished { "2 mois" } else { "1 mois" };
        issues.push(ComplianceIssue {
            id: "deposit-excessive".to_string(),
            severity: IssueSeverity::Illegal,
            category: IssueCategory::Financial,
            title: "Dépôt de garantie excessif".to_string(),
            description: format!(
                "Le dépôt de garantie ({} €) dépasse le maximum légal de {} de loyer hors charges ({:.2} €), soit {:.2} € de trop.",
                deposit,
                label,
                cap,
                deposit - cap
            ),
            legal_reference: "Article 22 de la loi du 6 juillet 1989".to_string(),
            legal_url: None,
            recommendation: Some(
                "Demandez la restitution de l'excédent à votre bailleur.".to_string(),
            ),
        });
    }

    issues
}
