// Minimum lease durations per lease regime
use crate::constants::{
    MIN_LEASE_DURATION_FURNISHED, MIN_LEASE_DURATION_UNFURNISHED, MOBILITE_DURATION_MAX,
    MOBILITE_DURATION_MIN,
};
use shared_types::{ComplianceIssue, IssueCategory, IssueSeverity, LeaseData, LeaseType};

/// Checks the declared duration against the regime's bounds. Skipped when no duration is known.
pub fn check_lease_duration(lease: &LeaseData) -> Vec<ComplianceIssue> {
    let mut issues = Vec::new();

    let Some(months) = lease.lease_duration else {
        return issues;
    };

    if lease.lease_type == Some(LeaseType::Mobilite) {
        if !(MOBILITE_DURATION_MIN..=MOBILITE_DURATION_MAX).contains(&months) {
            issues.push(ComplianceIssue {
                id: "mobilite-duration".to_string(),
                severity: IssueSeverity::Illegal,
                category: IssueCategory::LeaseValidity,
                title: "Durée du bail mobilité non conforme".to_string(),
                description: format!(
                    "Un bail mobilité doit avoir une durée comprise entre {} et {} mois. La durée de votre bail est de {} mois.",
                    MOBILITE_DURATION_MIN, MOBILITE_DURATION_MAX, months
                ),
                legal_reference: "Article 25-12 de la loi du 6 juillet 1989".to_string(),
                legal_url: None,
                recommendation: Some(
                    "Vérifiez les conditions du bail mobilité avec votre bailleur.".to_string(),
                ),
            });
        }
        return issues;
    }

    if lease.furnished {
        if months < MIN_LEASE_DURATION_FURNISHED {
            issues.push(ComplianceIssue {
                id: "furnished-duration".to_string(),
                severity: IssueSeverity::Illegal,
                category: IssueCategory::LeaseValidity,
                title: "Durée du bail meublé trop courte".to_string(),
                description: format!(
                    "Un bail meublé doit avoir une durée minimale de 1 an. La durée de votre bail est de {} mois.",
                    months
                ),
                legal_reference: "Article 25-7 de la loi du 6 juillet 1989".to_string(),
                legal_url: None,
                recommendation: Some(
                    "La durée du bail doit être d'au moins 1 an (ou 9 mois pour un bail étudiant).".to_string(),
                ),
            });
        }
    } else if months < MIN_LEASE_DURATION_UNFURNISHED {
        issues.push(ComplianceIssue {
            id: "unfurnished-duration".to_string(),
            severity: IssueSeverity::Illegal,
            category: IssueCategory::LeaseValidity,
            title: "Durée du bail non meublé trop courte".to_string(),
            description: format!(
                "Un bail non meublé doit avoir une durée minimale de 3 ans (6 ans pour un bailleur personne morale). La durée de votre bail est de {} mois.",
                months
            ),
            legal_reference: "Article 10 de la loi du 6 juillet 1989".to_string(),
            legal_url: None,
            recommendation: Some(
                "Un bail de durée inférieure au minimum légal est réputé conclu pour la durée légale minimale.".to_string(),
            ),
        });
    }

    issues
}
