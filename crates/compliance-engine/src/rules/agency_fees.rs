// Agency fees chargeable to the tenant (article 5 of the loi du 6 juillet 1989)
use crate::constants::{AGENCY_FEES_CEILING_PER_SQM, AGENCY_FEES_ETAT_DES_LIEUX_PER_SQM};
use shared_types::{ComplianceIssue, IssueCategory, IssueSeverity, LeaseData};

/// Maximum fees for services plus the move-in inventory, for the lease surface
pub fn max_agency_fees(surface: f64) -> f64 {
    (AGENCY_FEES_CEILING_PER_SQM + AGENCY_FEES_ETAT_DES_LIEUX_PER_SQM) * surface
}

pub fn check_agency_fees(lease: &LeaseData) -> Vec<ComplianceIssue> {
    let mut issues = Vec::new();

    let fees = match lease.agency_fees {
        Some(fees) if fees != 0.0 => fees,
        _ => return issues,
    };

    let cap = max_agency_fees(lease.surface);
    if fees > cap {
        issues.push(ComplianceIssue {
            id: "agency-fees-excessive".to_string(),
            severity: IssueSeverity::Illegal,
            category: IssueCategory::Financial,
            title: "Honoraires d'agence excessifs".to_string(),
            description: format!(
                "Les honoraires à la charge du locataire ({} €) dépassent le plafond légal de {} €/m² pour les prestations + {} €/m² pour l'état des lieux, soit {:.2} € maximum pour {} m².",
                fees, AGENCY_FEES_CEILING_PER_SQM, AGENCY_FEES_ETAT_DES_LIEUX_PER_SQM, cap, lease.surface
            ),
            legal_reference: "Article 5 de la loi du 6 juillet 1989 et décret du 1er août 2014".to_string(),
            legal_url: None,
            recommendation: Some(
                "Demandez le remboursement de l'excédent à l'agence immobilière.".to_string(),
            ),
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::lease;

    #[test]
    fn test_cap_is_fifteen_per_sqm() {
        assert_eq!(max_agency_fees(40.0), 600.0);
    }

    #[test]
    fn test_fees_within_cap() {
        let mut l = lease();
        l.agency_fees = Some(600.0);
        assert!(check_agency_fees(&l).is_empty());
    }

    #[test]
    fn test_fees_above_cap() {
        let mut l = lease();
        l.agency_fees = Some(800.0);

        let issues = check_agency_fees(&l);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "agency-fees-excessive");
        assert_eq!(issues[0].category, IssueCategory::Financial);
        assert!(issues[0].description.contains("600.00 € maximum pour 40 m²"));
    }

    #[test]
    fn test_zero_or_missing_fees_skipped() {
        let mut l = lease();
        l.surface = 1.0;
        l.agency_fees = Some(0.0);
        assert!(check_agency_fees(&l).is_empty());

        l.agency_fees = None;
        assert!(check_agency_fees(&l).is_empty());
    }
}
