// Rent ceiling per article 17 of the loi du 6 juillet 1989
use shared_types::{ComplianceIssue, IssueCategory, IssueSeverity, LeaseData, RentReference};

/// Flags rent per m² above the loyer de référence majoré.
///
/// A rent exactly at the ceiling is compliant.
pub fn check_rent_ceiling(lease: &LeaseData, reference: &RentReference) -> Option<ComplianceIssue> {
    let rent_per_sqm = lease.rent_per_sqm();
    let max_allowed = reference.max_rent;

    if rent_per_sqm <= max_allowed {
        return None;
    }

    let overcharge_per_sqm = rent_per_sqm - max_allowed;
    let overcharge_total = overcharge_per_sqm * lease.surface;

    Some(ComplianceIssue {
        id: "rent-ceiling".to_string(),
        severity: IssueSeverity::Illegal,
        category: IssueCategory::Rent,
        title: "Dépassement du loyer de référence majoré".to_string(),
        description: format!(
            "Votre loyer est de {:.2} €/m², soit {:.2} €/m² au-dessus du plafond légal de {:.2} €/m². Cela représente un trop-perçu de {:.2} € par mois.",
            rent_per_sqm, overcharge_per_sqm, max_allowed, overcharge_total
        ),
        legal_reference: "Article 17 de la loi du 6 juillet 1989".to_string(),
        legal_url: Some(
            "https://www.legifrance.gouv.fr/loda/article_lc/LEGIARTI000039048522".to_string(),
        ),
        recommendation: Some(
            "Demandez à votre bailleur une réduction de loyer par lettre recommandée, puis saisissez la Commission de conciliation.".to_string(),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::{lease, reference};
    use proptest::prelude::*;

    #[test]
    fn test_rent_below_ceiling_is_compliant() {
        assert!(check_rent_ceiling(&lease(), &reference()).is_none());
    }

    #[test]
    fn test_rent_above_ceiling_is_illegal() {
        let mut l = lease();
        l.rent_excluding_charges = 1500.0;

        let issue = check_rent_ceiling(&l, &reference()).unwrap();
        assert_eq!(issue.id, "rent-ceiling");
        assert_eq!(issue.severity, IssueSeverity::Illegal);
        assert_eq!(issue.category, IssueCategory::Rent);
        assert!(issue.description.contains("37.50 €/m²"));
        assert!(issue.description.contains("3.90 €/m²"));
        assert!(issue.description.contains("156.00 €"));
    }

    #[test]
    fn test_rent_exactly_at_ceiling_is_compliant() {
        let mut l = lease();
        l.rent_excluding_charges = 1344.0;
        assert!(check_rent_ceiling(&l, &reference()).is_none());
    }

    #[test]
    fn test_one_euro_above_ceiling_is_illegal() {
        let mut l = lease();
        l.rent_excluding_charges = 1345.0;
        assert!(check_rent_ceiling(&l, &reference()).is_some());
    }

    proptest! {
        /// Property: the ceiling issue fires iff rent per m² exceeds the max rate
        #[test]
        fn ceiling_fires_iff_above_max(rent in 100.0f64..5000.0, surface in 9.0f64..200.0) {
            let mut l = lease();
            l.rent_excluding_charges = rent;
            l.surface = surface;
            let r = reference();

            let issue = check_rent_ceiling(&l, &r);
            prop_assert_eq!(issue.is_some(), rent / surface > r.max_rent);
        }
    }
}
