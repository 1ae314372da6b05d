// Complément de loyer, article 17 §II of the loi du 6 juillet 1989
use crate::constants::COMPLEMENT_LOYER_DPE_BAN_DATE;
use shared_types::{ComplianceIssue, IssueCategory, IssueSeverity, LeaseData, RentReference};

/// Validates a declared rent complement. Does nothing when no complement is set.
pub fn check_complement_loyer(lease: &LeaseData, reference: &RentReference) -> Vec<ComplianceIssue> {
    let mut issues = Vec::new();

    if !lease.has_complement_loyer() {
        return issues;
    }

    // Complement only allowed on top of a base rent at or below the ceiling
    let base_rent_per_sqm = lease.rent_per_sqm();
    if base_rent_per_sqm > reference.max_rent {
        issues.push(ComplianceIssue {
            id: "complement-base-rent".to_string(),
            severity: IssueSeverity::Illegal,
            category: IssueCategory::Rent,
            title: "Complément de loyer illégal : loyer de base trop élevé".to_string(),
            description: format!(
                "Le loyer de base ({:.2} €/m²) dépasse déjà le loyer de référence majoré ({:.2} €/m²). Le complément de loyer ne peut s'appliquer que si le loyer de base est inférieur ou égal au loyer de référence majoré.",
                base_rent_per_sqm, reference.max_rent
            ),
            legal_reference: "Article 17 §II de la loi du 6 juillet 1989".to_string(),
            legal_url: None,
            recommendation: Some(
                "Le complément de loyer est nul. Demandez sa suppression et le remboursement des sommes versées.".to_string(),
            ),
        });
    }

    // Any non-empty text counts as a justification; its merit is not assessed
    let justified = lease
        .complement_loyer_justification
        .as_deref()
        .is_some_and(|text| !text.is_empty());
    if !justified {
        issues.push(ComplianceIssue {
            id: "complement-no-justification".to_string(),
            severity: IssueSeverity::RedFlag,
            category: IssueCategory::Rent,
            title: "Complément de loyer sans justification".to_string(),
            description: "Un complément de loyer est mentionné mais aucune justification n'est fournie. La loi impose que le bailleur justifie le complément par des caractéristiques exceptionnelles du logement.".to_string(),
            legal_reference: "Article 17 §II de la loi du 6 juillet 1989".to_string(),
            legal_url: None,
            recommendation: Some(
                "Demandez au bailleur la justification du complément de loyer. Sans justification valable, il peut être contesté.".to_string(),
            ),
        });
    }

    if let Some(dpe) = lease.dpe_class {
        if dpe.is_energy_sieve() && COMPLEMENT_LOYER_DPE_BAN_DATE.is_reached_by(lease.lease_start_date) {
            issues.push(ComplianceIssue {
                id: "complement-dpe-ban".to_string(),
                severity: IssueSeverity::Illegal,
                category: IssueCategory::Rent,
                title: "Complément de loyer interdit (DPE F/G)".to_string(),
                description: format!(
                    "Depuis le 18 août 2022, le complément de loyer est interdit pour les logements classés F ou G au DPE. Votre logement est classé {}.",
                    dpe
                ),
                legal_reference: "Article 159 de la loi 3DS (2022)".to_string(),
                legal_url: None,
                recommendation: Some(
                    "Contestez le complément de loyer auprès de la CDC dans les 3 mois suivant la signature du bail.".to_string(),
                ),
            });
        }
    }

    issues
}
