//! Decency of the dwelling: minimum surface and energy performance bans

use crate::constants::{DPE_F_BAN_DATE, DPE_G_BAN_DATE, MIN_LEGAL_SURFACE, SUSPICIOUS_RENT_MULTIPLIER};
use shared_types::{ComplianceIssue, DpeClass, IssueCategory, IssueSeverity, LeaseData, RentReference};

/// Minimum surface, plus a sanity flag on implausible rent per m².
///
/// The sanity flag is independent of the rent-ceiling rule: it points at a
/// likely surface entry error rather than an overcharge.
pub fn check_surface_plausibility(lease: &LeaseData, reference: &RentReference) -> Vec<ComplianceIssue> {
    let mut issues = Vec::new();

    if lease.surface < MIN_LEGAL_SURFACE {
        issues.push(ComplianceIssue {
            id: "small-surface".to_string(),
            severity: IssueSeverity::Illegal,
            category: IssueCategory::Decency,
            title: "Surface habitable inférieure au minimum légal".to_string(),
            description: format!(
                "La surface déclarée ({} m²) est inférieure au minimum légal de {} m² (avec hauteur sous plafond ≥ 2,20 m ou volume ≥ 20 m³).",
                lease.surface, MIN_LEGAL_SURFACE
            ),
            legal_reference: "Article R111-2 du Code de la construction et décret décence du 30 janvier 2002".to_string(),
            legal_url: None,
            recommendation: Some(
                "Un logement de moins de 9 m² ne respecte pas les critères de décence. Vous pouvez demander une mise en conformité ou la résiliation du bail.".to_string(),
            ),
        });
    }

    let rent_per_sqm = lease.rent_per_sqm();
    if rent_per_sqm > reference.max_rent * SUSPICIOUS_RENT_MULTIPLIER {
        issues.push(ComplianceIssue {
            id: "suspicious-rent".to_string(),
            severity: IssueSeverity::Attention,
            category: IssueCategory::Decency,
            title: "Loyer au m² anormalement élevé".to_string(),
            description: format!(
                "Le loyer au m² ({:.2} €) est plus de {} fois supérieur au plafond légal ({:.2} €/m²). Vérifiez que la surface déclarée est correcte.",
                rent_per_sqm, SUSPICIOUS_RENT_MULTIPLIER, reference.max_rent
            ),
            legal_reference: "Vérification de cohérence".to_string(),
            legal_url: None,
            recommendation: None,
        });
    }

    issues
}

/// Rental bans on energy sieves (loi Climat et Résilience, art. 160).
///
/// G is banned from 2025, F from 2028. Before its ban an F dwelling only
/// gets a rent-freeze notice.
pub fn check_dpe(lease: &LeaseData) -> Vec<ComplianceIssue> {
    let mut issues = Vec::new();
    let start = lease.lease_start_date;

    match lease.dpe_class {
        Some(DpeClass::G) if DPE_G_BAN_DATE.is_reached_by(start) => {
            issues.push(ComplianceIssue {
                id: "dpe-g-ban".to_string(),
                severity: IssueSeverity::Illegal,
                category: IssueCategory::Decency,
                title: "Logement classé G : interdiction de location".to_string(),
                description: "Depuis le 1er janvier 2025, les logements classés G au DPE ne peuvent plus être mis en location. Ce bail est illégal.".to_string(),
                legal_reference: "Article 160 de la loi Climat et Résilience (2021)".to_string(),
                legal_url: None,
                recommendation: Some(
                    "Ce logement ne peut légalement pas être loué. Contactez l'ADIL pour connaître vos recours.".to_string(),
                ),
            });
        }
        Some(DpeClass::F) if DPE_F_BAN_DATE.is_reached_by(start) => {
            issues.push(ComplianceIssue {
                id: "dpe-f-ban".to_string(),
                severity: IssueSeverity::Illegal,
                category: IssueCategory::Decency,
                title: "Logement classé F : interdiction de location".to_string(),
                description: "Depuis le 1er janvier 2028, les logements classés F au DPE ne peuvent plus être mis en location.".to_string(),
                legal_reference: "Article 160 de la loi Climat et Résilience (2021)".to_string(),
                legal_url: None,
                recommendation: Some(
                    "Ce logement ne peut légalement pas être loué. Le bailleur doit entreprendre des travaux de rénovation énergétique.".to_string(),
                ),
            });
        }
        Some(DpeClass::F) => {
            issues.push(ComplianceIssue {
                id: "dpe-f-freeze".to_string(),
                severity: IssueSeverity::Attention,
                category: IssueCategory::Decency,
                title: "Logement classé F : loyer gelé".to_string(),
                description: "Les logements classés F au DPE ont un loyer gelé depuis août 2022 (pas de révision ni de réévaluation possible). L'interdiction de location prendra effet en 2028.".to_string(),
                legal_reference: "Loi Climat et Résilience (2021) et loi pouvoir d'achat (2022)".to_string(),
                legal_url: None,
                recommendation: None,
            });
        }
        _ => {}
    }

    issues
}
