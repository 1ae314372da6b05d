// Mandatory lease mentions, article 3-3 of the loi du 6 juillet 1989
use shared_types::{ComplianceIssue, IssueCategory, IssueSeverity, LeaseData};

const MENTIONS_LEGAL_REFERENCE: &str = "Article 3-3 de la loi du 6 juillet 1989";

/// A disclosure the lease must carry
struct MandatoryMention {
    slug: &'static str,
    label: &'static str,
}

const REFERENCE_RENT: MandatoryMention = MandatoryMention {
    slug: "reference-rent",
    label: "loyer de référence",
};

const MAX_RENT: MandatoryMention = MandatoryMention {
    slug: "max-rent",
    label: "loyer de référence majoré",
};

/// Checks the reference rent and max reference rent disclosures.
///
/// `Some(false)` is a red flag, `None` (not determined) needs attention.
pub fn check_mandatory_mentions(lease: &LeaseData) -> Vec<ComplianceIssue> {
    let mut issues = Vec::new();

    issues.extend(check_mention(&REFERENCE_RENT, lease.mentions_reference_rent));
    issues.extend(check_mention(&MAX_RENT, lease.mentions_max_rent));

    issues
}

fn check_mention(mention: &MandatoryMention, present: Option<bool>) -> Option<ComplianceIssue> {
    match present {
        Some(true) => None,
        Some(false) => Some(ComplianceIssue {
            id: format!("missing-{}", mention.slug),
            severity: IssueSeverity::RedFlag,
            category: IssueCategory::Rent,
            title: format!("Mention manquante : {}", mention.label),
            description: format!(
                "Le bail doit obligatoirement mentionner le {} applicable. Cette mention est absente de votre bail.",
                mention.label
            ),
            legal_reference: MENTIONS_LEGAL_REFERENCE.to_string(),
            legal_url: None,
            recommendation: Some(format!(
                "Demandez à votre bailleur de vous communiquer le {} applicable.",
                mention.label
            )),
        }),
        None => Some(ComplianceIssue {
            id: format!("unknown-{}", mention.slug),
            severity: IssueSeverity::Attention,
            category: IssueCategory::Rent,
            title: format!("Vérifiez la mention du {}", mention.label),
            description: format!(
                "Votre bail doit mentionner le {}. Vérifiez que cette information figure bien dans votre contrat.",
                mention.label
            ),
            legal_reference: MENTIONS_LEGAL_REFERENCE.to_string(),
            legal_url: None,
            recommendation: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::lease;

    #[test]
    fn test_both_mentions_present() {
        assert!(check_mandatory_mentions(&lease()).is_empty());
    }

    #[test]
    fn test_missing_reference_rent_is_red_flag() {
        let mut l = lease();
        l.mentions_reference_rent = Some(false);

        let issues = check_mandatory_mentions(&l);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "missing-reference-rent");
        assert_eq!(issues[0].severity, IssueSeverity::RedFlag);
    }

    #[test]
    fn test_missing_max_rent_is_red_flag() {
        let mut l = lease();
        l.mentions_max_rent = Some(false);

        let issues = check_mandatory_mentions(&l);
        assert!(issues
            .iter()
            .any(|i| i.id == "missing-max-rent" && i.severity == IssueSeverity::RedFlag));
    }

    #[test]
    fn test_unknown_mentions_need_attention() {
        let mut l = lease();
        l.mentions_reference_rent = None;
        l.mentions_max_rent = None;

        let issues = check_mandatory_mentions(&l);
        let ids: Vec<_> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["unknown-reference-rent", "unknown-max-rent"]);
        assert!(issues.iter().all(|i| i.severity == IssueSeverity::Attention));
    }
}
