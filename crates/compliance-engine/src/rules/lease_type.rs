use shared_types::{ComplianceIssue, IssueCategory, IssueSeverity, LeaseData, LeaseType};

/// A civil-code lease cannot govern a main residence (article 2 of the loi du 6 juillet 1989)
pub fn check_lease_type(lease: &LeaseData) -> Vec<ComplianceIssue> {
    let mut issues = Vec::new();

    if lease.lease_type == Some(LeaseType::CodeCivil) {
        issues.push(ComplianceIssue {
            id: "code-civil-residence".to_string(),
            severity: IssueSeverity::Illegal,
            category: IssueCategory::LeaseValidity,
            title: "Bail code civil pour une résidence principale".to_string(),
            description: "Un bail régi par le code civil ne peut pas être utilisé pour une résidence principale. Les baux de résidence principale doivent être régis par la loi du 6 juillet 1989.".to_string(),
            legal_reference: "Article 2 de la loi du 6 juillet 1989".to_string(),
            legal_url: None,
            recommendation: Some(
                "Demandez la requalification du bail en bail loi de 1989, qui vous accorde davantage de protections.".to_string(),
            ),
        });
    }

    issues
}
