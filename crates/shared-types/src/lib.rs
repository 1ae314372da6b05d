pub mod report;
pub mod types;

pub use report::{
    ActionStep, CheckRentRequest, CheckRentResponse, ComplianceIssue, ComplianceReport,
    IssueCategory, IssueSeverity, Verdict,
};
pub use types::{
    ConstructionPeriod, DpeClass, GeocodingResult, LeaseData, LeaseType, RentReference, Zone,
};
