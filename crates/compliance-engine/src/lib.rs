//! Rent-control compliance rules for Paris residential leases
//!
//! Pure, synchronous logic: no rule performs I/O. The geocoding and
//! rent-reference collaborators live in the `rent-check` crate, which feeds
//! their output into [`ComplianceEngine::check`].

pub mod actions;
pub mod calendar;
pub mod constants;
pub mod rules;
pub mod verdict;

pub use actions::action_steps;
pub use calendar::determine_reference_year;
pub use verdict::{determine_verdict, round2};

use shared_types::{ComplianceIssue, LeaseData, RentReference};

/// ComplianceEngine entry point
#[derive(Debug, Clone, Copy)]
pub struct ComplianceEngine;

impl ComplianceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run every rule against the lease.
    ///
    /// Rules are evaluated unconditionally and concatenated in a fixed order,
    /// which is also the display order: rent control, lease validity,
    /// financial, decency.
    pub fn check(&self, lease: &LeaseData, reference: &RentReference) -> Vec<ComplianceIssue> {
        let mut issues = Vec::new();

        // Rent control
        issues.extend(rules::rent::check_rent_ceiling(lease, reference));
        issues.extend(rules::complement::check_complement_loyer(lease, reference));
        issues.extend(rules::mentions::check_mandatory_mentions(lease));

        // Lease validity
        issues.extend(rules::duration::check_lease_duration(lease));
        issues.extend(rules::lease_type::check_lease_type(lease));

        // Financial
        issues.extend(rules::deposit::check_deposit_amount(lease));
        issues.extend(rules::agency_fees::check_agency_fees(lease));

        // Decency
        issues.extend(rules::decency::check_surface_plausibility(lease, reference));
        issues.extend(rules::decency::check_dpe(lease));

        issues
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}
