//! Rule battery, one module per statutory area.
//!
//! Every rule is a pure function of the lease (and, for rent rules, the
//! reference record). Rules never short-circuit each other: the report lists
//! every problem found, not just the first illegal one.

pub mod agency_fees;
pub mod complement;
pub mod decency;
pub mod deposit;
pub mod duration;
pub mod lease_type;
pub mod mentions;
pub mod rent;
