//! Statutory thresholds for Paris rent control (loi du 6 juillet 1989 and later reforms)

use crate::calendar::EffectiveDate;

/// Minimum habitable surface in m² (décret décence du 30 janvier 2002)
pub const MIN_LEGAL_SURFACE: f64 = 9.0;

/// Rent per m² above this multiple of the ceiling is flagged as a likely data entry error
pub const SUSPICIOUS_RENT_MULTIPLIER: f64 = 3.0;

/// Rent complements banned for DPE F/G from this date (loi 3DS, art. 159)
pub const COMPLEMENT_LOYER_DPE_BAN_DATE: EffectiveDate = EffectiveDate::new(2022, 8, 18);

/// DPE G dwellings may no longer be let (loi Climat et Résilience, art. 160)
pub const DPE_G_BAN_DATE: EffectiveDate = EffectiveDate::new(2025, 1, 1);

/// DPE F dwellings may no longer be let
pub const DPE_F_BAN_DATE: EffectiveDate = EffectiveDate::new(2028, 1, 1);

// Deposit cap, in months of rent excluding charges (art. 22 and 25-6)
pub const DEPOSIT_MAX_MONTHS_UNFURNISHED: f64 = 1.0;
pub const DEPOSIT_MAX_MONTHS_FURNISHED: f64 = 2.0;

// Agency fees chargeable to the tenant in zone très tendue, per m² (décret du 1er août 2014)
pub const AGENCY_FEES_CEILING_PER_SQM: f64 = 12.0;
pub const AGENCY_FEES_ETAT_DES_LIEUX_PER_SQM: f64 = 3.0;

// Lease durations, in months
pub const MIN_LEASE_DURATION_UNFURNISHED: u32 = 36;
pub const MIN_LEASE_DURATION_FURNISHED: u32 = 12;
pub const MOBILITE_DURATION_MIN: u32 = 1;
pub const MOBILITE_DURATION_MAX: u32 = 10;

/// Reference tables group "4 rooms and more" in a single bucket
pub const MAX_ROOM_BUCKET: u32 = 4;
