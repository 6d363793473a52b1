//! `kontor-compliance`
//!
//! **Responsibility:** statutory thresholds and deadlines for German
//! commercial and tax law (HGB, AO, GoBD, DSGVO, UStG).
//!
//! This crate is pure data: a read-only rule table, fixed at build time and
//! constructed once at process start. Any logic that *interprets* these
//! values (deadline checks, size-class decisions) belongs to the consuming
//! domain crates, not here.

pub mod rules;

pub use rules::{ComplianceConstant, ComplianceError, ComplianceRuleTable};
pub use rules::{
    GDPR_AUTOMATIC_LOCK_DAYS, GOBD_CASH_BOOKING_DAYS, GOBD_LOCKING_PERIOD_OFFSET_MONTHS,
    GOBD_NON_CASH_BOOKING_DAYS, HGB_MICRO_BALANCE_LIMIT, HGB_MICRO_TURNOVER_LIMIT,
    HGB_RETENTION_YEARS_BOOKS, HGB_RETENTION_YEARS_LETTERS, HGB_SMALL_TURNOVER_LIMIT,
    UST_REDUCED_RATE_PERCENT, UST_STANDARD_RATE_PERCENT,
};
