//! Statutory rule table (read-only).
//!
//! Values mirror the published thresholds; each constant carries its legal
//! citation so audit output can name the source.

use serde::Serialize;
use thiserror::Error;

/// Retention period for books, inventories, balance sheets and vouchers.
pub const HGB_RETENTION_YEARS_BOOKS: i64 = 10;

/// Retention period for commercial letters.
pub const HGB_RETENTION_YEARS_LETTERS: i64 = 6;

/// Turnover limit for micro corporations (Kleinstkapitalgesellschaften), EUR.
pub const HGB_MICRO_TURNOVER_LIMIT: i64 = 900_000;

/// Balance-sheet total limit for micro corporations, EUR.
pub const HGB_MICRO_BALANCE_LIMIT: i64 = 450_000;

/// Turnover limit for small corporations, EUR.
pub const HGB_SMALL_TURNOVER_LIMIT: i64 = 15_000_000;

/// Maximum days until cash transactions must be recorded (daily capture).
pub const GOBD_CASH_BOOKING_DAYS: i64 = 1;

/// Maximum days until non-cash transactions must be recorded.
pub const GOBD_NON_CASH_BOOKING_DAYS: i64 = 10;

/// Bookings are locked against modification by the end of the following month.
pub const GOBD_LOCKING_PERIOD_OFFSET_MONTHS: i64 = 1;

/// Automatic lock of inactive customer data after three years.
pub const GDPR_AUTOMATIC_LOCK_DAYS: i64 = 365 * 3;

/// Standard VAT rate, percent.
pub const UST_STANDARD_RATE_PERCENT: i64 = 19;

/// Reduced VAT rate, percent.
pub const UST_REDUCED_RATE_PERCENT: i64 = 7;

/// A named statutory threshold with its legal citation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceConstant {
    pub name: &'static str,
    pub value: i64,
    pub citation: &'static str,
}

const CONSTANTS: &[ComplianceConstant] = &[
    ComplianceConstant {
        name: "HGB_RETENTION_YEARS_BOOKS",
        value: HGB_RETENTION_YEARS_BOOKS,
        citation: "§ 257 Abs. 4 HGB",
    },
    ComplianceConstant {
        name: "HGB_RETENTION_YEARS_LETTERS",
        value: HGB_RETENTION_YEARS_LETTERS,
        citation: "§ 257 Abs. 4 HGB",
    },
    ComplianceConstant {
        name: "HGB_MICRO_TURNOVER_LIMIT",
        value: HGB_MICRO_TURNOVER_LIMIT,
        citation: "§ 267a HGB",
    },
    ComplianceConstant {
        name: "HGB_MICRO_BALANCE_LIMIT",
        value: HGB_MICRO_BALANCE_LIMIT,
        citation: "§ 267a HGB",
    },
    ComplianceConstant {
        name: "HGB_SMALL_TURNOVER_LIMIT",
        value: HGB_SMALL_TURNOVER_LIMIT,
        citation: "§ 267 Abs. 1 HGB",
    },
    ComplianceConstant {
        name: "GOBD_CASH_BOOKING_DAYS",
        value: GOBD_CASH_BOOKING_DAYS,
        citation: "GoBD Rz. 71",
    },
    ComplianceConstant {
        name: "GOBD_NON_CASH_BOOKING_DAYS",
        value: GOBD_NON_CASH_BOOKING_DAYS,
        citation: "GoBD Rz. 72",
    },
    ComplianceConstant {
        name: "GOBD_LOCKING_PERIOD_OFFSET_MONTHS",
        value: GOBD_LOCKING_PERIOD_OFFSET_MONTHS,
        citation: "GoBD Rz. 111",
    },
    ComplianceConstant {
        name: "GDPR_AUTOMATIC_LOCK_DAYS",
        value: GDPR_AUTOMATIC_LOCK_DAYS,
        citation: "Art. 5 Abs. 1 lit. e DSGVO",
    },
    ComplianceConstant {
        name: "UST_STANDARD_RATE_PERCENT",
        value: UST_STANDARD_RATE_PERCENT,
        citation: "§ 12 Abs. 1 UStG",
    },
    ComplianceConstant {
        name: "UST_REDUCED_RATE_PERCENT",
        value: UST_REDUCED_RATE_PERCENT,
        citation: "§ 12 Abs. 2 UStG",
    },
];

/// Compliance lookup error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComplianceError {
    #[error("unknown compliance constant: {0}")]
    UnknownConstant(String),
}

/// Read-only table of statutory thresholds.
///
/// Built once at process start and injected into the services that need it;
/// there is no mutation API and no external override (env/file).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplianceRuleTable {
    constants: &'static [ComplianceConstant],
}

impl ComplianceRuleTable {
    /// The German rule set (the only jurisdiction currently shipped).
    pub fn german() -> Self {
        Self {
            constants: CONSTANTS,
        }
    }

    /// Look up a constant by name.
    pub fn lookup(&self, name: &str) -> Result<i64, ComplianceError> {
        self.get(name)
            .map(|c| c.value)
            .ok_or_else(|| ComplianceError::UnknownConstant(name.to_string()))
    }

    /// Full record for a constant (value + citation), if present.
    pub fn get(&self, name: &str) -> Option<&'static ComplianceConstant> {
        self.constants.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ComplianceConstant> {
        self.constants.iter()
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}

impl Default for ComplianceRuleTable {
    fn default() -> Self {
        Self::german()
    }
}
