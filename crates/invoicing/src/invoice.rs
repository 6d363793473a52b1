//! Invoice value model and assembler.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kontor_core::{InvoiceId, ValueObject};

use crate::calc::{self, InvoiceError, VatCalculator};

// ─────────────────────────────────────────────────────────────────────────────
// Value types
// ─────────────────────────────────────────────────────────────────────────────

/// Human-readable invoice number (e.g. `RE-2025-00042`).
///
/// Uniqueness is the caller's concern: numbers come from a sequence, not from
/// this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Invoice recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    pub company: String,
}

impl ValueObject for Recipient {}

/// One invoice position: what, how many, at which unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub description: String,
    /// Must be positive.
    pub quantity: i64,
    /// Non-negative, currency scale (two fractional digits).
    pub unit_price: Decimal,
}

impl InvoiceLineItem {
    pub fn new(description: impl Into<String>, quantity: i64, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// Derived line total (quantity × unit price, exact).
    pub fn line_total(&self) -> Result<Decimal, InvoiceError> {
        calc::compute_line(self.quantity, self.unit_price)
    }
}

impl ValueObject for InvoiceLineItem {}

// ─────────────────────────────────────────────────────────────────────────────
// Draft → Invoice
// ─────────────────────────────────────────────────────────────────────────────

/// Input for [`InvoiceAssembler::assemble`].
///
/// Number, issue date and VAT rate are explicit inputs rather than literals
/// baked into the engine, so callers decide numbering and rate policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftInvoice {
    pub number: InvoiceNumber,
    pub issue_date: NaiveDate,
    pub recipient: Recipient,
    pub lines: Vec<InvoiceLineItem>,
    pub vat_rate_percent: Decimal,
}

/// Immutable assembled invoice.
///
/// # Invariants
/// - `subtotal` is the exact sum of the line totals.
/// - `vat_amount` = `subtotal` × rate / 100, rounded half-to-even to cents.
/// - `total` = `subtotal` + `vat_amount`.
///
/// The monetary fields are derived by the assembler and never set
/// independently; fields are private so the invariants cannot be broken after
/// assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    id: InvoiceId,
    number: InvoiceNumber,
    issue_date: NaiveDate,
    recipient: Recipient,
    lines: Vec<InvoiceLineItem>,
    line_totals: Vec<Decimal>,
    subtotal: Decimal,
    vat_rate_percent: Decimal,
    vat_amount: Decimal,
    total: Decimal,
}

impl Invoice {
    pub fn id(&self) -> InvoiceId {
        self.id
    }

    pub fn number(&self) -> &InvoiceNumber {
        &self.number
    }

    pub fn issue_date(&self) -> NaiveDate {
        self.issue_date
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn lines(&self) -> &[InvoiceLineItem] {
        &self.lines
    }

    /// Derived totals, index-aligned with [`Invoice::lines`].
    pub fn line_totals(&self) -> &[Decimal] {
        &self.line_totals
    }

    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    pub fn vat_rate_percent(&self) -> Decimal {
        self.vat_rate_percent
    }

    pub fn vat_amount(&self) -> Decimal {
        self.vat_amount
    }

    pub fn total(&self) -> Decimal {
        self.total
    }
}

/// Composes validated line items into an immutable [`Invoice`].
#[derive(Debug, Clone, Copy)]
pub struct InvoiceAssembler {
    vat: VatCalculator,
}

impl InvoiceAssembler {
    pub fn new(vat: VatCalculator) -> Self {
        Self { vat }
    }

    /// The jurisdiction's default VAT rate (for callers building drafts).
    pub fn default_vat_rate_percent(&self) -> Decimal {
        self.vat.default_rate_percent()
    }

    /// Assemble a draft into an invoice value.
    ///
    /// Deterministic: identical drafts assemble to identical invoices (the id
    /// is derived from the invoice number, not generated). Fails with
    /// [`InvoiceError::EmptyInvoice`] when the draft has no lines; line and
    /// rate validation errors propagate from the calculator.
    pub fn assemble(&self, draft: DraftInvoice) -> Result<Invoice, InvoiceError> {
        if draft.lines.is_empty() {
            return Err(InvoiceError::EmptyInvoice);
        }

        let mut line_totals = Vec::with_capacity(draft.lines.len());
        let mut subtotal = Decimal::ZERO;
        for line in &draft.lines {
            let line_total = line.line_total()?;
            subtotal = subtotal
                .checked_add(line_total)
                .ok_or(InvoiceError::AmountOverflow)?;
            line_totals.push(line_total);
        }

        let vat_amount = calc::compute_vat(subtotal, draft.vat_rate_percent)?;
        let total = subtotal
            .checked_add(vat_amount)
            .ok_or(InvoiceError::AmountOverflow)?;

        Ok(Invoice {
            id: invoice_id_for(&draft.number),
            number: draft.number,
            issue_date: draft.issue_date,
            recipient: draft.recipient,
            lines: draft.lines,
            line_totals,
            subtotal,
            vat_rate_percent: draft.vat_rate_percent,
            vat_amount,
            total,
        })
    }
}

/// Stable id derived from the invoice number (UUIDv5).
///
/// Keeps assembly deterministic: re-assembling the same draft yields the same
/// invoice value, id included.
fn invoice_id_for(number: &InvoiceNumber) -> InvoiceId {
    let uuid = Uuid::new_v5(
        &Uuid::NAMESPACE_URL,
        format!("kontor:invoice:{number}").as_bytes(),
    );
    InvoiceId::from_uuid(uuid)
}
