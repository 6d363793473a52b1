//! Invoicing domain module.
//!
//! This crate contains the business rules for invoice drafts: per-line
//! totals, VAT, and assembly into immutable invoice values. All money
//! arithmetic uses exact decimals (`rust_decimal`), never floating point,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod calc;
pub mod invoice;

pub use calc::{compute_line, compute_vat, InvoiceError, VatCalculator, CURRENCY_SCALE};
pub use invoice::{
    DraftInvoice, Invoice, InvoiceAssembler, InvoiceLineItem, InvoiceNumber, Recipient,
};
