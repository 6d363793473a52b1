//! Service wiring: compliance rules, invoice assembler, chat router, users.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;

use kontor_chat::{ChatRouter, DraftHandler, KeywordClassifier};
use kontor_compliance::ComplianceRuleTable;
use kontor_invoicing::{
    DraftInvoice, Invoice, InvoiceAssembler, InvoiceError, InvoiceLineItem, InvoiceNumber,
    Recipient, VatCalculator,
};
use kontor_users::{NewUser, UserDirectory};

/// Process-wide services shared by all handlers.
pub struct AppServices {
    pub compliance: ComplianceRuleTable,
    pub users: UserDirectory,
    pub chat: ChatRouter<KeywordClassifier, DemoDraftService>,
}

/// Build all services.
///
/// The rule table is constructed once here and injected; nothing reads it as
/// ambient global state.
pub fn build_services() -> anyhow::Result<AppServices> {
    let compliance = ComplianceRuleTable::german();
    tracing::info!(constants = compliance.len(), "compliance rule table loaded");

    let assembler = InvoiceAssembler::new(VatCalculator::from_rules(&compliance)?);
    let chat = ChatRouter::new(KeywordClassifier::german(), DemoDraftService::new(assembler));

    Ok(AppServices {
        compliance,
        users: UserDirectory::new(),
        chat,
    })
}

/// Create the initial superuser when `KONTOR_ADMIN_EMAIL` is set.
///
/// Mirrors the usual "create the first admin at deploy time" flow; a missing
/// variable simply skips the step.
pub fn bootstrap_admin_from_env(users: &UserDirectory) {
    let Ok(email) = std::env::var("KONTOR_ADMIN_EMAIL") else {
        return;
    };

    let mut admin = NewUser::new(email).with_name(
        std::env::var("KONTOR_ADMIN_FIRST_NAME").unwrap_or_else(|_| "System".to_string()),
        std::env::var("KONTOR_ADMIN_LAST_NAME").unwrap_or_else(|_| "Administrator".to_string()),
    );
    if let Ok(password) = std::env::var("KONTOR_ADMIN_PASSWORD") {
        admin = admin.with_password(password);
    }

    match users.create_superuser(admin) {
        Ok(user) => tracing::info!(email = %user.email, "admin user bootstrapped"),
        Err(err) => tracing::warn!(error = %err, "admin bootstrap skipped"),
    }
}

/// Demo invoice drafts for the chat preview.
///
/// No persistence yet: the draft content is fixed, but number, date and VAT
/// rate already flow through the assembler like real inputs. Numbers come
/// from an atomic sequence so concurrent previews never share one.
pub struct DemoDraftService {
    assembler: InvoiceAssembler,
    sequence: AtomicU64,
}

impl DemoDraftService {
    pub fn new(assembler: InvoiceAssembler) -> Self {
        Self {
            assembler,
            sequence: AtomicU64::new(1),
        }
    }

    fn next_number(&self, issue_date: NaiveDate) -> InvoiceNumber {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        InvoiceNumber::new(format!("RE-{}-{seq:05}", issue_date.year()))
    }
}

impl DraftHandler for DemoDraftService {
    fn invoice_preview(&self) -> Result<Invoice, InvoiceError> {
        let issue_date = Utc::now().date_naive();

        self.assembler.assemble(DraftInvoice {
            number: self.next_number(issue_date),
            issue_date,
            recipient: Recipient {
                name: "Max Mustermann".to_string(),
                company: "Musterfirma GmbH".to_string(),
            },
            lines: vec![
                InvoiceLineItem::new(
                    "Beratungspauschale Projektaufnahme",
                    1,
                    Decimal::new(80000, 2),
                ),
                InvoiceLineItem::new("Anfahrt und Einrichtung", 1, Decimal::new(15000, 2)),
            ],
            vat_rate_percent: self.assembler.default_vat_rate_percent(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn demo_draft_matches_published_totals() {
        let services = build_services().unwrap();
        let reply = services.chat.route("Rechnung").unwrap();

        let kontor_chat::ChatOutcome::InvoicePreview { invoice, .. } = reply.outcome else {
            panic!("expected invoice preview");
        };

        assert_eq!(invoice.subtotal(), dec("950.00"));
        assert_eq!(invoice.vat_amount(), dec("180.50"));
        assert_eq!(invoice.total(), dec("1130.50"));
        assert_eq!(invoice.lines().len(), 2);
    }

    #[test]
    fn draft_numbers_are_sequential_and_unique() {
        let services = build_services().unwrap();
        let drafts = &services.chat;

        let first = drafts.route("Rechnung").unwrap();
        let second = drafts.route("Rechnung").unwrap();

        let number = |reply: kontor_chat::ChatReply| match reply.outcome {
            kontor_chat::ChatOutcome::InvoicePreview { invoice, .. } => {
                invoice.number().as_str().to_string()
            }
            _ => panic!("expected invoice preview"),
        };

        assert_ne!(number(first), number(second));
    }
}
