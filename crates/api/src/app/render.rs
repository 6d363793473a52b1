//! HTML chat fragments.
//!
//! The chat endpoint answers with server-rendered partials (chat bubbles),
//! not JSON. Fragments are small enough that we build them by hand; user-
//! supplied text is escaped before interpolation.

use std::fmt::Write as _;

use rust_decimal::{Decimal, RoundingStrategy};

use kontor_chat::{ChatOutcome, ChatReply};
use kontor_invoicing::Invoice;

/// Render a routed chat turn as an HTML fragment.
pub fn chat_reply_fragment(reply: &ChatReply) -> String {
    match &reply.outcome {
        ChatOutcome::InvoicePreview { message, invoice } => {
            invoice_preview_fragment(message, invoice)
        }
        ChatOutcome::NotUnderstood { message } => error_fragment(message),
    }
}

/// Chat bubble carrying the invoice preview table.
fn invoice_preview_fragment(message: &str, invoice: &Invoice) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        "<div class=\"chat-message chat-message--ai\">\
         <p>{}</p>\
         <div class=\"invoice-preview\">\
         <header>Rechnung {} vom {}</header>\
         <p class=\"invoice-preview__recipient\">{}, {}</p>\
         <table class=\"invoice-preview__lines\">\
         <thead><tr><th>Beschreibung</th><th>Menge</th><th>Einzelpreis</th><th>Summe</th></tr></thead>\
         <tbody>",
        escape_html(message),
        escape_html(invoice.number().as_str()),
        invoice.issue_date().format("%d.%m.%Y"),
        escape_html(&invoice.recipient().name),
        escape_html(&invoice.recipient().company),
    );

    for (line, line_total) in invoice.lines().iter().zip(invoice.line_totals()) {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&line.description),
            line.quantity,
            format_eur(line.unit_price),
            format_eur(*line_total),
        );
    }

    let _ = write!(
        html,
        "</tbody>\
         <tfoot>\
         <tr><td colspan=\"3\">Zwischensumme</td><td>{}</td></tr>\
         <tr><td colspan=\"3\">USt. {}&nbsp;%</td><td>{}</td></tr>\
         <tr><td colspan=\"3\">Gesamtbetrag</td><td>{}</td></tr>\
         </tfoot>\
         </table>\
         </div>\
         </div>",
        format_eur(invoice.subtotal()),
        invoice.vat_rate_percent(),
        format_eur(invoice.vat_amount()),
        format_eur(invoice.total()),
    );

    html
}

/// Chat bubble for fallback and error replies.
pub fn error_fragment(message: &str) -> String {
    format!(
        "<div class=\"chat-message chat-message--error\"><p>{}</p></div>",
        escape_html(message)
    )
}

/// Format a decimal amount as German currency (`1.130,50 €`).
pub fn format_eur(amount: Decimal) -> String {
    let amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let plain = format!("{amount:.2}");
    let digits = plain.trim_start_matches('-');
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if plain.starts_with('-') { "-" } else { "" };
    format!("{sign}{int_grouped},{frac_part} €")
}

/// Minimal HTML escaping for interpolated text.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn formats_german_currency() {
        assert_eq!(format_eur(dec("1130.50")), "1.130,50 €");
        assert_eq!(format_eur(dec("950.00")), "950,00 €");
        assert_eq!(format_eur(dec("0.5")), "0,50 €");
        assert_eq!(format_eur(dec("1234567.89")), "1.234.567,89 €");
        assert_eq!(format_eur(dec("-12.30")), "-12,30 €");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<b>Hallo & \"Welt\"</b>"),
            "&lt;b&gt;Hallo &amp; &quot;Welt&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn error_fragment_contains_message() {
        let html = error_fragment("Das habe ich nicht verstanden.");
        assert!(html.contains("chat-message--error"));
        assert!(html.contains("Das habe ich nicht verstanden."));
    }
}
