//! Per-request routing: classify, then dispatch.

use serde::Serialize;

use kontor_invoicing::{Invoice, InvoiceError};

use crate::intent::{ChatIntent, IntentClassifier};

/// Reply shown when no intent matches.
pub const FALLBACK_REPLY: &str =
    "Das habe ich nicht verstanden. Versuchen Sie: \"Rechnung erstellen\"";

/// Message accompanying an invoice preview.
pub const PREVIEW_REPLY: &str =
    "Ich habe einen Rechnungsentwurf für Sie erstellt. Bitte überprüfen Sie die Details:";

/// Dispatch state of one chat turn.
///
/// A turn starts in `AwaitingInput` and moves to `Dispatched` at most once;
/// `Dispatched` is terminal for the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnState {
    AwaitingInput,
    Dispatched,
}

/// Produces the invoice preview a dispatched turn responds with.
///
/// Kept behind a trait so the router stays decoupled from how drafts are
/// built (demo data today, persisted drafts later).
pub trait DraftHandler: Send + Sync + 'static {
    fn invoice_preview(&self) -> Result<Invoice, InvoiceError>;
}

/// What a routed turn produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChatOutcome {
    InvoicePreview { message: String, invoice: Invoice },
    NotUnderstood { message: String },
}

/// Routed turn: outcome plus the terminal dispatch state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub outcome: ChatOutcome,
    pub state: TurnState,
}

/// Classifies a message and dispatches matched intents.
#[derive(Debug, Clone)]
pub struct ChatRouter<C, H> {
    classifier: C,
    drafts: H,
}

impl<C, H> ChatRouter<C, H>
where
    C: IntentClassifier,
    H: DraftHandler,
{
    pub fn new(classifier: C, drafts: H) -> Self {
        Self { classifier, drafts }
    }

    /// Route one message.
    ///
    /// `CreateInvoice` dispatches to the draft handler; anything else stays
    /// in `AwaitingInput` and answers with the fallback reply (a UX
    /// fallback, not an error). Handler failures propagate.
    pub fn route(&self, message: &str) -> Result<ChatReply, InvoiceError> {
        let mut state = TurnState::AwaitingInput;

        match self.classifier.classify(message) {
            ChatIntent::CreateInvoice => {
                let invoice = self.drafts.invoice_preview()?;
                state = TurnState::Dispatched;
                tracing::debug!(number = %invoice.number(), "chat turn dispatched to invoice preview");
                Ok(ChatReply {
                    outcome: ChatOutcome::InvoicePreview {
                        message: PREVIEW_REPLY.to_string(),
                        invoice,
                    },
                    state,
                })
            }
            ChatIntent::Unknown => Ok(ChatReply {
                outcome: ChatOutcome::NotUnderstood {
                    message: FALLBACK_REPLY.to_string(),
                },
                state,
            }),
        }
    }
}
