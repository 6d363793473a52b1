//! Intent classification (keyword matching, for now).

/// What the user asked for, as a tagged variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatIntent {
    /// The user wants an invoice draft.
    CreateInvoice,
    /// Nothing we recognize.
    Unknown,
}

/// Maps free text to a [`ChatIntent`].
///
/// Implementations must be pure: same message, same intent.
pub trait IntentClassifier: Send + Sync + 'static {
    fn classify(&self, message: &str) -> ChatIntent;
}

/// Case-insensitive keyword matcher.
///
/// Matches when any trigger keyword occurs as a substring of the lowercased
/// message ("Ich möchte eine Rechnung" → `CreateInvoice`).
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    triggers: Vec<String>,
}

impl KeywordClassifier {
    pub fn new(triggers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            triggers: triggers
                .into_iter()
                .map(|t| t.into().to_lowercase())
                .collect(),
        }
    }

    /// German default: "Rechnung" plus the English "invoice".
    pub fn german() -> Self {
        Self::new(["rechnung", "invoice"])
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::german()
    }
}

impl IntentClassifier for KeywordClassifier {
    fn classify(&self, message: &str) -> ChatIntent {
        let message = message.to_lowercase();
        if self.triggers.iter().any(|t| message.contains(t.as_str())) {
            ChatIntent::CreateInvoice
        } else {
            ChatIntent::Unknown
        }
    }
}
