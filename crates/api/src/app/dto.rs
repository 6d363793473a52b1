use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

/// Form body of `POST /chat/`.
///
/// A missing `message` field is treated as an empty message (and routed to
/// the fallback reply), matching lenient form handling.
#[derive(Debug, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub message: String,
}
