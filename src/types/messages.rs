//! Message method responses

use serde::Deserialize;

/// Response for `/messages/sendText` and `/messages/editText`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub ok: bool,
    /// Set when `ok` is true
    pub msg_id: Option<String>,
    /// Set when `ok` is false
    pub description: Option<String>,
}

/// Response for `/messages/answerCallbackQuery`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackAnswerResponse {
    pub ok: bool,
    pub description: Option<String>,
}
