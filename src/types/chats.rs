//! Chat creation and lookup types

use serde::{Deserialize, Serialize};

/// One member of a chat to be created, identified by stable name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMember {
    pub sn: String,
}

impl ChatMember {
    pub fn new(sn: impl Into<String>) -> Self {
        Self { sn: sn.into() }
    }
}

/// Response for `/chats/createChat`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatResponse {
    pub ok: bool,
    /// Stable name of the new chat
    pub sn: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChatType {
    Private,
    Group,
    Channel,
}

/// Response for `/chats/getInfo`. Group fields and person fields are
/// mutually exclusive depending on `chat_type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatInfoResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(rename = "type")]
    pub chat_type: Option<ChatType>,
    pub title: Option<String>,
    pub about: Option<String>,
    pub rules: Option<String>,
    pub invite_link: Option<String>,
    pub public: Option<bool>,
    pub join_moderation: Option<bool>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nick: Option<String>,
    pub is_bot: Option<bool>,
    pub description: Option<String>,
}
