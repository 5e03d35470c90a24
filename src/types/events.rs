//! Event polling types
//!
//! `/events/get` returns everything that happened to the bot since
//! `lastEventId`: new and edited messages, membership changes, pinned
//! messages, and callback button presses.

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

/// Response for `/events/get`
#[derive(Debug, Deserialize)]
pub struct EventsResponse {
    pub ok: bool,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: u64,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub payload: EventPayload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    NewMessage,
    EditedMessage,
    DeletedMessage,
    PinnedMessage,
    UnpinnedMessage,
    NewChatMembers,
    LeftChatMembers,
    CallbackQuery,
}

/// Event payload. Which fields are present depends on the event type.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub msg_id: Option<String>,
    /// Callback query id, present on `callbackQuery` events
    pub query_id: Option<String>,
    /// Button payload, present on `callbackQuery` events
    pub callback_data: Option<String>,
    pub text: Option<String>,
    /// Unix seconds
    pub timestamp: Option<u64>,
    pub chat: Option<Chat>,
    pub from: Option<User>,
    pub new_members: Option<Vec<User>>,
    pub added_by: Option<User>,
    pub left_members: Option<Vec<User>>,
    pub removed_by: Option<User>,
    #[serde(rename = "parts")]
    pub message_parts: Option<Vec<MessagePart>>,
    pub edited_timestamp: Option<u64>,
    /// Message the callback button was attached to
    pub message: Option<Box<EventPayload>>,
}

impl EventPayload {
    /// Event timestamp as UTC time
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        self.timestamp
            .and_then(|t| Utc.timestamp_opt(t as i64, 0).single())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub chat_id: String,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub chat_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nick: Option<String>,
}

/// Non-text message content: stickers, files, forwards, replies
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePart {
    #[serde(rename = "type")]
    pub part_type: MessagePartType,
    pub payload: MessagePartPayload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessagePartType {
    Sticker,
    Mention,
    Voice,
    File,
    Forward,
    Reply,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePartPayload {
    pub file_id: Option<String>,
    pub user_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    pub caption: Option<String>,
    /// Quoted message for forwards and replies
    pub message: Option<serde_json::Value>,
}
