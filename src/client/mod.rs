//! Bot API HTTP client
//!
//! Every public method is one blocking request/response round trip on the
//! caller's thread. Message methods POST form-encoded bodies, polling and
//! lookup methods GET with query strings; responses are deserialized into
//! the types in [`crate::types`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::BotApiSettings;
use crate::errors::ApiError;
use crate::types::{
    CallbackAnswerResponse, ChatInfoResponse, ChatMember, CreateChatResponse, EventsResponse,
    FileInfoResponse, InlineKeyboardButton, MessageResponse,
};

/// Default long-poll wait for `/events/get`, in seconds
pub const DEFAULT_POLL_TIME: u64 = 30;

/// Chats are created with between 2 and 30 members
const CHAT_MEMBERS_MIN: usize = 2;
const CHAT_MEMBERS_MAX: usize = 30;

/// Synchronous Bot API client
pub struct BotApiClient {
    settings: Arc<dyn BotApiSettings>,
    token: String,
    api_url: String,
    client: Client,
}

impl BotApiClient {
    pub fn new(settings: Arc<dyn BotApiSettings>) -> Self {
        let token = settings.token();
        let api_url = settings.api_url();
        Self {
            settings,
            token,
            api_url,
            client: Client::new(),
        }
    }

    /// Re-read token and base URL from the settings source
    pub fn update_settings(&mut self) {
        self.token = self.settings.token();
        self.api_url = self.settings.api_url();
    }

    /// Full URL for an API method path
    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), method)
    }

    /// Classify the status code, then deserialize the body.
    ///
    /// Statuses in 500..=599 are logged with the method name and surfaced
    /// as [`ApiError::ServerError`]; everything else is handed to serde.
    fn handle_response<T: DeserializeOwned>(
        &self,
        method: &str,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_server_error() {
            let body = response.text().unwrap_or_default();
            tracing::error!(
                "Bot API server error in {}: status = {}, body = {}",
                method,
                status.as_u16(),
                body
            );
            return Err(ApiError::ServerError {
                status: status.as_u16(),
                body,
            });
        }
        response.json().map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Send a text message, optionally with an inline keyboard attached
    pub fn send_message_text(
        &self,
        chat_id: &str,
        text: &str,
        keyboard: Option<&[Vec<InlineKeyboardButton>]>,
    ) -> Result<MessageResponse, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct SendTextForm<'a> {
            token: &'a str,
            chat_id: &'a str,
            text: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            inline_keyboard_markup: Option<String>,
        }

        tracing::debug!("sendText to {}: {}", chat_id, text);

        let form = SendTextForm {
            token: &self.token,
            chat_id,
            text,
            inline_keyboard_markup: encode_keyboard(keyboard)?,
        };

        let response = self
            .client
            .post(self.method_url("messages/sendText"))
            .form(&form)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.handle_response("sendMessageText", response)
    }

    /// Send a plain text message
    pub fn send_text(&self, chat_id: &str, text: &str) -> Result<MessageResponse, ApiError> {
        self.send_message_text(chat_id, text, None)
    }

    /// Replace the text (and keyboard) of an already sent message
    pub fn edit_message_text(
        &self,
        chat_id: &str,
        msg_id: &str,
        text: &str,
        keyboard: Option<&[Vec<InlineKeyboardButton>]>,
    ) -> Result<MessageResponse, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct EditTextForm<'a> {
            token: &'a str,
            chat_id: &'a str,
            msg_id: &'a str,
            text: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            inline_keyboard_markup: Option<String>,
        }

        tracing::debug!("editText in {} msg {}: {}", chat_id, msg_id, text);

        let form = EditTextForm {
            token: &self.token,
            chat_id,
            msg_id,
            text,
            inline_keyboard_markup: encode_keyboard(keyboard)?,
        };

        let response = self
            .client
            .post(self.method_url("messages/editText"))
            .form(&form)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.handle_response("editMessageText", response)
    }

    /// Long-poll for events newer than `last_event_id`, waiting up to
    /// `poll_time` seconds. The request timeout is stretched past the
    /// poll window so the transport does not cut the poll short.
    pub fn get_events(&self, last_event_id: u64, poll_time: u64) -> Result<EventsResponse, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct EventsQuery<'a> {
            token: &'a str,
            last_event_id: u64,
            poll_time: u64,
        }

        tracing::debug!("events/get from {} (poll {}s)", last_event_id, poll_time);

        let response = self
            .client
            .get(self.method_url("events/get"))
            .query(&EventsQuery {
                token: &self.token,
                last_event_id,
                poll_time,
            })
            .timeout(Duration::from_secs(poll_time + 1))
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.handle_response("getEvents", response)
    }

    /// Answer a callback button press, optionally with a notification
    /// text, an alert popup, or a URL to open
    pub fn answer_callback_query(
        &self,
        query_id: &str,
        text: Option<&str>,
        show_alert: bool,
        url: Option<&str>,
    ) -> Result<CallbackAnswerResponse, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct AnswerQuery<'a> {
            token: &'a str,
            query_id: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            text: Option<&'a str>,
            show_alert: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            url: Option<&'a str>,
        }

        tracing::debug!("answerCallbackQuery {}", query_id);

        let response = self
            .client
            .get(self.method_url("messages/answerCallbackQuery"))
            .query(&AnswerQuery {
                token: &self.token,
                query_id,
                text,
                show_alert,
                url,
            })
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.handle_response("answerCallbackQuery", response)
    }

    /// Acknowledge a callback button press without any visible reaction
    pub fn ack_callback_query(&self, query_id: &str) -> Result<CallbackAnswerResponse, ApiError> {
        self.answer_callback_query(query_id, None, false, None)
    }

    /// Fetch metadata for an uploaded file
    pub fn get_file_info(&self, file_id: &str) -> Result<FileInfoResponse, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct FileQuery<'a> {
            token: &'a str,
            file_id: &'a str,
        }

        tracing::debug!("files/getInfo {}", file_id);

        let response = self
            .client
            .get(self.method_url("files/getInfo"))
            .query(&FileQuery {
                token: &self.token,
                file_id,
            })
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.handle_response("getFileInfo", response)
    }

    /// Create a chat on behalf of `creator_token`'s bot. The member list
    /// must hold between 2 and 30 entries; anything else is rejected
    /// before a request is made.
    pub fn create_chat(
        &self,
        creator_token: &str,
        name: &str,
        description: Option<&str>,
        members: &[ChatMember],
        public: bool,
    ) -> Result<CreateChatResponse, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct CreateChatForm<'a> {
            token: &'a str,
            name: &'a str,
            members: String,
            public: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
        }

        if !(CHAT_MEMBERS_MIN..=CHAT_MEMBERS_MAX).contains(&members.len()) {
            return Err(ApiError::InvalidRequest(format!(
                "Chat member count out of range: {}",
                members.len()
            )));
        }

        tracing::debug!("createChat {} with {} members", name, members.len());

        let form = CreateChatForm {
            token: creator_token,
            name,
            members: serde_json::to_string(members).map_err(|e| ApiError::Parse(e.to_string()))?,
            public,
            description,
        };

        let response = self
            .client
            .post(self.method_url("chats/createChat"))
            .form(&form)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.handle_response("createChat", response)
    }

    /// Look up a chat's profile
    pub fn get_chat_info(&self, chat_id: &str) -> Result<ChatInfoResponse, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ChatInfoForm<'a> {
            token: &'a str,
            chat_id: &'a str,
        }

        tracing::debug!("chats/getInfo {}", chat_id);

        let response = self
            .client
            .post(self.method_url("chats/getInfo"))
            .form(&ChatInfoForm {
                token: &self.token,
                chat_id,
            })
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.handle_response("getChatInfo", response)
    }
}

/// Keyboards ride inside the form as a JSON string field
fn encode_keyboard(
    keyboard: Option<&[Vec<InlineKeyboardButton>]>,
) -> Result<Option<String>, ApiError> {
    keyboard
        .map(|k| serde_json::to_string(k).map_err(|e| ApiError::Parse(e.to_string())))
        .transpose()
}
