//! Wire types for the Bot API
//!
//! Request and response bodies use camelCase field names on the wire.
//! Everything here is built per call and discarded with the response.

pub mod chats;
pub mod events;
pub mod files;
pub mod keyboard;
pub mod messages;

pub use chats::{ChatInfoResponse, ChatMember, ChatType, CreateChatResponse};
pub use events::{Event, EventPayload, EventType, EventsResponse, User};
pub use files::FileInfoResponse;
pub use keyboard::{ButtonStyle, InlineKeyboardButton, Keyboard};
pub use messages::{CallbackAnswerResponse, MessageResponse};
