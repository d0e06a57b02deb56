//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Chat replies and auto-recommend payloads carry loosely typed display
//! values (a price may arrive as `2000` or `"2000"`, features as a string or a
//! list), so those are decoded from `serde_json::Value` into display strings.
//! The form endpoints have stable shapes and use derived serde structs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Separator used when a feature list is flattened into one display string.
pub const FEATURE_SEPARATOR: &str = "·";

/// Errors for chat reply bodies that cannot be rendered at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReplyError {
    /// The body has no `response` object.
    #[error("reply has no response object")]
    MissingResponse,

    /// The `response` object has no string `conclusion`.
    #[error("reply has no conclusion text")]
    MissingConclusion,
}

/// Outgoing body for `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// A room summary rendered as a card.
///
/// Every field is an opaque display string; nothing is validated beyond
/// presence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomOption {
    pub name: String,
    pub price: String,
    pub area: String,
    pub features: String,
    pub style: String,
    pub max_occupancy: String,
}

impl RoomOption {
    /// Build a room from a JSON object, reading its own `name` field.
    pub fn from_object(value: &Value) -> Self {
        Self {
            name: display_value(value.get("name")),
            price: display_value(value.get("price")),
            area: display_value(value.get("area")),
            features: display_value(value.get("features")),
            style: display_value(value.get("style")),
            max_occupancy: display_value(value.get("maxOccupancy")),
        }
    }

    /// Build a room from one entry of a `name -> room` mapping.
    ///
    /// The mapping key wins over any `name` inside the value. A value that is
    /// not an object yields a card with the name only.
    pub fn from_entry(name: &str, value: &Value) -> Self {
        let mut room = if value.is_object() {
            Self::from_object(value)
        } else {
            Self::default()
        };
        name.clone_into(&mut room.name);
        room
    }
}

/// A decoded chat reply, ready to append to the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatReply {
    pub conclusion: String,
    pub rooms: Vec<RoomOption>,
}

/// Decode the body of a successful `POST /chat`.
///
/// `rooms` that is missing or not a mapping renders as no cards.
///
/// # Errors
///
/// Returns [`ReplyError`] when there is no `response` object or no string
/// `conclusion`, since nothing could be rendered.
pub fn parse_chat_reply(body: &Value) -> Result<ChatReply, ReplyError> {
    let response = body
        .get("response")
        .filter(|r| r.is_object())
        .ok_or(ReplyError::MissingResponse)?;
    let conclusion = response
        .get("conclusion")
        .and_then(Value::as_str)
        .ok_or(ReplyError::MissingConclusion)?
        .to_owned();
    let rooms = response
        .get("rooms")
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .map(|(name, value)| RoomOption::from_entry(name, value))
                .collect()
        })
        .unwrap_or_default();
    Ok(ChatReply { conclusion, rooms })
}

/// Decode a `GET /auto_recommend` body into form values.
///
/// Falsy values (`false`, `0`, `""`, `null`) fill their field with nothing,
/// so they keep the completeness gate closed.
///
/// # Errors
///
/// Returns the server's `error` string when one is present.
pub fn parse_recommendation(body: &Value) -> Result<RoomOption, String> {
    if let Some(error) = error_field(body) {
        return Err(error);
    }
    let field = |key: &str| display_value(body.get(key).filter(|v| !is_falsy(v)));
    Ok(RoomOption {
        name: field("name"),
        price: field("price"),
        area: field("area"),
        features: field("features"),
        style: field("style"),
        max_occupancy: field("maxOccupancy"),
    })
}

/// `false`, `0`, `""` and `null` leave a form field empty.
#[allow(clippy::float_cmp)]
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Decode the rooms listed in `rooms.json`.
pub fn parse_room_catalog(body: &Value) -> Vec<RoomOption> {
    body.as_array()
        .map(|items| items.iter().filter(|item| item.is_object()).map(RoomOption::from_object).collect())
        .unwrap_or_default()
}

/// Outgoing body for `POST /generate_room_image` and `POST /add_room`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoomPayload<'a> {
    pub name: &'a str,
    pub price: &'a str,
    pub area: &'a str,
    pub features: &'a str,
    pub style: &'a str,
    #[serde(rename = "maxOccupancy")]
    pub max_occupancy: &'a str,
    /// Generated image reference; only sent on room creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'a str>,
}

/// Body of `POST /generate_room_image`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ImageResponse {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /add_room`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AddRoomResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Render a loosely typed JSON value as display text.
///
/// Strings pass through, numbers and booleans use their JSON form, lists are
/// joined with [`FEATURE_SEPARATOR`], and null/missing/objects become empty.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| display_value(Some(item)))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(FEATURE_SEPARATOR),
        Some(Value::Null | Value::Object(_)) | None => String::new(),
    }
}

/// A non-empty string `error` field, if the body carries one.
pub fn error_field(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(Value::as_str)
        .filter(|e| !e.is_empty())
        .map(str::to_owned)
}
