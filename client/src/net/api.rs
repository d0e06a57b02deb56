//! REST API helpers for communicating with the booking server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a `Result` so failures land on the caller's fallback
//! path (apology bubble, alert) instead of panicking inside a spawned task.
//! The form endpoints decode the JSON body even on non-2xx statuses so a
//! server-supplied `error` string still reaches the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

#[cfg(feature = "hydrate")]
use super::types::{ChatRequest, parse_chat_reply, parse_room_catalog};
use super::types::{AddRoomResponse, ChatReply, ImageResponse, ReplyError, RoomOption, RoomPayload};

pub const CHAT_ENDPOINT: &str = "/chat";
pub const AUTO_RECOMMEND_ENDPOINT: &str = "/auto_recommend";
pub const GENERATE_IMAGE_ENDPOINT: &str = "/generate_room_image";
pub const ADD_ROOM_ENDPOINT: &str = "/add_room";
pub const ROOM_CATALOG_PATH: &str = "/static/rooms.json";

/// Failure of a single API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, abort).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status and no usable body.
    #[error("server responded with status {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The chat reply could not be rendered.
    #[error("malformed reply: {0}")]
    Reply(#[from] ReplyError),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// 2xx statuses, the only ones the chat and catalog calls accept.
#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Pick the error for a form response whose body failed to decode.
///
/// A 2xx with a bad body is a decode problem; anything else is reported by
/// status.
#[cfg(any(test, feature = "hydrate"))]
fn body_failure(ok: bool, status: u16, detail: String) -> ApiError {
    if ok { ApiError::Decode(detail) } else { ApiError::Status(status) }
}

#[cfg(feature = "hydrate")]
async fn read_form_body(resp: gloo_net::http::Response) -> Result<Value, ApiError> {
    let status = resp.status();
    let ok = is_success(status);
    resp.json::<Value>()
        .await
        .map_err(|e| body_failure(ok, status, e.to_string()))
}

/// Send one chat turn via `POST /chat` and decode the structured reply.
///
/// # Errors
///
/// Returns an error on transport failure, any non-2xx status, an undecodable
/// body, or a body without a `response.conclusion`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn send_chat_message(message: &str) -> Result<ChatReply, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(&ChatRequest { message })
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !is_success(resp.status()) {
            return Err(ApiError::Status(resp.status()));
        }
        let body: Value = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(parse_chat_reply(&body)?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Ask the server for a recommended room via `GET /auto_recommend`.
///
/// The raw body is returned; it may carry an `error` field instead of room
/// values.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not JSON.
pub async fn fetch_recommendation() -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(AUTO_RECOMMEND_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_form_body(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Request a preview image for the draft via `POST /generate_room_image`.
///
/// # Errors
///
/// Returns an error if the request fails or the body does not decode.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn generate_room_image(payload: &RoomPayload<'_>) -> Result<ImageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(GENERATE_IMAGE_ENDPOINT)
            .json(payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = read_form_body(resp).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create the room via `POST /add_room`.
///
/// # Errors
///
/// Returns an error if the request fails or the body does not decode.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn add_room(payload: &RoomPayload<'_>) -> Result<AddRoomResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(ADD_ROOM_ENDPOINT)
            .json(payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = read_form_body(resp).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Load the room catalog from `/static/rooms.json`.
///
/// # Errors
///
/// Returns an error on transport failure, a non-2xx status, or a non-JSON body.
pub async fn fetch_room_catalog() -> Result<Vec<RoomOption>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ROOM_CATALOG_PATH)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !is_success(resp.status()) {
            return Err(ApiError::Status(resp.status()));
        }
        let body: Value = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(parse_room_catalog(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
