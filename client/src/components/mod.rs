//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat sidebar, room cards, and the room form while
//! reading/writing shared state from Leptos context providers.

pub mod chat_widget;
pub mod image_zoom;
pub mod room_card;
pub mod room_catalog;
pub mod room_form;
