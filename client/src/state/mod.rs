//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `room_form`, `catalog`, `ui`) so
//! individual components can depend on small focused models. Each is a plain
//! struct provided through Leptos context as `RwSignal<T>`; the DOM is only
//! the rendering target.

pub mod catalog;
pub mod chat;
pub mod room_form;
pub mod ui;
