//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped layout and delegates rendering details to
//! `components`. The chat sidebar lives outside the routes so a conversation
//! survives navigation between pages.

pub mod home;
pub mod room_editor;
