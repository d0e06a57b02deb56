//! Room-catalog state for the landing page.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::RoomOption;

/// Rooms listed from `rooms.json`.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub rooms: Vec<RoomOption>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CatalogState {
    /// Initial state for a catalog whose load starts on mount, so the server
    /// render and the first hydrated render agree.
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<RoomOption>, String>) {
        self.loading = false;
        match result {
            Ok(rooms) => self.rooms = rooms,
            Err(e) => self.error = Some(e),
        }
    }
}
