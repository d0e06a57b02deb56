//! Draft state for the admin room-creation form.
//!
//! DESIGN
//! ======
//! The draft holds the six required fields plus the generated image. Every
//! request phase has a `begin_*` and `finish_*`/`fail_*` pair so the pending
//! indicator is always cleared on the same path that handles the response.
//! User-facing messages are returned to the caller, which decides how to show
//! them.

#[cfg(test)]
#[path = "room_form_test.rs"]
mod room_form_test;

use serde_json::Value;

use crate::net::types::{ImageResponse, RoomOption, RoomPayload, parse_recommendation};

pub const INCOMPLETE_MESSAGE: &str = "請填寫所有房型欄位！";
pub const IMAGE_MISSING_MESSAGE: &str = "房型圖片尚未生成！";
pub const IMAGE_FAILED_MESSAGE: &str = "圖片生成失敗";
pub const AUTO_FILL_FAILED_MESSAGE: &str = "自動推薦失敗";
pub const ADD_SUCCESS_MESSAGE: &str = "新增成功!";
pub const ADD_FAILED_MESSAGE: &str = "新增失敗";

/// The six required room fields, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomField {
    Name,
    Price,
    Area,
    Features,
    Style,
    MaxOccupancy,
}

impl RoomField {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Price,
        Self::Area,
        Self::Features,
        Self::Style,
        Self::MaxOccupancy,
    ];

    /// DOM id of the field's input.
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "roomName",
            Self::Price => "roomPrice",
            Self::Area => "roomArea",
            Self::Features => "roomFeatures",
            Self::Style => "roomStyle",
            Self::MaxOccupancy => "roomMaxOccupancy",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "房型名稱",
            Self::Price => "價格",
            Self::Area => "面積",
            Self::Features => "特色",
            Self::Style => "風格",
            Self::MaxOccupancy => "最多入住人數",
        }
    }

    /// Every field holds a display string such as `NT$3,200`, so none may
    /// use a number input (the browser would blank a non-numeric value).
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Name | Self::Price | Self::Area | Self::Features | Self::Style | Self::MaxOccupancy => "text",
        }
    }
}

/// The in-progress room record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomFormDraft {
    pub name: String,
    pub price: String,
    pub area: String,
    pub features: String,
    pub style: String,
    pub max_occupancy: String,
    /// Set only after a successful image generation.
    pub image_url: Option<String>,
}

impl RoomFormDraft {
    pub fn field(&self, field: RoomField) -> &str {
        match field {
            RoomField::Name => &self.name,
            RoomField::Price => &self.price,
            RoomField::Area => &self.area,
            RoomField::Features => &self.features,
            RoomField::Style => &self.style,
            RoomField::MaxOccupancy => &self.max_occupancy,
        }
    }

    fn field_mut(&mut self, field: RoomField) -> &mut String {
        match field {
            RoomField::Name => &mut self.name,
            RoomField::Price => &mut self.price,
            RoomField::Area => &mut self.area,
            RoomField::Features => &mut self.features,
            RoomField::Style => &mut self.style,
            RoomField::MaxOccupancy => &mut self.max_occupancy,
        }
    }

    /// True when none of the six required fields is empty.
    pub fn is_complete(&self) -> bool {
        RoomField::ALL.iter().all(|f| !self.field(*f).is_empty())
    }

    fn clear_fields(&mut self) {
        for field in RoomField::ALL {
            self.field_mut(field).clear();
        }
    }

    fn fill_from(&mut self, room: RoomOption) {
        self.name = room.name;
        self.price = room.price;
        self.area = room.area;
        self.features = room.features;
        self.style = room.style;
        self.max_occupancy = room.max_occupancy;
    }

    /// Wire body for image generation (no image reference).
    pub fn payload(&self) -> RoomPayload<'_> {
        RoomPayload {
            name: &self.name,
            price: &self.price,
            area: &self.area,
            features: &self.features,
            style: &self.style,
            max_occupancy: &self.max_occupancy,
            image: None,
        }
    }
}

/// Form state: draft, pending indicator, preview, and zoom overlay.
#[derive(Clone, Debug, Default)]
pub struct RoomFormState {
    pub draft: RoomFormDraft,
    pub pending: bool,
    /// Cache-busted `src` of the preview image; `None` while hidden.
    pub preview_src: Option<String>,
    pub zoom_open: bool,
}

impl RoomFormState {
    pub fn set_field(&mut self, field: RoomField, value: String) {
        *self.draft.field_mut(field) = value;
    }

    /// Gate for the "generate image" button.
    pub fn can_generate_image(&self) -> bool {
        self.draft.is_complete()
    }

    pub fn preview_visible(&self) -> bool {
        self.preview_src.as_deref().is_some_and(|src| !src.is_empty())
    }

    /// Reset every field and hide the preview.
    pub fn clear(&mut self) {
        self.draft.clear_fields();
        self.draft.image_url = None;
        self.preview_src = None;
        self.zoom_open = false;
    }

    /// Empty the fields and show the pending indicator before auto-fill.
    pub fn begin_auto_fill(&mut self) {
        self.draft.clear_fields();
        self.pending = true;
    }

    /// Apply a `/auto_recommend` body.
    ///
    /// # Errors
    ///
    /// Returns the server's error message; fields stay empty.
    pub fn finish_auto_fill(&mut self, body: &Value) -> Result<(), String> {
        self.pending = false;
        let room = parse_recommendation(body)?;
        self.draft.fill_from(room);
        Ok(())
    }

    pub fn fail_auto_fill(&mut self) -> &'static str {
        self.pending = false;
        AUTO_FILL_FAILED_MESSAGE
    }

    pub fn begin_image_generation(&mut self) {
        self.pending = true;
    }

    /// Apply a `/generate_room_image` body; `now_ms` busts the browser cache.
    ///
    /// # Errors
    ///
    /// Returns the server's error message; the preview is left unchanged.
    pub fn finish_image_generation(&mut self, response: ImageResponse, now_ms: u64) -> Result<(), String> {
        self.pending = false;
        if let Some(error) = response.error.filter(|e| !e.is_empty()) {
            return Err(error);
        }
        if let Some(url) = response.image_url.filter(|u| !u.is_empty()) {
            self.preview_src = Some(cache_busted_url(&url, now_ms));
            self.draft.image_url = Some(url);
        }
        Ok(())
    }

    pub fn fail_image_generation(&mut self) -> &'static str {
        self.pending = false;
        IMAGE_FAILED_MESSAGE
    }

    /// Wire body for room creation, including the generated image.
    ///
    /// # Errors
    ///
    /// Returns the message to alert when a field is empty or no image has
    /// been generated; no request should be made.
    pub fn submission(&self) -> Result<RoomPayload<'_>, &'static str> {
        if !self.draft.is_complete() {
            return Err(INCOMPLETE_MESSAGE);
        }
        let image = self
            .draft
            .image_url
            .as_deref()
            .filter(|url| !url.is_empty() && self.preview_visible())
            .ok_or(IMAGE_MISSING_MESSAGE)?;
        Ok(RoomPayload { image: Some(image), ..self.draft.payload() })
    }

    /// Open the zoom overlay; ignored while no preview is shown.
    pub fn open_zoom(&mut self) {
        if self.preview_visible() {
            self.zoom_open = true;
        }
    }

    pub fn close_zoom(&mut self) {
        self.zoom_open = false;
    }
}

/// Append a `t=<ms>` query parameter so a regenerated image is refetched.
pub fn cache_busted_url(url: &str, now_ms: u64) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}t={now_ms}")
}

/// Message to alert after a rejected `/add_room`.
pub fn add_room_failure_message(error: Option<&str>) -> String {
    error
        .filter(|e| !e.is_empty())
        .unwrap_or(ADD_FAILED_MESSAGE)
        .to_owned()
}
