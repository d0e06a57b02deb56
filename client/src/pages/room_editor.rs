//! Admin page for adding a room.

use leptos::prelude::*;

use crate::components::room_form::RoomForm;

#[component]
pub fn RoomEditorPage() -> impl IntoView {
    view! {
        <div class="room-editor-page">
            <h1 class="page-title">"新增房型"</h1>
            <RoomForm/>
        </div>
    }
}
