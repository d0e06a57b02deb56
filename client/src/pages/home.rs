//! Landing page listing the hotel's rooms.

use leptos::prelude::*;

use crate::components::room_catalog::RoomCatalog;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="page-title">"歡迎光臨"</h1>
            <p class="page-subtitle">"瀏覽房型，或打開右側的訂房小幫手詢問推薦。"</p>
            <RoomCatalog/>
        </div>
    }
}
