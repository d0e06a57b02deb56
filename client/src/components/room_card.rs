//! Card summarizing one room option.

use leptos::prelude::*;

use crate::net::types::RoomOption;

/// A room card as shown in chat replies and the catalog.
#[component]
pub fn RoomCard(room: RoomOption) -> impl IntoView {
    let RoomOption { name, price, area, features, style, max_occupancy } = room;

    view! {
        <div class="room-card">
            <div class="room-card__name">{name}</div>
            <dl class="room-card__details">
                <dt>"價格"</dt>
                <dd class="room-card__price">{price}</dd>
                <dt>"面積"</dt>
                <dd>{area}</dd>
                <dt>"特色"</dt>
                <dd>{features}</dd>
                <dt>"風格"</dt>
                <dd>{style}</dd>
                <dt>"最多入住"</dt>
                <dd>{max_occupancy}</dd>
            </dl>
        </div>
    }
}
