//! Landing-page list of every room in `rooms.json`.

use leptos::prelude::*;

use crate::components::room_card::RoomCard;
use crate::state::catalog::CatalogState;

/// Room catalog loaded once on mount.
#[component]
pub fn RoomCatalog() -> impl IntoView {
    let catalog = RwSignal::new(CatalogState::pending());

    Effect::new(move || {
        catalog.update(CatalogState::begin_load);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_room_catalog()
                .await
                .map_err(|e| e.to_string());
            if let Err(e) = &result {
                log::warn!("room catalog load failed: {e}");
            }
            catalog.update(|c| c.finish_load(result));
        });
    });

    view! {
        <section class="room-catalog">
            <h2 class="room-catalog__title">"房型一覽"</h2>
            {move || {
                let state = catalog.get();
                if state.loading {
                    return view! { <p class="room-catalog__status">"載入中..."</p> }.into_any();
                }
                if let Some(error) = state.error {
                    return view! { <p class="room-catalog__status room-catalog__status--error">{error}</p> }
                        .into_any();
                }
                if state.rooms.is_empty() {
                    return view! { <p class="room-catalog__status">"目前沒有房型"</p> }.into_any();
                }
                view! {
                    <div class="room-catalog__grid">
                        {state.rooms.into_iter().map(|room| view! { <RoomCard room/> }).collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}
