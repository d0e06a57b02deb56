//! Full-screen overlay for the generated room image.

use leptos::prelude::*;

use crate::state::room_form::RoomFormState;

/// Zoomed preview; closes on the close button or a click on the backdrop.
#[component]
pub fn ImageZoomModal() -> impl IntoView {
    let form = expect_context::<RwSignal<RoomFormState>>();
    let close = move |_| form.update(RoomFormState::close_zoom);

    view! {
        <Show when=move || form.with(|f| f.zoom_open)>
            <div id="imageZoomModal" class="zoom-modal" on:click=close>
                <span id="closeZoomModal" class="zoom-modal__close" on:click=close>
                    "×"
                </span>
                <img
                    id="zoomedImage"
                    class="zoom-modal__image"
                    alt="房型圖片"
                    src=move || form.with(|f| f.preview_src.clone().unwrap_or_default())
                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                />
            </div>
        </Show>
    }
}
