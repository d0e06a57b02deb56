//! Admin form for creating a room record.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auto-fill pulls a recommendation from `/auto_recommend`, then chains into
//! image generation when every field came back filled. The submit handler
//! refuses to post until a preview image exists, and reloads the page once the
//! server has stored the room.

use leptos::prelude::*;

use crate::components::image_zoom::ImageZoomModal;
use crate::state::room_form::{RoomField, RoomFormState};
use crate::util::browser::alert;
#[cfg(feature = "hydrate")]
use crate::util::clock::now_millis;

/// Room creation form with auto-fill, image preview, and submit.
#[component]
pub fn RoomForm() -> impl IntoView {
    let form = expect_context::<RwSignal<RoomFormState>>();

    let run_image_generation = move || {
        form.update(RoomFormState::begin_image_generation);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let draft = form.with_untracked(|f| f.draft.clone());
            match crate::net::api::generate_room_image(&draft.payload()).await {
                Ok(response) => {
                    let mut outcome = Ok(());
                    form.update(|f| outcome = f.finish_image_generation(response, now_millis()));
                    if let Err(message) = outcome {
                        alert(&message);
                    }
                }
                Err(e) => {
                    log::warn!("room image generation failed: {e}");
                    let mut message = "";
                    form.update(|f| message = f.fail_image_generation());
                    alert(message);
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        form.update(|f| {
            f.fail_image_generation();
        });
    };

    let on_auto_fill = move |_| {
        form.update(RoomFormState::begin_auto_fill);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_recommendation().await {
                Ok(body) => {
                    let mut outcome = Ok(());
                    form.update(|f| outcome = f.finish_auto_fill(&body));
                    match outcome {
                        Ok(()) => {
                            if form.with_untracked(RoomFormState::can_generate_image) {
                                run_image_generation();
                            }
                        }
                        Err(message) => alert(&message),
                    }
                }
                Err(e) => {
                    log::warn!("auto recommend failed: {e}");
                    let mut message = "";
                    form.update(|f| message = f.fail_auto_fill());
                    alert(message);
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        form.update(|f| {
            f.fail_auto_fill();
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = form.get_untracked();
        if let Err(message) = snapshot.submission() {
            alert(message);
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(submit_room(snapshot));
    };

    let fields = RoomField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <label class="room-form__field" for=field.id()>
                    <span class="room-form__label">{field.label()}</span>
                    <input
                        id=field.id()
                        name=field.id()
                        type=field.input_type()
                        required=true
                        prop:value=move || form.with(|f| f.draft.field(field).to_owned())
                        on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                    />
                </label>
            }
        })
        .collect_view();

    view! {
        <form id="addRoomForm" class="room-form" on:submit=on_submit>
            <div class="room-form__fields">{fields}</div>

            <div class="room-form__actions">
                <button id="autoFillBtn" class="btn" type="button" on:click=on_auto_fill>
                    "自動推薦"
                </button>
                <button
                    id="roomImageBtn"
                    class="btn"
                    type="button"
                    disabled=move || !form.with(RoomFormState::can_generate_image)
                    on:click=move |_| run_image_generation()
                >
                    "生成房型圖片"
                </button>
                <button id="clearAllBtn" class="btn" type="button" on:click=move |_| form.update(RoomFormState::clear)>
                    "全部清除"
                </button>
            </div>

            <div class="room-form__preview">
                <Show when=move || form.with(|f| f.pending)>
                    <div id="pendingCircle" class="pending-circle">
                        <div class="pending-circle__spinner"></div>
                    </div>
                </Show>
                <Show
                    when=move || form.with(RoomFormState::preview_visible)
                    fallback=|| {
                        view! {
                            <p id="imagePreviewText" class="room-form__preview-text">
                                "填寫所有欄位後即可生成房型圖片"
                            </p>
                        }
                    }
                >
                    <img
                        id="roomImagePreview"
                        class="room-form__preview-image"
                        alt="房型預覽"
                        src=move || form.with(|f| f.preview_src.clone().unwrap_or_default())
                        on:click=move |_| form.update(RoomFormState::open_zoom)
                    />
                </Show>
            </div>

            <button class="btn btn--primary room-form__submit" type="submit">
                "新增房型"
            </button>
        </form>

        <ImageZoomModal/>
    }
}

#[cfg(feature = "hydrate")]
async fn submit_room(snapshot: RoomFormState) {
    use crate::state::room_form::{ADD_FAILED_MESSAGE, ADD_SUCCESS_MESSAGE, add_room_failure_message};

    let Ok(payload) = snapshot.submission() else {
        return;
    };
    match crate::net::api::add_room(&payload).await {
        Ok(response) if response.success => {
            alert(ADD_SUCCESS_MESSAGE);
            crate::util::browser::reload_page();
        }
        Ok(response) => alert(&add_room_failure_message(response.error.as_deref())),
        Err(e) => {
            log::warn!("add room failed: {e}");
            alert(ADD_FAILED_MESSAGE);
        }
    }
}
