//! Collapsible booking-assistant sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each send appends a user bubble and a loading placeholder to `ChatState`,
//! then posts the message to `/chat` on the local executor. The reply (or
//! the apology on failure) replaces that turn's placeholder. Sends are not
//! serialized; every turn resolves on its own.

use leptos::prelude::*;

use crate::components::room_card::RoomCard;
use crate::state::chat::{APOLOGY_MESSAGE, ChatEntry, ChatEntryKind, ChatState, Composer, PendingTurn};
use crate::state::ui::UiState;
use crate::util::clock::{ClockTime, now_millis};

/// Served by the host from `static/images/`.
pub const BOT_AVATAR_SRC: &str = "/static/images/bot-avatar.svg";

/// Chat sidebar with header, transcript, and input row, plus the floating
/// re-open button shown while collapsed.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let input = RwSignal::new(Composer::default());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        chat.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let Some(text) = input.try_update(Composer::take_message).flatten() else {
            return;
        };
        let mut started = None;
        chat.update(|c| started = c.begin_turn(&text, now_millis(), ClockTime::now()));
        if let Some(turn) = started {
            dispatch_turn(chat, turn);
        }
    };

    let on_click = move |_| {
        do_send();
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = input_ref.get() {
                if let Err(e) = el.focus() {
                    log::debug!("chat input focus failed: {e:?}");
                }
            }
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.is_composing() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <Show when=move || ui.with(UiState::show_reopen_button)>
            <button id="chat-toggle-btn" class="chat-toggle-btn" on:click=move |_| ui.update(UiState::expand_chat)>
                "💬"
            </button>
        </Show>

        <aside id="chat-sidebar" class="chat-sidebar" class:collapsed=move || !ui.with(UiState::chat_expanded)>
            <div id="chat-header" class="chat-sidebar__header" on:click=move |_| ui.update(UiState::collapse_chat)>
                <img class="chat-sidebar__avatar" src=BOT_AVATAR_SRC alt=""/>
                <span class="chat-sidebar__title">"訂房小幫手"</span>
                <span class="chat-sidebar__collapse">"✕"</span>
            </div>

            <div id="chat-messages" class="chat-sidebar__messages" node_ref=messages_ref>
                <For each=move || chat.get().entries key=|entry| entry.key children=render_entry/>
            </div>

            <div class="chat-sidebar__input-row">
                <input
                    id="chat-input"
                    class="chat-sidebar__input"
                    type="text"
                    placeholder="想找什麼樣的房型？"
                    node_ref=input_ref
                    prop:value=move || input.with(|c| c.text.clone())
                    on:input=move |ev| input.update(|c| c.set(event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <button id="send-btn" class="btn btn--primary chat-sidebar__send" on:click=on_click>
                    "送出"
                </button>
            </div>
        </aside>
    }
}

/// Post the turn and resolve its placeholder when the reply lands.
fn dispatch_turn(chat: RwSignal<ChatState>, turn: PendingTurn) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::send_chat_message(&turn.message).await;
        let now = ClockTime::now();
        match result {
            Ok(reply) => chat.update(|c| c.complete_turn(&turn.id, reply, now)),
            Err(e) => {
                log::warn!("chat turn {} failed: {e}", turn.id);
                chat.update(|c| c.fail_turn(&turn.id, now));
            }
        }
    });

    #[cfg(not(feature = "hydrate"))]
    chat.update(|c| c.fail_turn(&turn.id, ClockTime::now()));
}

fn render_entry(entry: ChatEntry) -> AnyView {
    match entry.kind {
        ChatEntryKind::User { text, time } => view! {
            <div class="chat-message chat-message--user">
                <div class="chat-message__bubble">{text}</div>
                <span class="chat-message__time">{time.to_string()}</span>
            </div>
        }
        .into_any(),
        ChatEntryKind::Loading { turn } => view! {
            <div class="chat-message chat-message--bot chat-message--loading" id=turn.to_string()>
                <img class="chat-message__avatar" src=BOT_AVATAR_SRC alt=""/>
                <div class="chat-message__bubble">
                    <span class="typing-dot"></span>
                    <span class="typing-dot"></span>
                    <span class="typing-dot"></span>
                </div>
            </div>
        }
        .into_any(),
        ChatEntryKind::Bot { lines, time } => {
            let count = lines.len();
            let body = lines
                .into_iter()
                .enumerate()
                .map(|(i, line)| view! { {line} {(i + 1 < count).then(|| view! { <br/> })} })
                .collect_view();
            bot_bubble(body.into_any(), time, false)
        }
        ChatEntryKind::Room(room) => view! { <RoomCard room/> }.into_any(),
        ChatEntryKind::Apology { time } => bot_bubble(APOLOGY_MESSAGE.into_any(), time, true),
    }
}

fn bot_bubble(body: AnyView, time: ClockTime, is_error: bool) -> AnyView {
    view! {
        <div class="chat-message chat-message--bot" class:chat-message--error=is_error>
            <img class="chat-message__avatar" src=BOT_AVATAR_SRC alt=""/>
            <div class="chat-message__bubble">{body}</div>
            <span class="chat-message__time">{time.to_string()}</span>
        </div>
    }
    .into_any()
}
