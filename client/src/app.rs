//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::components::chat_widget::ChatWidget;
use crate::pages::{home::HomePage, room_editor::RoomEditorPage};
use crate::state::{chat::ChatState, room_form::RoomFormState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="zh-Hant">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());
    let room_form = RwSignal::new(RoomFormState::default());

    provide_context(ui);
    provide_context(chat);
    provide_context(room_form);

    view! {
        <Stylesheet id="leptos" href="/pkg/roomdesk.css"/>
        <Title text="訂房小幫手"/>

        <Router>
            <nav class="site-nav">
                <A href="/">"房型一覽"</A>
                <A href="/rooms/new">"新增房型"</A>
            </nav>
            <main class="container" class:with-chat=move || ui.with(UiState::chat_expanded)>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("rooms"), StaticSegment("new")) view=RoomEditorPage/>
                </Routes>
            </main>
            <ChatWidget/>
        </Router>
    }
}
