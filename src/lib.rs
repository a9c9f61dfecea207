pub mod components;
pub mod content;
pub mod interaction;
pub mod media;
pub mod pages;
pub mod storage;
pub mod theme;

use components::CustomCursor;
use interaction::SMALL_VIEWPORT_QUERY;
use leptos::*;
use leptos_router::*;
use media::use_media_query;
use pages::{BlogsPage, ContactPage, HomePage, NotFoundPage, ProjectsPage, SkillsPage};
use theme::provide_theme;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

/// Workaround for Leptos 0.6 router not re-rendering on browser back/forward.
///
/// On `popstate` the router updates its location signal but `<Routes>` does
/// not always switch views. Reloading re-initializes the app at the right
/// URL; the theme survives through localStorage.
fn setup_popstate_reload() {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }) as Box<dyn Fn(web_sys::Event)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback(
            "popstate",
            closure.as_ref().unchecked_ref(),
        );
    }
    closure.forget();
}

/// Root component: theme context, cursor and routes.
#[component]
fn Root() -> impl IntoView {
    provide_theme();
    let small_viewport = use_media_query(SMALL_VIEWPORT_QUERY);

    view! {
        <Router>
            <Show when=move || !small_viewport.get()>
                <CustomCursor/>
            </Show>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/projects" view=ProjectsPage/>
                <Route path="/skills" view=SkillsPage/>
                <Route path="/blogs" view=BlogsPage/>
                <Route path="/contact" view=ContactPage/>
                <Route path="/*" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    setup_popstate_reload();
    mount_to_body(Root);
}
