use crate::interaction::{CursorState, Pointer};
use gloo::events::EventListener;
use leptos::*;
use wasm_bindgen::JsCast;

const INTERACTIVE_SELECTOR: &str = "a, button";

/// Whether an event started on (or inside) a link or button.
fn targets_interactive(event: &web_sys::Event) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

/// Ring-and-dot cursor that replaces the system pointer.
///
/// Hover detection is delegated from the document, so links rendered after
/// mount are picked up without re-registering listeners.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let state = create_rw_signal(CursorState::default());

    let handles = [
        window_event_listener(ev::mousemove, move |ev| {
            let position = Pointer::new(ev.client_x() as f64, ev.client_y() as f64);
            state.update(|s| s.position = position);
        }),
        window_event_listener(ev::mousedown, move |_| state.update(|s| s.pressed = true)),
        window_event_listener(ev::mouseup, move |_| state.update(|s| s.pressed = false)),
    ];

    let mut listeners = Vec::new();
    let document = web_sys::window().and_then(|w| w.document());
    if let Some(root) = document.as_ref().and_then(|d| d.document_element()) {
        listeners.push(EventListener::new(&root, "mouseleave", move |_| {
            state.update(|s| s.outside = true)
        }));
        listeners.push(EventListener::new(&root, "mouseenter", move |_| {
            state.update(|s| s.outside = false)
        }));
    }
    if let Some(document) = &document {
        listeners.push(EventListener::new(document, "mouseover", move |ev| {
            let over_link = targets_interactive(ev);
            state.update(|s| s.over_link = over_link)
        }));
    }

    if let Some(body) = document.as_ref().and_then(|d| d.body()) {
        let _ = body.class_list().add_1("custom-cursor-active");
    }

    on_cleanup(move || {
        for handle in handles {
            handle.remove();
        }
        drop(listeners);
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.class_list().remove_1("custom-cursor-active");
        }
    });

    let ring_style = move || state.with(|s| s.ring().to_style());
    let dot_style = move || {
        state.with(|s| {
            let origin = s.dot_origin();
            let opacity = if s.outside { 0 } else { 1 };
            format!(
                "transform: translate({:.1}px, {:.1}px); opacity: {}",
                origin.x, origin.y, opacity
            )
        })
    };

    view! {
        <div class="cursor-ring" class:cursor-link=move || state.with(|s| s.over_link) style=ring_style>
            <Show when=move || state.with(|s| s.over_link)>
                <div class="cursor-ring-center"></div>
            </Show>
        </div>
        <div class="cursor-dot" style=dot_style></div>
    }
}
