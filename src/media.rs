use gloo::events::EventListener;
use leptos::*;
use wasm_bindgen::JsCast;

/// Reactive `matchMedia` subscription.
///
/// The returned signal starts at the query's current value and follows its
/// `change` events until the owning component is unmounted. Browsers without
/// `matchMedia` report `false`.
pub fn use_media_query(query: &'static str) -> ReadSignal<bool> {
    let Some(list) = web_sys::window().and_then(|w| w.match_media(query).ok().flatten()) else {
        let (matches, _) = create_signal(false);
        return matches;
    };

    let (matches, set_matches) = create_signal(list.matches());
    let listener = EventListener::new(&list, "change", move |event| {
        if let Some(event) = event.dyn_ref::<web_sys::MediaQueryListEvent>() {
            set_matches.set(event.matches());
        }
    });
    // Dropping the listener unsubscribes
    on_cleanup(move || drop(listener));

    matches
}
