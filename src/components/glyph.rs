use crate::content::Icon;
use leptos::*;

#[component]
pub fn Glyph(icon: Icon) -> impl IntoView {
    view! { <span class="glyph" aria-hidden="true">{icon.glyph()}</span> }
}
