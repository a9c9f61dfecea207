use crate::components::Glyph;
use crate::content::Icon;
use crate::interaction::Theme;
use crate::theme::use_theme;
use leptos::*;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="theme-toggle fade-in-down">
            <button
                type="button"
                class="icon-button"
                aria-label=move || match theme.theme() {
                    Theme::Dark => "Switch to light theme",
                    Theme::Light => "Switch to dark theme",
                }
                on:click=move |_| theme.toggle()
            >
                {move || match theme.theme() {
                    Theme::Dark => view! { <Glyph icon=Icon::Sun/> }.into_view(),
                    Theme::Light => view! { <Glyph icon=Icon::Moon/> }.into_view(),
                }}
            </button>
        </div>
    }
}
