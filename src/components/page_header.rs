use crate::components::Glyph;
use crate::content::Icon;
use leptos::*;
use leptos_router::A;

/// "Back to Card" link and the page title.
///
/// The title is split so the first letters can be styled separately.
#[component]
pub fn PageHeader(
    accent: &'static str,
    rest: &'static str,
    /// Extra controls shown after the title (e.g. the CV download).
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <A href="/" class="back-link">
                <Glyph icon=Icon::ArrowLeft/>
                <span>"Back to Card"</span>
            </A>
            <h1 class="page-title">
                <span class="page-title-accent">{accent}</span>
                {rest}
            </h1>
            {children.map(|c| c())}
        </div>
    }
}
