use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="page">
            <div class="page-inner not-found">
                <h1 class="page-title">"404"</h1>
                <p class="record-body">"This page fell off the card."</p>
                <A href="/" class="back-link">"\u{2190} Back to Card"</A>
            </div>
        </main>
    }
}
