use crate::components::{BusinessCard, Loader, LoadingScreen, ThemeToggle};
use crate::interaction::LoadingPlan;
use leptos::*;

/// Long enough to watch the pac-man animation once.
const HOME_LOADING: LoadingPlan = LoadingPlan::fixed_ms(3000);

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Loader plan=HOME_LOADING screen=LoadingScreen::Pacman("LOADING")>
            <main class="home">
                <ThemeToggle/>
                <div class="home-stack">
                    <BusinessCard/>
                    <p class="home-hint fade-in">"Click the card to flip and access navigation"</p>
                </div>
            </main>
        </Loader>
    }
}
