use crate::components::{Loader, LoadingScreen, PageHeader};
use crate::content::{stagger_style, CARD_STAGGER_S, PROJECTS};
use crate::interaction::LoadingPlan;
use leptos::*;

const PROJECTS_LOADING: LoadingPlan = LoadingPlan::fixed_ms(1500);

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Loader plan=PROJECTS_LOADING screen=LoadingScreen::Pacman("LOADING PROJECTS")>
            <main class="page">
                <div class="page-inner">
                    <PageHeader accent="PRO" rest="JECTS"/>
                    <div class="project-grid">
                        {PROJECTS
                            .iter()
                            .enumerate()
                            .map(|(index, project)| view! {
                                <div
                                    class="record-card rise-in hover-lift"
                                    style=stagger_style(0.0, CARD_STAGGER_S, index)
                                >
                                    <h2 class="record-title">{project.title}</h2>
                                    <p class="record-body">{project.description}</p>
                                    <div class="tag-list">
                                        {project
                                            .tags
                                            .iter()
                                            .map(|tag| view! { <span class="tag">{*tag}</span> })
                                            .collect_view()}
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </main>
        </Loader>
    }
}
