use crate::components::{Glyph, Loader, LoadingScreen, PageHeader};
use crate::content::{
    stagger_delay, stagger_style, Icon, CARD_STAGGER_S, CV_URL, EDUCATION,
    EDUCATION_BASE_DELAY_S, SKILLS, SKILL_STAGGER_S,
};
use crate::interaction::{LoadingPlan, SMALL_VIEWPORT_QUERY};
use crate::media::use_media_query;
use leptos::*;

#[component]
fn DownloadCv() -> impl IntoView {
    view! {
        <a class="outline-button" href=CV_URL target="_blank" rel="noopener noreferrer" download="">
            <Glyph icon=Icon::Download/>
            "Download CV"
        </a>
    }
}

#[component]
fn SkillBars() -> impl IntoView {
    view! {
        <div class="skill-grid fade-in">
            {SKILLS
                .iter()
                .enumerate()
                .map(|(index, skill)| {
                    let delay = stagger_delay(0.0, SKILL_STAGGER_S, index);
                    view! {
                        <div class="skill rise-in" style=format!("animation-delay: {:.2}s", delay)>
                            <div class="skill-label">
                                <span class="skill-name">{skill.name}</span>
                                <span class="skill-level">{format!("{}%", skill.level)}</span>
                            </div>
                            <div class="skill-track">
                                <div
                                    class="skill-fill"
                                    style=format!(
                                        "--level: {}%; animation-delay: {:.2}s",
                                        skill.level,
                                        delay,
                                    )
                                ></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn EducationList() -> impl IntoView {
    view! {
        <div class="education rise-in" style="animation-delay: 0.6s">
            <h2 class="section-title">"Education"</h2>
            <div class="education-list">
                {EDUCATION
                    .iter()
                    .enumerate()
                    .map(|(index, edu)| view! {
                        <div
                            class="record-card slide-in hover-lift"
                            style=stagger_style(EDUCATION_BASE_DELAY_S, CARD_STAGGER_S, index)
                        >
                            <h3 class="record-title">{edu.degree}</h3>
                            <div class="record-meta split">
                                <span>{edu.institution}</span>
                                <span class="strong">{edu.year}</span>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn SkillsPage() -> impl IntoView {
    view! {
        <Loader plan=LoadingPlan::progress() screen=LoadingScreen::ProgressBar("LOADING SKILLS...")>
            <SkillsContent/>
        </Loader>
    }
}

#[component]
fn SkillsContent() -> impl IntoView {
    let small_viewport = use_media_query(SMALL_VIEWPORT_QUERY);

    view! {
        <main class="page">
            <div class="page-inner">
                <PageHeader accent="SKILLS" rest=" & RESUME">
                    <Show when=move || !small_viewport.get()>
                        <DownloadCv/>
                    </Show>
                </PageHeader>
                <Show when=move || small_viewport.get()>
                    <div class="cv-row">
                        <DownloadCv/>
                    </div>
                </Show>
                <section class="skills">
                    <h2 class="section-title">"Technical Skills"</h2>
                    <SkillBars/>
                </section>
                <EducationList/>
            </div>
        </main>
    }
}
