use crate::components::{Glyph, Loader, LoadingScreen, PageHeader};
use crate::content::{stagger_style, Icon, BLOG_POSTS, CARD_STAGGER_S};
use crate::interaction::LoadingPlan;
use leptos::*;

#[component]
pub fn BlogsPage() -> impl IntoView {
    view! {
        <Loader plan=LoadingPlan::progress() screen=LoadingScreen::ProgressBar("LOADING BLOGS...")>
            <main class="page">
                <div class="page-inner">
                    <PageHeader accent="BLO" rest="GS"/>
                    <div class="blog-list">
                        {BLOG_POSTS
                            .iter()
                            .enumerate()
                            .map(|(index, post)| view! {
                                <article
                                    class="record-card rise-in hover-lift"
                                    style=stagger_style(0.0, CARD_STAGGER_S, index)
                                >
                                    <h2 class="record-title large">{post.title}</h2>
                                    <div class="record-meta">
                                        <Glyph icon=Icon::Calendar/>
                                        <span>{post.date}</span>
                                    </div>
                                    <p class="record-body">{post.excerpt}</p>
                                    <a
                                        class="read-more"
                                        href=post.link
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        "Read more \u{2192}"
                                    </a>
                                </article>
                            })
                            .collect_view()}
                    </div>
                </div>
            </main>
        </Loader>
    }
}
