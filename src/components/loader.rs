use crate::interaction::{LoadPhase, LoadingPlan};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

/// Which loading screen to draw while a page is "loading".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadingScreen {
    /// Pac-man chasing dots, with a caption.
    Pacman(&'static str),
    /// Racing-game style progress bar, with a caption.
    ProgressBar(&'static str),
}

/// Run `plan` and drive `phase` from it. Timers stop when the owner is
/// cleaned up.
fn run_plan(plan: LoadingPlan, phase: RwSignal<LoadPhase>) {
    match plan {
        LoadingPlan::Fixed { delay } => {
            match set_timeout_with_handle(move || phase.update(|p| *p = p.finish()), delay) {
                Ok(handle) => on_cleanup(move || handle.clear()),
                Err(_) => phase.set(LoadPhase::Ready),
            }
        }
        LoadingPlan::Progress { tick, settle } => {
            let settle_timer = store_value(None::<TimeoutHandle>);
            let interval = set_interval_with_handle(
                move || {
                    let current = phase.get_untracked();
                    let (next, reveal_now) = current.tick(js_sys::Math::random());
                    if next != current {
                        phase.set(next);
                    }

                    if reveal_now {
                        let reveal = set_timeout_with_handle(
                            move || phase.update(|p| *p = p.finish()),
                            settle,
                        );
                        settle_timer.set_value(reveal.ok());
                    }
                },
                tick,
            );

            match interval {
                Ok(handle) => {
                    // Stop ticking as soon as the bar is full
                    create_effect(move |_| {
                        if phase.with(|p| p.is_full() || p.is_ready()) {
                            handle.clear();
                        }
                    });
                    on_cleanup(move || {
                        handle.clear();
                        if let Some(reveal) = settle_timer.get_value() {
                            reveal.clear();
                        }
                    });
                }
                // No timers: show the page instead of an endless loader
                Err(_) => phase.set(LoadPhase::Ready),
            }
        }
    }
}

#[component]
fn PacmanScreen(caption: &'static str) -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-stack">
                <div class="pacman-container">
                    <div class="pacman">
                        <div class="pacman-top"></div>
                        <div class="pacman-bottom"></div>
                    </div>
                    <div class="dots">
                        <div class="dot"></div>
                        <div class="dot"></div>
                        <div class="dot"></div>
                        <div class="dot"></div>
                    </div>
                </div>
                <p class="loading-caption">
                    <span class="pulse">{caption}</span>
                </p>
            </div>
        </div>
    }
}

#[component]
fn ProgressScreen(caption: &'static str, progress: Signal<u8>) -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="nfs-classic-loading">
                <div class="nfs-loading-text">{caption}</div>
                <div
                    class="nfs-progress-container"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    attr:aria-valuenow=move || progress.get()
                >
                    <div
                        class="nfs-progress-bar"
                        style:width=move || format!("{}%", progress.get())
                    ></div>
                </div>
            </div>
        </div>
    }
}

/// Shows a loading screen, then swaps in `children` once the plan finishes.
///
/// The loading screen and the children are never mounted at the same time,
/// and the children are only created when revealed so their entrance
/// animations start on reveal.
#[component]
pub fn Loader(plan: LoadingPlan, screen: LoadingScreen, children: ChildrenFn) -> impl IntoView {
    let phase = create_rw_signal(LoadPhase::default());
    run_plan(plan, phase);

    let ready = create_memo(move |_| phase.with(LoadPhase::shows_content));
    let progress = Signal::derive(move || phase.get().progress());

    let loading_view = move || match screen {
        LoadingScreen::Pacman(caption) => view! { <PacmanScreen caption=caption/> }.into_view(),
        LoadingScreen::ProgressBar(caption) => {
            view! { <ProgressScreen caption=caption progress=progress/> }.into_view()
        }
    };

    view! {
        <Show when=move || ready.get() fallback=loading_view>
            {children()}
        </Show>
    }
}
