use crate::components::Glyph;
use crate::content::{
    Icon, GITHUB_URL, NAV_LINKS, PROFILE_AVATAR, PROFILE_EMAIL, PROFILE_NAME, PROFILE_PHONE,
    PROFILE_TAGLINE,
};
use crate::interaction::{
    card_size, compute_tilt, CardFace, CardRect, FlipState, Pointer, FLIP_DURATION,
    SMALL_VIEWPORT_QUERY,
};
use crate::media::use_media_query;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use leptos_router::A;

impl From<web_sys::DomRect> for CardRect {
    fn from(rect: web_sys::DomRect) -> Self {
        CardRect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

#[component]
fn FrontFace(entering: bool, exiting: bool) -> impl IntoView {
    view! {
        <div
            class="card-face card-front"
            class:flip-in-front=entering
            class:flip-out-front=exiting
        >
            <div class="card-row">
                <div class="avatar-ring">
                    <div class="avatar">
                        <img src=PROFILE_AVATAR alt="Profile" width="64" height="64"/>
                    </div>
                </div>
                <div class="card-hint">
                    <p class="muted">"INTERACTIVE"</p>
                    <p>"CLICK TO FLIP"</p>
                </div>
            </div>
            <div>
                <h2 class="card-name">{PROFILE_NAME}</h2>
                <p class="card-tagline">{PROFILE_TAGLINE}</p>
            </div>
            <p class="card-footnote">"Hmm"</p>
        </div>
    }
}

#[component]
fn BackFace(entering: bool, exiting: bool) -> impl IntoView {
    view! {
        <div
            class="card-face card-back"
            class:flip-in-back=entering
            class:flip-out-back=exiting
        >
            <h2 class="card-name small">{PROFILE_NAME}</h2>
            <div class="card-row">
                <nav class="card-nav">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! {
                            <A href=link.href class="card-link">
                                <Glyph icon=link.icon/>
                                <span>{link.label}</span>
                            </A>
                        })
                        .collect_view()}
                </nav>
                <div class="card-contact">
                    // Links inside the card must not flip it
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="card-link"
                        aria-label="GitHub"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <Glyph icon=Icon::Github/>
                    </a>
                    <p>{PROFILE_EMAIL}</p>
                    <p>{PROFILE_PHONE}</p>
                </div>
            </div>
        </div>
    }
}

/// The flipping, tilting business card on the landing page.
///
/// Front shows the identity card, back the navigation menu. The card leans
/// towards the pointer on large viewports.
#[component]
pub fn BusinessCard() -> impl IntoView {
    let card_ref = create_node_ref::<html::Div>();
    let card = create_rw_signal(CardFace::default());
    let exit_timer = store_value(None::<TimeoutHandle>);
    let (pointer, set_pointer) = create_signal(Pointer::default());
    let small_viewport = use_media_query(SMALL_VIEWPORT_QUERY);

    let handle = window_event_listener(ev::mousemove, move |ev| {
        set_pointer.set(Pointer::new(ev.client_x() as f64, ev.client_y() as f64));
    });
    on_cleanup(move || handle.remove());

    let tilt = move || {
        let rect = card_ref
            .get()
            .map(|el| CardRect::from(el.get_bounding_client_rect()));
        compute_tilt(pointer.get(), rect, small_viewport.get())
    };

    let size_style = move || {
        let (width, height) = card_size(small_viewport.get());
        format!("width: {}px; height: {}px", width, height)
    };

    let on_click = move |_| {
        let Some(exiting) = card.get_untracked().begin_flip() else {
            return;
        };
        card.set(exiting);
        let finish = move || card.update(|c| *c = c.finish_exit());
        match set_timeout_with_handle(finish, FLIP_DURATION) {
            Ok(handle) => exit_timer.set_value(Some(handle)),
            Err(_) => finish(),
        }
    };
    on_cleanup(move || {
        if let Some(handle) = exit_timer.get_value() {
            handle.clear();
        }
    });

    let face_view = move || {
        let state = card.get();
        let (entering, exiting) = (state.is_entering(), state.is_exiting());
        match state.face() {
            FlipState::Front => view! { <FrontFace entering=entering exiting=exiting/> }.into_view(),
            FlipState::Back => view! { <BackFace entering=entering exiting=exiting/> }.into_view(),
        }
    };

    view! {
        <div
            node_ref=card_ref
            class="business-card"
            style=size_style
            on:click=on_click
        >
            <div class="card-tilt" style:transform=move || tilt().to_css()>
                {face_view}
            </div>
        </div>
    }
}
