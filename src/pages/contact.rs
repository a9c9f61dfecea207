use crate::components::{Glyph, Loader, LoadingScreen, PageHeader};
use crate::content::{
    Icon, GITHUB_LABEL, GITHUB_URL, LINKEDIN_LABEL, LINKEDIN_URL, PROFILE_EMAIL,
};
use crate::interaction::{ContactField, ContactForm, LoadingPlan, SMALL_VIEWPORT_QUERY};
use crate::media::use_media_query;
use leptos::logging::{log, warn};
use leptos::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Loader plan=LoadingPlan::progress() screen=LoadingScreen::ProgressBar("LOADING CONTACT...")>
            <main class="page">
                <div class="page-inner">
                    <PageHeader accent="CON" rest="TACT"/>
                    <div class="contact-grid">
                        <ContactDetails/>
                        <ContactFormView/>
                    </div>
                </div>
            </main>
        </Loader>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <div class="slide-in">
            <h2 class="section-title">"Get in Touch"</h2>
            <p class="record-body">
                "Got a groundbreaking idea, a million-dollar opportunity, or just want to rant about AI? "
                "I\u{2019}m all ears\u{2014}well, maybe not all ears."
            </p>
            <ul class="contact-list">
                <li class="nudge">
                    <Glyph icon=Icon::Mail/>
                    <span>{PROFILE_EMAIL}</span>
                </li>
                <li class="nudge">
                    <Glyph icon=Icon::Github/>
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer">{GITHUB_LABEL}</a>
                </li>
                <li class="nudge">
                    <Glyph icon=Icon::Linkedin/>
                    <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer">{LINKEDIN_LABEL}</a>
                </li>
            </ul>
        </div>
    }
}

/// The message form. Submitting only logs the values and clears the form;
/// there is no delivery backend.
#[component]
fn ContactFormView() -> impl IntoView {
    let form = create_rw_signal(ContactForm::default());
    let small_viewport = use_media_query(SMALL_VIEWPORT_QUERY);

    let value = move |field: ContactField| move || form.with(|f| f.get(field).to_string());
    let on_input = move |field: ContactField| {
        move |ev: ev::Event| {
            let text = event_target_value(&ev);
            form.update(|f| f.set(field, text));
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(submitted) = form.try_update(ContactForm::submit).flatten() else {
            warn!("Portfolio: contact form submitted with empty fields");
            return;
        };
        log!(
            "Portfolio: contact form submitted: name={:?} email={:?} message={:?}",
            submitted.name,
            submitted.email,
            submitted.message
        );
    };

    view! {
        <div class="slide-in-right">
            <form class="contact-form" on:submit=on_submit>
                <label for=ContactField::Name.id()>"Name"</label>
                <input
                    id=ContactField::Name.id()
                    name=ContactField::Name.id()
                    required
                    prop:value=value(ContactField::Name)
                    on:input=on_input(ContactField::Name)
                />
                <label for=ContactField::Email.id()>"Email"</label>
                <input
                    id=ContactField::Email.id()
                    name=ContactField::Email.id()
                    type="email"
                    required
                    prop:value=value(ContactField::Email)
                    on:input=on_input(ContactField::Email)
                />
                <label for=ContactField::Message.id()>"Message"</label>
                <textarea
                    id=ContactField::Message.id()
                    name=ContactField::Message.id()
                    required
                    rows=move || if small_viewport.get() { 4 } else { 5 }
                    prop:value=value(ContactField::Message)
                    on:input=on_input(ContactField::Message)
                ></textarea>
                <button type="submit" class="solid-button">
                    <Glyph icon=Icon::Send/>
                    "Send Message"
                </button>
            </form>
        </div>
    }
}
