//! Contact section: message form plus direct contact channels.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field values and status live in a local `RwSignal<ContactForm>`. The
//! hand-off itself is `net::contact::send_contact_email`; this component only
//! sequences status changes, toasts, and the delayed return to `Idle`.

use leptos::prelude::*;

use crate::components::reveal::{FadeIn, SlideUp};
use crate::components::toast::Toasts;
use crate::content::profile::{PROFILE, Profile};
use crate::net::contact::ContactError;
use crate::state::contact::{ContactForm, Field, FormStatus};
use crate::state::toast::ToastRequest;
use crate::util::reveal::{Reveal, RevealDirection};

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

/// Toast shown once the hand-off settles.
pub fn outcome_toast(result: &Result<(), ContactError>) -> ToastRequest {
    match result {
        Ok(()) => ToastRequest::success("Message sent!")
            .description("Thanks for reaching out. I'll get back to you soon."),
        Err(_) => ToastRequest::error("Something went wrong").description("Please try again later."),
    }
}

/// Toast shown when the form is rejected before sending.
pub fn validation_toast(reason: &str) -> ToastRequest {
    ToastRequest::error("Please check the form").description(reason)
}

/// One labelled input bound to a field of the shared form signal.
fn form_field(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    let focused = move || form.with(|f| f.focused == Some(field));
    let locked = move || form.with(|f| f.status.locks_inputs());
    let value = move || form.with(|f| f.value(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set(field, event_target_value(&ev)));
    let on_focus = move |_| form.update(|f| f.focused = Some(field));
    let on_blur = move |_| form.update(|f| f.focused = None);

    let control = if field == Field::Message {
        view! {
            <textarea
                id=field.id()
                name=field.id()
                class="contact-form__input contact-form__input--multiline"
                required
                prop:value=value
                prop:disabled=locked
                on:input=on_input
                on:focus=on_focus
                on:blur=on_blur
            ></textarea>
        }
        .into_any()
    } else {
        let input_type = if field == Field::Email { "email" } else { "text" };
        view! {
            <input
                id=field.id()
                name=field.id()
                type=input_type
                class="contact-form__input"
                required
                prop:value=value
                prop:disabled=locked
                on:input=on_input
                on:focus=on_focus
                on:blur=on_blur
            />
        }
        .into_any()
    };

    view! {
        <div class="contact-form__field" class:contact-form__field--focused=focused>
            <label for=field.id() class="contact-form__label">
                {field.label()}
                <Show when=focused>
                    <span class="contact-form__sparkle">"✨"</span>
                </Show>
            </label>
            {control}
            <span class="contact-form__underline"></span>
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let toasts = Toasts::expect();
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(attempt) = form.try_update(ContactForm::begin_submit) else {
            return;
        };
        let message = match attempt {
            Ok(message) => message,
            Err(reason) => {
                toasts.show(validation_toast(reason));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::contact::send_contact_email(&message).await;
            match &result {
                Ok(()) => form.update(ContactForm::succeed),
                Err(e) => {
                    leptos::logging::warn!("contact hand-off failed: {e}");
                    form.update(ContactForm::fail);
                }
            }
            toasts.show(outcome_toast(&result));

            let millis = u32::try_from(crate::state::contact::STATUS_RESET_DELAY.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(millis, move || {
                let _ = form.try_update(ContactForm::reset_status);
            })
            .forget();
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = message;
    };

    let status = move || form.with(|f| f.status);

    view! {
        <section class="section section--tinted" id="contact">
            <div class="container">
                <SlideUp delay=0.1>
                    <h2 class="heading heading--center">"Get In Touch"</h2>
                </SlideUp>
                <FadeIn delay=0.2>
                    <p class="section__lead">
                        "I'm currently seeking opportunities as a Sales Quality Analyst Intern. Feel free to reach \
                         out if you'd like to connect or discuss potential collaborations!"
                    </p>
                </FadeIn>

                <div class="contact">
                    <FadeIn
                        class="contact__form"
                        reveal=Reveal::slide_up().direction(RevealDirection::Right)
                        delay=0.3
                    >
                        <form class="contact-form" on:submit=on_submit novalidate>
                            {form_field(form, Field::Name)}
                            {form_field(form, Field::Email)}
                            {form_field(form, Field::Message)}
                            <button
                                type="submit"
                                class="button contact-form__submit"
                                class:contact-form__submit--success=move || status() == FormStatus::Success
                                class:contact-form__submit--error=move || status() == FormStatus::Error
                                prop:disabled=move || status().locks_inputs()
                            >
                                {move || status().button_label()}
                            </button>
                        </form>
                    </FadeIn>

                    <FadeIn
                        class="contact__info"
                        reveal=Reveal::slide_up().direction(RevealDirection::Left)
                        delay=0.5
                    >
                        <ContactInfo/>
                    </FadeIn>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let phones = PROFILE.phones.join(" | ");
    let tel = PROFILE.tel();

    view! {
        <div class="contact-info">
            <h3 class="contact-info__title">"Contact Information"</h3>
            <dl class="contact-info__list">
                <dt>"Email"</dt>
                <dd><a href=PROFILE.mailto()>{PROFILE.email}</a></dd>
                <dt>"Phone"</dt>
                <dd><a href=tel>{phones}</a></dd>
                <dt>"LinkedIn"</dt>
                <dd>
                    <a href=PROFILE.linkedin target="_blank" rel="noopener noreferrer">
                        {Profile::display_url(PROFILE.linkedin)}
                    </a>
                </dd>
                <dt>"GitHub"</dt>
                <dd>
                    <a href=PROFILE.github target="_blank" rel="noopener noreferrer">
                        {Profile::display_url(PROFILE.github)}
                    </a>
                </dd>
            </dl>
        </div>
    }
}
