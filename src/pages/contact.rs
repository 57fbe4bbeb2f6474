//! Contact page posting the form to the backend.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::net::types::ContactMessage;

/// Trim the form fields and refuse empty ones.
fn validate_contact_input(name: &str, email: &str, message: &str) -> Result<ContactMessage, &'static str> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err("All fields are required.");
    }
    Ok(ContactMessage {
        name: name.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
    })
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(None::<String>);
    let failed = RwSignal::new(false);
    let sending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_contact_input(&name.get(), &email.get(), &message.get()) {
            Err(err) => {
                failed.set(true);
                status.set(Some(err.to_owned()));
            }
            Ok(payload) => {
                #[cfg(feature = "hydrate")]
                {
                    sending.set(true);
                    leptos::task::spawn_local(async move {
                        match crate::net::api::send_contact(&payload).await {
                            Ok(()) => {
                                failed.set(false);
                                status.set(Some("Message submitted successfully".to_owned()));
                                name.set(String::new());
                                email.set(String::new());
                                message.set(String::new());
                            }
                            Err(err) => {
                                failed.set(true);
                                status.set(Some(format!("Could not send message: {err}")));
                            }
                        }
                        sending.set(false);
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = payload;
                }
            }
        }
    };

    view! {
        <div class="contact-page">
            <h1>"Contact Us"</h1>
            <p>"Questions about your installation or the dashboard? Send us a note."</p>
            <form class="form contact-page__form" on:submit=on_submit>
                <label class="form__label">
                    "Name"
                    <input
                        class="form__input"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Email"
                    <input
                        class="form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Message"
                    <textarea
                        class="form__textarea"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                        placeholder="How can we help?"
                    ></textarea>
                </label>
                <button class="btn form__submit" type="submit" disabled=move || sending.get()>
                    {move || if sending.get() { "Sending..." } else { "Send Message" }}
                </button>
                <Show when=move || status.get().is_some()>
                    <p class="form__status" class:form__status--error=move || failed.get()>
                        {move || status.get().unwrap_or_default()}
                    </p>
                </Show>
            </form>
        </div>
    }
}
