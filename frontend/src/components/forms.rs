use log::info;
use web_sys::{HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

use crate::components::notification::{Notifier, Severity};
use crate::validation::is_valid_email;

pub const CONTACT_SENT: &str = "Pesan Anda telah terkirim! Kami akan segera menghubungi Anda.";
pub const NEWSLETTER_SUBSCRIBED: &str = "Terima kasih telah berlangganan newsletter kami!";
pub const NEWSLETTER_INVALID: &str = "Mohon masukkan email yang valid";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormOutcome {
    pub message: &'static str,
    pub severity: Severity,
    /// Whether the form should be cleared.
    pub reset: bool,
}

/// Contact submissions are acknowledged locally; nothing is sent.
pub fn submit_contact() -> FormOutcome {
    FormOutcome {
        message: CONTACT_SENT,
        severity: Severity::Success,
        reset: true,
    }
}

pub fn submit_newsletter(email: &str) -> FormOutcome {
    if is_valid_email(email) {
        FormOutcome {
            message: NEWSLETTER_SUBSCRIBED,
            severity: Severity::Success,
            reset: true,
        }
    } else {
        FormOutcome {
            message: NEWSLETTER_INVALID,
            severity: Severity::Error,
            reset: false,
        }
    }
}

fn apply(outcome: FormOutcome, form: &NodeRef, notifier: Option<&Notifier>) {
    info!("Form outcome: {:?} (reset: {})", outcome.severity, outcome.reset);
    if let Some(notifier) = notifier {
        notifier.notify(outcome.message, outcome.severity);
    }
    if outcome.reset {
        if let Some(form) = form.cast::<HtmlFormElement>() {
            form.reset();
        }
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let notifier = use_context::<Notifier>();
    let form = use_node_ref();

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            apply(submit_contact(), &form, notifier.as_ref());
        })
    };

    html! {
        <form ref={form} class="contact-form" {onsubmit}>
            <div class="form-row">
                <input type="text" name="name" placeholder="Nama Lengkap" required=true />
                <input type="email" name="email" placeholder="Email" required=true />
            </div>
            <input type="text" name="subject" placeholder="Subjek" />
            <textarea name="message" rows="5" placeholder="Pesan Anda" required=true></textarea>
            <button type="submit" class="btn btn-primary">{"Kirim Pesan"}</button>
        </form>
    }
}

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let notifier = use_context::<Notifier>();
    let form = use_node_ref();
    let email = use_node_ref();

    let onsubmit = {
        let form = form.clone();
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = email
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            apply(submit_newsletter(&value), &form, notifier.as_ref());
        })
    };

    html! {
        <form ref={form} class="newsletter-form" {onsubmit}>
            <input ref={email} type="email" name="email" placeholder="Alamat email Anda" />
            <button type="submit" class="btn btn-primary">{"Berlangganan"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_always_succeeds_and_clears() {
        let outcome = submit_contact();
        assert_eq!(outcome.severity, Severity::Success);
        assert_eq!(outcome.message, CONTACT_SENT);
        assert!(outcome.reset);
    }

    #[test]
    fn test_newsletter_valid_email() {
        let outcome = submit_newsletter("reader@edammura.id");
        assert_eq!(outcome.severity, Severity::Success);
        assert_eq!(outcome.message, NEWSLETTER_SUBSCRIBED);
        assert!(outcome.reset);
    }

    #[test]
    fn test_newsletter_invalid_email_keeps_form() {
        for email in ["", "reader", "reader@edammura", "read er@edammura.id"] {
            let outcome = submit_newsletter(email);
            assert_eq!(outcome.severity, Severity::Error, "{email}");
            assert_eq!(outcome.message, NEWSLETTER_INVALID);
            assert!(!outcome.reset);
        }
    }
}
