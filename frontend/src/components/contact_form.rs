use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

pub fn validate(draft: &ContactDraft) -> ContactErrors {
    ContactErrors {
        name: draft.name.trim().is_empty().then_some("Please tell us your name."),
        email: (!looks_like_email(draft.email.trim())).then_some("Please enter a valid email address."),
        message: (draft.message.trim().chars().count() < MIN_MESSAGE_CHARS)
            .then_some("Please write a few more words."),
    }
}

/// `mailto:` link that opens the visitor's mail client with the draft filled in.
pub fn mailto_url(draft: &ContactDraft) -> String {
    let subject = format!("Enquiry from {}", draft.name.trim());
    let body = format!("{}\n\nReply to: {}", draft.message.trim(), draft.email.trim());
    format!(
        "mailto:{}?subject={}&body={}",
        config::CONTACT_EMAIL,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactDraft::default);
    let errors = use_state(ContactErrors::default);
    let submitted = use_state(|| false);

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ContactDraft { name: input.value(), ..(*draft).clone() });
        })
    };
    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ContactDraft { email: input.value(), ..(*draft).clone() });
        })
    };
    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(ContactDraft { message: input.value(), ..(*draft).clone() });
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = validate(&draft);
            let valid = found.is_empty();
            errors.set(found);
            if !valid {
                return;
            }
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.location().set_href(&mailto_url(&draft)) {
                    log::warn!("could not open mail client: {:?}", err);
                    return;
                }
            }
            submitted.set(true);
        })
    };

    let field_error = |error: Option<&'static str>| match error {
        Some(message) => html! { <p class="field-error" role="alert">{message}</p> },
        None => html! {},
    };

    html! {
        <form class="contact-form" {onsubmit} novalidate={true}>
            <label for="contact-name">{"Name"}</label>
            <input id="contact-name" type="text" autocomplete="name" value={draft.name.clone()} oninput={on_name} />
            { field_error(errors.name) }

            <label for="contact-email">{"Email"}</label>
            <input id="contact-email" type="email" autocomplete="email" value={draft.email.clone()} oninput={on_email} />
            { field_error(errors.email) }

            <label for="contact-message">{"Message"}</label>
            <textarea id="contact-message" rows="5" value={draft.message.clone()} oninput={on_message} />
            { field_error(errors.message) }

            <button type="submit" class="contact-submit">{"Send enquiry"}</button>
            if *submitted {
                <p class="contact-sent">{"Your mail app should now be open with the enquiry ready to send."}</p>
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn complete_draft_passes() {
        let errors = validate(&draft("Ada", "ada@example.com", "Interested in 10 oz bars."));
        assert!(errors.is_empty());
    }

    #[test]
    fn reports_each_field() {
        let errors = validate(&draft("  ", "ada@", "hi"));
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.message.is_some());
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("a@.co"));
        assert!(!looks_like_email("a b@c.co"));
    }

    #[test]
    fn mailto_is_encoded() {
        let url = mailto_url(&draft("Ada L", "ada@example.com", "Price & delivery?"));
        assert!(url.starts_with(&format!("mailto:{}?subject=", config::CONTACT_EMAIL)));
        assert!(url.contains("Enquiry%20from%20Ada%20L"));
        assert!(url.contains("Price%20%26%20delivery%3F"));
        assert!(!url.contains(' '));
    }
}
