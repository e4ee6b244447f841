use dioxus::prelude::*;

use crate::i18n::{ContactDraft, ContactField};
use crate::site::use_site;
use crate::views::bound_content;

/// Inbox the visitor's mail client is pointed at on submit.
pub const CONTACT_ADDRESS: &str = "contact@greensun.pl";

/// Subject options, in menu order.
pub const SUBJECT_KEYS: [&str; 4] = [
    "subject-ground",
    "subject-floating",
    "subject-roofs",
    "subject-other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormStatus {
    Editing,
    /// Submit pressed with problems; field messages are shown from now on.
    Invalid,
    /// Handed off to the mail client.
    Sent,
}

/// Script that opens the visitor's mail client with the draft filled in.
/// Values are embedded as JSON string literals and URI-encoded in the page.
pub fn mailto_script(draft: &ContactDraft, subject: &str) -> String {
    let body = format!(
        "{}\n\n{}\n\n{}",
        draft.message.trim(),
        draft.first_name.trim(),
        draft.email.trim()
    );
    let literal = |value: &str| serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        "window.location.href = 'mailto:{CONTACT_ADDRESS}?subject=' + encodeURIComponent({}) + '&body=' + encodeURIComponent({});",
        literal(subject),
        literal(&body),
    )
}

#[component]
pub fn ContactForm() -> Element {
    let site = use_site();
    let mut draft = use_signal(ContactDraft::default);
    let mut status = use_signal(|| FormStatus::Editing);

    let messages = site.form_messages();
    let binder = site.binder();

    // Re-validated on every render so messages follow the active language.
    let issues = match status() {
        FormStatus::Invalid => draft.read().validate(&messages),
        _ => Vec::new(),
    };
    let issue_for = |field: ContactField| {
        issues
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.clone())
    };
    let first_name_issue = issue_for(ContactField::FirstName);
    let email_issue = issue_for(ContactField::Email);
    let message_issue = issue_for(ContactField::Message);
    let privacy_issue = issue_for(ContactField::Privacy);

    let chosen_key = draft.read().subject.clone();
    let chosen_label = chosen_key.as_deref().map(|key| binder.text(key));
    let subject_label = binder.subject_label(chosen_label.as_deref());
    let subjects = SUBJECT_KEYS.map(|key| (key, binder.text(key)));

    let submit_label = match status() {
        FormStatus::Sent => messages.sent.clone(),
        _ => binder.text("form-submit"),
    };
    let status_line = match status() {
        FormStatus::Invalid if !issues.is_empty() => Some(messages.error.clone()),
        FormStatus::Sent => Some(messages.success_fallback.clone()),
        _ => None,
    };

    let on_submit = {
        let site = site.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let problems = draft.read().validate(&site.form_messages());
            if !problems.is_empty() {
                tracing::debug!(count = problems.len(), "contact form rejected");
                status.set(FormStatus::Invalid);
                return;
            }
            let subject = {
                let current = draft.read();
                let chosen = current.subject.as_deref().map(|key| site.translate(key));
                site.binder().subject_label(chosen.as_deref())
            };
            document::eval(&mailto_script(&draft.read(), &subject));
            status.set(FormStatus::Sent);
        }
    };

    rsx! {
        section { id: "contact", class: "section contact",
            h2 { {bound_content(&binder, "contact-title")} }
            p { {bound_content(&binder, "contact-text")} }

            form { class: "contact__form", novalidate: true, onsubmit: on_submit,
                div { class: "form__field",
                    input {
                        r#type: "text",
                        name: "firstName",
                        placeholder: binder.text("form-firstName"),
                        value: "{draft.read().first_name}",
                        oninput: move |evt| draft.write().first_name = evt.value(),
                    }
                    if let Some(issue) = first_name_issue {
                        span { class: "form__error", "{issue}" }
                    }
                }

                div { class: "form__field",
                    input {
                        r#type: "email",
                        name: "email",
                        placeholder: binder.text("form-email"),
                        value: "{draft.read().email}",
                        oninput: move |evt| draft.write().email = evt.value(),
                    }
                    if let Some(issue) = email_issue {
                        span { class: "form__error", "{issue}" }
                    }
                }

                div { class: "form__field form__subject",
                    span { class: "form__subject-label", "{subject_label}" }
                    select {
                        name: "subject",
                        value: chosen_key.clone().unwrap_or_default(),
                        onchange: move |evt| {
                            let value = evt.value();
                            draft.write().subject = (!value.is_empty()).then_some(value);
                        },
                        option { value: "", disabled: true, hidden: true, selected: chosen_key.is_none(), "{subject_label}" }
                        for (key, label) in subjects {
                            option { key: "{key}", value: key, "{label}" }
                        }
                    }
                }

                div { class: "form__field",
                    textarea {
                        name: "message",
                        rows: "5",
                        placeholder: binder.text("form-message"),
                        value: "{draft.read().message}",
                        oninput: move |evt| draft.write().message = evt.value(),
                    }
                    if let Some(issue) = message_issue {
                        span { class: "form__error", "{issue}" }
                    }
                }

                label { class: "form__field form__checkbox",
                    input {
                        r#type: "checkbox",
                        name: "privacy",
                        checked: draft.read().privacy,
                        onchange: move |evt| draft.write().privacy = evt.checked(),
                    }
                    {bound_content(&binder, "form-privacy")}
                }
                if let Some(issue) = privacy_issue {
                    span { class: "form__error", "{issue}" }
                }

                button { class: "button button--primary", r#type: "submit", "{submit_label}" }
                if let Some(line) = status_line {
                    p { class: "form__status", role: "status", "{line}" }
                }
            }
        }
    }
}
