//! Contact-form status and validation strings, plus client-side validation.
//!
//! The strings come from the `form-*` keys of the active table. Each one
//! has a built-in default per language so the form stays usable when a
//! table failed to load.

use super::table::TranslationTable;
use super::LanguageCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessages {
    pub sending: String,
    pub sent: String,
    pub error: String,
    pub server_error: String,
    pub generic_error: String,
    pub success_fallback: String,
    pub value_missing: String,
    pub type_mismatch: String,
    pub too_short: String,
    pub checkbox_required: String,
}

/// `(key, pl, en, fr)` for each message, in struct field order.
const DEFAULTS: [(&str, &str, &str, &str); 10] = [
    ("form-sending", "Wysyłanie...", "Sending...", "Envoi..."),
    ("form-sent", "Wysłano!", "Sent!", "Envoyé !"),
    ("form-error", "Błąd", "Error", "Erreur"),
    ("form-serverError", "Błąd serwera", "Server error", "Erreur serveur"),
    (
        "form-genericError",
        "Wystąpił błąd",
        "An error occurred",
        "Une erreur s'est produite",
    ),
    (
        "form-successFallback",
        "Wysłano pomyślnie!",
        "Sent successfully!",
        "Envoyé avec succès !",
    ),
    (
        "form-valueMissing",
        "Wypełnij to pole.",
        "Please fill out this field.",
        "Veuillez remplir ce champ.",
    ),
    (
        "form-typeMismatch",
        "Wprowadź prawidłowy email.",
        "Please enter a valid email.",
        "Veuillez saisir un email valide.",
    ),
    (
        "form-tooShort",
        "Pole za krótkie.",
        "Please lengthen this text.",
        "Veuillez allonger ce texte.",
    ),
    (
        "form-checkboxRequired",
        "Zaznacz to pole.",
        "Please check this box.",
        "Veuillez cocher cette case.",
    ),
];

impl FormMessages {
    /// Table keys read by [`resolve`](Self::resolve).
    pub fn keys() -> impl Iterator<Item = &'static str> {
        DEFAULTS.iter().map(|(key, ..)| *key)
    }

    /// Messages for `code`. Unlike page content these do not fall back to
    /// the primary table: a missing key uses this language's own default.
    pub fn resolve(code: LanguageCode, tables: Option<&TranslationTable>) -> Self {
        let [
            sending,
            sent,
            error,
            server_error,
            generic_error,
            success_fallback,
            value_missing,
            type_mismatch,
            too_short,
            checkbox_required,
        ] = DEFAULTS.map(|(key, pl, en, fr)| {
            tables
                .and_then(|tables| tables.lookup_own(code, key))
                .unwrap_or_else(|| {
                    match code {
                        LanguageCode::Pl => pl,
                        LanguageCode::En => en,
                        LanguageCode::Fr => fr,
                    }
                    .to_string()
                })
        });

        Self {
            sending,
            sent,
            error,
            server_error,
            generic_error,
            success_fallback,
            value_missing,
            type_mismatch,
            too_short,
            checkbox_required,
        }
    }
}

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    Email,
    Message,
    Privacy,
}

/// Form state as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub first_name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub privacy: bool,
}

impl ContactDraft {
    /// First problem per field, in form order, with its localized message.
    pub fn validate(&self, messages: &FormMessages) -> Vec<(ContactField, String)> {
        let mut issues = Vec::new();

        let name = self.first_name.trim();
        if name.is_empty() {
            issues.push((ContactField::FirstName, messages.value_missing.clone()));
        } else if name.chars().count() < NAME_MIN_CHARS {
            issues.push((ContactField::FirstName, messages.too_short.clone()));
        }

        let email = self.email.trim();
        if email.is_empty() {
            issues.push((ContactField::Email, messages.value_missing.clone()));
        } else if !looks_like_email(email) {
            issues.push((ContactField::Email, messages.type_mismatch.clone()));
        }

        let message = self.message.trim();
        if message.is_empty() {
            issues.push((ContactField::Message, messages.value_missing.clone()));
        } else if message.chars().count() < MESSAGE_MIN_CHARS {
            issues.push((ContactField::Message, messages.too_short.clone()));
        }

        if !self.privacy {
            issues.push((ContactField::Privacy, messages.checkbox_required.clone()));
        }

        issues
    }
}

/// Same shape check the browser applies to `type="email"` inputs.
fn looks_like_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !raw.chars().any(char::is_whitespace)
        && !domain.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LanguageTable;

    #[test]
    fn defaults_when_tables_missing() {
        let fr = FormMessages::resolve(LanguageCode::Fr, None);
        assert_eq!(fr.sending, "Envoi...");
        assert_eq!(fr.checkbox_required, "Veuillez cocher cette case.");
    }

    #[test]
    fn table_value_overrides_default() {
        let tables = TranslationTable::new()
            .with(LanguageTable::parse(LanguageCode::Pl, "form-sent = Wiadomość wysłana\n").unwrap())
            .with(LanguageTable::parse(LanguageCode::En, "form-sent = Message sent\n").unwrap());
        let en = FormMessages::resolve(LanguageCode::En, Some(&tables));
        assert_eq!(en.sent, "Message sent");
        assert_eq!(en.error, "Error");
    }

    #[test]
    fn polish_value_does_not_leak_into_other_languages() {
        let tables = TranslationTable::new()
            .with(LanguageTable::parse(LanguageCode::Pl, "form-error = Błąd!\n").unwrap())
            .with(LanguageTable::parse(LanguageCode::En, "site-title = x\n").unwrap());
        assert_eq!(FormMessages::resolve(LanguageCode::En, Some(&tables)).error, "Error");
        assert_eq!(FormMessages::resolve(LanguageCode::Fr, Some(&tables)).error, "Erreur");
        assert_eq!(FormMessages::resolve(LanguageCode::Pl, Some(&tables)).error, "Błąd!");
    }

    #[test]
    fn validation_reports_each_field_once() {
        let messages = FormMessages::resolve(LanguageCode::En, None);
        let issues = ContactDraft {
            first_name: "A".into(),
            email: "not-an-email".into(),
            subject: None,
            message: "".into(),
            privacy: false,
        }
        .validate(&messages);

        assert_eq!(
            issues,
            vec![
                (ContactField::FirstName, "Please lengthen this text.".to_string()),
                (ContactField::Email, "Please enter a valid email.".to_string()),
                (ContactField::Message, "Please fill out this field.".to_string()),
                (ContactField::Privacy, "Please check this box.".to_string()),
            ]
        );
    }

    #[test]
    fn complete_draft_is_valid() {
        let messages = FormMessages::resolve(LanguageCode::Pl, None);
        let draft = ContactDraft {
            first_name: "Jan".into(),
            email: "jan@example.pl".into(),
            subject: Some("Farmy PV".into()),
            message: "Proszę o wycenę farmy 1 MW.".into(),
            privacy: true,
        };
        assert!(draft.validate(&messages).is_empty());
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("a@b.pl"));
        assert!(!looks_like_email("a@"));
        assert!(!looks_like_email("@b.pl"));
        assert!(!looks_like_email("a b@c.pl"));
        assert!(!looks_like_email("a@.pl"));
    }
}
