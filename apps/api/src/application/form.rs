//! Application form and its field rules.
//!
//! `validate` is pure and re-evaluated from scratch on every call. Each field
//! reports at most one message: the first failing rule in the order
//! empty → length → pattern. Values are trimmed before measurement and lengths
//! are counted in characters.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9\s\-().]{7,20}$").unwrap());

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const EMAIL_MAX: usize = 254;
const WHY_HIRE_MIN: usize = 20;
const WHY_HIRE_MAX: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Email,
    ContactNumber,
    WhyHire,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::ContactNumber,
        FormField::WhyHire,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::ContactNumber => "contactNumber",
            FormField::WhyHire => "whyHire",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four required text fields, held exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub why_hire: String,
}

impl ApplicationForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::ContactNumber => &self.contact_number,
            FormField::WhyHire => &self.why_hire,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::ContactNumber => &mut self.contact_number,
            FormField::WhyHire => &mut self.why_hire,
        };
        *slot = value.into();
    }
}

/// Field → message, holding only fields that currently fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationFormErrors(BTreeMap<FormField, String>);

impl ApplicationFormErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Sets or clears a single field's message.
    pub fn put(&mut self, field: FormField, message: Option<String>) {
        match message {
            Some(m) => {
                self.0.insert(field, m);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Validates the whole form. An empty result means the form may be submitted.
pub fn validate(form: &ApplicationForm) -> ApplicationFormErrors {
    let mut errors = ApplicationFormErrors::default();
    for field in FormField::ALL {
        errors.put(field, validate_field(form, field));
    }
    errors
}

/// Strips surrounding whitespace, including a byte-order mark.
fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// The first failing rule's message for one field, if any.
pub fn validate_field(form: &ApplicationForm, field: FormField) -> Option<String> {
    let value = trim_input(form.get(field));
    let len = value.chars().count();

    let message = match field {
        FormField::Name => {
            if value.is_empty() {
                "Full name is required."
            } else if len < NAME_MIN {
                "Name must be at least 2 characters."
            } else if len > NAME_MAX {
                "Name must be 100 characters or fewer."
            } else if !NAME_RE.is_match(value) {
                "Name may only contain letters, spaces, hyphens, and apostrophes."
            } else {
                return None;
            }
        }
        FormField::Email => {
            if value.is_empty() {
                "Email address is required."
            } else if len > EMAIL_MAX {
                "Email address is too long."
            } else if !EMAIL_RE.is_match(value) {
                "Please enter a valid email address (e.g. user@email.com)."
            } else {
                return None;
            }
        }
        FormField::ContactNumber => {
            if value.is_empty() {
                "Contact number is required."
            } else if !PHONE_RE.is_match(value) {
                "Enter a valid phone number (7–20 digits, may include +, spaces, dashes)."
            } else {
                return None;
            }
        }
        FormField::WhyHire => {
            if value.is_empty() {
                "Please tell us why we should hire you."
            } else if len < WHY_HIRE_MIN {
                "Please elaborate — minimum 20 characters."
            } else if len > WHY_HIRE_MAX {
                "Response must be 1000 characters or fewer."
            } else {
                return None;
            }
        }
    };

    Some(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ApplicationForm {
        ApplicationForm {
            name: "Jo".to_string(),
            email: "a@b.com".to_string(),
            contact_number: "09171234567".to_string(),
            why_hire: "I ship reliable software on time.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = validate(&valid_form());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_all_four_fields_fail() {
        let form = ApplicationForm {
            name: String::new(),
            email: "bad".to_string(),
            contact_number: "1".to_string(),
            why_hire: "short".to_string(),
        };
        let errors = validate(&form);
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(FormField::Name), Some("Full name is required."));
        assert_eq!(
            errors.get(FormField::Email),
            Some("Please enter a valid email address (e.g. user@email.com).")
        );
        assert_eq!(
            errors.get(FormField::ContactNumber),
            Some("Enter a valid phone number (7–20 digits, may include +, spaces, dashes).")
        );
        assert_eq!(
            errors.get(FormField::WhyHire),
            Some("Please elaborate — minimum 20 characters.")
        );
    }

    #[test]
    fn test_validate_is_deterministic() {
        let form = ApplicationForm {
            name: "J".to_string(),
            ..valid_form()
        };
        assert_eq!(validate(&form), validate(&form));
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut form = valid_form();
        form.set(FormField::Name, "   ");
        form.set(FormField::WhyHire, "\n\t ");
        let errors = validate(&form);
        assert_eq!(errors.get(FormField::Name), Some("Full name is required."));
        assert_eq!(
            errors.get(FormField::WhyHire),
            Some("Please tell us why we should hire you.")
        );
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        let mut form = valid_form();
        form.set(FormField::Name, "\u{feff}");
        assert_eq!(
            validate_field(&form, FormField::Name).as_deref(),
            Some("Full name is required.")
        );

        form.set(FormField::Name, "\u{feff} Jo \u{feff}");
        assert_eq!(validate_field(&form, FormField::Name), None);
    }

    #[test]
    fn test_name_rules_in_order() {
        let mut form = valid_form();

        form.set(FormField::Name, " J ");
        assert_eq!(
            validate_field(&form, FormField::Name).as_deref(),
            Some("Name must be at least 2 characters.")
        );

        form.set(FormField::Name, "a".repeat(101));
        assert_eq!(
            validate_field(&form, FormField::Name).as_deref(),
            Some("Name must be 100 characters or fewer.")
        );

        form.set(FormField::Name, "R2-D2");
        assert_eq!(
            validate_field(&form, FormField::Name).as_deref(),
            Some("Name may only contain letters, spaces, hyphens, and apostrophes.")
        );

        form.set(FormField::Name, "Mary-Jane O'Neil");
        assert_eq!(validate_field(&form, FormField::Name), None);
    }

    #[test]
    fn test_email_length_checked_before_shape() {
        let mut form = valid_form();
        form.set(FormField::Email, format!("{}@example.com", "a".repeat(250)));
        assert_eq!(
            validate_field(&form, FormField::Email).as_deref(),
            Some("Email address is too long.")
        );

        form.set(FormField::Email, "two@@example.com");
        assert!(validate_field(&form, FormField::Email).is_some());

        form.set(FormField::Email, "me @example.com");
        assert!(validate_field(&form, FormField::Email).is_some());

        form.set(FormField::Email, "me@example");
        assert!(validate_field(&form, FormField::Email).is_some());

        form.set(FormField::Email, "  first.last@mail.example.org ");
        assert_eq!(validate_field(&form, FormField::Email), None);
    }

    #[test]
    fn test_contact_number_shapes() {
        let mut form = valid_form();
        for ok in ["+63 917 123 4567", "(02) 8123-4567", "555.123.4567", "1234567"] {
            form.set(FormField::ContactNumber, ok);
            assert_eq!(validate_field(&form, FormField::ContactNumber), None, "{ok}");
        }
        for bad in ["123456", "0917-CALL-NOW", "++639171234567", "123456789012345678901"] {
            form.set(FormField::ContactNumber, bad);
            assert!(validate_field(&form, FormField::ContactNumber).is_some(), "{bad}");
        }
    }

    #[test]
    fn test_why_hire_bounds() {
        let mut form = valid_form();
        form.set(FormField::WhyHire, "x".repeat(20));
        assert_eq!(validate_field(&form, FormField::WhyHire), None);

        form.set(FormField::WhyHire, "x".repeat(1001));
        assert_eq!(
            validate_field(&form, FormField::WhyHire).as_deref(),
            Some("Response must be 1000 characters or fewer.")
        );
    }

    #[test]
    fn test_errors_serialize_with_field_names() {
        let form = ApplicationForm {
            contact_number: "1".to_string(),
            ..valid_form()
        };
        let value = serde_json::to_value(validate(&form)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "contactNumber": "Enter a valid phone number (7–20 digits, may include +, spaces, dashes)."
            })
        );
    }
}
