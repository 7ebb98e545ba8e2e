//! Contact form validation and the simulated submission outcome.
//!
//! Nothing is sent anywhere. A valid submission shows a success status and
//! clears the inputs; an invalid one shows per-field errors and keeps them.
//! All values are trimmed before checking. Lengths are measured in UTF-16
//! code units, the way the browser reports an input's length.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::sync::LazyLock;

use regex::Regex;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 10;

/// `local@domain.tld` with no whitespace and a single `@`.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub const STATUS_SENT: &str = "✓ Message sent successfully! Thank you for reaching out.";
pub const STATUS_REJECTED: &str = "✗ Please fix the errors above";

pub const CLASS_SUCCESS: &str = "success";
pub const CLASS_ERROR: &str = "error";

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(EMAIL_PATTERN) {
    Ok(re) => Some(re),
    Err(_) => None,
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Element id of the input.
    #[must_use]
    pub fn input_id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Element id of the inline error text.
    #[must_use]
    pub fn error_id(self) -> &'static str {
        match self {
            Self::Name => "nameError",
            Self::Email => "emailError",
            Self::Message => "messageError",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Message => 2,
        }
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameTooShort,
    InvalidEmail,
    MessageTooShort,
}

impl FieldError {
    /// Text shown next to the field.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NameTooShort => "Name must be at least 2 characters",
            Self::InvalidEmail => "Please enter a valid email address",
            Self::MessageTooShort => "Message must be at least 10 characters",
        }
    }
}

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value.trim()))
}

/// Length of `value` as the browser counts it.
#[must_use]
pub fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Validate a single field, as done on blur.
#[must_use]
pub fn validate_field(field: Field, value: &str) -> Option<FieldError> {
    let value = value.trim();
    match field {
        Field::Name if input_len(value) < MIN_NAME_CHARS => Some(FieldError::NameTooShort),
        Field::Email if !is_valid_email(value) => Some(FieldError::InvalidEmail),
        Field::Message if input_len(value) < MIN_MESSAGE_CHARS => Some(FieldError::MessageTooShort),
        _ => None,
    }
}

/// Raw input values as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    #[must_use]
    pub fn validate(&self) -> FormReport {
        let mut report = FormReport::default();
        for field in Field::ALL {
            report.errors[field.index()] = validate_field(field, self.value(field));
        }
        report
    }
}

/// Per-field validation result for a whole form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormReport {
    errors: [Option<FieldError>; 3],
}

impl FormReport {
    #[must_use]
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors[field.index()]
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.iter().all(Option::is_none)
    }

    /// Every field with the text its error element should show (empty when valid).
    pub fn field_texts(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        Field::ALL
            .into_iter()
            .map(|field| (field, self.error(field).map_or("", FieldError::message)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Inputs are cleared and the status clears itself after a delay.
    Sent,
    /// Inputs are kept and each failing field shows its error.
    Rejected(FormReport),
}

impl SubmitOutcome {
    #[must_use]
    pub fn status_text(&self) -> &'static str {
        match self {
            Self::Sent => STATUS_SENT,
            Self::Rejected(_) => STATUS_REJECTED,
        }
    }

    /// Class to add to the status element; the other one is removed.
    #[must_use]
    pub fn status_class(&self) -> (&'static str, &'static str) {
        match self {
            Self::Sent => (CLASS_SUCCESS, CLASS_ERROR),
            Self::Rejected(_) => (CLASS_ERROR, CLASS_SUCCESS),
        }
    }

    #[must_use]
    pub fn report(&self) -> FormReport {
        match self {
            Self::Sent => FormReport::default(),
            Self::Rejected(report) => *report,
        }
    }
}

/// Decide the outcome of a submit.
#[must_use]
pub fn submit(form: &ContactForm) -> SubmitOutcome {
    let report = form.validate();
    if report.is_valid() { SubmitOutcome::Sent } else { SubmitOutcome::Rejected(report) }
}
