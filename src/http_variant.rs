use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use crate::http_error::HttpError;
use crate::http_outcome::Outcome;
use crate::http_response::HttpResponse;

/// A wrapper type an [`Outcome`] can be delivered as.
pub trait Family: From<Outcome> + Deref<Target = Outcome> {
    const NAME: &'static str;
}

impl Family for HttpError {
    const NAME: &'static str = "error";
}

impl Family for HttpResponse {
    const NAME: &'static str = "response";
}

/// A named outcome kind with a fixed status code.
///
/// Variants are plain constants. New kinds are derived from existing ones
/// without touching this crate:
///
/// ```
/// use http_outcome::{errors, HttpError, Variant};
///
/// const VALIDATION_ERROR: Variant<HttpError> = errors::BAD_REQUEST
///     .with_name("ValidationError")
///     .with_status("Validation Error");
///
/// let error = VALIDATION_ERROR.build();
/// assert_eq!(error.status_code(), 400);
/// assert_eq!(error.status(), "Validation Error");
/// assert_eq!(error.message(), "Validation Error");
/// ```
pub struct Variant<F> {
    name: &'static str,
    status_code: i32,
    status: Option<&'static str>,
    message: Option<&'static str>,
    family: PhantomData<fn() -> F>,
}

impl<F> Variant<F> {
    pub const fn new(name: &'static str, status_code: i32) -> Self {
        Variant {
            name,
            status_code,
            status: None,
            message: None,
            family: PhantomData,
        }
    }

    pub const fn with_name(self, name: &'static str) -> Self {
        Variant { name, ..self }
    }

    /// Fixes the label, keeping the status code.
    pub const fn with_status(self, status: &'static str) -> Self {
        Variant {
            status: Some(status),
            ..self
        }
    }

    /// Fixes the default message, keeping the status code.
    pub const fn with_message(self, message: &'static str) -> Self {
        Variant {
            message: Some(message),
            ..self
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn status_code(&self) -> i32 {
        self.status_code
    }

    pub const fn fixed_status(&self) -> Option<&'static str> {
        self.status
    }

    pub const fn fixed_message(&self) -> Option<&'static str> {
        self.message
    }

    /// True when `outcome` has this variant's code and, if the variant fixes
    /// a label, that label too.
    pub fn matches(&self, outcome: &Outcome) -> bool {
        outcome.status_code() == self.status_code
            && self.status.map_or(true, |status| outcome.status() == status)
    }
}

impl<F: Family> Variant<F> {
    /// Builds the outcome. Arguments given here take precedence over the
    /// variant's fixed label and message; anything still missing is derived.
    pub fn build_with(&self, message: Option<&str>, status: Option<&str>) -> F {
        let status = status.filter(|s| !s.is_empty()).or(self.status);
        let message = message.filter(|m| !m.is_empty()).or(self.message);
        F::from(Outcome::with_parts(self.status_code, message, status))
    }

    pub fn build(&self) -> F {
        self.build_with(None, None)
    }

    pub fn build_with_message(&self, message: &str) -> F {
        self.build_with(Some(message), None)
    }
}

impl<F> Clone for Variant<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Variant<F> {}

impl<F> PartialEq for Variant<F> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.status_code == other.status_code
            && self.status == other.status
            && self.message == other.message
    }
}

impl<F> Eq for Variant<F> {}

impl<F: Family> fmt::Debug for Variant<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant")
            .field("family", &F::NAME)
            .field("name", &self.name)
            .field("status_code", &self.status_code)
            .field("status", &self.status)
            .field("message", &self.message)
            .finish()
    }
}
