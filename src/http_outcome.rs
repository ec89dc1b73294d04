use std::fmt;

use crate::http_error::{HttpError, OutcomeError};
use crate::http_response::HttpResponse;
use crate::http_status::{resolve_status, IanaRegistry, StatusClass, StatusRegistry};

/// A status code together with its label and a human readable message.
///
/// The label and message are never empty. Once built, an `Outcome` cannot be
/// changed; use one of the constructors to make a new one instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outcome {
    status_code: i32,
    status: String,
    message: String,
}

/// Raw inputs for [`Outcome::construct`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeOptions {
    pub status_code: Option<i32>,
    pub message: Option<String>,
    pub status: Option<String>,
}

impl OutcomeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_code(mut self, code: i32) -> Self {
        self.status_code = Some(code);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn construct(self) -> Result<Outcome, OutcomeError> {
        self.construct_in(&IanaRegistry)
    }

    pub fn construct_in<R: StatusRegistry + ?Sized>(
        self,
        registry: &R,
    ) -> Result<Outcome, OutcomeError> {
        let code = self
            .status_code
            .ok_or(OutcomeError::InvalidInput("a status code is required"))?;
        Ok(Outcome::with_parts_in(
            registry,
            code,
            self.message.as_deref(),
            self.status.as_deref(),
        ))
    }
}

impl Outcome {
    /// Builds an outcome from raw options, failing only when no status code was given.
    pub fn construct(options: OutcomeOptions) -> Result<Outcome, OutcomeError> {
        options.construct()
    }

    /// An outcome whose label and message both come from the registry.
    pub fn new(status_code: i32) -> Outcome {
        Outcome::with_parts(status_code, None, None)
    }

    pub fn with_parts(status_code: i32, message: Option<&str>, status: Option<&str>) -> Outcome {
        Outcome::with_parts_in(&IanaRegistry, status_code, message, status)
    }

    /// Resolves the label first, then defaults the message to that label.
    /// Empty strings count as not given.
    pub fn with_parts_in<R: StatusRegistry + ?Sized>(
        registry: &R,
        status_code: i32,
        message: Option<&str>,
        status: Option<&str>,
    ) -> Outcome {
        let status = match non_empty(status) {
            Some(status) => status.to_string(),
            None => resolve_status(registry, status_code),
        };
        let message = match non_empty(message) {
            Some(message) => message.to_string(),
            None => status.clone(),
        };

        Outcome {
            status_code,
            status,
            message,
        }
    }

    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn class(&self) -> StatusClass {
        StatusClass::of(self.status_code)
    }

    pub fn into_error(self) -> HttpError {
        HttpError::from(self)
    }

    pub fn into_response(self) -> HttpResponse {
        HttpResponse::from(self)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status_code, self.status)?;
        if self.message != self.status {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
