use std::error::Error;
use std::ops::Deref;

use crate::http_outcome::Outcome;

/// Errors raised while building an [`Outcome`] from raw options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OutcomeError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

/// An [`Outcome`] raised as a failure.
///
/// Handlers return it through `Result` and `?` like any other error. Code
/// further up the stack can then tell a structured HTTP outcome apart from an
/// unexpected fault with [`HttpError::find`] or [`HttpError::find_in`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{0}")]
pub struct HttpError(Outcome);

impl HttpError {
    pub fn outcome(&self) -> &Outcome {
        &self.0
    }

    pub fn into_outcome(self) -> Outcome {
        self.0
    }

    /// Walks the `source()` chain of `error` looking for an `HttpError`.
    pub fn find<'a>(error: &'a (dyn Error + 'static)) -> Option<&'a HttpError> {
        let mut current = Some(error);
        while let Some(error) = current {
            if let Some(found) = error.downcast_ref::<HttpError>() {
                return Some(found);
            }
            current = error.source();
        }
        None
    }

    /// Like [`HttpError::find`], but also sees through `anyhow` context layers.
    pub fn find_in(error: &anyhow::Error) -> Option<&HttpError> {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<HttpError>())
    }
}

impl From<Outcome> for HttpError {
    fn from(outcome: Outcome) -> Self {
        HttpError(outcome)
    }
}

impl From<HttpError> for Outcome {
    fn from(error: HttpError) -> Self {
        error.0
    }
}

impl Deref for HttpError {
    type Target = Outcome;

    fn deref(&self) -> &Outcome {
        &self.0
    }
}
