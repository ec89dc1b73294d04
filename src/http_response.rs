use std::fmt;
use std::ops::Deref;

use crate::http_outcome::Outcome;

/// An [`Outcome`] returned as a successful result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HttpResponse(Outcome);

impl HttpResponse {
    pub fn outcome(&self) -> &Outcome {
        &self.0
    }

    pub fn into_outcome(self) -> Outcome {
        self.0
    }
}

impl From<Outcome> for HttpResponse {
    fn from(outcome: Outcome) -> Self {
        HttpResponse(outcome)
    }
}

impl From<HttpResponse> for Outcome {
    fn from(response: HttpResponse) -> Self {
        response.0
    }
}

impl Deref for HttpResponse {
    type Target = Outcome;

    fn deref(&self) -> &Outcome {
        &self.0
    }
}

impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
