//! HTTP outcomes as typed values.
//!
//! An [`Outcome`] is a status code, a status label and a message. Missing
//! labels are looked up in a [`StatusRegistry`] (the IANA table by default)
//! and fall back to [`UNKNOWN_STATUS`]; a missing message repeats the label.
//!
//! Outcomes travel as one of two families: [`HttpError`] for failures raised
//! through `Result`, and [`HttpResponse`] for results returned directly. The
//! [`errors`] and [`responses`] catalogs hold a [`Variant`] per standard code.
//!
//! ```
//! use http_outcome::{errors, responses};
//!
//! let error = errors::BAD_REQUEST.build();
//! assert_eq!(error.to_string(), "400 Bad Request");
//!
//! let created = responses::CREATED.build_with_message("User Created!");
//! assert_eq!(created.status(), "Created");
//! assert_eq!(created.message(), "User Created!");
//! ```

mod catalog;
mod http_error;
mod http_outcome;
mod http_response;
mod http_status;
mod http_variant;

pub use catalog::{errors, responses};
pub use http_error::{HttpError, OutcomeError};
pub use http_outcome::{Outcome, OutcomeOptions};
pub use http_response::HttpResponse;
pub use http_status::{
    resolve_status, IanaRegistry, LookupError, StatusClass, StatusRegistry, UNKNOWN_STATUS,
};
pub use http_variant::{Family, Variant};
