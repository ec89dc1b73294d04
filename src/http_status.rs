use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Label used whenever a status code cannot be resolved to a registered reason phrase.
pub const UNKNOWN_STATUS: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("status code {0} is outside the range of the registry")]
    OutOfRange(i32),

    #[error("status code {0} is not registered")]
    Unregistered(i32),
}

/// A table mapping numeric status codes to their reason phrases.
pub trait StatusRegistry {
    fn lookup(&self, code: i32) -> Result<Cow<'_, str>, LookupError>;
}

/// The IANA status code registry as shipped by the `http` crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IanaRegistry;

impl StatusRegistry for IanaRegistry {
    fn lookup(&self, code: i32) -> Result<Cow<'_, str>, LookupError> {
        let raw = u16::try_from(code).map_err(|_| LookupError::OutOfRange(code))?;
        let status = http::StatusCode::from_u16(raw).map_err(|_| LookupError::OutOfRange(code))?;
        status
            .canonical_reason()
            .map(Cow::Borrowed)
            .ok_or(LookupError::Unregistered(code))
    }
}

impl<S: BuildHasher> StatusRegistry for HashMap<i32, String, S> {
    fn lookup(&self, code: i32) -> Result<Cow<'_, str>, LookupError> {
        self.get(&code)
            .map(|text| Cow::Borrowed(text.as_str()))
            .ok_or(LookupError::Unregistered(code))
    }
}

/// Resolves the reason phrase for `code`, falling back to [`UNKNOWN_STATUS`]
/// for any lookup failure.
pub fn resolve_status<R: StatusRegistry + ?Sized>(registry: &R, code: i32) -> String {
    match registry.lookup(code) {
        Ok(text) if !text.is_empty() => text.into_owned(),
        Ok(_) => {
            tracing::debug!(code, "registry returned an empty reason phrase");
            UNKNOWN_STATUS.to_string()
        }
        Err(error) => {
            tracing::debug!(code, %error, "status lookup failed");
            UNKNOWN_STATUS.to_string()
        }
    }
}

/// Coarse grouping of a status code by its hundreds digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
    Nonstandard,
}

impl StatusClass {
    pub fn of(code: i32) -> StatusClass {
        match code {
            100..=199 => StatusClass::Informational,
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirection,
            400..=499 => StatusClass::ClientError,
            500..=599 => StatusClass::ServerError,
            _ => StatusClass::Nonstandard,
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, StatusClass::ClientError | StatusClass::ServerError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(200, "OK")]
    #[case(201, "Created")]
    #[case(400, "Bad Request")]
    #[case(404, "Not Found")]
    #[case(410, "Gone")]
    #[case(500, "Internal Server Error")]
    #[case(505, "HTTP Version Not Supported")]
    fn iana_registry_knows_standard_codes(#[case] code: i32, #[case] text: &str) {
        assert_eq!(IanaRegistry.lookup(code).unwrap(), text);
    }

    #[test]
    fn unregistered_code_in_range() {
        assert_eq!(
            IanaRegistry.lookup(999),
            Err(LookupError::Unregistered(999))
        );
    }

    #[rstest]
    #[case(-1)]
    #[case(0)]
    #[case(99)]
    #[case(1000)]
    #[case(70_000)]
    fn codes_outside_registry_range(#[case] code: i32) {
        assert_eq!(IanaRegistry.lookup(code), Err(LookupError::OutOfRange(code)));
    }

    #[rstest]
    #[case(999)]
    #[case(-400)]
    #[case(1000)]
    fn resolve_falls_back_to_unknown(#[case] code: i32) {
        assert_eq!(resolve_status(&IanaRegistry, code), UNKNOWN_STATUS);
    }

    #[test]
    fn resolve_uses_custom_table() {
        let table = HashMap::from([(299, "Mostly Fine".to_string()), (298, String::new())]);
        assert_eq!(resolve_status(&table, 299), "Mostly Fine");
        assert_eq!(resolve_status(&table, 298), UNKNOWN_STATUS);
        assert_eq!(resolve_status(&table, 200), UNKNOWN_STATUS);
    }

    #[test]
    fn classes() {
        assert_eq!(StatusClass::of(101), StatusClass::Informational);
        assert_eq!(StatusClass::of(204), StatusClass::Success);
        assert_eq!(StatusClass::of(308), StatusClass::Redirection);
        assert_eq!(StatusClass::of(418), StatusClass::ClientError);
        assert_eq!(StatusClass::of(503), StatusClass::ServerError);
        assert_eq!(StatusClass::of(999), StatusClass::Nonstandard);
        assert_eq!(StatusClass::of(-5), StatusClass::Nonstandard);
        assert!(StatusClass::of(404).is_error());
        assert!(!StatusClass::of(302).is_error());
    }
}
