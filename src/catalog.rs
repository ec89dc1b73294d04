//! Predefined variants, one constant per standard status code.
//!
//! [`errors`] holds the client and server error codes as [`HttpError`]
//! variants. [`responses`] holds every code as [`HttpResponse`] variants.
//!
//! [`HttpError`]: crate::HttpError
//! [`HttpResponse`]: crate::HttpResponse

macro_rules! catalog {
    ($family:ty; $($konst:ident: $name:ident = $code:literal),* $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($code), "` ", stringify!($name))]
            pub const $konst: $crate::Variant<$family> =
                $crate::Variant::new(stringify!($name), $code);
        )*

        /// Every variant in this catalog, in ascending code order.
        pub const ALL: &[$crate::Variant<$family>] = &[$($konst),*];

        pub fn by_code(code: i32) -> Option<$crate::Variant<$family>> {
            ALL.iter().copied().find(|variant| variant.status_code() == code)
        }

        pub fn by_name(name: &str) -> Option<$crate::Variant<$family>> {
            ALL.iter().copied().find(|variant| variant.name() == name)
        }
    };
}

// Client and server error codes, shared by both catalogs.
macro_rules! with_error_codes {
    ($callback:ident! { $family:ty; $($extra:tt)* }) => {
        $callback! {
            $family;
            $($extra)*
            BAD_REQUEST: BadRequest = 400,
            UNAUTHORIZED: Unauthorized = 401,
            PAYMENT_REQUIRED: PaymentRequired = 402,
            FORBIDDEN: Forbidden = 403,
            NOT_FOUND: NotFound = 404,
            METHOD_NOT_ALLOWED: MethodNotAllowed = 405,
            NOT_ACCEPTABLE: NotAcceptable = 406,
            PROXY_AUTHENTICATION_REQUIRED: ProxyAuthenticationRequired = 407,
            REQUEST_TIMEOUT: RequestTimeout = 408,
            CONFLICT: Conflict = 409,
            GONE: Gone = 410,
            LENGTH_REQUIRED: LengthRequired = 411,
            PRECONDITION_FAILED: PreconditionFailed = 412,
            PAYLOAD_TOO_LARGE: PayloadTooLarge = 413,
            URI_TOO_LONG: UriTooLong = 414,
            UNSUPPORTED_MEDIA_TYPE: UnsupportedMediaType = 415,
            RANGE_NOT_SATISFIABLE: RangeNotSatisfiable = 416,
            EXPECTATION_FAILED: ExpectationFailed = 417,
            IM_A_TEAPOT: ImATeapot = 418,
            MISDIRECTED_REQUEST: MisdirectedRequest = 421,
            UNPROCESSABLE_ENTITY: UnprocessableEntity = 422,
            LOCKED: Locked = 423,
            FAILED_DEPENDENCY: FailedDependency = 424,
            UPGRADE_REQUIRED: UpgradeRequired = 426,
            PRECONDITION_REQUIRED: PreconditionRequired = 428,
            TOO_MANY_REQUESTS: TooManyRequests = 429,
            REQUEST_HEADER_FIELDS_TOO_LARGE: RequestHeaderFieldsTooLarge = 431,
            UNAVAILABLE_FOR_LEGAL_REASONS: UnavailableForLegalReasons = 451,
            INTERNAL_SERVER_ERROR: InternalServerError = 500,
            NOT_IMPLEMENTED: NotImplemented = 501,
            BAD_GATEWAY: BadGateway = 502,
            SERVICE_UNAVAILABLE: ServiceUnavailable = 503,
            GATEWAY_TIMEOUT: GatewayTimeout = 504,
            HTTP_VERSION_NOT_SUPPORTED: HttpVersionNotSupported = 505,
            VARIANT_ALSO_NEGOTIATES: VariantAlsoNegotiates = 506,
            INSUFFICIENT_STORAGE: InsufficientStorage = 507,
            LOOP_DETECTED: LoopDetected = 508,
            NOT_EXTENDED: NotExtended = 510,
            NETWORK_AUTHENTICATION_REQUIRED: NetworkAuthenticationRequired = 511,
        }
    };
}

/// Variants meant to be raised as [`HttpError`](crate::HttpError).
pub mod errors {
    with_error_codes!(catalog! { crate::HttpError; });
}

/// Variants meant to be returned as [`HttpResponse`](crate::HttpResponse).
pub mod responses {
    with_error_codes!(catalog! {
        crate::HttpResponse;
        CONTINUE: Continue = 100,
        SWITCHING_PROTOCOLS: SwitchingProtocols = 101,
        PROCESSING: Processing = 102,
        OK: Ok = 200,
        CREATED: Created = 201,
        ACCEPTED: Accepted = 202,
        NON_AUTHORITATIVE_INFORMATION: NonAuthoritativeInformation = 203,
        NO_CONTENT: NoContent = 204,
        RESET_CONTENT: ResetContent = 205,
        PARTIAL_CONTENT: PartialContent = 206,
        MULTI_STATUS: MultiStatus = 207,
        ALREADY_REPORTED: AlreadyReported = 208,
        IM_USED: ImUsed = 226,
        MULTIPLE_CHOICES: MultipleChoices = 300,
        MOVED_PERMANENTLY: MovedPermanently = 301,
        FOUND: Found = 302,
        SEE_OTHER: SeeOther = 303,
        NOT_MODIFIED: NotModified = 304,
        USE_PROXY: UseProxy = 305,
        TEMPORARY_REDIRECT: TemporaryRedirect = 307,
        PERMANENT_REDIRECT: PermanentRedirect = 308,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_status::{IanaRegistry, StatusClass, StatusRegistry};
    use std::collections::HashSet;

    #[test]
    fn every_entry_is_registered() {
        for variant in responses::ALL {
            assert!(
                IanaRegistry.lookup(variant.status_code()).is_ok(),
                "{} has no registered label",
                variant.name()
            );
        }
    }

    #[test]
    fn error_catalog_holds_only_error_classes() {
        for variant in errors::ALL {
            assert!(StatusClass::of(variant.status_code()).is_error());
        }
    }

    #[test]
    fn codes_and_names_unique_within_a_catalog() {
        let codes: HashSet<i32> = responses::ALL.iter().map(|v| v.status_code()).collect();
        let names: HashSet<&str> = responses::ALL.iter().map(|v| v.name()).collect();
        assert_eq!(codes.len(), responses::ALL.len());
        assert_eq!(names.len(), responses::ALL.len());
    }

    #[test]
    fn shared_codes_appear_in_both_catalogs() {
        assert_eq!(errors::GONE.status_code(), responses::GONE.status_code());
        for variant in errors::ALL {
            assert!(responses::by_code(variant.status_code()).is_some());
        }
    }

    #[test]
    fn http_version_not_supported_is_505() {
        assert_eq!(errors::HTTP_VERSION_NOT_SUPPORTED.status_code(), 505);
        assert_eq!(
            errors::HTTP_VERSION_NOT_SUPPORTED.build().status(),
            "HTTP Version Not Supported"
        );
    }

    #[test]
    fn lookups() {
        assert_eq!(errors::by_name("NotFound"), Some(errors::NOT_FOUND));
        assert_eq!(errors::by_code(429), Some(errors::TOO_MANY_REQUESTS));
        assert_eq!(errors::by_code(201), None);
        assert_eq!(responses::by_code(201), Some(responses::CREATED));
        assert_eq!(responses::by_name("Teapot"), None);
    }
}
