use crate::bind::Kind;

/// Registration-time faults. These are programmer errors: the panicking
/// entry points (`route`, `mount`) abort on them, the `try_` variants
/// return them. Request-time mismatches are never represented here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("unmatched brace in route template")]
    UnmatchedBrace,

    #[error("invalid format specifier: {0:?}")]
    InvalidSpecifier(char),

    #[error("route template has fewer placeholders than record fields")]
    TooFewPlaceholders,

    #[error("route template has more placeholders than record fields")]
    TooManyPlaceholders,

    #[error("no field parser registered for {0:?}")]
    UnsupportedKind(Kind),
}
