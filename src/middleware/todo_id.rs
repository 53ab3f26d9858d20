use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

use crate::TodoError;

/// Todo id taken from the single `{id}` path segment.
///
/// Only an unsigned run of ASCII digits is accepted. Anything else is answered
/// with 404, the same as an unmatched route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoId(pub i64);

impl TodoId {
    pub fn parse(raw: &str) -> Result<Self, TodoError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TodoError::MalformedId(raw.to_string()));
        }
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| TodoError::MalformedId(raw.to_string()))
    }
}

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = match Path::<String>::from_request_parts(parts, state).await {
            Ok(p) => p,
            Err(rejection) => return Err(rejection.into_response()),
        };
        Self::parse(&raw).map_err(IntoResponse::into_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_digits() {
        assert_eq!(TodoId::parse("1").unwrap(), TodoId(1));
        assert_eq!(TodoId::parse("0042").unwrap(), TodoId(42));
    }

    #[test]
    fn rejects_non_integers() {
        for raw in ["", "abc", "-1", "+1", "1.5", " 1", "99999999999999999999"] {
            assert!(
                matches!(TodoId::parse(raw), Err(TodoError::MalformedId(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
