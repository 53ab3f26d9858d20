use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};

use crate::db::Title;

const URLENCODED: &str = "application/x-www-form-urlencoded";

/// The `title` field of an add-form submission, if there is a usable one.
///
/// Never rejects: a body that is not url-encoded, cannot be read, or has no
/// non-empty first `title` value all come out as `FormTitle(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTitle(pub Option<Title>);

impl<S> FromRequest<S> for FormTitle
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_urlencoded(req.headers()) {
            return Ok(Self(None));
        }
        let title = match Bytes::from_request(req, state).await {
            Ok(body) => title_from_urlencoded(&body),
            Err(_) => None,
        };
        Ok(Self(title))
    }
}

fn is_urlencoded(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(URLENCODED))
}

/// First `title` value wins; later duplicates are ignored.
pub fn title_from_urlencoded(body: &[u8]) -> Option<Title> {
    url::form_urlencoded::parse(body)
        .find(|(k, _)| k == "title")
        .and_then(|(_, v)| Title::new(v.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn parsed(body: &str) -> Option<String> {
        title_from_urlencoded(body.as_bytes()).map(Title::into_inner)
    }

    #[test]
    fn reads_decoded_title() {
        assert_eq!(parsed("title=Write+report"), Some("Write report".to_string()));
        assert_eq!(parsed("x=1&title=caf%C3%A9"), Some("café".to_string()));
    }

    #[test]
    fn first_title_wins() {
        assert_eq!(parsed("title=a&title=b"), Some("a".to_string()));
        assert_eq!(parsed("title=&title=b"), None);
    }

    #[test]
    fn missing_or_empty_title_is_none() {
        assert_eq!(parsed(""), None);
        assert_eq!(parsed("title="), None);
        assert_eq!(parsed("other=field"), None);
    }

    #[test]
    fn only_urlencoded_bodies_are_read() {
        let mut headers = HeaderMap::new();
        assert!(!is_urlencoded(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("Application/X-WWW-Form-Urlencoded; charset=UTF-8"),
        );
        assert!(is_urlencoded(&headers));

        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        assert!(!is_urlencoded(&headers));
    }
}
