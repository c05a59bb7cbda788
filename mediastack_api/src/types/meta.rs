//! Response envelopes: the success page, the API error object, and the
//! classification of a raw body into one of the two (or neither).

use serde::{Deserialize, Serialize};

use super::article::lenient;
use super::Article;

/// Paging counters. Any of them may be missing from a response.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Pagination {
    #[serde(default, deserialize_with = "lenient")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub offset: Option<i64>,
    /// Number of articles in this page.
    #[serde(default, deserialize_with = "lenient")]
    pub count: Option<i64>,
    /// Number of articles matching the query across all pages.
    #[serde(default, deserialize_with = "lenient")]
    pub total: Option<i64>,
}

/// Successful `/news` response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewsPage {
    #[serde(default, deserialize_with = "lenient")]
    pub pagination: Option<Pagination>,
    pub data: Vec<Article>,
}

/// Error object the API returns under the `error` key.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiError {
    /// Machine-readable code, e.g. `invalid_access_key`.
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
    /// Per-parameter details attached to validation errors.
    #[serde(default)]
    pub context: Option<serde_json::Value>,
}

impl ApiError {
    /// Builds an error from whatever the API put under `error`. Values that
    /// are not a well-formed error object keep their raw JSON as the message.
    pub fn from_value(value: &serde_json::Value) -> Self {
        match serde_json::from_value::<ApiError>(value.clone()) {
            Ok(error) => error,
            Err(_) => ApiError {
                code: None,
                message: match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                },
                context: None,
            },
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

/// A response body sorted into the shapes the API can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// The body carried a `data` field matching the article shape.
    Success(NewsPage),
    /// The body carried an `error` field and no `data` field.
    Failure(ApiError),
    /// Anything else. Holds a short description of what was wrong.
    Unrecognized(String),
}

impl ApiResponse {
    /// Classifies a raw response body. `data` wins over `error` when both
    /// are present.
    pub fn from_body(body: &str) -> Self {
        let value = match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => value,
            Err(e) => return ApiResponse::Unrecognized(format!("body is not JSON: {}", e)),
        };
        if !value.is_object() {
            return ApiResponse::Unrecognized("body is not a JSON object".to_string());
        }

        if value.get("data").is_some() {
            return match serde_json::from_value::<NewsPage>(value) {
                Ok(page) => ApiResponse::Success(page),
                Err(e) => ApiResponse::Unrecognized(format!("unexpected data shape: {}", e)),
            };
        }

        match value.get("error") {
            Some(error) => ApiResponse::Failure(ApiError::from_value(error)),
            None => ApiResponse::Unrecognized("body has neither data nor error".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_data_body() {
        let ApiResponse::Success(page) = ApiResponse::from_body(r#"{"data": [{"title": "x"}]}"#)
        else {
            panic!("expected success");
        };
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].title.as_deref(), Some("x"));
        assert!(page.pagination.is_none());
    }

    #[test]
    fn odd_article_fields_keep_the_page() {
        for body in [
            r#"{"data": [{"title": "x", "published_at": "2020-08-05 05:47:24"}]}"#,
            r#"{"data": [{"title": "x", "published_at": ""}]}"#,
            r#"{"data": [{"title": "x", "author": 1}]}"#,
        ] {
            let ApiResponse::Success(page) = ApiResponse::from_body(body) else {
                panic!("body {:?} should be a success", body);
            };
            assert_eq!(page.data.len(), 1);
            assert_eq!(page.data[0].title.as_deref(), Some("x"));
            assert_eq!(page.data[0].published_at, None);
        }
    }

    #[test]
    fn partial_pagination_keeps_the_page() {
        let body = r#"{"pagination": {"limit": 25, "offset": 0, "count": 1}, "data": [{"title": "x"}]}"#;
        let ApiResponse::Success(page) = ApiResponse::from_body(body) else {
            panic!("expected success");
        };
        assert_eq!(page.data.len(), 1);
        assert_eq!(
            page.pagination,
            Some(Pagination {
                limit: Some(25),
                offset: Some(0),
                count: Some(1),
                total: None,
            })
        );
    }

    #[test]
    fn classifies_error_body() {
        let resp = ApiResponse::from_body(
            r#"{"error": {"code": "invalid_access_key", "message": "bad key"}}"#,
        );
        assert_eq!(
            resp,
            ApiResponse::Failure(ApiError {
                code: Some("invalid_access_key".to_string()),
                message: "bad key".to_string(),
                context: None,
            })
        );
    }

    #[test]
    fn error_without_object_shape_keeps_raw_text() {
        let ApiResponse::Failure(err) = ApiResponse::from_body(r#"{"error": "quota"}"#) else {
            panic!("expected failure");
        };
        assert_eq!(err.message, "quota");
        assert_eq!(err.code, None);

        let ApiResponse::Failure(err) = ApiResponse::from_body(r#"{"error": {"code": 7}}"#)
        else {
            panic!("expected failure");
        };
        assert_eq!(err.message, r#"{"code":7}"#);
    }

    #[test]
    fn data_takes_precedence_over_error() {
        let resp = ApiResponse::from_body(r#"{"data": [], "error": {"message": "ignored"}}"#);
        assert!(matches!(resp, ApiResponse::Success(page) if page.data.is_empty()));
    }

    #[test]
    fn unrecognized_bodies() {
        for body in [
            "",
            "<html>502 Bad Gateway</html>",
            "[]",
            "\"data\"",
            r#"{"status": "ok"}"#,
            r#"{"data": null}"#,
            r#"{"data": {"title": "not a list"}}"#,
        ] {
            assert!(
                matches!(ApiResponse::from_body(body), ApiResponse::Unrecognized(_)),
                "body {:?} should be unrecognized",
                body
            );
        }
    }

    #[test]
    fn api_error_display() {
        let err = ApiError {
            code: None,
            message: "bad key".to_string(),
            context: None,
        };
        assert_eq!(err.to_string(), "bad key");

        let err = ApiError {
            code: Some("usage_limit_reached".to_string()),
            message: "Monthly limit reached".to_string(),
            context: None,
        };
        assert_eq!(err.to_string(), "Monthly limit reached (usage_limit_reached)");
    }
}
