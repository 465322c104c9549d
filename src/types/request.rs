//! Request types shared by the client, interceptors and transports.

use crate::error::HttpClientError;
use reqwest::header::HeaderMap;
use serde::Serialize;
use std::fmt;

/// Supported HTTP verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// GET requests never carry a body or a default content type.
    pub fn is_get(&self) -> bool {
        matches!(self, Self::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// HTTP request body supplied by the caller
#[derive(Debug)]
pub enum RequestBody {
    /// JSON body, serialized to text before dispatch
    Json(serde_json::Value),
    /// Multipart form body, passed through untouched
    Form(reqwest::multipart::Form),
}

impl RequestBody {
    /// Build a JSON body from any serializable value.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, HttpClientError> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(HttpClientError::Serialization)
    }

    pub fn is_form(&self) -> bool {
        matches!(self, Self::Form(_))
    }

    /// Falsy JSON values (`null`, `false`, zero, `""`) are treated the same as no body at all.
    pub(crate) fn is_absent(&self) -> bool {
        use serde_json::Value;
        match self {
            Self::Json(Value::Null | Value::Bool(false)) => true,
            Self::Json(Value::Number(n)) => n.as_f64() == Some(0.0),
            Self::Json(Value::String(s)) => s.is_empty(),
            _ => false,
        }
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl From<reqwest::multipart::Form> for RequestBody {
    fn from(form: reqwest::multipart::Form) -> Self {
        Self::Form(form)
    }
}

/// Body as it goes over the wire.
#[derive(Debug)]
pub enum EncodedBody {
    /// Serialized JSON text
    Json(String),
    /// Multipart form; the transport supplies the boundary content type
    Form(reqwest::multipart::Form),
}

impl EncodedBody {
    /// JSON text of the body, `None` for forms.
    pub fn as_json_text(&self) -> Option<&str> {
        match self {
            Self::Json(text) => Some(text),
            Self::Form(_) => None,
        }
    }
}

/// A fully assembled request, created fresh for every call.
#[derive(Debug)]
pub struct RequestDescriptor {
    /// Correlation id for log events
    pub request_id: String,
    pub method: HttpMethod,
    /// Base URL concatenated with the call path
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<EncodedBody>,
}

impl RequestDescriptor {
    pub fn context(&self) -> RequestContext {
        RequestContext {
            request_id: self.request_id.clone(),
            method: self.method,
            url: self.url.clone(),
        }
    }
}

/// Context passed to interceptors after the descriptor has been handed to the transport.
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub request_id: String,
    pub method: HttpMethod,
    pub url: String,
}

/// Generate a request id for correlating log events.
pub fn generate_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falsy_json_counts_as_absent() {
        use serde_json::json;
        for absent in [json!(null), json!(false), json!(0), json!(0.0), json!(-0.0), json!("")] {
            assert!(RequestBody::from(absent.clone()).is_absent(), "{absent}");
        }
        for present in [json!(true), json!(1), json!(-2.5), json!(" "), json!({}), json!([])] {
            assert!(!RequestBody::from(present.clone()).is_absent(), "{present}");
        }
        assert!(!RequestBody::from(reqwest::multipart::Form::new()).is_absent());
    }

    #[test]
    fn json_helper_serializes_structs() {
        #[derive(Serialize)]
        struct NewUser<'a> {
            name: &'a str,
        }
        let body = RequestBody::json(&NewUser { name: "ada" }).unwrap();
        match body {
            RequestBody::Json(v) => assert_eq!(v, serde_json::json!({"name": "ada"})),
            RequestBody::Form(_) => panic!("expected json body"),
        }
    }

    #[test]
    fn methods_display_as_verbs() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert!(HttpMethod::Get.is_get());
        assert!(!HttpMethod::Put.is_get());
    }
}
