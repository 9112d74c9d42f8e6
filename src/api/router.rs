//! Route dispatch for the JSON boundary.

use super::GameService;
use super::types::{ErrorBody, GuessRequest, StartRequest, ValidateRequest};
use crate::error::GameError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, error};

/// Optional prefix in front of every route
const API_PREFIX: &str = "/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            _ => Err(format!("Unsupported method: {s}")),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// Status code and JSON body produced for one request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: Value,
}

impl ApiReply {
    fn ok<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(body) => Self { status: 200, body },
            Err(e) => Self::error(500, format!("Failed to encode response: {e}")),
        }
    }

    fn error(status: u16, detail: impl Into<String>) -> Self {
        let body = ErrorBody {
            detail: detail.into(),
        };
        Self {
            status,
            body: serde_json::json!(body),
        }
    }

    fn from_game_error(err: &GameError) -> Self {
        if err.is_client_error() {
            debug!(error = %err, "Request rejected");
        } else {
            error!(error = %err, "Request failed");
        }
        Self::error(err.status_code(), err.to_string())
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status < 400
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiReply> {
    serde_json::from_str(body).map_err(|e| ApiReply::error(400, format!("Invalid request body: {e}")))
}

/// Decode `%XX` escapes and `+` in a query component
///
/// `None` on a truncated escape, a non-hex digit or a result that is not UTF-8.
fn percent_decode(component: &str) -> Option<String> {
    let mut bytes = Vec::with_capacity(component.len());
    let mut rest = component.bytes();
    while let Some(byte) = rest.next() {
        match byte {
            b'%' => {
                let hi = char::from(rest.next()?).to_digit(16)?;
                let lo = char::from(rest.next()?).to_digit(16)?;
                bytes.push(u8::try_from(hi * 16 + lo).ok()?);
            }
            b'+' => bytes.push(b' '),
            _ => bytes.push(byte),
        }
    }
    String::from_utf8(bytes).ok()
}

/// Decoded value of `key` in a `a=1&b=2` query string
fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| percent_decode(k).as_deref() == Some(key))
        .and_then(|(_, v)| percent_decode(v))
}

impl GameService {
    /// Handle one request
    ///
    /// `path` may carry the `/api` prefix and a query string. Unknown routes
    /// produce 404, malformed bodies 400.
    #[must_use]
    pub fn dispatch(&self, method: Method, path: &str, body: &str) -> ApiReply {
        let (route, query) = path.split_once('?').unwrap_or((path, ""));
        let route = route.strip_prefix(API_PREFIX).unwrap_or(route);
        let route = match route.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        debug!(%method, route, "Dispatching request");

        let result = match (method, route) {
            (Method::Get, "/") => Ok(ApiReply::ok(&serde_json::json!({
                "message": "Lingo Türkiye API"
            }))),
            (Method::Post, "/game/start") => parse_body::<StartRequest>(body).map(|request| {
                self.start(&request)
                    .map_or_else(|e| ApiReply::from_game_error(&e), |r| ApiReply::ok(&r))
            }),
            (Method::Post, "/game/check") => {
                parse_body::<GuessRequest>(body).map(|request| ApiReply::ok(&self.check(&request)))
            }
            (Method::Get, "/word") => match query_param(query, "len").map(|len| len.parse::<usize>()) {
                Some(Ok(length)) => Ok(self
                    .random_word(length)
                    .map_or_else(|e| ApiReply::from_game_error(&e), |r| ApiReply::ok(&r))),
                Some(Err(_)) | None => Err(ApiReply::error(400, "Query parameter 'len' must be a number")),
            },
            (Method::Post, "/check") => parse_body::<ValidateRequest>(body).map(|request| {
                self.validate(&request)
                    .map_or_else(|e| ApiReply::from_game_error(&e), |r| ApiReply::ok(&r))
            }),
            _ => Err(ApiReply::error(404, format!("No route for {method} {path}"))),
        };

        result.unwrap_or_else(|reply| reply)
    }
}
