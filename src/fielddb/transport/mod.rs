//! # Transport Layer
//!
//! The [`Transport`] trait is the single seam between fielddb and the network.
//! Everything above it (gateway, connector, collections) speaks in [`Request`]
//! and [`Response`] values and never sees an HTTP client.
//!
//! ## Implementations
//!
//! - [`http::HttpTransport`]: production transport over reqwest's blocking client.
//!   Configured once with a base path and a content type.
//! - [`memory::InMemoryTransport`]: records requests and replays queued responses,
//!   for tests.
//!
//! ## Request Shaping
//!
//! Shared by all implementations so they agree on the wire format:
//! - GET and DELETE never carry a body.
//! - POST and PUT always carry a JSON body, `{}` when none was given.
//! - `Authorization` is `Bearer <token>` with a token, empty without one.
//!
//! A transport returns `Ok` only for 2xx responses. Anything else is a
//! [`TransportError`].

use crate::error::TransportError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod http;
pub mod memory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    pub fn has_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[default]
    #[serde(rename = "application/json")]
    Json,
    #[serde(rename = "multipart/form-data")]
    MultipartFormData,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::MultipartFormData => "multipart/form-data",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub token: Option<String>,
    pub body: Option<Value>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            token: None,
            body: None,
        }
    }

    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(str::to_string);
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Value of the `Authorization` header.
    pub fn authorization(&self) -> String {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => format!("Bearer {}", token),
            _ => String::new(),
        }
    }

    /// Serialized body as sent on the wire, or `None` for body-less methods.
    pub fn payload(&self) -> Option<String> {
        if !self.method.has_body() {
            return None;
        }
        let body = self
            .body
            .clone()
            .unwrap_or_else(|| Value::Object(Default::default()));
        Some(body.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Converts a non-2xx response into a [`TransportError::Status`].
    pub fn error_for_status(self) -> Result<Self, TransportError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(TransportError::Status {
                status: self.status,
                message: remote_message(self.status, &self.body),
            })
        }
    }
}

/// Best message for a failed response: the body's `message` member, the body
/// text, or the bare status.
pub fn remote_message(status: u16, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(message)) = map.get("message") {
            return message.clone();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status)
    } else {
        trimmed.to_string()
    }
}

/// Sends requests relative to a fixed base path.
pub trait Transport {
    fn send(&self, request: &Request) -> Result<Response, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &Request) -> Result<Response, TransportError> {
        (**self).send(request)
    }
}
