use super::{ContentType, Method, Request, Response, Transport};
use crate::error::{FieldError, Result, TransportError};
use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

pub struct HttpTransport {
    client: Client,
    base_path: String,
    content_type: ContentType,
}

impl HttpTransport {
    pub fn new(base_path: impl Into<String>) -> Result<Self> {
        // The blocking client defaults to a 30s timeout; requests wait on the server instead.
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| FieldError::Transport(TransportError::Network(e.to_string())))?;
        Ok(Self {
            client,
            base_path: base_path.into(),
            content_type: ContentType::default(),
        })
    }

    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_path, path)
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &Request) -> std::result::Result<Response, TransportError> {
        let url = self.url(&request.path);
        debug!(
            "{} {} (token: {})",
            request.method.as_str(),
            url,
            if request.token.is_some() { "yes" } else { "no" }
        );

        let mut builder = self
            .client
            .request(to_reqwest(request.method), &url)
            .header(CONTENT_TYPE, self.content_type.as_str())
            .header(AUTHORIZATION, request.authorization());
        if let Some(payload) = request.payload() {
            builder = builder.body(payload);
        }

        let response = builder
            .send()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let response = Response::new(status, body);
        if !response.is_success() {
            warn!("{} {} failed with HTTP {}", request.method.as_str(), url, status);
        }
        response.error_for_status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_and_path() {
        let transport = HttpTransport::new("http://example.test/api/collections").unwrap();
        assert_eq!(
            transport.url("/findById"),
            "http://example.test/api/collections/findById"
        );
        assert_eq!(transport.content_type(), ContentType::Json);
    }

    #[test]
    fn content_type_override() {
        let transport = HttpTransport::new("")
            .unwrap()
            .with_content_type(ContentType::MultipartFormData);
        assert_eq!(transport.content_type(), ContentType::MultipartFormData);
        assert_eq!(transport.base_path(), "");
    }
}
