use crate::error::{FieldError, Result};
use crate::session::Session;
use crate::transport::{Method, Request, Transport};
use log::info;
use serde::{Deserialize, Serialize};

pub const CONNECT_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub login: String,
    pub password: String,
    pub project_id: String,
}

impl Credentials {
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            project_id: project_id.into(),
        }
    }

    /// `login|<login>|password|<password>|projectId|<projectId>`
    pub fn token(&self) -> String {
        format!(
            "login|{}|password|{}|projectId|{}",
            self.login, self.password, self.project_id
        )
    }
}

/// Establishes a session against the remote connect endpoint.
pub struct Connector<T: Transport> {
    transport: T,
}

impl<T: Transport> Connector<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Stores the token in `session`, then announces it to the remote side.
    ///
    /// The stored token is kept even when the remote side rejects it.
    pub fn connect<S: Session + ?Sized>(&self, session: &S, credentials: &Credentials) -> Result<()> {
        let token = credentials.token();
        session.store_token(&token)?;

        let request = Request::new(Method::Get, CONNECT_PATH).with_token(Some(&token));
        self.transport
            .send(&request)
            .map_err(|e| FieldError::Connection(e.message().to_string()))?;

        info!(
            "connected as {} to project {}",
            credentials.login, credentials.project_id
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::memory::InMemorySession;
    use crate::transport::memory::InMemoryTransport;
    use serde_json::json;

    fn creds() -> Credentials {
        Credentials::new("ann", "s3cret", "p1")
    }

    #[test]
    fn token_format() {
        assert_eq!(creds().token(), "login|ann|password|s3cret|projectId|p1");
    }

    #[test]
    fn connect_stores_token_and_sends_get() {
        let transport = InMemoryTransport::new();
        let session = InMemorySession::new();
        Connector::new(&transport).connect(&session, &creds()).unwrap();

        assert_eq!(
            session.token().unwrap().as_deref(),
            Some("login|ann|password|s3cret|projectId|p1")
        );
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, CONNECT_PATH);
        assert_eq!(
            request.authorization(),
            "Bearer login|ann|password|s3cret|projectId|p1"
        );
        assert_eq!(request.payload(), None);
    }

    #[test]
    fn rejected_connect_keeps_token() {
        let transport = InMemoryTransport::new();
        transport.push_json(401, json!({"message": "Unknown project"}));
        let session = InMemorySession::with_token("previous");

        let err = Connector::new(&transport)
            .connect(&session, &creds())
            .unwrap_err();

        assert!(matches!(err, FieldError::Connection(_)));
        assert_eq!(
            err.to_string(),
            "FieldDB connection error: (Unknown project)"
        );
        assert_eq!(session.token().unwrap(), Some(creds().token()));
    }

    #[test]
    fn credentials_deserialize_camel_case() {
        let parsed: Credentials =
            serde_json::from_value(json!({"login": "a", "password": "b", "projectId": "c"}))
                .unwrap();
        assert_eq!(parsed, Credentials::new("a", "b", "c"));
    }
}
