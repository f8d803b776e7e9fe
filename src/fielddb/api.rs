//! # API Facade
//!
//! [`FieldApi`] is the single entry point for talking to a FieldDB server. It
//! owns the collections gateway, the connector and the session, and hands out
//! [`Collection`] clients bound to a [`Model`].
//!
//! ## Generic Over Transport and Session
//!
//! `FieldApi<T: Transport, S: Session>`:
//! - Production: `FieldApi<HttpTransport, FileSession>`, built by [`FieldApi::from_config`]
//! - Testing: `FieldApi<&InMemoryTransport, InMemorySession>`
//!
//! The facade holds no logic of its own: validation lives in [`Model`], request
//! shaping in the gateway, token handling in the session.

use crate::collection::Collection;
use crate::config::FieldConfig;
use crate::connection::{Connector, Credentials};
use crate::error::Result;
use crate::gateway::CollectionsGateway;
use crate::model::Model;
use crate::session::fs::FileSession;
use crate::session::Session;
use crate::transport::http::HttpTransport;
use crate::transport::Transport;

pub struct FieldApi<T: Transport, S: Session> {
    gateway: CollectionsGateway<T>,
    connector: Connector<T>,
    session: S,
}

impl<T: Transport, S: Session> FieldApi<T, S> {
    /// `collections` is rooted at `/api/collections`, `connect` at `/api/connect`.
    pub fn new(collections: T, connect: T, session: S) -> Self {
        Self {
            gateway: CollectionsGateway::new(collections),
            connector: Connector::new(connect),
            session,
        }
    }

    pub fn connect(&self, credentials: &Credentials) -> Result<()> {
        self.connector.connect(&self.session, credentials)
    }

    pub fn collection<'a>(&'a self, model: &'a Model) -> Collection<'a, T, S> {
        Collection::new(model, &self.gateway, &self.session)
    }

    pub fn session(&self) -> &S {
        &self.session
    }
}

impl FieldApi<HttpTransport, FileSession> {
    pub fn from_config(config: &FieldConfig) -> Result<Self> {
        let collections = HttpTransport::new(config.collections_url())?
            .with_content_type(config.content_type);
        let connect =
            HttpTransport::new(config.connect_url())?.with_content_type(config.content_type);
        let session = FileSession::new(config.token_path()?);
        Ok(Self::new(collections, connect, session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use crate::schema::{FieldDescriptor, FieldType, Schema};
    use crate::session::memory::InMemorySession;
    use crate::transport::memory::InMemoryTransport;
    use serde_json::json;
    use std::path::PathBuf;

    fn bus() -> Model {
        Model::new(
            "Bus",
            Schema::new().field("line", FieldDescriptor::new(FieldType::Number).required()),
        )
    }

    #[test]
    fn connect_then_query_uses_connected_token() {
        let collections = InMemoryTransport::new();
        let connect = InMemoryTransport::new();
        let api = FieldApi::new(&collections, &connect, InMemorySession::new());

        api.connect(&Credentials::new("l", "p", "id")).unwrap();
        let model = bus();
        api.collection(&model).find(None).unwrap();

        assert_eq!(connect.requests().len(), 1);
        let request = collections.last_request().unwrap();
        assert_eq!(request.token.as_deref(), Some("login|l|password|p|projectId|id"));
        assert_eq!(request.body.unwrap()["collectionName"], json!("buses"));
    }

    #[test]
    fn failed_connect_leaves_token_for_next_query() {
        let collections = InMemoryTransport::new();
        let connect = InMemoryTransport::new();
        connect.push_json(500, json!({"message": "down"}));
        let api = FieldApi::new(&collections, &connect, InMemorySession::new());

        let err = api.connect(&Credentials::new("l", "p", "id")).unwrap_err();
        assert!(matches!(err, FieldError::Connection(_)));
        assert_eq!(
            api.session().token().unwrap().as_deref(),
            Some("login|l|password|p|projectId|id")
        );
    }

    #[test]
    fn from_config_wires_file_session() {
        let config = FieldConfig {
            token_path: Some(PathBuf::from("/tmp/fielddb-test/token.dat")),
            ..FieldConfig::default()
        };
        let api = FieldApi::from_config(&config).unwrap();
        assert_eq!(
            api.session().path(),
            PathBuf::from("/tmp/fielddb-test/token.dat").as_path()
        );
    }
}
