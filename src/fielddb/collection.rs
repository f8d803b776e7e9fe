//! # Collection Client
//!
//! A [`Collection`] is a model's remote face: it pairs a [`Model`] with the
//! collections gateway and the session, and exposes the save and query
//! operations.
//!
//! Every operation follows the same order:
//! 1. validate the filter or update against the schema (no network on failure)
//! 2. read the token from the session, fresh
//! 3. delegate to the gateway
//!
//! Save failures are reported as [`FieldError::Save`]; query failures keep
//! their [`FieldError::Transport`] cause. Nothing is retried and a failed save
//! leaves the local entity untouched.

use crate::entity::Entity;
use crate::error::{FieldError, Result};
use crate::gateway::CollectionsGateway;
use crate::model::Model;
use crate::session::Session;
use crate::transport::Transport;
use log::debug;
use serde_json::Value;

pub struct Collection<'a, T: Transport, S: Session> {
    model: &'a Model,
    gateway: &'a CollectionsGateway<T>,
    session: &'a S,
}

impl<'a, T: Transport, S: Session> Collection<'a, T, S> {
    pub fn new(model: &'a Model, gateway: &'a CollectionsGateway<T>, session: &'a S) -> Self {
        Self {
            model,
            gateway,
            session,
        }
    }

    pub fn model(&self) -> &Model {
        self.model
    }

    pub fn name(&self) -> &str {
        self.model.collection_name()
    }

    /// Builds a validated entity of this collection's model.
    pub fn build(&self, options: &Value) -> Result<Entity> {
        self.model.build(options)
    }

    pub fn save(&self, entity: &Entity) -> Result<()> {
        let token = self.session.token()?;
        debug!("saving {} into {}", entity.id(), self.name());
        self.gateway
            .save(token.as_deref(), self.name(), entity)
            .map_err(|e| match e {
                FieldError::Transport(cause) => FieldError::Save(cause.message().to_string()),
                other => FieldError::Save(other.to_string()),
            })?;
        Ok(())
    }

    pub fn find(&self, filter: Option<&Value>) -> Result<Vec<Entity>> {
        let filter = match filter {
            Some(filter) => self.model.check_filter(filter)?,
            None => None,
        };
        let token = self.session.token()?;
        let response = self.gateway.find(token.as_deref(), self.name(), filter)?;
        Ok(response.items)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Entity>> {
        let token = self.session.token()?;
        let response = self.gateway.find_by_id(token.as_deref(), self.name(), id)?;
        Ok(response.item)
    }

    pub fn find_one(&self, filter: &Value) -> Result<Option<Entity>> {
        let filter = self.model.check_filter(filter)?;
        let token = self.session.token()?;
        let response = self.gateway.find_one(token.as_deref(), self.name(), filter)?;
        Ok(response.item)
    }

    pub fn find_by_id_and_update(&self, id: &str, update: &Value) -> Result<Option<Entity>> {
        let update = self.model.check_filter(update)?;
        let token = self.session.token()?;
        let response =
            self.gateway
                .find_by_id_and_update(token.as_deref(), self.name(), id, update)?;
        Ok(response.item)
    }

    pub fn find_by_id_and_delete(&self, id: &str) -> Result<()> {
        let token = self.session.token()?;
        self.gateway
            .find_by_id_and_delete(token.as_deref(), self.name(), id)?;
        Ok(())
    }
}
