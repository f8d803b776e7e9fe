//! Remote collection endpoints.
//!
//! Each operation posts `{collectionName, ...}` to a fixed path under the
//! collections base path and decodes the JSON answer. Stateless apart from the
//! transport; the token is passed in per call.

use crate::entity::Entity;
use crate::error::Result;
use crate::transport::{Method, Request, Transport};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const SAVE_PATH: &str = "/save";
pub const FIND_PATH: &str = "/find";
pub const FIND_BY_ID_PATH: &str = "/findById";
pub const FIND_ONE_PATH: &str = "/findOne";
pub const FIND_BY_ID_AND_UPDATE_PATH: &str = "/findByIdAndUpdate";
pub const FIND_BY_ID_AND_DELETE_PATH: &str = "/findByIdAndDelete";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionPayload<'a> {
    collection_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    item: Option<&'a Entity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    item_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    update: Option<&'a Map<String, Value>>,
}

impl<'a> CollectionPayload<'a> {
    fn new(collection_name: &'a str) -> Self {
        Self {
            collection_name,
            item: None,
            filter: None,
            item_id: None,
            update: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<Entity>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ItemResponse {
    #[serde(default)]
    pub item: Option<Entity>,
}

pub struct CollectionsGateway<T: Transport> {
    transport: T,
}

impl<T: Transport> CollectionsGateway<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn call<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        payload: &CollectionPayload<'_>,
    ) -> Result<R> {
        let request = Request::new(method, path)
            .with_token(token)
            .with_body(serde_json::to_value(payload)?);
        let response = self.transport.send(&request)?;
        Ok(serde_json::from_str(&response.body)?)
    }

    pub fn save(
        &self,
        token: Option<&str>,
        collection_name: &str,
        item: &Entity,
    ) -> Result<MessageResponse> {
        let payload = CollectionPayload {
            item: Some(item),
            ..CollectionPayload::new(collection_name)
        };
        self.call(Method::Put, SAVE_PATH, token, &payload)
    }

    pub fn find(
        &self,
        token: Option<&str>,
        collection_name: &str,
        filter: Option<&Map<String, Value>>,
    ) -> Result<ItemsResponse> {
        let payload = CollectionPayload {
            filter,
            ..CollectionPayload::new(collection_name)
        };
        self.call(Method::Post, FIND_PATH, token, &payload)
    }

    pub fn find_by_id(
        &self,
        token: Option<&str>,
        collection_name: &str,
        item_id: &str,
    ) -> Result<ItemResponse> {
        let payload = CollectionPayload {
            item_id: Some(item_id),
            ..CollectionPayload::new(collection_name)
        };
        self.call(Method::Post, FIND_BY_ID_PATH, token, &payload)
    }

    pub fn find_one(
        &self,
        token: Option<&str>,
        collection_name: &str,
        filter: Option<&Map<String, Value>>,
    ) -> Result<ItemResponse> {
        let payload = CollectionPayload {
            filter,
            ..CollectionPayload::new(collection_name)
        };
        self.call(Method::Post, FIND_ONE_PATH, token, &payload)
    }

    pub fn find_by_id_and_update(
        &self,
        token: Option<&str>,
        collection_name: &str,
        item_id: &str,
        update: Option<&Map<String, Value>>,
    ) -> Result<ItemResponse> {
        let payload = CollectionPayload {
            item_id: Some(item_id),
            update,
            ..CollectionPayload::new(collection_name)
        };
        self.call(Method::Post, FIND_BY_ID_AND_UPDATE_PATH, token, &payload)
    }

    pub fn find_by_id_and_delete(
        &self,
        token: Option<&str>,
        collection_name: &str,
        item_id: &str,
    ) -> Result<MessageResponse> {
        let payload = CollectionPayload {
            item_id: Some(item_id),
            ..CollectionPayload::new(collection_name)
        };
        self.call(Method::Post, FIND_BY_ID_AND_DELETE_PATH, token, &payload)
    }
}
