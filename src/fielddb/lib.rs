//! # FieldDB Architecture
//!
//! fielddb is a **client-side modeling layer** for the FieldDB remote document
//! store. Callers declare a schema, bind it to a model name, build validated
//! entities, and save or query them through a small set of fixed remote
//! endpoints.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Facade (api.rs)                                        │
//! │  - Owns gateway, connector and session                      │
//! │  - Hands out Collection clients for a Model                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Models & Collections (model.rs, collection.rs)             │
//! │  - Model: schema + name → validated Entity (no I/O)         │
//! │  - Collection: save / find / findById / findOne / update /  │
//! │    delete, validating before any network call               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Gateway & Connector (gateway.rs, connection.rs)            │
//! │  - Fixed endpoint paths and JSON payload shapes             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Transport & Session (transport/, session/)                 │
//! │  - Transport trait: HttpTransport, InMemoryTransport        │
//! │  - Session trait: FileSession (token file), InMemorySession │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//!
//! - Validation always happens before any network side effect. A schema
//!   violation means zero remote calls were made for that operation.
//! - The token is read from the session right before every authenticated call.
//! - Nothing is retried, cached or rolled back.
//!
//! ## Example
//!
//! ```no_run
//! use fielddb::{Credentials, FieldApi, FieldConfig, FieldDescriptor, FieldType, Model, Schema};
//! use serde_json::json;
//!
//! # fn main() -> fielddb::Result<()> {
//! let api = FieldApi::from_config(&FieldConfig::default())?;
//! api.connect(&Credentials::new("ann", "secret", "project-1"))?;
//!
//! let user = Model::new(
//!     "user",
//!     Schema::new()
//!         .field("name", FieldDescriptor::new(FieldType::String).required())
//!         .field("age", FieldDescriptor::new(FieldType::Number).with_default(0)),
//! );
//! let users = api.collection(&user);
//!
//! let ann = users.build(&json!({"name": "Ann"}))?;
//! users.save(&ann)?;
//! let adults = users.find(Some(&json!({"age": 18})))?;
//! # let _ = adults;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The facade
//! - [`model`]: Models, collection-name derivation, entity building
//! - [`collection`]: Remote operations for one model
//! - [`schema`]: Field types and schemas
//! - [`validator`]: Unknown-key, type and required checks
//! - [`entity`]: The entity value type
//! - [`gateway`]: Collection endpoints
//! - [`connection`]: Credentials and the connect call
//! - [`transport`]: HTTP abstraction
//! - [`session`]: Token persistence
//! - [`ident`]: Identifier providers
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod config;
pub mod connection;
pub mod entity;
pub mod error;
pub mod gateway;
pub mod ident;
pub mod model;
pub mod schema;
pub mod session;
pub mod transport;
pub mod validator;

pub use api::FieldApi;
pub use collection::Collection;
pub use config::FieldConfig;
pub use connection::Credentials;
pub use entity::Entity;
pub use error::{FieldError, Result, TransportError};
pub use model::Model;
pub use schema::{FieldDescriptor, FieldType, Schema};
