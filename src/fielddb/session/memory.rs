use super::Session;
use crate::error::{FieldError, Result};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct InMemorySession {
    token: Mutex<Option<String>>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> FieldError {
    FieldError::Config(format!("session lock poisoned: {}", e))
}

impl Session for InMemorySession {
    fn token(&self) -> Result<Option<String>> {
        Ok(self.token.lock().map_err(poisoned)?.clone())
    }

    fn store_token(&self, token: &str) -> Result<()> {
        *self.token.lock().map_err(poisoned)? = Some(token.to_string());
        Ok(())
    }
}
