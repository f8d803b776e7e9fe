//! # Sessions
//!
//! A [`Session`] holds the bearer token used for authenticated calls. Every
//! collection operation asks the session for the token right before sending, so
//! a `connect` anywhere in the process affects the very next request.
//!
//! ## Implementations
//!
//! - [`fs::FileSession`]: the token lives in a plain text file. The file is read
//!   on every call and overwritten on every connect. Nothing is cached.
//! - [`memory::InMemorySession`]: token held in memory, for tests.
//!
//! Sessions take `&self` so one session can be shared by the connector and any
//! number of collection clients. No locking is done around the token: two
//! overlapping operations may observe different tokens.

use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait Session {
    /// Current token, or `None` if no token has been stored.
    fn token(&self) -> Result<Option<String>>;

    /// Replaces the stored token.
    fn store_token(&self, token: &str) -> Result<()>;
}

impl<S: Session + ?Sized> Session for &S {
    fn token(&self) -> Result<Option<String>> {
        (**self).token()
    }

    fn store_token(&self, token: &str) -> Result<()> {
        (**self).store_token(token)
    }
}
