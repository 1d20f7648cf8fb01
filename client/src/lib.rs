//! Session client for the Leasehold API.
//!
//! A [`SessionClient`] signs in against the server, keeps the issued token and
//! user in a [`SessionStore`] so the session survives restarts, and attaches
//! the token to every data request.

pub mod error;
pub mod session;
pub mod store;

pub use error::ClientError;
pub use session::SessionClient;
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, StoredSession};
