//! Sign-in, registration and account recovery.
//!
//! You're probably looking for the [`Client`].
//!
//! # Examples
//! ```no_run
//! use knowalledge_rs::{Client, Error};
//! use knowalledge_rs::session::{MemoryCredentialStore, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let client = Client::new()?;
//!     let session = Session::new(MemoryCredentialStore::new());
//!     session.restore()?;
//!
//!     let identity = client.auth.signin("a@b.com", "hunter2!").await?;
//!     session.login(identity)?;
//!
//!     Ok(())
//! }
//! ```
mod client;
mod model;

pub use client::Client;
pub use model::{RegisterRequest, Status, UserType};
