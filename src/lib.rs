//! The Rust SDK for the Knowalledge learning platform.
//!
//! If you're just getting started, take a look at the [`Client`].
//! It contains all methods you'll need to interact with the API, grouped
//! into `auth`, `users`, `admin` and `locations` sub-clients. Session state
//! (the signed-in identity, its persistence and the registration draft)
//! lives in [`session`], and [`guard`] gates protected views on it.
//!
//! # Examples
//! ```no_run
//! use knowalledge_rs::{guard::Access, Client, Error};
//! use knowalledge_rs::session::{MemoryCredentialStore, Role, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let client = Client::new()?;
//!
//!     // Restore any persisted identity before gating views.
//!     let session = Session::new(MemoryCredentialStore::new());
//!     session.restore()?;
//!
//!     // Sign in and keep the identity for later requests.
//!     let identity = client.auth.signin("a@b.com", "hunter2!").await?;
//!     session.login(identity)?;
//!
//!     // Authenticated calls carry the bearer token.
//!     let client = Client::builder()
//!         .with_token(session.token().unwrap_or_default())
//!         .build()?;
//!     let feed = client.users.feed().await?;
//!     dbg!(feed.feed.len());
//!
//!     // Gate the admin console on the superadmin role.
//!     assert_eq!(session.check_access(Some(Role::Superadmin)), Access::Denied);
//!
//!     session.logout()?;
//!     Ok(())
//! }
//! ```
pub mod client;
pub mod error;
mod http;
mod serde;

pub mod admin;
pub mod auth;
pub mod guard;
pub mod locations;
pub mod session;
pub mod users;

pub use client::Client;
pub use error::Error;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

#[cfg(all(feature = "default-tls", feature = "native-tls"))]
compile_error!("Feature \"default-tls\" and \"native-tls\" cannot be enabled at the same time");

#[cfg(all(feature = "native-tls", feature = "rustls-tls"))]
compile_error!("Feature \"native-tls\" and \"rustls-tls\" cannot be enabled at the same time");

#[cfg(all(feature = "rustls-tls", feature = "default-tls"))]
compile_error!("Feature \"rustls-tls\" and \"default-tls\" cannot be enabled at the same time");
