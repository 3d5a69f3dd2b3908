//! The signed-in user's surface: feed, topic browsing, profile and topic
//! subscriptions.
//!
//! You're probably looking for the [`Client`].
//!
//! # Examples
//! ```no_run
//! use knowalledge_rs::{Client, Error};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let client = Client::builder().with_token("my-token").build()?;
//!
//!     let feed = client.users.feed().await?;
//!     for item in feed.feed.iter().filter(|item| item.is_news()) {
//!         println!("{}", item.heading);
//!     }
//!
//!     Ok(())
//! }
//! ```
mod client;
mod model;

pub use client::Client;
pub use model::*;
