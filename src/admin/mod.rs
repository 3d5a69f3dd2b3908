//! The super-admin management surface: topics, news, trivia, events with
//! quizzes, account listing, and schools.
//!
//! You're probably looking for the [`Client`]. Every call here requires a
//! client built with a super-admin bearer token.
//!
//! # Examples
//! ```no_run
//! use knowalledge_rs::{Client, Error};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let client = Client::builder().with_token("my-admin-token").build()?;
//!
//!     let topics = client.admin.topics().await?;
//!     for topic in topics.topics {
//!         println!("{}", topic.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
mod client;
mod model;

pub use client::Client;
pub use model::*;
