//! Session state: the authenticated identity, its mirrored persistence, and
//! the in-progress registration draft.
//!
//! You're probably looking for the [`Session`].
//!
//! # Examples
//! ```
//! use knowalledge_rs::session::{Identity, MemoryCredentialStore, Role, Session};
//!
//! fn main() -> Result<(), knowalledge_rs::Error> {
//!     let session = Session::new(MemoryCredentialStore::new());
//!     session.restore()?;
//!
//!     session.login(Identity::new("a@b.com", "t1"))?;
//!     assert_eq!(session.current_identity().map(|i| i.role), Some(Role::User));
//!
//!     session.logout()?;
//!     assert!(session.current_identity().is_none());
//!     Ok(())
//! }
//! ```
mod credentials;
mod model;
mod store;

pub use credentials::{
    CredentialStore, FileCredentialStore, MemoryCredentialStore, KEY_REGISTER_FORM, KEY_ROLE,
    KEY_SELECTED_TOPICS, KEY_TOKEN, KEY_USER,
};
pub use model::{Identity, RegistrationDraft, Role};
pub use store::Session;
