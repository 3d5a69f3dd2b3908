use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::error::Result;
use crate::guard::{self, Access};
use crate::session::credentials::{
    CredentialStore, KEY_REGISTER_FORM, KEY_ROLE, KEY_SELECTED_TOPICS, KEY_TOKEN, KEY_USER,
};
use crate::session::model::{Identity, RegistrationDraft, Role};

/// Holds the authenticated identity for the lifetime of the process and
/// mirrors it to a [`CredentialStore`] so a restart can restore it.
///
/// Construct one at application startup and pass it by reference; there is
/// no ambient global. Until [`Session::restore`] has run, [`Session::is_loading`]
/// is `true` and consumers must not treat the missing identity as
/// "signed out".
pub struct Session {
    store: Box<dyn CredentialStore>,
    identity: RwLock<Option<Identity>>,
    draft: RwLock<RegistrationDraft>,
    selected_topics: RwLock<Vec<String>>,
    restored: AtomicBool,
}

impl Session {
    /// Creates a session over the given store. The session starts in the
    /// loading state; call [`Session::restore`] before gating any view on it.
    pub fn new(store: impl CredentialStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            identity: RwLock::new(None),
            draft: RwLock::new(RegistrationDraft::default()),
            selected_topics: RwLock::new(Vec::new()),
            restored: AtomicBool::new(false),
        }
    }

    /// Hydrates the in-memory state from the store, then clears the loading
    /// flag. Runs the mirrored identity through the usual role defaulting.
    ///
    /// Unreadable mirrored values are treated as absent rather than failing
    /// the whole restore; only store I/O errors propagate.
    pub fn restore(&self) -> Result<()> {
        if let Some(raw) = self.store.get(KEY_USER)? {
            match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => {
                    *self
                        .identity
                        .write()
                        .unwrap_or_else(PoisonError::into_inner) = Some(identity);
                }
                Err(err) => {
                    tracing::warn!(%err, "stored identity is unreadable, treating as signed out");
                }
            }
        }

        if let Some(raw) = self.store.get(KEY_REGISTER_FORM)? {
            match serde_json::from_str::<RegistrationDraft>(&raw) {
                Ok(draft) => {
                    *self.draft.write().unwrap_or_else(PoisonError::into_inner) = draft;
                }
                Err(err) => {
                    tracing::warn!(%err, "stored registration draft is unreadable, dropping it");
                }
            }
        }

        if let Some(raw) = self.store.get(KEY_SELECTED_TOPICS)? {
            match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(topics) => {
                    *self
                        .selected_topics
                        .write()
                        .unwrap_or_else(PoisonError::into_inner) = topics;
                }
                Err(err) => {
                    tracing::warn!(%err, "stored topic selection is unreadable, dropping it");
                }
            }
        }

        self.restored.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// True until [`Session::restore`] has completed.
    pub fn is_loading(&self) -> bool {
        !self.restored.load(Ordering::SeqCst)
    }

    /// Stores the identity in memory and mirrors it (plus its token and role
    /// separately) to the store.
    pub fn login(&self, identity: Identity) -> Result<()> {
        let raw = serde_json::to_string(&identity)?;
        self.store.set(KEY_USER, &raw)?;
        self.store.set(KEY_TOKEN, &identity.token)?;
        self.store.set(KEY_ROLE, identity.role.as_str())?;

        *self
            .identity
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(identity);
        Ok(())
    }

    /// Clears the in-memory identity and removes every mirrored key.
    pub fn logout(&self) -> Result<()> {
        *self
            .identity
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;

        self.store.remove(KEY_USER)?;
        self.store.remove(KEY_TOKEN)?;
        self.store.remove(KEY_ROLE)?;
        Ok(())
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.identity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The bearer token of the current identity, if signed in.
    pub fn token(&self) -> Option<String> {
        self.identity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|identity| identity.token.clone())
    }

    /// A snapshot of the in-progress sign-up form.
    pub fn draft(&self) -> RegistrationDraft {
        self.draft
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Mutates the sign-up draft and persists it afterwards. Every change
    /// goes through here so the mirrored copy never lags.
    pub fn update_draft(&self, f: impl FnOnce(&mut RegistrationDraft)) -> Result<()> {
        let mut draft = self.draft.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut draft);
        let raw = serde_json::to_string(&*draft)?;
        self.store.set(KEY_REGISTER_FORM, &raw)?;
        Ok(())
    }

    /// Resets the draft to empty and removes the mirrored copy.
    pub fn clear_draft(&self) -> Result<()> {
        *self.draft.write().unwrap_or_else(PoisonError::into_inner) =
            RegistrationDraft::default();
        self.store.remove(KEY_REGISTER_FORM)?;
        Ok(())
    }

    pub fn selected_topics(&self) -> Vec<String> {
        self.selected_topics
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the persisted topic selection.
    pub fn set_selected_topics(&self, topics: Vec<String>) -> Result<()> {
        let raw = serde_json::to_string(&topics)?;
        self.store.set(KEY_SELECTED_TOPICS, &raw)?;
        *self
            .selected_topics
            .write()
            .unwrap_or_else(PoisonError::into_inner) = topics;
        Ok(())
    }

    /// Convenience for [`guard::check_access`].
    pub fn check_access(&self, required_role: Option<Role>) -> Access {
        guard::check_access(self, required_role)
    }
}
