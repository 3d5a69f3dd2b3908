//! The top-level client for the Knowalledge API.
use std::env;

use crate::{admin, auth, error::Result, http, locations, users};

/// Default base address of a local backend. Deployments point elsewhere via
/// the builder or `KNOWALLEDGE_URL`.
static DEFAULT_URL: &str = "http://localhost:8080/api/v1";

/// The client is the entrypoint of the whole SDK.
///
/// You can create it using [`Client::builder`] or [`Client::new`].
///
/// # Examples
/// ```
/// use knowalledge_rs::{Client, Error};
///
/// fn main() -> Result<(), Error> {
///     // Create a new client against the URL from the environment variable
///     // KNOWALLEDGE_URL (or the local default), unauthenticated.
///     let client = Client::new()?;
///
///     // Set all available options. Unset options fall back to environment
///     // variables.
///     let client = Client::builder()
///         .with_url("https://api.knowalledge.example")
///         .with_token("my-token")
///         .build()?;
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
    pub auth: auth::Client,
    pub users: users::Client,
    pub admin: admin::Client,
    pub locations: locations::Client,
    http_client: http::Client,
}

impl Client {
    /// Creates a new client. If you want to configure it, use [`Client::builder`].
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a new client using a builder.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Get the url (cloned).
    pub fn url(&self) -> String {
        self.url.clone()
    }

    /// Whether this client currently has a request on the wire. The flag is
    /// per client instance (shared with its clones), not global.
    pub fn in_flight(&self) -> bool {
        self.http_client.in_flight()
    }

    /// Get client version.
    pub fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

/// This builder is used to create a new client.
pub struct Builder {
    env_fallback: bool,
    url: Option<String>,
    token: Option<String>,
}

impl Builder {
    /// Create a new builder.
    fn new() -> Self {
        Self {
            env_fallback: true,
            url: None,
            token: None,
        }
    }

    /// Don't fall back to environment variables.
    pub fn no_env(mut self) -> Self {
        self.env_fallback = false;
        self
    }

    /// Add a bearer token to the client. If this is not set, the token will
    /// be read from the environment variable `KNOWALLEDGE_TOKEN`. Public
    /// endpoints (sign-in, registration, password reset) work without one.
    pub fn with_token<S: Into<String>>(mut self, token: S) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Add an URL to the client. If this is not set, the URL will be read
    /// from the environment variable `KNOWALLEDGE_URL`, falling back to the
    /// local default.
    pub fn with_url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        let env_fallback = self.env_fallback;

        let mut token = self.token.unwrap_or_default();
        if token.is_empty() && env_fallback {
            token = env::var("KNOWALLEDGE_TOKEN").unwrap_or_default();
        }
        let token = if token.is_empty() { None } else { Some(token) };

        let mut url = self.url.unwrap_or_default();
        if url.is_empty() && env_fallback {
            url = env::var("KNOWALLEDGE_URL").unwrap_or_default();
        }
        if url.is_empty() {
            url = DEFAULT_URL.to_string();
        }
        // Base-URL joining treats the last path segment as a file without
        // the trailing slash.
        if !url.ends_with('/') {
            url.push('/');
        }

        let http_client = http::Client::new(url.clone(), token)?;

        Ok(Client {
            url,
            auth: auth::Client::new(http_client.clone()),
            users: users::Client::new(http_client.clone()),
            admin: admin::Client::new(http_client.clone()),
            locations: locations::Client::new(http_client.clone()),
            http_client,
        })
    }
}
