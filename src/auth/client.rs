use serde::Serialize;
use tracing::instrument;

use crate::{
    auth::model::{RegisterPayload, RegisterRequest, Status, SuperAdminSignIn},
    error::{Error, Result},
    http,
    session::{Identity, Role},
};

/// Provides the sign-in, registration and account-recovery flows.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: http::Client,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct EmailOtpParams<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    otp: Option<&'a str>,
}

impl Client {
    pub(crate) fn new(http_client: http::Client) -> Self {
        Self { http_client }
    }

    /// Sign a user in. The returned identity carries the bearer token and
    /// has its role defaulted to `user` when the server omits it; hand it to
    /// [`Session::login`](crate::session::Session::login).
    #[instrument(skip(self, password))]
    pub async fn signin(&self, email: &str, password: &str) -> Result<Identity> {
        self.http_client
            .post("/user/signin", &Credentials { email, password })
            .await?
            .json()
            .await
    }

    /// Sign in to the super-admin console. The backend doesn't echo a role
    /// here, so it is stamped on client-side.
    #[instrument(skip(self, password))]
    pub async fn superadmin_signin(&self, email: &str, password: &str) -> Result<Identity> {
        let res: SuperAdminSignIn = self
            .http_client
            .post("/superAdmin/signin", &Credentials { email, password })
            .await?
            .json()
            .await?;

        let mut identity = Identity::new(res.email.unwrap_or_else(|| email.to_string()), res.token);
        identity.role = Role::Superadmin;
        Ok(identity)
    }

    /// Register a new account. Required-field checks run locally first and
    /// surface as [`Error::Validation`] without touching the network.
    #[instrument(skip(self, req), fields(user_type = req.user_type.as_str()))]
    pub async fn register(&self, req: &RegisterRequest) -> Result<Identity> {
        req.validate().map_err(Error::Validation)?;

        self.http_client
            .post(req.user_type.endpoint(), &RegisterPayload::from(req))
            .await?
            .json()
            .await
    }

    /// Request a password-reset OTP for the given email.
    #[instrument(skip(self))]
    pub async fn forgot_password(&self, email: &str) -> Result<Status> {
        #[derive(Serialize)]
        struct Payload<'a> {
            email: &'a str,
        }

        self.http_client
            .post("/user/forgetPassword", &Payload { email })
            .await?
            .json()
            .await
    }

    /// Check a password-reset OTP. On success the caller proceeds to
    /// [`Client::reset_password`].
    #[instrument(skip(self, otp))]
    pub async fn verify_reset_otp(&self, email: &str, otp: &str) -> Result<Status> {
        #[derive(Serialize)]
        struct Payload<'a> {
            email: &'a str,
            otp: &'a str,
        }

        self.http_client
            .post("/user/verifyForgetPasswordOTP", &Payload { email, otp })
            .await?
            .json()
            .await
    }

    /// Set a new password after the OTP check. The backend overloads the
    /// OTP-verification route for this; both bodies are kept as the original
    /// client sent them.
    #[instrument(skip(self, new_password))]
    pub async fn reset_password(&self, email: &str, new_password: &str) -> Result<Status> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Payload<'a> {
            email: &'a str,
            new_password: &'a str,
        }

        self.http_client
            .post(
                "/user/verifyForgetPasswordOTP",
                &Payload {
                    email,
                    new_password,
                },
            )
            .await?
            .json()
            .await
    }

    /// Send an email-ownership OTP. This endpoint takes its input as query
    /// parameters on a bodyless POST.
    #[instrument(skip(self))]
    pub async fn send_email_otp(&self, email: &str) -> Result<Status> {
        let params = serde_qs::to_string(&EmailOtpParams { email, otp: None })?;
        self.http_client
            .post_empty(format!("/user/verifyemail?{params}"))
            .await?
            .json()
            .await
    }

    /// Confirm an email-ownership OTP.
    #[instrument(skip(self, otp))]
    pub async fn verify_email_otp(&self, email: &str, otp: &str) -> Result<Status> {
        let params = serde_qs::to_string(&EmailOtpParams {
            email,
            otp: Some(otp),
        })?;
        self.http_client
            .post_empty(format!("/user/verifyemail?{params}"))
            .await?
            .json()
            .await
    }
}
