//! Sign-in, sign-up and sign-out

use super::Session;
use crate::http::HttpClient;
use shared::models::{AuthToken, SignInRequest, SignUpRequest};
use shared::{ApiResult, Operation};

pub struct AuthRepository<H> {
    session: Session<H>,
}

impl<H: HttpClient> AuthRepository<H> {
    pub(crate) fn new(session: Session<H>) -> Self {
        Self { session }
    }

    /// Sign in and store the issued token
    pub async fn sign_in(&self, email: &str, password: &str) -> ApiResult<AuthToken> {
        let request = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let token: AuthToken = self
            .session
            .call(
                Operation::SignIn,
                self.session.http.post("auth/sign-in", &request),
            )
            .await?;
        self.session.tokens.save(token.token.clone()).await;
        tracing::info!(email = %request.email, "Signed in");
        Ok(token)
    }

    /// Register and store the issued token
    pub async fn sign_up(&self, request: &SignUpRequest) -> ApiResult<AuthToken> {
        let token: AuthToken = self
            .session
            .call(
                Operation::SignUp,
                self.session.http.post("auth/sign-up", request),
            )
            .await?;
        self.session.tokens.save(token.token.clone()).await;
        tracing::info!(email = %request.email, "Signed up");
        Ok(token)
    }

    /// Forget the session locally; the backend keeps no session state
    pub async fn sign_out(&self) {
        self.session.tokens.clear().await;
        tracing::info!("Signed out");
    }
}
