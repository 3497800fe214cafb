//! User profile

use super::Session;
use crate::http::HttpClient;
use shared::models::{UserInfo, UserInfoUpdate};
use shared::{ApiResult, Operation, ensure_consistent};

pub struct UserRepository<H> {
    session: Session<H>,
}

impl<H: HttpClient> UserRepository<H> {
    pub(crate) fn new(session: Session<H>) -> Self {
        Self { session }
    }

    pub async fn get_user_info(&self) -> ApiResult<UserInfo> {
        self.session
            .call(Operation::GetUserInfo, self.session.http.get("user"))
            .await
    }

    /// Replace the profile; the echo must reflect every submitted field
    pub async fn update_user_info(&self, request: &UserInfoUpdate) -> ApiResult<UserInfo> {
        let user: UserInfo = self
            .session
            .call(
                Operation::UpdateUserInfo,
                self.session.http.put("user", request),
            )
            .await?;
        ensure_consistent(request, user).inspect_err(|_| {
            tracing::warn!(operation = %Operation::UpdateUserInfo, "Echoed profile does not match request");
        })
    }
}
