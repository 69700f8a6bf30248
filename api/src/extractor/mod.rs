use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    RequestPartsExt,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use kernel::model::{
    auth::AccessToken,
    booking::access::BookingAction,
    id::UserId,
    role::Role,
    user::User,
};
use registry::AppRegistry;
use shared::error::AppError;

/// Bearer トークンをドメインのユーザーに解決した認証済みリクエスト主体。
/// ハンドラはここから取り出した User を明示的な引数として
/// ドメイン側のチェックに渡す（グローバルな現在ユーザーは持たない）。
pub struct AuthorizedUser {
    pub access_token: AccessToken,
    pub user: User,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user.user_id
    }

    pub fn is_admin(&self) -> bool {
        self.user.role == Role::Admin
    }

    /// 操作のロール要件を満たさなければ 403 相当のエラーにする
    pub fn ensure_can(&self, action: BookingAction) -> Result<(), AppError> {
        if action.allows(self.user.role) {
            Ok(())
        } else {
            Err(AppError::ForbiddenOperation)
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthorizedUser
where
    AppRegistry: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let registry = AppRegistry::from_ref(state);

        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::UnauthorizedError)?;
        let access_token = AccessToken(bearer.token().to_string());

        let user_id = registry
            .auth_repository()
            .fetch_user_id_from_token(&access_token)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;
        let user = registry
            .user_repository()
            .find_current_user(user_id)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        Ok(Self { access_token, user })
    }
}
