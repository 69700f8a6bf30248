use axum::Json;

use shared::error::AppResult;

use crate::{extractor::AuthorizedUser, model::user::UserResponse};

pub async fn get_current_user(user: AuthorizedUser) -> AppResult<Json<UserResponse>> {
    Ok(Json(UserResponse::from(user.user)))
}
