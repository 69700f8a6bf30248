use std::str::FromStr;

use kernel::model::{id::UserId, role::Role, user::User};
use shared::error::{AppError, AppResult};

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> AppResult<User> {
        let UserRow {
            user_id,
            user_name,
            email,
            role,
            is_active,
        } = value;
        let role = Role::from_str(&role)
            .map_err(|_| AppError::ConversionEntityError(format!("invalid role: {role}")))?;
        Ok(User {
            user_id,
            user_name,
            email,
            role,
            is_active,
        })
    }
}
