use kernel::model::{id::UserId, role::Role, user::User};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

#[derive(Debug, Serialize, Deserialize, VariantNames, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleName {
    Customer,
    Employee,
    Admin,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Customer => Self::Customer,
            Role::Employee => Self::Employee,
            Role::Admin => Self::Admin,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Customer => Self::Customer,
            RoleName::Employee => Self::Employee,
            RoleName::Admin => Self::Admin,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: RoleName,
    pub is_active: bool,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            email,
            role,
            is_active,
        } = value;
        Self {
            user_id,
            user_name,
            email,
            role: RoleName::from(role),
            is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_name_round_trips() {
        for role in [Role::Customer, Role::Employee, Role::Admin] {
            assert_eq!(Role::from(RoleName::from(role)), role);
        }
    }

    #[test]
    fn role_serializes_as_screaming_snake_case() {
        let json = serde_json::to_value(RoleName::Customer).unwrap();
        assert_eq!(json, "CUSTOMER");
    }
}
