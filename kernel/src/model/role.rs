use strum::{AsRefStr, Display, EnumIter, EnumString};

/// アカウント単位で固定のロール。互いに排他で、兼任はない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Employee,
    Admin,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_uses_screaming_snake_case_on_the_wire() {
        assert_eq!(Role::Customer.to_string(), "CUSTOMER");
        assert_eq!(Role::from_str("EMPLOYEE").unwrap(), Role::Employee);
        assert!(Role::from_str("employee").is_err());
    }
}
