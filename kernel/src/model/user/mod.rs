use crate::model::{id::UserId, role::Role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: Role,
    // 無効化された従業員は状態を変える操作ができない
    pub is_active: bool,
}

/// 予約を所有する顧客の表示用情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingCustomer {
    pub customer_id: UserId,
    pub customer_name: String,
}

/// 予約を担当する従業員の表示用情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingEmployee {
    pub employee_id: UserId,
    pub employee_name: String,
}
