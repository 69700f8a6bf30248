use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::model::{
    id::{BookingId, ServiceId},
    user::{BookingCustomer, BookingEmployee},
};

pub mod access;
pub mod event;
pub mod lifecycle;

/// 予約の状態。
/// PENDING → ACCEPTED → COMPLETED、または PENDING → CANCELLED の
/// 一方向にしか進まない。COMPLETED / CANCELLED からの遷移は存在しない。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: BookingId,
    pub customer: BookingCustomer,
    pub service: BookingService,
    // ACCEPTED になるまでは必ず None
    pub employee: Option<BookingEmployee>,
    pub address: String,
    pub hire_at: DateTime<Utc>,
    pub note: Option<String>,
    pub status: BookingStatus,
}

impl Booking {
    /// 「従業員が割り当てられている ⇔ 状態が ACCEPTED か COMPLETED」
    /// の不変条件を満たしているか。
    pub fn assignment_is_consistent(&self) -> bool {
        matches!(
            self.status,
            BookingStatus::Accepted | BookingStatus::Completed
        ) == self.employee.is_some()
    }
}

/// 予約に埋め込むサービスの要約
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingService {
    pub service_id: ServiceId,
    pub name: String,
    pub price: i64,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_parses_wire_representation() {
        assert_eq!(
            BookingStatus::from_str("PENDING").unwrap(),
            BookingStatus::Pending
        );
        assert_eq!(BookingStatus::Cancelled.to_string(), "CANCELLED");
        assert!(BookingStatus::from_str("Pending").is_err());
    }
}
