use chrono::{DateTime, Utc};
use derive_new::new;

use super::{access::BookingScope, BookingStatus};
use crate::model::id::{BookingId, ServiceId, UserId};

#[derive(new)]
pub struct CreateBooking {
    pub service_id: ServiceId,
    pub customer_id: UserId,
    pub address: String,
    pub hire_at: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(new)]
pub struct AcceptBooking {
    pub booking_id: BookingId,
    pub employee_id: UserId,
}

#[derive(new)]
pub struct FinishBooking {
    pub booking_id: BookingId,
    pub employee_id: UserId,
}

#[derive(new)]
pub struct CancelBooking {
    pub booking_id: BookingId,
    pub customer_id: UserId,
}

/// 一覧取得の条件。scope は必ず呼び出し側のロールから導出すること。
#[derive(Debug, new)]
pub struct BookingListOptions {
    pub scope: BookingScope,
    pub status: Option<BookingStatus>,
    pub limit: i64,
    pub offset: i64,
}
