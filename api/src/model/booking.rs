use std::collections::HashSet;

use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    booking::{Booking, BookingStatus},
    id::{BookingId, ServiceId, UserId},
    list::PaginatedList,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub service_id: ServiceId,
    #[garde(length(min = 1))]
    pub address: String,
    #[garde(skip)]
    pub hire_at: DateTime<Utc>,
    #[garde(skip)]
    pub note: Option<String>,
}

const DEFAULT_LIMIT: i64 = 20;
const fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingListQuery {
    #[garde(range(min = 0))]
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[garde(range(min = 0))]
    #[serde(default)]
    pub offset: i64,
    #[garde(skip)]
    #[serde(default)]
    pub status: Option<BookingStatus>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedBookingResponse {
    // フィルタ適用後に見える件数の総数（このページの件数ではない）
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub items: Vec<BookingResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: BookingId,
    pub customer_id: UserId,
    pub customer_name: String,
    pub service_name: String,
    pub employee_id: Option<UserId>,
    pub employee_name: Option<String>,
    pub address: String,
    pub hire_at: DateTime<Utc>,
    pub note: Option<String>,
    pub price: i64,
    pub status: BookingStatus,
    pub has_rated: bool,
}

impl BookingResponse {
    /// hasRated は COMPLETED の予約についてのみ評価の有無を反映し、
    /// それ以外の状態では常に false になる。
    pub fn from_booking(value: Booking, rated: &HashSet<BookingId>) -> Self {
        let has_rated =
            value.status == BookingStatus::Completed && rated.contains(&value.booking_id);
        let Booking {
            booking_id,
            customer,
            service,
            employee,
            address,
            hire_at,
            note,
            status,
        } = value;
        let (employee_id, employee_name) = match employee {
            Some(e) => (Some(e.employee_id), Some(e.employee_name)),
            None => (None, None),
        };
        Self {
            id: booking_id,
            customer_id: customer.customer_id,
            customer_name: customer.customer_name,
            service_name: service.name,
            employee_id,
            employee_name,
            address,
            hire_at,
            note,
            price: service.price,
            status,
            has_rated,
        }
    }
}

pub fn to_booking_responses(
    bookings: Vec<Booking>,
    rated: &HashSet<BookingId>,
) -> Vec<BookingResponse> {
    bookings
        .into_iter()
        .map(|b| BookingResponse::from_booking(b, rated))
        .collect()
}

impl PaginatedBookingResponse {
    pub fn new(page: PaginatedList<Booking>, rated: &HashSet<BookingId>) -> Self {
        let PaginatedList {
            total,
            limit,
            offset,
            items,
        } = page;
        Self {
            total,
            limit,
            offset,
            items: to_booking_responses(items, rated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::{
        booking::BookingService,
        user::{BookingCustomer, BookingEmployee},
    };

    fn booking(status: BookingStatus, assigned: bool) -> Booking {
        Booking {
            booking_id: BookingId::new(),
            customer: BookingCustomer {
                customer_id: UserId::new(),
                customer_name: "customer".into(),
            },
            service: BookingService {
                service_id: ServiceId::new(),
                name: "AC repair".into(),
                price: 500000,
                category: "electronics".into(),
            },
            employee: assigned.then(|| BookingEmployee {
                employee_id: UserId::new(),
                employee_name: "employee".into(),
            }),
            address: "12 Le Loi".into(),
            hire_at: Utc::now(),
            note: None,
            status,
        }
    }

    #[test]
    fn has_rated_is_false_until_a_rating_exists() {
        let b = booking(BookingStatus::Completed, true);
        let id = b.booking_id;

        let not_rated = BookingResponse::from_booking(b, &HashSet::new());
        assert!(!not_rated.has_rated);

        let b = booking(BookingStatus::Completed, true);
        let id2 = b.booking_id;
        let rated: HashSet<BookingId> = [id, id2].into_iter().collect();
        let response = BookingResponse::from_booking(b, &rated);
        assert!(response.has_rated);
    }

    #[test]
    fn has_rated_is_never_set_for_non_completed_bookings() {
        let b = booking(BookingStatus::Pending, false);
        let rated: HashSet<BookingId> = [b.booking_id].into_iter().collect();
        let response = BookingResponse::from_booking(b, &rated);
        assert!(!response.has_rated);
    }

    #[test]
    fn response_serializes_in_camel_case_with_wire_status() {
        let response =
            BookingResponse::from_booking(booking(BookingStatus::Accepted, true), &HashSet::new());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ACCEPTED");
        assert!(json["employeeName"].is_string());
        assert_eq!(json["hasRated"], false);
        assert_eq!(json["price"], 500000);
    }

    #[test]
    fn list_query_defaults_are_applied() {
        let query: BookingListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.limit, 20);
        assert_eq!(query.offset, 0);
        assert!(query.status.is_none());

        let query: BookingListQuery =
            serde_json::from_str(r#"{"status":"PENDING","offset":40}"#).unwrap();
        assert_eq!(query.status, Some(BookingStatus::Pending));
        assert_eq!(query.offset, 40);
    }
}
