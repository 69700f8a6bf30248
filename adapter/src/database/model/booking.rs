use std::str::FromStr;

use chrono::{DateTime, Utc};
use kernel::model::{
    booking::{Booking, BookingService, BookingStatus},
    id::{BookingId, ServiceId, UserId},
    user::{BookingCustomer, BookingEmployee},
};
use shared::error::{AppError, AppResult};

/// bookings を users（顧客・担当者）と services に JOIN した 1 行。
/// employee_id / employee_name は ACCEPTED 以降でのみ非 NULL になる。
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub customer_id: UserId,
    pub customer_name: String,
    pub service_id: ServiceId,
    pub service_name: String,
    pub price: i64,
    pub category: String,
    pub employee_id: Option<UserId>,
    pub employee_name: Option<String>,
    pub address: String,
    pub hire_at: DateTime<Utc>,
    pub note: Option<String>,
    pub status: String,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> AppResult<Booking> {
        let BookingRow {
            booking_id,
            customer_id,
            customer_name,
            service_id,
            service_name,
            price,
            category,
            employee_id,
            employee_name,
            address,
            hire_at,
            note,
            status,
        } = value;

        let status = BookingStatus::from_str(&status).map_err(|_| {
            AppError::ConversionEntityError(format!("invalid booking status: {status}"))
        })?;
        let employee = match (employee_id, employee_name) {
            (Some(employee_id), Some(employee_name)) => Some(BookingEmployee {
                employee_id,
                employee_name,
            }),
            (None, None) => None,
            _ => {
                return Err(AppError::ConversionEntityError(
                    "employee columns are half set".into(),
                ))
            }
        };

        Ok(Booking {
            booking_id,
            customer: BookingCustomer {
                customer_id,
                customer_name,
            },
            service: BookingService {
                service_id,
                name: service_name,
                price,
                category,
            },
            employee,
            address,
            hire_at,
            note,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str, assigned: bool) -> BookingRow {
        BookingRow {
            booking_id: BookingId::new(),
            customer_id: UserId::new(),
            customer_name: "customer".into(),
            service_id: ServiceId::new(),
            service_name: "AC repair".into(),
            price: 500000,
            category: "electronics".into(),
            employee_id: assigned.then(UserId::new),
            employee_name: assigned.then(|| "employee".into()),
            address: "12 Le Loi".into(),
            hire_at: Utc::now(),
            note: None,
            status: status.into(),
        }
    }

    #[test]
    fn row_converts_and_keeps_the_assignment_invariant() {
        let pending = Booking::try_from(row("PENDING", false)).unwrap();
        assert_eq!(pending.status, BookingStatus::Pending);
        assert!(pending.assignment_is_consistent());

        let accepted = Booking::try_from(row("ACCEPTED", true)).unwrap();
        assert_eq!(accepted.status, BookingStatus::Accepted);
        assert!(accepted.assignment_is_consistent());
    }

    #[test]
    fn unknown_status_fails_conversion() {
        assert!(Booking::try_from(row("SHIPPED", false)).is_err());
    }

    #[test]
    fn half_set_employee_columns_fail_conversion() {
        let mut r = row("ACCEPTED", true);
        r.employee_name = None;
        assert!(Booking::try_from(r).is_err());
    }
}
