use thiserror::Error;

use super::{Booking, BookingStatus};
use crate::model::user::User;

/// 業務ルールとしての却下。HTTP としては成功応答に載せて返し、
/// code で種別を区別する（認可の拒否とは混ぜない）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookingRejection {
    #[error("Service not found")]
    ServiceNotFound,
    #[error("Your account is not active")]
    AccountNotActive,
    #[error("Booking not found")]
    BookingNotFound,
    #[error("Booking status is invalid for this action")]
    InvalidBookingStatus,
    #[error("Only a pending booking can be cancelled")]
    CannotCancel,
}

/// 事前条件チェックの失敗。Rejected は業務ルール上の却下、
/// Denied は対象への権限がない（所有者でない・担当者でない）場合で、
/// トランスポートレベルの拒否として返す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error(transparent)]
    Rejected(#[from] BookingRejection),
    #[error("acting user has no standing over this booking")]
    Denied,
}

/// Accept の事前条件。チェック順は固定:
/// 従業員が有効 → 予約が存在 → 状態が PENDING。
/// 順序が変わると返る却下の種別が変わるので入れ替えないこと
/// （例: 無効な従業員が存在しない予約を受けたら AccountNotActive が返る）。
pub fn check_accept(actor: &User, booking: Option<&Booking>) -> Result<(), LifecycleError> {
    if !actor.is_active {
        return Err(BookingRejection::AccountNotActive.into());
    }
    let booking = booking.ok_or(BookingRejection::BookingNotFound)?;
    if booking.status != BookingStatus::Pending {
        return Err(BookingRejection::InvalidBookingStatus.into());
    }
    Ok(())
}

/// Finish の事前条件。チェック順は固定:
/// 従業員が有効 → 予約が存在 → 担当者が本人（でなければ Denied）→
/// 状態が ACCEPTED。
pub fn check_finish(actor: &User, booking: Option<&Booking>) -> Result<(), LifecycleError> {
    if !actor.is_active {
        return Err(BookingRejection::AccountNotActive.into());
    }
    let booking = booking.ok_or(BookingRejection::BookingNotFound)?;
    let assigned_to_actor = booking
        .employee
        .as_ref()
        .is_some_and(|e| e.employee_id == actor.user_id);
    if !assigned_to_actor {
        return Err(LifecycleError::Denied);
    }
    if booking.status != BookingStatus::Accepted {
        return Err(BookingRejection::InvalidBookingStatus.into());
    }
    Ok(())
}

/// Cancel の事前条件。チェック順は固定:
/// 予約が存在 → 所有する顧客が本人（でなければ Denied）→
/// 状態が PENDING（でなければ CannotCancel）。
pub fn check_cancel(actor: &User, booking: Option<&Booking>) -> Result<(), LifecycleError> {
    let booking = booking.ok_or(BookingRejection::BookingNotFound)?;
    if booking.customer.customer_id != actor.user_id {
        return Err(LifecycleError::Denied);
    }
    if booking.status != BookingStatus::Pending {
        return Err(BookingRejection::CannotCancel.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        booking::BookingService,
        id::{BookingId, ServiceId, UserId},
        role::Role,
        user::{BookingCustomer, BookingEmployee},
    };
    use chrono::Utc;

    fn employee(is_active: bool) -> User {
        User {
            user_id: UserId::new(),
            user_name: "employee".into(),
            email: "employee@example.com".into(),
            role: Role::Employee,
            is_active,
        }
    }

    fn customer() -> User {
        User {
            user_id: UserId::new(),
            user_name: "customer".into(),
            email: "customer@example.com".into(),
            role: Role::Customer,
            is_active: true,
        }
    }

    fn booking(
        customer_id: UserId,
        employee_id: Option<UserId>,
        status: BookingStatus,
    ) -> Booking {
        let b = Booking {
            booking_id: BookingId::new(),
            customer: BookingCustomer {
                customer_id,
                customer_name: "customer".into(),
            },
            service: BookingService {
                service_id: ServiceId::new(),
                name: "Washing machine repair".into(),
                price: 500000,
                category: "appliances".into(),
            },
            employee: employee_id.map(|employee_id| BookingEmployee {
                employee_id,
                employee_name: "employee".into(),
            }),
            address: "12 Le Loi".into(),
            hire_at: Utc::now(),
            note: Some("leaking".into()),
            status,
        };
        assert!(b.assignment_is_consistent());
        b
    }

    #[test]
    fn accept_succeeds_only_on_pending() {
        let e = employee(true);
        let pending = booking(UserId::new(), None, BookingStatus::Pending);
        assert!(check_accept(&e, Some(&pending)).is_ok());

        for status in [BookingStatus::Completed, BookingStatus::Cancelled] {
            let b = booking(UserId::new(), None, BookingStatus::Pending);
            let b = Booking { status, ..b };
            assert_eq!(
                check_accept(&e, Some(&b)),
                Err(BookingRejection::InvalidBookingStatus.into())
            );
        }
    }

    #[test]
    fn second_accept_gets_a_wrong_status_rejection() {
        // 先に受けた従業員が勝ち、後から来た従業員は却下される
        let first = employee(true);
        let second = employee(true);
        let accepted = booking(
            UserId::new(),
            Some(first.user_id),
            BookingStatus::Accepted,
        );
        assert_eq!(
            check_accept(&second, Some(&accepted)),
            Err(BookingRejection::InvalidBookingStatus.into())
        );
    }

    #[test]
    fn inactive_employee_is_rejected_before_anything_else() {
        let e = employee(false);
        // 予約が存在しなくても AccountNotActive が先に返る
        assert_eq!(
            check_accept(&e, None),
            Err(BookingRejection::AccountNotActive.into())
        );
        assert_eq!(
            check_finish(&e, None),
            Err(BookingRejection::AccountNotActive.into())
        );
    }

    #[test]
    fn accept_on_missing_booking_is_not_found() {
        let e = employee(true);
        assert_eq!(
            check_accept(&e, None),
            Err(BookingRejection::BookingNotFound.into())
        );
    }

    #[test]
    fn finish_by_unassigned_employee_is_denied() {
        let assigned = employee(true);
        let other = employee(true);
        let b = booking(
            UserId::new(),
            Some(assigned.user_id),
            BookingStatus::Accepted,
        );
        assert_eq!(check_finish(&other, Some(&b)), Err(LifecycleError::Denied));
        // 担当者本人なら通る
        assert!(check_finish(&assigned, Some(&b)).is_ok());
    }

    #[test]
    fn finish_before_accept_is_always_a_wrong_status() {
        // PENDING はまだ誰にも割り当てられていないので Denied 側に倒れる。
        // 割り当てなしで COMPLETED / CANCELLED を finish しようとしても同じ。
        let e = employee(true);
        let pending = booking(UserId::new(), None, BookingStatus::Pending);
        assert_eq!(
            check_finish(&e, Some(&pending)),
            Err(LifecycleError::Denied)
        );

        // 自分の担当で既に COMPLETED のものは状態違反
        let done = booking(UserId::new(), Some(e.user_id), BookingStatus::Completed);
        assert_eq!(
            check_finish(&e, Some(&done)),
            Err(BookingRejection::InvalidBookingStatus.into())
        );
    }

    #[test]
    fn cancel_requires_ownership_then_pending() {
        let owner = customer();
        let stranger = customer();
        let pending = booking(owner.user_id, None, BookingStatus::Pending);

        assert!(check_cancel(&owner, Some(&pending)).is_ok());
        assert_eq!(
            check_cancel(&stranger, Some(&pending)),
            Err(LifecycleError::Denied)
        );
        assert_eq!(
            check_cancel(&owner, None),
            Err(BookingRejection::BookingNotFound.into())
        );
    }

    #[test]
    fn accepted_booking_cannot_be_cancelled() {
        let owner = customer();
        let accepted = booking(
            owner.user_id,
            Some(UserId::new()),
            BookingStatus::Accepted,
        );
        assert_eq!(
            check_cancel(&owner, Some(&accepted)),
            Err(BookingRejection::CannotCancel.into())
        );

        let completed = booking(
            owner.user_id,
            Some(UserId::new()),
            BookingStatus::Completed,
        );
        assert_eq!(
            check_cancel(&owner, Some(&completed)),
            Err(BookingRejection::CannotCancel.into())
        );
    }
}
