use super::{Booking, BookingStatus};
use crate::model::{id::UserId, role::Role, user::User};

/// 予約に対する操作の種別。
/// どのロールがどの操作を行えるかはここで一元管理する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Order,
    Accept,
    Finish,
    Cancel,
    List,
}

impl BookingAction {
    pub fn allows(self, role: Role) -> bool {
        match self {
            BookingAction::Order | BookingAction::Cancel => role == Role::Customer,
            BookingAction::Accept | BookingAction::Finish => role == Role::Employee,
            // 一覧は認証済みならどのロールでも可（見える範囲は BookingScope で絞る）
            BookingAction::List => true,
        }
    }
}

/// ロールごとの可視範囲。
/// 管理者は全件、顧客は自分の予約、従業員は自分の担当分と未割り当ての
/// PENDING プールを見る。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingScope {
    All,
    Customer(UserId),
    Employee(UserId),
}

impl BookingScope {
    pub fn for_user(user: &User) -> Self {
        match user.role {
            Role::Admin => BookingScope::All,
            Role::Customer => BookingScope::Customer(user.user_id),
            Role::Employee => BookingScope::Employee(user.user_id),
        }
    }

    /// 取得済みの 1 件がこの範囲に含まれるか
    pub fn permits(&self, booking: &Booking) -> bool {
        match *self {
            BookingScope::All => true,
            BookingScope::Customer(customer_id) => {
                booking.customer.customer_id == customer_id
            }
            BookingScope::Employee(employee_id) => {
                booking.status == BookingStatus::Pending
                    || booking
                        .employee
                        .as_ref()
                        .is_some_and(|e| e.employee_id == employee_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        booking::BookingService,
        id::{BookingId, ServiceId},
        user::{BookingCustomer, BookingEmployee},
    };
    use chrono::Utc;

    fn user(role: Role) -> User {
        User {
            user_id: UserId::new(),
            user_name: "somebody".into(),
            email: "somebody@example.com".into(),
            role,
            is_active: true,
        }
    }

    fn booking(
        customer_id: UserId,
        employee_id: Option<UserId>,
        status: BookingStatus,
    ) -> Booking {
        Booking {
            booking_id: BookingId::new(),
            customer: BookingCustomer {
                customer_id,
                customer_name: "customer".into(),
            },
            service: BookingService {
                service_id: ServiceId::new(),
                name: "AC repair".into(),
                price: 500000,
                category: "electronics".into(),
            },
            employee: employee_id.map(|employee_id| BookingEmployee {
                employee_id,
                employee_name: "employee".into(),
            }),
            address: "12 Le Loi".into(),
            hire_at: Utc::now(),
            note: None,
            status,
        }
    }

    #[test]
    fn ordering_and_cancelling_are_customer_only() {
        assert!(BookingAction::Order.allows(Role::Customer));
        assert!(!BookingAction::Order.allows(Role::Employee));
        assert!(!BookingAction::Order.allows(Role::Admin));
        assert!(BookingAction::Cancel.allows(Role::Customer));
        assert!(!BookingAction::Cancel.allows(Role::Admin));
    }

    #[test]
    fn accepting_and_finishing_are_employee_only() {
        for action in [BookingAction::Accept, BookingAction::Finish] {
            assert!(action.allows(Role::Employee));
            assert!(!action.allows(Role::Customer));
            assert!(!action.allows(Role::Admin));
        }
    }

    #[test]
    fn listing_is_open_to_every_role() {
        for role in [Role::Customer, Role::Employee, Role::Admin] {
            assert!(BookingAction::List.allows(role));
        }
    }

    #[test]
    fn admin_scope_sees_everything() {
        let admin = user(Role::Admin);
        let scope = BookingScope::for_user(&admin);
        let b = booking(UserId::new(), None, BookingStatus::Pending);
        assert!(scope.permits(&b));
    }

    #[test]
    fn customer_scope_sees_only_own_bookings() {
        let customer = user(Role::Customer);
        let scope = BookingScope::for_user(&customer);
        let own = booking(customer.user_id, None, BookingStatus::Pending);
        let other = booking(UserId::new(), None, BookingStatus::Pending);
        assert!(scope.permits(&own));
        assert!(!scope.permits(&other));
    }

    #[test]
    fn employee_scope_sees_own_work_and_the_pending_pool() {
        let employee = user(Role::Employee);
        let scope = BookingScope::for_user(&employee);

        let pool = booking(UserId::new(), None, BookingStatus::Pending);
        let own_accepted = booking(
            UserId::new(),
            Some(employee.user_id),
            BookingStatus::Accepted,
        );
        let own_completed = booking(
            UserId::new(),
            Some(employee.user_id),
            BookingStatus::Completed,
        );
        let someone_elses = booking(
            UserId::new(),
            Some(UserId::new()),
            BookingStatus::Accepted,
        );
        let cancelled = booking(UserId::new(), None, BookingStatus::Cancelled);

        assert!(scope.permits(&pool));
        assert!(scope.permits(&own_accepted));
        assert!(scope.permits(&own_completed));
        assert!(!scope.permits(&someone_elses));
        assert!(!scope.permits(&cancelled));
    }
}
