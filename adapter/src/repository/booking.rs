use async_trait::async_trait;
use derive_new::new;
use sqlx::{Postgres, QueryBuilder};

use kernel::model::{
    booking::{
        access::BookingScope,
        event::{AcceptBooking, BookingListOptions, CancelBooking, CreateBooking, FinishBooking},
        Booking,
    },
    id::BookingId,
    list::PaginatedList,
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::booking::BookingRow, ConnectionPool};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

const SELECT_BOOKING: &str = r#"
    SELECT
        b.booking_id,
        b.customer_id,
        c.user_name AS customer_name,
        b.service_id,
        s.name AS service_name,
        s.price,
        s.category,
        b.employee_id,
        e.user_name AS employee_name,
        b.address,
        b.hire_at,
        b.note,
        b.status
    FROM bookings AS b
    INNER JOIN users AS c ON b.customer_id = c.user_id
    INNER JOIN services AS s ON b.service_id = s.service_id
    LEFT JOIN users AS e ON b.employee_id = e.user_id
"#;

// 可視範囲を WHERE 句に変換する。ページ取得と件数取得の両方で
// 同じ条件を使うことで、total が見える件数の真の総数になる。
fn push_scope_condition(builder: &mut QueryBuilder<'_, Postgres>, scope: &BookingScope) {
    match *scope {
        BookingScope::All => {
            builder.push("TRUE");
        }
        BookingScope::Customer(customer_id) => {
            builder.push("b.customer_id = ");
            builder.push_bind(customer_id.raw());
        }
        BookingScope::Employee(employee_id) => {
            builder.push("(b.employee_id = ");
            builder.push_bind(employee_id.raw());
            builder.push(" OR b.status = 'PENDING')");
        }
    }
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, service_id, customer_id, address, hire_at, note, status)
                VALUES ($1, $2, $3, $4, $5, $6, 'PENDING')
            "#,
        )
        .bind(booking_id.raw())
        .bind(event.service_id.raw())
        .bind(event.customer_id.raw())
        .bind(event.address)
        .bind(event.hire_at)
        .bind(event.note)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }

        Ok(booking_id)
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> =
            sqlx::query_as(&format!("{SELECT_BOOKING} WHERE b.booking_id = $1"))
                .bind(booking_id.raw())
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        row.map(Booking::try_from).transpose()
    }

    async fn find_all(&self, options: BookingListOptions) -> AppResult<PaginatedList<Booking>> {
        let BookingListOptions {
            scope,
            status,
            limit,
            offset,
        } = options;

        let mut count_builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM bookings AS b WHERE ");
        push_scope_condition(&mut count_builder, &scope);
        if let Some(status) = status {
            count_builder.push(" AND b.status = ");
            count_builder.push_bind(status.to_string());
        }
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(SELECT_BOOKING);
        builder.push(" WHERE ");
        push_scope_condition(&mut builder, &scope);
        if let Some(status) = status {
            builder.push(" AND b.status = ");
            builder.push_bind(status.to_string());
        }
        builder.push(" ORDER BY b.created_at DESC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let rows: Vec<BookingRow> = builder
            .build_query_as()
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        let items = rows
            .into_iter()
            .map(Booking::try_from)
            .collect::<AppResult<Vec<Booking>>>()?;

        Ok(PaginatedList {
            total,
            limit,
            offset,
            items,
        })
    }

    // PENDING のままの場合にのみ割り当てと遷移を同じ UPDATE で行う。
    // 条件に外れた（他の従業員が先に受けた等）場合は 0 行更新になる。
    async fn accept(&self, event: AcceptBooking) -> AppResult<bool> {
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET status = 'ACCEPTED', employee_id = $1, updated_at = CURRENT_TIMESTAMP
                WHERE booking_id = $2
                  AND status = 'PENDING'
                  AND employee_id IS NULL
            "#,
        )
        .bind(event.employee_id.raw())
        .bind(event.booking_id.raw())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(res.rows_affected() == 1)
    }

    async fn finish(&self, event: FinishBooking) -> AppResult<bool> {
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET status = 'COMPLETED', updated_at = CURRENT_TIMESTAMP
                WHERE booking_id = $1
                  AND status = 'ACCEPTED'
                  AND employee_id = $2
            "#,
        )
        .bind(event.booking_id.raw())
        .bind(event.employee_id.raw())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(res.rows_affected() == 1)
    }

    async fn cancel(&self, event: CancelBooking) -> AppResult<bool> {
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET status = 'CANCELLED', updated_at = CURRENT_TIMESTAMP
                WHERE booking_id = $1
                  AND status = 'PENDING'
                  AND customer_id = $2
            "#,
        )
        .bind(event.booking_id.raw())
        .bind(event.customer_id.raw())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(res.rows_affected() == 1)
    }
}
