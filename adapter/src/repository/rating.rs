use std::collections::HashSet;

use async_trait::async_trait;
use derive_new::new;
use uuid::Uuid;

use kernel::model::id::BookingId;
use kernel::repository::rating::RatingRepository;
use shared::error::{AppError, AppResult};

use crate::database::ConnectionPool;

#[derive(new)]
pub struct RatingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RatingRepository for RatingRepositoryImpl {
    async fn find_rated_booking_ids(
        &self,
        booking_ids: &[BookingId],
    ) -> AppResult<HashSet<BookingId>> {
        if booking_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let ids: Vec<Uuid> = booking_ids.iter().map(|id| id.raw()).collect();
        let rated: Vec<(Uuid,)> = sqlx::query_as(
            r#"
                SELECT booking_id
                FROM ratings
                WHERE booking_id = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rated
            .into_iter()
            .map(|(id,)| BookingId::from(id))
            .collect())
    }
}
