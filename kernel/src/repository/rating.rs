use std::collections::HashSet;

use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::id::BookingId;

/// 評価ストアはこの層からは存在確認のみに使う読み取り専用の外部資源
#[async_trait]
pub trait RatingRepository: Send + Sync {
    // 渡した予約 ID のうち、評価が存在するものだけを返す
    async fn find_rated_booking_ids(
        &self,
        booking_ids: &[BookingId],
    ) -> AppResult<HashSet<BookingId>>;
}
