use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    booking::{
        event::{AcceptBooking, BookingListOptions, CancelBooking, CreateBooking, FinishBooking},
        Booking,
    },
    id::BookingId,
    list::PaginatedList,
};

/// 遷移系のメソッドは「現在の状態が期待どおりの場合にのみ更新する」
/// 条件付き更新で実装すること。戻り値の bool は遷移が実際に行われたか
/// どうかで、false は他のリクエストに先を越された（または状態が既に
/// 変わっていた）ことを意味する。先勝ちで、負けた側は状態違反として扱う。
#[async_trait]
pub trait BookingRepository: Send + Sync {
    // 予約を PENDING で作成する
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    // 予約 ID で 1 件取得する
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    // 可視範囲で絞ったページを取得する。total も絞った後の真の総数
    async fn find_all(&self, options: BookingListOptions) -> AppResult<PaginatedList<Booking>>;
    // PENDING の場合にのみ担当者を割り当てて ACCEPTED にする
    async fn accept(&self, event: AcceptBooking) -> AppResult<bool>;
    // 担当者本人かつ ACCEPTED の場合にのみ COMPLETED にする
    async fn finish(&self, event: FinishBooking) -> AppResult<bool>;
    // 所有する顧客かつ PENDING の場合にのみ CANCELLED にする
    async fn cancel(&self, event: CancelBooking) -> AppResult<bool>;
}
