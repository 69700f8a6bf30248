use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;

use kernel::model::{
    booking::{
        access::{BookingAction, BookingScope},
        event::{AcceptBooking, BookingListOptions, CancelBooking, CreateBooking, FinishBooking},
        lifecycle::{check_accept, check_cancel, check_finish, BookingRejection, LifecycleError},
        BookingStatus,
    },
    id::BookingId,
    list::PaginatedList,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::{
        booking::{BookingListQuery, CreateBookingRequest, PaginatedBookingResponse},
        ApiResponse,
    },
};

type CommandResponse = AppResult<Json<ApiResponse<String>>>;

/// 事前条件チェックの失敗を応答へ写す。
/// 業務上の却下は 200 の封筒、権限がない場合だけエラーで返す。
fn lifecycle_outcome(error: LifecycleError) -> CommandResponse {
    match error {
        LifecycleError::Rejected(rejection) => Ok(Json(ApiResponse::rejected(rejection))),
        LifecycleError::Denied => Err(AppError::ForbiddenOperation),
    }
}

pub async fn order_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> CommandResponse {
    req.validate(&())?;
    user.ensure_can(BookingAction::Order)?;

    // サービスが存在しない場合は障害ではなく業務上の却下として返す
    let service = registry
        .service_repository()
        .find_by_id(req.service_id)
        .await?;
    if service.is_none() {
        return Ok(Json(ApiResponse::rejected(BookingRejection::ServiceNotFound)));
    }

    let event = CreateBooking::new(req.service_id, user.id(), req.address, req.hire_at, req.note);
    let booking_id = registry.booking_repository().create(event).await?;
    tracing::info!(%booking_id, customer_id = %user.id(), "booking ordered");

    Ok(Json(ApiResponse::ok("Order booking successfully".into())))
}

pub async fn accept_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> CommandResponse {
    user.ensure_can(BookingAction::Accept)?;

    let booking = registry.booking_repository().find_by_id(booking_id).await?;
    if let Err(e) = check_accept(&user.user, booking.as_ref()) {
        return lifecycle_outcome(e);
    }

    // 事前条件を見てから更新するまでの間に別の従業員が受けている
    // 可能性があるため、遷移自体は条件付き更新で行い、先勝ちにする
    let accepted = registry
        .booking_repository()
        .accept(AcceptBooking::new(booking_id, user.id()))
        .await?;
    if !accepted {
        return Ok(Json(ApiResponse::rejected(
            BookingRejection::InvalidBookingStatus,
        )));
    }

    tracing::info!(%booking_id, employee_id = %user.id(), "booking accepted");
    Ok(Json(ApiResponse::ok("Accept booking successfully".into())))
}

pub async fn finish_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> CommandResponse {
    user.ensure_can(BookingAction::Finish)?;

    let booking = registry.booking_repository().find_by_id(booking_id).await?;
    if let Err(e) = check_finish(&user.user, booking.as_ref()) {
        return lifecycle_outcome(e);
    }

    let finished = registry
        .booking_repository()
        .finish(FinishBooking::new(booking_id, user.id()))
        .await?;
    if !finished {
        return Ok(Json(ApiResponse::rejected(
            BookingRejection::InvalidBookingStatus,
        )));
    }

    tracing::info!(%booking_id, employee_id = %user.id(), "booking finished");
    Ok(Json(ApiResponse::ok("Finish booking successfully".into())))
}

pub async fn cancel_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> CommandResponse {
    user.ensure_can(BookingAction::Cancel)?;

    let booking = registry.booking_repository().find_by_id(booking_id).await?;
    if let Err(e) = check_cancel(&user.user, booking.as_ref()) {
        return lifecycle_outcome(e);
    }

    let cancelled = registry
        .booking_repository()
        .cancel(CancelBooking::new(booking_id, user.id()))
        .await?;
    if !cancelled {
        return Ok(Json(ApiResponse::rejected(BookingRejection::CannotCancel)));
    }

    tracing::info!(%booking_id, customer_id = %user.id(), "booking cancelled");
    Ok(Json(ApiResponse::ok("Cancel booking successfully".into())))
}

pub async fn show_booking_list(
    user: AuthorizedUser,
    Query(query): Query<BookingListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ApiResponse<PaginatedBookingResponse>>> {
    query.validate(&())?;
    user.ensure_can(BookingAction::List)?;

    let scope = BookingScope::for_user(&user.user);
    let options = BookingListOptions::new(scope, query.status, query.limit, query.offset);
    let page = registry.booking_repository().find_all(options).await?;

    // ストア側も scope で絞っているが、見せてよいかの最終判断は
    // ここの述語に寄せる。total は絞り込み後の真の総数のまま
    let PaginatedList {
        total,
        limit,
        offset,
        items,
    } = page;
    let items: Vec<_> = items.into_iter().filter(|b| scope.permits(b)).collect();

    // hasRated の確認は COMPLETED の予約に限る
    let completed_ids: Vec<BookingId> = items
        .iter()
        .filter(|b| b.status == BookingStatus::Completed)
        .map(|b| b.booking_id)
        .collect();
    let rated = registry
        .rating_repository()
        .find_rated_booking_ids(&completed_ids)
        .await?;

    let page = PaginatedList {
        total,
        limit,
        offset,
        items,
    };
    Ok(Json(ApiResponse::ok(PaginatedBookingResponse::new(
        page, &rated,
    ))))
}
