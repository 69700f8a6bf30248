use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;

use kernel::model::{booking::lifecycle::BookingRejection, id::ServiceId};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::AuthorizedUser,
    model::{
        service::{PaginatedServiceResponse, ServiceListQuery, ServiceResponse},
        ApiResponse,
    },
};

pub async fn show_service_list(
    _user: AuthorizedUser,
    Query(query): Query<ServiceListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ApiResponse<PaginatedServiceResponse>>> {
    query.validate(&())?;

    registry
        .service_repository()
        .find_all(query.into())
        .await
        .map(PaginatedServiceResponse::from)
        .map(ApiResponse::ok)
        .map(Json)
}

pub async fn show_service(
    _user: AuthorizedUser,
    Path(service_id): Path<ServiceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ApiResponse<ServiceResponse>>> {
    let service = registry.service_repository().find_by_id(service_id).await?;
    let res = match service {
        Some(service) => ApiResponse::ok(service.into()),
        None => ApiResponse::rejected(BookingRejection::ServiceNotFound),
    };
    Ok(Json(res))
}
