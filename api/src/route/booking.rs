use axum::{
    routing::{get, patch, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    accept_booking, cancel_booking, finish_booking, order_booking, show_booking_list,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let bookings_routers = Router::new()
        .route("/", post(order_booking))
        .route("/", get(show_booking_list))
        .route("/:booking_id/accept", patch(accept_booking))
        .route("/:booking_id/finish", patch(finish_booking))
        .route("/:booking_id/cancel", patch(cancel_booking));

    Router::new().nest("/bookings", bookings_routers)
}
