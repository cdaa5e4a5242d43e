use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use application::service::{CreateBookingService, GetBookingService};

use crate::auth::RequireAdmin;
use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{BookingTransformer, CreateBookingRequest, GetBookingRequest};
use crate::response::BookingPresenter;

pub trait BookingRouter {
    fn route_booking(self) -> Self;
}

impl BookingRouter for Router<AppModule> {
    fn route_booking(self) -> Self {
        self.route(
            "/booking/new",
            post(
                |State(module): State<AppModule>, Json(req): Json<CreateBookingRequest>| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.create_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/booking/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake(GetBookingRequest::new(id))
                        .handle(|dto| async move { module.get_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/bookings",
            get(
                |_: RequireAdmin, State(module): State<AppModule>| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake(())
                        .handle(|_| async move { module.get_all_bookings().await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
