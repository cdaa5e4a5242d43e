use axum::extract::{Multipart, Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use uuid::Uuid;

use application::service::{
    CreateRoomService, DeleteRoomService, GetHostelRoomsService, GetRoomService,
    ReplaceRoomPicturesService, UpdateRoomService,
};

use crate::auth::RequireAdmin;
use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CreateRoomRequest, DeleteRoomRequest, GetHostelRoomsRequest, GetRoomRequest, RoomTransformer,
    UpdateRoomRequest,
};
use crate::response::{CreatedRoomPresenter, DeletedRoomPresenter, RoomPresenter};
use crate::route::read_images;

pub trait RoomRouter {
    fn route_room(self) -> Self;
}

impl RoomRouter for Router<AppModule> {
    fn route_room(self) -> Self {
        self.route(
            "/hostel/:id/rooms",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(RoomTransformer, RoomPresenter)
                        .intake(GetHostelRoomsRequest::new(id))
                        .handle(|dto| async move { module.get_hostel_rooms(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/hostel/:id/room/new",
            post(
                |_: RequireAdmin,
                 State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<CreateRoomRequest>| async move {
                    Controller::new(RoomTransformer, CreatedRoomPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.create_room(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/room/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(RoomTransformer, RoomPresenter)
                        .intake(GetRoomRequest::new(id))
                        .handle(|dto| async move { module.get_room(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |_: RequireAdmin,
                 State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateRoomRequest>| async move {
                    Controller::new(RoomTransformer, RoomPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.update_room(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |_: RequireAdmin, State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(RoomTransformer, DeletedRoomPresenter)
                        .intake(DeleteRoomRequest::new(id))
                        .handle(|dto| async move { module.delete_room(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/room/:id/images",
            put(
                |_: RequireAdmin,
                 State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 multipart: Multipart| async move {
                    let images = read_images(multipart).await?;
                    Controller::new(RoomTransformer, RoomPresenter)
                        .intake((id, images))
                        .handle(|dto| async move { module.replace_room_pictures(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
