use axum::extract::{Multipart, Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use axum_extra::extract::Query;
use uuid::Uuid;

use application::service::{
    CreateHostelService, DeleteHostelService, GetHostelService, ReplaceHostelPicturesService,
    SearchHostelsService, UpdateHostelService,
};

use crate::auth::RequireAdmin;
use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CreateHostelRequest, DeleteHostelRequest, GetHostelRequest, HostelTransformer,
    SearchHostelsRequest, UpdateHostelRequest,
};
use crate::response::{DeletedHostelPresenter, HostelPresenter};
use crate::route::read_images;

pub trait HostelRouter {
    fn route_hostel(self) -> Self;
}

impl HostelRouter for Router<AppModule> {
    fn route_hostel(self) -> Self {
        self.route(
            "/hostels",
            get(
                |State(module): State<AppModule>, Query(req): Query<SearchHostelsRequest>| async move {
                    Controller::new(HostelTransformer, HostelPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.search_hostels(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/hostel/new",
            post(
                |_: RequireAdmin,
                 State(module): State<AppModule>,
                 Json(req): Json<CreateHostelRequest>| async move {
                    Controller::new(HostelTransformer, HostelPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.create_hostel(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/hostel/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(HostelTransformer, HostelPresenter)
                        .intake(GetHostelRequest::new(id))
                        .handle(|dto| async move { module.get_hostel(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |_: RequireAdmin,
                 State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateHostelRequest>| async move {
                    Controller::new(HostelTransformer, HostelPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.update_hostel(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |_: RequireAdmin, State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(HostelTransformer, DeletedHostelPresenter)
                        .intake(DeleteHostelRequest::new(id))
                        .handle(|dto| async move { module.delete_hostel(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/hostel/:id/images",
            put(
                |_: RequireAdmin,
                 State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 multipart: Multipart| async move {
                    let images = read_images(multipart).await?;
                    Controller::new(HostelTransformer, HostelPresenter)
                        .intake((id, images))
                        .handle(|dto| async move { module.replace_hostel_pictures(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
