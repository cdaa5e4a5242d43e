use crate::error::StackTrace;
use crate::handler::AppModule;
use crate::route::{BookingRouter, ChatRouter, HostelRouter, RoomRouter};
use axum::http::HeaderValue;
use error_stack::{Report, ResultExt};
use kernel::KernelError;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod auth;
mod chat;
mod controller;
mod error;
mod handler;
mod request;
mod response;
mod route;

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| {
                        "driver=debug,server=debug,tower_http=debug,hyper=debug,sqlx=debug".into()
                    }),
                ))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let app = AppModule::new().await?;

    let cors = match dotenvy::var("FRONTEND_URL").ok() {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .map_err(|error| Report::from(error).change_context(KernelError::Internal))
                .attach_printable_lazy(|| "FRONTEND_URL is not a valid origin")?;
            CorsLayer::new().allow_origin(origin)
        }
        None => CorsLayer::new(),
    };

    let router = axum::Router::new()
        .route_hostel()
        .route_room()
        .route_booking()
        .route_chat()
        .layer(cors)
        .with_state(app);

    let port = dotenvy::var("PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(8080);
    let bind = SocketAddr::from(([0, 0, 0, 0], port));
    let tcp = TcpListener::bind(bind)
        .await
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to listen tcp")?;
    tracing::info!(%bind, "server started");

    axum::serve(tcp, router.into_make_service())
        .await
        .change_context_lazy(|| KernelError::Internal)?;

    Ok(())
}
