use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

use crate::chat::ChatFrame;
use crate::handler::AppModule;

pub trait ChatRouter {
    fn route_chat(self) -> Self;
}

impl ChatRouter for Router<AppModule> {
    fn route_chat(self) -> Self {
        self.route(
            "/chat/:hostel_id",
            get(
                |State(module): State<AppModule>,
                 Path(hostel_id): Path<Uuid>,
                 upgrade: WebSocketUpgrade| async move {
                    let response: Response =
                        upgrade.on_upgrade(move |socket| relay(module, hostel_id, socket));
                    response
                },
            ),
        )
    }
}

/// Fans every text frame out to the other members of the same hostel
/// channel. The sender never receives its own frames back.
async fn relay(module: AppModule, hostel_id: Uuid, socket: WebSocket) {
    let connection = Uuid::new_v4();
    let (sender, mut receiver) = module.chat().join(hostel_id);
    let (mut sink, mut stream) = socket.split();

    let forward = tokio::spawn(async move {
        loop {
            match receiver.recv().await {
                Ok(frame) => {
                    if frame.sender == connection {
                        continue;
                    }
                    if sink.send(Message::Text(frame.body)).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    });

    while let Some(Ok(message)) = stream.next().await {
        if let Message::Text(body) = message {
            if sender
                .send(ChatFrame {
                    sender: connection,
                    body,
                })
                .is_err()
            {
                break;
            }
        }
    }

    forward.abort();
    drop(sender);
    module.chat().leave(&hostel_id);
}
