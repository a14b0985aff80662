#![allow(dead_code)]

use axum_test::{TestServer, TestWebSocket, WsMessage};
use serde_json::{Value, json};
use tokio::time::{Duration, timeout};

/// How long a client waits before concluding nothing was sent to it
pub const QUIET_PERIOD: Duration = Duration::from_millis(200);

/// WebSocket test client wrapper
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    /// Connect to the real-time channel
    pub async fn connect(server: &TestServer) -> Self {
        let ws = server.get_websocket("/ws").await.into_websocket().await;
        Self { ws }
    }

    /// Join a board and wait for the acknowledgement
    pub async fn join(&mut self, board_id: &str) {
        self.send_json(&json!({ "event": "join-board", "boardId": board_id }))
            .await;
        let ack = self.receive_json().await;
        assert_eq!(ack["event"], "board:joined");
        assert_eq!(ack["payload"]["boardId"], board_id);
    }

    /// Leave a board and wait for the acknowledgement
    pub async fn leave(&mut self, board_id: &str) {
        self.send_json(&json!({ "event": "leave-board", "boardId": board_id }))
            .await;
        let ack = self.receive_json().await;
        assert_eq!(ack["event"], "board:left");
    }

    pub async fn send_json(&mut self, value: &Value) {
        self.ws.send_text(value.to_string()).await;
    }

    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    pub async fn receive_json(&mut self) -> Value {
        let text = self.ws.receive_text().await;
        serde_json::from_str(&text).expect("server frame is JSON")
    }

    /// Next frame of any kind
    pub async fn receive_message(&mut self) -> WsMessage {
        self.ws.receive_message().await
    }

    /// True if no frame arrives within `QUIET_PERIOD`
    pub async fn receives_nothing(&mut self) -> bool {
        timeout(QUIET_PERIOD, self.ws.receive_message()).await.is_err()
    }

    pub async fn close(self) {
        self.ws.close().await;
    }
}

/// Connect `count` clients that all joined `board_id`
pub async fn create_clients_for_board(
    server: &TestServer,
    board_id: &str,
    count: usize,
) -> Vec<WsTestClient> {
    let mut clients = Vec::with_capacity(count);
    for _ in 0..count {
        let mut client = WsTestClient::connect(server).await;
        client.join(board_id).await;
        clients.push(client);
    }
    clients
}
