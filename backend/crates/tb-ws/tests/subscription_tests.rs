mod common;

use common::test_client::WsTestClient;
use common::test_server::create_test_server;

use tb_core::BoardId;
use tb_ws::MAX_VIOLATIONS;

use axum_test::WsMessage;
use serde_json::json;

fn board(id: &str) -> BoardId {
    BoardId::parse(id).unwrap()
}

#[tokio::test]
async fn given_client_when_joining_twice_then_single_membership() {
    let test_server = create_test_server();
    let mut client = WsTestClient::connect(&test_server.server).await;

    client.join("B1").await;
    client.join("B1").await;

    let members = test_server.app_state.registry.members_of(&board("B1")).await;
    assert_eq!(members.len(), 1);

    client.close().await;
}

#[tokio::test]
async fn given_member_when_leaving_then_channel_empty() {
    let test_server = create_test_server();
    let mut client = WsTestClient::connect(&test_server.server).await;
    client.join("B1").await;

    client.leave("B1").await;

    assert!(
        test_server
            .app_state
            .registry
            .members_of(&board("B1"))
            .await
            .is_empty()
    );

    client.close().await;
}

#[tokio::test]
async fn given_non_member_when_leaving_then_acknowledged_as_noop() {
    let test_server = create_test_server();
    let mut client = WsTestClient::connect(&test_server.server).await;

    client.leave("never-joined").await;

    assert_eq!(test_server.app_state.registry.channel_count().await, 0);
    client.close().await;
}

#[tokio::test]
async fn given_empty_board_id_when_joining_then_error_frame() {
    let test_server = create_test_server();
    let mut client = WsTestClient::connect(&test_server.server).await;

    client
        .send_json(&json!({ "event": "join-board", "boardId": "" }))
        .await;

    let reply = client.receive_json().await;
    assert_eq!(reply["event"], "error");
    assert_eq!(reply["payload"]["code"], "INVALID_MESSAGE");
    assert_eq!(test_server.app_state.registry.channel_count().await, 0);

    client.close().await;
}

#[tokio::test]
async fn given_unknown_event_when_sent_then_error_frame() {
    let test_server = create_test_server();
    let mut client = WsTestClient::connect(&test_server.server).await;

    client
        .send_json(&json!({ "event": "subscribe", "boardId": "B1" }))
        .await;

    let reply = client.receive_json().await;
    assert_eq!(reply["event"], "error");

    client.close().await;
}

#[tokio::test]
async fn given_repeated_invalid_frames_when_limit_reached_then_connection_closed() {
    let test_server = create_test_server();
    let mut client = WsTestClient::connect(&test_server.server).await;

    for _ in 0..MAX_VIOLATIONS {
        client.send_text("not json").await;
    }

    for _ in 0..MAX_VIOLATIONS {
        let reply = client.receive_json().await;
        assert_eq!(reply["event"], "error");
    }

    let msg = client.receive_message().await;
    assert!(matches!(msg, WsMessage::Close(_)));
}
