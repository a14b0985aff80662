use crate::tests::{board, outbound, registry};
use crate::{ConnectionLimits, ConnectionRegistry, WsError};

use tb_core::Channel;

#[tokio::test]
async fn given_new_connection_when_registered_then_has_no_channels() {
    let registry = registry();
    let (tx, _rx) = outbound(8);

    let id = registry.register(tx).await.unwrap();

    assert_eq!(registry.total_count().await, 1);
    assert!(registry.channels_of(id).await.is_empty());
    assert_eq!(registry.channel_count().await, 0);
}

#[tokio::test]
async fn given_limit_reached_when_registering_then_rejected() {
    let registry = ConnectionRegistry::new(ConnectionLimits { max_total: 1 });
    let (tx1, _rx1) = outbound(8);
    let (tx2, _rx2) = outbound(8);

    registry.register(tx1).await.unwrap();
    let result = registry.register(tx2).await;

    assert!(matches!(
        result,
        Err(WsError::ConnectionLimitExceeded { current: 1, max: 1, .. })
    ));
    assert_eq!(registry.total_count().await, 1);
}

#[tokio::test]
async fn given_client_when_join_twice_then_membership_same_as_once() {
    let registry = registry();
    let (tx, _rx) = outbound(8);
    let id = registry.register(tx).await.unwrap();

    assert!(registry.join(id, &board("B1")).await);
    assert!(!registry.join(id, &board("B1")).await);

    assert_eq!(registry.members_of(&board("B1")).await.len(), 1);
    assert_eq!(registry.channels_of(id).await.len(), 1);
}

#[tokio::test]
async fn given_non_member_when_leave_then_noop() {
    let registry = registry();
    let (tx, _rx) = outbound(8);
    let id = registry.register(tx).await.unwrap();
    registry.join(id, &board("B1")).await;

    assert!(!registry.leave(id, &board("B2")).await);

    assert!(registry.members_of(&board("B1")).await.contains(&id));
    assert!(registry.members_of(&board("B2")).await.is_empty());
}

#[tokio::test]
async fn given_member_when_leave_then_removed_from_both_sides() {
    let registry = registry();
    let (tx, _rx) = outbound(8);
    let id = registry.register(tx).await.unwrap();
    registry.join(id, &board("B1")).await;

    assert!(registry.leave(id, &board("B1")).await);

    assert!(registry.members_of(&board("B1")).await.is_empty());
    assert!(registry.channels_of(id).await.is_empty());
    // Empty channels are pruned
    assert_eq!(registry.channel_count().await, 0);
}

#[tokio::test]
async fn given_clients_on_different_boards_when_members_of_then_isolated() {
    let registry = registry();
    let (tx1, _rx1) = outbound(8);
    let (tx2, _rx2) = outbound(8);
    let first = registry.register(tx1).await.unwrap();
    let second = registry.register(tx2).await.unwrap();

    registry.join(first, &board("B1")).await;
    registry.join(second, &board("B2")).await;

    let b1 = registry.members_of(&board("B1")).await;
    assert!(b1.contains(&first));
    assert!(!b1.contains(&second));
    assert_eq!(registry.senders_for(&board("B2")).await.len(), 1);
}

#[tokio::test]
async fn given_client_in_many_channels_when_unregistered_then_in_zero_channels() {
    let registry = registry();
    let (tx1, _rx1) = outbound(8);
    let (tx2, _rx2) = outbound(8);
    let leaving = registry.register(tx1).await.unwrap();
    let staying = registry.register(tx2).await.unwrap();

    registry.join(leaving, &board("B1")).await;
    registry.join(leaving, &board("B2")).await;
    registry.join(staying, &board("B1")).await;

    let mut removed = registry.unregister(leaving).await;
    removed.sort();

    assert_eq!(
        removed,
        vec![Channel::for_board(board("B1")), Channel::for_board(board("B2"))]
    );
    assert!(!registry.members_of(&board("B1")).await.contains(&leaving));
    assert!(registry.members_of(&board("B2")).await.is_empty());
    assert!(registry.members_of(&board("B1")).await.contains(&staying));
    assert!(registry.get(leaving).await.is_none());
    assert_eq!(registry.total_count().await, 1);
}

#[tokio::test]
async fn given_unregistered_client_when_unregistered_again_then_noop() {
    let registry = registry();
    let (tx, _rx) = outbound(8);
    let id = registry.register(tx).await.unwrap();
    registry.join(id, &board("B1")).await;

    assert_eq!(registry.unregister(id).await.len(), 1);
    assert!(registry.unregister(id).await.is_empty());
    assert_eq!(registry.total_count().await, 0);
}

#[tokio::test]
async fn given_unregistered_client_when_join_then_rejected() {
    let registry = registry();
    let (tx, _rx) = outbound(8);
    let id = registry.register(tx).await.unwrap();
    registry.unregister(id).await;

    assert!(!registry.join(id, &board("B1")).await);
    assert_eq!(registry.channel_count().await, 0);
}
