use crate::{BoardId, Channel, CoreError, MAX_BOARD_ID_LENGTH};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

#[test]
fn given_board_id_when_parsed_then_ok() {
    assert_that!(BoardId::parse("5f1a2b3c4d"), ok(anything()));

    let board_id = BoardId::parse("5f1a2b3c4d").unwrap();
    assert_eq!(board_id.as_str(), "5f1a2b3c4d");
}

#[test]
fn given_empty_board_id_when_parsed_then_error() {
    assert_that!(BoardId::parse(""), err(anything()));
}

#[test]
fn given_whitespace_board_id_when_parsed_then_error() {
    let result = BoardId::parse("   ");

    assert!(matches!(result, Err(CoreError::InvalidBoardId { .. })));
}

#[test]
fn given_board_id_at_max_length_when_parsed_then_ok() {
    let id = "b".repeat(MAX_BOARD_ID_LENGTH);
    assert_that!(BoardId::parse(id), ok(anything()));
}

#[test]
fn given_board_id_over_max_length_when_parsed_then_error() {
    let id = "b".repeat(MAX_BOARD_ID_LENGTH + 1);
    assert_that!(BoardId::parse(id), err(anything()));
}

#[test]
fn given_board_id_when_channel_derived_then_prefixed_with_board() {
    let channel = Channel::for_board(BoardId::parse("B1").unwrap());

    assert_that!(channel.to_string().as_str(), eq("board-B1"));
    assert_eq!(channel.board_id().as_str(), "B1");
}

#[test]
fn given_same_board_when_channels_derived_then_equal() {
    let a = Channel::from(BoardId::parse("B1").unwrap());
    let b = Channel::from(BoardId::parse("B1").unwrap());
    let c = Channel::from(BoardId::parse("B2").unwrap());

    assert_eq!(a, b);
    assert_ne!(a, c);
}
