//! Decoding tests against frames as the room server actually emits them.
//!
//! The server serializes its own enums and player objects through a custom
//! JSON encoder, so field shapes (tuples for occupants, `msg` instead of
//! `message`, string rows for walls) are checked here explicitly.

use proptest::prelude::*;
use wallgame_proto::{
    Occupant, Position, ProtocolError, RoomStatus, ServerMessage,
    payloads::server::{GameOver, PlayerOut},
};

#[test]
fn update_game_map_from_server() {
    let text = r#"{
        "event": "update_game_map",
        "wall_top": ["111", "000", "010"],
        "wall_left": ["100", "100", "101"],
        "players_info": [[0, 0, "甲"], [2, 2, "乙"]]
    }"#;

    let ServerMessage::UpdateGameMap(map) = ServerMessage::from_json(text).unwrap() else {
        panic!("expected update_game_map");
    };

    assert_eq!(map.wall_top.get(0, 1), Some(true));
    assert_eq!(map.wall_top.get(2, 1), Some(true));
    assert_eq!(map.wall_top.get(3, 0), None, "bottom boundary row is not sent");
    assert_eq!(map.wall_left.get(2, 2), Some(true));
    assert_eq!(map.wall_left.get(0, 3), None, "right boundary column is not sent");
    assert_eq!(map.players_info, vec![
        Occupant { pos: Position::new(0, 0), player: "甲".into() },
        Occupant { pos: Position::new(2, 2), player: "乙".into() },
    ]);
}

#[test]
fn malformed_wall_row_rejects_message() {
    let text = r#"{"event":"update_game_map","wall_top":["0a"],"wall_left":[],"players_info":[]}"#;
    assert!(matches!(ServerMessage::from_json(text), Err(ProtocolError::JsonDecode(_))));
}

#[test]
fn negative_coordinates_reject_message() {
    let text = r#"{"event":"ask_player_action","reachable_points":[[-1,0]]}"#;
    assert!(ServerMessage::from_json(text).is_err());
}

#[test]
fn ask_player_action_accepts_msg_and_message() {
    for key in ["msg", "message"] {
        let text = format!(
            r#"{{"event":"ask_player_action","reachable_points":[],"{key}":"invalid motions"}}"#
        );
        let ServerMessage::AskPlayerAction(ask) = ServerMessage::from_json(&text).unwrap() else {
            panic!("expected ask_player_action");
        };
        assert_eq!(ask.retry_reason(), Some("invalid motions"));
    }
}

#[test]
fn joined_without_success_flag_is_successful() {
    let ServerMessage::Joined(joined) =
        ServerMessage::from_json(r#"{"event":"joined","player":"甲"}"#).unwrap()
    else {
        panic!("expected joined");
    };
    assert!(joined.is_successful());

    let ServerMessage::Joined(refused) =
        ServerMessage::from_json(r#"{"event":"joined","successful":false}"#).unwrap()
    else {
        panic!("expected joined");
    };
    assert!(!refused.is_successful());
}

#[test]
fn reconnected_carries_status() {
    let text = r#"{"event":"reconnected","player":"乙","pos":[3,4],"status":"running"}"#;
    let ServerMessage::Reconnected(info) = ServerMessage::from_json(text).unwrap() else {
        panic!("expected reconnected");
    };
    assert_eq!(info.pos, Position::new(3, 4));
    assert_eq!(info.status, Some(RoomStatus::Running));
}

#[test]
fn game_over_and_player_out_scores() {
    let over = ServerMessage::from_json(
        r#"{"event":"game_over","result":[["甲",10],["乙",10],["丙",7]]}"#,
    )
    .unwrap();
    assert_eq!(
        over,
        ServerMessage::GameOver(GameOver {
            result: vec![("甲".into(), 10), ("乙".into(), 10), ("丙".into(), 7)],
        })
    );

    let out = ServerMessage::from_json(r#"{"event":"player_out","player":"丙","score":7}"#)
        .unwrap();
    assert_eq!(out, ServerMessage::PlayerOut(PlayerOut { player: "丙".into(), score: Some(7) }));
}

proptest! {
    #[test]
    fn decoding_arbitrary_text_never_panics(text in ".{0,256}") {
        let _ = ServerMessage::from_json(&text);
    }

    #[test]
    fn wall_rows_survive_encoding(rows in prop::collection::vec("[01]{0,12}", 0..12)) {
        let matrix = wallgame_proto::WallMatrix::parse(&rows).unwrap();
        prop_assert_eq!(matrix.to_wire_rows(), rows);
    }
}
