//! Fuzz target for the room controller
//!
//! Drives an App with arbitrary interleavings of server events, connection
//! events and clicks, then checks the invariants that must hold after every
//! step:
//! - The chosen destination is always a reachable cell
//! - Wall affordances are only offered on a chosen destination
//! - At most one action is sent per `ask_player_action`
//! - At most one restart vote is sent per `game_over`

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wallgame_app::{App, AppAction, AppEvent, Position, RoomConfig, RoomStatus, WallDirection};
use wallgame_proto::{
    ClientMessage, Occupant, ServerMessage, WallMatrix,
    payloads::server::{AskPlayerAction, GameMap, GameOver, Joined, Reconnected},
};

const SIZE: usize = 5;

#[derive(Debug, Arbitrary)]
enum Op {
    Joined,
    GameStart,
    Map { walls: Vec<bool>, row: u8, col: u8 },
    Ask { points: Vec<(u8, u8)> },
    GameOver { scores: Vec<i8> },
    AskRestarting,
    Reconnected { row: u8, col: u8, status: u8 },
    Disconnected,
    Cell { row: u8, col: u8 },
    Wall(u8),
    Vote(bool),
}

fn pos(row: u8, col: u8) -> Position {
    // One step past the edge exercises out-of-range handling
    Position::new(usize::from(row) % (SIZE + 1), usize::from(col) % (SIZE + 1))
}

fn matrix(walls: &[bool], rows: usize, cols: usize) -> WallMatrix {
    let mut bits = walls.iter().copied().cycle();
    let rows = (0..rows).map(|_| (0..cols).map(|_| bits.next().unwrap_or(false)).collect());
    WallMatrix::from_rows(rows.collect())
}

fn to_event(op: Op) -> AppEvent {
    let server = |message| AppEvent::Server(message);
    match op {
        Op::Joined => server(ServerMessage::Joined(Joined { player: "A".into(), successful: None })),
        Op::GameStart => server(ServerMessage::GameStart),
        Op::Map { walls, row, col } => server(ServerMessage::UpdateGameMap(GameMap {
            wall_top: matrix(&walls, SIZE + 1, SIZE),
            wall_left: matrix(&walls, SIZE, SIZE + 1),
            players_info: vec![Occupant { pos: pos(row, col), player: "A".into() }],
        })),
        Op::Ask { points } => server(ServerMessage::AskPlayerAction(AskPlayerAction {
            reachable_points: points.into_iter().map(|(r, c)| pos(r, c)).collect(),
            message: None,
        })),
        Op::GameOver { scores } => {
            let mut scores: Vec<i64> = scores.into_iter().map(i64::from).collect();
            scores.sort_unstable_by(|a, b| b.cmp(a));
            let result = scores.into_iter().enumerate().map(|(i, s)| (format!("p{i}"), s));
            server(ServerMessage::GameOver(GameOver { result: result.collect() }))
        },
        Op::AskRestarting => server(ServerMessage::AskRestarting),
        Op::Reconnected { row, col, status } => {
            let status = match status % 4 {
                0 => Some(RoomStatus::Waiting),
                1 => Some(RoomStatus::Running),
                2 => Some(RoomStatus::Finished),
                _ => None,
            };
            server(ServerMessage::Reconnected(Reconnected {
                player: "A".into(),
                pos: pos(row, col),
                status,
            }))
        },
        Op::Disconnected => AppEvent::Disconnected { code: None, intentional: false },
        Op::Cell { row, col } => AppEvent::CellClicked(pos(row, col)),
        Op::Wall(dir) => AppEvent::WallClicked(WallDirection::ALL[usize::from(dir) % 4]),
        Op::Vote(agree) => AppEvent::VoteClicked(agree),
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let config = RoomConfig::with_size(SIZE).unwrap();
    let mut app = App::new("ws://localhost/room/ws/", &config);
    let mut actions_since_ask = 0;
    let mut votes_since_game_over = 0;

    for op in ops {
        let event = to_event(op);
        match &event {
            AppEvent::Server(ServerMessage::AskPlayerAction(_)) => actions_since_ask = 0,
            AppEvent::Server(ServerMessage::GameOver(_)) => votes_since_game_over = 0,
            _ => {},
        }

        for action in app.handle(event) {
            match action {
                AppAction::Send(ClientMessage::Action(_)) => actions_since_ask += 1,
                AppAction::Send(ClientMessage::Vote(_)) => votes_since_game_over += 1,
                _ => {},
            }
        }

        let selection = app.selection();
        if let Some(chosen) = selection.chosen() {
            assert!(selection.reachable().contains(&chosen));
        } else {
            assert!(selection.wall_options().is_empty());
        }
        assert!(actions_since_ask <= 1);
        assert!(votes_since_game_over <= 1);
        assert!(app.board_view().cells().len() == SIZE * SIZE);
    }
});
