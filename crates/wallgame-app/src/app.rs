//! Room controller.
//!
//! This module defines the [`App`] state machine, which owns everything a room
//! page knows: session state, the board snapshot, the move selector and the
//! restart vote. It is completely decoupled from I/O.
//!
//! It consumes [`crate::AppEvent`] inputs and produces [`crate::AppAction`]
//! instructions for the runtime to execute.
//!
//! # Room lifecycle
//!
//! ```text
//!  ┌─────────┐ game_start ┌─────────┐ game_over ┌──────────┐
//!  │ Waiting │───────────>│ Running │──────────>│ Finished │
//!  └─────────┘            └─────────┘           └──────────┘
//!                              ^    game_start       │
//!                              └─────────────────────┘
//! ```
//!
//! Connection loss is an overlay over all three states. After a reconnect the
//! server's `reconnected` event is authoritative: local player, position and
//! room status are rebuilt from it, whatever they were before.
//! When it carries no status, the next `ask_player_action` or
//! `ask_restarting` settles the status instead of the cached one.

use wallgame_proto::{
    ClientMessage, Position, RoomStatus, ServerMessage,
    payloads::server::{AskPlayerAction, GameMap, GameOver, Joined, PlayerOut, Reconnected},
};

use crate::{
    AppAction, AppEvent, BoardView, ConnectionState, GridState, MoveSelector, NotificationLog,
    RankedScore, RestartVote, RoomConfig, RoomSession, SelectionState, scoreboard,
    selector::CellClick,
};

/// Shown when the server refuses a seat without an error message.
const ROOM_FULL_MESSAGE: &str = "Failed to join the room, it may be full";

/// Room controller state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Socket URL of the room. The only state trusted across reconnects.
    url: String,
    /// Connection overlay, room status, local player, board size.
    session: RoomSession,
    /// Last board snapshot.
    grid: GridState,
    /// Destination and wall selection for the current turn.
    selector: MoveSelector,
    /// Restart vote. `None` outside the window between `game_over` and the
    /// next `game_start`.
    restart: Option<RestartVote>,
    /// Ranked final scores of the last game.
    scoreboard: Vec<RankedScore>,
    /// Status feed.
    log: NotificationLog,
    /// Reason the session was torn down. `None` while healthy.
    fatal_error: Option<String>,
    /// False after a `reconnected` that carried no status. The cached status
    /// then only stands until a prompt shows which state the room is in.
    status_confirmed: bool,
}

impl App {
    /// Create a controller for the room behind `url`.
    pub fn new(url: impl Into<String>, config: &RoomConfig) -> Self {
        let size = config.size();
        Self {
            url: url.into(),
            session: RoomSession::new(size),
            grid: GridState::with_start_positions(size, config.player_positions()),
            selector: MoveSelector::new(),
            restart: None,
            scoreboard: Vec::new(),
            log: NotificationLog::new(),
            fatal_error: None,
            status_confirmed: true,
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Connecting { attempt } => {
                self.session.connection = if attempt == 0 {
                    ConnectionState::Connecting
                } else {
                    ConnectionState::Reconnecting { attempt }
                };
                vec![AppAction::Render]
            },
            AppEvent::Connected => {
                let was_reconnecting =
                    matches!(self.session.connection, ConnectionState::Reconnecting { .. });
                self.session.connection = ConnectionState::Open;
                if was_reconnecting {
                    self.log.push("Connection restored");
                }
                vec![AppAction::Render]
            },
            AppEvent::Disconnected { code, intentional } => {
                self.session.connection = ConnectionState::Disconnected;
                // An unanswered prompt is re-sent by the server after resync
                self.selector.reset();
                if !intentional {
                    tracing::info!(?code, "connection lost");
                    self.log.push("Connection lost");
                }
                vec![AppAction::Render]
            },
            AppEvent::Reconnecting { attempt, delay } => {
                self.session.connection = ConnectionState::Reconnecting { attempt };
                tracing::debug!(attempt, ?delay, "reconnect scheduled");
                vec![AppAction::Render]
            },
            AppEvent::Terminated => {
                self.session.connection = ConnectionState::Disconnected;
                self.selector.reset();
                self.log.push("The room closed the connection");
                vec![AppAction::Render]
            },
            AppEvent::Server(message) => self.handle_server_message(message),
            AppEvent::CellClicked(pos) => match self.selector.click_cell(pos, &self.grid) {
                CellClick::Chosen => vec![AppAction::Render],
                CellClick::Ignored => {
                    tracing::debug!(%pos, "cell click ignored");
                    vec![]
                },
            },
            AppEvent::WallClicked(dir) => match self.selector.click_wall(dir) {
                Some(action) => vec![AppAction::Send(ClientMessage::Action(action)), AppAction::Render],
                None => {
                    tracing::debug!(%dir, "wall click ignored");
                    vec![]
                },
            },
            AppEvent::VoteClicked(agree) => {
                match self.restart.as_mut().and_then(|vote| vote.submit(agree)) {
                    Some(message) => {
                        self.log.push(if agree {
                            "You voted to play again"
                        } else {
                            "You voted to end the game"
                        });
                        vec![AppAction::Send(message), AppAction::Render]
                    },
                    None => {
                        tracing::debug!(agree, "vote click ignored");
                        vec![]
                    },
                }
            },
            AppEvent::Quit => self.quit(),
        }
    }

    fn handle_server_message(&mut self, message: ServerMessage) -> Vec<AppAction> {
        match message {
            ServerMessage::Error(payload) => self.fail(payload.message),
            ServerMessage::Joined(joined) => self.on_joined(joined),
            ServerMessage::Reconnected(info) => self.on_reconnected(info),
            ServerMessage::NewPlayer(notice) => {
                self.log.push(format!("Player {} joined the room", notice.player));
                vec![AppAction::Render]
            },
            ServerMessage::GameStart => self.on_game_start(),
            ServerMessage::UpdateGameMap(map) => self.on_game_map(map),
            ServerMessage::AskPlayerAction(ask) => self.on_ask_player_action(ask),
            ServerMessage::PlayerOut(out) => self.on_player_out(out),
            ServerMessage::GameOver(over) => self.on_game_over(over),
            ServerMessage::AskRestarting => self.on_ask_restarting(),
            ServerMessage::Unknown => {
                tracing::debug!("ignoring unknown server event");
                vec![]
            },
        }
    }

    fn on_joined(&mut self, joined: Joined) -> Vec<AppAction> {
        if !joined.is_successful() {
            return self.fail(ROOM_FULL_MESSAGE.to_string());
        }
        self.log.push(format!("You joined the room, your symbol is {}", joined.player));
        self.session.local_player = Some(joined.player);
        vec![AppAction::Render]
    }

    fn on_reconnected(&mut self, info: Reconnected) -> Vec<AppAction> {
        let Reconnected { player, pos, status } = info;

        match status {
            Some(status) => {
                self.session.status = status;
                self.status_confirmed = true;
            },
            None => {
                tracing::warn!(
                    status = ?self.session.status,
                    "reconnected without room status, keeping current until the next prompt"
                );
                self.status_confirmed = false;
            },
        }
        if self.session.status != RoomStatus::Finished {
            self.restart = None;
            self.scoreboard.clear();
        }

        self.selector.reset();
        self.selector.set_current_pos(Some(pos));
        self.log.push(format!("Reconnected as {player}"));
        self.session.local_player = Some(player);
        vec![AppAction::Render]
    }

    fn on_game_start(&mut self) -> Vec<AppAction> {
        if self.session.status == RoomStatus::Running {
            tracing::debug!("game_start while running, ignoring");
            return vec![];
        }
        self.grid.clear_walls();
        self.selector.reset();
        self.restart = None;
        self.scoreboard.clear();
        self.session.status = RoomStatus::Running;
        self.status_confirmed = true;
        self.log.push("The game has started");
        vec![AppAction::Render]
    }

    fn on_game_map(&mut self, map: GameMap) -> Vec<AppAction> {
        self.grid = GridState::from_map(self.session.board_size, map);
        let current = self.session.local_player.as_deref().and_then(|p| self.grid.position_of(p));
        if current.is_some() {
            self.selector.set_current_pos(current);
        }
        vec![AppAction::Render]
    }

    fn on_ask_player_action(&mut self, ask: AskPlayerAction) -> Vec<AppAction> {
        if !self.adopt_unconfirmed_status(RoomStatus::Running) {
            tracing::debug!(status = ?self.session.status, "ask_player_action outside a game");
            return vec![];
        }
        match ask.retry_reason() {
            Some(reason) => self.log.push(format!("Invalid action ({reason}), choose again")),
            None => self.log.push("Your turn: choose a destination"),
        }
        self.selector.begin(ask.reachable_points);
        vec![AppAction::Render]
    }

    fn on_player_out(&mut self, out: PlayerOut) -> Vec<AppAction> {
        let score = out.score.map_or_else(String::new, |s| format!(" with score {s}"));
        if self.session.is_local(&out.player) {
            self.log.push(format!("You ({}) are out{score}", out.player));
        } else {
            self.log.push(format!("Player {} is out{score}", out.player));
        }
        vec![AppAction::Render]
    }

    fn on_game_over(&mut self, over: GameOver) -> Vec<AppAction> {
        self.session.status = RoomStatus::Finished;
        self.status_confirmed = true;
        self.selector.reset();
        self.scoreboard = scoreboard::rank(over.result.into_iter().map(Into::into));

        self.log.push("Game over");
        let standings: Vec<String> = self.scoreboard.iter().map(ToString::to_string).collect();
        self.log.push(format!("Ranking:\n{}", standings.join("\n")));

        self.restart = Some(RestartVote::new());
        vec![AppAction::Render]
    }

    fn on_ask_restarting(&mut self) -> Vec<AppAction> {
        if !self.adopt_unconfirmed_status(RoomStatus::Finished) {
            tracing::debug!(status = ?self.session.status, "ask_restarting outside a finished game");
            return vec![];
        }
        match &self.restart {
            Some(vote) if !vote.is_pending() => {
                tracing::debug!("restart vote already sent");
                vec![]
            },
            Some(_) => vec![AppAction::Render],
            None => {
                self.restart = Some(RestartVote::new());
                vec![AppAction::Render]
            },
        }
    }

    /// True if the room is in `implied`, the only status in which the server
    /// sends the prompt being handled.
    ///
    /// A status cached across a status-less `reconnected` is not trusted: the
    /// prompt itself is taken as the server's word and the status follows it.
    fn adopt_unconfirmed_status(&mut self, implied: RoomStatus) -> bool {
        if self.session.status == implied {
            return true;
        }
        if self.status_confirmed {
            return false;
        }

        tracing::info!(
            cached = ?self.session.status,
            status = ?implied,
            "room status taken from prompt"
        );
        self.session.status = implied;
        self.status_confirmed = true;
        match implied {
            RoomStatus::Running => {
                self.restart = None;
                self.scoreboard.clear();
            },
            RoomStatus::Waiting | RoomStatus::Finished => self.selector.reset(),
        }
        true
    }

    /// Tear the session down after a protocol error.
    fn fail(&mut self, message: String) -> Vec<AppAction> {
        tracing::error!(%message, "room session failed");
        self.log.push(format!("Error: {message}"));
        self.selector.reset();
        self.restart = None;
        self.fatal_error = Some(message);
        vec![AppAction::Disconnect, AppAction::Render, AppAction::Quit]
    }

    /// Initiate connection to the room.
    pub fn connect(&mut self) -> Vec<AppAction> {
        self.session.connection = ConnectionState::Connecting;
        self.log.push("Waiting for players");
        vec![AppAction::Connect { url: self.url.clone() }, AppAction::Render]
    }

    /// Leave the room.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Disconnect, AppAction::Quit]
    }

    /// Socket URL of the room.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Session state.
    pub fn session(&self) -> &RoomSession {
        &self.session
    }

    /// Current connection state.
    pub fn connection_state(&self) -> ConnectionState {
        self.session.connection
    }

    /// Current room status.
    pub fn room_status(&self) -> RoomStatus {
        self.session.status
    }

    /// Grid dimension of the room.
    pub fn board_size(&self) -> usize {
        self.session.board_size
    }

    /// Symbol of the local player. `None` until joined.
    pub fn local_player(&self) -> Option<&str> {
        self.session.local_player.as_deref()
    }

    /// Cell of the local player, as last reported by the server.
    pub fn current_position(&self) -> Option<Position> {
        self.selector.state().current_pos()
    }

    /// Last board snapshot.
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Selection state of the current turn.
    pub fn selection(&self) -> &SelectionState {
        self.selector.state()
    }

    /// Rendered board.
    pub fn board_view(&self) -> BoardView {
        BoardView::project(&self.grid, self.selector.state())
    }

    /// Restart vote waiting for an answer. `None` when no prompt is open.
    pub fn restart_prompt(&self) -> Option<&RestartVote> {
        self.restart.as_ref().filter(|vote| vote.is_pending())
    }

    /// Ranked scores of the last finished game.
    pub fn scoreboard(&self) -> &[RankedScore] {
        &self.scoreboard
    }

    /// Status feed.
    pub fn log(&self) -> &NotificationLog {
        &self.log
    }

    /// Reason the session was torn down. `None` while healthy.
    pub fn fatal_error(&self) -> Option<&str> {
        self.fatal_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use wallgame_proto::{
        WallDirection, WallMatrix,
        payloads::server::{ErrorPayload, PlayerNotice},
    };

    use super::*;
    use crate::SelectionPhase;

    fn running_app(player: &str) -> App {
        let config = RoomConfig::with_size(5).unwrap();
        let mut app = App::new("ws://localhost/room/ws/", &config);
        let _ = app.connect();
        let _ = app.handle(AppEvent::Connected);
        let _ = app.handle(AppEvent::Server(ServerMessage::Joined(Joined {
            player: player.into(),
            successful: None,
        })));
        let _ = app.handle(AppEvent::Server(ServerMessage::GameStart));
        app
    }

    fn ask(points: &[(usize, usize)]) -> AppEvent {
        AppEvent::Server(ServerMessage::AskPlayerAction(AskPlayerAction {
            reachable_points: points.iter().map(|&(r, c)| Position::new(r, c)).collect(),
            message: None,
        }))
    }

    fn map_with(players: &[(usize, usize, &str)]) -> AppEvent {
        AppEvent::Server(ServerMessage::UpdateGameMap(GameMap {
            wall_top: WallMatrix::empty(5, 5),
            wall_left: WallMatrix::empty(5, 5),
            players_info: players.iter().map(|&(r, c, p)| (r, c, p.to_string()).into()).collect(),
        }))
    }

    #[test]
    fn api_connect() {
        let mut app = App::new("ws://host/r/ws/", &RoomConfig::default());
        let actions = app.connect();

        assert!(matches!(actions.as_slice(), [AppAction::Connect { .. }, AppAction::Render]));
        assert_eq!(app.connection_state(), ConnectionState::Connecting);
    }

    #[test]
    fn api_quit_disconnects_first() {
        let app = running_app("A");
        assert_eq!(app.quit(), vec![AppAction::Disconnect, AppAction::Quit]);
    }

    #[test]
    fn joined_binds_local_player() {
        let app = running_app("甲");
        assert_eq!(app.local_player(), Some("甲"));
        assert_eq!(app.room_status(), RoomStatus::Running);
    }

    #[test]
    fn refused_join_is_fatal() {
        let mut app = App::new("ws://host/r/ws/", &RoomConfig::default());
        let actions = app.handle(AppEvent::Server(ServerMessage::Joined(Joined {
            player: String::new(),
            successful: Some(false),
        })));

        assert_eq!(actions.last(), Some(&AppAction::Quit));
        assert_eq!(app.fatal_error(), Some(ROOM_FULL_MESSAGE));
    }

    #[test]
    fn error_event_tears_session_down() {
        let mut app = running_app("A");
        let actions = app.handle(AppEvent::Server(ServerMessage::Error(ErrorPayload {
            message: "already in room".into(),
        })));

        assert_eq!(actions, vec![AppAction::Disconnect, AppAction::Render, AppAction::Quit]);
        assert_eq!(app.fatal_error(), Some("already in room"));
    }

    #[test]
    fn game_map_tracks_local_position() {
        let mut app = running_app("B");
        let _ = app.handle(map_with(&[(0, 0, "A"), (3, 4, "B")]));
        assert_eq!(app.current_position(), Some(Position::new(3, 4)));
    }

    #[test]
    fn ask_outside_running_is_ignored() {
        let mut app = App::new("ws://host/r/ws/", &RoomConfig::default());
        let actions = app.handle(ask(&[(0, 1)]));
        assert!(actions.is_empty());
        assert_eq!(app.selection().phase(), SelectionPhase::Idle);
    }

    #[test]
    fn game_start_while_running_is_ignored() {
        let mut app = running_app("A");
        assert!(app.handle(AppEvent::Server(ServerMessage::GameStart)).is_empty());
    }

    #[test]
    fn player_out_distinguishes_local_player() {
        let mut app = running_app("A");
        let _ = app.handle(AppEvent::Server(ServerMessage::PlayerOut(PlayerOut {
            player: "A".into(),
            score: Some(4),
        })));
        assert_eq!(app.log().last(), Some("You (A) are out with score 4"));

        let _ = app.handle(AppEvent::Server(ServerMessage::PlayerOut(PlayerOut {
            player: "B".into(),
            score: None,
        })));
        assert_eq!(app.log().last(), Some("Player B is out"));
    }

    #[test]
    fn new_player_and_unknown_change_no_state() {
        let mut app = running_app("A");
        let before = (app.session().clone(), app.selection().clone());

        let _ = app.handle(AppEvent::Server(ServerMessage::NewPlayer(PlayerNotice {
            player: "B".into(),
        })));
        assert!(app.handle(AppEvent::Server(ServerMessage::Unknown)).is_empty());

        assert_eq!((app.session().clone(), app.selection().clone()), before);
    }

    #[test]
    fn abnormal_close_clears_selection() {
        let mut app = running_app("A");
        let _ = app.handle(map_with(&[(2, 2, "A")]));
        let _ = app.handle(ask(&[(2, 3)]));
        let _ = app.handle(AppEvent::CellClicked(Position::new(2, 3)));

        let _ = app.handle(AppEvent::Disconnected { code: None, intentional: false });

        assert_eq!(app.connection_state(), ConnectionState::Disconnected);
        assert_eq!(app.selection().phase(), SelectionPhase::Idle);
        assert!(app.handle(AppEvent::WallClicked(WallDirection::Top)).is_empty());
    }

    #[test]
    fn intentional_close_clears_selection_quietly() {
        let mut app = running_app("A");
        let _ = app.handle(map_with(&[(2, 2, "A")]));
        let _ = app.handle(ask(&[(2, 3)]));
        let _ = app.handle(AppEvent::CellClicked(Position::new(2, 3)));
        let lines_before = app.log().len();

        let _ = app.handle(AppEvent::Disconnected { code: Some(1000), intentional: true });

        assert_eq!(app.connection_state(), ConnectionState::Disconnected);
        assert_eq!(app.log().len(), lines_before);
        assert_eq!(app.selection().phase(), SelectionPhase::Idle);
        assert!(app.selection().chosen().is_none());
        assert_eq!(app.room_status(), RoomStatus::Running);
        assert_eq!(app.grid().position_of("A"), Some(Position::new(2, 2)));
    }

    #[test]
    fn terminated_session_keeps_room_on_screen() {
        let mut app = running_app("A");
        let _ = app.handle(map_with(&[(2, 2, "A")]));
        let _ = app.handle(AppEvent::Server(ServerMessage::GameOver(GameOver {
            result: vec![("A".into(), 3), ("B".into(), 1)],
        })));

        let actions = app.handle(AppEvent::Terminated);

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.connection_state(), ConnectionState::Disconnected);
        assert_eq!(app.selection().phase(), SelectionPhase::Idle);
        assert!(!app.log().lines().iter().any(|line| line == "Connection lost"));
        assert_eq!(app.log().last(), Some("The room closed the connection"));
        assert_eq!(app.room_status(), RoomStatus::Finished);
        assert_eq!(app.scoreboard().len(), 2);
        assert_eq!(app.grid().position_of("A"), Some(Position::new(2, 2)));
        assert!(app.fatal_error().is_none());
    }

    #[test]
    fn reconnect_into_running_game_drops_old_scoreboard() {
        let mut app = running_app("A");
        let _ = app.handle(AppEvent::Server(ServerMessage::GameOver(GameOver {
            result: vec![("A".into(), 3), ("B".into(), 1)],
        })));
        let _ = app.handle(AppEvent::Disconnected { code: None, intentional: false });

        let _ = app.handle(AppEvent::Server(ServerMessage::Reconnected(Reconnected {
            player: "A".into(),
            pos: Position::new(1, 1),
            status: Some(RoomStatus::Running),
        })));

        assert!(app.restart_prompt().is_none());
        assert!(app.scoreboard().is_empty());
    }

    #[test]
    fn statusless_reconnect_takes_status_from_restart_prompt() {
        let mut app = running_app("A");
        let _ = app.handle(AppEvent::Disconnected { code: None, intentional: false });
        let _ = app.handle(AppEvent::Server(ServerMessage::Reconnected(Reconnected {
            player: "A".into(),
            pos: Position::new(1, 1),
            status: None,
        })));
        assert_eq!(app.room_status(), RoomStatus::Running);

        let _ = app.handle(AppEvent::Server(ServerMessage::AskRestarting));

        assert_eq!(app.room_status(), RoomStatus::Finished);
        assert!(app.restart_prompt().is_some());
    }

    #[test]
    fn confirmed_status_still_gates_prompts() {
        let mut app = running_app("A");
        let _ = app.handle(AppEvent::Server(ServerMessage::Reconnected(Reconnected {
            player: "A".into(),
            pos: Position::new(1, 1),
            status: Some(RoomStatus::Waiting),
        })));

        assert!(app.handle(ask(&[(1, 2)])).is_empty());
        assert_eq!(app.room_status(), RoomStatus::Waiting);
        assert_eq!(app.selection().phase(), SelectionPhase::Idle);
    }

    #[test]
    fn reconnect_attempts_show_overlay() {
        let mut app = running_app("A");
        let _ = app.handle(AppEvent::Disconnected { code: Some(1006), intentional: false });
        let _ = app.handle(AppEvent::Reconnecting {
            attempt: 1,
            delay: std::time::Duration::from_millis(250),
        });
        assert_eq!(app.connection_state(), ConnectionState::Reconnecting { attempt: 1 });

        let _ = app.handle(AppEvent::Connected);
        assert_eq!(app.connection_state(), ConnectionState::Open);
        assert_eq!(app.log().last(), Some("Connection restored"));
    }

    #[test]
    fn ask_restarting_reopens_only_pending_vote() {
        let mut app = running_app("A");
        let _ = app.handle(AppEvent::Server(ServerMessage::GameOver(GameOver {
            result: vec![("A".into(), 3), ("B".into(), 1)],
        })));
        assert!(app.restart_prompt().is_some());

        let _ = app.handle(AppEvent::VoteClicked(false));
        assert!(app.restart_prompt().is_none());
        assert!(app.handle(AppEvent::Server(ServerMessage::AskRestarting)).is_empty());
    }

    #[test]
    fn ask_restarting_opens_missing_vote() {
        let mut app = running_app("A");
        let _ = app.handle(AppEvent::Server(ServerMessage::GameOver(GameOver { result: vec![] })));
        let _ = app.handle(AppEvent::Server(ServerMessage::Reconnected(Reconnected {
            player: "A".into(),
            pos: Position::new(0, 0),
            status: Some(RoomStatus::Finished),
        })));
        assert!(app.restart_prompt().is_some());

        app.restart = None;
        let _ = app.handle(AppEvent::Server(ServerMessage::AskRestarting));
        assert!(app.restart_prompt().is_some());
    }

    #[test]
    fn game_start_after_finish_resets_room() {
        let mut app = running_app("A");
        let _ = app.handle(AppEvent::Server(ServerMessage::GameOver(GameOver {
            result: vec![("A".into(), 3)],
        })));
        let _ = app.handle(AppEvent::VoteClicked(true));

        let _ = app.handle(AppEvent::Server(ServerMessage::GameStart));

        assert_eq!(app.room_status(), RoomStatus::Running);
        assert!(app.restart_prompt().is_none());
        assert!(app.scoreboard().is_empty());
        assert!(app.handle(AppEvent::VoteClicked(true)).is_empty());
    }
}
