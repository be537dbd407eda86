//! Modal dialog presenter.
//!
//! The room controller never draws dialogs itself. It exposes what needs an
//! answer ([`App::restart_prompt`]) and the frontend presents it here. At most
//! one dialog is open at a time; opening another replaces it.

use wallgame_app::App;

/// Button shown at the bottom of a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogButton {
    /// Key that activates the button.
    pub key: char,
    /// Caption.
    pub label: String,
}

impl DialogButton {
    /// Button activated by `key`.
    pub fn new(key: char, label: impl Into<String>) -> Self {
        Self { key, label: label.into() }
    }
}

/// Content of an open dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    /// Title in the frame.
    pub title: String,
    /// Body lines.
    pub content: Vec<String>,
    /// Buttons, left to right.
    pub buttons: Vec<DialogButton>,
}

/// Holds the dialog currently on screen.
#[derive(Debug, Default)]
pub struct DialogPresenter {
    current: Option<Dialog>,
}

impl DialogPresenter {
    /// Presenter with nothing open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a dialog, replacing any open one.
    pub fn open(
        &mut self,
        title: impl Into<String>,
        content: Vec<String>,
        buttons: Vec<DialogButton>,
    ) {
        self.current = Some(Dialog { title: title.into(), content, buttons });
    }

    /// Dismiss the open dialog.
    pub fn close(&mut self) {
        self.current = None;
    }

    /// Dialog on screen, if any.
    pub fn current(&self) -> Option<&Dialog> {
        self.current.as_ref()
    }

    /// Open or close the restart dialog to match the controller.
    pub fn sync(&mut self, app: &App) {
        match (app.restart_prompt().is_some(), self.current.is_some()) {
            (true, false) => {
                let content = app.scoreboard().iter().map(ToString::to_string).collect();
                self.open("Game over", content, vec![
                    DialogButton::new('y', "Play again"),
                    DialogButton::new('n', "End game"),
                ]);
            },
            (false, true) => self.close(),
            _ => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use wallgame_app::{AppEvent, RoomConfig};
    use wallgame_proto::{
        ServerMessage,
        payloads::server::{GameOver, Joined},
    };

    use super::*;

    #[test]
    fn restart_dialog_follows_the_vote() {
        let mut app = App::new("ws://localhost/r/ws/", &RoomConfig::default());
        app.handle(AppEvent::Server(ServerMessage::Joined(Joined {
            player: "A".into(),
            successful: None,
        })));
        app.handle(AppEvent::Server(ServerMessage::GameStart));
        app.handle(AppEvent::Server(ServerMessage::GameOver(GameOver {
            result: vec![("A".into(), 5), ("B".into(), 2)],
        })));

        let mut presenter = DialogPresenter::new();
        presenter.sync(&app);
        let dialog = presenter.current().unwrap();
        assert_eq!(dialog.title, "Game over");
        assert_eq!(dialog.content, vec!["1. A 5".to_string(), "2. B 2".to_string()]);

        app.handle(AppEvent::VoteClicked(true));
        presenter.sync(&app);
        assert!(presenter.current().is_none());
    }
}
