//! One-shot restart vote.

use wallgame_proto::{ClientMessage, payloads::client::RestartAnswer};

/// Restart vote opened by `game_over`.
///
/// The latch is set before the answer leaves, so a second click never
/// produces a second message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestartVote {
    submitted: Option<bool>,
}

impl RestartVote {
    /// Vote waiting for an answer.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the user may still answer.
    pub fn is_pending(&self) -> bool {
        self.submitted.is_none()
    }

    /// Answer already sent, if any.
    pub fn submitted(&self) -> Option<bool> {
        self.submitted
    }

    /// Record the answer. Returns the message to send on the first call only.
    pub fn submit(&mut self, agree: bool) -> Option<ClientMessage> {
        if self.submitted.is_some() {
            return None;
        }
        self.submitted = Some(agree);
        Some(ClientMessage::Vote(RestartAnswer { agree }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_answer_is_dropped() {
        let mut vote = RestartVote::new();
        assert_eq!(vote.submit(true), Some(ClientMessage::Vote(RestartAnswer { agree: true })));
        assert_eq!(vote.submit(true), None);
        assert_eq!(vote.submit(false), None);
        assert_eq!(vote.submitted(), Some(true));
        assert!(!vote.is_pending());
    }
}
