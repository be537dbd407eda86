//! Final standings.
//!
//! The server sends scores already sorted in descending order. Ranks are
//! derived here and never stored on the wire: equal scores share the better
//! rank, and the next distinct score resumes at its positional rank
//! (`[10, 10, 7]` ranks as `[1, 1, 3]`).

use std::fmt;

use wallgame_proto::PlayerId;

/// Score reported for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Symbol of the player.
    pub player: PlayerId,
    /// Final score.
    pub score: i64,
}

impl From<(PlayerId, i64)> for ScoreEntry {
    fn from((player, score): (PlayerId, i64)) -> Self {
        Self { player, score }
    }
}

/// Score entry with its derived rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedScore {
    /// One-based rank.
    pub rank: usize,
    /// Symbol of the player.
    pub player: PlayerId,
    /// Final score.
    pub score: i64,
}

impl RankedScore {
    /// True for the winner(s).
    pub fn is_first(&self) -> bool {
        self.rank == 1
    }
}

impl fmt::Display for RankedScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} {}", self.rank, self.player, self.score)
    }
}

/// Assign tied ranks to a score-descending list, keeping server order.
pub fn rank(entries: impl IntoIterator<Item = ScoreEntry>) -> Vec<RankedScore> {
    let mut ranked: Vec<RankedScore> = Vec::new();
    for (i, entry) in entries.into_iter().enumerate() {
        let rank = match ranked.last() {
            Some(prev) if prev.score == entry.score => prev.rank,
            _ => i + 1,
        };
        ranked.push(RankedScore { rank, player: entry.player, score: entry.score });
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(scores: &[i64]) -> Vec<usize> {
        let entries = scores.iter().enumerate().map(|(i, &score)| ScoreEntry {
            player: format!("p{i}"),
            score,
        });
        rank(entries).into_iter().map(|r| r.rank).collect()
    }

    #[test]
    fn ties_share_the_better_rank() {
        assert_eq!(ranks(&[10, 10, 7]), vec![1, 1, 3]);
        assert_eq!(ranks(&[9, 5, 5, 5, 1]), vec![1, 2, 2, 2, 5]);
    }

    #[test]
    fn empty_list_has_no_ranks() {
        assert!(ranks(&[]).is_empty());
    }

    #[test]
    fn display_matches_log_format() {
        let ranked = rank([ScoreEntry::from(("甲".to_string(), 12))]);
        assert_eq!(ranked[0].to_string(), "1. 甲 12");
        assert!(ranked[0].is_first());
    }
}
