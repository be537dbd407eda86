//! Two-step move selection.
//!
//! ```text
//! ┌──────┐ begin  ┌─────────────────────┐ reachable cell ┌───────────────────┐
//! │ Idle │───────>│ AwaitingDestination │───────────────>│ DestinationChosen │
//! └──────┘        └─────────────────────┘                └───────────────────┘
//!    ^                                                     │  │ other reachable
//!    │                    wall direction (action sent)     │  │ cell: re-choose
//!    └─────────────────────────────────────────────────────┘<─┘
//! ```
//!
//! Clicks outside the reachable set, re-clicks on the chosen cell and wall
//! clicks on a walled edge are no-ops. They are normal races between UI
//! latency and user input, so they are never reported as errors.

use std::collections::BTreeSet;

use wallgame_proto::{Position, WallDirection, payloads::client::PlayerAction};

use crate::GridState;

/// Phase of the selection cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Not our turn, or the action was already sent.
    #[default]
    Idle,
    /// Waiting for a reachable cell to be clicked.
    AwaitingDestination,
    /// Destination picked; waiting for a wall direction.
    DestinationChosen,
}

/// Selection state owned by the [`MoveSelector`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    phase: SelectionPhase,
    reachable: BTreeSet<Position>,
    chosen: Option<Position>,
    wall_options: Vec<WallDirection>,
    current_pos: Option<Position>,
}

impl SelectionState {
    /// Current phase.
    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// Legal destinations. Empty while idle.
    pub fn reachable(&self) -> &BTreeSet<Position> {
        &self.reachable
    }

    /// True if `pos` is a legal destination right now.
    pub fn is_reachable(&self, pos: Position) -> bool {
        self.phase != SelectionPhase::Idle && self.reachable.contains(&pos)
    }

    /// Chosen destination. Always a member of [`Self::reachable`].
    pub fn chosen(&self) -> Option<Position> {
        self.chosen
    }

    /// Wall directions offered on the chosen cell.
    pub fn wall_options(&self) -> &[WallDirection] {
        &self.wall_options
    }

    /// Cell of the local player, as last supplied by the controller.
    pub fn current_pos(&self) -> Option<Position> {
        self.current_pos
    }
}

/// Outcome of a cell click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClick {
    /// The click changed nothing.
    Ignored,
    /// The cell became the chosen destination.
    Chosen,
}

/// Local state machine that turns clicks into one outbound action.
#[derive(Debug, Clone, Default)]
pub struct MoveSelector {
    state: SelectionState,
}

impl MoveSelector {
    /// Idle selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection state, for rendering.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Start a selection cycle with a fresh reachable set.
    ///
    /// Any previous destination and its affordances are discarded, whatever
    /// the prior phase. An empty set leaves the selector waiting until the
    /// next prompt.
    pub fn begin(&mut self, reachable: impl IntoIterator<Item = Position>) {
        self.state.phase = SelectionPhase::AwaitingDestination;
        self.state.reachable = reachable.into_iter().collect();
        self.state.chosen = None;
        self.state.wall_options.clear();
    }

    /// Update the local player's cell.
    pub fn set_current_pos(&mut self, pos: Option<Position>) {
        self.state.current_pos = pos;
    }

    /// Drop any selection in progress and go idle.
    pub fn reset(&mut self) {
        self.state.phase = SelectionPhase::Idle;
        self.state.reachable.clear();
        self.state.chosen = None;
        self.state.wall_options.clear();
    }

    /// Handle a click on a board cell.
    pub fn click_cell(&mut self, pos: Position, grid: &GridState) -> CellClick {
        if self.state.phase == SelectionPhase::Idle || !self.state.reachable.contains(&pos) {
            return CellClick::Ignored;
        }
        if self.state.chosen == Some(pos) {
            return CellClick::Ignored;
        }

        self.state.chosen = Some(pos);
        self.state.wall_options = grid.walls_at(pos).open_directions();
        self.state.phase = SelectionPhase::DestinationChosen;
        CellClick::Chosen
    }

    /// Handle a click on a wall affordance.
    ///
    /// Returns the action to send. The selector goes idle once an action is
    /// produced and ignores further clicks until the next [`Self::begin`].
    pub fn click_wall(&mut self, dir: WallDirection) -> Option<PlayerAction> {
        if self.state.phase != SelectionPhase::DestinationChosen
            || !self.state.wall_options.contains(&dir)
        {
            return None;
        }
        let chosen = self.state.chosen?;
        let Some(current) = self.state.current_pos else {
            tracing::warn!(%chosen, "local position unknown, holding wall selection");
            return None;
        };

        let action = PlayerAction { motions: chosen.motion_from(current), wall_dir: dir };
        self.reset();
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use wallgame_proto::Motion;

    use super::*;

    fn selector_at(current: Position, reachable: &[Position]) -> MoveSelector {
        let mut selector = MoveSelector::new();
        selector.set_current_pos(Some(current));
        selector.begin(reachable.iter().copied());
        selector
    }

    #[test]
    fn click_outside_reachable_is_noop() {
        let grid = GridState::new(5);
        let mut selector = selector_at(Position::new(0, 0), &[Position::new(1, 0)]);
        let before = selector.state().clone();

        assert_eq!(selector.click_cell(Position::new(3, 3), &grid), CellClick::Ignored);
        assert_eq!(selector.state(), &before);
    }

    #[test]
    fn reclick_on_chosen_cell_is_idempotent() {
        let grid = GridState::new(5);
        let mut selector = selector_at(Position::new(0, 0), &[Position::new(1, 1)]);

        assert_eq!(selector.click_cell(Position::new(1, 1), &grid), CellClick::Chosen);
        let after_first = selector.state().clone();
        assert_eq!(selector.click_cell(Position::new(1, 1), &grid), CellClick::Ignored);

        assert_eq!(selector.state(), &after_first);
        assert_eq!(selector.state().wall_options().len(), 4);
    }

    #[test]
    fn choosing_another_cell_replaces_affordances() {
        let grid = GridState::new(5);
        let mut selector =
            selector_at(Position::new(2, 2), &[Position::new(0, 0), Position::new(2, 2)]);

        selector.click_cell(Position::new(2, 2), &grid);
        selector.click_cell(Position::new(0, 0), &grid);

        assert_eq!(selector.state().chosen(), Some(Position::new(0, 0)));
        assert_eq!(selector.state().wall_options(), &[WallDirection::Right, WallDirection::Bottom]);
    }

    #[test]
    fn wall_click_sends_relative_motion_and_goes_idle() {
        let grid = GridState::new(5);
        let mut selector = selector_at(Position::new(3, 4), &[Position::new(1, 2)]);
        selector.click_cell(Position::new(1, 2), &grid);

        let action = selector.click_wall(WallDirection::Top).unwrap();
        assert_eq!(action.motions, Motion { d_row: -2, d_col: -2 });
        assert_eq!(action.wall_dir, WallDirection::Top);
        assert_eq!(selector.state().phase(), SelectionPhase::Idle);
        assert!(selector.state().reachable().is_empty());

        // Further clicks are ignored until the next prompt
        assert_eq!(selector.click_cell(Position::new(1, 2), &grid), CellClick::Ignored);
        assert_eq!(selector.click_wall(WallDirection::Top), None);
    }

    #[test]
    fn wall_click_on_walled_edge_is_noop() {
        let grid = GridState::new(5);
        let mut selector = selector_at(Position::new(1, 0), &[Position::new(0, 0)]);
        selector.click_cell(Position::new(0, 0), &grid);

        assert_eq!(selector.click_wall(WallDirection::Left), None);
        assert_eq!(selector.state().phase(), SelectionPhase::DestinationChosen);
    }

    #[test]
    fn empty_reachable_set_waits() {
        let grid = GridState::new(3);
        let mut selector = selector_at(Position::new(0, 0), &[]);

        assert_eq!(selector.click_cell(Position::new(0, 0), &grid), CellClick::Ignored);
        assert_eq!(selector.state().phase(), SelectionPhase::AwaitingDestination);
    }

    #[test]
    fn unknown_position_holds_selection() {
        let grid = GridState::new(3);
        let mut selector = MoveSelector::new();
        selector.begin([Position::new(1, 1)]);
        selector.click_cell(Position::new(1, 1), &grid);

        assert_eq!(selector.click_wall(WallDirection::Top), None);
        assert_eq!(selector.state().phase(), SelectionPhase::DestinationChosen);
    }
}
