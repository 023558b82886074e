//! Race board: camel stacks, markers and the movement rule.
//!
//! ## Stacking
//!
//! Camels sharing a cell form a stack with heights `0..n`. Moving a camel
//! carries every camel above it; the carried group lands on top of whatever
//! already sits on the destination cell, keeping its internal order.
//!
//! ## Markers
//!
//! A camel landing exactly on a marker bumps the marker's trigger counter and
//! is pushed one cell in the marker's direction. Markers are never adjacent,
//! so a push can't land on a second marker.
//!
//! ## Copies
//!
//! Both maps are `im` persistent maps, so `clone()` is O(1) and every trial
//! can take its own copy of the starting board without sharing mutations.

use im::OrdMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::competitor::{Colour, Competitor};
use super::marker::{Direction, Marker};

/// Result of a single `apply_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// The camel whose die was rolled.
    pub colour: Colour,
    pub roll: i32,
    pub from: i32,
    /// Final cell, after any marker push.
    pub to: i32,
    /// Every camel that moved, bottom first (includes `colour`).
    pub carried: SmallVec<[Colour; 5]>,
    /// Cell of the marker that was landed on, if any.
    pub triggered: Option<i32>,
}

/// Camel positions and markers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    competitors: OrdMap<Colour, Competitor>,
    markers: OrdMap<i32, Marker>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Construction ===

    /// Place a marker with a zeroed trigger counter.
    ///
    /// The caller keeps markers apart and off occupied cells.
    pub fn add_marker(&mut self, position: i32, direction: Direction) {
        self.markers.insert(position, Marker::new(position, direction));
    }

    /// Place a camel on top of the stack at `position`.
    pub fn add_competitor(&mut self, colour: Colour, position: i32, movable: bool) {
        let height = self.top_height(position, |_| true).map_or(0, |h| h + 1);
        self.set_competitor(colour, position, height, movable);
    }

    /// Record a camel verbatim, replacing any previous record for `colour`.
    pub fn set_competitor(&mut self, colour: Colour, position: i32, height: u32, movable: bool) {
        self.competitors
            .insert(colour, Competitor::new(colour, position, height, movable));
    }

    // === Queries ===

    /// Get a camel by colour.
    #[must_use]
    pub fn competitor(&self, colour: Colour) -> Option<&Competitor> {
        self.competitors.get(&colour)
    }

    /// Iterate camels in colour order.
    pub fn competitors(&self) -> impl Iterator<Item = &Competitor> {
        self.competitors.values()
    }

    /// Number of camels on the board.
    #[must_use]
    pub fn competitor_count(&self) -> usize {
        self.competitors.len()
    }

    /// Get the marker on a cell.
    #[must_use]
    pub fn marker(&self, position: i32) -> Option<&Marker> {
        self.markers.get(&position)
    }

    /// Iterate markers by cell.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    /// Colours whose move is still unresolved.
    #[must_use]
    pub fn movable_colours(&self) -> SmallVec<[Colour; 5]> {
        self.competitors
            .values()
            .filter(|c| c.movable)
            .map(|c| c.colour)
            .collect()
    }

    /// Number of camels on `position`.
    #[must_use]
    pub fn stack_size(&self, position: i32) -> usize {
        self.competitors
            .values()
            .filter(|c| c.position == position)
            .count()
    }

    /// Camels on `position`, bottom first.
    #[must_use]
    pub fn stack(&self, position: i32) -> SmallVec<[Competitor; 5]> {
        let mut stack: SmallVec<[Competitor; 5]> = self
            .competitors
            .values()
            .filter(|c| c.position == position)
            .copied()
            .collect();
        stack.sort_by_key(|c| c.height);
        stack
    }

    /// Cells that hold at least one camel, ascending.
    #[must_use]
    pub fn occupied_cells(&self) -> SmallVec<[i32; 5]> {
        let mut cells: SmallVec<[i32; 5]> = self.competitors.values().map(|c| c.position).collect();
        cells.sort_unstable();
        cells.dedup();
        cells
    }

    /// The camel furthest along the track, skipping `excluding`.
    ///
    /// Camels on the same cell are ranked by height. Returns `None` when no
    /// camel is left to rank.
    #[must_use]
    pub fn leader(&self, excluding: Option<Colour>) -> Option<Colour> {
        self.competitors
            .values()
            .filter(|c| Some(c.colour) != excluding)
            .max_by_key(|c| c.standing())
            .map(|c| c.colour)
    }

    /// The second camel in the race.
    #[must_use]
    pub fn runner_up(&self) -> Option<Colour> {
        let leader = self.leader(None)?;
        self.leader(Some(leader))
    }

    /// Cells where a marker could still be placed.
    ///
    /// Candidates run from one past the rearmost camel up to (but excluding)
    /// the frontmost camel's cell plus `max_reach`. Cells holding a camel or a
    /// marker, and cells next to a marker, are skipped.
    #[must_use]
    pub fn legal_marker_positions(&self, max_reach: i32) -> Vec<i32> {
        let Some(lowest) = self.competitors.values().map(|c| c.position + 1).min() else {
            return Vec::new();
        };
        let highest = self
            .competitors
            .values()
            .map(|c| c.position + max_reach)
            .max()
            .unwrap_or(lowest);

        let occupied: FxHashSet<i32> = self.competitors.values().map(|c| c.position).collect();

        (lowest..highest)
            .filter(|cell| !occupied.contains(cell))
            .filter(|cell| !(cell - 1..=cell + 1).any(|near| self.markers.contains_key(&near)))
            .collect()
    }

    /// Whether every stack has heights `0..n` with no gaps or repeats.
    #[must_use]
    pub fn stacks_contiguous(&self) -> bool {
        self.occupied_cells().into_iter().all(|cell| {
            self.stack(cell)
                .iter()
                .enumerate()
                .all(|(expected, c)| c.height == expected as u32)
        })
    }

    // === Movement ===

    /// Move `colour` by `roll` cells, carrying everything stacked above it.
    ///
    /// Every carried camel is marked as no longer movable. Returns `None`
    /// if `colour` is not on the board.
    pub fn apply_move(&mut self, colour: Colour, roll: i32) -> Option<MoveReport> {
        let mover = *self.competitors.get(&colour)?;
        let from = mover.position;
        let mut to = from + roll;

        let mut triggered = None;
        if let Some(marker) = self.markers.get_mut(&to) {
            marker.triggers += 1;
            triggered = Some(marker.position);
            to += marker.direction.delta();
        }

        let in_group = |c: &Competitor| c.position == from && c.height >= mover.height;

        let mut group: SmallVec<[Competitor; 5]> = self
            .competitors
            .values()
            .filter(|c| in_group(*c))
            .copied()
            .collect();
        group.sort_by_key(|c| c.height);

        // A backward push can return the group to its own cell; it then
        // rests on whatever was below it.
        let base = self
            .top_height(to, |c| !in_group(c))
            .map_or(0, |h| h + 1);

        for (offset, camel) in group.iter().enumerate() {
            self.set_competitor(camel.colour, to, base + offset as u32, false);
        }

        let report = MoveReport {
            colour,
            roll,
            from,
            to,
            carried: group.iter().map(|c| c.colour).collect(),
            triggered,
        };
        log::trace!("{:?}", report);
        Some(report)
    }

    /// Highest stack height on `position` among camels accepted by `filter`.
    fn top_height(&self, position: i32, filter: impl Fn(&Competitor) -> bool) -> Option<u32> {
        self.competitors
            .values()
            .filter(|c| c.position == position && filter(*c))
            .map(|c| c.height)
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked_board() -> Board {
        let mut board = Board::new();
        board.add_competitor(Colour::Green, 5, true);
        board.add_competitor(Colour::Blue, 5, true);
        board.add_competitor(Colour::Orange, 5, true);
        board
    }

    #[test]
    fn test_add_competitor_stacks() {
        let board = stacked_board();
        assert_eq!(board.competitor(Colour::Green).unwrap().height, 0);
        assert_eq!(board.competitor(Colour::Blue).unwrap().height, 1);
        assert_eq!(board.competitor(Colour::Orange).unwrap().height, 2);
        assert_eq!(board.stack_size(5), 3);
        assert_eq!(board.stack_size(6), 0);
    }

    #[test]
    fn test_group_carry() {
        let mut board = stacked_board();
        let report = board.apply_move(Colour::Blue, 3).unwrap();

        assert_eq!(report.from, 5);
        assert_eq!(report.to, 8);
        assert_eq!(report.carried.as_slice(), &[Colour::Blue, Colour::Orange]);
        assert_eq!(report.triggered, None);

        let green = board.competitor(Colour::Green).unwrap();
        assert_eq!(green.standing(), (5, 0));
        assert!(green.movable);

        let blue = board.competitor(Colour::Blue).unwrap();
        let orange = board.competitor(Colour::Orange).unwrap();
        assert_eq!(blue.standing(), (8, 0));
        assert_eq!(orange.standing(), (8, 1));
        assert!(!blue.movable);
        assert!(!orange.movable);
    }

    #[test]
    fn test_lands_on_existing_stack() {
        let mut board = Board::new();
        board.add_competitor(Colour::Green, 2, true);
        board.add_competitor(Colour::Blue, 2, true);
        board.add_competitor(Colour::White, 4, true);

        board.apply_move(Colour::Green, 2);

        assert_eq!(board.competitor(Colour::White).unwrap().standing(), (4, 0));
        assert_eq!(board.competitor(Colour::Green).unwrap().standing(), (4, 1));
        assert_eq!(board.competitor(Colour::Blue).unwrap().standing(), (4, 2));
        assert!(board.stacks_contiguous());
    }

    #[test]
    fn test_forward_marker() {
        let mut board = Board::new();
        board.add_competitor(Colour::Yellow, 0, true);
        board.add_marker(2, Direction::Forward);

        let report = board.apply_move(Colour::Yellow, 2).unwrap();

        assert_eq!(report.triggered, Some(2));
        assert_eq!(report.to, 3);
        assert_eq!(board.marker(2).unwrap().triggers, 1);
    }

    #[test]
    fn test_backward_marker_onto_own_cell() {
        let mut board = stacked_board();
        board.add_marker(6, Direction::Backward);

        board.apply_move(Colour::Blue, 1);

        assert_eq!(board.competitor(Colour::Green).unwrap().standing(), (5, 0));
        assert_eq!(board.competitor(Colour::Blue).unwrap().standing(), (5, 1));
        assert_eq!(board.competitor(Colour::Orange).unwrap().standing(), (5, 2));
        assert_eq!(board.marker(6).unwrap().triggers, 1);
        assert!(board.stacks_contiguous());
    }

    #[test]
    fn test_missing_colour_is_noop() {
        let mut board = stacked_board();
        let before = board.clone();
        assert!(board.apply_move(Colour::White, 2).is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn test_leader_tie_break_by_height() {
        let mut board = Board::new();
        board.set_competitor(Colour::Green, 5, 1, true);
        board.set_competitor(Colour::Blue, 5, 0, true);

        assert_eq!(board.leader(None), Some(Colour::Green));
        assert_eq!(board.runner_up(), Some(Colour::Blue));
    }

    #[test]
    fn test_leader_degenerate_boards() {
        let mut board = Board::new();
        assert_eq!(board.leader(None), None);
        assert_eq!(board.runner_up(), None);

        board.add_competitor(Colour::White, 3, true);
        assert_eq!(board.leader(None), Some(Colour::White));
        assert_eq!(board.runner_up(), None);
    }

    #[test]
    fn test_legal_marker_positions() {
        let mut board = Board::new();
        board.add_competitor(Colour::Green, 2, true);
        board.add_competitor(Colour::Blue, 4, true);

        // 3..8 minus the camel on 4
        assert_eq!(board.legal_marker_positions(4), vec![3, 5, 6, 7]);

        board.add_marker(6, Direction::Forward);
        assert_eq!(board.legal_marker_positions(4), vec![3]);
    }

    #[test]
    fn test_legal_marker_positions_empty_board() {
        assert!(Board::new().legal_marker_positions(4).is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = stacked_board();
        let mut copy = original.clone();
        copy.apply_move(Colour::Green, 1);
        copy.add_marker(9, Direction::Forward);

        assert_eq!(original.competitor(Colour::Green).unwrap().standing(), (5, 0));
        assert!(original.marker(9).is_none());
    }

    #[test]
    fn test_movable_colours() {
        let mut board = Board::new();
        board.add_competitor(Colour::Green, 0, true);
        board.add_competitor(Colour::Blue, 0, false);
        board.add_competitor(Colour::White, 1, true);

        assert_eq!(board.movable_colours().as_slice(), &[Colour::Green, Colour::White]);
    }
}
