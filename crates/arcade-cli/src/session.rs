//! Session state owned by the shell for the life of the process.

use arcade_core::results::StationResult;
use arcade_stations::STATION_COUNT;

/// Per-station progress, indexed by registry slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    total_score: u32,
    station_scores: [u32; STATION_COUNT],
    completed: [bool; STATION_COUNT],
    attempted: [u32; STATION_COUNT],
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a `play` of the station in `slot`, before it runs.
    pub fn record_attempt(&mut self, slot: usize) {
        self.attempted[slot] += 1;
    }

    /// Fold a finished run into the station's slot.
    ///
    /// Any attempt marks the station completed; the run's points are added
    /// to the station's score.
    pub fn apply_result(&mut self, slot: usize, result: &StationResult) {
        self.completed[slot] = true;
        self.station_scores[slot] += result.total_points;
    }

    /// Recompute the total from the per-station scores and return it.
    pub fn recompute_total(&mut self) -> u32 {
        self.total_score = self.station_scores.iter().sum();
        self.total_score
    }

    pub fn score(&self, slot: usize) -> u32 {
        self.station_scores[slot]
    }

    pub fn completed(&self, slot: usize) -> bool {
        self.completed[slot]
    }

    pub fn attempts(&self, slot: usize) -> u32 {
        self.attempted[slot]
    }

    /// Slots with at least one attempt, in slot order.
    pub fn attempted_slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..STATION_COUNT).filter(|&slot| self.attempted[slot] > 0)
    }

    pub fn stations_attempted(&self) -> usize {
        self.attempted_slots().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(points: u32) -> StationResult {
        StationResult {
            total_points: points,
            ..StationResult::new(9)
        }
    }

    #[test]
    fn starts_empty() {
        let mut state = GameState::new();
        assert_eq!(state.recompute_total(), 0);
        assert_eq!(state.stations_attempted(), 0);
        assert!(!state.completed(0));
    }

    #[test]
    fn attempt_and_result_update_one_slot() {
        let mut state = GameState::new();
        state.record_attempt(7);
        state.apply_result(7, &result(3));
        assert_eq!(state.attempts(7), 1);
        assert!(state.completed(7));
        assert_eq!(state.score(7), 3);
        assert_eq!(state.score(6), 0);
        assert_eq!(state.attempted_slots().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn zero_point_runs_still_complete() {
        let mut state = GameState::new();
        state.record_attempt(0);
        state.apply_result(0, &result(0));
        assert!(state.completed(0));
        assert_eq!(state.recompute_total(), 0);
    }

    #[test]
    fn total_is_recomputed_from_slots() {
        let mut state = GameState::new();
        state.apply_result(1, &result(2));
        state.apply_result(13, &result(5));
        state.apply_result(1, &result(1));
        assert_eq!(state.recompute_total(), 8);
        assert_eq!(state.recompute_total(), 8);
    }
}
