use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Setup,
    Active,
}

impl GameState {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Setup
    }
}

/// A mole that was just pushed up, and how long until its hide action is due.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpawnedMole {
    pub index: CellIndex,
    pub hide_after: Millis,
}

/// Owner of all round state. Nothing else mutates grid, score, countdown, difficulty or game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameController {
    grid: MoleGrid,
    score: u32,
    time_left: Seconds,
    difficulty: Difficulty,
    state: GameState,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    pub const fn new() -> Self {
        Self {
            grid: MoleGrid::new(),
            score: 0,
            time_left: ROUND_SECONDS,
            difficulty: Difficulty::Easy,
            state: GameState::Setup,
        }
    }

    pub fn grid(&self) -> MoleGrid {
        self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> Seconds {
        self.time_left
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            score: self.score,
            difficulty: self.difficulty,
            time_left: self.time_left,
        }
    }

    /// Same as [`Self::reset_game`], there is no separate resume.
    pub fn start_game(&mut self) -> Option<RoundSummary> {
        self.reset_game()
    }

    /// Returns the summary of the round that was running, `None` when already in setup.
    pub fn end_game(&mut self) -> Option<RoundSummary> {
        let ended = self.state.is_active().then(|| self.summary());
        if ended.is_some() {
            log::info!("round ended with {} points", self.score);
        }
        self.state = GameState::Setup;
        self.time_left = 0;
        ended
    }

    /// Ends whatever is running and starts a fresh round.
    ///
    /// The difficulty goes back to easy even if another level was picked before, and the grid is left alone: moles
    /// still up from the last round go away when their hide actions fire.
    pub fn reset_game(&mut self) -> Option<RoundSummary> {
        let ended = self.end_game();
        self.score = 0;
        self.difficulty = Difficulty::Easy;
        self.time_left = ROUND_SECONDS;
        self.state = GameState::Active;
        log::info!("round started");
        ended
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> MarkOutcome {
        if self.difficulty == difficulty {
            return MarkOutcome::NoChange;
        }
        log::debug!("difficulty: {} -> {}", self.difficulty, difficulty);
        self.difficulty = difficulty;
        MarkOutcome::Changed
    }

    /// Level names that don't parse are ignored.
    pub fn change_difficulty(&mut self, level: &str) -> MarkOutcome {
        match level.parse() {
            Ok(difficulty) => self.set_difficulty(difficulty),
            Err(err) => {
                log::debug!("ignoring difficulty {:?}: {}", level, err);
                MarkOutcome::NoChange
            }
        }
    }

    pub fn whack_mole(&mut self, index: CellIndex) -> Result<WhackOutcome> {
        let index = self.grid.validate_index(index)?;

        if !self.state.is_active() || !self.grid.is_visible(index) {
            return Ok(WhackOutcome::Miss);
        }

        self.hide_mole(index)?;
        self.score = self.score.saturating_add(1);
        log::debug!("whacked mole {}, score {}", index, self.score);
        Ok(WhackOutcome::Hit)
    }

    pub fn show_mole(&mut self, index: CellIndex) -> Result<MarkOutcome> {
        self.set_mole(index, true)
    }

    pub fn hide_mole(&mut self, index: CellIndex) -> Result<MarkOutcome> {
        self.set_mole(index, false)
    }

    /// One firing of the spawn cycle: picks a hole uniformly at random and shows a mole there.
    ///
    /// The hide delay is taken from the difficulty right now, later changes don't affect this mole.
    pub fn spawn_mole<R: Rng>(&mut self, rng: &mut R) -> Option<SpawnedMole> {
        if !self.state.is_active() {
            return None;
        }

        let index: CellIndex = rng.random_range(0..GRID_SIZE as CellIndex);
        // index comes from the grid's own range
        self.show_mole(index).ok()?;
        let hide_after = self.difficulty.visible_ms();
        log::trace!("spawned mole {} for {}ms", index, hide_after);
        Some(SpawnedMole { index, hide_after })
    }

    /// One firing of the countdown cycle.
    pub fn countdown_tick(&mut self) -> CountdownOutcome {
        if !self.state.is_active() {
            return CountdownOutcome::Idle;
        }

        if self.time_left == 0 {
            self.end_game();
            CountdownOutcome::Expired
        } else {
            self.time_left -= 1;
            CountdownOutcome::Decremented(self.time_left)
        }
    }

    fn set_mole(&mut self, index: CellIndex, visible: bool) -> Result<MarkOutcome> {
        let grid = self.grid.with_mole(index, visible)?;
        if grid == self.grid {
            return Ok(MarkOutcome::NoChange);
        }
        self.grid = grid;
        Ok(MarkOutcome::Changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn active() -> GameController {
        let mut controller = GameController::new();
        controller.start_game();
        controller
    }

    #[test]
    fn starts_in_setup_with_defaults() {
        let controller = GameController::new();

        assert_eq!(controller.state(), GameState::Setup);
        assert_eq!(controller.score(), 0);
        assert_eq!(controller.time_left(), 30);
        assert_eq!(controller.difficulty().visible_ms(), 1500);
        assert_eq!(controller.grid().visible_count(), 0);
    }

    #[test]
    fn reset_restores_round_defaults_from_any_state() {
        let mut controller = active();
        controller.show_mole(2).unwrap();
        controller.whack_mole(2).unwrap();
        controller.change_difficulty("impossible");
        controller.countdown_tick();
        controller.end_game();

        controller.reset_game();

        assert_eq!(controller.grid().iter().count(), 9);
        assert_eq!(controller.score(), 0);
        assert_eq!(controller.time_left(), 30);
        assert_eq!(controller.difficulty().visible_ms(), 1500);
        assert!(controller.is_active());
    }

    #[test]
    fn start_discards_selected_difficulty() {
        let mut controller = GameController::new();
        controller.change_difficulty("hard");

        controller.start_game();

        assert_eq!(controller.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn end_game_is_idempotent() {
        let mut controller = active();

        controller.end_game();
        let once = controller.clone();
        controller.end_game();

        assert_eq!(controller, once);
        assert_eq!(controller.state(), GameState::Setup);
        assert_eq!(controller.time_left(), 0);
    }

    #[test]
    fn interrupting_a_round_reports_its_summary() {
        let mut controller = active();
        controller.change_difficulty("hard");
        controller.show_mole(0).unwrap();
        controller.whack_mole(0).unwrap();
        controller.countdown_tick();

        let expected = RoundSummary {
            score: 1,
            difficulty: Difficulty::Hard,
            time_left: 29,
        };
        assert_eq!(controller.clone().end_game(), Some(expected));
        assert_eq!(controller.clone().reset_game(), Some(expected));
        assert_eq!(controller.start_game(), Some(expected));
        assert_eq!(controller.score(), 0);
    }

    #[test]
    fn nothing_to_report_from_setup() {
        let mut controller = GameController::new();

        assert_eq!(controller.end_game(), None);
        assert_eq!(controller.start_game(), None);
        assert_eq!(controller.start_game().map(|summary| summary.score), Some(0));
    }

    #[test]
    fn reset_keeps_moles_that_are_still_up() {
        let mut controller = active();
        controller.show_mole(5).unwrap();

        controller.reset_game();

        assert!(controller.grid().is_visible(5));
    }

    #[test]
    fn unknown_difficulty_is_ignored() {
        let mut controller = GameController::new();

        assert_eq!(controller.change_difficulty("medium"), MarkOutcome::Changed);
        assert_eq!(controller.difficulty().visible_ms(), 1200);

        assert_eq!(controller.change_difficulty("bogus"), MarkOutcome::NoChange);
        assert_eq!(controller.difficulty().visible_ms(), 1200);
    }

    #[test]
    fn whack_scores_once_per_visible_mole() {
        let mut controller = active();
        controller.show_mole(3).unwrap();

        assert_eq!(controller.whack_mole(3), Ok(WhackOutcome::Hit));
        assert!(!controller.grid().is_visible(3));
        assert_eq!(controller.score(), 1);

        assert_eq!(controller.whack_mole(3), Ok(WhackOutcome::Miss));
        assert!(!controller.grid().is_visible(3));
        assert_eq!(controller.score(), 1);
    }

    #[test]
    fn score_counts_only_whacks_on_visible_moles() {
        let mut controller = active();
        let mut rng = SmallRng::seed_from_u64(7);
        let mut expected = 0;

        for round in 0..200u32 {
            if round % 3 == 0 {
                controller.spawn_mole(&mut rng);
            }
            let index = rng.random_range(0..9);
            if controller.grid().is_visible(index) {
                expected += 1;
            }
            controller.whack_mole(index).unwrap();
        }

        assert_eq!(controller.score(), expected);
        assert!(expected > 0);
    }

    #[test]
    fn whack_outside_the_grid_is_an_error() {
        let mut controller = active();

        assert_eq!(controller.whack_mole(9), Err(GameError::InvalidIndex));
        assert_eq!(controller.score(), 0);
    }

    #[test]
    fn whack_is_ignored_between_rounds() {
        let mut controller = active();
        controller.show_mole(1).unwrap();
        controller.end_game();

        assert_eq!(controller.whack_mole(1), Ok(WhackOutcome::Miss));
        assert!(controller.grid().is_visible(1));
        assert_eq!(controller.score(), 0);
    }

    #[test]
    fn hide_mole_is_idempotent() {
        let mut controller = active();
        controller.show_mole(6).unwrap();

        assert_eq!(controller.hide_mole(6), Ok(MarkOutcome::Changed));
        let once = controller.grid();
        assert_eq!(controller.hide_mole(6), Ok(MarkOutcome::NoChange));

        assert_eq!(controller.grid(), once);
    }

    #[test]
    fn spawn_does_nothing_in_setup() {
        let mut controller = GameController::new();
        let mut rng = SmallRng::seed_from_u64(1);

        assert_eq!(controller.spawn_mole(&mut rng), None);
        assert_eq!(controller.grid(), MoleGrid::new());
    }

    #[test]
    fn spawn_captures_current_difficulty() {
        let mut controller = active();
        controller.change_difficulty("hard");
        let mut rng = SmallRng::seed_from_u64(3);

        let spawned = controller.spawn_mole(&mut rng).unwrap();

        assert_eq!(spawned.hide_after, 900);
        assert!(controller.grid().is_visible(spawned.index));
    }

    #[test]
    fn countdown_ends_round_after_reaching_zero() {
        let mut controller = active();

        for remaining in (0..30).rev() {
            assert_eq!(
                controller.countdown_tick(),
                CountdownOutcome::Decremented(remaining)
            );
        }
        assert!(controller.is_active());

        assert_eq!(controller.countdown_tick(), CountdownOutcome::Expired);
        assert!(!controller.is_active());
        assert_eq!(controller.countdown_tick(), CountdownOutcome::Idle);
    }
}
