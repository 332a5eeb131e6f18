//! Round and game transitions
//!
//! Every phase change goes through one of these helpers; `tick` only
//! decides when to call them.

use super::state::{Ball, GameEvent, GamePhase, GameState};
use crate::consts::*;

impl GameState {
    /// Draw a fresh target in `[TARGET_MIN, TARGET_MAX]`
    pub fn new_target(&mut self) -> i64 {
        self.rng.int_in(TARGET_MIN, TARGET_MAX)
    }

    /// Back to the target screen with a new number
    pub fn reset_round(&mut self) {
        self.phase = GamePhase::Target;
        self.target = self.new_target();
        self.current = 0;
        self.countdown_remaining = COUNTDOWN_SECS;
        self.spawn_timer = 0.0;
        self.balls.clear();
        self.round = self.round.saturating_add(1);
        log::info!("Round {} target: {}", self.round, self.target);
    }

    /// Full game reset: difficulty, score and basket go back to the start
    pub fn reset_all(&mut self) {
        self.spawn_interval = SPAWN_START;
        self.score = 0;
        self.round = 0;
        self.rounds_completed = 0;
        self.basket.recenter();
        self.reset_round();
        self.events.push(GameEvent::GameReset);
    }

    /// Target hit: tighten spawning and start the next round
    pub fn complete_round(&mut self) {
        let target = self.target;
        self.spawn_interval = (self.spawn_interval - SPAWN_STEP).max(SPAWN_MIN);
        self.rounds_completed = self.rounds_completed.saturating_add(1);
        log::info!(
            "Round {} complete (target {}, score {}), spawn interval now {:.2}s",
            self.round,
            target,
            self.score,
            self.spawn_interval
        );
        self.events.push(GameEvent::RoundCompleted {
            target,
            spawn_interval: self.spawn_interval,
        });
        self.reset_round();
    }

    /// Player asked to start. Only acts on the target screen.
    pub fn start_countdown(&mut self) {
        if self.phase != GamePhase::Target {
            return;
        }
        self.phase = GamePhase::Countdown;
        self.countdown_remaining = COUNTDOWN_SECS;
        self.spawn_timer = 0.0;
        self.balls.clear();
        self.events.push(GameEvent::CountdownStarted);
    }

    /// Countdown ran out
    pub(crate) fn begin_play(&mut self) {
        self.phase = GamePhase::Play;
        self.spawn_timer = 0.0;
        self.balls.clear();
        self.events.push(GameEvent::PlayStarted);
        log::debug!("Round {} live", self.round);
    }

    /// Play <-> Paused; ignored in Target and Countdown
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Play => self.pause(),
            GamePhase::Paused => {
                self.phase = GamePhase::Play;
                self.events.push(GameEvent::Resumed);
                log::info!("Resumed");
            }
            GamePhase::Target | GamePhase::Countdown => {}
        }
    }

    /// Pause if playing (focus loss); never resumes
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Play {
            self.phase = GamePhase::Paused;
            self.events.push(GameEvent::Paused);
            log::info!("Paused");
        }
    }

    /// Score a caught ball. Returns true when the target was hit exactly.
    pub fn apply_catch(&mut self, ball: &Ball) -> bool {
        self.current = ball.kind.apply(self.current, ball.value).max(0);
        self.score = self.score.saturating_add(CATCH_SCORE);
        log::debug!(
            "Caught {:?} {} -> {} (target {})",
            ball.kind,
            ball.value,
            self.current,
            self.target
        );
        self.events.push(GameEvent::BallCaught {
            kind: ball.kind,
            value: ball.value,
            current: self.current,
        });
        self.current == self.target
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::state::BallKind;

    fn ball(kind: BallKind, value: i32) -> Ball {
        Ball {
            id: 0,
            pos: Vec2::ZERO,
            radius: 25.0,
            vy: 150.0,
            value,
            kind,
        }
    }

    #[test]
    fn test_new_game_waits_on_target() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Target);
        assert!((TARGET_MIN..=TARGET_MAX).contains(&state.target));
        assert_eq!(state.current, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.round, 1);
        assert_eq!(state.spawn_interval, SPAWN_START);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_targets_stay_in_range() {
        let mut state = GameState::new(5);
        for _ in 0..500 {
            state.reset_round();
            assert!((5..=11).contains(&state.target));
        }
    }

    #[test]
    fn test_start_countdown_only_from_target() {
        let mut state = GameState::new(2);
        state.start_countdown();
        assert_eq!(state.phase, GamePhase::Countdown);
        assert_eq!(state.countdown_remaining, COUNTDOWN_SECS);

        state.countdown_remaining = 1.0;
        state.start_countdown();
        assert_eq!(state.phase, GamePhase::Countdown);
        assert_eq!(state.countdown_remaining, 1.0);
    }

    #[test]
    fn test_toggle_pause_only_between_play_and_paused() {
        let mut state = GameState::new(3);
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Target);

        state.start_countdown();
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Countdown);

        state.begin_play();
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Paused);
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Play);
    }

    #[test]
    fn test_pause_never_resumes() {
        let mut state = GameState::new(3);
        state.start_countdown();
        state.begin_play();
        state.pause();
        assert_eq!(state.phase, GamePhase::Paused);
        state.pause();
        assert_eq!(state.phase, GamePhase::Paused);
    }

    #[test]
    fn test_complete_round_tightens_spawn_interval() {
        let mut state = GameState::new(4);
        state.complete_round();
        assert!((state.spawn_interval - (SPAWN_START - SPAWN_STEP)).abs() < 1e-6);
        assert_eq!(state.phase, GamePhase::Target);
        assert_eq!(state.rounds_completed, 1);
        assert_eq!(state.round, 2);

        for _ in 0..100 {
            state.complete_round();
        }
        assert_eq!(state.spawn_interval, SPAWN_MIN);
    }

    #[test]
    fn test_apply_catch_arithmetic() {
        let mut state = GameState::new(6);
        state.target = 7;

        assert!(!state.apply_catch(&ball(BallKind::Normal, 5)));
        assert_eq!(state.current, 5);
        assert!(!state.apply_catch(&ball(BallKind::Multiplier, 2)));
        assert_eq!(state.current, 10);
        assert!(state.apply_catch(&ball(BallKind::Negative, -3)));
        assert_eq!(state.current, 7);
        assert_eq!(state.score, 300);
    }

    #[test]
    fn test_apply_catch_clamps_at_zero() {
        let mut state = GameState::new(6);
        state.target = 9;
        state.current = 2;
        state.apply_catch(&ball(BallKind::Negative, -5));
        assert_eq!(state.current, 0);
        // Multiplying zero stays zero
        state.apply_catch(&ball(BallKind::Multiplier, 4));
        assert_eq!(state.current, 0);
    }

    #[test]
    fn test_multiplier_saturates() {
        let mut state = GameState::new(6);
        state.current = i64::MAX / 2 + 1;
        state.apply_catch(&ball(BallKind::Multiplier, 4));
        assert_eq!(state.current, i64::MAX);
    }

    #[test]
    fn test_reset_all_restores_session() {
        let mut state = GameState::new(8);
        state.complete_round();
        state.complete_round();
        state.score = 500;
        state.current = 4;
        state.basket.x = 0.0;
        state.reset_all();

        assert_eq!(state.phase, GamePhase::Target);
        assert_eq!(state.current, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.spawn_interval, SPAWN_START);
        assert_eq!(state.rounds_completed, 0);
        assert_eq!(state.round, 1);
        assert_eq!(state.basket.x, PLAYFIELD_WIDTH / 2.0 - BASKET_WIDTH / 2.0);
        assert!(state.balls.is_empty());
        assert_eq!(state.events.last(), Some(&GameEvent::GameReset));
    }
}
