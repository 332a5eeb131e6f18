//! Simulation step
//!
//! One call per frame: applies one-shot intents, moves the basket, then
//! runs whatever the current phase allows.

use super::collision::circle_rect_overlap;
use super::spawn::spawn_ball;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
    /// Full game reset
    pub reset: bool,
    /// Pause toggle
    pub toggle_pause: bool,
    /// Start the round (click/tap), only acted on while the target is shown
    pub start: bool,
}

impl TickInput {
    /// Net horizontal basket velocity; both directions held cancel out
    pub fn basket_velocity(&self) -> f32 {
        let mut vx = 0.0;
        if self.left {
            vx -= BASKET_SPEED;
        }
        if self.right {
            vx += BASKET_SPEED;
        }
        vx
    }
}

/// Clamp a raw frame delta to `[0, MAX_DT]`
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_nan() { 0.0 } else { dt.clamp(0.0, MAX_DT) }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.reset {
        log::info!("Full reset (score was {})", state.score);
        state.reset_all();
    }
    if input.toggle_pause {
        state.toggle_pause();
    }
    if input.start {
        state.start_countdown();
    }

    let dt = sanitize_dt(dt);

    // Frozen: no basket, timers or balls
    if state.phase == GamePhase::Paused {
        return;
    }

    state.time += dt as f64;

    // Basket moves in every live phase so the player can line up early
    state.basket.slide(input.basket_velocity(), dt);

    match state.phase {
        GamePhase::Countdown => {
            state.countdown_remaining -= dt;
            if state.countdown_remaining <= 0.0 {
                state.begin_play();
            }
        }
        GamePhase::Play => step_play(state, dt),
        GamePhase::Target => state.balls.clear(),
        GamePhase::Paused => {}
    }
}

fn step_play(state: &mut GameState, dt: f32) {
    state.spawn_timer += dt;
    if state.spawn_timer >= state.spawn_interval {
        state.spawn_timer = 0.0;
        spawn_ball(state);
    }

    let basket = state.basket.rect();

    // Newest first; removal keeps the remaining order intact
    let mut i = state.balls.len();
    while i > 0 {
        i -= 1;
        state.balls[i].fall(dt);
        let ball = &state.balls[i];

        if circle_rect_overlap(ball.pos, ball.radius, &basket) {
            let caught = state.balls.remove(i);
            if state.apply_catch(&caught) {
                // Clears the remaining balls, nothing left to advance
                state.complete_round();
                return;
            }
            continue;
        }

        if ball.is_below(PLAYFIELD_HEIGHT) {
            let missed = state.balls.remove(i);
            state.events.push(GameEvent::BallMissed { id: missed.id });
            log::trace!("Missed {:?} {} (id {})", missed.kind, missed.value, missed.id);
        }
    }
}
