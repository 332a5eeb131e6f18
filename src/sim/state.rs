//! Game state and core simulation types
//!
//! `GameState` is the single owned world: round bookkeeping, the basket,
//! the live balls and the RNG stream that feeds them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::rng::GameRng;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Target shown, waiting for the player to start the round
    Target,
    /// Lead-in before balls start falling (basket already movable)
    Countdown,
    /// Active gameplay
    Play,
    /// Frozen; only reachable from (and returns to) Play
    Paused,
}

/// Ball types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallKind {
    /// Adds 1..=5
    #[default]
    Normal,
    /// Multiplies by 2..=4
    Multiplier,
    /// Adds -1..=-5
    Negative,
}

impl BallKind {
    /// Value pool a ball of this kind draws from
    pub fn values(&self) -> &'static [i32] {
        match self {
            BallKind::Normal => &NORMAL_VALUES,
            BallKind::Multiplier => &MULTIPLIER_VALUES,
            BallKind::Negative => &NEGATIVE_VALUES,
        }
    }

    /// Apply a caught value to the running total (not yet clamped)
    pub fn apply(&self, current: i64, value: i32) -> i64 {
        match self {
            BallKind::Multiplier => current.saturating_mul(value as i64),
            BallKind::Normal | BallKind::Negative => current.saturating_add(value as i64),
        }
    }
}

/// A falling ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    /// Center position
    pub pos: Vec2,
    pub radius: f32,
    /// Downward speed (pixels/s)
    pub vy: f32,
    pub value: i32,
    pub kind: BallKind,
}

impl Ball {
    /// Advance along the fall line
    pub fn fall(&mut self, dt: f32) {
        self.pos.y += self.vy * dt;
    }

    /// True once the top of the ball is below the playfield
    pub fn is_below(&self, floor: f32) -> bool {
        self.pos.y - self.radius > floor
    }
}

/// The player's basket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Basket {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Default for Basket {
    fn default() -> Self {
        Self {
            x: Self::centered_x(),
            y: BASKET_Y,
            w: BASKET_WIDTH,
            h: BASKET_HEIGHT,
        }
    }
}

impl Basket {
    fn centered_x() -> f32 {
        PLAYFIELD_WIDTH / 2.0 - BASKET_WIDTH / 2.0
    }

    pub fn recenter(&mut self) {
        self.x = PLAYFIELD_WIDTH / 2.0 - self.w / 2.0;
    }

    /// Move horizontally, clamped to the playfield
    pub fn slide(&mut self, vx: f32, dt: f32) {
        self.x = (self.x + vx * dt).clamp(0.0, PLAYFIELD_WIDTH - self.w);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// Gameplay events for the shell (audio, HUD, logging)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BallSpawned { id: u32, kind: BallKind },
    BallCaught { kind: BallKind, value: i32, current: i64 },
    BallMissed { id: u32 },
    CountdownStarted,
    PlayStarted,
    RoundCompleted { target: i64, spawn_interval: f32 },
    Paused,
    Resumed,
    GameReset,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: GameRng,
    pub phase: GamePhase,
    /// Number to hit exactly
    pub target: i64,
    /// Running total, never negative
    pub current: i64,
    pub score: u64,
    /// Round number within the session (1-based)
    pub round: u32,
    /// Rounds completed since the last full reset
    pub rounds_completed: u32,
    pub countdown_remaining: f32,
    /// Seconds since the last spawn
    pub spawn_timer: f32,
    pub spawn_interval: f32,
    /// Simulated seconds (paused time excluded)
    pub time: f64,
    pub basket: Basket,
    /// Live balls, in spawn order
    pub balls: Vec<Ball>,
    /// Events raised since the shell last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game with the given seed, waiting on the first target
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: GameRng::new(seed),
            phase: GamePhase::Target,
            target: 0,
            current: 0,
            score: 0,
            round: 0,
            rounds_completed: 0,
            countdown_remaining: COUNTDOWN_SECS,
            spawn_timer: 0.0,
            spawn_interval: SPAWN_START,
            time: 0.0,
            basket: Basket::default(),
            balls: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        };
        state.reset_all();
        // A fresh game is not a reset worth reporting
        state.events.clear();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
