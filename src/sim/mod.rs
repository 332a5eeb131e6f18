//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only arrives through `dt`
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod round;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_rect_overlap};
pub use rng::GameRng;
pub use snapshot::{BallView, BasketView, Snapshot, ball_label, countdown_label};
pub use spawn::{roll_kind, spawn_ball};
pub use state::{Ball, BallKind, Basket, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
