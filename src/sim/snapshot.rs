//! Read-only view of the simulation for renderers and HUDs

use serde::Serialize;

use super::state::{Ball, BallKind, GamePhase, GameState};

/// A ball as the renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub kind: BallKind,
    pub value: i32,
    pub label: String,
}

impl From<&Ball> for BallView {
    fn from(ball: &Ball) -> Self {
        Self {
            id: ball.id,
            x: ball.pos.x,
            y: ball.pos.y,
            r: ball.radius,
            kind: ball.kind,
            value: ball.value,
            label: ball_label(ball.kind, ball.value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BasketView {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub target: i64,
    pub current: i64,
    pub score: u64,
    pub round: u32,
    pub countdown_remaining: f32,
    pub countdown_label: String,
    pub basket: BasketView,
    pub balls: Vec<BallView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            target: state.target,
            current: state.current,
            score: state.score,
            round: state.round,
            countdown_remaining: state.countdown_remaining,
            countdown_label: countdown_label(state.countdown_remaining),
            basket: BasketView {
                x: state.basket.x,
                y: state.basket.y,
                w: state.basket.w,
                h: state.basket.h,
            },
            balls: state.balls.iter().map(BallView::from).collect(),
        }
    }
}

/// Text printed on a ball: multipliers read "x3", everything else is the signed value
pub fn ball_label(kind: BallKind, value: i32) -> String {
    match kind {
        BallKind::Multiplier => format!("x{}", value),
        BallKind::Normal | BallKind::Negative => value.to_string(),
    }
}

/// Big countdown text: whole seconds rounded up, "GO!" for the last half second
pub fn countdown_label(remaining: f32) -> String {
    let t = remaining.max(0.0);
    if t > 0.5 {
        format!("{}", t.ceil() as u32)
    } else {
        "GO!".to_string()
    }
}
