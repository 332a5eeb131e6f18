//! Frame composition from a simulation snapshot

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::sim::{BallKind, BallView, GamePhase, Snapshot};

const BALL_SEGMENTS: u32 = 32;
const BALL_STROKE: f32 = 2.0;
const LABEL_HEIGHT: f32 = 18.0;
const BASKET_CORNER: f32 = 8.0;

/// Fill and stroke color for a ball kind
pub fn ball_colors(kind: BallKind) -> ([f32; 4], [f32; 4]) {
    match kind {
        BallKind::Normal => (colors::NORMAL_FILL, colors::NORMAL_STROKE),
        BallKind::Multiplier => (colors::MULTIPLIER_FILL, colors::MULTIPLIER_STROKE),
        BallKind::Negative => (colors::NEGATIVE_FILL, colors::NEGATIVE_STROKE),
    }
}

fn ball(view: &BallView) -> Vec<Vertex> {
    let center = Vec2::new(view.x, view.y);
    let (fill, stroke) = ball_colors(view.kind);

    let mut vertices = shapes::circle(center, view.r, fill, BALL_SEGMENTS);
    vertices.extend(shapes::ring(
        center,
        view.r - BALL_STROKE,
        view.r,
        stroke,
        BALL_SEGMENTS,
    ));
    vertices.extend(shapes::text_centered(
        &view.label,
        center + Vec2::new(0.0, 1.0),
        LABEL_HEIGHT,
        colors::BALL_LABEL,
    ));
    vertices
}

/// Build the full triangle list for one frame (playfield pixel coordinates).
///
/// HUD text (target, score, prompts) is left to the host page.
pub fn build_scene(snapshot: &Snapshot) -> Vec<Vertex> {
    let mut vertices = shapes::rect(
        0.0,
        0.0,
        PLAYFIELD_WIDTH,
        PLAYFIELD_HEIGHT,
        colors::BACKGROUND,
    );

    let basket = &snapshot.basket;
    vertices.extend(shapes::rounded_rect(
        basket.x,
        basket.y,
        basket.w,
        basket.h,
        BASKET_CORNER,
        colors::BASKET,
    ));
    vertices.extend(shapes::text_centered(
        &snapshot.current.to_string(),
        Vec2::new(basket.x + basket.w / 2.0, basket.y + basket.h / 2.0 + 1.0),
        LABEL_HEIGHT,
        colors::BASKET_TEXT,
    ));

    // Balls only exist while playing; paused shows them frozen under a dim layer
    if matches!(snapshot.phase, GamePhase::Play | GamePhase::Paused) {
        for view in &snapshot.balls {
            vertices.extend(ball(view));
        }
    }

    if snapshot.phase == GamePhase::Paused {
        vertices.extend(shapes::rect(
            0.0,
            0.0,
            PLAYFIELD_WIDTH,
            PLAYFIELD_HEIGHT,
            colors::PAUSE_DIM,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, spawn_ball};

    fn playing_with_balls(n: usize) -> GameState {
        let mut state = GameState::new(21);
        state.start_countdown();
        state.begin_play();
        for _ in 0..n {
            spawn_ball(&mut state);
        }
        state
    }

    #[test]
    fn test_scene_is_triangle_list() {
        let state = playing_with_balls(3);
        let vertices = build_scene(&Snapshot::capture(&state));
        assert_eq!(vertices.len() % 3, 0);
    }

    #[test]
    fn test_balls_drawn_only_in_play() {
        let mut state = playing_with_balls(3);
        let with_balls = build_scene(&Snapshot::capture(&state)).len();

        state.balls.clear();
        let without = build_scene(&Snapshot::capture(&state)).len();
        assert!(with_balls > without);

        let mut target = playing_with_balls(3);
        target.phase = GamePhase::Target;
        assert_eq!(build_scene(&Snapshot::capture(&target)).len(), without);
    }

    #[test]
    fn test_pause_adds_dim_layer_last() {
        let mut state = playing_with_balls(2);
        state.pause();
        let vertices = build_scene(&Snapshot::capture(&state));
        let last = vertices.last().map(|v| v.color);
        assert_eq!(last, Some(colors::PAUSE_DIM));
    }

    #[test]
    fn test_ball_colors_by_kind() {
        assert_eq!(ball_colors(BallKind::Multiplier).0, colors::MULTIPLIER_FILL);
        assert_eq!(ball_colors(BallKind::Negative).1, colors::NEGATIVE_STROKE);
    }
}
