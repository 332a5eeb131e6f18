//! Property tests for the simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use math_catch::consts::*;
use math_catch::sim::{
    Ball, BallKind, GamePhase, GameState, Rect, TickInput, circle_rect_overlap, spawn_ball, tick,
};
use math_catch::spawn_interval_after;

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (
        any::<bool>(),
        any::<bool>(),
        prop::bool::weighted(0.02),
        prop::bool::weighted(0.05),
        prop::bool::weighted(0.3),
    )
        .prop_map(|(left, right, reset, toggle_pause, start)| TickInput {
            left,
            right,
            reset,
            toggle_pause,
            start,
        })
}

fn kind_strategy() -> impl Strategy<Value = (BallKind, i32)> {
    prop_oneof![
        (1..=5i32).prop_map(|v| (BallKind::Normal, v)),
        prop::sample::select(vec![2, 3, 4]).prop_map(|v| (BallKind::Multiplier, v)),
        (-5..=-1i32).prop_map(|v| (BallKind::Negative, v)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn current_never_negative_and_basket_in_bounds(
        seed in any::<u64>(),
        frames in prop::collection::vec((input_strategy(), 0.0f32..0.2), 1..400),
    ) {
        let mut state = GameState::new(seed);
        for (input, dt) in &frames {
            tick(&mut state, input, *dt);
            prop_assert!(state.current >= 0);
            prop_assert!(state.basket.x >= 0.0);
            prop_assert!(state.basket.x <= PLAYFIELD_WIDTH - state.basket.w);
            prop_assert!((TARGET_MIN..=TARGET_MAX).contains(&state.target));
            prop_assert!(state.spawn_interval >= SPAWN_MIN && state.spawn_interval <= SPAWN_START);
            prop_assert_eq!(state.spawn_interval, spawn_interval_after(state.rounds_completed));
            if state.phase != GamePhase::Play && state.phase != GamePhase::Paused {
                prop_assert!(state.balls.is_empty());
            }
        }
    }

    #[test]
    fn catch_arithmetic_matches_kind(
        start in 0i64..200,
        (kind, value) in kind_strategy(),
    ) {
        let mut state = GameState::new(1);
        state.target = -1; // never completes, so current stays observable
        state.current = start;
        let ball = Ball { id: 0, pos: Vec2::ZERO, radius: 25.0, vy: 150.0, value, kind };
        state.apply_catch(&ball);

        let expected = match kind {
            BallKind::Multiplier => start * value as i64,
            _ => start + value as i64,
        };
        prop_assert_eq!(state.current, expected.max(0));
        prop_assert_eq!(state.score, CATCH_SCORE);
    }

    #[test]
    fn spawned_balls_respect_ranges(seed in any::<u64>(), count in 1usize..50) {
        let mut state = GameState::new(seed);
        for _ in 0..count {
            spawn_ball(&mut state);
        }
        for ball in &state.balls {
            prop_assert!(ball.radius >= BALL_MIN_RADIUS as f32 && ball.radius <= BALL_MAX_RADIUS as f32);
            prop_assert!(ball.pos.x >= ball.radius && ball.pos.x <= PLAYFIELD_WIDTH - ball.radius);
            prop_assert_eq!(ball.pos.y, -ball.radius);
            prop_assert!(ball.vy >= BALL_MIN_SPEED && ball.vy <= BALL_MAX_SPEED);
            prop_assert!(ball.kind.values().contains(&ball.value));
        }
    }

    #[test]
    fn overlap_matches_closest_point_distance(
        cx in -100.0f32..1000.0,
        cy in -100.0f32..700.0,
        r in 1.0f32..50.0,
    ) {
        let rect = Rect::new(390.0, 540.0, 120.0, 34.0);
        let inside = cx >= rect.x && cx <= rect.x + rect.w && cy >= rect.y && cy <= rect.y + rect.h;
        let far = cx < rect.x - r
            || cx > rect.x + rect.w + r
            || cy < rect.y - r
            || cy > rect.y + rect.h + r;
        let hit = circle_rect_overlap(Vec2::new(cx, cy), r, &rect);
        if inside {
            prop_assert!(hit);
        }
        if far {
            prop_assert!(!hit);
        }
    }
}

#[test]
fn spawn_interval_formula() {
    for n in 0..40u32 {
        let expected = (SPAWN_START - SPAWN_STEP * n as f32).max(SPAWN_MIN);
        assert!((spawn_interval_after(n) - expected).abs() < 1e-4, "round {n}");
    }
    assert_eq!(spawn_interval_after(100), SPAWN_MIN);
}

#[test]
fn completed_rounds_tighten_spawning() {
    let mut state = GameState::new(55);
    for n in 1..=20u32 {
        state.complete_round();
        assert_eq!(state.rounds_completed, n);
        assert_eq!(state.spawn_interval, spawn_interval_after(n));
        assert_eq!(state.phase, GamePhase::Target);
    }
}
