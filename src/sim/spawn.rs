//! Ball spawning

use glam::Vec2;

use super::rng::GameRng;
use super::state::{Ball, BallKind, GameEvent, GameState};
use crate::consts::*;

/// Weighted kind roll: multiplier, then negative, otherwise normal
pub fn roll_kind(rng: &mut GameRng) -> BallKind {
    let roll = rng.roll();
    if roll < MULTIPLIER_CHANCE {
        BallKind::Multiplier
    } else if roll < MULTIPLIER_CHANCE + NEGATIVE_CHANCE {
        BallKind::Negative
    } else {
        BallKind::Normal
    }
}

/// Spawn one ball just above the playfield
pub fn spawn_ball(state: &mut GameState) {
    let id = state.next_entity_id();
    let rng = &mut state.rng;

    let radius = rng.int_in(BALL_MIN_RADIUS as i64, BALL_MAX_RADIUS as i64);
    let kind = roll_kind(rng);
    let value = rng.pick(kind.values());
    let x = rng.int_in(radius, PLAYFIELD_WIDTH as i64 - radius);
    let vy = rng.float_in(BALL_MIN_SPEED, BALL_MAX_SPEED);

    let radius = radius as f32;
    state.balls.push(Ball {
        id,
        pos: Vec2::new(x as f32, -radius),
        radius,
        vy,
        value,
        kind,
    });
    state.events.push(GameEvent::BallSpawned { id, kind });
    log::trace!("Spawned {:?} {} (id {}) at x={}", kind, value, id, x);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawned_ball_ranges() {
        let mut state = GameState::new(77);
        for _ in 0..1000 {
            spawn_ball(&mut state);
        }
        assert_eq!(state.balls.len(), 1000);

        for ball in &state.balls {
            assert!(ball.radius >= BALL_MIN_RADIUS as f32 && ball.radius <= BALL_MAX_RADIUS as f32);
            assert_eq!(ball.radius.fract(), 0.0);
            assert!(ball.pos.x >= ball.radius && ball.pos.x <= PLAYFIELD_WIDTH - ball.radius);
            assert_eq!(ball.pos.y, -ball.radius);
            assert!(ball.vy >= BALL_MIN_SPEED && ball.vy < BALL_MAX_SPEED);
            assert!(ball.kind.values().contains(&ball.value));
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut state = GameState::new(1);
        for _ in 0..50 {
            spawn_ball(&mut state);
        }
        let mut ids: Vec<u32> = state.balls.iter().map(|b| b.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_kind_weights_roughly_match() {
        let mut rng = GameRng::new(2024);
        let n = 20_000;
        let (mut mult, mut neg) = (0, 0);
        for _ in 0..n {
            match roll_kind(&mut rng) {
                BallKind::Multiplier => mult += 1,
                BallKind::Negative => neg += 1,
                BallKind::Normal => {}
            }
        }
        let mult = mult as f64 / n as f64;
        let neg = neg as f64 / n as f64;
        assert!((mult - 0.12).abs() < 0.02, "multiplier share {mult}");
        assert!((neg - 0.15).abs() < 0.02, "negative share {neg}");
    }
}
