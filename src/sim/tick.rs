//! Fixed order simulation tick
//!
//! Core game loop that advances the state deterministically. Every speed
//! constant is a per-tick displacement at the nominal 60 Hz rate; the
//! platform layer schedules calls through a fixed timestep accumulator.

use super::ai;
use super::collision;
use super::state::GameState;
use crate::consts::*;

/// Input snapshot for a single tick (deterministic)
///
/// Maintained by the platform layer between ticks and read, not consumed:
/// a held key keeps its direction and a resting pointer keeps its target.
/// Most recent input source wins - pointer movement sets `pointer_y`, a
/// direction key-down clears it to hand control back to the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickInput {
    /// Held key direction for the player paddle: -1 up, 0 hold, +1 down
    pub move_dir: i8,
    /// Absolute target for the player paddle's top edge, from mouse/touch.
    /// While set, velocity integration for the player is skipped.
    pub pointer_y: Option<f32>,
}

/// What happened during one tick, for the platform layer to react to
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickEvents {
    /// The ball crossed the right boundary
    pub player_scored: bool,
    /// The ball slipped past the left boundary
    pub computer_scored: bool,
    /// The ball came off either paddle face
    pub paddle_hit: bool,
    /// The ball bounced off the top or bottom wall
    pub wall_bounce: bool,
}

impl TickEvents {
    /// True when either side scored this tick
    pub fn scored(&self) -> bool {
        self.player_scored || self.computer_scored
    }
}

/// Advance the game state by one fixed tick
///
/// Systems run in a fixed order: player movement, computer tracking, ball
/// integration, wall bounce, paddle strikes, then boundary scoring. The
/// tick is total - out-of-range positions are clamped or snapped, never
/// rejected - and a scoring boundary resets the ball in the same tick.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();

    // Player movement: a pointer target overrides velocity integration
    if let Some(target) = input.pointer_y {
        state.player.y = target;
        state.player.dy = 0.0;
    } else {
        state.player.dy = f32::from(input.move_dir) * state.player.speed;
        state.player.y += state.player.dy;
    }
    state.player.clamp_to_arena();

    // Computer tracking, against the pre-integration ball position
    ai::track_ball(&mut state.computer, &state.ball);
    state.computer.y += state.computer.dy;
    state.computer.clamp_to_arena();

    // Ball integration
    state.ball.pos += state.ball.vel;

    if collision::collide_walls(&mut state.ball) {
        events.wall_bounce = true;
    }

    // Both paddle checks always run, left face first. The snap-out on hit
    // moves the ball well clear of the opposite band.
    let hit_player = collision::collide_player(&mut state.ball, &state.player);
    let hit_computer = collision::collide_computer(&mut state.ball, &state.computer);
    if hit_player || hit_computer {
        events.paddle_hit = true;
    }

    // Boundary scoring. The else-if makes a double score impossible even
    // for degenerate states; each side's serve launches toward the scorer.
    if state.ball.pos.x < 0.0 {
        state.computer.score += 1;
        events.computer_scored = true;
        state.reset_ball(1.0);
    } else if state.ball.pos.x + BALL_SIZE > ARENA_WIDTH {
        state.player.score += 1;
        events.player_scored = true;
        state.reset_ball(-1.0);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    /// Park the ball mid-field where it cannot reach a wall or paddle
    fn park_ball(state: &mut GameState) {
        state.ball.pos = Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0);
        state.ball.vel = Vec2::ZERO;
    }

    #[test]
    fn test_key_movement_integrates_and_clamps() {
        let mut state = GameState::new(12345);
        park_ball(&mut state);
        let start_y = state.player.y;

        let input = TickInput {
            move_dir: 1,
            ..Default::default()
        };
        let _ = tick(&mut state, &input);
        assert_eq!(state.player.y, start_y + PADDLE_SPEED);

        // Hold up against the top edge; the clamp pins it at zero
        let input = TickInput {
            move_dir: -1,
            ..Default::default()
        };
        for _ in 0..200 {
            let _ = tick(&mut state, &input);
        }
        assert_eq!(state.player.y, 0.0);
    }

    #[test]
    fn test_pointer_overrides_key_direction() {
        let mut state = GameState::new(12345);
        park_ball(&mut state);

        let input = TickInput {
            move_dir: 1,
            pointer_y: Some(321.0),
        };
        let _ = tick(&mut state, &input);
        assert_eq!(state.player.y, 321.0);
        assert_eq!(state.player.dy, 0.0);
    }

    #[test]
    fn test_pointer_target_is_clamped() {
        let mut state = GameState::new(12345);
        park_ball(&mut state);

        let input = TickInput {
            pointer_y: Some(-250.0),
            ..Default::default()
        };
        let _ = tick(&mut state, &input);
        assert_eq!(state.player.y, 0.0);

        let input = TickInput {
            pointer_y: Some(ARENA_HEIGHT * 2.0),
            ..Default::default()
        };
        let _ = tick(&mut state, &input);
        assert_eq!(state.player.y, ARENA_HEIGHT - PADDLE_HEIGHT);
    }

    #[test]
    fn test_computer_holds_inside_deadband() {
        let mut state = GameState::new(12345);
        park_ball(&mut state);
        // Ball center sits exactly on the computer paddle center
        state.ball.pos.y = state.computer.center_y() - BALL_SIZE / 2.0;
        let before = state.computer.y;

        let _ = tick(&mut state, &TickInput::default());
        assert_eq!(state.computer.y, before);
    }

    #[test]
    fn test_computer_chases_distant_ball() {
        let mut state = GameState::new(12345);
        park_ball(&mut state);
        state.ball.pos.y = state.computer.center_y() + 80.0;
        let before = state.computer.y;

        let _ = tick(&mut state, &TickInput::default());
        assert_eq!(state.computer.y, before + PADDLE_SPEED * AI_SPEED_FACTOR);
    }

    #[test]
    fn test_wall_bounce_end_to_end() {
        let mut state = GameState::new(12345);
        park_ball(&mut state);
        // One tick from crossing the top: integrates to y = -1, then snaps
        state.ball.pos.y = 3.0;
        state.ball.vel = Vec2::new(0.0, -4.0);

        let events = tick(&mut state, &TickInput::default());
        assert!(events.wall_bounce);
        assert_eq!(state.ball.pos.y, 0.0);
        assert_eq!(state.ball.vel.y, 4.0);
    }

    #[test]
    fn test_strike_overwrites_vertical_velocity() {
        let mut state = GameState::new(12345);
        // Dead-center strike on the player paddle: incoming vertical
        // velocity is replaced by english, which is zero at the center
        state.ball.pos = Vec2::new(30.0, state.player.center_y() - BALL_SIZE / 2.0 - 3.0);
        state.ball.vel = Vec2::new(-10.0, 3.0);

        let events = tick(&mut state, &TickInput::default());
        assert!(events.paddle_hit);
        assert_eq!(state.ball.vel.y, 0.0);
        assert!((state.ball.vel.x - 10.0 * PADDLE_BOOST).abs() < 1e-4);
        assert_eq!(state.ball.pos.x, state.player.x + PADDLE_WIDTH);
    }

    #[test]
    fn test_left_boundary_scores_computer() {
        let mut state = GameState::new(777);
        state.ball.pos = Vec2::new(2.0, 50.0);
        state.ball.vel = Vec2::new(-7.0, 0.0);

        let events = tick(&mut state, &TickInput::default());
        assert!(events.computer_scored);
        assert!(!events.player_scored);
        assert!(events.scored());
        assert_eq!(state.computer.score, 1);
        assert_eq!(state.player.score, 0);

        // Ball recentered and served toward the scorer
        assert_eq!(state.ball.pos.x, (ARENA_WIDTH - BALL_SIZE) / 2.0);
        assert_eq!(state.ball.pos.y, (ARENA_HEIGHT - BALL_SIZE) / 2.0);
        assert_eq!(state.ball.vel.x, SERVE_SPEED_X);
        assert!(state.ball.vel.y.abs() <= SERVE_SPEED_Y);
    }

    #[test]
    fn test_right_boundary_scores_player() {
        let mut state = GameState::new(777);
        // Pass above the computer paddle so nothing intercepts
        state.ball.pos = Vec2::new(ARENA_WIDTH - BALL_SIZE - 2.0, 50.0);
        state.ball.vel = Vec2::new(7.0, 0.0);

        let events = tick(&mut state, &TickInput::default());
        assert!(events.player_scored);
        assert!(!events.computer_scored);
        assert_eq!(state.player.score, 1);
        assert_eq!(state.ball.vel.x, -SERVE_SPEED_X);
    }

    #[test]
    fn test_scores_accumulate_across_resets() {
        let mut state = GameState::new(9);
        for _ in 0..3 {
            state.ball.pos = Vec2::new(2.0, 50.0);
            state.ball.vel = Vec2::new(-7.0, 0.0);
            let _ = tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.computer.score, 3);
        assert_eq!(state.player.score, 0);
    }

    #[test]
    fn test_single_point_per_tick() {
        let mut state = GameState::new(4242);
        // Degenerate state far past the left boundary
        state.ball.pos = Vec2::new(-900.0, 50.0);
        state.ball.vel = Vec2::ZERO;

        let events = tick(&mut state, &TickInput::default());
        assert!(events.computer_scored);
        assert!(!events.player_scored);
        assert_eq!(state.computer.score + state.player.score, 1);
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed and input sequence stay identical
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                move_dir: 1,
                ..Default::default()
            },
            TickInput {
                pointer_y: Some(120.0),
                ..Default::default()
            },
            TickInput {
                move_dir: -1,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            let e1 = tick(&mut state1, input);
            let e2 = tick(&mut state2, input);
            assert_eq!(e1, e2);
        }
        assert_eq!(state1, state2);
    }

    #[test]
    fn test_long_rally_stays_in_bounds() {
        let mut state = GameState::new(2024);
        let input = TickInput::default();
        for _ in 0..10_000 {
            let _ = tick(&mut state, &input);
            assert!(state.ball.pos.x >= 0.0);
            assert!(state.ball.pos.x + BALL_SIZE <= ARENA_WIDTH);
            assert!(state.ball.pos.y >= 0.0);
            assert!(state.ball.pos.y + BALL_SIZE <= ARENA_HEIGHT);
        }
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use crate::sim::state::{Ball, Paddle};
    use glam::Vec2;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn paddles_always_inside_arena(
            seed in any::<u64>(),
            dir in -1i8..=1,
            pointer in proptest::option::of(-200.0f32..700.0),
            ticks in 1usize..120,
        ) {
            let mut state = GameState::new(seed);
            let input = TickInput { move_dir: dir, pointer_y: pointer };
            for _ in 0..ticks {
                let _ = tick(&mut state, &input);
                prop_assert!(state.player.y >= 0.0);
                prop_assert!(state.player.y <= ARENA_HEIGHT - PADDLE_HEIGHT);
                prop_assert!(state.computer.y >= 0.0);
                prop_assert!(state.computer.y <= ARENA_HEIGHT - PADDLE_HEIGHT);
            }
        }

        #[test]
        fn ball_always_inside_arena(seed in any::<u64>(), ticks in 1usize..400) {
            let mut state = GameState::new(seed);
            for _ in 0..ticks {
                let _ = tick(&mut state, &TickInput::default());
                prop_assert!(state.ball.pos.x >= 0.0);
                prop_assert!(state.ball.pos.x + BALL_SIZE <= ARENA_WIDTH);
                prop_assert!(state.ball.pos.y >= 0.0);
                prop_assert!(state.ball.pos.y + BALL_SIZE <= ARENA_HEIGHT);
            }
        }

        #[test]
        fn english_never_exceeds_tip_speed(
            ball_y in -BALL_SIZE..ARENA_HEIGHT,
            paddle_y in 0.0f32..(ARENA_HEIGHT - PADDLE_HEIGHT),
        ) {
            let ball = Ball {
                pos: Vec2::new(PLAYER_X + 2.0, ball_y),
                vel: Vec2::new(-5.0, 0.0),
            };
            let mut paddle = Paddle::new(PLAYER_X);
            paddle.y = paddle_y;
            let english = collision::paddle_english(&ball, &paddle);
            prop_assert!(english >= -ENGLISH_MAX);
            prop_assert!(english <= ENGLISH_MAX);
        }

        #[test]
        fn paddle_clamp_is_idempotent(y in -1000.0f32..1000.0) {
            let mut paddle = Paddle::new(PLAYER_X);
            paddle.y = y;
            paddle.clamp_to_arena();
            let once = paddle.y;
            paddle.clamp_to_arena();
            prop_assert_eq!(once, paddle.y);
        }
    }
}
