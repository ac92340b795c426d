//! Integration test: whole-session scenarios
//!
//! Drives sessions through the public API: eating and growth, lives mode,
//! self-bites, spawn placement, the speed floor, randomly steered games, and
//! the session loop with scripted input.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::{HashSet, VecDeque};
use std::io;
use std::time::Duration;

use snake_arcade::snake::{
    next_interval, CollisionCause, FailurePolicy, Grid, ObstacleSet, Phase, Position, SnakeState,
    SpeedCurve,
};
use snake_arcade::{
    process_input, run_session, start_session, step, Difficulty, Direction, EndReason, GameConfig,
    GameInput, InputSource, RenderSink, SessionState, Snapshot, StepOutcome,
};

fn config_20x20(difficulty: Difficulty, failure_policy: FailurePolicy) -> GameConfig {
    GameConfig {
        grid: Grid::new(20, 20),
        difficulty,
        failure_policy,
        ..GameConfig::default()
    }
}

/// A session with no obstacles and the food parked in a far corner.
fn open_session(failure_policy: FailurePolicy, rng: &mut ChaCha8Rng) -> SessionState {
    let mut session = start_session(&config_20x20(Difficulty::Easy, failure_policy), rng).unwrap();
    session.obstacles = ObstacleSet::default();
    session.food = Position::new(1, 18);
    session
}

fn assert_valid_cell(session: &SessionState, pos: Position) {
    assert!(session.grid.is_interior(pos), "{:?} is not interior", pos);
    assert!(!session.snake.occupies(pos), "{:?} is on the snake", pos);
}

#[test]
fn test_eating_grows_and_respawns_food() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut session = open_session(FailurePolicy::InstantDeath, &mut rng);
    assert_eq!(session.snake.head(), Position::new(10, 10));
    assert_eq!(session.snake.direction, Direction::Right);
    session.food = Position::new(15, 10);

    let outcomes: Vec<StepOutcome> = (0..5).map(|_| step(&mut session, &mut rng).unwrap()).collect();

    assert_eq!(outcomes[..4], [StepOutcome::Moved; 4]);
    assert_eq!(outcomes[4], StepOutcome::Ate);
    assert_eq!(session.snake.head(), Position::new(15, 10));
    assert_eq!(session.snake.len(), 4);
    assert_eq!(session.score, 1);
    assert_valid_cell(&session, session.food);
    assert!(!session.obstacles.blocks(session.food));
}

#[test]
fn test_lives_mode_pauses_then_ends() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut session = open_session(FailurePolicy::Lives, &mut rng);
    session.snake = SnakeState::new(Position::new(10, 0), 3, Direction::Right);
    let before = session.snake.clone();

    process_input(&mut session, GameInput::Steer(Direction::Up));
    let outcome = step(&mut session, &mut rng).unwrap();
    assert_eq!(
        outcome,
        StepOutcome::LifeLost {
            cause: CollisionCause::Wall,
            lives_left: 2
        }
    );
    assert_eq!(session.phase, Phase::Paused);
    assert_eq!(session.snake.body, before.body);

    // Paused: nothing moves.
    assert_eq!(step(&mut session, &mut rng).unwrap(), StepOutcome::Skipped);

    process_input(&mut session, GameInput::TogglePause);
    assert!(matches!(
        step(&mut session, &mut rng).unwrap(),
        StepOutcome::LifeLost { lives_left: 1, .. }
    ));

    process_input(&mut session, GameInput::TogglePause);
    assert_eq!(
        step(&mut session, &mut rng).unwrap(),
        StepOutcome::GameOver {
            cause: CollisionCause::Wall
        }
    );
    assert!(session.is_game_over());
    assert_eq!(session.lives_remaining(), Some(0));
    assert!(session.snake.body.iter().all(|&p| session.grid.contains(p)));
}

#[test]
fn test_instant_death_on_wall() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut session = open_session(FailurePolicy::InstantDeath, &mut rng);
    session.snake = SnakeState::new(Position::new(10, 0), 3, Direction::Up);

    assert_eq!(
        step(&mut session, &mut rng).unwrap(),
        StepOutcome::GameOver {
            cause: CollisionCause::Wall
        }
    );
    assert_eq!(session.lives_remaining(), None);
}

#[test]
fn test_self_bite_is_fatal_in_both_modes() {
    for policy in [FailurePolicy::InstantDeath, FailurePolicy::Lives] {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut session = open_session(policy, &mut rng);
        // Hook shape: head at (5,5) heading left, body curls back under it.
        session.snake = SnakeState {
            body: VecDeque::from(vec![
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 6),
                Position::new(5, 6),
                Position::new(4, 6),
            ]),
            direction: Direction::Left,
        };

        process_input(&mut session, GameInput::Steer(Direction::Down));
        assert_eq!(
            step(&mut session, &mut rng).unwrap(),
            StepOutcome::GameOver {
                cause: CollisionCause::SelfBite
            },
            "{:?}",
            policy
        );
        assert_eq!(session.phase, Phase::GameOver);
    }
}

#[test]
fn test_reversal_is_ignored() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut session = open_session(FailurePolicy::InstantDeath, &mut rng);

    step(&mut session, &mut rng).unwrap();
    process_input(&mut session, GameInput::Steer(Direction::Left));
    assert_eq!(step(&mut session, &mut rng).unwrap(), StepOutcome::Moved);
    assert_eq!(session.snake.direction, Direction::Right);
    assert_eq!(session.snake.head(), Position::new(12, 10));
}

#[test]
fn test_spawns_valid_across_seeds() {
    let config = GameConfig::default().with_difficulty(Difficulty::Hard);
    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let session = start_session(&config, &mut rng).unwrap();

        let obstacles: Vec<Position> = session.obstacles.active().collect();
        assert_eq!(obstacles.len(), 6, "seed {}", seed);
        let distinct: HashSet<Position> = obstacles.iter().copied().collect();
        assert_eq!(distinct.len(), obstacles.len(), "seed {}", seed);

        for &obstacle in &obstacles {
            assert_valid_cell(&session, obstacle);
            assert_ne!(obstacle, session.food, "seed {}", seed);
        }
        assert_valid_cell(&session, session.food);
    }
}

#[test]
fn test_speed_never_drops_below_floor() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for curve in [SpeedCurve::Ratchet, SpeedCurve::Recompute] {
        let mut session = open_session(FailurePolicy::InstantDeath, &mut rng);
        session.speed_curve = curve;
        session.score = 2_000;
        step(&mut session, &mut rng).unwrap();
        assert_eq!(session.tick_interval_ms, 50, "{:?}", curve);
    }

    assert_eq!(next_interval(SpeedCurve::Ratchet, 300, 300, 4), 300);
    assert_eq!(next_interval(SpeedCurve::Ratchet, 300, 300, 10), 298);
    assert_eq!(next_interval(SpeedCurve::Recompute, 250, 250, 10), 200);
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn assert_body_connected(session: &SessionState, context: &str) {
    let body: Vec<Position> = session.snake.body.iter().copied().collect();
    for pair in body.windows(2) {
        let dist = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
        assert!(dist <= 1, "{}: segments {:?} not adjacent", context, pair);
    }
    assert!(
        body.iter().all(|&p| session.grid.contains(p)),
        "{}: body left the grid",
        context
    );
}

#[test]
fn test_random_games_hold_every_tick_invariants() {
    for policy in [FailurePolicy::InstantDeath, FailurePolicy::Lives] {
        for seed in 0..300u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let difficulty = Difficulty::ALL[seed as usize % Difficulty::ALL.len()];
            let mut session = start_session(&config_20x20(difficulty, policy), &mut rng).unwrap();

            for tick in 0..400 {
                let context = format!("{:?} seed {} tick {}", policy, seed, tick);
                let prev_len = session.snake.len();
                let prev_score = session.score;
                let prev_direction = session.snake.direction;

                if rng.gen_bool(0.3) {
                    let direction = DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())];
                    process_input(&mut session, GameInput::Steer(direction));
                }
                let outcome = step(&mut session, &mut rng).unwrap();

                if outcome == StepOutcome::Ate {
                    assert_eq!(session.snake.len(), prev_len + 1, "{}", context);
                    assert_eq!(session.score, prev_score + 1, "{}", context);
                }
                assert_eq!(session.snake.len(), 3 + session.score as usize, "{}", context);
                assert_ne!(session.snake.direction, prev_direction.opposite(), "{}", context);
                assert_body_connected(&session, &context);
                assert_valid_cell(&session, session.food);
                assert!(!session.obstacles.blocks(session.food), "{}", context);
                assert!(session.tick_interval_ms >= 50, "{}", context);

                match outcome {
                    StepOutcome::LifeLost { .. } => {
                        process_input(&mut session, GameInput::TogglePause);
                    }
                    StepOutcome::GameOver { .. } => break,
                    _ => {}
                }
            }
        }
    }
}

/// Plays back one batch of inputs per poll; quits once the script runs out.
struct Script(VecDeque<Vec<GameInput>>);

impl InputSource for Script {
    fn poll_inputs(&mut self) -> io::Result<Vec<GameInput>> {
        Ok(self.0.pop_front().unwrap_or_else(|| vec![GameInput::Quit]))
    }

    fn idle(&mut self, _interval: Duration) {}
}

#[derive(Default)]
struct Recorder(Vec<Snapshot>);

impl RenderSink for Recorder {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.0.push(snapshot.clone());
        Ok(())
    }
}

#[test]
fn test_run_session_until_wall() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let config = GameConfig::default();
    let mut input = Script(vec![Vec::new(); 20].into());
    let mut frames = Recorder::default();

    let summary = run_session(&config, &mut rng, &mut input, &mut frames).unwrap();

    // Head starts at x=17 on a 35-wide grid: 17 moves reach x=34, the 18th hits.
    assert!(summary.game_over);
    assert_eq!(summary.ticks, 18);
    assert_eq!(summary.end_reason, EndReason::Quit);
    assert_eq!(summary.lives_left, None);

    let last = frames.0.last().unwrap();
    assert!(last.game_over);
    assert_eq!(last.head(), Some(Position::new(34, 12)));
    assert!(frames.0.iter().all(|s| s.body.iter().all(|&p| s.grid.contains(p))));
}

#[test]
fn test_run_session_pause_and_menu() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let config = GameConfig::default();
    let mut input = Script(
        vec![
            vec![],
            vec![GameInput::TogglePause],
            vec![],
            vec![GameInput::Steer(Direction::Up), GameInput::TogglePause],
            vec![GameInput::ReturnToMenu],
        ]
        .into(),
    );
    let mut frames = Recorder::default();

    let summary = run_session(&config, &mut rng, &mut input, &mut frames).unwrap();

    assert_eq!(summary.end_reason, EndReason::ReturnToMenu);
    assert!(!summary.game_over);
    assert_eq!(summary.ticks, 2);
    assert!(frames.0.iter().any(|s| s.paused));

    let last = frames.0.last().unwrap();
    assert_eq!(last.head(), Some(Position::new(18, 11)));
}
