//! Property tests for the simulation invariants

use lilac_runner::sim::{GameEvent, GameWorld, RunStatus, TickInput, Tuning, spawner, tick};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// One host command between two ticks
#[derive(Debug, Clone, Copy)]
enum Command {
    Idle,
    Jump,
    Reset,
    Autopilot,
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        6 => Just(Command::Idle),
        3 => Just(Command::Jump),
        1 => Just(Command::Reset),
        2 => Just(Command::Autopilot),
    ]
}

fn input_for(command: Command) -> TickInput {
    match command {
        Command::Idle => TickInput::default(),
        Command::Jump => TickInput {
            jump: true,
            ..Default::default()
        },
        Command::Reset => TickInput {
            reset: true,
            ..Default::default()
        },
        Command::Autopilot => TickInput {
            autopilot: true,
            ..Default::default()
        },
    }
}

/// Tick until the first collision; `None` if it never happens
fn run_until_ended(world: &mut GameWorld, max_ticks: u32) -> Option<u32> {
    for n in 0..max_ticks {
        tick(world, &TickInput::default());
        if world.run.status == RunStatus::Ended {
            return Some(n + 1);
        }
    }
    None
}

proptest! {
    #[test]
    fn player_never_sinks_below_ground(
        seed in any::<u64>(),
        jumps in prop::collection::vec(any::<bool>(), 1..400),
    ) {
        let mut world = GameWorld::with_seed(seed);
        let ground_y = world.tuning().ground_y;

        for jump in jumps {
            tick(&mut world, &TickInput { jump, ..Default::default() });
            prop_assert!(world.player.bottom() <= ground_y);
            if world.player.on_ground {
                prop_assert_eq!(world.player.bottom(), ground_y);
                prop_assert_eq!(world.player.vy, 0.0);
            }
        }
    }

    #[test]
    fn spawned_obstacles_respect_ranges(seed in any::<u64>()) {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(seed);

        for _ in 0..200 {
            let obstacle = spawner::spawn_obstacle(&mut rng, &tuning);
            prop_assert!(tuning.obstacle_width.contains(&obstacle.size.x));
            prop_assert!(tuning.obstacle_height.contains(&obstacle.size.y));
            prop_assert!(tuning.obstacle_speed.contains(&obstacle.speed));
            prop_assert_eq!(obstacle.pos.x, tuning.field_width + 10.0);
            prop_assert!((obstacle.pos.y + obstacle.size.y - tuning.ground_y).abs() < 1e-4);
        }
    }

    #[test]
    fn high_score_bounds_score_and_never_drops(
        seed in any::<u64>(),
        commands in prop::collection::vec(command(), 1..1500),
    ) {
        let mut world = GameWorld::with_seed(seed);
        let mut best = 0;

        for command in commands {
            let score_before = world.run.score;
            tick(&mut world, &input_for(command));
            let events = world.drain_events();
            let cleared = events
                .iter()
                .filter(|e| matches!(e, GameEvent::ObstacleCleared { .. }))
                .count() as u32;
            let restarted = events.iter().any(|e| matches!(e, GameEvent::Reset { .. }));

            prop_assert!(world.run.high_score >= world.run.score);
            prop_assert!(world.run.high_score >= best);
            // Exactly one point per removed obstacle
            if restarted {
                prop_assert_eq!(world.run.score, cleared);
            } else {
                prop_assert_eq!(world.run.score, score_before + cleared);
            }
            best = world.run.high_score;
        }
    }

    #[test]
    fn ended_world_is_frozen(seed in any::<u64>(), extra in 1u32..50) {
        let mut world = GameWorld::with_seed(seed);
        prop_assume!(run_until_ended(&mut world, 1000).is_some());

        let player = world.player.clone();
        let obstacles = world.obstacles.clone();
        let run = world.run.clone();

        for _ in 0..extra {
            tick(&mut world, &TickInput::default());
        }

        prop_assert_eq!(world.player, player);
        prop_assert_eq!(world.obstacles, obstacles);
        prop_assert_eq!(world.run, run);
    }

    #[test]
    fn reset_restores_start_but_keeps_best(
        seed in any::<u64>(),
        commands in prop::collection::vec(command(), 0..800),
        after in 0u64..70,
    ) {
        let mut world = GameWorld::with_seed(seed);
        let fresh = GameWorld::with_seed(seed);

        for command in commands {
            tick(&mut world, &input_for(command));
        }
        let best = world.run.high_score;

        world.reset_game();
        // Nothing spawns before frame 70, so nothing can reach the player
        for _ in 0..after {
            tick(&mut world, &TickInput::default());
        }

        prop_assert_eq!(&world.player, &fresh.player);
        prop_assert!(world.obstacles.is_empty());
        prop_assert_eq!(world.run.frame, after);
        prop_assert_eq!(world.run.score, 0);
        prop_assert_eq!(world.run.status, RunStatus::Running);
        prop_assert_eq!(world.run.high_score, best);
    }

    #[test]
    fn same_seed_same_inputs_same_world(
        seed in any::<u64>(),
        commands in prop::collection::vec(command(), 0..600),
    ) {
        let mut a = GameWorld::with_seed(seed);
        let mut b = GameWorld::with_seed(seed);

        for command in commands {
            let input = input_for(command);
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        prop_assert_eq!(a.player, b.player);
        prop_assert_eq!(a.obstacles, b.obstacles);
        prop_assert_eq!(a.run, b.run);
    }
}
