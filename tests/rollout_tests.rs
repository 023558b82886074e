//! Rollout integration tests.

use camel_odds::{random_board, Board, Colour, RaceAction, RaceRng, Rollout, ScriptedPolicy, SimConfig, UniformPolicy};

// =============================================================================
// Termination
// =============================================================================

#[test]
fn test_rollout_terminates_on_random_boards() {
    let config = SimConfig {
        max_start_position: 8,
        all_movable: false,
        ..SimConfig::default()
    };
    let rollout = Rollout::from_config(&config);
    let mut rng = RaceRng::new(2024);

    for _ in 0..2_000 {
        let start = random_board(&config, &mut rng);
        let waiting = start.movable_colours().len() as u32;

        let (finished, stats) = rollout.run_with_stats(start, &mut rng);

        assert_eq!(stats.moves, waiting);
        assert!(finished.movable_colours().is_empty());
        assert_eq!(finished.competitor_count(), 5);
        assert!(finished.stacks_contiguous());
    }
}

#[test]
fn test_always_placing_policy_still_terminates() {
    let mut policy = UniformPolicy::from_config(&SimConfig::default());
    policy.marker_probability = 1.0;
    let rollout = Rollout::new(policy);
    let mut rng = RaceRng::new(6);

    for _ in 0..200 {
        let board: Board = "g.b.o.y.w".parse().unwrap();
        let (finished, stats) = rollout.run_with_stats(board, &mut rng);
        assert_eq!(stats.moves, 5);
        assert!(stats.markers_placed > 0);
        assert!(finished.movable_colours().is_empty());
    }
}

#[test]
fn test_nothing_to_move() {
    let board: Board = "g!.b!".parse().unwrap();
    let mut rng = RaceRng::new(1);
    let (finished, stats) = Rollout::from_config(&SimConfig::default()).run_with_stats(board.clone(), &mut rng);

    assert_eq!(stats.moves, 0);
    assert_eq!(stats.markers_placed, 0);
    assert_eq!(finished, board);
}

#[test]
fn test_empty_board() {
    let mut rng = RaceRng::new(1);
    let finished = Rollout::from_config(&SimConfig::default()).run(Board::new(), &mut rng);
    assert_eq!(finished.leader(None), None);
}

// =============================================================================
// Scenario
// =============================================================================

#[test]
fn test_three_camels_three_moves() {
    let config = SimConfig::default().with_explore_markers(false);
    let rollout = Rollout::from_config(&config);
    let mut rng = RaceRng::new(77);

    for _ in 0..500 {
        let start: Board = "g.b.o".parse().unwrap();
        let (finished, stats) = rollout.run_with_stats(start, &mut rng);

        assert_eq!(stats.moves, 3);
        assert!(finished.movable_colours().is_empty());
        for camel in finished.competitors() {
            assert!((1..=5).contains(&camel.position), "{}", finished);
        }
        assert!(finished.leader(None).is_some());
        assert!(finished.runner_up().is_some());
    }
}

#[test]
fn test_fixed_roll_of_two() {
    let config = SimConfig::default().with_rolls(2, 2).with_explore_markers(false);
    let rollout = Rollout::from_config(&config);
    let mut rng = RaceRng::new(31);
    let start: Board = "g.b.o".parse().unwrap();

    for _ in 0..300 {
        let (finished, stats) = rollout.run_with_stats(start.clone(), &mut rng);
        assert_eq!(stats.moves, 3);

        // Each camel rolls 2 once and is carried by at most two others
        for camel in finished.competitors() {
            let before = start.competitor(camel.colour).unwrap().position;
            let moved = camel.position - before;
            assert!([2, 4, 6].contains(&moved), "{} moved {} in {}", camel.colour, moved, finished);
        }
        assert!(finished.stacks_contiguous());
    }
}

#[test]
fn test_fixed_roll_on_spread_camels() {
    // Green 0 -> 3, blue 4 -> 7, white 8 -> 11: nobody meets anybody
    let config = SimConfig::default().with_rolls(3, 3).with_explore_markers(false);
    let rollout = Rollout::from_config(&config);
    let mut rng = RaceRng::new(4);

    for _ in 0..50 {
        let finished = rollout.run("g....b....w".parse().unwrap(), &mut rng);
        assert_eq!(finished.competitor(Colour::Green).unwrap().standing(), (3, 0));
        assert_eq!(finished.competitor(Colour::Blue).unwrap().standing(), (7, 0));
        assert_eq!(finished.competitor(Colour::White).unwrap().standing(), (11, 0));
    }
}

#[test]
fn test_scripted_leg() {
    let policy = ScriptedPolicy::new([
        RaceAction::Move { colour: Colour::Orange, roll: 1 },
        RaceAction::Move { colour: Colour::Green, roll: 3 },
        RaceAction::Move { colour: Colour::Blue, roll: 2 },
    ]);
    let mut rng = RaceRng::new(0);
    let finished = Rollout::new(policy).run("g.b.o".parse().unwrap(), &mut rng);

    // Orange 2 -> 3. Green 0 -> 3 on orange. Blue 1 -> 3 on green.
    let stack: Vec<Colour> = finished.stack(3).iter().map(|c| c.colour).collect();
    assert_eq!(stack, vec![Colour::Orange, Colour::Green, Colour::Blue]);
    assert_eq!(finished.leader(None), Some(Colour::Blue));
    assert_eq!(finished.runner_up(), Some(Colour::Green));
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_leg() {
    let config = SimConfig::default();
    let rollout = Rollout::from_config(&config);
    let start: Board = "gb.o..y.w".parse().unwrap();

    for seed in 0..20 {
        let a = rollout.run(start.clone(), &mut RaceRng::new(seed));
        let b = rollout.run(start.clone(), &mut RaceRng::new(seed));
        assert_eq!(a, b);
    }
}
