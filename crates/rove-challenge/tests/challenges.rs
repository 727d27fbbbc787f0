//! End-to-end challenge tests: generation determinism, candidate
//! filtering, and scoring against generated episodes.

use rove_challenge::{score_attempt, ChallengeGenerator, NavigationTask};
use rove_core::{Direction, ObjectId, Position};
use rove_nav::validate_path;
use rove_test_utils::SnapshotBuilder;

/// An apartment-shaped fixture: two named rooms joined by a closed door,
/// a container with something hidden inside, and loose objects.
fn apartment() -> rove_world::WorldSnapshot {
    SnapshotBuilder::from_ascii(
        "#########\n\
         #@..D111#\n\
         #...D111#\n\
         #########",
    )
    .room_name(0, "hallway")
    .room_name(1, "kitchen")
    .container(0, "wardrobe", 1, 2, 5, &[3])
    .pickable_object(1, "banana", 6, 1)
    .object(2, "couch", 3, 2)
    .pickable_object(3, "sock", 1, 2)
    .build()
}

#[test]
fn same_seed_reproduces_the_full_challenge() {
    let snap = apartment();
    let generator = ChallengeGenerator::new(&snap);
    for seed in 0..32 {
        let a = generator.generate(seed).unwrap();
        let b = generator.generate(seed).unwrap();
        assert_eq!(a, b, "seed {seed}");
    }
}

#[test]
fn clones_generate_independently() {
    let snap = apartment();
    let twin = snap.clone();
    let a = ChallengeGenerator::new(&snap).generate(5).unwrap();
    let b = ChallengeGenerator::new(&twin).generate(5).unwrap();
    assert_eq!(a, b);
}

#[test]
fn contained_objects_never_become_targets() {
    let snap = apartment();
    let generator = ChallengeGenerator::new(&snap);
    for seed in 0..64 {
        let challenge = generator.generate(seed).unwrap();
        assert_ne!(challenge.target_object, ObjectId(3), "seed {seed}");
    }
}

#[test]
fn every_generated_challenge_is_solvable_as_issued() {
    let snap = apartment();
    let generator = ChallengeGenerator::new(&snap);
    for seed in 0..32 {
        let challenge = generator.generate(seed).unwrap();
        assert!(challenge.optimal_steps >= 1, "seed {seed}");
        assert_ne!(challenge.start, challenge.target, "seed {seed}");

        let result = validate_path(&snap, challenge.start, challenge.target, &challenge.optimal_arrows);
        assert!(result.is_valid, "seed {seed}: {:?}", result.error);
        assert!(result.reached_target, "seed {seed}");
        assert_eq!(result.efficiency, Some(1.0), "seed {seed}");
    }
}

#[test]
fn cross_room_challenge_describes_the_room() {
    let snap = apartment();
    let generator = ChallengeGenerator::new(&snap);
    let banana = (0..64)
        .find_map(|seed| {
            let c = generator.generate(seed).unwrap();
            (c.target_object == ObjectId(1)).then_some(c)
        })
        .expect("some seed selects the banana");
    assert_eq!(banana.description, "Navigate to the banana in the kitchen");
    // The only way into the kitchen is through the closed door.
    assert!(banana.optimal_arrows.contains('→'));
}

#[test]
fn invalid_attempt_scores_partial_progress() {
    let snap = apartment();
    let generator = ChallengeGenerator::new(&snap);
    let banana = (0..64)
        .find_map(|seed| {
            let c = generator.generate(seed).unwrap();
            (c.target_object == ObjectId(1)).then_some(c)
        })
        .expect("some seed selects the banana");

    // Follow the ideal route for two steps, then hit the wall above.
    let mut attempt: String = banana.optimal_arrows.chars().take(2).collect();
    attempt.push('↑');
    let reward = score_attempt(&snap, &banana, &attempt);
    assert!(!reward.is_valid);
    assert_eq!(reward.efficiency, 0.0);
    let cross = reward.cross_score.unwrap();
    assert!(cross > 0.0 && cross < 1.0, "cross {cross}");
}

#[test]
fn garbage_attempt_scores_zero_cross() {
    let snap = apartment();
    let challenge = ChallengeGenerator::new(&snap).generate(3).unwrap();

    let result = validate_path(&snap, challenge.start, challenge.target, "XXXX");
    assert!(!result.is_valid);
    assert_eq!(result.steps_taken, 0);
    assert_eq!(result.final_position, challenge.start);

    let reward = score_attempt(&snap, &challenge, "XXXX");
    assert!(!reward.is_valid);
    assert_eq!(reward.efficiency, 0.0);
    assert_eq!(reward.cross_score, Some(0.0));
}

#[test]
fn task_scores_many_attempts_against_one_episode() {
    let snap = apartment();
    let task = NavigationTask::new(snap, 11).unwrap();
    let optimal = task.challenge().optimal_arrows.clone();

    let perfect = task.score(&optimal);
    assert!(perfect.is_valid);
    assert_eq!(perfect.efficiency, 1.0);
    assert_eq!(perfect.cross_score, Some(1.0));

    // Back up one step and redo it: stays on walked cells, wastes 2 moves.
    let last = Direction::from_arrow(optimal.chars().last().unwrap()).unwrap();
    let mut detour = optimal.clone();
    detour.push(last.opposite().arrow());
    detour.push(last.arrow());
    let wasteful = task.score(&detour);
    assert!(wasteful.is_valid);
    assert!(wasteful.efficiency < 1.0);
    assert_eq!(wasteful.cross_score, Some(1.0));

    let broken = task.score("↑↑↑↑↑↑↑↑↑↑");
    assert!(!broken.is_valid);
    assert_eq!(broken.efficiency, 0.0);
}

#[test]
fn agent_position_is_the_challenge_start() {
    let snap = apartment();
    let challenge = ChallengeGenerator::new(&snap).generate(0).unwrap();
    assert_eq!(challenge.start, Position::new(1, 1));
}
