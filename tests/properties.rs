use glam::Vec3;
use proptest::prelude::*;

use ptero_run::Tuning;
use ptero_run::sim::{
    Flyer, GamePhase, GameSession, Intents, Obstacle, ObstacleField, ScriptedRandom,
};

fn intents() -> impl Strategy<Value = Intents> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(ascend, steer_left, steer_right)| {
        Intents {
            ascend,
            steer_left,
            steer_right,
        }
    })
}

fn rock() -> impl Strategy<Value = Obstacle> {
    (-20.0f32..20.0, -12.0f32..12.0, -10.0f32..10.0, 0.1f32..4.0)
        .prop_map(|(x, y, z, size)| Obstacle::new(Vec3::new(x, y, z), size))
}

proptest! {
    #[test]
    fn flyer_stays_clamped(steps in prop::collection::vec(intents(), 1..400)) {
        let mut flyer = Flyer::default();
        for step in &steps {
            flyer.update(step, 1.0 / 60.0);
            prop_assert!(flyer.velocity.y >= -0.2 && flyer.velocity.y <= 0.2);
            prop_assert!(flyer.position.y >= -10.0 && flyer.position.y <= 10.0);
        }
    }

    #[test]
    fn collision_ignores_order(
        rocks in prop::collection::vec(rock(), 0..12),
        x in -5.0f32..5.0,
        y in -5.0f32..5.0,
    ) {
        let mut flyer = Flyer::default();
        flyer.position = Vec3::new(x, y, 0.0);
        let forward = flyer.check_collision(&rocks);

        let mut reversed = rocks.clone();
        reversed.reverse();
        prop_assert_eq!(forward, flyer.check_collision(&reversed));

        let mut rotated = rocks.clone();
        if !rotated.is_empty() {
            rotated.rotate_left(rocks.len() / 2);
        }
        prop_assert_eq!(forward, flyer.check_collision(&rotated));
    }

    #[test]
    fn score_counts_whole_seconds(quarters in prop::collection::vec(1u32..8, 1..80)) {
        // Multiples of 0.25 are exact in f32
        let mut session = GameSession::with_rng(&Tuning::default(), ScriptedRandom::new(vec![0.5]));
        let mut total = 0u32;
        let mut last_score = 0;
        for q in quarters {
            let dt = q as f32 * 0.25;
            let before = total;
            total += q;
            session.tick(&Intents::default(), dt);

            let crossed = total / 4 > before / 4;
            prop_assert_eq!(session.score(), last_score + crossed as u64);
            last_score = session.score();
            if session.phase() == GamePhase::GameOver {
                break;
            }
        }
    }

    #[test]
    fn difficulty_stays_bounded(dts in prop::collection::vec(0.0f32..200.0, 1..600)) {
        let mut field = ObstacleField::default();
        let mut rng = ScriptedRandom::new(vec![0.1, 0.9, 0.5, 0.3]);
        let view = Vec3::new(0.0, 0.0, 5.0);
        let mut interval = field.spawn_interval();
        let mut difficulty = field.difficulty();
        for dt in dts {
            field.update(dt, view, &mut rng);
            prop_assert!((20.0..=60.0).contains(&field.spawn_interval()));
            prop_assert!((1.0..=3.0).contains(&field.difficulty()));
            prop_assert!(field.spawn_interval() <= interval);
            prop_assert!(field.difficulty() >= difficulty);
            interval = field.spawn_interval();
            difficulty = field.difficulty();
        }
        for rock in field.live_obstacles() {
            prop_assert!(rock.position.z <= view.z + 10.0);
            prop_assert!(rock.size >= 1.0);
            prop_assert!((rock.bounding_radius - rock.size * 1.2).abs() < 1e-4);
        }
    }

    #[test]
    fn game_over_is_frozen(steps in prop::collection::vec((intents(), 0.0f32..2.0), 1..50)) {
        let mut session = GameSession::with_rng(&Tuning::default(), ScriptedRandom::new(vec![0.5]));
        session.field_mut().insert(Obstacle::new(Vec3::new(0.0, 0.0, -1.0), 1.0));
        session.tick(&Intents::default(), 0.1);
        prop_assert!(session.is_game_over());

        let frozen = session.snapshot();
        for (step, dt) in &steps {
            session.tick(step, *dt);
        }
        prop_assert_eq!(session.snapshot(), frozen);
    }
}
