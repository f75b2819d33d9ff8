//! Integration tests for the star field lifecycle
//!
//! These tests drive generation and depth scheduling together the way the
//! frame loop does:
//! 1. Generated stars respect the depth planes and the exclusion zone
//! 2. Depths stay inside the planes for any number of ticks
//! 3. Recycling preserves the overshoot past the near plane
//! 4. Seeded generation is reproducible

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use starfield_core::{DepthScheduler, FieldGenerator, StarConfig, StarfieldError};

fn config() -> StarConfig {
    StarConfig::default()
        .with_viewport(100.0, 100.0)
        .with_depth_range(0.1, 10.0)
        .with_count(2_000)
        .with_spawn_scale(1.0)
}

// ==================== Generation Tests ====================

#[test]
fn test_no_star_spawns_in_exclusion_zone() {
    // 100x100 viewport at near 0.1: the zone is 10x10 around the origin
    let config = config();
    let generator = FieldGenerator::new(&config).unwrap();
    let field = generator.generate_seeded(config.count, 1.0, 7).unwrap();

    for star in field.stars() {
        let o = star.offset();
        assert!(
            !(o.x.abs() < 5.0 && o.y.abs() < 5.0),
            "star spawned inside exclusion zone at ({}, {})",
            o.x,
            o.y
        );
    }
}

#[test]
fn test_generation_bounds() {
    let config = config();
    let generator = FieldGenerator::new(&config).unwrap();
    let field = generator.generate_seeded(config.count, 1.0, 8).unwrap();
    let zone = config.exclusion_zone();

    for star in field.stars() {
        assert!(star.depth() >= config.near && star.depth() < config.far);
        assert!(!zone.contains(star.offset()));
    }
}

#[test]
fn test_injected_rng_is_deterministic() {
    let config = config();
    let generator = FieldGenerator::new(&config).unwrap();

    let mut rng_a = ChaCha8Rng::seed_from_u64(1234);
    let mut rng_b = ChaCha8Rng::seed_from_u64(1234);
    let a = generator.generate(500, 1.0, &mut rng_a).unwrap();
    let b = generator.generate(500, 1.0, &mut rng_b).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_degenerate_config_fails_fast() {
    let config = config().with_depth_range(1.0, 2.0);
    let generator = FieldGenerator::new(&config.with_spawn_scale(2.0)).unwrap();

    // Same planes, but a spawn area no larger than the exclusion zone
    let result = generator.generate_seeded(10, 1.0, 0);
    assert_eq!(
        result,
        Err(StarfieldError::ExclusionCoversSpawnArea { near: 1.0, scale: 1.0 })
    );
}

// ==================== Scheduling Tests ====================

#[test]
fn test_depth_invariant_over_many_ticks() {
    let config = config().with_speed(3.0);
    let generator = FieldGenerator::new(&config).unwrap();
    let mut field = generator.generate_seeded(config.count, 1.0, 9).unwrap();
    let scheduler = DepthScheduler::new(&config);

    for tick in 0..2_000 {
        scheduler.advance(&mut field, config.speed, config.frame_interval);
        for star in field.stars() {
            assert!(
                star.depth() > config.near && star.depth() <= config.far,
                "tick {}: depth {} escaped ({}, {}]",
                tick,
                star.depth(),
                config.near,
                config.far
            );
        }
    }
}

#[test]
fn test_depth_invariant_at_largest_valid_step() {
    // Step just under the depth range is the most validation accepts
    let config = config()
        .with_depth_range(1.0, 2.0)
        .with_spawn_scale(2.0)
        .with_frame_interval(0.5)
        .with_speed(1.999);
    assert!(config.validate().is_ok());
    assert!(config.with_speed(2.0).validate().is_err());

    let generator = FieldGenerator::new(&config).unwrap();
    let mut field = generator.generate_seeded(config.count, 2.0, 21).unwrap();
    let scheduler = DepthScheduler::new(&config);

    for tick in 0..3_000 {
        scheduler.advance(&mut field, config.speed, config.frame_interval);
        for star in field.stars() {
            assert!(
                star.depth() > config.near && star.depth() <= config.far,
                "tick {}: depth {} escaped ({}, {}]",
                tick,
                star.depth(),
                config.near,
                config.far
            );
        }
    }
}

#[test]
fn test_out_of_contract_inputs_keep_bounds() {
    let config = config();
    let generator = FieldGenerator::new(&config).unwrap();
    let mut field = generator.generate_seeded(200, 1.0, 22).unwrap();
    let scheduler = DepthScheduler::new(&config);

    let inputs = [
        (-1.0, 0.5),
        (1.0e9, 1.0),
        (f32::INFINITY, 1.0),
        (f32::NAN, 1.0),
        (25.0, 1.0),
        (3.0, -2.0),
    ];
    for (speed, dt) in inputs {
        scheduler.advance(&mut field, speed, dt);
        for star in field.stars() {
            assert!(
                star.depth() > config.near && star.depth() <= config.far,
                "speed {} dt {}: depth {}",
                speed,
                dt,
                star.depth()
            );
        }
    }
}

#[test]
fn test_offsets_never_change() {
    let config = config().with_speed(5.0);
    let generator = FieldGenerator::new(&config).unwrap();
    let mut field = generator.generate_seeded(config.count, 1.0, 10).unwrap();
    let before: Vec<_> = field.stars().iter().map(|s| s.offset()).collect();

    let scheduler = DepthScheduler::new(&config);
    for _ in 0..300 {
        scheduler.advance(&mut field, config.speed, config.frame_interval);
    }

    let after: Vec<_> = field.stars().iter().map(|s| s.offset()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_overshoot_preserved() {
    let config = StarConfig::default().with_depth_range(1.0, 10.0);
    let scheduler = DepthScheduler::new(&config);

    for epsilon in [0.001_f32, 0.25, 1.0, 4.5, 8.9] {
        let recycled = scheduler.recycle(config.near - epsilon);
        assert!(
            (recycled - (config.far - epsilon)).abs() < 1e-4,
            "epsilon {}: got {}",
            epsilon,
            recycled
        );
    }
}

#[test]
fn test_stationary_single_star() {
    let config = StarConfig::default()
        .with_viewport(100.0, 100.0)
        .with_count(1)
        .with_depth_range(1.0, 2.0)
        .with_speed(0.0);
    let generator = FieldGenerator::new(&config).unwrap();
    let mut field = generator.generate_seeded(1, config.spawn_scale, 11).unwrap();
    let depth = field.stars()[0].depth();

    let scheduler = DepthScheduler::new(&config);
    for _ in 0..1_000 {
        assert_eq!(scheduler.advance(&mut field, 0.0, config.frame_interval), None);
    }
    assert_eq!(field.stars()[0].depth(), depth);
}

#[test]
fn test_furthest_cursor_tracks_recycles() {
    let config = config().with_speed(2.0);
    let generator = FieldGenerator::new(&config).unwrap();
    let mut field = generator.generate_seeded(config.count, 1.0, 12).unwrap();
    let scheduler = DepthScheduler::new(&config);

    let mut seen_recycle = false;
    for _ in 0..1_000 {
        if let Some(index) = scheduler.advance(&mut field, config.speed, config.frame_interval) {
            seen_recycle = true;
            assert_eq!(field.furthest_index(), index);
            let furthest = field.stars()[index].depth();
            let max = field
                .stars()
                .iter()
                .map(|s| s.depth())
                .fold(f32::MIN, f32::max);
            assert_eq!(furthest, max);
        }
    }
    assert!(seen_recycle);
}
