//! Shared scene builders for the benchmark harnesses.

use glam::Vec2;
use tumble::{Body, Engine, EngineConfig, Manifold, NarrowPhase, PairTable, SatDetector, World};

/// Grid of unit circles with slight overlap between neighbors.
pub fn setup_circle_world(n: usize) -> World {
    let mut world = World::new();
    let cols = (n as f32).sqrt().ceil() as usize;
    for i in 0..n {
        let x = (i % cols) as f32 * 0.9;
        let y = (i / cols) as f32 * 0.9;
        world.add_body(Body::circle(Vec2::new(x, y), 0.5));
    }
    world
}

/// Alternating circles and boxes of varying size on a loose grid.
pub fn setup_mixed_world(n: usize) -> World {
    let mut world = World::new();
    let cols = (n as f32).sqrt().ceil() as usize;
    for i in 0..n {
        let x = (i % cols) as f32 * 1.4;
        let y = (i / cols) as f32 * 1.4;
        let position = Vec2::new(x, y);
        let body = if i % 2 == 0 {
            Body::circle(position, 0.4 + (i % 5) as f32 * 0.1)
        } else {
            Body::rectangle(position, 0.8 + (i % 3) as f32 * 0.3, 0.8)
        };
        world.add_body(body);
    }
    world
}

/// Bodies spread far enough apart that nothing overlaps.
pub fn setup_sparse_world(n: usize) -> World {
    let mut world = World::new();
    let cols = (n as f32).sqrt().ceil() as usize;
    for i in 0..n {
        let x = (i % cols) as f32 * 10.0;
        let y = (i / cols) as f32 * 10.0;
        world.add_body(Body::circle(Vec2::new(x, y), 0.5));
    }
    world
}

/// Floor plus `n` boxes raining down in loose columns, with an engine.
pub fn setup_scene(n: usize) -> (World, Engine) {
    let mut world = World::new();
    let mut floor = Body::rectangle(Vec2::new(0.0, -0.5), 200.0, 1.0);
    floor.set_static();
    world.add_body(floor);

    let cols = 20;
    for i in 0..n {
        let x = (i % cols) as f32 * 1.2 - 12.0;
        let y = 0.6 + (i / cols) as f32 * 1.2;
        world.add_body(Body::rectangle(Vec2::new(x, y), 1.0, 1.0));
    }

    (world, Engine::new(EngineConfig::default()))
}

/// `n` overlapping body pairs with their manifolds, for solver benches.
pub fn setup_contacts(n: usize) -> (World, PairTable, Vec<Manifold>) {
    let mut world = World::new();
    let detector = SatDetector::new();
    let mut manifolds = Vec::with_capacity(n);

    for i in 0..n {
        let x = i as f32 * 5.0;
        let a = world.add_body(Body::rectangle(Vec2::new(x, 0.0), 1.0, 1.0));
        let b = world.add_body(Body::rectangle(Vec2::new(x + 0.8, 0.0), 1.0, 1.0));
        let (body_a, body_b) = (world.body(a).unwrap(), world.body(b).unwrap());
        if let Some(m) = detector.test(body_a, body_b) {
            manifolds.push(m);
        }
    }

    let mut pairs = PairTable::new();
    pairs.update(manifolds.clone(), 0.0);
    (world, pairs, manifolds)
}
