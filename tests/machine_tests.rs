// Host-side tests for the transition state machine. The main crate is
// wasm-only, so we include the pure-Rust core modules directly.

#![allow(dead_code)]
mod engine {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod field {
        include!("../src/core/field.rs");
    }
    pub mod machine {
        include!("../src/core/machine.rs");
    }
    pub mod shapes {
        include!("../src/core/shapes.rs");
    }
}

use engine::constants::{FORM_MS, HOLD_MS, SCATTER_MS, SCATTER_RADIUS};
use engine::machine::{ease_in_out_cubic, MorphEngine, Phase};
use engine::shapes::{Metrics, Shape};

fn make_engine() -> MorphEngine {
    MorphEngine::new(400, Metrics::new(800.0, 600.0), 42, 0.0)
}

/// Step the engine from `from_ms` up to (and including) `to_ms` in frame-ish
/// increments, returning the final timestamp.
fn run_until(engine: &mut MorphEngine, from_ms: f64, to_ms: f64) -> f64 {
    let mut t = from_ms;
    while t < to_ms {
        t = (t + 16.0).min(to_ms);
        engine.update(t);
    }
    t
}

#[test]
fn ease_in_out_cubic_boundaries_and_monotonicity() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
    let mut prev = 0.0;
    for i in 0..=1000 {
        let v = ease_in_out_cubic(i as f64 / 1000.0);
        assert!(v >= prev, "ease not monotonic at step {i}");
        prev = v;
    }
}

#[test]
fn starts_holding_the_grid() {
    let engine = make_engine();
    assert_eq!(engine.phase(), Phase::Holding);
    assert_eq!(engine.shape_index(), 0);
    assert_eq!(engine.shape(), Shape::Grid);
    assert_eq!(engine.particles().len(), 400);
}

#[test]
fn grid_to_neuron_skips_scatter_and_forms_directly() {
    let mut engine = make_engine();
    engine.update(HOLD_MS);
    assert_eq!(engine.phase(), Phase::Holding, "left holding too early");

    engine.update(HOLD_MS + 1.0);
    assert_eq!(engine.phase(), Phase::Forming);
    assert_eq!(engine.shape(), Shape::Neuron);
}

#[test]
fn scatter_rule_across_the_whole_cycle() {
    let mut engine = make_engine();
    let mut t = 0.0;

    // grid -> neuron: direct
    t = run_until(&mut engine, t, HOLD_MS + 1.0);
    assert_eq!((engine.phase(), engine.shape()), (Phase::Forming, Shape::Neuron));
    t = run_until(&mut engine, t, t + FORM_MS + 1.0);
    assert_eq!(engine.phase(), Phase::Holding);

    // neuron -> kidney: scatters first
    t = run_until(&mut engine, t, t + HOLD_MS + 1.0);
    assert_eq!((engine.phase(), engine.shape()), (Phase::Scattering, Shape::Neuron));
    t = run_until(&mut engine, t, t + SCATTER_MS + 1.0);
    assert_eq!((engine.phase(), engine.shape()), (Phase::Forming, Shape::Kidney));
    t = run_until(&mut engine, t, t + FORM_MS + 1.0);

    // kidney -> galaxy: scatters first
    t = run_until(&mut engine, t, t + HOLD_MS + 1.0);
    assert_eq!((engine.phase(), engine.shape()), (Phase::Scattering, Shape::Kidney));
    t = run_until(&mut engine, t, t + SCATTER_MS + 1.0);
    assert_eq!((engine.phase(), engine.shape()), (Phase::Forming, Shape::Galaxy));
    t = run_until(&mut engine, t, t + FORM_MS + 1.0);

    // galaxy -> text: direct
    t = run_until(&mut engine, t, t + HOLD_MS + 1.0);
    assert_eq!((engine.phase(), engine.shape()), (Phase::Forming, Shape::Text));
    t = run_until(&mut engine, t, t + FORM_MS + 1.0);
    assert_eq!((engine.phase(), engine.shape()), (Phase::Holding, Shape::Text));

    // field size never changed along the way
    assert_eq!(engine.particles().len(), 400);
    let _ = t;
}

#[test]
fn text_shape_is_held_forever() {
    let mut engine = make_engine();
    let mut t = run_to_text_hold(&mut engine);

    for _ in 0..10 {
        t += HOLD_MS * 2.0;
        engine.update(t);
        assert_eq!(engine.phase(), Phase::Holding);
        assert_eq!(engine.shape(), Shape::Text);
    }
}

/// Drive a fresh-ish engine through the full choreography until it holds the
/// final text shape, returning the current timestamp.
fn run_to_text_hold(engine: &mut MorphEngine) -> f64 {
    let mut t = 0.0;
    for _ in 0..64 {
        if engine.phase() == Phase::Holding && engine.shape() == Shape::Text {
            return t;
        }
        t = run_until(engine, t, t + HOLD_MS + 1.0);
    }
    panic!("never reached the text hold");
}

#[test]
fn forming_completion_snaps_exactly_onto_targets() {
    let mut engine = make_engine();
    let t = run_until(&mut engine, 0.0, HOLD_MS + 1.0);
    assert_eq!(engine.phase(), Phase::Forming);
    run_until(&mut engine, t, t + FORM_MS + 1.0);
    assert_eq!(engine.phase(), Phase::Holding);
    for p in engine.particles() {
        assert_eq!(p.pos, p.target, "particle not snapped to its target");
    }
}

#[test]
fn scatter_targets_stay_in_a_small_neighbourhood() {
    let mut engine = make_engine();
    let mut t = run_until(&mut engine, 0.0, HOLD_MS + 1.0);
    t = run_until(&mut engine, t, t + FORM_MS + 1.0);
    t = run_until(&mut engine, t, t + HOLD_MS + 1.0);
    assert_eq!(engine.phase(), Phase::Scattering);
    for p in engine.particles() {
        assert!(
            p.start.distance(p.target) <= SCATTER_RADIUS + 1e-3,
            "scatter target too far: {}",
            p.start.distance(p.target)
        );
    }
    let _ = t;
}

#[test]
fn glyphs_flip_only_while_holding_the_grid() {
    let mut engine = make_engine();

    // Holding the grid: flips happen once the interval elapses
    let before: Vec<_> = engine.particles().iter().map(|p| p.glyph).collect();
    engine.update(31.0);
    let after: Vec<_> = engine.particles().iter().map(|p| p.glyph).collect();
    assert_ne!(before, after, "expected flips while holding the grid");

    // Forming the neuron: glyphs are frozen
    let mut t = run_until(&mut engine, 31.0, HOLD_MS + 1.0);
    assert_eq!(engine.phase(), Phase::Forming);
    let before: Vec<_> = engine.particles().iter().map(|p| p.glyph).collect();
    t = run_until(&mut engine, t, t + FORM_MS / 2.0);
    let after: Vec<_> = engine.particles().iter().map(|p| p.glyph).collect();
    assert_eq!(before, after, "glyphs flipped outside the grid hold");

    // Holding the neuron: still frozen (flips are grid-only)
    t = run_until(&mut engine, t, t + FORM_MS);
    assert_eq!(engine.phase(), Phase::Holding);
    let before: Vec<_> = engine.particles().iter().map(|p| p.glyph).collect();
    run_until(&mut engine, t, t + HOLD_MS / 2.0);
    let after: Vec<_> = engine.particles().iter().map(|p| p.glyph).collect();
    assert_eq!(before, after, "glyphs flipped while holding a non-grid shape");
}

#[test]
fn colors_always_match_the_current_glyph() {
    let mut engine = make_engine();
    let mut t = 0.0;
    for _ in 0..400 {
        t += 17.0;
        engine.update(t);
        for p in engine.particles() {
            assert_eq!(p.color, p.glyph.color(), "stale color after update");
        }
    }
}

#[test]
fn resize_does_not_touch_in_flight_targets() {
    let mut engine = make_engine();
    run_until(&mut engine, 0.0, HOLD_MS + 1.0);
    assert_eq!(engine.phase(), Phase::Forming);

    let before: Vec<_> = engine.particles().iter().map(|p| p.target).collect();
    engine.set_metrics(Metrics::new(1920.0, 1080.0));
    let after: Vec<_> = engine.particles().iter().map(|p| p.target).collect();
    assert_eq!(before, after, "resize regenerated targets mid-transition");
    assert_eq!(engine.metrics().width, 1920.0);
}

#[test]
fn particle_sizes_stay_in_the_narrow_band() {
    let engine = make_engine();
    for p in engine.particles() {
        assert!(p.size >= 10.0 && p.size < 13.0, "size out of band: {}", p.size);
    }
}
