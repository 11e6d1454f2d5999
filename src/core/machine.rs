// Timed transition state machine driving the particle field.
//
// The engine loops `Holding -> Scattering -> Forming -> Holding` through the
// shape cycle, with two transitions (grid to neuron, galaxy to text) skipping
// the scatter step and reforming directly. Once the final text shape is held
// the machine stops advancing and holds it indefinitely.
//
// Time is supplied by the caller as milliseconds on an arbitrary monotonic
// clock, so host-side tests can drive synthetic timelines.

use super::constants::{
    FLIPS_PER_TICK, FLIP_INTERVAL_MS, FORM_MS, HOLD_MS, SCATTER_MS, SCATTER_RADIUS,
};
use super::field::{Particle, ParticleField};
use super::shapes::{self, Metrics, Shape, GRID_INDEX, SHAPE_CYCLE, TEXT_INDEX};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Where the machine is within the current transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Holding,
    Scattering,
    Forming,
}

/// Cubic ease-in-out time remapping used for the forming phase.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

pub struct MorphEngine {
    field: ParticleField,
    metrics: Metrics,
    shape_index: usize,
    phase: Phase,
    phase_start_ms: f64,
    last_flip_ms: f64,
    rng: StdRng,
}

impl MorphEngine {
    /// Build the field on the grid silhouette, holding, at `now_ms`.
    pub fn new(count: usize, metrics: Metrics, seed: u64, now_ms: f64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let points = shapes::generate(Shape::Grid, count, &metrics, &mut rng);
        let field = ParticleField::new(&points, &mut rng);
        Self {
            field,
            metrics,
            shape_index: GRID_INDEX,
            phase: Phase::Holding,
            phase_start_ms: now_ms,
            last_flip_ms: now_ms,
            rng,
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        self.field.particles()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn shape_index(&self) -> usize {
        self.shape_index
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        SHAPE_CYCLE[self.shape_index]
    }

    #[inline]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Install fresh canvas geometry. Current interpolation targets are left
    /// in the old coordinate space on purpose; the next forming phase picks
    /// up the new metrics. Rapid resizes therefore skew briefly.
    pub fn set_metrics(&mut self, metrics: Metrics) {
        self.metrics = metrics;
    }

    /// Advance the state machine to `now_ms` and move every particle.
    pub fn update(&mut self, now_ms: f64) {
        let elapsed = now_ms - self.phase_start_ms;
        match self.phase {
            Phase::Holding => self.update_holding(now_ms, elapsed),
            Phase::Scattering => self.update_scattering(now_ms, elapsed),
            Phase::Forming => self.update_forming(now_ms, elapsed),
        }
    }

    fn update_holding(&mut self, now_ms: f64, elapsed: f64) {
        // Binary flicker, only while holding the grid
        if self.shape_index == GRID_INDEX && now_ms - self.last_flip_ms > FLIP_INTERVAL_MS {
            for _ in 0..FLIPS_PER_TICK {
                let i = self.rng.gen_range(0..self.field.len());
                self.field.particles_mut()[i].flip_glyph();
            }
            self.last_flip_ms = now_ms;
        }

        // Pin particles to their targets while holding
        for p in self.field.particles_mut() {
            p.pos = p.target;
        }

        // The text shape is held forever
        if elapsed > HOLD_MS && self.shape_index != TEXT_INDEX {
            if scatters_from(self.shape_index) {
                self.begin_scattering(now_ms);
            } else {
                self.shape_index += 1;
                self.begin_forming(now_ms);
            }
        }
    }

    fn update_scattering(&mut self, now_ms: f64, elapsed: f64) {
        // Linear interpolation; the scatter is too short to warrant easing
        let t = (elapsed / SCATTER_MS).min(1.0) as f32;
        for p in self.field.particles_mut() {
            p.pos = p.start.lerp(p.target, t);
        }
        if elapsed > SCATTER_MS {
            self.shape_index = (self.shape_index + 1) % SHAPE_CYCLE.len();
            self.begin_forming(now_ms);
        }
    }

    fn update_forming(&mut self, now_ms: f64, elapsed: f64) {
        let t = (elapsed / FORM_MS).min(1.0);
        let eased = ease_in_out_cubic(t) as f32;
        for p in self.field.particles_mut() {
            p.pos = p.start.lerp(p.target, eased);
        }
        if elapsed > FORM_MS {
            // Snap exactly onto the silhouette before holding
            for p in self.field.particles_mut() {
                p.pos = p.target;
            }
            self.phase = Phase::Holding;
            self.phase_start_ms = now_ms;
        }
    }

    /// Send every particle toward a small random neighbourhood of where it
    /// currently sits.
    fn begin_scattering(&mut self, now_ms: f64) {
        for p in self.field.particles_mut() {
            p.start = p.pos;
            let angle = self.rng.gen::<f32>() * TAU;
            let distance = self.rng.gen::<f32>() * SCATTER_RADIUS;
            p.target = p.pos + Vec2::new(angle.cos(), angle.sin()) * distance;
        }
        self.phase = Phase::Scattering;
        self.phase_start_ms = now_ms;
    }

    /// Generate the current shape's points and aim every particle at its
    /// index-aligned target.
    fn begin_forming(&mut self, now_ms: f64) {
        let targets = shapes::generate(
            SHAPE_CYCLE[self.shape_index],
            self.field.len(),
            &self.metrics,
            &mut self.rng,
        );
        for (p, &target) in self.field.particles_mut().iter_mut().zip(targets.iter()) {
            p.start = p.pos;
            p.target = target;
        }
        self.phase = Phase::Forming;
        self.phase_start_ms = now_ms;
    }
}

/// Whether leaving `shape_index` goes through the scatter step. Grid to
/// neuron and galaxy to text reform directly.
fn scatters_from(shape_index: usize) -> bool {
    !matches!(shape_index, 0 | 3)
}
