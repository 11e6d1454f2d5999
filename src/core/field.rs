// Particle records for the morphing binary field.
//
// These types intentionally avoid referencing platform-specific APIs and are
// suitable for use on both native and web targets. The field is created once
// and its length and ordering never change; a particle's index is the
// correspondence key into every generated shape's point list.

use super::constants::{COLOR_ONE, COLOR_ZERO, GLYPH_SIZE_MIN, GLYPH_SIZE_SPAN};
use glam::Vec2;
use rand::prelude::*;

/// The character a particle renders as.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Glyph {
    Zero,
    One,
}

impl Glyph {
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.gen::<f32>() > 0.5 {
            Glyph::One
        } else {
            Glyph::Zero
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Glyph::Zero => Glyph::One,
            Glyph::One => Glyph::Zero,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Glyph::Zero => "0",
            Glyph::One => "1",
        }
    }

    /// Draw color derived from the glyph (1 = light blue, 0 = dark blue).
    pub fn color(self) -> &'static str {
        match self {
            Glyph::Zero => COLOR_ZERO,
            Glyph::One => COLOR_ONE,
        }
    }
}

/// One animated glyph. `start`/`target` are the endpoints of the active
/// transition; `pos` is what gets drawn.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub start: Vec2,
    pub target: Vec2,
    pub glyph: Glyph,
    pub color: &'static str,
    pub size: f32,
}

impl Particle {
    fn new(pos: Vec2, rng: &mut impl Rng) -> Self {
        let glyph = Glyph::random(rng);
        Self {
            pos,
            start: pos,
            target: pos,
            glyph,
            color: glyph.color(),
            size: GLYPH_SIZE_MIN + rng.gen::<f32>() * GLYPH_SIZE_SPAN,
        }
    }

    /// Toggle the glyph and keep the derived color in sync.
    pub fn flip_glyph(&mut self) {
        self.glyph = self.glyph.flipped();
        self.color = self.glyph.color();
    }
}

/// Fixed-size particle array; index order is stable for the field's lifetime.
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Spawn one particle per point, in point order.
    pub fn new(points: &[Vec2], rng: &mut impl Rng) -> Self {
        let particles = points.iter().map(|&p| Particle::new(p, rng)).collect();
        Self { particles }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}
