// Silhouette point synthesis for the morphing binary field.
//
// Each generator maps a shape identifier plus a particle count and canvas
// metrics to an ordered point list. The list always comes back with exactly
// `count` entries: short lists are padded by cycling what was produced, and
// an empty list falls back to the canvas center, so callers can zip points
// against the particle array by index without bounds checks.
//
// Coordinates carry intentional randomized jitter for organic texture; the
// output is not required to be reproducible across calls.

use super::constants::SCALE_FACTOR;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

/// Target silhouettes the field can morph into.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Shape {
    Grid,
    Neuron,
    Kidney,
    Galaxy,
    Text,
    /// Loose annulus around the center; a "no target" filler, never part of
    /// the main cycle.
    Scattered,
}

/// The fixed shape sequence, traversed front to back.
pub const SHAPE_CYCLE: [Shape; 5] = [
    Shape::Grid,
    Shape::Neuron,
    Shape::Kidney,
    Shape::Galaxy,
    Shape::Text,
];

pub const GRID_INDEX: usize = 0;
pub const TEXT_INDEX: usize = SHAPE_CYCLE.len() - 1;

/// Canvas geometry the generators work in. `scale` is the shared size unit
/// for every silhouette.
#[derive(Clone, Copy, Debug)]
pub struct Metrics {
    pub width: f32,
    pub height: f32,
    pub center: Vec2,
    pub scale: f32,
}

impl Metrics {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            center: Vec2::new(width * 0.5, height * 0.5),
            scale: width.min(height) * SCALE_FACTOR,
        }
    }
}

/// Generate exactly `count` target points for `shape`.
pub fn generate(shape: Shape, count: usize, m: &Metrics, rng: &mut impl Rng) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(count);
    match shape {
        Shape::Grid => grid_points(&mut points, count, m),
        Shape::Neuron => neuron_points(&mut points, count, m, rng),
        Shape::Kidney => kidney_points(&mut points, count, m, rng),
        Shape::Galaxy => galaxy_points(&mut points, count, m, rng),
        Shape::Text => text_points(&mut points, count, m, rng),
        Shape::Scattered => scattered_points(&mut points, count, m, rng),
    }
    pad_to_count(&mut points, count, m.center);
    points
}

/// Cycle existing points until the list is exactly `count` long. An empty
/// list degrades to the fallback point rather than an out-of-range fault.
fn pad_to_count(points: &mut Vec<Vec2>, count: usize, fallback: Vec2) {
    points.truncate(count);
    if points.is_empty() && count > 0 {
        points.push(fallback);
    }
    let mut i = 0;
    while points.len() < count {
        let p = points[i];
        points.push(p);
        i += 1;
    }
}

/// Uniform per-axis jitter in `[-amount/2, amount/2)`.
fn jitter(rng: &mut impl Rng, amount: f32) -> Vec2 {
    Vec2::new(
        (rng.gen::<f32>() - 0.5) * amount,
        (rng.gen::<f32>() - 0.5) * amount,
    )
}

// ---------------- grid ----------------

/// Near-square lattice over `[center - scale, center + scale]` on both axes.
fn grid_points(out: &mut Vec<Vec2>, count: usize, m: &Metrics) {
    let cols = (count as f32).sqrt().ceil() as usize;
    let spacing = m.scale * 2.0 / cols as f32;
    for i in 0..count {
        let col = (i % cols) as f32;
        let row = (i / cols) as f32;
        out.push(Vec2::new(
            m.center.x - m.scale + col * spacing + spacing / 2.0,
            m.center.y - m.scale + row * spacing + spacing / 2.0,
        ));
    }
}

// ---------------- neuron ----------------

// Dendrite trunks leaving the left side of the soma: (angle as a multiple of
// pi, trunk length in neuron units, number of randomized sub-branches).
const DENDRITES: [(f32, f32, usize); 5] = [
    (0.85, 0.5, 3),
    (1.0, 0.55, 4),
    (1.15, 0.45, 3),
    (0.7, 0.4, 2),
    (1.3, 0.4, 2),
];

// Axon terminal directions (radians around the axon tip).
const TERMINALS: [f32; 6] = [-0.4, -0.15, 0.1, 0.35, 0.5, -0.5];

/// Composite neuron silhouette: soma + nucleus ellipses, branching dendrites
/// on one side, a sinusoidal axon with terminal bulbs on the other. 70% of
/// particles trace the outline, the rest fill the soma interior.
fn neuron_points(out: &mut Vec<Vec2>, count: usize, m: &Metrics, rng: &mut impl Rng) {
    let nsc = m.scale * 0.9;
    let soma = m.center + Vec2::new(-nsc * 0.1, 0.0);
    let soma_radius = Vec2::new(nsc * 0.18, nsc * 0.22);
    let mut outline: Vec<Vec2> = Vec::new();

    // Soma outline
    let mut a = 0.0f32;
    while a < TAU {
        outline.push(soma + Vec2::new(a.cos() * soma_radius.x, a.sin() * soma_radius.y));
        a += 0.1;
    }

    // Nucleus inside the soma
    let nucleus_radius = nsc * 0.08;
    let mut a = 0.0f32;
    while a < TAU {
        outline.push(soma + Vec2::new(a.cos(), a.sin()) * nucleus_radius);
        a += 0.2;
    }

    // Dendrites, each a trunk with a few randomized sub-branches
    for &(angle_pi, length, branches) in DENDRITES.iter() {
        let angle = PI * angle_pi;
        let dir = Vec2::new(angle.cos(), angle.sin());
        let root = soma + Vec2::new(angle.cos() * soma_radius.x, angle.sin() * soma_radius.y);

        for step in 0..=20 {
            let t = step as f32 * 0.05;
            outline.push(root + dir * (nsc * length * t));
        }

        for b in 0..branches {
            let along = 0.3 + (b as f32 / branches as f32) * 0.6;
            let branch_angle = angle + (rng.gen::<f32>() - 0.5) * 0.8;
            let branch_len = 0.15 + rng.gen::<f32>() * 0.1;
            let base = root + dir * (nsc * length * along);
            let branch_dir = Vec2::new(branch_angle.cos(), branch_angle.sin());
            for step in 0..=10 {
                let t = step as f32 * 0.1;
                outline.push(base + branch_dir * (nsc * branch_len * t));
            }
        }
    }

    // Axon hillock: a slight bulge where the axon meets the soma
    let axon_start = soma + Vec2::new(soma_radius.x, 0.0);
    for step in -3..=3 {
        let a = step as f32 * 0.1;
        outline.push(axon_start + Vec2::new(nsc * 0.03, a * nsc * 0.1));
    }

    // Main axon, gently sinusoidal
    for step in 0..=50 {
        let t = step as f32 * 0.02;
        let curve = (t * TAU).sin() * 0.03;
        outline.push(axon_start + Vec2::new(t * nsc * 0.7, curve * nsc));
    }

    // Terminal branches fanning out from the axon tip, each ending in a bulb
    let axon_end = axon_start + Vec2::new(nsc * 0.7, 0.0);
    for &angle in TERMINALS.iter() {
        for step in 0..=10 {
            let t = step as f32 * 0.1;
            outline.push(
                axon_end
                    + Vec2::new(
                        t * nsc * 0.15 * angle.cos(),
                        t * nsc * 0.15 * angle.sin() + t * nsc * 0.08,
                    ),
            );
        }
        let bulb = axon_end
            + Vec2::new(
                nsc * 0.15 * angle.cos(),
                nsc * 0.15 * angle.sin() + nsc * 0.08,
            );
        let mut a = 0.0f32;
        while a < TAU {
            outline.push(bulb + Vec2::new(a.cos(), a.sin()) * (nsc * 0.025));
            a += 0.4;
        }
    }

    let on_outline = (count as f32 * 0.7) as usize;
    for i in 0..count {
        if i < on_outline {
            let pt = outline[i % outline.len()];
            out.push(pt + jitter(rng, nsc * 0.02));
        } else {
            // Uniform-ish fill of the soma interior
            let angle = rng.gen::<f32>() * TAU;
            let r = rng.gen::<f32>() * 0.85;
            out.push(soma + Vec2::new(angle.cos() * soma_radius.x * r, angle.sin() * soma_radius.y * r));
        }
    }
}

// ---------------- kidney ----------------

// Hilum notch: raised-cosine indent of the bean outline, centered on the
// inner side, within this angular half-width.
const HILUM_HALF_WIDTH: f32 = 0.8;
const HILUM_DEPTH: f32 = 0.35;

/// Maximum normalized radius at wrapped angular distance `d` from the hilum.
fn hilum_capped_radius(d: f32) -> f32 {
    if d < HILUM_HALF_WIDTH {
        1.0 - (d * PI / 1.6).cos() * HILUM_DEPTH
    } else {
        1.0
    }
}

fn wrapped_angle_dist(a: f32, b: f32) -> f32 {
    let d = (a - b).abs();
    d.min(TAU - d)
}

/// Closed bean outline: unit circle with the hilum indent plus a 3-theta
/// ripple, stretched by `radii` and optionally x-mirrored.
fn kidney_outline(center: Vec2, radii: Vec2, flip_x: bool) -> Vec<Vec2> {
    let samples = 60;
    let hilum_angle = if flip_x { 0.0 } else { PI };
    let sx = if flip_x { -1.0 } else { 1.0 };
    (0..samples)
        .map(|i| {
            let t = i as f32 / samples as f32 * TAU;
            let d = wrapped_angle_dist(t, hilum_angle);
            let r = hilum_capped_radius(d) + (t * 3.0).sin() * 0.05;
            center + Vec2::new(t.cos() * radii.x * r * sx, t.sin() * radii.y * r)
        })
        .collect()
}

/// Two bean silhouettes side by side, hilum notches facing each other. Each
/// bean gets half the particles, split between outline-with-jitter and an
/// interior fill that respects the hilum radius cap.
fn kidney_points(out: &mut Vec<Vec2>, count: usize, m: &Metrics, rng: &mut impl Rng) {
    let per_side = count / 2;
    let radii = Vec2::new(m.scale * 0.35, m.scale * 0.55);
    let offsets = [-m.scale * 0.55, m.scale * 0.55];

    for (side, &dx) in offsets.iter().enumerate() {
        let flip_x = side == 1;
        let center = m.center + Vec2::new(dx, 0.0);
        let outline = kidney_outline(center, radii, flip_x);
        let hilum_angle = if flip_x { 0.0 } else { PI };
        let sx = if flip_x { -1.0 } else { 1.0 };
        let on_outline = (per_side as f32 * 0.5) as usize;

        for i in 0..per_side {
            if i < on_outline {
                let pt = outline[i % outline.len()];
                out.push(pt + jitter(rng, m.scale * 0.03));
            } else {
                // Interior fill, capped so nothing lands inside the notch
                let angle = rng.gen::<f32>() * TAU;
                let r = rng.gen::<f32>() * 0.8;
                let max_r = hilum_capped_radius(wrapped_angle_dist(angle, hilum_angle));
                let final_r = r * max_r;
                out.push(
                    center
                        + Vec2::new(
                            angle.cos() * radii.x * final_r * sx,
                            angle.sin() * radii.y * final_r,
                        ),
                );
            }
        }
    }
}

// ---------------- galaxy ----------------

const GALAXY_ARMS: usize = 2;
const GALAXY_ROTATIONS: f32 = 1.5;
// Inclination flattening applied to every y offset
const GALAXY_Y_FLATTEN: f32 = 0.5;

/// Spiral galaxy: a dense Gaussian-ish bulge plus two arms whose radius grows
/// linearly with progress and whose spread widens toward the rim.
fn galaxy_points(out: &mut Vec<Vec2>, count: usize, m: &Metrics, rng: &mut impl Rng) {
    let arm_count = (count as f32 * 0.7) as usize;
    let core_count = count - arm_count;

    for _ in 0..core_count {
        let angle = rng.gen::<f32>() * TAU;
        let r = m.scale * 0.25 * (-2.0 * (rng.gen::<f32>() + 0.01).ln()).sqrt();
        let core_r = r.min(m.scale * 0.3);
        out.push(
            m.center + Vec2::new(angle.cos() * core_r, angle.sin() * core_r * GALAXY_Y_FLATTEN),
        );
    }

    for i in 0..arm_count {
        let arm = i % GALAXY_ARMS;
        let progress = (i / GALAXY_ARMS) as f32 / (arm_count as f32 / GALAXY_ARMS as f32);

        let arm_offset = arm as f32 / GALAXY_ARMS as f32 * TAU;
        let theta = progress * TAU * GALAXY_ROTATIONS + arm_offset;
        let r = m.scale * (0.15 + progress * 0.85);

        // Arms widen toward the outer edge
        let spread = 0.05 + progress * 0.15;
        let spread_x = (rng.gen::<f32>() - 0.5) * m.scale * spread;
        let spread_y = (rng.gen::<f32>() - 0.5) * m.scale * spread * GALAXY_Y_FLATTEN;

        out.push(
            m.center
                + Vec2::new(
                    theta.cos() * r + spread_x,
                    theta.sin() * r * GALAXY_Y_FLATTEN + spread_y,
                ),
        );
    }
}

// ---------------- text ----------------

const TEXT_TOP: &str = "REAL";
const TEXT_BOTTOM: &str = "AI";
const LETTER_WIDTH: usize = 5;
const LETTER_HEIGHT: usize = 7;
const LETTER_SPACING: usize = 1;
const LINE_SPACING: usize = 2;
// Cell size as a fraction of the scale unit (compact text block)
const TEXT_CELL_SCALE: f32 = 0.045;

type LetterPattern = [[u8; LETTER_WIDTH]; LETTER_HEIGHT];

#[rustfmt::skip]
fn letter_pattern(c: char) -> Option<&'static LetterPattern> {
    const R: LetterPattern = [
        [1, 1, 1, 1, 0],
        [1, 0, 0, 0, 1],
        [1, 0, 0, 0, 1],
        [1, 1, 1, 1, 0],
        [1, 0, 1, 0, 0],
        [1, 0, 0, 1, 0],
        [1, 0, 0, 0, 1],
    ];
    const E: LetterPattern = [
        [1, 1, 1, 1, 1],
        [1, 0, 0, 0, 0],
        [1, 0, 0, 0, 0],
        [1, 1, 1, 1, 0],
        [1, 0, 0, 0, 0],
        [1, 0, 0, 0, 0],
        [1, 1, 1, 1, 1],
    ];
    const A: LetterPattern = [
        [0, 0, 1, 0, 0],
        [0, 1, 0, 1, 0],
        [1, 0, 0, 0, 1],
        [1, 0, 0, 0, 1],
        [1, 1, 1, 1, 1],
        [1, 0, 0, 0, 1],
        [1, 0, 0, 0, 1],
    ];
    const L: LetterPattern = [
        [1, 0, 0, 0, 0],
        [1, 0, 0, 0, 0],
        [1, 0, 0, 0, 0],
        [1, 0, 0, 0, 0],
        [1, 0, 0, 0, 0],
        [1, 0, 0, 0, 0],
        [1, 1, 1, 1, 1],
    ];
    const I: LetterPattern = [
        [1, 1, 1, 1, 1],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [1, 1, 1, 1, 1],
    ];
    match c {
        'R' => Some(&R),
        'E' => Some(&E),
        'A' => Some(&A),
        'L' => Some(&L),
        'I' => Some(&I),
        _ => None,
    }
}

fn line_width_cells(text: &str) -> usize {
    text.len() * (LETTER_WIDTH + LETTER_SPACING) - LETTER_SPACING
}

/// Push the "on" cells of `text` laid out at `(start_x, top_y)` (cell units).
fn push_line_cells(cells: &mut Vec<Vec2>, text: &str, start_x: f32, top_y: f32) {
    for (i, c) in text.chars().enumerate() {
        let Some(pattern) = letter_pattern(c) else {
            continue;
        };
        let offset_x = start_x + (i * (LETTER_WIDTH + LETTER_SPACING)) as f32;
        for (row, cols) in pattern.iter().enumerate() {
            for (col, &on) in cols.iter().enumerate() {
                if on != 0 {
                    cells.push(Vec2::new(offset_x + col as f32, top_y + row as f32));
                }
            }
        }
    }
}

/// Two centered text lines rendered from 5x7 bitmap glyphs; particles are
/// spread cyclically across all "on" cells with a little per-particle jitter.
fn text_points(out: &mut Vec<Vec2>, count: usize, m: &Metrics, rng: &mut impl Rng) {
    let total_height = (LETTER_HEIGHT * 2 + LINE_SPACING) as f32;
    let top_y = -total_height / 2.0;
    let bottom_y = top_y + (LETTER_HEIGHT + LINE_SPACING) as f32;

    let mut cells = Vec::new();
    push_line_cells(&mut cells, TEXT_TOP, -(line_width_cells(TEXT_TOP) as f32) / 2.0, top_y);
    push_line_cells(
        &mut cells,
        TEXT_BOTTOM,
        -(line_width_cells(TEXT_BOTTOM) as f32) / 2.0,
        bottom_y,
    );
    if cells.is_empty() {
        return; // pad_to_count falls back to the center
    }

    let cell = m.scale * TEXT_CELL_SCALE;
    for i in 0..count {
        let pt = cells[i % cells.len()];
        out.push(m.center + pt * cell + jitter(rng, cell * 0.3));
    }
}

// ---------------- scattered ----------------

/// Uniform random points in a loose annulus around the center.
fn scattered_points(out: &mut Vec<Vec2>, count: usize, m: &Metrics, rng: &mut impl Rng) {
    for _ in 0..count {
        let angle = rng.gen::<f32>() * TAU;
        let r = m.scale * (0.5 + rng.gen::<f32>() * 1.2);
        out.push(m.center + Vec2::new(angle.cos(), angle.sin()) * r);
    }
}
