//! Decorative particle layers and floating shapes.
//!
//! Particles are pure data: a generator rolls the cosmetic parameters
//! (position, size, opacity, animation timing) and a markup function
//! turns a batch into inline-styled elements. The engine owns the rng,
//! so a seeded run produces an identical field — which is how the tests
//! pin this down despite the randomness.

use maud::{Markup, html};
use rand::Rng;

/// One particle's cosmetic parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub opacity: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub style: ParticleStyle,
}

/// Which keyframe animation a particle rides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleStyle {
    /// Entrance field: larger, glowing, rises across the full viewport.
    Drifting,
    /// Portfolio layer: small fixed-size twinkle.
    Ambient,
}

impl ParticleStyle {
    fn animation(self) -> &'static str {
        match self {
            ParticleStyle::Drifting => "particle-drift",
            ParticleStyle::Ambient => "particle-float",
        }
    }
}

impl ParticleSpec {
    /// Entrance-field particle: size 1–4 px, opacity 0.2–1.0, 5–15 s
    /// cycles with up to 5 s of start offset.
    pub fn drifting(rng: &mut impl Rng) -> Self {
        Self {
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            size_px: rng.gen_range(1.0..4.0),
            opacity: rng.gen_range(0.2..1.0),
            duration_s: rng.gen_range(5.0..15.0),
            delay_s: rng.gen_range(0.0..5.0),
            style: ParticleStyle::Drifting,
        }
    }

    /// Portfolio-layer particle: fixed 2 px dot, 3–7 s cycles.
    pub fn ambient(rng: &mut impl Rng) -> Self {
        Self {
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            size_px: 2.0,
            opacity: 0.5,
            duration_s: rng.gen_range(3.0..7.0),
            delay_s: rng.gen_range(0.0..3.0),
            style: ParticleStyle::Ambient,
        }
    }
}

/// Viewport-sensitive particle budget.
pub fn count_for_width(width: f64, wide: u32, narrow: u32, breakpoint: f64) -> u32 {
    if width > breakpoint { wide } else { narrow }
}

pub fn entrance_field(rng: &mut impl Rng, count: u32) -> Vec<ParticleSpec> {
    (0..count).map(|_| ParticleSpec::drifting(rng)).collect()
}

pub fn portfolio_field(rng: &mut impl Rng, count: u32) -> Vec<ParticleSpec> {
    (0..count).map(|_| ParticleSpec::ambient(rng)).collect()
}

/// Inline-styled particle batch for a container's children.
pub fn field_markup(particles: &[ParticleSpec]) -> Markup {
    html! {
        @for p in particles {
            div class="particle" style=(particle_style(p)) {}
        }
    }
}

fn particle_style(p: &ParticleSpec) -> String {
    format!(
        "left: {left:.2}%; top: {top:.2}%; width: {size:.2}px; height: {size:.2}px; \
         opacity: {opacity:.2}; animation: {animation} {duration:.2}s linear infinite; \
         animation-delay: {delay:.2}s",
        left = p.left_pct,
        top = p.top_pct,
        size = p.size_px,
        opacity = p.opacity,
        animation = p.style.animation(),
        duration = p.duration_s,
        delay = p.delay_s,
    )
}

/// Decorative entrance shapes, cycling circle → triangle → square.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingShape {
    pub kind: ShapeKind,
    pub size_px: f64,
    pub left_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Triangle,
    Square,
}

impl ShapeKind {
    const CYCLE: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Triangle, ShapeKind::Square];

    fn class(self) -> &'static str {
        match self {
            ShapeKind::Circle => "shape-circle",
            ShapeKind::Triangle => "shape-triangle",
            ShapeKind::Square => "shape-square",
        }
    }
}

/// Shapes rise for 10–30 s, 20–50 px across, staggered 2 s apart.
pub fn floating_shapes(rng: &mut impl Rng, count: u32) -> Vec<FloatingShape> {
    (0..count)
        .map(|index| FloatingShape {
            kind: ShapeKind::CYCLE[index as usize % ShapeKind::CYCLE.len()],
            size_px: rng.gen_range(20.0..50.0),
            left_pct: rng.gen_range(0.0..100.0),
            duration_s: rng.gen_range(10.0..30.0),
            delay_s: f64::from(index) * 2.0,
        })
        .collect()
}

pub fn shapes_markup(shapes: &[FloatingShape]) -> Markup {
    html! {
        @for shape in shapes {
            div class={ "floating-shape " (shape.kind.class()) }
                style=(format!(
                    "left: {left:.2}%; width: {size:.2}px; height: {size:.2}px; \
                     animation-duration: {duration:.2}s; animation-delay: {delay:.2}s",
                    left = shape.left_pct,
                    size = shape.size_px,
                    duration = shape.duration_s,
                    delay = shape.delay_s,
                )) {}
        }
    }
}
