//! Ambient sand simulation behind the hero.
//!
//! The field owns a fixed pool of particles. Seeding scatters them across a
//! band at the bottom of the surface and keeps them out of an elliptical
//! hole; every frame recomputes each particle's displayed position and
//! opacity from elapsed time alone.

use std::f64::consts::TAU;

const AMP_X: f64 = 3.0;
const AMP_Y: f64 = 1.5;
const FREQ_X: f64 = 0.7;
const FREQ_Y: f64 = 1.1;
const FREQ_OPACITY: f64 = 0.9;
const PHASE_SKEW: f64 = 1.3;
const OPACITY_MID: f64 = 0.55;
const OPACITY_HALF_BAND: f64 = 0.25;
const SIZE_RANGE: (f64, f64) = (0.6, 2.2);
const SPEED_RANGE: (f64, f64) = (0.5, 1.5);

/// Normalised distance a particle lands at after being pushed out of the hole.
pub const HOLE_PUSH_FACTOR: f64 = 1.02;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    /// True when either side changed by half a CSS pixel or more.
    pub fn differs_from(self, other: Surface) -> bool {
        (self.width - other.width).abs() >= 0.5 || (self.height - other.height).abs() >= 0.5
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExclusionEllipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

impl ExclusionEllipse {
    pub fn normalized_distance(&self, x: f64, y: f64) -> f64 {
        let nx = (x - self.cx) / self.rx;
        let ny = (y - self.cy) / self.ry;
        nx.hypot(ny)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        if self.rx <= 0.0 || self.ry <= 0.0 {
            return false;
        }
        self.normalized_distance(x, y) < 1.0
    }

    /// Moves a point along its ray from the centre to just outside the rim.
    /// A point sitting exactly on the centre has no ray, so one is drawn from `rng`.
    pub fn push_outside(&self, x: f64, y: f64, rng: &mut fastrand::Rng) -> (f64, f64) {
        let mut nx = (x - self.cx) / self.rx;
        let mut ny = (y - self.cy) / self.ry;
        let mut distance = nx.hypot(ny);
        if distance < 1e-9 {
            let angle = rng.f64() * TAU;
            nx = angle.cos();
            ny = angle.sin();
            distance = 1.0;
        }
        let scale = HOLE_PUSH_FACTOR / distance;
        (
            self.cx + nx * scale * self.rx,
            self.cy + ny * scale * self.ry,
        )
    }
}

/// Hole described relative to the surface, resolved once dimensions are known.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoleSpec {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

impl HoleSpec {
    pub fn resolve(&self, surface: Surface) -> ExclusionEllipse {
        ExclusionEllipse {
            cx: self.cx * surface.width,
            cy: self.cy * surface.height,
            rx: self.rx * surface.width,
            ry: self.ry * surface.height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    /// Bottom fraction of the surface particles spawn in.
    pub spawn_band: f64,
    pub hole: Option<ExclusionEllipse>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub base_x: f64,
    pub base_y: f64,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    pub phase: f64,
    pub speed: f64,
}

pub struct ParticleField {
    surface: Surface,
    config: FieldConfig,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn seed(surface: Surface, config: FieldConfig, rng: &mut fastrand::Rng) -> Self {
        let mut field = Self {
            surface,
            config,
            particles: Vec::with_capacity(config.count),
        };
        for _ in 0..config.count {
            let particle = field.spawn(rng);
            field.particles.push(particle);
        }
        field
    }

    fn spawn(&self, rng: &mut fastrand::Rng) -> Particle {
        let band = self.config.spawn_band.clamp(0.0, 1.0);
        let Surface { width, height } = self.surface;
        let mut x = rng.f64() * width;
        let mut y = height * (1.0 - band) + rng.f64() * height * band;
        if let Some(hole) = self.config.hole {
            if hole.contains(x, y) {
                (x, y) = hole.push_outside(x, y, rng);
            }
        }
        Particle {
            base_x: x,
            base_y: y,
            x,
            y,
            size: lerp(SIZE_RANGE, rng.f64()),
            opacity: OPACITY_MID,
            phase: rng.f64() * TAU,
            speed: lerp(SPEED_RANGE, rng.f64()),
        }
    }

    /// Recomputes displayed positions and opacity for `elapsed_ms` since start.
    pub fn advance(&mut self, elapsed_ms: f64) {
        let t = elapsed_ms.max(0.0) / 1000.0;
        for p in self.particles.iter_mut() {
            let clock = t * p.speed;
            p.x = p.base_x + (clock * FREQ_X + p.phase).sin() * AMP_X;
            p.y = p.base_y + (clock * FREQ_Y + p.phase * PHASE_SKEW).cos() * AMP_Y;
            p.opacity = OPACITY_MID + (clock * FREQ_OPACITY + p.phase).sin() * OPACITY_HALF_BAND;
        }
    }

    /// Adopts new surface dimensions. Existing particles keep their bases;
    /// only later spawns see the new domain.
    pub fn resize(&mut self, surface: Surface) {
        self.surface = surface;
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

fn lerp((from, to): (f64, f64), t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hero_field(seed: u64) -> ParticleField {
        let mut rng = fastrand::Rng::with_seed(seed);
        ParticleField::seed(
            Surface { width: 300.0, height: 200.0 },
            FieldConfig {
                count: 350,
                spawn_band: 0.3,
                hole: Some(ExclusionEllipse { cx: 150.0, cy: 170.0, rx: 75.0, ry: 16.0 }),
            },
            &mut rng,
        )
    }

    #[test]
    fn seeded_pool_avoids_the_hole() {
        let field = hero_field(7);
        assert_eq!(field.particles().len(), 350);
        let inside = field
            .particles()
            .iter()
            .filter(|p| {
                let dx = (p.base_x - 150.0) / 75.0;
                let dy = (p.base_y - 170.0) / 16.0;
                dx * dx + dy * dy < 1.0
            })
            .count();
        assert_eq!(inside, 0);
    }

    #[test]
    fn particles_spawn_in_bottom_band_when_no_hole() {
        let mut rng = fastrand::Rng::with_seed(3);
        let field = ParticleField::seed(
            Surface { width: 300.0, height: 200.0 },
            FieldConfig { count: 200, spawn_band: 0.3, hole: None },
            &mut rng,
        );
        for p in field.particles() {
            assert!((0.0..=300.0).contains(&p.base_x));
            assert!((140.0..=200.0).contains(&p.base_y));
        }
    }

    #[test]
    fn push_keeps_the_ray() {
        let hole = ExclusionEllipse { cx: 0.0, cy: 0.0, rx: 10.0, ry: 5.0 };
        let mut rng = fastrand::Rng::with_seed(1);
        let (x, y) = hole.push_outside(2.0, 1.0, &mut rng);
        assert!((hole.normalized_distance(x, y) - HOLE_PUSH_FACTOR).abs() < 1e-9);
        // (2,1) normalises to (0.2, 0.2), so the pushed point stays on the diagonal.
        assert!((x / 10.0 - y / 5.0).abs() < 1e-9);
        assert!(x > 0.0 && y > 0.0);
    }

    #[test]
    fn centre_point_gets_a_random_ray() {
        let hole = ExclusionEllipse { cx: 50.0, cy: 50.0, rx: 10.0, ry: 5.0 };
        let mut rng = fastrand::Rng::with_seed(11);
        let (x, y) = hole.push_outside(50.0, 50.0, &mut rng);
        assert!(hole.normalized_distance(x, y) >= 1.0);
    }

    #[test]
    fn degenerate_hole_excludes_nothing() {
        let hole = ExclusionEllipse { cx: 0.0, cy: 0.0, rx: 0.0, ry: 5.0 };
        assert!(!hole.contains(0.0, 0.0));
    }

    #[test]
    fn motion_depends_on_elapsed_time_only() {
        let mut a = hero_field(42);
        let mut b = hero_field(42);
        // Many small frames versus one large one.
        for frame in 1..=60 {
            a.advance(frame as f64 * 16.0);
        }
        b.advance(960.0);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn displayed_values_stay_near_base() {
        let mut field = hero_field(5);
        field.advance(12_345.0);
        for p in field.particles() {
            assert!((p.x - p.base_x).abs() <= AMP_X + 1e-9);
            assert!((p.y - p.base_y).abs() <= AMP_Y + 1e-9);
            assert!(p.opacity >= OPACITY_MID - OPACITY_HALF_BAND - 1e-9);
            assert!(p.opacity <= OPACITY_MID + OPACITY_HALF_BAND + 1e-9);
        }
    }

    #[test]
    fn particles_do_not_move_in_lockstep() {
        let mut field = hero_field(9);
        field.advance(1_500.0);
        let offsets: Vec<f64> = field.particles().iter().map(|p| p.x - p.base_x).collect();
        let first = offsets[0];
        assert!(offsets.iter().any(|o| (o - first).abs() > 1e-3));
    }

    #[test]
    fn resize_keeps_existing_bases() {
        let mut field = hero_field(21);
        let before: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.base_x, p.base_y)).collect();
        field.resize(Surface { width: 1200.0, height: 800.0 });
        let after: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.base_x, p.base_y)).collect();
        assert_eq!(before, after);
        assert_eq!(field.surface(), Surface { width: 1200.0, height: 800.0 });
    }

    #[test]
    fn subpixel_jitter_is_not_a_resize() {
        let hero = Surface { width: 300.0, height: 200.0 };
        assert!(!hero.differs_from(Surface { width: 300.3, height: 199.8 }));
        assert!(hero.differs_from(Surface { width: 300.0, height: 260.0 }));
        assert!(hero.differs_from(Surface { width: 0.0, height: 0.0 }));
    }

    proptest! {
        #[test]
        fn no_particle_spawns_inside_the_hole(
            seed in any::<u64>(),
            width in 50.0f64..2000.0,
            height in 50.0f64..1000.0,
            hx in 0.0f64..1.0,
            hy in 0.5f64..1.0,
            rx in 0.01f64..0.5,
            ry in 0.01f64..0.3,
        ) {
            let surface = Surface { width, height };
            let hole = HoleSpec { cx: hx, cy: hy, rx, ry }.resolve(surface);
            let mut rng = fastrand::Rng::with_seed(seed);
            let field = ParticleField::seed(
                surface,
                FieldConfig { count: 120, spawn_band: 0.3, hole: Some(hole) },
                &mut rng,
            );
            for p in field.particles() {
                prop_assert!(hole.normalized_distance(p.base_x, p.base_y) >= 1.0);
            }
        }
    }
}
