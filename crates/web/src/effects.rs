// =============================================================================
// OffGriid Web - Background Particle Field
// =============================================================================
// Pure simulation behind the canvas background. Particles rest on a grid and
// spring back after being pushed by the pointer. Coordinates are in canvas
// backing-store pixels; callers scale CSS pixels by the configured resolution.
//
// Table of Contents:
// 1. Parameters
// 2. Pointer Tracking (user + auto demo)
// 3. Particle Field
// =============================================================================

use crate::config::BackgroundEffectConfig;

// -----------------------------------------------------------------------------
// 1. Parameters
// -----------------------------------------------------------------------------

/// Grid spacing between resting particles, in backing-store pixels.
pub const GRID_SPACING: f64 = 6.0;

/// Spring stiffness pulling a particle back to its rest position (1/s²).
const SPRING_K: f64 = 40.0;

/// Velocity damping coefficient (1/s). Per-step retention is `exp(-k * dt)`.
const DAMPING_K: f64 = 6.0;

/// Converts `mouse_force` into an acceleration (px/s² per unit force).
const PUSH_SCALE: f64 = 400.0;

/// Largest step integrated at once; longer frames (background tabs) are clamped.
const MAX_DT: f64 = 1.0 / 30.0;

/// Displacement (px) beyond which a particle is drawn in the brightest color.
const BRIGHT_DISPLACEMENT: f64 = 4.0;

/// Displacement (px) beyond which a particle leaves the resting color.
const LIT_DISPLACEMENT: f64 = 1.0;

// -----------------------------------------------------------------------------
// 2. Pointer Tracking
// -----------------------------------------------------------------------------

/// A force source at a position with a strength multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
    pub intensity: f64,
}

/// Chooses between the user's pointer and the auto demo.
///
/// The user takes over as soon as they move; the demo resumes after
/// `takeover_ms` without movement.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    auto_demo: bool,
    auto_speed: f64,
    auto_intensity: f64,
    takeover_ms: f64,
    last_move: Option<(f64, f64, f64)>,
}

impl PointerTracker {
    pub fn new(config: &BackgroundEffectConfig) -> Self {
        Self {
            auto_demo: config.auto_demo,
            auto_speed: config.auto_speed,
            auto_intensity: config.auto_intensity,
            takeover_ms: config.takeover_ms,
            last_move: None,
        }
    }

    /// Record a user pointer move at `(x, y)` (backing pixels) and time `at_ms`.
    pub fn moved(&mut self, x: f64, y: f64, at_ms: f64) {
        self.last_move = Some((x, y, at_ms));
    }

    /// Active force source at `now_ms` on a `width` x `height` field.
    pub fn active(&self, now_ms: f64, width: f64, height: f64) -> Option<Pointer> {
        if let Some((x, y, at)) = self.last_move {
            if now_ms - at < self.takeover_ms {
                return Some(Pointer { x, y, intensity: 1.0 });
            }
        }
        if !self.auto_demo {
            return None;
        }
        let (x, y) = auto_position(now_ms, self.auto_speed, width, height);
        Some(Pointer {
            x,
            y,
            intensity: self.auto_intensity,
        })
    }
}

/// Lissajous path swept by the auto demo pointer, kept inside the field.
pub fn auto_position(now_ms: f64, speed: f64, width: f64, height: f64) -> (f64, f64) {
    let t = now_ms / 1000.0 * speed;
    let x = width * (0.5 + 0.35 * (t * 3.0).sin());
    let y = height * (0.5 + 0.35 * (t * 2.0).cos());
    (x, y)
}

// -----------------------------------------------------------------------------
// 3. Particle Field
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub home_x: f64,
    pub home_y: f64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Particle {
    fn at(x: f64, y: f64) -> Self {
        Self {
            home_x: x,
            home_y: y,
            x,
            y,
            vx: 0.0,
            vy: 0.0,
        }
    }

    pub fn displacement(&self) -> f64 {
        (self.x - self.home_x).hypot(self.y - self.home_y)
    }
}

/// Backing-store size for a canvas laid out at `css_width` x `css_height`.
pub fn backing_size(css_width: f64, css_height: f64, resolution: f64) -> (f64, f64) {
    (
        (css_width.max(1.0) * resolution).ceil().max(1.0),
        (css_height.max(1.0) * resolution).ceil().max(1.0),
    )
}

fn lay_out(width: f64, height: f64) -> Vec<Particle> {
    let mut particles = Vec::new();
    let mut y = GRID_SPACING / 2.0;
    while y < height {
        let mut x = GRID_SPACING / 2.0;
        while x < width {
            particles.push(Particle::at(x, y));
            x += GRID_SPACING;
        }
        y += GRID_SPACING;
    }
    particles
}

/// Grid of spring-bound particles.
#[derive(Clone, Debug)]
pub struct ParticleField {
    width: f64,
    height: f64,
    mouse_force: f64,
    /// Pointer radius in backing pixels.
    radius: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Lay out a field covering `width` x `height` backing pixels.
    pub fn new(width: f64, height: f64, config: &BackgroundEffectConfig) -> Self {
        Self {
            width,
            height,
            mouse_force: config.mouse_force,
            radius: (config.cursor_size * config.resolution).max(1.0),
            particles: lay_out(width, height),
        }
    }

    /// Re-lay the grid for a new backing size. Returns false if unchanged.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        if width == self.width && height == self.height {
            return false;
        }
        self.width = width;
        self.height = height;
        self.particles = lay_out(width, height);
        true
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance the simulation by `dt` seconds under an optional pointer.
    pub fn step(&mut self, dt: f64, pointer: Option<Pointer>) {
        let dt = dt.clamp(0.0, MAX_DT);
        if dt == 0.0 {
            return;
        }
        let retain = (-DAMPING_K * dt).exp();

        for p in &mut self.particles {
            let mut ax = -SPRING_K * (p.x - p.home_x);
            let mut ay = -SPRING_K * (p.y - p.home_y);

            if let Some(pointer) = pointer {
                let dx = p.x - pointer.x;
                let dy = p.y - pointer.y;
                let distance = dx.hypot(dy);
                if distance < self.radius && distance > f64::EPSILON {
                    let falloff = 1.0 - distance / self.radius;
                    let push = self.mouse_force * pointer.intensity * PUSH_SCALE * falloff;
                    ax += dx / distance * push;
                    ay += dy / distance * push;
                }
            }

            p.vx = (p.vx + ax * dt) * retain;
            p.vy = (p.vy + ay * dt) * retain;
            p.x += p.vx * dt;
            p.y += p.vy * dt;
        }
    }
}

/// Palette index for a particle: 0 is the brightest color, the last the
/// resting color.
pub fn shade(particle: &Particle, palette_len: usize) -> usize {
    if palette_len == 0 {
        return 0;
    }
    let last = palette_len - 1;
    let d = particle.displacement();
    if d >= BRIGHT_DISPLACEMENT {
        0
    } else if d >= LIT_DISPLACEMENT {
        1.min(last)
    } else {
        last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BackgroundEffectConfig {
        BackgroundEffectConfig::default()
    }

    fn run(field: &mut ParticleField, seconds: f64, pointer: Option<Pointer>) {
        let steps = (seconds * 60.0) as usize;
        for _ in 0..steps {
            field.step(1.0 / 60.0, pointer);
        }
    }

    #[test]
    fn test_grid_covers_field() {
        let field = ParticleField::new(60.0, 30.0, &config());
        assert_eq!(field.particles().len(), 10 * 5);
        assert!(field.particles().iter().all(|p| p.x < 60.0 && p.y < 30.0));
    }

    #[test]
    fn test_backing_size_scales_and_rounds_up() {
        assert_eq!(backing_size(1280.0, 720.0, 0.2), (256.0, 144.0));
        assert_eq!(backing_size(1001.0, 3.0, 0.2), (201.0, 1.0));
        assert_eq!(backing_size(0.0, 0.0, 0.2), (1.0, 1.0));
    }

    #[test]
    fn test_resize_relays_grid() {
        let mut field = ParticleField::new(60.0, 30.0, &config());
        assert!(!field.resize(60.0, 30.0));

        assert!(field.resize(120.0, 30.0));
        assert_eq!((field.width(), field.height()), (120.0, 30.0));
        assert_eq!(field.particles().len(), 20 * 5);
        assert!(field.particles().iter().all(|p| p.displacement() == 0.0));
    }

    #[test]
    fn test_pointer_pushes_nearby_particles_only() {
        let mut field = ParticleField::new(200.0, 200.0, &config());
        let pointer = Pointer { x: 100.0, y: 100.0, intensity: 1.0 };
        field.step(1.0 / 60.0, Some(pointer));

        // Radius is cursor_size * resolution = 20px.
        for p in field.particles() {
            let from_pointer = (p.home_x - 100.0).hypot(p.home_y - 100.0);
            if from_pointer > 25.0 {
                assert_eq!(p.displacement(), 0.0);
            }
        }
        let near = field
            .particles()
            .iter()
            .find(|p| (p.home_x - 93.0).abs() < 0.1 && (p.home_y - 93.0).abs() < 0.1)
            .copied();
        let near = near.expect("particle near the pointer");
        assert!(near.x < near.home_x && near.y < near.home_y);
    }

    #[test]
    fn test_particles_settle_after_pointer_leaves() {
        let mut field = ParticleField::new(120.0, 120.0, &config());
        let pointer = Pointer { x: 60.0, y: 60.0, intensity: 1.0 };
        run(&mut field, 0.5, Some(pointer));
        let max_before = field.particles().iter().map(Particle::displacement).fold(0.0, f64::max);
        assert!(max_before > 1.0);

        run(&mut field, 5.0, None);
        let max_after = field.particles().iter().map(Particle::displacement).fold(0.0, f64::max);
        assert!(max_after < 0.01, "still displaced by {}", max_after);
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let mut a = ParticleField::new(60.0, 60.0, &config());
        let mut b = a.clone();
        let pointer = Some(Pointer { x: 30.0, y: 30.0, intensity: 1.0 });
        a.step(5.0, pointer);
        b.step(MAX_DT, pointer);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_user_pointer_takes_over_from_demo() {
        let mut tracker = PointerTracker::new(&config());
        let demo = tracker.active(1_000.0, 100.0, 100.0).expect("auto demo");
        assert_eq!(demo.intensity, 1.2);

        tracker.moved(10.0, 20.0, 1_000.0);
        let user = tracker.active(2_000.0, 100.0, 100.0).expect("user pointer");
        assert_eq!((user.x, user.y, user.intensity), (10.0, 20.0, 1.0));

        // Demo resumes after the takeover period.
        let resumed = tracker.active(4_500.0, 100.0, 100.0).expect("auto demo");
        assert_eq!(resumed.intensity, 1.2);
    }

    #[test]
    fn test_no_demo_without_auto_mode() {
        let mut cfg = config();
        cfg.auto_demo = false;
        let tracker = PointerTracker::new(&cfg);
        assert_eq!(tracker.active(1_000.0, 100.0, 100.0), None);
    }

    #[test]
    fn test_auto_position_stays_inside() {
        for i in 0..500 {
            let (x, y) = auto_position(i as f64 * 97.0, 0.2, 300.0, 200.0);
            assert!((0.0..=300.0).contains(&x));
            assert!((0.0..=200.0).contains(&y));
        }
    }

    #[test]
    fn test_shade_by_displacement() {
        let mut p = Particle::at(10.0, 10.0);
        assert_eq!(shade(&p, 3), 2);
        p.x += 2.0;
        assert_eq!(shade(&p, 3), 1);
        p.x += 5.0;
        assert_eq!(shade(&p, 3), 0);
        assert_eq!(shade(&p, 0), 0);
    }
}
