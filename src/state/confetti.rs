//! Particle model behind the display's confetti burst. Positions are in canvas
//! pixels; one `step` is one animation frame.

pub const PARTICLE_COUNT: usize = 100;
/// Cone width in degrees around straight up.
pub const SPREAD_DEG: f64 = 70.0;
/// Vertical launch point as a fraction of canvas height.
pub const ORIGIN_Y: f64 = 0.6;
/// Frames a particle lives for.
pub const LIFETIME_FRAMES: u32 = 200;

const START_VELOCITY: f64 = 45.0;
const DECAY: f64 = 0.9;
const GRAVITY: f64 = 3.0;

pub const COLORS: [&str; 7] = [
    "#26ccff", "#a25afd", "#ff5e7e", "#88ff5a", "#fcff42", "#ffa62d", "#ff36ff",
];

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub tilt: f64,
    pub color: &'static str,
    pub age: u32,
}

impl Particle {
    pub fn alive(&self) -> bool {
        self.age < LIFETIME_FRAMES
    }

    /// Opacity fades linearly over the particle's life.
    pub fn opacity(&self) -> f64 {
        1.0 - (self.age as f64 / LIFETIME_FRAMES as f64).min(1.0)
    }
}

/// Launches a burst from the horizontal centre of a `width` x `height`
/// canvas. `random` must yield values in `[0, 1)`.
pub fn burst(width: f64, height: f64, mut random: impl FnMut() -> f64) -> Vec<Particle> {
    let ox = width * 0.5;
    let oy = height * ORIGIN_Y;
    (0..PARTICLE_COUNT)
        .map(|i| {
            let angle = (90.0 + (random() - 0.5) * SPREAD_DEG).to_radians();
            let speed = START_VELOCITY * 0.5 + random() * START_VELOCITY;
            Particle {
                x: ox,
                y: oy,
                vx: angle.cos() * speed,
                // canvas y grows downward
                vy: -angle.sin() * speed,
                tilt: random() * std::f64::consts::PI,
                color: COLORS[i % COLORS.len()],
                age: 0,
            }
        })
        .collect()
}

/// Advances every particle one frame and drops the expired ones.
pub fn step(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.x += p.vx;
        p.y += p.vy;
        p.vx *= DECAY;
        p.vy = p.vy * DECAY + GRAVITY;
        p.tilt += 0.1;
        p.age += 1;
    }
    particles.retain(Particle::alive);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(v: f64) -> impl FnMut() -> f64 {
        move || v
    }

    #[test]
    fn burst_starts_at_origin() {
        let ps = burst(800.0, 600.0, fixed(0.5));
        assert_eq!(ps.len(), PARTICLE_COUNT);
        assert!(ps.iter().all(|p| p.x == 400.0 && p.y == 600.0 * ORIGIN_Y));
        // centred random means straight up
        assert!(ps[0].vx.abs() < 1e-9);
        assert!(ps[0].vy < 0.0);
    }

    #[test]
    fn burst_stays_inside_spread() {
        let mut n = 0.0;
        let ps = burst(100.0, 100.0, || {
            n = (n + 0.37) % 1.0;
            n
        });
        let half = (SPREAD_DEG / 2.0).to_radians();
        for p in ps {
            let off_vertical = (p.vx / -p.vy).atan().abs();
            assert!(off_vertical <= half + 1e-9);
        }
    }

    #[test]
    fn particles_fall_and_expire() {
        let mut ps = burst(100.0, 100.0, fixed(0.5));
        for _ in 0..50 {
            step(&mut ps);
        }
        assert!(ps[0].vy > 0.0);
        assert!(ps[0].opacity() < 1.0);
        for _ in 0..LIFETIME_FRAMES {
            step(&mut ps);
        }
        assert!(ps.is_empty());
    }
}
