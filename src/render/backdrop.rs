//! Decorative backdrop: large pastel circles drifting and bouncing off the
//! window edges. Painted behind everything else; the carousel never reads it.

use std::f32::consts::TAU;

use rand::Rng;

/// Speeds are authored per frame at this rate.
const REFERENCE_FPS: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub color: [u8; 3],
}

impl Circle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let heading = rng.random_range(0.0..TAU);
        let speed = rng.random_range(2.0..5.0);
        Self {
            x: rng.random_range(0.0..=width.max(0.0)),
            y: rng.random_range(0.0..=height.max(0.0)),
            vx: heading.cos() * speed,
            vy: heading.sin() * speed,
            radius: rng.random_range(400.0..1000.0),
            color: pastel(rng),
        }
    }

    /// Move by `frames` reference frames, reflecting off the bounds.
    pub fn update(&mut self, width: f32, height: f32, frames: f32) {
        self.x += self.vx * frames;
        self.y += self.vy * frames;

        if self.x > width {
            self.vx = -self.vx;
            self.x = width;
        } else if self.x < 0.0 {
            self.vx = -self.vx;
            self.x = 0.0;
        }
        if self.y > height {
            self.vy = -self.vy;
            self.y = height;
        } else if self.y < 0.0 {
            self.vy = -self.vy;
            self.y = 0.0;
        }
    }
}

fn pastel<R: Rng + ?Sized>(rng: &mut R) -> [u8; 3] {
    [
        rng.random_range(150..=255),
        rng.random_range(150..=255),
        rng.random_range(150..=255),
    ]
}

pub struct Backdrop {
    circles: Vec<Circle>,
    width: f32,
    height: f32,
}

impl Backdrop {
    pub fn new<R: Rng + ?Sized>(count: usize, width: f32, height: f32, rng: &mut R) -> Self {
        Self {
            circles: (0..count).map(|_| Circle::random(rng, width, height)).collect(),
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance by `dt` seconds. Large gaps are clamped to avoid tunnelling.
    pub fn update(&mut self, dt: f32) {
        let frames = (dt * REFERENCE_FPS).clamp(0.0, 6.0);
        for circle in &mut self.circles {
            circle.update(self.width, self.height, frames);
        }
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_circles_follow_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let c = Circle::random(&mut rng, 800.0, 600.0);
            assert!((0.0..=800.0).contains(&c.x));
            assert!((0.0..=600.0).contains(&c.y));
            assert!((400.0..1000.0).contains(&c.radius));
            let speed = (c.vx * c.vx + c.vy * c.vy).sqrt();
            assert!(speed > 1.99 && speed < 5.01, "speed {}", speed);
            assert!(c.color.iter().all(|&ch| ch >= 150));
        }
    }

    #[test]
    fn bounces_off_right_edge() {
        let mut c = Circle {
            x: 798.0,
            y: 100.0,
            vx: 4.0,
            vy: 0.0,
            radius: 500.0,
            color: [200, 200, 200],
        };
        c.update(800.0, 600.0, 1.0);
        assert_eq!(c.x, 800.0);
        assert_eq!(c.vx, -4.0);
        c.update(800.0, 600.0, 1.0);
        assert_eq!(c.x, 796.0);
    }

    #[test]
    fn bounces_off_top_edge() {
        let mut c = Circle {
            x: 100.0,
            y: 1.0,
            vx: 0.0,
            vy: -3.0,
            radius: 500.0,
            color: [200, 200, 200],
        };
        c.update(800.0, 600.0, 1.0);
        assert_eq!(c.y, 0.0);
        assert_eq!(c.vy, 3.0);
    }

    #[test]
    fn circles_stay_inside_after_shrink() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut backdrop = Backdrop::new(5, 1920.0, 1080.0, &mut rng);
        backdrop.resize(400.0, 300.0);
        for _ in 0..10 {
            backdrop.update(1.0 / 60.0);
        }
        for c in backdrop.circles() {
            assert!((0.0..=400.0).contains(&c.x));
            assert!((0.0..=300.0).contains(&c.y));
        }
        assert_eq!(backdrop.circles().len(), 5);
    }

    #[test]
    fn new_backdrop_spreads_circles_across_window() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut backdrop = Backdrop::new(40, 1280.0, 860.0, &mut rng);
        backdrop.update(1.0 / 60.0);

        let mut quadrants = [0usize; 4];
        for c in backdrop.circles() {
            assert!((0.0..=1280.0).contains(&c.x));
            assert!((0.0..=860.0).contains(&c.y));
            let q = usize::from(c.x >= 640.0) + 2 * usize::from(c.y >= 430.0);
            quadrants[q] += 1;
        }
        assert!(quadrants.iter().all(|&n| n > 0), "{:?}", quadrants);
    }
}
