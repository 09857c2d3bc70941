//! Seeded point clouds for demos, benches and tests.
//!
//! Model
//! - Draw `count` points in a square, a disk, or a thin ring of the given
//!   radius around `center`. The ring puts almost every point on the hull,
//!   the square and disk leave most of them inside.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so a sweep over sizes can reuse one seed with different indices.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;
use crate::session::PointSet;

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Region the points are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudShape {
    /// Uniform in the axis-aligned square `[-r, r]²`.
    Square,
    /// Uniform in the disk of radius `r`.
    Disk,
    /// Radii in `r · [1 − jitter, 1]`; `jitter` is clamped to [0, 1].
    Ring { jitter: f64 },
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: PointCount,
    pub shape: CloudShape,
    pub radius: f64,
    pub center: Point,
}
impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(32),
            shape: CloudShape::Square,
            radius: 100.0,
            center: Vector2::zeros(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a point cloud. Same `(cfg, tok)` gives the same points.
///
/// A radius that is not a positive finite number (or whose diameter
/// overflows) becomes 1. A centre that is not finite, or too close to the
/// edge of the `f64` range for the cloud to fit, becomes the origin. Every
/// drawn point is therefore finite.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> PointSet {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let r = if cfg.radius > 0.0 && (2.0 * cfg.radius).is_finite() {
        cfg.radius
    } else {
        tracing::debug!(radius = cfg.radius, "cloud radius replaced by 1");
        1.0
    };
    let center = if cfg.center.iter().all(|c| (c.abs() + r).is_finite()) {
        cfg.center
    } else {
        tracing::debug!(x = cfg.center.x, y = cfg.center.y, "cloud centre replaced by origin");
        Vector2::zeros()
    };
    let pts: Vec<Point> = (0..n)
        .map(|_| center + sample_offset(&mut rng, cfg.shape, r))
        .collect();
    PointSet::from_finite(pts)
}

fn sample_offset<R: Rng>(rng: &mut R, shape: CloudShape, r: f64) -> Vector2<f64> {
    match shape {
        CloudShape::Square => Vector2::new(rng.gen_range(-r..=r), rng.gen_range(-r..=r)),
        CloudShape::Disk => {
            // sqrt keeps the density uniform in area
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            let rho = r * rng.gen::<f64>().sqrt();
            Vector2::new(th.cos() * rho, th.sin() * rho)
        }
        CloudShape::Ring { jitter } => {
            let j = jitter.clamp(0.0, 1.0);
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            let rho = r * (1.0 - j * rng.gen::<f64>());
            Vector2::new(th.cos() * rho, th.sin() * rho)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = CloudCfg {
            count: PointCount::Uniform { min: 10, max: 20 },
            shape: CloudShape::Disk,
            ..CloudCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_cloud(cfg, tok);
        let b = draw_cloud(cfg, tok);
        assert_eq!(a.as_slice(), b.as_slice());
        assert!((10..=20).contains(&a.len()));
        let c = draw_cloud(cfg, tok.next());
        assert_ne!(a.as_slice(), c.as_slice());
    }

    #[test]
    fn shapes_respect_radius() {
        let center = Vector2::new(5.0, -3.0);
        for shape in [
            CloudShape::Square,
            CloudShape::Disk,
            CloudShape::Ring { jitter: 0.1 },
        ] {
            let cfg = CloudCfg {
                count: PointCount::Fixed(200),
                shape,
                radius: 2.0,
                center,
            };
            let pts = draw_cloud(cfg, ReplayToken { seed: 1, index: 0 });
            assert_eq!(pts.len(), 200);
            for p in pts.iter() {
                let d = p - center;
                match shape {
                    CloudShape::Square => assert!(d.x.abs() <= 2.0 && d.y.abs() <= 2.0),
                    CloudShape::Disk => assert!(d.norm() <= 2.0 + 1e-12),
                    CloudShape::Ring { .. } => {
                        assert!(d.norm() <= 2.0 + 1e-12 && d.norm() >= 1.8 - 1e-12)
                    }
                }
            }
        }
    }

    #[test]
    fn bad_radius_falls_back_to_unit() {
        let cfg = CloudCfg {
            count: PointCount::Fixed(50),
            shape: CloudShape::Disk,
            radius: -3.0,
            center: Vector2::zeros(),
        };
        let pts = draw_cloud(cfg, ReplayToken { seed: 3, index: 0 });
        assert!(pts.iter().all(|p| p.norm() <= 1.0 + 1e-12));

        let huge = CloudCfg {
            radius: f64::MAX,
            shape: CloudShape::Square,
            ..cfg
        };
        let pts = draw_cloud(huge, ReplayToken { seed: 3, index: 1 });
        assert!(pts.iter().all(|p| p.x.abs() <= 1.0 && p.y.abs() <= 1.0));
    }

    #[test]
    fn bad_center_falls_back_to_origin() {
        for (center, radius) in [
            (Vector2::new(f64::NAN, 0.0), 2.0),
            (Vector2::new(1.0, f64::INFINITY), 2.0),
            // finite, but the cloud would overflow
            (Vector2::new(f64::MAX, 0.0), 1e300),
        ] {
            let cfg = CloudCfg {
                count: PointCount::Fixed(40),
                shape: CloudShape::Square,
                radius,
                center,
            };
            let pts = draw_cloud(cfg, ReplayToken { seed: 9, index: 0 });
            assert_eq!(pts.len(), 40);
            for p in pts.iter() {
                assert!(p.x.is_finite() && p.y.is_finite());
                assert!(p.x.abs() <= radius && p.y.abs() <= radius);
            }
        }
    }
}
