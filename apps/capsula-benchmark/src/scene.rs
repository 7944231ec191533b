//! Grid of shapes driven by the benchmark frame loop.
//!
//! Each frame runs two passes: [`Scene::update`] writes every shape's
//! transformed state, then [`Scene::query`] only reads it. The query pass is
//! free to fan out across threads because nothing is written during it.

use capsula_physics::{AbstractShape, Capsule, Point, Result, Shape3D, Sphere};
use glam::{Mat4, Quat, Vec3};
use rayon::prelude::*;

use crate::config::BenchmarkConfig;

/// Distance each shape wobbles around its grid anchor.
const WOBBLE: f32 = 0.75;

/// Counters for one collision query pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// Pairs that went through a collision test.
    pub tested: usize,
    /// Tested pairs that overlap.
    pub contacts: usize,
    /// Pairs without a collision test (point/point, capsule/capsule).
    pub skipped: usize,
}

impl FrameStats {
    /// Sum two sets of counters.
    pub fn merge(self, other: Self) -> Self {
        Self {
            tested: self.tested + other.tested,
            contacts: self.contacts + other.contacts,
            skipped: self.skipped + other.skipped,
        }
    }
}

/// Number of shapes on a `grid_size` x `grid_size` grid, widened before
/// multiplying so large grids don't wrap in `u32`.
#[inline]
fn shape_count(grid_size: u32) -> usize {
    grid_size as usize * grid_size as usize
}

/// Shapes laid out on a square grid in the XZ plane.
pub struct Scene {
    shapes: Vec<Shape3D>,
    anchors: Vec<Vec3>,
}

impl Scene {
    /// Build the grid, cycling through points, spheres and capsules.
    pub fn new(config: &BenchmarkConfig) -> Result<Self> {
        let n = config.grid_size;
        let half = config.capsule_length * 0.5;
        let mut shapes = Vec::with_capacity(shape_count(n));
        let mut anchors = Vec::with_capacity(shape_count(n));

        for ix in 0..n {
            for iz in 0..n {
                let shape: Shape3D = match shapes.len() % 3 {
                    0 => Point::new(Vec3::ZERO).into(),
                    1 => Sphere::new(Vec3::ZERO, config.radius)?.into(),
                    _ => Capsule::new(
                        Vec3::new(0.0, -half, 0.0),
                        Vec3::new(0.0, half, 0.0),
                        config.radius,
                    )?
                    .into(),
                };
                shapes.push(shape);
                anchors.push(Vec3::new(ix as f32, 0.0, iz as f32) * config.spacing);
            }
        }

        Ok(Self { shapes, anchors })
    }

    /// Number of shapes in the scene.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Pose every shape for `frame`.
    pub fn update(&mut self, frame: u32) {
        let t = frame as f32 * 0.05;
        for (i, (shape, anchor)) in self.shapes.iter_mut().zip(&self.anchors).enumerate() {
            let phase = t + i as f32 * 0.37;
            let offset = Vec3::new(phase.sin(), 0.0, phase.cos()) * WOBBLE;
            let pose = Mat4::from_rotation_translation(Quat::from_rotation_z(phase), *anchor + offset);
            shape.apply_transformation_matrix(&pose);
        }
    }

    /// Test every unordered pair of shapes once.
    pub fn query(&self, parallel: bool) -> Result<FrameStats> {
        let row = |i: usize| -> Result<FrameStats> {
            let a = &self.shapes[i];
            let mut stats = FrameStats::default();
            for b in &self.shapes[i + 1..] {
                if !a.shape_type().has_test_against(b.shape_type()) {
                    stats.skipped += 1;
                    continue;
                }
                stats.tested += 1;
                if a.collides(b)? {
                    stats.contacts += 1;
                }
            }
            Ok(stats)
        };

        if parallel {
            (0..self.shapes.len())
                .into_par_iter()
                .map(row)
                .try_reduce(FrameStats::default, |a, b| Ok(a.merge(b)))
        } else {
            (0..self.shapes.len())
                .map(row)
                .try_fold(FrameStats::default(), |acc, stats: Result<FrameStats>| {
                    stats.map(|stats| acc.merge(stats))
                })
        }
    }
}
