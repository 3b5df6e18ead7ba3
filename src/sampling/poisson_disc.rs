//! Maximal Poisson-disc position sampling (grid-accelerated dart throwing).
use std::f32::consts::{PI, SQRT_2};

use glam::Vec2;
use mint::Vector2;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

use crate::error::{Error, Result};
use crate::sampling::{rand01, PositionSampling};

/// Candidate attempts around an active sample before it is retired.
const MAX_ATTEMPTS: usize = 30;

/// Poisson disc sampling strategy.
///
/// Collects a full [`PoissonDiscSampler`] run: a maximal blue-noise point set
/// over `[0, w) x [0, h)` in which every pair of points is at least `radius`
/// apart and no further point can be placed without violating that bound.
#[derive(Debug, Clone)]
pub struct PoissonDiscSampling {
    /// Minimum distance between samples in world units.
    pub radius: f32,
}

impl PoissonDiscSampling {
    /// Create a new PoissonDiscSampling with the specified minimum distance.
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl PositionSampling for PoissonDiscSampling {
    fn generate(&self, domain_extent: Vector2<f32>, rng: &mut dyn RngCore) -> Vec<Vector2<f32>> {
        let extent = Vec2::from(domain_extent);
        let Ok(sampler) = PoissonDiscSampler::with_rng(extent.x, extent.y, self.radius, rng)
        else {
            return Vec::new();
        };

        let points: Vec<Vec2> = sampler.collect();
        debug!(
            radius = self.radius,
            samples = points.len(),
            "poisson disc region saturated"
        );
        points.into_iter().map(Into::into).collect()
    }
}

/// Incremental generator of a maximal Poisson-disc point set.
///
/// Owns the acceptance grid, the active-sample queue, and the random source.
/// Each call to [`next_sample`](Self::next_sample) yields one newly accepted
/// point until the region is saturated; the sampler also implements
/// [`Iterator`], so a consumer can simply `collect()` or drive it lazily.
///
/// The acceptance grid uses cells of side `radius / sqrt(2)`, which fits at
/// most one accepted point per cell and bounds every proximity check to a
/// 5x5 cell window.
#[derive(Debug, Clone)]
pub struct PoissonDiscSampler<R: RngCore = StdRng> {
    width: f32,
    height: f32,
    radius_sq: f32,
    // 3 * radius^2: squared span of the [radius, 2*radius] annulus, so that
    // sqrt(rand * annulus_sq + radius_sq) is area-uniform over the annulus.
    annulus_sq: f32,
    cell_size: f32,
    grid_width: usize,
    grid_height: usize,
    grid: Vec<Option<Vec2>>,
    active: Vec<Vec2>,
    started: bool,
    rng: R,
}

impl PoissonDiscSampler<StdRng> {
    /// Create a sampler over `[0, width) x [0, height)` with OS-seeded
    /// randomness.
    pub fn new(width: f32, height: f32, radius: f32) -> Result<Self> {
        Self::with_rng(width, height, radius, StdRng::from_os_rng())
    }
}

impl<R: RngCore> PoissonDiscSampler<R> {
    /// Create a sampler with an injected random source. Seeding the source is
    /// the mechanism for reproducible point sequences.
    pub fn with_rng(width: f32, height: f32, radius: f32, rng: R) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "width must be positive and finite, got {width}"
            )));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "height must be positive and finite, got {height}"
            )));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "radius must be positive and finite, got {radius}"
            )));
        }

        let radius_sq = radius * radius;
        let cell_size = radius / SQRT_2;
        let grid_width = (width / cell_size).ceil().max(1.0) as usize;
        let grid_height = (height / cell_size).ceil().max(1.0) as usize;

        Ok(Self {
            width,
            height,
            radius_sq,
            annulus_sq: 3.0 * radius_sq,
            cell_size,
            grid_width,
            grid_height,
            grid: vec![None; grid_width * grid_height],
            active: Vec::new(),
            started: false,
            rng,
        })
    }

    #[inline]
    fn cell_of(&self, p: Vec2) -> (usize, usize) {
        // Accepted points satisfy p < extent, but the division can round up
        // to the edge cell; clamp to stay in the grid.
        let i = ((p.x / self.cell_size) as usize).min(self.grid_width - 1);
        let j = ((p.y / self.cell_size) as usize).min(self.grid_height - 1);
        (i, j)
    }

    /// True when no accepted point lies within `radius` of `p`.
    ///
    /// Any conflicting point sits within two cells of `p` on each axis, so
    /// the window is the candidate's cell +-2, clamped to the grid.
    fn far(&self, p: Vec2) -> bool {
        let (i, j) = self.cell_of(p);
        let i0 = i.saturating_sub(2);
        let j0 = j.saturating_sub(2);
        let i1 = (i + 3).min(self.grid_width);
        let j1 = (j + 3).min(self.grid_height);

        for row in j0..j1 {
            let o = row * self.grid_width;
            for col in i0..i1 {
                if let Some(s) = self.grid[o + col] {
                    if (s - p).length_squared() < self.radius_sq {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn accept(&mut self, p: Vec2) -> Vec2 {
        let (i, j) = self.cell_of(p);
        self.grid[j * self.grid_width + i] = Some(p);
        self.active.push(p);
        p
    }

    /// Produce the next accepted sample, or `None` once the region is
    /// saturated. Exhaustion is terminal: every later call returns `None`.
    pub fn next_sample(&mut self) -> Option<Vec2> {
        if !self.started {
            self.started = true;
            // rand01 can round to exactly 1.0; keep the point strictly inside.
            let x = (rand01(&mut self.rng) * self.width).min(self.width.next_down());
            let y = (rand01(&mut self.rng) * self.height).min(self.height.next_down());
            return Some(self.accept(Vec2::new(x, y)));
        }

        while !self.active.is_empty() {
            let i = ((rand01(&mut self.rng) * self.active.len() as f32) as usize)
                .min(self.active.len() - 1);
            let s = self.active[i];

            for _ in 0..MAX_ATTEMPTS {
                let a = 2.0 * PI * rand01(&mut self.rng);
                let d = (rand01(&mut self.rng) * self.annulus_sq + self.radius_sq).sqrt();
                let c = s + d * Vec2::new(a.cos(), a.sin());

                if c.x >= 0.0 && c.x < self.width && c.y >= 0.0 && c.y < self.height && self.far(c)
                {
                    return Some(self.accept(c));
                }
            }

            // Spent: no longer a seed, but it stays in the grid so future
            // candidates are still checked against it.
            self.active.swap_remove(i);
        }

        None
    }
}

impl<R: RngCore> Iterator for PoissonDiscSampler<R> {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        self.next_sample()
    }
}
