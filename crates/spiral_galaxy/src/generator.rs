use bevy::color::LinearRgba;
use bevy::math::{Vec3, vec3};
use rand::prelude::*;
use rayon::prelude::*;

use crate::{GalaxyParameters, GalaxyResult};

/// Points per rayon work item. Each chunk draws from its own thread-local rng.
const CHUNK_POINTS: usize = 4096;

/// Flat, index-aligned position and color buffers for one generated galaxy.
/// Point `i` occupies `[3i, 3i + 3)` in both.
#[derive(Clone, Debug, PartialEq)]
pub struct GalaxyPointCloud {
    positions: Vec<f32>,
    colors: Vec<f32>,
    size: f32,
}

impl GalaxyPointCloud {
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Visual point size the cloud was generated with.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Linear RGB triples.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn position(&self, index: usize) -> Vec3 {
        let p = &self.positions[index * 3..index * 3 + 3];
        vec3(p[0], p[1], p[2])
    }

    pub fn color(&self, index: usize) -> LinearRgba {
        let c = &self.colors[index * 3..index * 3 + 3];
        LinearRgba::rgb(c[0], c[1], c[2])
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = (Vec3, LinearRgba)> + '_ {
        self.positions
            .chunks_exact(3)
            .zip(self.colors.chunks_exact(3))
            .map(|(p, c)| (vec3(p[0], p[1], p[2]), LinearRgba::rgb(c[0], c[1], c[2])))
    }
}

/// Generates a galaxy from the thread-local random source, in parallel.
/// Output differs on every call.
pub fn generate(params: &GalaxyParameters) -> GalaxyResult<GalaxyPointCloud> {
    params.validate()?;
    let placer = PointPlacer::new(params);

    let floats = params.count as usize * 3;
    let mut positions = vec![0.0; floats];
    let mut colors = vec![0.0; floats];

    positions
        .par_chunks_mut(CHUNK_POINTS * 3)
        .zip(colors.par_chunks_mut(CHUNK_POINTS * 3))
        .enumerate()
        .for_each(|(chunk, (positions, colors))| {
            let mut rng = rand::rng();
            let first = chunk * CHUNK_POINTS;
            for (offset, (position, color)) in positions
                .chunks_exact_mut(3)
                .zip(colors.chunks_exact_mut(3))
                .enumerate()
            {
                placer.place(first + offset, &mut rng, position, color);
            }
        });

    Ok(GalaxyPointCloud {
        positions,
        colors,
        size: params.size,
    })
}

/// Sequential generation from a caller supplied rng.
/// With a seeded rng the output is reproducible.
pub fn generate_with_rng<R: Rng>(
    params: &GalaxyParameters,
    rng: &mut R,
) -> GalaxyResult<GalaxyPointCloud> {
    params.validate()?;
    let placer = PointPlacer::new(params);

    let floats = params.count as usize * 3;
    let mut positions = vec![0.0; floats];
    let mut colors = vec![0.0; floats];

    for (i, (position, color)) in positions
        .chunks_exact_mut(3)
        .zip(colors.chunks_exact_mut(3))
        .enumerate()
    {
        placer.place(i, rng, position, color);
    }

    Ok(GalaxyPointCloud {
        positions,
        colors,
        size: params.size,
    })
}

struct PointPlacer {
    radius: f32,
    branches: u32,
    spin: f32,
    randomness: f32,
    randomness_power: f32,
    inside: [f32; 3],
    outside: [f32; 3],
}

impl PointPlacer {
    fn new(params: &GalaxyParameters) -> Self {
        let inside = LinearRgba::from(params.inside_color);
        let outside = LinearRgba::from(params.outside_color);
        Self {
            radius: params.radius,
            branches: params.branches,
            spin: params.spin,
            randomness: params.randomness,
            randomness_power: params.randomness_power,
            inside: [inside.red, inside.green, inside.blue],
            outside: [outside.red, outside.green, outside.blue],
        }
    }

    fn place<R: Rng>(
        &self,
        index: usize,
        rng: &mut R,
        position: &mut [f32],
        color: &mut [f32],
    ) {
        let r = rng.random::<f32>() * self.radius;
        let spin_angle = r * self.spin;
        let branch = (index % self.branches as usize) as f32;
        let branch_angle = branch / self.branches as f32 * std::f32::consts::TAU;

        let jitter_x = self.jitter(rng, r);
        let jitter_y = self.jitter(rng, r);
        let jitter_z = self.jitter(rng, r);

        let angle = branch_angle + spin_angle;
        position[0] = angle.cos() * r + jitter_x;
        position[1] = jitter_y;
        position[2] = angle.sin() * r + jitter_z;

        // r < radius, so t stays in [0, 1)
        let t = r / self.radius;
        for c in 0..3 {
            color[c] = self.inside[c] + (self.outside[c] - self.inside[c]) * t;
        }
    }

    fn jitter<R: Rng>(&self, rng: &mut R, r: f32) -> f32 {
        let magnitude = rng.random::<f32>().powf(self.randomness_power);
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        magnitude * sign * self.randomness * r
    }
}
