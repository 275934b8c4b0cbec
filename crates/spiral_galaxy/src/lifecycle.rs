use bevy::log::{info, warn};
use bevy::math::Quat;

use crate::animation::{SpinDirection, rotation_at};
use crate::{GalaxyParameters, GalaxyPointCloud, GalaxyResult, generate};

/// The scene graph a galaxy drawable lives in.
///
/// `attach` takes ownership of the cloud. `release` frees the geometry and
/// material behind a drawable, `detach` removes the drawable itself; detaching
/// something the scene no longer knows must be a no-op.
pub trait GalaxyScene {
    type Drawable;

    fn attach(&mut self, cloud: GalaxyPointCloud, rotation: Quat) -> Self::Drawable;
    fn release(&mut self, drawable: &Self::Drawable) -> GalaxyResult<()>;
    fn detach(&mut self, drawable: Self::Drawable);
    fn set_rotation(&mut self, drawable: &Self::Drawable, rotation: Quat);
}

/// The currently attached galaxy, if any, and the direction it spins in.
#[derive(Debug)]
pub struct GalaxyState<D> {
    current: Option<D>,
    direction: SpinDirection,
    generation: u32,
}

impl<D> Default for GalaxyState<D> {
    fn default() -> Self {
        Self {
            current: None,
            direction: SpinDirection::default(),
            generation: 0,
        }
    }
}

impl<D> GalaxyState<D> {
    pub fn current(&self) -> Option<&D> {
        self.current.as_ref()
    }

    pub fn direction(&self) -> SpinDirection {
        self.direction
    }

    /// Number of clouds attached so far.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Builds a new cloud from `params` and swaps it in for the current one.
    /// Invalid parameters leave the current cloud attached.
    pub fn regenerate<S>(&mut self, params: &GalaxyParameters, scene: &mut S) -> GalaxyResult<&D>
    where
        S: GalaxyScene<Drawable = D>,
    {
        let cloud = generate(params)?;
        Ok(self.replace(cloud, SpinDirection::from_spin(params.spin), scene))
    }

    /// Releases and detaches the current drawable, then attaches `cloud`.
    pub fn replace<S>(&mut self, cloud: GalaxyPointCloud, direction: SpinDirection, scene: &mut S) -> &D
    where
        S: GalaxyScene<Drawable = D>,
    {
        self.dispose(scene);

        let points = cloud.len();
        let drawable = scene.attach(cloud, rotation_at(direction, 0.0));
        self.direction = direction;
        self.generation += 1;
        info!(
            "Attached galaxy #{} with {} points",
            self.generation, points
        );

        self.current.insert(drawable)
    }

    /// Removes the current drawable, if any. Safe to call repeatedly.
    pub fn teardown<S>(&mut self, scene: &mut S)
    where
        S: GalaxyScene<Drawable = D>,
    {
        self.dispose(scene);
    }

    /// Sets the current drawable's absolute rotation for this frame.
    pub fn tick<S>(&self, scene: &mut S, elapsed_secs: f32)
    where
        S: GalaxyScene<Drawable = D>,
    {
        let Some(drawable) = &self.current else {
            return;
        };
        scene.set_rotation(drawable, rotation_at(self.direction, elapsed_secs));
    }

    fn dispose<S>(&mut self, scene: &mut S)
    where
        S: GalaxyScene<Drawable = D>,
    {
        let Some(old) = self.current.take() else {
            return;
        };
        // a failed release leaks, it must not keep the old cloud on screen
        if let Err(err) = scene.release(&old) {
            warn!("{}", err);
        }
        scene.detach(old);
    }
}
