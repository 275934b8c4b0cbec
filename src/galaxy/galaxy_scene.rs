use bevy::{ecs::system::SystemParam, prelude::*};
use spiral_galaxy::{GalaxyError, GalaxyPointCloud, GalaxyResult, GalaxyScene, GalaxyState};

use super::point_mesh::{point_cloud_material, point_cloud_mesh};

/// Marker for the entity carrying the galaxy mesh.
#[derive(Component)]
pub struct GalaxyPoints;

/// Handles to everything one attached galaxy owns.
#[derive(Debug)]
pub struct GalaxyDrawable {
    entity: Entity,
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
}

impl GalaxyDrawable {
    pub fn entity(&self) -> Entity {
        self.entity
    }
}

#[derive(Resource, Default)]
pub struct CurrentGalaxy(pub GalaxyState<GalaxyDrawable>);

/// The Bevy world seen as a galaxy scene: one entity plus its mesh and material assets.
#[derive(SystemParam)]
pub struct BevyGalaxyScene<'w, 's> {
    commands: Commands<'w, 's>,
    meshes: ResMut<'w, Assets<Mesh>>,
    materials: ResMut<'w, Assets<StandardMaterial>>,
    transforms: Query<'w, 's, &'static mut Transform, With<GalaxyPoints>>,
}

impl GalaxyScene for BevyGalaxyScene<'_, '_> {
    type Drawable = GalaxyDrawable;

    fn attach(&mut self, cloud: GalaxyPointCloud, rotation: Quat) -> GalaxyDrawable {
        let mesh = self.meshes.add(point_cloud_mesh(&cloud));
        let material = self.materials.add(point_cloud_material());

        let entity = self
            .commands
            .spawn((
                GalaxyPoints,
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_rotation(rotation),
            ))
            .id();

        GalaxyDrawable {
            entity,
            mesh,
            material,
        }
    }

    fn release(&mut self, drawable: &GalaxyDrawable) -> GalaxyResult<()> {
        let mesh = self.meshes.remove(&drawable.mesh);
        let material = self.materials.remove(&drawable.material);
        match (mesh, material) {
            (Some(_), Some(_)) => Ok(()),
            (None, _) => Err(GalaxyError::ResourceRelease(format!(
                "mesh {:?} already gone",
                drawable.mesh.id()
            ))),
            (_, None) => Err(GalaxyError::ResourceRelease(format!(
                "material {:?} already gone",
                drawable.material.id()
            ))),
        }
    }

    fn detach(&mut self, drawable: GalaxyDrawable) {
        if let Ok(mut entity) = self.commands.get_entity(drawable.entity) {
            entity.despawn();
        }
    }

    fn set_rotation(&mut self, drawable: &GalaxyDrawable, rotation: Quat) {
        if let Ok(mut transform) = self.transforms.get_mut(drawable.entity) {
            transform.rotation = rotation;
        }
    }
}
