use bevy::{
    color::ColorToComponents,
    prelude::*,
    render::{
        mesh::{Indices, PrimitiveTopology},
        render_asset::RenderAssetUsages,
    },
};
use spiral_galaxy::GalaxyPointCloud;

// Each point is drawn as a tiny octahedron so it reads the same from any angle.
const CORNERS: [Vec3; 6] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

const FACES: [[u32; 3]; 8] = [
    [0, 2, 4],
    [2, 1, 4],
    [1, 3, 4],
    [3, 0, 4],
    [2, 0, 5],
    [1, 2, 5],
    [3, 1, 5],
    [0, 3, 5],
];

/// Builds one mesh holding every point of the cloud, colored per vertex.
pub fn point_cloud_mesh(cloud: &GalaxyPointCloud) -> Mesh {
    let half_extent = cloud.size() * 0.5;
    let n = cloud.len();

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(n * CORNERS.len());
    let mut colors: Vec<[f32; 4]> = Vec::with_capacity(n * CORNERS.len());
    let mut indices: Vec<u32> = Vec::with_capacity(n * FACES.len() * 3);

    for (i, (center, color)) in cloud.points().enumerate() {
        let base = (i * CORNERS.len()) as u32;
        for corner in CORNERS {
            positions.push((center + corner * half_extent).to_array());
            colors.push(color.to_f32_array());
        }
        for face in FACES {
            indices.extend(face.iter().map(|k| base + k));
        }
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
        .with_inserted_indices(Indices::U32(indices))
}

/// Additive, unlit, both faces: overlapping points brighten instead of occluding.
pub fn point_cloud_material() -> StandardMaterial {
    StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        alpha_mode: AlphaMode::Add,
        cull_mode: None,
        ..default()
    }
}
