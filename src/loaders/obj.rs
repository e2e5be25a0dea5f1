use anyhow::{Context, Result};
use std::path::Path;

use crate::types::Vertex;

/// Loads a Wavefront OBJ file as a flat triangle list.
///
/// Faces are triangulated; triangles referencing a missing position or
/// normal are skipped.
pub fn load_obj_mesh(path: impl AsRef<Path>) -> Result<Vec<Vertex>> {
    let path = path.as_ref();
    log::info!("Loading OBJ file: {:?}", path);

    let options = tobj::LoadOptions {
        triangulate: true,
        single_index: false,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    };

    let (models, materials) =
        tobj::load_obj(path, &options).with_context(|| format!("Failed to load OBJ file: {:?}", path))?;

    if let Err(e) = materials {
        // Materials are not used; a missing .mtl only deserves a warning
        log::warn!("Ignoring OBJ materials for {:?}: {}", path, e);
    }

    let mut vertices = Vec::new();
    for model in &models {
        let mesh = &model.mesh;
        let before = vertices.len();
        vertices.extend(triangle_soup(
            &mesh.positions,
            &mesh.normals,
            &mesh.indices,
            &mesh.normal_indices,
        ));
        log::debug!("  Model {:?}: {} vertices", model.name, vertices.len() - before);
    }

    log::info!("Extracted {} triangles from {} OBJ models", vertices.len() / 3, models.len());
    Ok(vertices)
}

fn read_vec3(data: &[f32], index: u32) -> Option<[f32; 3]> {
    let start = index as usize * 3;
    let v = data.get(start..start + 3)?;
    Some([v[0], v[1], v[2]])
}

/// De-indexes positions and normals into interleaved vertices, three per
/// triangle. `normal_indices` runs parallel to `indices`.
pub fn triangle_soup(
    positions: &[f32],
    normals: &[f32],
    indices: &[u32],
    normal_indices: &[u32],
) -> Vec<Vertex> {
    indices
        .chunks_exact(3)
        .zip(normal_indices.chunks_exact(3))
        .filter_map(|(tri, tri_normals)| {
            let mut corners = [Vertex::new([0.0; 3], [0.0; 3]); 3];
            for (corner, (&vi, &ni)) in corners.iter_mut().zip(tri.iter().zip(tri_normals)) {
                *corner = Vertex::new(read_vec3(positions, vi)?, read_vec3(normals, ni)?);
            }
            Some(corners)
        })
        .flatten()
        .collect()
}
