use anyhow::{Context, Result};
use glam::{Mat4, Vec3};
use std::path::Path;

use crate::math::normal_matrix;
use crate::types::Vertex;

/// Loads every mesh of a glTF/GLB file as a flat triangle list in scene space.
///
/// Node transforms are baked in. Primitives without normals get flat face
/// normals.
pub fn load_gltf_mesh(path: impl AsRef<Path>) -> Result<Vec<Vertex>> {
    let path = path.as_ref();
    log::info!("Loading glTF file: {:?}", path);

    let (gltf, buffers, _images) =
        gltf::import(path).with_context(|| format!("Failed to load glTF file: {:?}", path))?;

    log::debug!(
        "glTF loaded: {} scenes, {} nodes, {} meshes",
        gltf.scenes().count(),
        gltf.nodes().count(),
        gltf.meshes().count()
    );

    let mut vertices = Vec::new();
    for scene in gltf.scenes() {
        for node in scene.nodes() {
            process_node(&node, &buffers, &Mat4::IDENTITY, &mut vertices)?;
        }
    }

    log::info!("Extracted {} triangles from glTF", vertices.len() / 3);
    Ok(vertices)
}

/// Recursively walks the node tree, accumulating transforms
fn process_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: &Mat4,
    vertices: &mut Vec<Vertex>,
) -> Result<()> {
    let local_transform = Mat4::from_cols_array_2d(&node.transform().matrix());
    let global_transform = *parent_transform * local_transform;

    if let Some(mesh) = node.mesh() {
        process_mesh(&mesh, buffers, &global_transform, vertices)?;
    }

    for child in node.children() {
        process_node(&child, buffers, &global_transform, vertices)?;
    }

    Ok(())
}

fn process_mesh(
    mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
    transform: &Mat4,
    vertices: &mut Vec<Vertex>,
) -> Result<()> {
    log::debug!("  Processing mesh: {:?}", mesh.name());
    let normal_transform = normal_matrix(transform);

    for primitive in mesh.primitives() {
        if primitive.mode() != gltf::mesh::Mode::Triangles {
            log::warn!("  Skipping non-triangle primitive ({:?})", primitive.mode());
            continue;
        }

        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let positions: Vec<Vec3> = reader
            .read_positions()
            .context("Mesh primitive has no positions")?
            .map(|p| transform.transform_point3(Vec3::from_array(p)))
            .collect();

        let normals: Option<Vec<Vec3>> = reader.read_normals().map(|normals| {
            normals
                .map(|n| (normal_transform * Vec3::from_array(n)).normalize_or_zero())
                .collect()
        });

        let indices: Vec<u32> = match reader.read_indices() {
            Some(indices) => indices.into_u32().collect(),
            None => (0..positions.len() as u32).collect(),
        };

        for tri in indices.chunks_exact(3) {
            let corners = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            if corners.iter().any(|&i| i >= positions.len()) {
                continue;
            }
            let [a, b, c] = corners.map(|i| positions[i]);
            let face_normal = (b - a).cross(c - a).normalize_or_zero();

            for i in corners {
                let normal = normals
                    .as_ref()
                    .and_then(|n| n.get(i).copied())
                    .unwrap_or(face_normal);
                vertices.push(Vertex::from_vec3(positions[i], normal));
            }
        }
    }

    Ok(())
}
