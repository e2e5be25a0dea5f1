pub mod gltf;
pub mod obj;

use anyhow::{bail, Result};
use std::path::Path;

use crate::types::Vertex;

pub use self::gltf::load_gltf_mesh;
pub use self::obj::load_obj_mesh;

/// Loads the car mesh, picking the importer from the file extension.
/// Anything other than `.gltf`/`.glb` is read as OBJ.
pub fn load_mesh(path: impl AsRef<Path>) -> Result<Vec<Vertex>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let vertices = match extension.as_deref() {
        Some("gltf") | Some("glb") => load_gltf_mesh(path)?,
        _ => load_obj_mesh(path)?,
    };

    if vertices.is_empty() {
        bail!("Mesh {:?} contains no triangles with normals", path);
    }

    Ok(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_mesh_is_fatal() {
        assert!(load_mesh("missing/car.obj").is_err());
        assert!(load_mesh("missing/car.GLB").is_err());
    }
}
