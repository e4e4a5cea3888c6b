// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! OBJ mesh loading via `tobj`.

use glint_core::render::{MeshData, Vertex};
use std::path::Path;

/// Loads an OBJ file and flattens all of its meshes into one [`MeshData`].
///
/// Positions, normals and texture coordinates are interleaved; missing
/// normals or uvs are zero-filled. A failed load logs an error and returns
/// an empty mesh, so the scene renders without the model rather than
/// aborting.
pub fn load_obj_mesh(path: &Path) -> MeshData {
    let (models, _materials) = match tobj::load_obj(path, &tobj::GPU_LOAD_OPTIONS) {
        Ok(loaded) => loaded,
        Err(err) => {
            log::error!("Model failed to load at path: {}: {err}", path.display());
            return MeshData::default();
        }
    };

    let mut out = MeshData::default();
    for model in &models {
        let mesh = &model.mesh;
        let base = out.vertices.len() as u32;
        let vertex_count = mesh.positions.len() / 3;

        for i in 0..vertex_count {
            let position = [
                mesh.positions[3 * i],
                mesh.positions[3 * i + 1],
                mesh.positions[3 * i + 2],
            ];
            let normal = if mesh.normals.len() >= 3 * (i + 1) {
                [
                    mesh.normals[3 * i],
                    mesh.normals[3 * i + 1],
                    mesh.normals[3 * i + 2],
                ]
            } else {
                [0.0; 3]
            };
            let uv = if mesh.texcoords.len() >= 2 * (i + 1) {
                [mesh.texcoords[2 * i], mesh.texcoords[2 * i + 1]]
            } else {
                [0.0; 2]
            };
            out.vertices.push(Vertex::new(position, normal, uv));
        }
        out.indices.extend(mesh.indices.iter().map(|&i| base + i));
    }

    log::info!(
        "Loaded model {} ({} vertices, {} indices)",
        path.display(),
        out.vertices.len(),
        out.indices.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_an_empty_mesh() {
        let mesh = load_obj_mesh(Path::new("/nonexistent/backpack.obj"));
        assert!(mesh.is_empty());
        assert!(mesh.vertices.is_empty());
    }

    #[test]
    fn triangle_obj_round_trips_through_the_loader() {
        let path = std::env::temp_dir().join(format!("glint-tri-{}.obj", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "v 0.0 0.0 0.0").unwrap();
        writeln!(file, "v 1.0 0.0 0.0").unwrap();
        writeln!(file, "v 0.0 1.0 0.0").unwrap();
        writeln!(file, "vn 0.0 0.0 1.0").unwrap();
        writeln!(file, "vt 0.0 0.0").unwrap();
        writeln!(file, "vt 1.0 0.0").unwrap();
        writeln!(file, "vt 0.0 1.0").unwrap();
        writeln!(file, "f 1/1/1 2/2/1 3/3/1").unwrap();
        drop(file);

        let mesh = load_obj_mesh(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(mesh.indices.len(), 3);
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.vertices[0].normal, [0.0, 0.0, 1.0]);
    }
}
