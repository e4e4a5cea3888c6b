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

//! CPU-side mesh data and the two procedurally built meshes of the scene.

/// A single vertex: position, normal and texture coordinates.
///
/// One layout is shared by every mesh; the skybox leaves normal and uv
/// zeroed, it only samples by position.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// World-space position before the model transform.
    pub position: [f32; 3],
    /// Surface normal.
    pub normal: [f32; 3],
    /// Texture coordinates.
    pub uv: [f32; 2],
}

impl Vertex {
    /// Creates a vertex from its components.
    #[inline]
    pub const fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Creates a position-only vertex with zero normal and uv.
    #[inline]
    pub const fn from_position(position: [f32; 3]) -> Self {
        Self::new(position, [0.0; 3], [0.0; 2])
    }
}

/// An indexed triangle mesh held on the CPU, ready for upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// The vertices.
    pub vertices: Vec<Vertex>,
    /// Triangle list indices into `vertices`.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// The number of indices to draw.
    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Whether the mesh has nothing to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Half-extent of the ground quad in world units.
const GROUND_EXTENT: f32 = 100.0;
/// Texture coordinate at the quad's far edge; the diffuse map repeats this
/// many times across the plane.
const GROUND_UV_SCALE: f32 = 100.0;

/// Builds the ground: a single quad at `y = 0` spanning ±100 on x and z,
/// facing up, with its texture tiled 100 times in each direction.
pub fn ground_plane() -> MeshData {
    let up = [0.0, 1.0, 0.0];
    let e = GROUND_EXTENT;
    let t = GROUND_UV_SCALE;
    MeshData {
        vertices: vec![
            Vertex::new([e, 0.0, -e], up, [t, t]),
            Vertex::new([e, 0.0, e], up, [t, 0.0]),
            Vertex::new([-e, 0.0, e], up, [0.0, 0.0]),
            Vertex::new([-e, 0.0, -e], up, [0.0, t]),
        ],
        indices: vec![0, 1, 3, 1, 2, 3],
    }
}

/// Builds the skybox: a unit cube as 36 position-only vertices, wound to
/// face inward so it is visible from inside.
pub fn skybox_cube() -> MeshData {
    #[rustfmt::skip]
    let positions: [[f32; 3]; 36] = [
        [-1.0,  1.0, -1.0], [-1.0, -1.0, -1.0], [ 1.0, -1.0, -1.0],
        [ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0], [-1.0,  1.0, -1.0],

        [-1.0, -1.0,  1.0], [-1.0, -1.0, -1.0], [-1.0,  1.0, -1.0],
        [-1.0,  1.0, -1.0], [-1.0,  1.0,  1.0], [-1.0, -1.0,  1.0],

        [ 1.0, -1.0, -1.0], [ 1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0],
        [ 1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0], [ 1.0, -1.0, -1.0],

        [-1.0, -1.0,  1.0], [-1.0,  1.0,  1.0], [ 1.0,  1.0,  1.0],
        [ 1.0,  1.0,  1.0], [ 1.0, -1.0,  1.0], [-1.0, -1.0,  1.0],

        [-1.0,  1.0, -1.0], [ 1.0,  1.0, -1.0], [ 1.0,  1.0,  1.0],
        [ 1.0,  1.0,  1.0], [-1.0,  1.0,  1.0], [-1.0,  1.0, -1.0],

        [-1.0, -1.0, -1.0], [-1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0],
        [ 1.0, -1.0, -1.0], [-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0],
    ];
    MeshData {
        vertices: positions.iter().copied().map(Vertex::from_position).collect(),
        indices: (0..36).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_spans_the_full_extent_with_tiled_uvs() {
        let mesh = ground_plane();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.index_count(), 6);
        for v in &mesh.vertices {
            assert_eq!(v.position[0].abs(), 100.0);
            assert_eq!(v.position[1], 0.0);
            assert_eq!(v.position[2].abs(), 100.0);
            assert_eq!(v.normal, [0.0, 1.0, 0.0]);
            assert!(v.uv[0] == 0.0 || v.uv[0] == 100.0);
        }
    }

    #[test]
    fn ground_indices_form_two_triangles_over_four_vertices() {
        let mesh = ground_plane();
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
        for corner in 0..4u32 {
            assert!(mesh.indices.contains(&corner));
        }
    }

    #[test]
    fn skybox_is_a_unit_cube_of_thirty_six_vertices() {
        let mesh = skybox_cube();
        assert_eq!(mesh.vertices.len(), 36);
        assert_eq!(mesh.index_count(), 36);
        for v in &mesh.vertices {
            for c in v.position {
                assert_eq!(c.abs(), 1.0);
            }
        }
    }

    #[test]
    fn skybox_covers_all_six_faces() {
        let mesh = skybox_cube();
        for axis in 0..3 {
            for sign in [-1.0, 1.0] {
                let face_verts = mesh
                    .vertices
                    .iter()
                    .filter(|v| v.position[axis] == sign)
                    .count();
                // Each face owns 6 of its own vertices and borrows corners
                // from adjacent faces; at least one full face must lie on
                // each side of the cube.
                assert!(face_verts >= 6, "axis {axis} sign {sign}");
            }
        }
    }
}
