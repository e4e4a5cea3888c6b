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

//! Per-frame plan composition: state in, [`FramePlan`] out.

use crate::lighting::MATERIAL_SHININESS;
use crate::math::{degrees_to_radians, LinearRgba, Mat3, Mat4};
use crate::state::ProgramState;

use super::command::{DrawCommand, FramePlan, MeshId, PipelineKind, TextureId};

/// Near clipping plane distance.
pub const Z_NEAR: f32 = 0.1;
/// Far clipping plane distance.
pub const Z_FAR: f32 = 100.0;

/// Camera matrices and material constants shared by the lit scene draws.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    /// The view matrix, column-major.
    pub view: [[f32; 4]; 4],
    /// The projection matrix, column-major.
    pub projection: [[f32; 4]; 4],
    /// Camera world position (xyz), padding (w).
    pub camera_position: [f32; 4],
    /// Material constants: specular shininess (x), padding (yzw).
    pub material: [f32; 4],
}

/// View and projection for the skybox draw.
///
/// The view matrix is the camera's with its translation stripped, so the box
/// stays centered on the viewer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SkyboxUniforms {
    /// Rotation-only view matrix, column-major.
    pub view: [[f32; 4]; 4],
    /// The projection matrix, column-major.
    pub projection: [[f32; 4]; 4],
}

/// Handles to the three meshes and three textures the scene draws.
///
/// Registered with the backend once at startup, referenced by every plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneAssets {
    /// The ground quad.
    pub ground_mesh: MeshId,
    /// The tiled diffuse map for the ground.
    pub ground_texture: TextureId,
    /// The loaded model.
    pub model_mesh: MeshId,
    /// The model's diffuse map.
    pub model_texture: TextureId,
    /// The skybox cube.
    pub skybox_mesh: MeshId,
    /// The cube-map texture.
    pub skybox_texture: TextureId,
}

/// Composes the plan for one frame from the current program state.
///
/// The draw order is fixed: ground (double-sided), model (culled), then the
/// skybox last so its relaxed depth test fills only the untouched pixels.
/// The clear color is pinned to opaque black; the persisted clear color is
/// carried in the state but not fed to the clear.
pub fn compose_frame(state: &ProgramState, aspect: f32, assets: &SceneAssets) -> FramePlan {
    let view = state.camera.view_matrix();
    let projection = Mat4::perspective_rh_zo(
        degrees_to_radians(state.camera.zoom),
        aspect,
        Z_NEAR,
        Z_FAR,
    );

    let scene = SceneUniforms {
        view: view.to_cols_array_2d(),
        projection: projection.to_cols_array_2d(),
        camera_position: [
            state.camera.position.x,
            state.camera.position.y,
            state.camera.position.z,
            0.0,
        ],
        material: [MATERIAL_SHININESS, 0.0, 0.0, 0.0],
    };

    let skybox = SkyboxUniforms {
        view: Mat3::from_mat4(&view).to_mat4().to_cols_array_2d(),
        projection: projection.to_cols_array_2d(),
    };

    let lights = state.lights.resolve(state.light_toggles(), &state.camera);

    FramePlan {
        clear_color: LinearRgba::BLACK,
        scene,
        skybox,
        lights,
        draws: vec![
            DrawCommand {
                pipeline: PipelineKind::SceneUnculled,
                mesh: assets.ground_mesh,
                texture: assets.ground_texture,
                model: Mat4::IDENTITY,
            },
            DrawCommand {
                pipeline: PipelineKind::SceneCulled,
                mesh: assets.model_mesh,
                texture: assets.model_texture,
                model: Mat4::IDENTITY,
            },
            DrawCommand {
                pipeline: PipelineKind::Skybox,
                mesh: assets.skybox_mesh,
                texture: assets.skybox_texture,
                model: Mat4::IDENTITY,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;
    use crate::render::command::{CommandSink, PlanRecorder};

    fn test_assets() -> SceneAssets {
        SceneAssets {
            ground_mesh: MeshId(0),
            ground_texture: TextureId(0),
            model_mesh: MeshId(1),
            model_texture: TextureId(1),
            skybox_mesh: MeshId(2),
            skybox_texture: TextureId(2),
        }
    }

    #[test]
    fn draw_order_is_ground_model_skybox() {
        let state = ProgramState::default();
        let plan = compose_frame(&state, 1.5, &test_assets());
        let kinds: Vec<_> = plan.draws.iter().map(|d| d.pipeline).collect();
        assert_eq!(
            kinds,
            vec![
                PipelineKind::SceneUnculled,
                PipelineKind::SceneCulled,
                PipelineKind::Skybox,
            ]
        );
    }

    #[test]
    fn clear_color_is_black_regardless_of_persisted_value() {
        let mut state = ProgramState::default();
        state.clear_color = Vec3::new(0.9, 0.1, 0.4);
        let plan = compose_frame(&state, 1.5, &test_assets());
        assert_eq!(plan.clear_color, LinearRgba::BLACK);
    }

    #[test]
    fn skybox_view_has_no_translation() {
        let mut state = ProgramState::default();
        state.camera.position = Vec3::new(30.0, -7.0, 12.0);
        let plan = compose_frame(&state, 1.5, &test_assets());
        assert_eq!(plan.skybox.view[3], [0.0, 0.0, 0.0, 1.0]);
        // The rotation part matches the scene view.
        for col in 0..3 {
            for row in 0..3 {
                assert_eq!(plan.skybox.view[col][row], plan.scene.view[col][row]);
            }
        }
    }

    #[test]
    fn zooming_narrows_the_projection() {
        let mut state = ProgramState::default();
        let wide = compose_frame(&state, 1.5, &test_assets());
        state.camera.process_scroll(20.0);
        let narrow = compose_frame(&state, 1.5, &test_assets());
        // Smaller field of view means larger focal scaling terms.
        assert!(narrow.scene.projection[0][0] > wide.scene.projection[0][0]);
        assert!(narrow.scene.projection[1][1] > wide.scene.projection[1][1]);
    }

    #[test]
    fn light_blocks_follow_the_toggles() {
        let mut state = ProgramState::default();
        state.spotlight_on = false;
        let plan = compose_frame(&state, 1.5, &test_assets());
        assert_eq!(plan.lights.spot.diffuse, [0.0; 4]);
        assert_ne!(plan.lights.point.diffuse, [0.0; 4]);
    }

    #[test]
    fn shininess_rides_in_the_material_block() {
        let state = ProgramState::default();
        let plan = compose_frame(&state, 1.5, &test_assets());
        assert_eq!(plan.scene.material[0], MATERIAL_SHININESS);
    }

    #[test]
    fn recorder_captures_executed_plans_in_order() {
        let state = ProgramState::default();
        let mut sink = PlanRecorder::new();
        let plan = compose_frame(&state, 1.5, &test_assets());
        sink.execute(&plan).unwrap();
        sink.execute(&plan).unwrap();
        assert_eq!(sink.plans.len(), 2);
        assert_eq!(sink.last().unwrap().draws.len(), 3);
    }
}
