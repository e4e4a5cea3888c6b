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

//! The data-driven frame description.
//!
//! Instead of issuing graphics calls directly, the scene is expressed each
//! frame as a [`FramePlan`]: an ordered list of draw commands plus the
//! uniform data they consume. A [`CommandSink`] executes the plan; the GPU
//! backend lives in the infra crate and a recording sink stands in for it in
//! tests.

pub mod command;
pub mod frame;
pub mod geometry;

pub use command::{
    CommandSink, DrawCommand, FramePlan, MeshId, PipelineKind, PlanRecorder, TextureId,
};
pub use frame::{compose_frame, SceneAssets, SceneUniforms, SkyboxUniforms, Z_FAR, Z_NEAR};
pub use geometry::{ground_plane, skybox_cube, MeshData, Vertex};
