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

//! Draw commands, the frame plan that orders them and the sink that runs it.

use crate::error::RenderError;
use crate::lighting::LightBlocks;
use crate::math::{LinearRgba, Mat4};

use super::frame::{SceneUniforms, SkyboxUniforms};

/// Handle to a mesh registered with the executing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub u32);

/// Handle to a texture (2D or cube map) registered with the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Selects the fixed pipeline state a draw runs under.
///
/// These correspond one-to-one to the render state changes the frame makes:
/// the ground is double-sided, the model is back-face culled, and the skybox
/// passes the depth test at the far plane without writing depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineKind {
    /// Lit scene geometry with back-face culling.
    SceneCulled,
    /// Lit scene geometry drawn double-sided.
    SceneUnculled,
    /// Skybox: depth compare less-or-equal, depth writes off.
    Skybox,
}

/// One draw: a mesh, its texture, the pipeline it runs under and its model
/// matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    /// Pipeline state for this draw.
    pub pipeline: PipelineKind,
    /// The mesh to draw.
    pub mesh: MeshId,
    /// The texture bound for this draw.
    pub texture: TextureId,
    /// The model-to-world transform.
    pub model: Mat4,
}

/// A complete frame: clear color, uniform data and the ordered draw list.
///
/// The plan is pure data; composing it touches no graphics API, so the frame
/// logic is testable headless.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    /// Color the target is cleared to before the first draw.
    pub clear_color: LinearRgba,
    /// Camera matrices and material data shared by the scene draws.
    pub scene: SceneUniforms,
    /// Rotation-only view and projection for the skybox draw.
    pub skybox: SkyboxUniforms,
    /// The resolved light blocks, uploaded whole every frame.
    pub lights: LightBlocks,
    /// Draws in submission order.
    pub draws: Vec<DrawCommand>,
}

/// Executes frame plans.
///
/// The GPU backend implements this over a real device and surface;
/// [`PlanRecorder`] implements it by storing the plans it was handed.
pub trait CommandSink {
    /// Executes one frame plan.
    fn execute(&mut self, plan: &FramePlan) -> Result<(), RenderError>;
}

/// A [`CommandSink`] that records every plan it executes.
///
/// Used by headless tests to assert on draw order and uniform content
/// without a graphics device.
#[derive(Debug, Default)]
pub struct PlanRecorder {
    /// Plans in execution order.
    pub plans: Vec<FramePlan>,
}

impl PlanRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently executed plan, if any.
    pub fn last(&self) -> Option<&FramePlan> {
        self.plans.last()
    }
}

impl CommandSink for PlanRecorder {
    fn execute(&mut self, plan: &FramePlan) -> Result<(), RenderError> {
        self.plans.push(plan.clone());
        Ok(())
    }
}
