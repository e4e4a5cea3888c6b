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

//! # Glint Core
//!
//! Backend-free heart of the scene viewer: math, the fly camera, the
//! lighting rig, input routing, persisted state and the data-driven frame
//! plan. Everything here is testable without a window or a GPU; the wgpu
//! and winit glue lives in `glint-infra`.

#![warn(missing_docs)]

pub mod camera;
pub mod error;
pub mod input;
pub mod lighting;
pub mod math;
pub mod render;
pub mod state;

pub use camera::{FlyCamera, MoveDirection};
pub use error::RenderError;
pub use input::{FrameActions, InputEvent, InputRouter, Key};
pub use lighting::{LightBlocks, LightRig, LightToggles};
pub use render::{compose_frame, CommandSink, FramePlan, SceneAssets};
pub use state::{PersistedState, ProgramState};
