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

//! # Glint Infra
//!
//! The platform side of the viewer: winit windowing and input translation,
//! the wgpu renderer that executes frame plans, asset loading (images, cube
//! maps, OBJ meshes) and the egui overlay plumbing.

#![warn(missing_docs)]

pub mod assets;
pub mod graphics;
pub mod overlay;
pub mod platform;

pub use graphics::context::GpuContext;
pub use graphics::executor::SceneRenderer;
pub use overlay::Overlay;
pub use platform::input::translate_window_event;
pub use platform::window::{ViewerWindow, ViewerWindowBuilder};
