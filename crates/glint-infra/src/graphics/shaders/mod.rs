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

//! Compile-time embedded shader sources for the two render paths.
//!
//! - [`SCENE_WGSL`] - Phong-lit textured geometry under a directional light,
//!   a point light and the camera-mounted spotlight.
//! - [`SKYBOX_WGSL`] - Cube-map background sampled by direction.

/// WGSL source for the lit scene pipeline.
pub const SCENE_WGSL: &str = include_str!("scene.wgsl");

/// WGSL source for the skybox pipeline.
pub const SKYBOX_WGSL: &str = include_str!("skybox.wgsl");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_shader_declares_both_entry_points() {
        assert!(SCENE_WGSL.contains("fn vs_main"));
        assert!(SCENE_WGSL.contains("fn fs_main"));
    }

    #[test]
    fn skybox_shader_declares_both_entry_points() {
        assert!(SKYBOX_WGSL.contains("fn vs_main"));
        assert!(SKYBOX_WGSL.contains("fn fs_main"));
    }
}
