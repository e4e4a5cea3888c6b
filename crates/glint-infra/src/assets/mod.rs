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

//! Asset loading: images, cube-map faces and OBJ meshes.
//!
//! Loads are best-effort: a missing or unreadable asset logs an error and
//! degrades to a placeholder (a 1x1 white texture, an empty mesh) instead of
//! failing the program.

pub mod obj;
pub mod texture;

pub use obj::load_obj_mesh;
pub use texture::{load_cubemap_faces, load_image_rgba, ImageData};
