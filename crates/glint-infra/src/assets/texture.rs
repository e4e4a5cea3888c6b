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

//! Image loading for 2D textures and cube-map faces.

use std::path::Path;

/// A decoded RGBA8 image ready for upload.
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Tightly packed RGBA8 pixels, top row first.
    pub pixels: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageData {
    /// A 1x1 opaque white placeholder, used when a load fails.
    pub fn placeholder() -> Self {
        Self {
            pixels: vec![255, 255, 255, 255],
            width: 1,
            height: 1,
        }
    }
}

/// Loads an image as RGBA8, flipped vertically to match the texture
/// coordinate convention the meshes were authored with.
///
/// A failed load logs an error and returns the white placeholder; the scene
/// keeps rendering with a flat surface.
pub fn load_image_rgba(path: &Path) -> ImageData {
    match image::open(path) {
        Ok(img) => {
            let rgba = img.flipv().to_rgba8();
            let (width, height) = rgba.dimensions();
            log::debug!("Loaded texture {} ({width}x{height})", path.display());
            ImageData {
                pixels: rgba.into_raw(),
                width,
                height,
            }
        }
        Err(err) => {
            log::error!("Texture failed to load at path: {}: {err}", path.display());
            ImageData::placeholder()
        }
    }
}

/// Loads the six faces of a cube map from a directory.
///
/// Face order matches the graphics-API convention: right, left, top,
/// bottom, front, back (+X, -X, +Y, -Y, +Z, -Z). All faces must share one
/// square size; any mismatch or failed load degrades the whole cube map to
/// 1x1 white placeholders.
pub fn load_cubemap_faces(dir: &Path) -> ([Vec<u8>; 6], u32) {
    const FACE_FILES: [&str; 6] = [
        "right.jpg",
        "left.jpg",
        "top.jpg",
        "bottom.jpg",
        "front.jpg",
        "back.jpg",
    ];

    let images: Vec<ImageData> = FACE_FILES
        .iter()
        .map(|name| load_image_rgba(&dir.join(name)))
        .collect();

    let size = images[0].width;
    let uniform = images
        .iter()
        .all(|img| img.width == size && img.height == size);
    if !uniform {
        log::error!(
            "CubeMap faces in {} have mismatched sizes; using placeholders",
            dir.display()
        );
        let white = ImageData::placeholder();
        return (std::array::from_fn(|_| white.pixels.clone()), 1);
    }

    let mut faces = images.into_iter().map(|img| img.pixels);
    (std::array::from_fn(|_| faces.next().unwrap_or_default()), size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_image_degrades_to_white_placeholder() {
        let img = load_image_rgba(Path::new("/nonexistent/texture.jpg"));
        assert_eq!(img.width, 1);
        assert_eq!(img.height, 1);
        assert_eq!(img.pixels, vec![255, 255, 255, 255]);
    }

    #[test]
    fn missing_cubemap_degrades_to_unit_faces() {
        let (faces, size) = load_cubemap_faces(Path::new("/nonexistent/skybox"));
        assert_eq!(size, 1);
        for face in &faces {
            assert_eq!(face.len(), 4);
        }
    }
}
