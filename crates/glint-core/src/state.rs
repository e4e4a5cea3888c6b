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

//! The explicitly owned program state and its flat-file persistence.
//!
//! `ProgramState` is passed by reference to the input router, the frame
//! composer and the overlay; there is no ambient global. A small subset of it
//! survives between runs through [`PersistedState`], a fixed-order plain-text
//! record of eleven scalar values.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::camera::FlyCamera;
use crate::lighting::{LightRig, LightToggles};
use crate::math::Vec3;

/// Everything mutable the frame loop touches, owned by the application.
///
/// Mutated only by the input router during the frame loop; the renderer and
/// overlay read it. Load/save happen once each, outside the loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramState {
    /// Persisted clear color. Round-trips through the settings file; the
    /// frame plan itself pins the clear to opaque black.
    pub clear_color: Vec3,
    /// Whether the debug overlay is drawn this frame. Not persisted.
    pub overlay_enabled: bool,
    /// The fly camera.
    pub camera: FlyCamera,
    /// Whether cursor motion drives the camera. Inverse-coupled to the
    /// overlay by the F1 binding, independently togglable with C.
    pub mouse_look_enabled: bool,
    /// Whether the spotlight contributes light.
    pub spotlight_on: bool,
    /// Whether the point light contributes light. Not persisted.
    pub point_light_on: bool,
    /// Ambient strength. The L key toggles it between 0 and 1; the overlay
    /// slider can drag it anywhere in [0, 1]. Any non-zero value enables the
    /// directional light's ambient term.
    pub ambient_strength: f32,
    /// The fixed light tuning.
    pub lights: LightRig,
}

impl ProgramState {
    /// The light toggles for the current frame.
    pub fn light_toggles(&self) -> LightToggles {
        LightToggles {
            ambient_strength: self.ambient_strength,
            spotlight_on: self.spotlight_on,
            point_light_on: self.point_light_on,
        }
    }
}

impl Default for ProgramState {
    fn default() -> Self {
        Self {
            clear_color: Vec3::ZERO,
            overlay_enabled: false,
            camera: FlyCamera::default(),
            mouse_look_enabled: true,
            spotlight_on: true,
            point_light_on: true,
            ambient_strength: 0.0,
            lights: LightRig::default(),
        }
    }
}

/// The flat persisted record: eleven values, one per line, fixed order.
///
/// Order: clear color r/g/b, camera position x/y/z, camera front x/y/z,
/// spotlight flag (0/1), ambient strength. No header, no versioning. A
/// short or malformed file is read as a prefix: parsing stops at the first
/// missing or unparsable token and every later field keeps its default.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedState {
    /// Persisted clear color triple.
    pub clear_color: Vec3,
    /// Camera world position.
    pub camera_position: Vec3,
    /// Camera front vector.
    pub camera_front: Vec3,
    /// Spotlight toggle.
    pub spotlight_on: bool,
    /// Ambient strength.
    pub ambient_strength: f32,
}

impl Default for PersistedState {
    fn default() -> Self {
        let state = ProgramState::default();
        Self::capture(&state)
    }
}

impl PersistedState {
    /// Captures the persistable subset of the program state.
    pub fn capture(state: &ProgramState) -> Self {
        Self {
            clear_color: state.clear_color,
            camera_position: state.camera.position,
            camera_front: state.camera.front,
            spotlight_on: state.spotlight_on,
            ambient_strength: state.ambient_strength,
        }
    }

    /// Writes the loaded values back into the program state.
    ///
    /// The camera front is applied directly and the right/up basis re-derived
    /// from it; yaw and pitch keep their defaults until the next mouse look
    /// recomputes them.
    pub fn apply(&self, state: &mut ProgramState) {
        state.clear_color = self.clear_color;
        state.camera.position = self.camera_position;
        if self.camera_front.length_squared() > 0.0 {
            let front = self.camera_front.normalize();
            state.camera.front = front;
            state.camera.right = front.cross(state.camera.world_up).normalize();
            state.camera.up = state.camera.right.cross(front).normalize();
        }
        state.spotlight_on = self.spotlight_on;
        state.ambient_strength = self.ambient_strength;
    }

    /// Parses the record from file text.
    ///
    /// Tokens are read in the fixed field order; the first missing or
    /// malformed token stops the read and leaves the remaining fields at
    /// their defaults. Boolean fields accept any numeric value, non-zero
    /// meaning true.
    pub fn parse(text: &str) -> Self {
        let mut out = Self::default();
        let mut values = [0.0_f32; 11];
        let mut count = 0;
        for token in text.split_whitespace().take(values.len()) {
            match token.parse::<f32>() {
                Ok(v) => {
                    values[count] = v;
                    count += 1;
                }
                Err(_) => break,
            }
        }

        if count >= 3 {
            out.clear_color = Vec3::new(values[0], values[1], values[2]);
        }
        if count >= 6 {
            out.camera_position = Vec3::new(values[3], values[4], values[5]);
        }
        if count >= 9 {
            out.camera_front = Vec3::new(values[6], values[7], values[8]);
        }
        if count >= 10 {
            out.spotlight_on = values[9] != 0.0;
        }
        if count >= 11 {
            out.ambient_strength = values[10];
        }
        out
    }

    /// Loads the record from `path`, best-effort.
    ///
    /// A missing or unreadable file silently yields the defaults (logged at
    /// debug level only; a fresh run has no file yet).
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(err) => {
                log::debug!("no settings file at {}: {err}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Saves the record to `path`, one value per line in the fixed order.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut out = String::new();
        for value in [
            self.clear_color.x,
            self.clear_color.y,
            self.clear_color.z,
            self.camera_position.x,
            self.camera_position.y,
            self.camera_position.z,
            self.camera_front.x,
            self.camera_front.y,
            self.camera_front.z,
            if self.spotlight_on { 1.0 } else { 0.0 },
            self.ambient_strength,
        ] {
            out.push_str(&format!("{value}\n"));
        }
        let mut file = fs::File::create(path)?;
        file.write_all(out.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("glint-state-{name}-{}", std::process::id()))
    }

    #[test]
    fn save_then_load_round_trips_every_field() {
        let mut state = ProgramState::default();
        state.clear_color = Vec3::new(0.25, 0.5, 0.75);
        state.camera.position = Vec3::new(1.5, -2.0, 3.25);
        state.camera.front = Vec3::new(0.0, 0.0, -1.0);
        state.spotlight_on = false;
        state.ambient_strength = 0.625;

        let path = tmp_path("roundtrip");
        let saved = PersistedState::capture(&state);
        saved.save(&path).unwrap();
        let loaded = PersistedState::load(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, saved);
    }

    #[test]
    fn missing_file_yields_documented_defaults() {
        let loaded = PersistedState::load(Path::new("/nonexistent/glint/state.txt"));
        assert_eq!(loaded.clear_color, Vec3::ZERO);
        assert_eq!(loaded.camera_position, crate::camera::DEFAULT_POSITION);
        assert!(loaded.spotlight_on);
        assert_eq!(loaded.ambient_strength, 0.0);
    }

    #[test]
    fn three_of_eleven_values_set_only_the_clear_color() {
        let loaded = PersistedState::parse("0.1\n0.2\n0.3\n");
        assert_eq!(loaded.clear_color, Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(loaded.camera_position, crate::camera::DEFAULT_POSITION);
        assert!(loaded.spotlight_on);
    }

    #[test]
    fn malformed_token_stops_the_read_mid_stream() {
        let loaded = PersistedState::parse("0.1 0.2 0.3 7.0 oops 9.0 1 1 1 0 1");
        assert_eq!(loaded.clear_color, Vec3::new(0.1, 0.2, 0.3));
        // The partial position group (one of three values) is discarded.
        assert_eq!(loaded.camera_position, crate::camera::DEFAULT_POSITION);
        assert!(loaded.spotlight_on);
    }

    #[test]
    fn full_record_parses_booleans_as_nonzero() {
        let loaded = PersistedState::parse("0 0 0  1 2 3  0 0 -1  0  1");
        assert_eq!(loaded.camera_position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(loaded.camera_front, Vec3::new(0.0, 0.0, -1.0));
        assert!(!loaded.spotlight_on);
        assert_eq!(loaded.ambient_strength, 1.0);
    }

    #[test]
    fn apply_rebuilds_an_orthonormal_camera_basis() {
        let mut state = ProgramState::default();
        let record = PersistedState::parse("0 0 0  0 1 0  1 0 0  1  0");
        record.apply(&mut state);
        assert_eq!(state.camera.front, Vec3::X);
        assert_eq!(state.camera.right, Vec3::Z);
        assert!((state.camera.front.dot(state.camera.right)).abs() < 1e-5);
        assert!((state.camera.front.dot(state.camera.up)).abs() < 1e-5);
    }
}
