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

//! The free-flying camera driven by keyboard and mouse input.

use crate::math::{degrees_to_radians, Mat4, Vec3};

/// Default yaw in degrees. Looks down the negative Z axis.
pub const DEFAULT_YAW: f32 = -90.0;
/// Default pitch in degrees.
pub const DEFAULT_PITCH: f32 = 0.0;
/// Default movement speed in world units per second.
pub const DEFAULT_SPEED: f32 = 2.5;
/// Default mouse-look sensitivity in degrees per pixel.
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
/// Default zoom (vertical field of view) in degrees.
pub const DEFAULT_ZOOM: f32 = 45.0;

/// The spawn position the camera starts at on a fresh run.
pub const DEFAULT_POSITION: Vec3 = Vec3::new(-0.5, 5.0, 100.0);

/// Pitch is kept strictly inside this bound (degrees) to avoid the look-at
/// singularity when the view direction aligns with the world up axis.
const PITCH_LIMIT: f32 = 89.0;
/// Zoom (field of view) bounds in degrees.
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;

/// A movement direction for keyboard translation, relative to the camera's
/// current orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Along the front vector.
    Forward,
    /// Against the front vector.
    Backward,
    /// Against the right vector.
    Left,
    /// Along the right vector.
    Right,
}

/// A fly camera: position plus an orientation basis derived from yaw/pitch.
///
/// The basis vectors (`front`, `right`, `up`) are recomputed whenever yaw or
/// pitch change; they are unit length by construction. Position is
/// unconstrained in world space. All angles are in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyCamera {
    /// World-space position.
    pub position: Vec3,
    /// Unit vector the camera looks along.
    pub front: Vec3,
    /// Unit vector pointing up in view space.
    pub up: Vec3,
    /// Unit vector pointing right in view space.
    pub right: Vec3,
    /// The world up axis used to derive the basis.
    pub world_up: Vec3,
    /// Horizontal look angle in degrees. Unbounded; only its sine/cosine are
    /// ever used, so it is intentionally never wrapped.
    pub yaw: f32,
    /// Vertical look angle in degrees, clamped to ±89.
    pub pitch: f32,
    /// Vertical field of view in degrees, clamped to [1, 45].
    pub zoom: f32,
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Mouse-look sensitivity in degrees per pixel of cursor travel.
    pub sensitivity: f32,
}

impl FlyCamera {
    /// Creates a camera at `position` with the default orientation and tuning.
    pub fn new(position: Vec3) -> Self {
        let mut camera = Self {
            position,
            front: -Vec3::Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            zoom: DEFAULT_ZOOM,
            speed: DEFAULT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
        };
        camera.update_basis();
        camera
    }

    /// Translates the camera along its basis by `speed * dt`.
    ///
    /// No bounds are applied; the scene has no collision.
    pub fn process_keyboard(&mut self, direction: MoveDirection, dt: f32) {
        let velocity = self.speed * dt;
        match direction {
            MoveDirection::Forward => self.position += self.front * velocity,
            MoveDirection::Backward => self.position -= self.front * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
        }
    }

    /// Applies a mouse-look delta in pixels.
    ///
    /// `dy` follows screen conventions at the call site: the input layer is
    /// expected to flip it so positive values pitch the view upward. Pitch is
    /// clamped; yaw accumulates freely.
    pub fn process_mouse_move(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch += dy * self.sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_basis();
    }

    /// Applies a scroll-wheel zoom delta in ticks.
    ///
    /// The zoom value feeds the projection matrix's vertical field of view.
    pub fn process_scroll(&mut self, dy: f32) {
        self.zoom = (self.zoom - dy).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Returns the right-handed view matrix for the current pose.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
            .unwrap_or(Mat4::IDENTITY)
    }

    /// Resets the camera to the fixed debug pose: a short step back from the
    /// origin, level, looking down negative Z.
    pub fn reset_pose(&mut self) {
        self.position = Vec3::new(0.0, 0.0, 3.0);
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.front = -Vec3::Z;
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    /// Recomputes the orientation basis from yaw and pitch
    /// (spherical-to-Cartesian).
    fn update_basis(&mut self) {
        let yaw = degrees_to_radians(self.yaw);
        let pitch = degrees_to_radians(self.pitch);
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for FlyCamera {
    /// Returns a camera at the documented spawn position.
    fn default() -> Self {
        Self::new(DEFAULT_POSITION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = FlyCamera::default();
        assert_relative_eq!(camera.front.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(camera.front.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(camera.front.z, -1.0, epsilon = 1e-5);
        assert_eq!(camera.position, DEFAULT_POSITION);
    }

    #[test]
    fn pitch_is_clamped_under_any_mutation_sequence() {
        let mut camera = FlyCamera::default();
        for _ in 0..100 {
            camera.process_mouse_move(0.0, 50.0);
        }
        assert!(camera.pitch <= 89.0);
        for _ in 0..200 {
            camera.process_mouse_move(0.0, -50.0);
        }
        assert!(camera.pitch >= -89.0);
        // The basis stays well-formed at the clamp.
        assert_relative_eq!(camera.front.length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.front.dot(camera.right), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn yaw_accumulates_without_wrapping() {
        let mut camera = FlyCamera::default();
        for _ in 0..100 {
            camera.process_mouse_move(100.0, 0.0);
        }
        assert_relative_eq!(camera.yaw, DEFAULT_YAW + 100.0 * 100.0 * DEFAULT_SENSITIVITY);
    }

    #[test]
    fn scroll_up_five_ticks_from_default_gives_forty_degrees() {
        let mut camera = FlyCamera::default();
        camera.process_scroll(5.0);
        assert_relative_eq!(camera.zoom, 40.0);
    }

    #[test]
    fn zoom_clamps_to_one_degree_regardless_of_further_scrolling() {
        let mut camera = FlyCamera::default();
        for _ in 0..50 {
            camera.process_scroll(5.0);
        }
        assert_relative_eq!(camera.zoom, 1.0);
        camera.process_scroll(-100.0);
        assert_relative_eq!(camera.zoom, 45.0);
    }

    #[test]
    fn one_second_of_forward_movement_travels_speed_along_front() {
        let mut camera = FlyCamera::default();
        let start = camera.position;
        let front = camera.front;
        // 60 simulated frames adding up to exactly one second.
        for _ in 0..60 {
            camera.process_keyboard(MoveDirection::Forward, 1.0 / 60.0);
        }
        let expected = start + front * DEFAULT_SPEED;
        assert_relative_eq!(camera.position.x, expected.x, epsilon = 1e-4);
        assert_relative_eq!(camera.position.y, expected.y, epsilon = 1e-4);
        assert_relative_eq!(camera.position.z, expected.z, epsilon = 1e-4);
    }

    #[test]
    fn strafe_moves_along_right_vector() {
        let mut camera = FlyCamera::default();
        let start = camera.position;
        camera.process_keyboard(MoveDirection::Right, 2.0);
        let expected = start + camera.right * (DEFAULT_SPEED * 2.0);
        assert_relative_eq!(camera.position.x, expected.x, epsilon = 1e-4);
        assert_relative_eq!(camera.position.z, expected.z, epsilon = 1e-4);
    }

    #[test]
    fn view_matrix_maps_camera_position_to_view_origin() {
        let camera = FlyCamera::default();
        let view = camera.view_matrix();
        let origin = view * camera.position.extend(1.0);
        assert_relative_eq!(origin.truncate().length(), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn reset_pose_returns_to_fixed_debug_pose() {
        let mut camera = FlyCamera::default();
        camera.process_mouse_move(123.0, 45.0);
        camera.process_keyboard(MoveDirection::Left, 3.0);
        camera.reset_pose();
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(camera.yaw, 0.0);
        assert_eq!(camera.pitch, 0.0);
        assert_eq!(camera.front, -Vec3::Z);
    }
}
