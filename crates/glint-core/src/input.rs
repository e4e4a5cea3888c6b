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

//! Backend-agnostic input events and the router that maps them onto the
//! program state.
//!
//! The windowing adapter in the infra crate translates raw window events
//! into [`InputEvent`]s; the router applies them. Movement keys are tracked
//! as held state and applied once per frame with the frame's delta time;
//! everything else fires on the press edge.

use crate::camera::MoveDirection;
use crate::state::ProgramState;

/// The keys the demo binds. Anything else is dropped by the adapter layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move forward.
    W,
    /// Strafe left.
    A,
    /// Move backward.
    S,
    /// Strafe right.
    D,
    /// Toggle mouse look while the overlay is visible.
    C,
    /// Reset the camera pose.
    P,
    /// Toggle the ambient term.
    L,
    /// Toggle the spotlight.
    K,
    /// Toggle the point light.
    O,
    /// Toggle the debug overlay.
    F1,
    /// Request application exit.
    Escape,
}

/// A user input action, decoupled from any windowing backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A bound key changed state. Key repeat is filtered by the adapter, so
    /// `pressed: true` is a genuine press edge.
    Key {
        /// The key.
        key: Key,
        /// `true` on press, `false` on release.
        pressed: bool,
    },
    /// The cursor moved to an absolute position in pixels.
    CursorMoved {
        /// New x position.
        x: f32,
        /// New y position.
        y: f32,
    },
    /// The scroll wheel moved.
    Scroll {
        /// Vertical scroll delta in ticks; positive is away from the user.
        delta: f32,
    },
}

/// Side effects of routing an event that only the platform layer can apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameActions {
    /// The user asked to quit.
    pub exit_requested: bool,
    /// Cursor capture must change: `Some(true)` grab and hide the cursor,
    /// `Some(false)` release and show it.
    pub cursor_capture: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default)]
struct HeldKeys {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
}

/// Maps input events to camera mutations and program-state toggles.
///
/// The router owns only input bookkeeping (held movement keys, the previous
/// cursor sample); all the state it mutates is passed in explicitly.
#[derive(Debug, Default)]
pub struct InputRouter {
    held: HeldKeys,
    /// Previous cursor sample. `None` means the next sample is discarded,
    /// which suppresses the spurious jump after the cursor is (re)captured.
    last_cursor: Option<(f32, f32)>,
}

impl InputRouter {
    /// Creates a router with no keys held and the anti-jump guard armed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes one event, mutating `state` and returning any platform-level
    /// actions to apply.
    pub fn handle_event(&mut self, event: InputEvent, state: &mut ProgramState) -> FrameActions {
        let mut actions = FrameActions::default();
        match event {
            InputEvent::Key { key, pressed } => match key {
                Key::W => self.held.forward = pressed,
                Key::S => self.held.backward = pressed,
                Key::A => self.held.left = pressed,
                Key::D => self.held.right = pressed,
                Key::Escape if pressed => actions.exit_requested = true,
                Key::F1 if pressed => {
                    state.overlay_enabled = !state.overlay_enabled;
                    self.set_mouse_look(state, !state.overlay_enabled, &mut actions);
                }
                Key::C if pressed && state.overlay_enabled => {
                    let enable = !state.mouse_look_enabled;
                    self.set_mouse_look(state, enable, &mut actions);
                }
                Key::P if pressed => state.camera.reset_pose(),
                Key::L if pressed => {
                    state.ambient_strength = if state.ambient_strength != 0.0 {
                        0.0
                    } else {
                        1.0
                    };
                }
                Key::K if pressed => state.spotlight_on = !state.spotlight_on,
                Key::O if pressed => state.point_light_on = !state.point_light_on,
                _ => {}
            },
            InputEvent::CursorMoved { x, y } => {
                // The delta is tracked even while mouse look is off so the
                // sample stays current; it is only applied when enabled.
                if let Some((last_x, last_y)) = self.last_cursor {
                    let dx = x - last_x;
                    // Reversed: window y grows downward, pitch grows upward.
                    let dy = last_y - y;
                    if state.mouse_look_enabled {
                        state.camera.process_mouse_move(dx, dy);
                    }
                }
                self.last_cursor = Some((x, y));
            }
            InputEvent::Scroll { delta } => state.camera.process_scroll(delta),
        }
        actions
    }

    /// Applies held movement keys to the camera, scaled by the frame's
    /// elapsed time. Called once per frame.
    pub fn update_camera(&self, state: &mut ProgramState, dt: f32) {
        if self.held.forward {
            state.camera.process_keyboard(MoveDirection::Forward, dt);
        }
        if self.held.backward {
            state.camera.process_keyboard(MoveDirection::Backward, dt);
        }
        if self.held.left {
            state.camera.process_keyboard(MoveDirection::Left, dt);
        }
        if self.held.right {
            state.camera.process_keyboard(MoveDirection::Right, dt);
        }
    }

    fn set_mouse_look(
        &mut self,
        state: &mut ProgramState,
        enable: bool,
        actions: &mut FrameActions,
    ) {
        state.mouse_look_enabled = enable;
        if enable {
            // Re-arm the anti-jump guard: the first sample after a
            // re-capture carries the cursor's free-roam travel.
            self.last_cursor = None;
        }
        actions.cursor_capture = Some(enable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::DEFAULT_ZOOM;

    fn press(key: Key) -> InputEvent {
        InputEvent::Key { key, pressed: true }
    }

    fn release(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            pressed: false,
        }
    }

    #[test]
    fn escape_requests_exit() {
        let mut router = InputRouter::new();
        let mut state = ProgramState::default();
        let actions = router.handle_event(press(Key::Escape), &mut state);
        assert!(actions.exit_requested);
    }

    #[test]
    fn overlay_toggle_keeps_mouse_look_exactly_opposite() {
        let mut router = InputRouter::new();
        let mut state = ProgramState::default();
        for _ in 0..5 {
            let actions = router.handle_event(press(Key::F1), &mut state);
            assert_eq!(state.mouse_look_enabled, !state.overlay_enabled);
            assert_eq!(actions.cursor_capture, Some(state.mouse_look_enabled));
        }
    }

    #[test]
    fn c_toggles_mouse_look_only_while_overlay_is_visible() {
        let mut router = InputRouter::new();
        let mut state = ProgramState::default();

        // Overlay hidden: C is inert.
        let actions = router.handle_event(press(Key::C), &mut state);
        assert!(state.mouse_look_enabled);
        assert_eq!(actions.cursor_capture, None);

        // Overlay visible: C re-enables mouse look independently.
        router.handle_event(press(Key::F1), &mut state);
        assert!(!state.mouse_look_enabled);
        let actions = router.handle_event(press(Key::C), &mut state);
        assert!(state.mouse_look_enabled);
        assert!(state.overlay_enabled);
        assert_eq!(actions.cursor_capture, Some(true));
    }

    #[test]
    fn light_toggles_fire_once_per_press_edge() {
        let mut router = InputRouter::new();
        let mut state = ProgramState::default();

        router.handle_event(press(Key::K), &mut state);
        assert!(!state.spotlight_on);
        // Release then press again: a second edge, a second toggle.
        router.handle_event(release(Key::K), &mut state);
        router.handle_event(press(Key::K), &mut state);
        assert!(state.spotlight_on);

        router.handle_event(press(Key::O), &mut state);
        assert!(!state.point_light_on);

        assert_eq!(state.ambient_strength, 0.0);
        router.handle_event(press(Key::L), &mut state);
        assert_eq!(state.ambient_strength, 1.0);
        router.handle_event(press(Key::L), &mut state);
        assert_eq!(state.ambient_strength, 0.0);
    }

    #[test]
    fn ambient_toggle_from_slider_value_snaps_to_zero() {
        let mut router = InputRouter::new();
        let mut state = ProgramState::default();
        state.ambient_strength = 0.35;
        router.handle_event(press(Key::L), &mut state);
        assert_eq!(state.ambient_strength, 0.0);
    }

    #[test]
    fn first_cursor_sample_is_discarded() {
        let mut router = InputRouter::new();
        let mut state = ProgramState::default();
        let yaw_before = state.camera.yaw;
        router.handle_event(InputEvent::CursorMoved { x: 900.0, y: 20.0 }, &mut state);
        assert_eq!(state.camera.yaw, yaw_before);
        // The second sample produces a real delta.
        router.handle_event(InputEvent::CursorMoved { x: 910.0, y: 20.0 }, &mut state);
        assert!(state.camera.yaw > yaw_before);
    }

    #[test]
    fn anti_jump_guard_rearms_when_mouse_look_is_reenabled() {
        let mut router = InputRouter::new();
        let mut state = ProgramState::default();
        router.handle_event(InputEvent::CursorMoved { x: 600.0, y: 400.0 }, &mut state);

        // Open the overlay, roam the cursor far away, close the overlay.
        router.handle_event(press(Key::F1), &mut state);
        router.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 }, &mut state);
        router.handle_event(press(Key::F1), &mut state);

        // The first sample after re-capture must not move the camera.
        let yaw_before = state.camera.yaw;
        let pitch_before = state.camera.pitch;
        router.handle_event(InputEvent::CursorMoved { x: 600.0, y: 400.0 }, &mut state);
        assert_eq!(state.camera.yaw, yaw_before);
        assert_eq!(state.camera.pitch, pitch_before);
    }

    #[test]
    fn cursor_motion_is_ignored_while_mouse_look_is_disabled() {
        let mut router = InputRouter::new();
        let mut state = ProgramState::default();
        router.handle_event(press(Key::F1), &mut state);
        router.handle_event(InputEvent::CursorMoved { x: 100.0, y: 100.0 }, &mut state);
        let yaw_before = state.camera.yaw;
        router.handle_event(InputEvent::CursorMoved { x: 500.0, y: 300.0 }, &mut state);
        assert_eq!(state.camera.yaw, yaw_before);
    }

    #[test]
    fn held_movement_keys_translate_once_per_update() {
        let mut router = InputRouter::new();
        let mut state = ProgramState::default();
        let start = state.camera.position;
        let front = state.camera.front;

        router.handle_event(press(Key::W), &mut state);
        router.update_camera(&mut state, 1.0);
        router.handle_event(release(Key::W), &mut state);
        router.update_camera(&mut state, 1.0);

        let moved = state.camera.position - start;
        let expected = front * state.camera.speed;
        assert!((moved - expected).length() < 1e-4);
    }

    #[test]
    fn opposite_keys_cancel_out() {
        let mut router = InputRouter::new();
        let mut state = ProgramState::default();
        let start = state.camera.position;
        router.handle_event(press(Key::A), &mut state);
        router.handle_event(press(Key::D), &mut state);
        router.update_camera(&mut state, 0.5);
        assert!((state.camera.position - start).length() < 1e-5);
    }

    #[test]
    fn scroll_routes_to_camera_zoom() {
        let mut router = InputRouter::new();
        let mut state = ProgramState::default();
        router.handle_event(InputEvent::Scroll { delta: 5.0 }, &mut state);
        assert_eq!(state.camera.zoom, DEFAULT_ZOOM - 5.0);
    }

    #[test]
    fn p_resets_the_camera_pose() {
        let mut router = InputRouter::new();
        let mut state = ProgramState::default();
        router.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 }, &mut state);
        router.handle_event(InputEvent::CursorMoved { x: 250.0, y: 90.0 }, &mut state);
        router.handle_event(press(Key::P), &mut state);
        assert_eq!(state.camera.position, crate::math::Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(state.camera.yaw, 0.0);
        assert_eq!(state.camera.pitch, 0.0);
    }
}
