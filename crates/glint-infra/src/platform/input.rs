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

//! Provides translation from the concrete windowing backend (`winit`) to the
//! viewer's abstract input events.
//!
//! This module acts as an adapter layer, decoupling the core crate from the
//! specific input event format of the `winit` crate. Unbound keys and
//! non-input window events translate to `None`; OS key repeat is filtered so
//! a press edge reaches the router exactly once.

use glint_core::input::{InputEvent, Key};
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Translates a `winit::event::WindowEvent` into the viewer's [`InputEvent`].
///
/// Returns `Some(InputEvent)` for recognized input actions on bound keys, or
/// `None` for everything else (resizes, focus changes, unbound keys, repeat
/// presses).
pub fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput {
            event: key_event, ..
        } => {
            let PhysicalKey::Code(keycode) = key_event.physical_key else {
                return None;
            };
            let key = map_keycode(keycode)?;
            match key_event.state {
                ElementState::Pressed if !key_event.repeat => {
                    Some(InputEvent::Key { key, pressed: true })
                }
                ElementState::Released => Some(InputEvent::Key {
                    key,
                    pressed: false,
                }),
                _ => None,
            }
        }
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::CursorMoved {
            x: position.x as f32,
            y: position.y as f32,
        }),
        WindowEvent::MouseWheel { delta, .. } => {
            let dy = match delta {
                MouseScrollDelta::LineDelta(_, y) => *y,
                // Pixel deltas (touchpads) normalized to wheel-tick scale.
                MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 120.0,
            };
            if dy != 0.0 {
                Some(InputEvent::Scroll { delta: dy })
            } else {
                None
            }
        }
        _ => None,
    }
}

/// (Internal) Maps a `winit` key code to a bound viewer key.
fn map_keycode(keycode: KeyCode) -> Option<Key> {
    match keycode {
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyA => Some(Key::A),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::KeyD => Some(Key::D),
        KeyCode::KeyC => Some(Key::C),
        KeyCode::KeyP => Some(Key::P),
        KeyCode::KeyL => Some(Key::L),
        KeyCode::KeyK => Some(Key::K),
        KeyCode::KeyO => Some(Key::O),
        KeyCode::F1 => Some(Key::F1),
        KeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn test_map_keycode_bound_keys() {
        assert_eq!(map_keycode(KeyCode::KeyW), Some(Key::W));
        assert_eq!(map_keycode(KeyCode::F1), Some(Key::F1));
        assert_eq!(map_keycode(KeyCode::Escape), Some(Key::Escape));
        assert_eq!(map_keycode(KeyCode::KeyO), Some(Key::O));
    }

    #[test]
    fn test_map_keycode_unbound_returns_none() {
        assert_eq!(map_keycode(KeyCode::KeyQ), None);
        assert_eq!(map_keycode(KeyCode::Space), None);
        assert_eq!(map_keycode(KeyCode::Digit1), None);
    }

    #[test]
    fn test_translate_cursor_moved() {
        let winit_event = WindowEvent::CursorMoved {
            device_id: winit::event::DeviceId::dummy(),
            position: PhysicalPosition::new(100.5, 200.75),
        };
        let expected = Some(InputEvent::CursorMoved {
            x: 100.5,
            y: 200.75,
        });
        assert_eq!(translate_window_event(&winit_event), expected);
    }

    #[test]
    fn test_translate_mouse_wheel_line() {
        let winit_event = WindowEvent::MouseWheel {
            device_id: winit::event::DeviceId::dummy(),
            delta: MouseScrollDelta::LineDelta(0.0, 2.0),
            phase: winit::event::TouchPhase::Moved,
        };
        assert_eq!(
            translate_window_event(&winit_event),
            Some(InputEvent::Scroll { delta: 2.0 })
        );
    }

    #[test]
    fn test_translate_zero_scroll_returns_none() {
        let winit_event = WindowEvent::MouseWheel {
            device_id: winit::event::DeviceId::dummy(),
            delta: MouseScrollDelta::LineDelta(1.0, 0.0),
            phase: winit::event::TouchPhase::Moved,
        };
        assert_eq!(translate_window_event(&winit_event), None);
    }

    #[test]
    fn test_translate_non_input_returns_none() {
        let winit_event_resize = WindowEvent::Resized(winit::dpi::PhysicalSize::new(100, 100));
        let winit_event_focus = WindowEvent::Focused(true);
        let winit_event_close = WindowEvent::CloseRequested;
        assert_eq!(translate_window_event(&winit_event_resize), None);
        assert_eq!(translate_window_event(&winit_event_focus), None);
        assert_eq!(translate_window_event(&winit_event_close), None);
    }
}
