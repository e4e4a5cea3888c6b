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

//! The debug overlay panels: read-only camera info and the lighting slider.

use glint_core::ProgramState;

/// Builds the overlay UI for one frame.
pub fn draw_overlay(ctx: &egui::Context, state: &mut ProgramState) {
    egui::Window::new("Camera settings")
        .collapsible(false)
        .default_pos([0.0, 0.0])
        .default_size([600.0, 130.0])
        .show(ctx, |ui| {
            let c = &state.camera;
            ui.label("Camera Info:");
            ui.indent("camera_info", |ui| {
                ui.label(format!(
                    "Camera position: ({:.3}, {:.3}, {:.3})",
                    c.position.x, c.position.y, c.position.z
                ));
                ui.label(format!("(Yaw, Pitch): ({:.3}, {:.3})", c.yaw, c.pitch));
                ui.label(format!(
                    "Camera front: ({:.3}, {:.3}, {:.3})",
                    c.front.x, c.front.y, c.front.z
                ));
            });
        });

    egui::Window::new("Lighting").show(ctx, |ui| {
        ui.add(
            egui::Slider::new(&mut state.ambient_strength, 0.0..=1.0)
                .step_by(0.05)
                .text("ambient strength"),
        );
    });
}
