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

//! Interactive scene viewer: a fly camera over a textured ground plane with
//! a loaded model, three lights, a cube-map skybox and an egui debug
//! overlay. Camera pose and light toggles persist between runs in a flat
//! text file.

mod panels;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use glint_core::render::{compose_frame, ground_plane, skybox_cube, SceneAssets};
use glint_core::{InputRouter, PersistedState, ProgramState, RenderError};
use glint_infra::assets::{load_cubemap_faces, load_image_rgba, load_obj_mesh};
use glint_infra::{translate_window_event, GpuContext, Overlay, SceneRenderer, ViewerWindow, ViewerWindowBuilder};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

/// Where the persisted settings live, relative to the working directory.
const STATE_FILE: &str = "resources/program_state.txt";

const GROUND_TEXTURE: &str = "resources/textures/stonefloor1.jpg";
const SKYBOX_DIR: &str = "resources/textures/skybox1";
const MODEL_PATH: &str = "resources/objects/backpack/backpack.obj";
const MODEL_TEXTURE: &str = "resources/objects/backpack/diffuse.jpg";

/// Everything that only exists once a window is available.
struct Stage {
    window: ViewerWindow,
    renderer: SceneRenderer,
    overlay: Overlay,
    assets: SceneAssets,
}

struct ViewerApp {
    state: ProgramState,
    router: InputRouter,
    stage: Option<Stage>,
    last_frame: Option<Instant>,
    init_error: Option<anyhow::Error>,
}

impl ViewerApp {
    fn new() -> Self {
        let mut state = ProgramState::default();
        PersistedState::load(Path::new(STATE_FILE)).apply(&mut state);
        Self {
            state,
            router: InputRouter::new(),
            stage: None,
            last_frame: None,
            init_error: None,
        }
    }

    fn build_stage(&self, event_loop: &ActiveEventLoop) -> Result<Stage> {
        let window = ViewerWindowBuilder::new()
            .with_title("glint")
            .with_dimensions(1200, 800)
            .build(event_loop)?;

        let context = pollster::block_on(GpuContext::new(window.inner().clone()))?;
        let surface_format = context.surface_config.format;
        let mut renderer = SceneRenderer::new(context)?;
        let overlay = Overlay::new(&window, &renderer.context().device, surface_format);

        let ground_mesh = renderer.register_mesh(&ground_plane());
        let skybox_mesh = renderer.register_mesh(&skybox_cube());
        let model_mesh = renderer.register_mesh(&load_obj_mesh(Path::new(MODEL_PATH)));

        let ground = load_image_rgba(Path::new(GROUND_TEXTURE));
        let ground_texture = renderer.register_texture(&ground.pixels, ground.width, ground.height);
        let model = load_image_rgba(Path::new(MODEL_TEXTURE));
        let model_texture = renderer.register_texture(&model.pixels, model.width, model.height);
        let (faces, face_size) = load_cubemap_faces(Path::new(SKYBOX_DIR));
        let skybox_texture = renderer.register_cubemap(&faces, face_size);

        window.set_cursor_captured(self.state.mouse_look_enabled);

        Ok(Stage {
            window,
            renderer,
            overlay,
            assets: SceneAssets {
                ground_mesh,
                ground_texture,
                model_mesh,
                model_texture,
                skybox_mesh,
                skybox_texture,
            },
        })
    }

    fn render_frame(&mut self) {
        let Some(stage) = self.stage.as_mut() else {
            return;
        };

        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| (now - last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        self.router.update_camera(&mut self.state, dt);

        let aspect = stage.renderer.context().aspect_ratio();
        let plan = compose_frame(&self.state, aspect, &stage.assets);

        let target = match stage.renderer.begin_frame() {
            Ok(target) => target,
            Err(RenderError::SurfaceAcquisitionFailed(details)) => {
                log::debug!("Skipping frame: {details}");
                return;
            }
            Err(err) => {
                log::error!("Frame failed: {err}");
                return;
            }
        };

        if let Err(err) = stage.renderer.execute_plan(&plan, &target) {
            log::error!("Frame failed: {err}");
            return;
        }

        if self.state.overlay_enabled {
            let (width, height) = stage.renderer.context().get_size();
            let state = &mut self.state;
            stage.overlay.render(
                stage.window.inner(),
                &stage.renderer.context().device,
                &stage.renderer.context().queue,
                &target.view,
                [width, height],
                |ctx| panels::draw_overlay(ctx, state),
            );
        }

        target.present();
    }

    fn save_state(&self) {
        let record = PersistedState::capture(&self.state);
        match record.save(Path::new(STATE_FILE)) {
            Ok(()) => log::info!("Saved settings to {STATE_FILE}"),
            Err(err) => log::error!("Failed to save settings to {STATE_FILE}: {err}"),
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.stage.is_some() {
            return;
        }
        match self.build_stage(event_loop) {
            Ok(stage) => self.stage = Some(stage),
            Err(err) => {
                log::error!("Failed to initialize the viewer: {err:#}");
                self.init_error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(stage) = self.stage.as_mut() else {
            return;
        };

        // egui tracks events continuously but only swallows them while the
        // overlay is up.
        let consumed = stage.overlay.on_window_event(stage.window.inner(), &event);
        let overlay_consumed = consumed && self.state.overlay_enabled;

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                stage.renderer.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                self.render_frame();
            }
            _ if overlay_consumed => {}
            _ => {
                if let Some(input) = translate_window_event(&event) {
                    let actions = self.router.handle_event(input, &mut self.state);
                    if let Some(captured) = actions.cursor_capture {
                        stage.window.set_cursor_captured(captured);
                    }
                    if actions.exit_requested {
                        event_loop.exit();
                    }
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(stage) = &self.stage {
            stage.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.save_state();
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .init();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = ViewerApp::new();
    event_loop.run_app(&mut app)?;
    if let Some(err) = app.init_error {
        return Err(err);
    }
    Ok(())
}
