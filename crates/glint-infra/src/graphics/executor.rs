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

//! Executes [`FramePlan`]s against a wgpu device.
//!
//! The renderer owns three baked pipelines, one per [`PipelineKind`], plus
//! registries for uploaded meshes and textures. A plan references assets by
//! handle; everything GPU-specific stays behind this type.

use glint_core::error::RenderError;
use glint_core::render::{CommandSink, FramePlan, MeshData, MeshId, PipelineKind, TextureId};
use wgpu::util::DeviceExt;

use super::context::GpuContext;
use super::shaders::{SCENE_WGSL, SKYBOX_WGSL};

/// Depth buffer format shared by all pipelines.
const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Stride between per-draw model matrices in the dynamic uniform buffer.
/// 256 is the minimum uniform alignment every adapter supports.
const MODEL_STRIDE: u64 = 256;

/// Capacity of the per-draw model buffer.
const MAX_DRAWS: usize = 16;

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

/// A surface texture acquired for one frame, presented after all passes.
pub struct FrameSurface {
    /// The swapchain texture.
    pub texture: wgpu::SurfaceTexture,
    /// A view over it, attached by every pass this frame.
    pub view: wgpu::TextureView,
}

impl FrameSurface {
    /// Presents the frame.
    pub fn present(self) {
        self.texture.present();
    }
}

/// The wgpu backend: executes frame plans over registered meshes and
/// textures.
pub struct SceneRenderer {
    context: GpuContext,
    depth_view: wgpu::TextureView,

    scene_pipeline_culled: wgpu::RenderPipeline,
    scene_pipeline_unculled: wgpu::RenderPipeline,
    skybox_pipeline: wgpu::RenderPipeline,

    material_layout: wgpu::BindGroupLayout,
    sky_material_layout: wgpu::BindGroupLayout,

    scene_buffer: wgpu::Buffer,
    lights_buffer: wgpu::Buffer,
    model_buffer: wgpu::Buffer,
    skybox_buffer: wgpu::Buffer,

    globals_bind_group: wgpu::BindGroup,
    model_bind_group: wgpu::BindGroup,
    skybox_globals_bind_group: wgpu::BindGroup,

    sampler: wgpu::Sampler,

    meshes: Vec<GpuMesh>,
    textures: Vec<wgpu::BindGroup>,
}

impl SceneRenderer {
    /// Builds the pipelines, uniform buffers and bind groups over an
    /// initialized context.
    pub fn new(context: GpuContext) -> Result<Self, RenderError> {
        let device = &context.device;
        let surface_format = context.surface_config.format;

        let scene_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let skybox_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Skybox Shader"),
            source: wgpu::ShaderSource::Wgsl(SKYBOX_WGSL.into()),
        });

        // Group 0: scene uniforms + light blocks.
        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Scene Globals Layout"),
            entries: &[
                uniform_layout_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT, false),
                uniform_layout_entry(1, wgpu::ShaderStages::FRAGMENT, false),
            ],
        });
        // Group 1: per-draw model matrix, dynamic offset.
        let model_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Model Layout"),
            entries: &[uniform_layout_entry(0, wgpu::ShaderStages::VERTEX, true)],
        });
        // Group 2: diffuse texture + sampler.
        let material_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Material Layout"),
            entries: &[
                texture_layout_entry(0, wgpu::TextureViewDimension::D2),
                sampler_layout_entry(1),
            ],
        });

        let sky_globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Skybox Globals Layout"),
            entries: &[uniform_layout_entry(0, wgpu::ShaderStages::VERTEX, false)],
        });
        let sky_material_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Skybox Material Layout"),
                entries: &[
                    texture_layout_entry(0, wgpu::TextureViewDimension::Cube),
                    sampler_layout_entry(1),
                ],
            });

        let scene_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Pipeline Layout"),
                bind_group_layouts: &[&globals_layout, &model_layout, &material_layout],
                push_constant_ranges: &[],
            });
        let skybox_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Skybox Pipeline Layout"),
                bind_group_layouts: &[&sky_globals_layout, &sky_material_layout],
                push_constant_ranges: &[],
            });

        let scene_pipeline_culled = create_scene_pipeline(
            device,
            &scene_pipeline_layout,
            &scene_module,
            surface_format,
            Some(wgpu::Face::Back),
            "Scene Pipeline (Culled)",
        );
        let scene_pipeline_unculled = create_scene_pipeline(
            device,
            &scene_pipeline_layout,
            &scene_module,
            surface_format,
            None,
            "Scene Pipeline (Double-Sided)",
        );
        let skybox_pipeline =
            create_skybox_pipeline(device, &skybox_pipeline_layout, &skybox_module, surface_format);

        let scene_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Scene Uniforms"),
            size: std::mem::size_of::<glint_core::render::SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let lights_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Light Blocks"),
            size: std::mem::size_of::<glint_core::LightBlocks>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let model_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Model Matrices"),
            size: MODEL_STRIDE * MAX_DRAWS as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let skybox_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Skybox Uniforms"),
            size: std::mem::size_of::<glint_core::render::SkyboxUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Globals"),
            layout: &globals_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: scene_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: lights_buffer.as_entire_binding(),
                },
            ],
        });
        let model_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Model"),
            layout: &model_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &model_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<[[f32; 4]; 4]>() as u64),
                }),
            }],
        });
        let skybox_globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Skybox Globals"),
            layout: &sky_globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: skybox_buffer.as_entire_binding(),
            }],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Linear Repeat Sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let depth_view = create_depth_view(device, &context.surface_config);

        log::info!("Scene renderer initialized (format: {surface_format:?})");

        Ok(Self {
            context,
            depth_view,
            scene_pipeline_culled,
            scene_pipeline_unculled,
            skybox_pipeline,
            material_layout,
            sky_material_layout,
            scene_buffer,
            lights_buffer,
            model_buffer,
            skybox_buffer,
            globals_bind_group,
            model_bind_group,
            skybox_globals_bind_group,
            sampler,
            meshes: Vec::new(),
            textures: Vec::new(),
        })
    }

    /// The underlying context.
    pub fn context(&self) -> &GpuContext {
        &self.context
    }

    /// Resizes the surface and rebuilds the depth buffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.depth_view = create_depth_view(&self.context.device, &self.context.surface_config);
    }

    /// Uploads a mesh and returns its handle.
    pub fn register_mesh(&mut self, mesh: &MeshData) -> MeshId {
        let device = &self.context.device;
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertices"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Indices"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        self.meshes.push(GpuMesh {
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count(),
        });
        MeshId(self.meshes.len() as u32 - 1)
    }

    /// Uploads an RGBA8 image as a 2D texture and returns its handle.
    pub fn register_texture(&mut self, pixels: &[u8], width: u32, height: u32) -> TextureId {
        let texture = self.upload_texture(pixels, width, height, 1);
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        self.push_material(&view, false)
    }

    /// Uploads six equally sized RGBA8 faces as a cube map and returns its
    /// handle. Face order: +X, -X, +Y, -Y, +Z, -Z.
    pub fn register_cubemap(&mut self, faces: &[Vec<u8>; 6], size: u32) -> TextureId {
        let mut pixels = Vec::with_capacity(faces.iter().map(Vec::len).sum());
        for face in faces {
            pixels.extend_from_slice(face);
        }
        let texture = self.upload_texture(&pixels, size, size, 6);
        let view = texture.create_view(&wgpu::TextureViewDescriptor {
            dimension: Some(wgpu::TextureViewDimension::Cube),
            ..Default::default()
        });
        self.push_material(&view, true)
    }

    /// Acquires the surface texture for this frame.
    ///
    /// A lost or outdated surface is reconfigured and reported as a
    /// transient acquisition failure; the caller skips the frame.
    pub fn begin_frame(&mut self) -> Result<FrameSurface, RenderError> {
        match self.context.get_current_texture() {
            Ok(texture) => {
                let view = texture
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                Ok(FrameSurface { texture, view })
            }
            Err(err @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                let (width, height) = self.context.get_size();
                self.context.resize(width, height);
                Err(RenderError::SurfaceAcquisitionFailed(err.to_string()))
            }
            Err(err) => Err(RenderError::SurfaceAcquisitionFailed(err.to_string())),
        }
    }

    /// Encodes and submits the plan's draws into `target`.
    ///
    /// The overlay renders afterwards in its own pass; the caller presents.
    pub fn execute_plan(
        &mut self,
        plan: &FramePlan,
        target: &FrameSurface,
    ) -> Result<(), RenderError> {
        let queue = &self.context.queue;
        queue.write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(&plan.scene));
        queue.write_buffer(&self.lights_buffer, 0, bytemuck::bytes_of(&plan.lights));
        queue.write_buffer(&self.skybox_buffer, 0, bytemuck::bytes_of(&plan.skybox));

        let mut models = vec![0u8; MODEL_STRIDE as usize * plan.draws.len().min(MAX_DRAWS)];
        for (i, draw) in plan.draws.iter().take(MAX_DRAWS).enumerate() {
            let matrix = draw.model.to_cols_array_2d();
            let offset = i * MODEL_STRIDE as usize;
            models[offset..offset + 64].copy_from_slice(bytemuck::bytes_of(&matrix));
        }
        if !models.is_empty() {
            queue.write_buffer(&self.model_buffer, 0, &models);
        }

        let mut encoder =
            self.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Frame Encoder"),
                });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: plan.clear_color.r as f64,
                            g: plan.clear_color.g as f64,
                            b: plan.clear_color.b as f64,
                            a: plan.clear_color.a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            for (i, draw) in plan.draws.iter().take(MAX_DRAWS).enumerate() {
                let mesh = self.meshes.get(draw.mesh.0 as usize).ok_or(
                    RenderError::UnknownHandle {
                        kind: "mesh",
                        id: draw.mesh.0,
                    },
                )?;
                let material = self.textures.get(draw.texture.0 as usize).ok_or(
                    RenderError::UnknownHandle {
                        kind: "texture",
                        id: draw.texture.0,
                    },
                )?;

                match draw.pipeline {
                    PipelineKind::SceneCulled => {
                        pass.set_pipeline(&self.scene_pipeline_culled);
                        pass.set_bind_group(0, &self.globals_bind_group, &[]);
                        pass.set_bind_group(
                            1,
                            &self.model_bind_group,
                            &[(i as u32) * MODEL_STRIDE as u32],
                        );
                        pass.set_bind_group(2, material, &[]);
                    }
                    PipelineKind::SceneUnculled => {
                        pass.set_pipeline(&self.scene_pipeline_unculled);
                        pass.set_bind_group(0, &self.globals_bind_group, &[]);
                        pass.set_bind_group(
                            1,
                            &self.model_bind_group,
                            &[(i as u32) * MODEL_STRIDE as u32],
                        );
                        pass.set_bind_group(2, material, &[]);
                    }
                    PipelineKind::Skybox => {
                        pass.set_pipeline(&self.skybox_pipeline);
                        pass.set_bind_group(0, &self.skybox_globals_bind_group, &[]);
                        pass.set_bind_group(1, material, &[]);
                    }
                }

                pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        self.context.queue.submit(Some(encoder.finish()));
        Ok(())
    }

    fn upload_texture(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        layers: u32,
    ) -> wgpu::Texture {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: layers,
        };
        let texture = self.context.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Image Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        self.context.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );
        texture
    }

    fn push_material(&mut self, view: &wgpu::TextureView, cube: bool) -> TextureId {
        let layout = if cube {
            &self.sky_material_layout
        } else {
            &self.material_layout
        };
        let bind_group = self
            .context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Material"),
                layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&self.sampler),
                    },
                ],
            });
        self.textures.push(bind_group);
        TextureId(self.textures.len() as u32 - 1)
    }
}

impl CommandSink for SceneRenderer {
    /// Runs the whole frame standalone: acquire, draw, present.
    ///
    /// The viewer drives the finer-grained methods instead so it can insert
    /// the overlay pass before presenting.
    fn execute(&mut self, plan: &FramePlan) -> Result<(), RenderError> {
        let target = self.begin_frame()?;
        self.execute_plan(plan, &target)?;
        target.present();
        Ok(())
    }
}

fn uniform_layout_entry(
    binding: u32,
    visibility: wgpu::ShaderStages,
    dynamic: bool,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: dynamic,
            min_binding_size: None,
        },
        count: None,
    }
}

fn texture_layout_entry(
    binding: u32,
    dimension: wgpu::TextureViewDimension,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension: dimension,
            multisampled: false,
        },
        count: None,
    }
}

fn sampler_layout_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x2,
    ];
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<glint_core::render::Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRIBUTES,
    }
}

fn create_scene_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    module: &wgpu::ShaderModule,
    surface_format: wgpu::TextureFormat,
    cull_mode: Option<wgpu::Face>,
    label: &str,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module,
            entry_point: Some("vs_main"),
            buffers: &[vertex_buffer_layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn create_skybox_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    module: &wgpu::ShaderModule,
    surface_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Skybox Pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module,
            entry_point: Some("vs_main"),
            buffers: &[vertex_buffer_layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // The box is seen from inside; winding would cull it.
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            // Drawn last at maximum depth: no writes, pass on equality.
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn create_depth_view(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Buffer"),
        size: wgpu::Extent3d {
            width: config.width.max(1),
            height: config.height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
