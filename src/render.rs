use crate::constants::{FILL_INTENSITY, KEY_INTENSITY, RIM_INTENSITY};
use crate::core;
use crate::texture::ImagePixels;
use glam::{Mat4, Vec3};
use web_sys as web;
use wgpu;
use wgpu::util::DeviceExt;

mod helpers;
mod post;
mod targets;

/// Vertical field of view of the page camera, degrees.
const CAMERA_FOV_DEG: f32 = 42.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 120.0;

const BLOOM_STRENGTH: f32 = 0.35;
const BLOOM_THRESHOLD: f32 = 0.85;
const VIGNETTE: f32 = 0.35;
const GRAIN_AMOUNT: f32 = 0.06;

/// Seed for the deterministic particle ring.
const PARTICLE_SEED: u64 = 7;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    hero_model: [[f32; 4]; 4],
    dots_model: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    camera_pos: [f32; 4],
    key_light: [f32; 4],
    fill_light: [f32; 4],
    rim_light: [f32; 4],
    time_misc: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    time: f32,
    bloom_strength: f32,
    blur_dir: [f32; 2],
    threshold: f32,
    vignette: f32,
    grain_amount: f32,
    _pad: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct DotInstance {
    pos: [f32; 3],
    scale: f32,
}

struct PostBindGroups {
    bg_hdr: wgpu::BindGroup,
    bg_from_bloom_a: wgpu::BindGroup,
    bg_from_bloom_b: wgpu::BindGroup,
    bg_bloom_a_only: wgpu::BindGroup,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    scene_uniform_buffer: wgpu::Buffer,
    scene_bg: wgpu::BindGroup,
    background_pipeline: wgpu::RenderPipeline,
    hero_pipeline: wgpu::RenderPipeline,
    hero_vb: wgpu::Buffer,
    hero_ib: wgpu::Buffer,
    hero_index_count: u32,
    hero_bg: wgpu::BindGroup, // noise texture
    dots_pipeline: wgpu::RenderPipeline,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    instance_count: u32,

    targets: targets::RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: post::PostResources,
    blur_h_buffer: wgpu::Buffer,
    blur_v_buffer: wgpu::Buffer,
    post_bgs: PostBindGroups,
    bg_grain: wgpu::BindGroup,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,

    cam_eye: Vec3,
    cam_target: Vec3,
    hero_yaw: f32,
    hero_pitch: f32,
    dots_yaw: f32,
    dots_pitch: f32,
    key_light: Vec3,
    fill_light: Vec3,
    rim_light: Vec3,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        noise: &ImagePixels,
        grain: &ImagePixels,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        // The noise and grain tiles wrap.
        let repeat_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("repeat_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        // ---------------- scene resources ----------------

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(core::SCENE_WGSL.into()),
        });
        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let scene_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniform_buffer.as_entire_binding(),
            }],
        });

        // The hero samples noise in its vertex stage for displacement.
        let scene_tex_bgl = helpers::texture_bind_group_layout(
            &device,
            "scene_tex_bgl",
            wgpu::ShaderStages::VERTEX_FRAGMENT,
        );
        let (_noise_tex, noise_view) = helpers::upload_rgba_texture(
            &device,
            &queue,
            "noise_tex",
            noise.width,
            noise.height,
            &noise.rgba,
        );
        let hero_bg = helpers::texture_bind_group(
            &device,
            "hero_bg",
            &scene_tex_bgl,
            &noise_view,
            &repeat_sampler,
        );

        let background_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("background_pl"),
            bind_group_layouts: &[&scene_bgl],
            push_constant_ranges: &[],
        });
        let background_pipeline = helpers::make_post_pipeline(
            &device,
            &background_pl,
            &scene_shader,
            "fs_background",
            targets::HDR_FORMAT,
            None,
        );

        let hero_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("hero_pl"),
            bind_group_layouts: &[&scene_bgl, &scene_tex_bgl],
            push_constant_ranges: &[],
        });
        let hero_vertex_layout = wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * core::HERO_VERTEX_FLOATS) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        };
        let hero_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("hero_pipeline"),
            layout: Some(&hero_pl),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_hero"),
                buffers: &[hero_vertex_layout],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_hero"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: targets::HDR_FORMAT,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let (hero_vertices, hero_indices) =
            core::icosphere(core::HERO_RADIUS, core::HERO_SUBDIVISIONS);
        let hero_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("hero_vb"),
            contents: bytemuck::cast_slice(&hero_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let hero_ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("hero_ib"),
            contents: bytemuck::cast_slice(&hero_indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let hero_index_count = hero_indices.len() as u32;

        // Quad vertex buffer (two triangles)
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instances: Vec<DotInstance> = core::particle_ring(PARTICLE_SEED)
            .iter()
            .map(|p| DotInstance {
                pos: p.position.to_array(),
                scale: p.scale,
            })
            .collect();
        let instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("dots_instance_vb"),
            contents: bytemuck::cast_slice(&instances),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_count = instances.len() as u32;

        let dots_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("dots_pl"),
            bind_group_layouts: &[&scene_bgl],
            push_constant_ranges: &[],
        });
        let dots_vertex_layouts = [
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<DotInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                ],
            },
        ];
        let dots_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("dots_pipeline"),
            layout: Some(&dots_pl),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_particles"),
                buffers: &dots_vertex_layouts,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_particles"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: targets::HDR_FORMAT,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        // ---------------- post resources ----------------

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(core::POST_WGSL.into()),
        });
        let targets = targets::RenderTargets::new(&device, width, height);
        let post =
            post::create_post_resources(&device, &post_shader, targets::BLOOM_FORMAT, format);
        // Each blur direction owns its uniform buffer: queued writes to a
        // shared one would all land before the frame's single submit.
        let blur_h_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("post_uniforms_blur_h"),
            size: std::mem::size_of::<PostUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let blur_v_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("post_uniforms_blur_v"),
            size: std::mem::size_of::<PostUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let post_bgs = make_post_bind_groups(
            &device,
            &post,
            &targets,
            &linear_sampler,
            &blur_h_buffer,
            &blur_v_buffer,
        );
        let (_grain_tex, grain_view) = helpers::upload_rgba_texture(
            &device,
            &queue,
            "grain_tex",
            grain.width,
            grain.height,
            &grain.rgba,
        );
        let bg_grain = helpers::texture_bind_group(
            &device,
            "bg_grain",
            &post.bgl_tex,
            &grain_view,
            &repeat_sampler,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene_uniform_buffer,
            scene_bg,
            background_pipeline,
            hero_pipeline,
            hero_vb,
            hero_ib,
            hero_index_count,
            hero_bg,
            dots_pipeline,
            quad_vb,
            instance_vb,
            instance_count,
            targets,
            linear_sampler,
            post,
            blur_h_buffer,
            blur_v_buffer,
            post_bgs,
            bg_grain,
            width,
            height,
            clear_color: wgpu::Color {
                r: 0.024,
                g: 0.024,
                b: 0.043,
                a: 1.0,
            },
            cam_eye: Vec3::new(0.0, 0.75, 9.0),
            cam_target: Vec3::new(0.0, 0.2, 0.0),
            hero_yaw: 0.0,
            hero_pitch: 0.0,
            dots_yaw: 0.0,
            dots_pitch: 0.0,
            key_light: Vec3::new(3.0, 3.0, 5.0),
            fill_light: Vec3::new(-4.0, 1.0, 2.0),
            rim_light: Vec3::new(-2.0, 2.0, -5.0),
        })
    }

    pub fn set_camera(&mut self, eye: Vec3, target: Vec3) {
        self.cam_eye = eye;
        self.cam_target = target;
    }

    pub fn set_hero_rotation(&mut self, yaw: f32, pitch: f32) {
        self.hero_yaw = yaw;
        self.hero_pitch = pitch;
    }

    pub fn set_particles_rotation(&mut self, yaw: f32, pitch: f32) {
        self.dots_yaw = yaw;
        self.dots_pitch = pitch;
    }

    pub fn set_lights(&mut self, key: Vec3, fill: Vec3, rim: Vec3) {
        self.key_light = key;
        self.fill_light = fill;
        self.rim_light = rim;
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            self.post_bgs = make_post_bind_groups(
                &self.device,
                &self.post,
                &self.targets,
                &self.linear_sampler,
                &self.blur_h_buffer,
                &self.blur_v_buffer,
            );
        }
    }

    fn scene_uniforms(&self, t: f32) -> SceneUniforms {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj =
            Mat4::perspective_rh(CAMERA_FOV_DEG.to_radians(), aspect, CAMERA_NEAR, CAMERA_FAR);
        let view = Mat4::look_at_rh(self.cam_eye, self.cam_target, Vec3::Y);
        let forward = (self.cam_target - self.cam_eye).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        let hero_model = Mat4::from_translation(Vec3::new(0.0, 0.2, 0.0))
            * Mat4::from_rotation_y(self.hero_yaw)
            * Mat4::from_rotation_x(self.hero_pitch);
        let dots_model =
            Mat4::from_rotation_y(self.dots_yaw) * Mat4::from_rotation_x(self.dots_pitch);
        SceneUniforms {
            view_proj: (proj * view).to_cols_array_2d(),
            hero_model: hero_model.to_cols_array_2d(),
            dots_model: dots_model.to_cols_array_2d(),
            cam_right: right.extend(0.0).to_array(),
            cam_up: up.extend(0.0).to_array(),
            camera_pos: self.cam_eye.extend(1.0).to_array(),
            key_light: self.key_light.extend(KEY_INTENSITY).to_array(),
            fill_light: self.fill_light.extend(FILL_INTENSITY).to_array(),
            rim_light: self.rim_light.extend(RIM_INTENSITY).to_array(),
            time_misc: [t, 0.0, 0.0, 0.0],
        }
    }

    /// One composite frame: scene into HDR, bloom ping-pong, final blit with
    /// vignette and grain.
    pub fn render(&mut self, t: f32) -> Result<(), wgpu::SurfaceError> {
        self.resize_if_needed(self.width, self.height);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        self.queue.write_buffer(
            &self.scene_uniform_buffer,
            0,
            bytemuck::bytes_of(&self.scene_uniforms(t)),
        );
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.background_pipeline);
            rpass.set_bind_group(0, &self.scene_bg, &[]);
            rpass.draw(0..3, 0..1);

            rpass.set_pipeline(&self.dots_pipeline);
            rpass.set_bind_group(0, &self.scene_bg, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..6, 0..self.instance_count);

            rpass.set_pipeline(&self.hero_pipeline);
            rpass.set_bind_group(0, &self.scene_bg, &[]);
            rpass.set_bind_group(1, &self.hero_bg, &[]);
            rpass.set_vertex_buffer(0, self.hero_vb.slice(..));
            rpass.set_index_buffer(self.hero_ib.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.hero_index_count, 0, 0..1);
        }

        let bloom_res = [self.width as f32 / 2.0, self.height as f32 / 2.0];
        let base = PostUniforms {
            resolution: bloom_res,
            time: t,
            bloom_strength: BLOOM_STRENGTH,
            blur_dir: [0.0, 0.0],
            threshold: BLOOM_THRESHOLD,
            vignette: VIGNETTE,
            grain_amount: GRAIN_AMOUNT,
            _pad: [0.0; 3],
        };
        self.queue
            .write_buffer(&self.post.uniform_buffer, 0, bytemuck::bytes_of(&base));
        self.queue.write_buffer(
            &self.blur_h_buffer,
            0,
            bytemuck::bytes_of(&PostUniforms {
                blur_dir: [1.0, 0.0],
                ..base
            }),
        );
        self.queue.write_buffer(
            &self.blur_v_buffer,
            0,
            bytemuck::bytes_of(&PostUniforms {
                blur_dir: [0.0, 1.0],
                ..base
            }),
        );

        // bright pass -> bloom_a
        self.blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            &self.post.bright_pipeline,
            &self.post_bgs.bg_hdr,
            None,
            None,
        );
        // horizontal blur bloom_a -> bloom_b
        self.blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            &self.post.blur_pipeline,
            &self.post_bgs.bg_from_bloom_a,
            None,
            None,
        );
        // vertical blur bloom_b -> bloom_a
        self.blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            &self.post.blur_pipeline,
            &self.post_bgs.bg_from_bloom_b,
            None,
            None,
        );
        // composite to swapchain with bloom + vignette + grain
        self.blit(
            &mut encoder,
            "composite",
            &view,
            &self.post.composite_pipeline,
            &self.post_bgs.bg_hdr,
            Some(&self.post_bgs.bg_bloom_a_only),
            Some(&self.bg_grain),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn blit(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        label: &str,
        target: &wgpu::TextureView,
        pipeline: &wgpu::RenderPipeline,
        bg0: &wgpu::BindGroup,
        bg1: Option<&wgpu::BindGroup>,
        bg2: Option<&wgpu::BindGroup>,
    ) {
        let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        r.set_pipeline(pipeline);
        r.set_bind_group(0, bg0, &[]);
        if let Some(g1) = bg1 {
            r.set_bind_group(1, g1, &[]);
        }
        if let Some(g2) = bg2 {
            r.set_bind_group(2, g2, &[]);
        }
        r.draw(0..3, 0..1);
        drop(r);
    }
}

fn make_post_bind_groups(
    device: &wgpu::Device,
    post: &post::PostResources,
    targets: &targets::RenderTargets,
    sampler: &wgpu::Sampler,
    blur_h_buffer: &wgpu::Buffer,
    blur_v_buffer: &wgpu::Buffer,
) -> PostBindGroups {
    let bg0 = |label: &str, view: &wgpu::TextureView, uniforms: &wgpu::Buffer| {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &post.bgl0,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: uniforms.as_entire_binding(),
                },
            ],
        })
    };
    PostBindGroups {
        bg_hdr: bg0("bg_hdr", &targets.hdr_view, &post.uniform_buffer),
        bg_from_bloom_a: bg0("bg_from_bloom_a", &targets.bloom_a_view, blur_h_buffer),
        bg_from_bloom_b: bg0("bg_from_bloom_b", &targets.bloom_b_view, blur_v_buffer),
        bg_bloom_a_only: helpers::texture_bind_group(
            device,
            "bg_bloom_a_only",
            &post.bgl_tex,
            &targets.bloom_a_view,
            sampler,
        ),
    }
}
