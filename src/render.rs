use crate::core::constants::*;
use crate::core::geometry::{self, ParticleVertex};
use crate::core::{RenderSnapshot, SceneState};
use glam::Mat4;
use web_sys as web;

mod helpers;
mod particles;
mod targets;
mod wireframe;

use helpers::UniformBinding;
use particles::ParticleResources;
use targets::DepthTarget;
use wireframe::WireframeResources;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    ambient: [f32; 4],
    light_pos: [f32; 4],
    light_color: [f32; 4],
    particle: [f32; 4],
}

impl SceneUniforms {
    fn new(view: Mat4, proj: Mat4) -> Self {
        let a = AMBIENT_COLOR;
        let l = POINT_LIGHT_COLOR;
        let p = POINT_LIGHT_POSITION;
        Self {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            ambient: [
                a[0] * AMBIENT_INTENSITY,
                a[1] * AMBIENT_INTENSITY,
                a[2] * AMBIENT_INTENSITY,
                0.0,
            ],
            light_pos: [p[0], p[1], p[2], POINT_LIGHT_RANGE],
            light_color: [
                l[0] * POINT_LIGHT_INTENSITY,
                l[1] * POINT_LIGHT_INTENSITY,
                l[2] * POINT_LIGHT_INTENSITY,
                0.0,
            ],
            particle: [particle_world_size(), PARTICLE_OPACITY, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

impl ObjectUniforms {
    pub(crate) fn new(model: Mat4, rgb: [f32; 3], opacity: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [rgb[0], rgb[1], rgb[2], opacity],
        }
    }
}

// Size-attenuated points are `size * (h/2) / depth` pixels tall; a view-space
// quad of edge s projects to `s * (h/2) / (depth * tan(fov/2))`.
fn particle_world_size() -> f32 {
    PARTICLE_SIZE * (CAMERA_FOV_DEG.to_radians() as f32 * 0.5).tan()
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,
    scene_uniforms: UniformBinding,
    particles: ParticleResources,
    wireframes: WireframeResources,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        scene: &SceneState,
        particle_data: &[ParticleVertex],
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
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .unwrap_or(caps.formats[0]);
        // Transparent canvas so the page background shows through
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes[0]
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth = DepthTarget::new(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let scene_layout = helpers::uniform_layout(&device, "scene_bgl");
        let object_layout = helpers::uniform_layout(&device, "object_bgl");
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&scene_layout, &object_layout],
            push_constant_ranges: &[],
        });

        let snap = scene.snapshot();
        let scene_uniforms = UniformBinding::new(
            &device,
            &scene_layout,
            "scene_uniforms",
            &SceneUniforms::new(snap.view, snap.proj),
        );
        let particles = particles::create_particle_resources(
            &device,
            &shader,
            &pipeline_layout,
            &object_layout,
            format,
            particle_data,
        );
        let solids: Vec<_> = scene
            .geometries
            .iter()
            .map(|g| (g, geometry::solid_mesh(g.solid)))
            .collect();
        let wireframes = wireframe::create_wireframe_resources(
            &device,
            &shader,
            &pipeline_layout,
            &object_layout,
            format,
            &solids,
        );
        log::info!(
            "[gpu] ready {}x{} format={:?} alpha={:?} particles={} solids={}",
            width,
            height,
            format,
            alpha_mode,
            particles.count,
            wireframes.meshes.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            scene_uniforms,
            particles,
            wireframes,
            width,
            height,
        })
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
            self.depth.recreate(&self.device, width, height);
        }
    }

    /// Reconfigure after the surface was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, snap: &RenderSnapshot) -> Result<(), wgpu::SurfaceError> {
        self.scene_uniforms
            .write(&self.queue, &SceneUniforms::new(snap.view, snap.proj));
        self.particles.object.write(
            &self.queue,
            &ObjectUniforms::new(snap.particles, [1.0, 1.0, 1.0], 1.0),
        );
        for (mesh, model) in self.wireframes.meshes.iter().zip(snap.geometries.iter()) {
            mesh.object.write(
                &self.queue,
                &ObjectUniforms::new(*model, mesh.color, mesh.opacity),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene_uniforms.bind_group, &[]);
            particles::draw(&mut rpass, &self.particles);
            wireframe::draw(&mut rpass, &self.wireframes);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
