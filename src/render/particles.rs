use super::helpers::{self, UniformBinding};
use super::ObjectUniforms;
use crate::core::geometry::ParticleVertex;
use wgpu;
use wgpu::util::DeviceExt;

pub(crate) struct ParticleResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) quad_vb: wgpu::Buffer,
    pub(crate) instance_vb: wgpu::Buffer,
    pub(crate) count: u32,
    pub(crate) object: UniformBinding,
}

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    object_layout: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    particles: &[ParticleVertex],
) -> ParticleResources {
    // Unit quad (two triangles) expanded around each particle in view space
    let quad_vertices: [f32; 12] = [
        -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
    ];
    let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particle_quad_vb"),
        contents: bytemuck::cast_slice(&quad_vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particle_instance_vb"),
        contents: bytemuck::cast_slice(particles),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let vertex_buffers = [
        // slot 0: quad corners
        wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 2) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            }],
        },
        // slot 1: per-particle position + color
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 2,
                },
            ],
        },
    ];
    let pipeline = helpers::make_scene_pipeline(
        device,
        "particle_pipeline",
        layout,
        shader,
        ("vs_points", "fs_points"),
        &vertex_buffers,
        wgpu::PrimitiveTopology::TriangleList,
        color_format,
    );
    let object = UniformBinding::new(
        device,
        object_layout,
        "particle_object",
        &ObjectUniforms::new(glam::Mat4::IDENTITY, [1.0, 1.0, 1.0], 1.0),
    );
    ParticleResources {
        pipeline,
        quad_vb,
        instance_vb,
        count: particles.len() as u32,
        object,
    }
}

pub(crate) fn draw(rpass: &mut wgpu::RenderPass<'_>, res: &ParticleResources) {
    rpass.set_pipeline(&res.pipeline);
    rpass.set_bind_group(1, &res.object.bind_group, &[]);
    rpass.set_vertex_buffer(0, res.quad_vb.slice(..));
    rpass.set_vertex_buffer(1, res.instance_vb.slice(..));
    rpass.draw(0..6, 0..res.count);
}
