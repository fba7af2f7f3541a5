use super::helpers::{self, UniformBinding};
use super::ObjectUniforms;
use crate::core::geometry::{LineVertex, WireMesh};
use crate::core::FloatingGeometry;
use wgpu;
use wgpu::util::DeviceExt;

pub(crate) struct MeshBuffers {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) object: UniformBinding,
    pub(crate) color: [f32; 3],
    pub(crate) opacity: f32,
}

pub(crate) struct WireframeResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) meshes: Vec<MeshBuffers>,
}

pub(crate) fn create_wireframe_resources(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    object_layout: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    solids: &[(&FloatingGeometry, WireMesh)],
) -> WireframeResources {
    let vertex_buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LineVertex>() as u64,
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
    }];
    let pipeline = helpers::make_scene_pipeline(
        device,
        "wireframe_pipeline",
        layout,
        shader,
        ("vs_lines", "fs_lines"),
        &vertex_buffers,
        wgpu::PrimitiveTopology::LineList,
        color_format,
    );
    let meshes = solids
        .iter()
        .map(|(geometry, mesh)| {
            let label = format!("{:?}", geometry.solid).to_lowercase();
            MeshBuffers {
                vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{label}_vb")),
                    contents: bytemuck::cast_slice(&mesh.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                index_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{label}_ib")),
                    contents: bytemuck::cast_slice(&mesh.indices),
                    usage: wgpu::BufferUsages::INDEX,
                }),
                index_count: mesh.indices.len() as u32,
                object: UniformBinding::new(
                    device,
                    object_layout,
                    &format!("{label}_object"),
                    &ObjectUniforms::new(glam::Mat4::IDENTITY, geometry.color, geometry.opacity),
                ),
                color: geometry.color,
                opacity: geometry.opacity,
            }
        })
        .collect();
    WireframeResources { pipeline, meshes }
}

pub(crate) fn draw(rpass: &mut wgpu::RenderPass<'_>, res: &WireframeResources) {
    rpass.set_pipeline(&res.pipeline);
    for mesh in &res.meshes {
        rpass.set_bind_group(1, &mesh.object.bind_group, &[]);
        rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
    }
}
