use fx_core::{Blending, Primitive};
use wgpu::util::DeviceExt;

/// Blend state for premultiplied-alpha output.
pub fn blend_for(blending: Blending) -> wgpu::BlendState {
    match blending {
        Blending::Normal => wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING,
        Blending::Additive => wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                operation: wgpu::BlendOperation::Add,
            },
        },
    }
}

pub fn uniform_layout(device: &wgpu::Device, label: &str, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

pub fn uniform_buffer(device: &wgpu::Device, label: &str, size: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: size as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub fn uniform_bind_group(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::BindGroupLayout,
    buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    })
}

pub fn vertex_buffer(device: &wgpu::Device, label: &str, data: &[f32]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(data),
        usage: wgpu::BufferUsages::VERTEX,
    })
}

static VEC3_ATTRS: [[wgpu::VertexAttribute; 1]; 2] = [
    wgpu::vertex_attr_array![0 => Float32x3],
    wgpu::vertex_attr_array![1 => Float32x3],
];
static SIZE_ATTR: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![2 => Float32];

/// Position, color and (points only) size streams. Points advance per
/// instance and expand to a quad in the vertex shader.
fn vertex_layouts(primitive: Primitive) -> Vec<wgpu::VertexBufferLayout<'static>> {
    let step_mode = match primitive {
        Primitive::Points => wgpu::VertexStepMode::Instance,
        Primitive::Lines => wgpu::VertexStepMode::Vertex,
    };
    let vec3 = |attrs: &'static [wgpu::VertexAttribute]| wgpu::VertexBufferLayout {
        array_stride: 12,
        step_mode,
        attributes: attrs,
    };
    let mut layouts = vec![vec3(&VEC3_ATTRS[0]), vec3(&VEC3_ATTRS[1])];
    if primitive == Primitive::Points {
        layouts.push(wgpu::VertexBufferLayout {
            array_stride: 4,
            step_mode,
            attributes: &SIZE_ATTR,
        });
    }
    layouts
}

pub fn make_scene_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    primitive: Primitive,
    blending: Blending,
    color_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let (label, vs, fs, topology) = match primitive {
        Primitive::Points => ("points_pipeline", "vs_points", "fs_points", wgpu::PrimitiveTopology::TriangleList),
        Primitive::Lines => ("lines_pipeline", "vs_lines", "fs_lines", wgpu::PrimitiveTopology::LineList),
    };
    let buffers = vertex_layouts(primitive);
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(vs),
            buffers: &buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(blend_for(blending)),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
