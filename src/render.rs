use fnv::FnvHashMap;
use fx_core::{Blending, FrameView, GeometryBuffer, ObjectId, Primitive, RenderTarget, SceneGraph};
use std::sync::Arc;
use web_sys as web;

mod helpers;
pub mod packing;

use helpers::{make_scene_pipeline, uniform_bind_group, uniform_buffer, uniform_layout, vertex_buffer};
use packing::{pack_frame, pack_object, FrameUniforms, ObjectUniforms};

/// Geometry uploaded once and shared by every object that references the
/// same `Arc<GeometryBuffer>`.
struct GpuGeometry {
    positions: wgpu::Buffer,
    colors: wgpu::Buffer,
    count: u32,
}

struct GpuObject {
    id: ObjectId,
    geometry: usize,
    sizes: Option<wgpu::Buffer>,
    uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct Pipelines {
    points_normal: wgpu::RenderPipeline,
    points_additive: wgpu::RenderPipeline,
    lines_normal: wgpu::RenderPipeline,
    lines_additive: wgpu::RenderPipeline,
}

impl Pipelines {
    fn get(&self, primitive: Primitive, blending: Blending) -> &wgpu::RenderPipeline {
        match (primitive, blending) {
            (Primitive::Points, Blending::Normal) => &self.points_normal,
            (Primitive::Points, Blending::Additive) => &self.points_additive,
            (Primitive::Lines, Blending::Normal) => &self.lines_normal,
            (Primitive::Lines, Blending::Additive) => &self.lines_additive,
        }
    }
}

/// WebGPU render target for one canvas. Clears to transparent so the page
/// shows through.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    pipelines: Pipelines,
    object_bgl: wgpu::BindGroupLayout,
    frame_uniform_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    // Shared fallback stream for points without a size attribute
    unit_sizes: Option<wgpu::Buffer>,

    geometries: Vec<GpuGeometry>,
    objects: Vec<GpuObject>,

    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
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
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
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
            .find(|f| matches!(f, wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm))
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = if caps.alpha_modes.contains(&wgpu::CompositeAlphaMode::PreMultiplied) {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto)
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

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(fx_core::SCENE_WGSL.into()),
        });
        let frame_bgl = uniform_layout(
            &device,
            "frame_bgl",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );
        let object_bgl = uniform_layout(
            &device,
            "object_bgl",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&frame_bgl, &object_bgl],
            push_constant_ranges: &[],
        });
        let pipelines = Pipelines {
            points_normal: make_scene_pipeline(&device, &layout, &shader, Primitive::Points, Blending::Normal, format),
            points_additive: make_scene_pipeline(&device, &layout, &shader, Primitive::Points, Blending::Additive, format),
            lines_normal: make_scene_pipeline(&device, &layout, &shader, Primitive::Lines, Blending::Normal, format),
            lines_additive: make_scene_pipeline(&device, &layout, &shader, Primitive::Lines, Blending::Additive, format),
        };

        let frame_uniform_buffer = uniform_buffer(&device, "frame_uniforms", std::mem::size_of::<FrameUniforms>());
        let frame_bind_group = uniform_bind_group(&device, "frame_bg", &frame_bgl, &frame_uniform_buffer);

        log::info!("[gpu] surface {}x{} format={:?} alpha={:?}", width, height, format, alpha_mode);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipelines,
            object_bgl,
            frame_uniform_buffer,
            frame_bind_group,
            unit_sizes: None,
            geometries: Vec::new(),
            objects: Vec::new(),
            width,
            height,
        })
    }

    fn upload_geometry(&self, geometry: &GeometryBuffer) -> GpuGeometry {
        let count = geometry.len();
        let white;
        let colors: &[f32] = match geometry.colors.as_deref() {
            Some(c) if c.len() == geometry.positions.len() => c,
            _ => {
                white = vec![1.0_f32; count * 3];
                &white
            }
        };
        GpuGeometry {
            positions: vertex_buffer(&self.device, "positions", &geometry.positions),
            colors: vertex_buffer(&self.device, "colors", colors),
            count: count as u32,
        }
    }

    fn draw_objects(&self, rpass: &mut wgpu::RenderPass<'_>, graph: &SceneGraph) {
        rpass.set_bind_group(0, &self.frame_bind_group, &[]);
        for obj in &self.objects {
            let scene_obj = graph.object(obj.id);
            let Some(geo) = self.geometries.get(obj.geometry) else {
                continue;
            };
            rpass.set_pipeline(self.pipelines.get(scene_obj.primitive, scene_obj.material.blending));
            rpass.set_bind_group(1, &obj.bind_group, &[]);
            rpass.set_vertex_buffer(0, geo.positions.slice(..));
            rpass.set_vertex_buffer(1, geo.colors.slice(..));
            match scene_obj.primitive {
                Primitive::Points => {
                    let sizes = obj.sizes.as_ref().or(self.unit_sizes.as_ref());
                    let Some(sizes) = sizes else {
                        continue;
                    };
                    rpass.set_vertex_buffer(2, sizes.slice(..));
                    rpass.draw(0..6, 0..geo.count);
                }
                Primitive::Lines => rpass.draw(0..geo.count, 0..1),
            }
        }
    }
}

impl RenderTarget for GpuState {
    type Error = anyhow::Error;

    fn upload(&mut self, graph: &SceneGraph) -> anyhow::Result<()> {
        self.geometries.clear();
        self.objects.clear();

        let mut by_ptr: FnvHashMap<*const GeometryBuffer, usize> = FnvHashMap::default();
        let mut max_points = 0usize;
        for id in graph.ids() {
            let obj = graph.object(id);
            // empty buffers cannot be bound as vertex streams
            if obj.geometry.is_empty() {
                continue;
            }
            let key = Arc::as_ptr(&obj.geometry);
            let geometry = match by_ptr.get(&key) {
                Some(&i) => i,
                None => {
                    let gpu = self.upload_geometry(&obj.geometry);
                    self.geometries.push(gpu);
                    by_ptr.insert(key, self.geometries.len() - 1);
                    self.geometries.len() - 1
                }
            };
            if obj.primitive == Primitive::Points {
                max_points = max_points.max(obj.geometry.len());
            }
            let sizes = obj
                .sizes
                .as_ref()
                .filter(|s| s.len() >= obj.geometry.len())
                .map(|s| vertex_buffer(&self.device, "sizes", s));
            let uniforms = uniform_buffer(&self.device, obj.name, std::mem::size_of::<ObjectUniforms>());
            let bind_group = uniform_bind_group(&self.device, obj.name, &self.object_bgl, &uniforms);
            self.objects.push(GpuObject {
                id,
                geometry,
                sizes,
                uniforms,
                bind_group,
            });
        }
        self.unit_sizes = (max_points > 0).then(|| vertex_buffer(&self.device, "unit_sizes", &vec![0.5_f32; max_points]));
        log::info!(
            "[gpu] uploaded objects={} geometries={}",
            self.objects.len(),
            self.geometries.len()
        );
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn render(&mut self, frame: &FrameView<'_>) -> anyhow::Result<()> {
        let graph = frame.graph;
        let uniforms = pack_frame(frame.camera, frame.fog, &graph.lights, graph.ambient, frame.elapsed);
        self.queue
            .write_buffer(&self.frame_uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        for obj in &self.objects {
            let scene_obj = graph.object(obj.id);
            let packed = pack_object(
                graph.world_matrix(obj.id),
                &scene_obj.material,
                scene_obj.primitive,
                obj.sizes.is_some(),
            );
            self.queue.write_buffer(&obj.uniforms, 0, bytemuck::bytes_of(&packed));
        }

        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let view = output
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
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.draw_objects(&mut rpass, graph);
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }

    fn release(&mut self) {
        for geo in self.geometries.drain(..) {
            geo.positions.destroy();
            geo.colors.destroy();
        }
        for obj in self.objects.drain(..) {
            obj.uniforms.destroy();
            if let Some(s) = obj.sizes {
                s.destroy();
            }
        }
        if let Some(s) = self.unit_sizes.take() {
            s.destroy();
        }
        self.frame_uniform_buffer.destroy();
        log::info!("[gpu] released");
    }
}
