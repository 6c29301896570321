//! The disc renderer: a single flat circle drawn at a caller-supplied offset.
//!
//! Resources (shader modules, pipeline, vertex/index buffers, projection) are
//! built once at construction and never mutated; `draw` only rewrites the
//! per-frame uniform block.

mod frustum;
mod mesh;
mod uniform;

pub use frustum::Frustum;
pub use mesh::{fan_indices, fan_vertices};

use wgpu::util::DeviceExt;

use crate::coords::{ColorRgba, Vec2, Viewport};
use crate::render::{DiscError, RenderCtx, RenderTarget};

use uniform::DiscUniform;

/// Disc shape parameters.
///
/// Defaults give a small gray disc sitting just past the near plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DiscConfig {
    /// Disc radius in clip-space units.
    pub radius: f32,

    /// Number of perimeter samples approximating the circle.
    pub sample_count: u32,

    /// Constant depth shared by every vertex. Must lie between the fixed
    /// clip planes for the disc to be visible.
    pub depth: f32,

    /// Fill color emitted by the fragment stage.
    pub color: ColorRgba,
}

impl Default for DiscConfig {
    fn default() -> Self {
        Self {
            radius: 0.1,
            sample_count: 16,
            depth: -1.15,
            color: ColorRgba::new(0.5, 0.5, 0.5, 1.0),
        }
    }
}

/// GPU-resident disc: pipeline, fan mesh, and projection.
///
/// Constructed once per surface; `draw` may be called every frame at
/// interactive rates. GPU state is bound on each call rather than cached
/// across calls.
pub struct DiscRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    frustum: Frustum,
    color: ColorRgba,
}

impl DiscRenderer {
    /// Builds the disc's GPU program and uploads its geometry.
    ///
    /// Side effects, in order: compile both shader stages, create the render
    /// pipeline, generate and upload the fan mesh, create the uniform
    /// resources, compute the projection from `viewport`. Compile and link
    /// failures are logged per stage and returned as [`DiscError`]; the
    /// caller decides whether to abort or continue without a disc.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
        config: DiscConfig,
    ) -> Result<Self, DiscError> {
        let vs = compile_stage(device, "vertex", include_str!("shaders/disc_vs.wgsl"));
        let fs = compile_stage(device, "fragment", include_str!("shaders/disc_fs.wgsl"));

        let (vs, fs) = match (vs, fs) {
            (Ok(vs), Ok(fs)) => (vs, fs),
            (Err(err), _) | (_, Err(err)) => return Err(err),
        };

        let pipeline = link_pipeline(device, surface_format, &vs, &fs)?;

        let vertices = fan_vertices(&config);
        let indices = fan_indices(config.sample_count);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("marble disc vbo"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("marble disc ibo"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("marble disc ubo"),
            size: std::mem::size_of::<DiscUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("marble disc bind group"),
            layout: &pipeline.get_bind_group_layout(0),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            uniform_buffer,
            bind_group,
            frustum: Frustum::new(viewport),
            color: config.color,
        })
    }

    /// Draws the disc displaced by `offset` (clip-space units).
    ///
    /// Each call uploads the call's literal offset together with the stored
    /// projection and color; nothing accumulates between calls, and the mesh
    /// buffers are never touched.
    pub fn draw(&self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, offset: Vec2) {
        let block = DiscUniform::pack(self.frustum.matrix(), self.color, offset);
        ctx.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&block));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("marble disc pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

// ── pipeline construction ─────────────────────────────────────────────────

const VERTEX_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

/// Compiles one shader stage, capturing validation failures.
///
/// The error scope is the wgpu analogue of a status query right after the
/// compile: it turns the driver's asynchronous validation report into a
/// synchronous result. A failing stage is logged before being returned so
/// each broken stage produces its own diagnostic line.
fn compile_stage(
    device: &wgpu::Device,
    stage: &'static str,
    source: &str,
) -> Result<wgpu::ShaderModule, DiscError> {
    let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("marble disc shader"),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    match pollster::block_on(error_scope.pop()) {
        None => Ok(module),
        Some(err) => {
            let detail = err.to_string();
            log::error!("compile failure in {stage} shader: {detail}");
            Err(DiscError::ShaderCompile { stage, detail })
        }
    }
}

/// Links the compiled stages into a render pipeline.
fn link_pipeline(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
    vs: &wgpu::ShaderModule,
    fs: &wgpu::ShaderModule,
) -> Result<wgpu::RenderPipeline, DiscError> {
    let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("marble disc bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: Some(DiscUniform::min_binding_size()),
            },
            count: None,
        }],
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("marble disc pipeline layout"),
        bind_group_layouts: &[&bind_group_layout],
        immediate_size: 0,
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("marble disc pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: vs,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[vertex_layout()],
        },
        fragment: Some(wgpu::FragmentState {
            module: fs,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    });

    match pollster::block_on(error_scope.pop()) {
        None => Ok(pipeline),
        Some(err) => {
            let detail = err.to_string();
            log::error!("pipeline link failure: {detail}");
            Err(DiscError::PipelineLink { detail })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_a_small_gray_marker() {
        let config = DiscConfig::default();
        assert_eq!(config.radius, 0.1);
        assert_eq!(config.sample_count, 16);
        assert_eq!(config.depth, -1.15);
        assert_eq!(config.color, ColorRgba::new(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn vertex_layout_is_three_tightly_packed_floats() {
        let layout = vertex_layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(layout.attributes[0].offset, 0);
    }
}
