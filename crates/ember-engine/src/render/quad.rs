use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::camera::Camera;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::QuadDraw;
use crate::shader::BlendMode;
use crate::texture::TextureStore;

use super::common::{
    blend_state, camera_ubo_min_binding_size, CameraUniform, QuadVertex, QUAD_INDICES,
    QUAD_VERTICES,
};

/// Initialization parameters for [`QuadRenderer`].
#[derive(Debug, Clone)]
pub struct QuadRendererInit {
    /// Instance buffer capacity allocated on first use. Grows by powers of two.
    pub initial_instance_capacity: usize,
}

impl Default for QuadRendererInit {
    fn default() -> Self {
        Self { initial_instance_capacity: 256 }
    }
}

/// Draws the textured quads recorded in a [`Camera`].
///
/// Pipelines are created lazily and rebuilt when the surface format changes.
/// Draws referencing a texture missing from the [`TextureStore`] are skipped
/// (one-time warning).
pub struct QuadRenderer {
    init: QuadRendererInit,

    pipeline_format: Option<wgpu::TextureFormat>,
    alpha_pipeline: Option<wgpu::RenderPipeline>,
    additive_pipeline: Option<wgpu::RenderPipeline>,

    camera_bgl: Option<wgpu::BindGroupLayout>,
    camera_bind_group: Option<wgpu::BindGroup>,
    camera_ubo: Option<wgpu::Buffer>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,

    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,

    warned_missing_texture: bool,
    warned_instance_overflow: bool,
}

impl QuadRenderer {
    pub fn new(init: QuadRendererInit) -> Self {
        Self {
            init,
            pipeline_format: None,
            alpha_pipeline: None,
            additive_pipeline: None,
            camera_bgl: None,
            camera_bind_group: None,
            camera_ubo: None,
            quad_vbo: None,
            quad_ibo: None,
            instance_vbo: None,
            instance_capacity: 0,
            warned_missing_texture: false,
            warned_instance_overflow: false,
        }
    }

    /// Renders `camera`'s draw list into `target`, loading existing contents.
    ///
    /// The draw list is left untouched; call [`Camera::clear`] once the frame
    /// is submitted.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        camera: &Camera,
        textures: &TextureStore,
    ) {
        let draws = camera.draw_list();
        if draws.is_empty() {
            return;
        }

        self.ensure_pipelines(ctx, textures.bind_group_layout());
        self.ensure_static_buffers(ctx);
        self.ensure_camera_binding(ctx);

        let instances: Vec<QuadInstance> = draws.items().iter().map(QuadInstance::from).collect();

        // Mutating methods must happen before borrowing pipelines/buffers immutably.
        self.write_camera_uniform(ctx, camera);
        self.ensure_instance_capacity(ctx, instances.len());

        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };
        ctx.queue.write_buffer(instance_vbo, 0, bytemuck::cast_slice(&instances));

        let mut missing_texture = false;
        let mut instance_overflow = false;
        {
            let Some(alpha) = self.alpha_pipeline.as_ref() else { return };
            let Some(additive) = self.additive_pipeline.as_ref() else { return };
            let Some(camera_bg) = self.camera_bind_group.as_ref() else { return };
            let Some(quad_vbo) = self.quad_vbo.as_ref() else { return };
            let Some(quad_ibo) = self.quad_ibo.as_ref() else { return };

            let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("ember quad pass"),
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

            rpass.set_bind_group(0, camera_bg, &[]);
            rpass.set_vertex_buffer(0, quad_vbo.slice(..));
            rpass.set_vertex_buffer(1, instance_vbo.slice(..));
            rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);

            for batch in draws.batches() {
                let Some(texture_bg) = textures.bind_group(batch.texture) else {
                    missing_texture = true;
                    continue;
                };
                let pipeline = match batch.blend {
                    BlendMode::Alpha => alpha,
                    BlendMode::Additive => additive,
                };
                rpass.set_pipeline(pipeline);
                rpass.set_bind_group(1, texture_bg, &[]);
                // Batches are in submission order, so every later range overflows too.
                let Some(instances) = instance_range(&batch.range) else {
                    instance_overflow = true;
                    break;
                };
                rpass.draw_indexed(0..6, 0, instances);
            }
        }

        if instance_overflow && !self.warned_instance_overflow {
            log::warn!("QuadRenderer: instance index exceeds u32; remaining draws skipped");
            self.warned_instance_overflow = true;
        }

        if missing_texture && !self.warned_missing_texture {
            log::warn!("QuadRenderer: draw references a texture not in the store; skipped");
            self.warned_missing_texture = true;
        }
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>, texture_bgl: &wgpu::BindGroupLayout) {
        if self.pipeline_format == Some(ctx.surface_format)
            && self.alpha_pipeline.is_some()
            && self.additive_pipeline.is_some()
        {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ember quad shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/quad.wgsl").into()),
        });

        let camera_bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("ember camera bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: Some(camera_ubo_min_binding_size()),
                },
                count: None,
            }],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("ember quad pipeline layout"),
            bind_group_layouts: &[&camera_bgl, texture_bgl],
            immediate_size: 0,
        });

        self.alpha_pipeline = Some(create_pipeline(
            ctx,
            &pipeline_layout,
            &shader,
            BlendMode::Alpha,
            "ember quad alpha pipeline",
        ));
        self.additive_pipeline = Some(create_pipeline(
            ctx,
            &pipeline_layout,
            &shader,
            BlendMode::Additive,
            "ember quad additive pipeline",
        ));
        self.pipeline_format = Some(ctx.surface_format);
        self.camera_bgl = Some(camera_bgl);

        self.camera_bind_group = None;
        self.camera_ubo = None;
        log::debug!("QuadRenderer: pipelines built for {:?}", ctx.surface_format);
    }

    fn ensure_camera_binding(&mut self, ctx: &RenderCtx<'_>) {
        if self.camera_bind_group.is_some() && self.camera_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.camera_bgl.as_ref() else { return };

        let camera_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ember camera ubo"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("ember camera bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_ubo.as_entire_binding(),
            }],
        });

        self.camera_ubo = Some(camera_ubo);
        self.camera_bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }

        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ember quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ember quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }

    fn write_camera_uniform(&mut self, ctx: &RenderCtx<'_>, camera: &Camera) {
        let Some(ubo) = self.camera_ubo.as_ref() else { return };
        let u = CameraUniform::from(camera.view());
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    fn ensure_instance_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.instance_capacity && self.instance_vbo.is_some() {
            return;
        }

        let new_cap = required.next_power_of_two().max(self.init.initial_instance_capacity.max(1));
        let new_size = (new_cap * std::mem::size_of::<QuadInstance>()) as u64;

        self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ember quad instance vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = new_cap;
    }
}

impl Default for QuadRenderer {
    fn default() -> Self {
        Self::new(QuadRendererInit::default())
    }
}

fn create_pipeline(
    ctx: &RenderCtx<'_>,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    blend: BlendMode,
    label: &'static str,
) -> wgpu::RenderPipeline {
    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[QuadVertex::layout(), QuadInstance::layout()],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(blend_state(blend)),
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
    })
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (68 bytes):
///
///  offset  0  position   [f32; 2]   loc 1
///  offset  8  size       [f32; 2]   loc 2
///  offset 16  uv_top     [f32; 4]   loc 3  top-right, top-left
///  offset 32  uv_bottom  [f32; 4]   loc 4  bottom-right, bottom-left
///  offset 48  color      [f32; 4]   loc 5
///  offset 64  rotation   f32        loc 6
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct QuadInstance {
    position: [f32; 2],
    size: [f32; 2],
    uv_top: [f32; 4],
    uv_bottom: [f32; 4],
    color: [f32; 4],
    rotation: f32,
}

impl QuadInstance {
    const ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        1 => Float32x2, // position
        2 => Float32x2, // size
        3 => Float32x4, // uv_top
        4 => Float32x4, // uv_bottom
        5 => Float32x4, // color
        6 => Float32    // rotation
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

impl From<&QuadDraw> for QuadInstance {
    fn from(draw: &QuadDraw) -> Self {
        let uv = draw.uv;
        Self {
            position: draw.transform.position.to_array(),
            size: draw.transform.size.to_array(),
            uv_top: [uv[0], uv[1], uv[2], uv[3]],
            uv_bottom: [uv[4], uv[5], uv[6], uv[7]],
            color: draw.color.to_array(),
            rotation: draw.transform.rotation,
        }
    }
}

/// Instance range for `draw_indexed`, or `None` if it does not fit in `u32`.
fn instance_range(range: &Range<usize>) -> Option<Range<u32>> {
    let start = u32::try_from(range.start).ok()?;
    let end = u32::try_from(range.end).ok()?;
    Some(start..end)
}
