//! WebGPU render pipeline setup

use super::vertex::Vertex;
use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Scale applied to playfield NDC so it keeps its aspect inside the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    pub sx: f32,
    pub sy: f32,
}

impl Letterbox {
    pub fn for_viewport(width: u32, height: u32) -> Self {
        let view_aspect = width.max(1) as f32 / height.max(1) as f32;
        let field_aspect = PLAYFIELD_WIDTH / PLAYFIELD_HEIGHT;
        if view_aspect > field_aspect {
            // Bars left and right
            Self {
                sx: field_aspect / view_aspect,
                sy: 1.0,
            }
        } else {
            Self {
                sx: 1.0,
                sy: view_aspect / field_aspect,
            }
        }
    }

    /// Playfield pixels (y down) to NDC
    pub fn map(&self, x: f32, y: f32) -> (f32, f32) {
        let nx = x / PLAYFIELD_WIDTH * 2.0 - 1.0;
        let ny = 1.0 - y / PLAYFIELD_HEIGHT * 2.0;
        (nx * self.sx, ny * self.sy)
    }
}

/// Map playfield pixels to NDC for a viewport of the given size
pub fn playfield_to_ndc(x: f32, y: f32, viewport: (u32, u32)) -> (f32, f32) {
    Letterbox::for_viewport(viewport.0, viewport.1).map(x, y)
}

/// Palette is authored as sRGB bytes, so prefer a format that writes them untouched
fn pick_surface_format(caps: &wgpu::SurfaceCapabilities) -> Option<wgpu::TextureFormat> {
    caps.formats
        .iter()
        .find(|f| !f.is_srgb())
        .or_else(|| caps.formats.first())
        .copied()
}

fn create_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("flat_shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("flat_layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("flat_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                // Pause dim is drawn with alpha over the scene
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

/// Vertex capacity of the first buffer; grows by doubling
const INITIAL_VERTEX_CAPACITY: u64 = 4096;

fn create_vertex_buffer(device: &wgpu::Device, capacity: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_vertices"),
        size: capacity * std::mem::size_of::<Vertex>() as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// GPU side of the game: surface, pipeline and the scene vertex buffer
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: u64,
    letterbox: Letterbox,
    /// Scratch space for NDC vertices, reused across frames
    staging: Vec<Vertex>,
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> Result<Self, wgpu::RequestDeviceError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("math-catch-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let caps = surface.get_capabilities(adapter);
        let format = pick_surface_format(&caps).unwrap_or(wgpu::TextureFormat::Bgra8Unorm);
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        log::info!("Surface format: {:?}", format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipeline = create_pipeline(&device, format);
        let vertex_buffer = create_vertex_buffer(&device, INITIAL_VERTEX_CAPACITY);

        Ok(Self {
            surface,
            device,
            queue,
            letterbox: Letterbox::for_viewport(config.width, config.height),
            config,
            pipeline,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            staging: Vec::new(),
        })
    }

    /// Viewport size in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || (width, height) == self.size() {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.letterbox = Letterbox::for_viewport(width, height);
        log::debug!("Surface resized to {}x{}", width, height);
    }

    /// Re-apply the current configuration after the surface was lost
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Upload a playfield-space scene and draw it
    pub fn render(&mut self, vertices: &[Vertex]) -> Result<(), wgpu::SurfaceError> {
        let letterbox = self.letterbox;
        self.staging.clear();
        self.staging.extend(vertices.iter().map(|v| {
            let (x, y) = letterbox.map(v.position[0], v.position[1]);
            Vertex::new(x, y, v.color)
        }));

        let needed = self.staging.len() as u64;
        if needed > self.vertex_capacity {
            self.vertex_capacity = needed.next_power_of_two();
            self.vertex_buffer = create_vertex_buffer(&self.device, self.vertex_capacity);
            log::debug!("Vertex buffer grown to {} vertices", self.vertex_capacity);
        }
        if needed > 0 {
            self.queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.staging));
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame_encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        // Letterbox bars
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if needed > 0 {
                pass.set_pipeline(&self.pipeline);
                pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                pass.draw(0..needed as u32, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_map_to_ndc_corners() {
        let size = (900, 600);
        assert_eq!(playfield_to_ndc(0.0, 0.0, size), (-1.0, 1.0));
        assert_eq!(
            playfield_to_ndc(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, size),
            (1.0, -1.0)
        );
        assert_eq!(playfield_to_ndc(450.0, 300.0, size), (0.0, 0.0));
    }

    #[test]
    fn test_wide_viewport_is_pillarboxed() {
        let (x, y) = playfield_to_ndc(PLAYFIELD_WIDTH, 0.0, (1800, 600));
        assert!((x - 0.5).abs() < 1e-6);
        assert_eq!(y, 1.0);
    }

    #[test]
    fn test_tall_viewport_is_letterboxed() {
        let (x, y) = playfield_to_ndc(0.0, 0.0, (900, 1200));
        assert_eq!(x, -1.0);
        assert!((y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_viewport_does_not_divide_by_zero() {
        let lb = Letterbox::for_viewport(0, 0);
        assert!(lb.sx.is_finite() && lb.sy.is_finite());
    }
}
