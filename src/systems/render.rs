//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Sprite pipeline and star texture
//! - Frame rendering

use std::sync::Arc;
use winit::dpi::PhysicalSize;
use winit::window::Window;
use starfield_render::{
    context::{RenderContext, RenderContextError},
    pipeline::{SpritePipeline, SpriteUniforms},
    procedural_sprite, QuadBuffer, StarTexture, TextureError, TextureExtent,
};
use crate::config::RenderingConfig;

/// Edge length of the fallback sprite
const FALLBACK_SPRITE_SIZE: u32 = 64;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU initialization failed
    Context(RenderContextError),
    /// Neither the configured nor the fallback texture could be created
    Texture(TextureError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(err) => write!(f, "{}", err),
            RenderError::Texture(err) => write!(f, "{}", err),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(err) => Some(err),
            RenderError::Texture(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RenderContextError> for RenderError {
    fn from(err: RenderContextError) -> Self {
        RenderError::Context(err)
    }
}

impl From<TextureError> for RenderError {
    fn from(err: TextureError) -> Self {
        RenderError::Texture(err)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: SpritePipeline,
    texture: StarTexture,
    clear_color: wgpu::Color,
}

impl RenderSystem {
    /// Create render system from window and config
    ///
    /// Falls back to a generated glow sprite if the configured texture
    /// cannot be loaded.
    pub fn new(
        window: Arc<Window>,
        config: &RenderingConfig,
        vsync: bool,
        quad_capacity: usize,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let texture = match StarTexture::load(
            &context.device,
            &context.queue,
            &config.texture_path,
            config.smooth_texture,
        ) {
            Ok(texture) => texture,
            Err(e) => {
                log::warn!(
                    "Failed to load star texture {}: {}. Using generated sprite.",
                    config.texture_path.display(),
                    e
                );
                StarTexture::from_rgba(
                    &context.device,
                    &context.queue,
                    &procedural_sprite(FALLBACK_SPRITE_SIZE),
                    config.smooth_texture,
                )?
            }
        };

        let mut pipeline =
            SpritePipeline::new(&context.device, context.config.format, quad_capacity);
        pipeline.set_texture(&context.device, &texture);

        let bg = config.background_color;
        let system = Self {
            context,
            pipeline,
            texture,
            clear_color: wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        };
        system.write_transform();

        Ok(system)
    }

    /// Pixel extent of the bound star texture
    pub fn texture_extent(&self) -> TextureExtent {
        self.texture.extent()
    }

    /// Handle window resize
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.context.resize(size);
        self.write_transform();
    }

    /// Reconfigure the surface at its current size
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
    }

    /// Centre translation and NDC scale for the current surface size
    fn write_transform(&self) {
        let uniforms =
            SpriteUniforms::centered(self.context.config.width as f32, self.context.config.height as f32);
        self.pipeline.update_uniforms(&self.context.queue, &uniforms);
    }

    /// Upload the quad buffer and draw it
    pub fn render_frame(&mut self, quads: &QuadBuffer) -> Result<(), RenderError> {
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let quad_count = self.pipeline.upload_quads(&self.context.queue, quads);

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline
            .render(&mut encoder, &view, quad_count, self.clear_color);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
