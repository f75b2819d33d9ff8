//! Star sprite texture
//!
//! The projector only needs the texture's pixel extent; this module also owns
//! decoding and GPU upload so the frame driver can stay thin.

use std::fmt;
use std::path::Path;

/// Error type for sprite texture operations
#[derive(Debug)]
pub enum TextureError {
    /// Decoding or reading the image failed
    Image(image::ImageError),
    /// The image has no pixels
    ZeroExtent { width: u32, height: u32 },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::Image(err) => write!(f, "Texture load error: {}", err),
            TextureError::ZeroExtent { width, height } => {
                write!(f, "Texture has zero extent: {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextureError::Image(err) => Some(err),
            TextureError::ZeroExtent { .. } => None,
        }
    }
}

impl From<image::ImageError> for TextureError {
    fn from(err: image::ImageError) -> Self {
        TextureError::Image(err)
    }
}

/// Pixel size of the sprite texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureExtent {
    width: u32,
    height: u32,
}

impl TextureExtent {
    /// Create an extent; both dimensions must be non-zero
    pub fn new(width: u32, height: u32) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::ZeroExtent { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Texel-space corners: top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [[f32; 2]; 4] {
        let w = self.width as f32;
        let h = self.height as f32;
        [[0.0, 0.0], [w, 0.0], [w, h], [0.0, h]]
    }
}

/// Radial glow sprite used when no texture file is available
///
/// White texels with alpha falling off smoothly from the centre to the edge.
pub fn procedural_sprite(size: u32) -> image::RgbaImage {
    let size = size.max(1);
    let center = (size as f32 - 1.0) * 0.5;
    let radius = (size as f32 * 0.5).max(f32::EPSILON);

    image::RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        let d = (dx * dx + dy * dy).sqrt() / radius;
        let falloff = (1.0 - d).clamp(0.0, 1.0);
        let alpha = (falloff * falloff * 255.0).round() as u8;
        image::Rgba([255, 255, 255, alpha])
    })
}

/// Sprite texture resident on the GPU
pub struct StarTexture {
    #[allow(dead_code)] // keeps the texture alive behind the view
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    extent: TextureExtent,
}

impl StarTexture {
    /// Decode an image file and upload it
    pub fn load<P: AsRef<Path>>(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: P,
        smooth: bool,
    ) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let rgba = image::open(path)?.to_rgba8();
        log::info!(
            "Loaded star texture {} ({}x{})",
            path.display(),
            rgba.width(),
            rgba.height()
        );
        Self::from_rgba(device, queue, &rgba, smooth)
    }

    /// Upload an RGBA8 image
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        rgba: &image::RgbaImage,
        smooth: bool,
    ) -> Result<Self, TextureError> {
        let extent = TextureExtent::new(rgba.width(), rgba.height())?;
        let size = wgpu::Extent3d {
            width: extent.width,
            height: extent.height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Star Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            rgba.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * extent.width),
                rows_per_image: Some(extent.height),
            },
            size,
        );

        let filter = if smooth {
            wgpu::FilterMode::Linear
        } else {
            wgpu::FilterMode::Nearest
        };
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Star Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: filter,
            min_filter: filter,
            ..Default::default()
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Ok(Self {
            texture,
            view,
            sampler,
            extent,
        })
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    /// Pixel extent, used for texture coordinates
    pub fn extent(&self) -> TextureExtent {
        self.extent
    }
}
