use std::collections::HashMap;

use anyhow::{Context, Result};

use crate::render::RenderCtx;

use super::{TextureId, TextureInfo, TextureInfoStore};

struct GpuTexture {
    // Kept alive for the bind group's view.
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

/// Owns uploaded textures and their bind groups.
///
/// Every upload registers the image dimensions in the embedded
/// [`TextureInfoStore`], which renderables read through [`info`](Self::info).
pub struct TextureStore {
    info: TextureInfoStore,
    textures: HashMap<TextureId, GpuTexture>,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
}

impl TextureStore {
    /// Creates an empty store.
    ///
    /// `filter` applies to both magnification and minification. Pixel-art
    /// atlases usually want `Nearest`.
    pub fn new(device: &wgpu::Device, filter: wgpu::FilterMode) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("ember texture bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("ember texture sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: filter,
            min_filter: filter,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        Self {
            info: TextureInfoStore::new(),
            textures: HashMap::new(),
            bind_group_layout,
            sampler,
        }
    }

    /// Decodes an encoded image (PNG, JPEG, BMP) and uploads it.
    pub fn load_image(&mut self, ctx: &RenderCtx<'_>, bytes: &[u8]) -> Result<TextureId> {
        let image = image::load_from_memory(bytes)
            .context("failed to decode texture image")?
            .to_rgba8();
        let (width, height) = image.dimensions();
        self.insert_rgba8(ctx, width, height, image.as_raw())
    }

    /// Uploads tightly packed RGBA8 pixels, top row first.
    pub fn insert_rgba8(
        &mut self,
        ctx: &RenderCtx<'_>,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Result<TextureId> {
        anyhow::ensure!(width > 0 && height > 0, "texture has zero size ({width}x{height})");
        let expected = width as usize * height as usize * 4;
        anyhow::ensure!(
            pixels.len() == expected,
            "RGBA8 data is {} bytes, expected {expected} for {width}x{height}",
            pixels.len()
        );

        let size = wgpu::Extent3d { width, height, depth_or_array_layers: 1 };
        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("ember texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(width * 4),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("ember texture bind group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        let id = self.info.register(TextureInfo::new(width, height));
        self.textures.insert(id, GpuTexture { _texture: texture, bind_group });
        Ok(id)
    }

    /// Pixel dimensions of every uploaded texture.
    #[inline]
    pub fn info(&self) -> &TextureInfoStore {
        &self.info
    }

    pub(crate) fn bind_group(&self, id: TextureId) -> Option<&wgpu::BindGroup> {
        self.textures.get(&id).map(|t| &t.bind_group)
    }

    pub(crate) fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }
}
