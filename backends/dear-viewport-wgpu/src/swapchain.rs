//! Surface-backed swapchain for one viewport window

use dear_viewport::Swapchain;

use crate::error::WgpuSwapchainError;

/// Format of the optional depth buffer
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// A configured surface plus an optional depth buffer of the same size
pub struct WgpuSwapchain {
    device: wgpu::Device,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    depth: Option<DepthBuffer>,
    // Set by a suboptimal frame; the surface cannot be reconfigured while
    // that frame is still held.
    suboptimal: bool,
}

struct DepthBuffer {
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl DepthBuffer {
    fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("dear-viewport-wgpu::depth"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self {
            _texture: texture,
            view,
        }
    }
}

impl WgpuSwapchain {
    pub(crate) fn configure(
        device: wgpu::Device,
        surface: wgpu::Surface<'static>,
        config: wgpu::SurfaceConfiguration,
        with_depth: bool,
    ) -> Self {
        surface.configure(&device, &config);
        let depth = with_depth.then(|| DepthBuffer::new(&device, config.width, config.height));
        tracing::debug!(
            "configured swapchain {}x{} {:?} {:?} depth={}",
            config.width,
            config.height,
            config.format,
            config.present_mode,
            with_depth
        );
        Self {
            device,
            surface,
            config,
            depth,
            suboptimal: false,
        }
    }

    pub fn surface(&self) -> &wgpu::Surface<'static> {
        &self.surface
    }

    pub fn config(&self) -> &wgpu::SurfaceConfiguration {
        &self.config
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn size(&self) -> [u32; 2] {
        [self.config.width, self.config.height]
    }

    /// Depth attachment view, if the swapchain was created with depth
    pub fn depth_view(&self) -> Option<&wgpu::TextureView> {
        self.depth.as_ref().map(|depth| &depth.view)
    }

    /// Acquire the next back-buffer.
    ///
    /// A lost or outdated surface is reconfigured and acquisition retried
    /// once. A suboptimal frame is still returned; the surface is
    /// reconfigured before the following acquisition. Returns `Ok(None)` when
    /// the frame should be skipped.
    pub fn acquire_frame(&mut self) -> Result<Option<wgpu::SurfaceTexture>, WgpuSwapchainError> {
        if std::mem::take(&mut self.suboptimal) {
            self.reconfigure();
        }
        match acquisition(self.surface.get_current_texture()) {
            Acquisition::Frame { frame, suboptimal } => {
                self.suboptimal = suboptimal;
                Ok(Some(frame))
            }
            Acquisition::Skip => Ok(None),
            Acquisition::Reconfigure => {
                tracing::debug!("surface lost or outdated; reconfiguring");
                self.reconfigure();
                match acquisition(self.surface.get_current_texture()) {
                    Acquisition::Frame { frame, suboptimal } => {
                        self.suboptimal = suboptimal;
                        Ok(Some(frame))
                    }
                    Acquisition::Skip | Acquisition::Reconfigure => Ok(None),
                    Acquisition::Invalid => Err(WgpuSwapchainError::SurfaceValidation),
                }
            }
            Acquisition::Invalid => Err(WgpuSwapchainError::SurfaceValidation),
        }
    }

    fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.config);
    }
}

/// What to do with the result of `Surface::get_current_texture`
#[derive(Debug)]
pub(crate) enum Acquisition {
    /// Render into `frame`; reconfigure before the next one when suboptimal
    Frame {
        frame: wgpu::SurfaceTexture,
        suboptimal: bool,
    },
    /// Nothing to present this frame
    Skip,
    /// Reconfigure the surface, then try again
    Reconfigure,
    /// Acquisition failed validation
    Invalid,
}

pub(crate) fn acquisition(current: wgpu::CurrentSurfaceTexture) -> Acquisition {
    match current {
        wgpu::CurrentSurfaceTexture::Success(frame) => Acquisition::Frame {
            frame,
            suboptimal: false,
        },
        wgpu::CurrentSurfaceTexture::Suboptimal(frame) => Acquisition::Frame {
            frame,
            suboptimal: true,
        },
        wgpu::CurrentSurfaceTexture::Timeout | wgpu::CurrentSurfaceTexture::Occluded => {
            Acquisition::Skip
        }
        wgpu::CurrentSurfaceTexture::Outdated | wgpu::CurrentSurfaceTexture::Lost => {
            Acquisition::Reconfigure
        }
        wgpu::CurrentSurfaceTexture::Validation => Acquisition::Invalid,
    }
}

impl Swapchain for WgpuSwapchain {
    fn resize(&mut self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        if self.config.width == width && self.config.height == height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.reconfigure();
        self.suboptimal = false;
        if self.depth.is_some() {
            self.depth = Some(DepthBuffer::new(&self.device, width, height));
        }
        tracing::trace!("resized swapchain to {}x{}", width, height);
    }

    fn release(self) {
        tracing::debug!(
            "released swapchain {}x{}",
            self.config.width,
            self.config.height
        );
        // Depth first, then the surface and its reference to the window.
        drop(self.depth);
        drop(self.surface);
    }
}

impl std::fmt::Debug for WgpuSwapchain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WgpuSwapchain")
            .field("size", &self.size())
            .field("format", &self.config.format)
            .field("present_mode", &self.config.present_mode)
            .field("depth", &self.depth.is_some())
            .finish()
    }
}
