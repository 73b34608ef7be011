//! wgpu device able to create viewport swapchains

use dear_viewport::{GraphicsDevice, SwapchainDescription};

use crate::error::WgpuSwapchainError;
use crate::format::{alpha_mode, present_mode, texture_format};
use crate::swapchain::WgpuSwapchain;

/// The wgpu objects every viewport swapchain is created from.
///
/// All handles are reference counted by wgpu, so cloning is cheap.
#[derive(Debug, Clone)]
pub struct WgpuDevice {
    pub instance: wgpu::Instance,
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl WgpuDevice {
    pub fn new(
        instance: wgpu::Instance,
        adapter: wgpu::Adapter,
        device: wgpu::Device,
        queue: wgpu::Queue,
    ) -> Self {
        Self {
            instance,
            adapter,
            device,
            queue,
        }
    }

    /// Pick a high-performance adapter and open a device on it, blocking
    /// until both are ready
    pub fn request(instance: wgpu::Instance) -> Result<Self, WgpuSwapchainError> {
        Self::request_with(instance, None)
    }

    /// Like [`request`](Self::request), requiring an adapter that can present
    /// to `compatible_surface`
    pub fn request_with(
        instance: wgpu::Instance,
        compatible_surface: Option<&wgpu::Surface<'_>>,
    ) -> Result<Self, WgpuSwapchainError> {
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface,
            force_fallback_adapter: false,
        }))?;
        let (device, queue) =
            pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default()))?;

        let info = adapter.get_info();
        tracing::info!(
            "wgpu device ready: {} ({:?})",
            info.name,
            info.backend
        );
        Ok(Self::new(instance, adapter, device, queue))
    }
}

impl<S> GraphicsDevice<S> for WgpuDevice
where
    S: Into<wgpu::SurfaceTarget<'static>>,
{
    type Swapchain = WgpuSwapchain;
    type Error = WgpuSwapchainError;

    fn create_swapchain(
        &self,
        source: S,
        description: &SwapchainDescription,
    ) -> Result<WgpuSwapchain, WgpuSwapchainError> {
        let surface = self.instance.create_surface(source)?;
        let caps = surface.get_capabilities(&self.adapter);

        let format = texture_format(description.format);
        if !caps.formats.contains(&format) {
            tracing::error!(
                "surface does not support {:?}; supported: {:?}",
                format,
                caps.formats
            );
            return Err(WgpuSwapchainError::UnsupportedFormat {
                format,
                supported: caps.formats,
            });
        }

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: description.width.max(1),
            height: description.height.max(1),
            present_mode: present_mode(description.vsync),
            alpha_mode: alpha_mode(&caps.alpha_modes),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        Ok(WgpuSwapchain::configure(
            self.device.clone(),
            surface,
            config,
            description.depth,
        ))
    }
}
