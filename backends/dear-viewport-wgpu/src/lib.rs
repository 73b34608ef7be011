//! WGPU swapchain backend for dear-viewport
//!
//! [`WgpuDevice`] implements the graphics side of the viewport shim: every
//! viewport window gets its own `wgpu::Surface`, configured from the
//! viewport's swapchain description, plus an optional `Depth32Float` depth
//! buffer.
//!
//! ```rust,no_run
//! use dear_viewport_wgpu::WgpuDevice;
//!
//! let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
//!     backends: wgpu::Backends::PRIMARY,
//!     ..wgpu::InstanceDescriptor::new_without_display_handle()
//! });
//! let device = WgpuDevice::request(instance)?;
//! # Ok::<(), dear_viewport_wgpu::WgpuSwapchainError>(())
//! ```
//!
//! Surfaces rarely support the single-channel `R32Float` default; pick a
//! presentable format through `ViewportWindowConfig::with_format` when
//! targeting real displays.

mod device;
mod error;
mod format;
mod swapchain;

pub use device::WgpuDevice;
pub use error::WgpuSwapchainError;
pub use format::{present_mode, texture_format};
pub use swapchain::{DEPTH_FORMAT, WgpuSwapchain};
