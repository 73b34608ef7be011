//! Pixel format and present mode mapping

use dear_viewport::PixelFormat;

/// wgpu texture format for a swapchain pixel format
pub fn texture_format(format: PixelFormat) -> wgpu::TextureFormat {
    match format {
        PixelFormat::R32Float => wgpu::TextureFormat::R32Float,
        PixelFormat::Bgra8Unorm => wgpu::TextureFormat::Bgra8Unorm,
        PixelFormat::Bgra8UnormSrgb => wgpu::TextureFormat::Bgra8UnormSrgb,
        PixelFormat::Rgba8Unorm => wgpu::TextureFormat::Rgba8Unorm,
        PixelFormat::Rgba8UnormSrgb => wgpu::TextureFormat::Rgba8UnormSrgb,
        PixelFormat::Rgba16Float => wgpu::TextureFormat::Rgba16Float,
    }
}

/// Present mode for the vsync setting.
///
/// The `Auto*` modes fall back to whatever the surface supports, so these
/// never fail surface configuration.
pub fn present_mode(vsync: bool) -> wgpu::PresentMode {
    if vsync {
        wgpu::PresentMode::AutoVsync
    } else {
        wgpu::PresentMode::AutoNoVsync
    }
}

/// Prefer opaque composition, then whatever the surface reports first
pub(crate) fn alpha_mode(supported: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    if supported.contains(&wgpu::CompositeAlphaMode::Opaque) {
        wgpu::CompositeAlphaMode::Opaque
    } else {
        supported
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_swapchain_format_is_single_channel_float() {
        assert_eq!(
            texture_format(PixelFormat::default()),
            wgpu::TextureFormat::R32Float
        );
    }

    #[test]
    fn srgb_formats_stay_srgb() {
        assert!(texture_format(PixelFormat::Bgra8UnormSrgb).is_srgb());
        assert!(texture_format(PixelFormat::Rgba8UnormSrgb).is_srgb());
        assert!(!texture_format(PixelFormat::Bgra8Unorm).is_srgb());
    }

    #[test]
    fn vsync_maps_to_auto_modes() {
        assert_eq!(present_mode(false), wgpu::PresentMode::AutoNoVsync);
        assert_eq!(present_mode(true), wgpu::PresentMode::AutoVsync);
    }

    #[test]
    fn alpha_mode_prefers_opaque() {
        use wgpu::CompositeAlphaMode::*;
        assert_eq!(alpha_mode(&[PreMultiplied, Opaque]), Opaque);
        assert_eq!(alpha_mode(&[PostMultiplied, Inherit]), PostMultiplied);
        assert_eq!(alpha_mode(&[]), Auto);
    }
}
