//! Viewport window configuration

use crate::backend::{PixelFormat, SwapchainDescription};
use crate::error::{ViewportError, ViewportResult};

/// Title given to viewport windows until the GUI library sets one
pub const DEFAULT_WINDOW_TITLE: &str = "No Title Yet";

/// Swapchain settings applied to every viewport window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwapchainConfig {
    pub format: PixelFormat,
    pub depth: bool,
    pub vsync: bool,
}

impl Default for SwapchainConfig {
    fn default() -> Self {
        Self {
            format: PixelFormat::R32Float,
            depth: true,
            vsync: false,
        }
    }
}

impl SwapchainConfig {
    /// Swapchain description for a window of the given size
    pub fn describe(&self, size: [u32; 2]) -> SwapchainDescription {
        SwapchainDescription {
            width: size[0],
            height: size[1],
            format: self.format,
            depth: self.depth,
            vsync: self.vsync,
        }
    }
}

/// Settings for viewport windows created by the shim
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewportWindowConfig {
    /// Initial window title
    pub title: String,
    pub swapchain: SwapchainConfig,
}

impl Default for ViewportWindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_WINDOW_TITLE.to_owned(),
            swapchain: SwapchainConfig::default(),
        }
    }
}

impl ViewportWindowConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.swapchain.format = format;
        self
    }

    pub fn with_depth(mut self, depth: bool) -> Self {
        self.swapchain.depth = depth;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.swapchain.vsync = vsync;
        self
    }

    /// Check that the configuration can be handed to a native windowing library
    pub fn validate(&self) -> ViewportResult<()> {
        if self.title.contains('\0') {
            return Err(ViewportError::configuration(format!(
                "window title contains a null byte: {:?}",
                self.title
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_viewport_window_contract() {
        let cfg = ViewportWindowConfig::default();
        assert_eq!(cfg.title, "No Title Yet");
        assert_eq!(cfg.swapchain.format, PixelFormat::R32Float);
        assert!(cfg.swapchain.depth);
        assert!(!cfg.swapchain.vsync);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn describe_uses_window_size() {
        let desc = SwapchainConfig::default().describe([320, 200]);
        assert_eq!(
            desc,
            SwapchainDescription {
                width: 320,
                height: 200,
                format: PixelFormat::R32Float,
                depth: true,
                vsync: false,
            }
        );
    }

    #[test]
    fn title_with_nul_is_rejected() {
        let cfg = ViewportWindowConfig::default().with_title("bad\0title");
        assert!(matches!(
            cfg.validate(),
            Err(ViewportError::Configuration { .. })
        ));
    }
}
