//! Viewport flags and their translation into window-creation options

use bitflags::bitflags;

bitflags! {
    /// Flags the GUI library attaches to a viewport
    ///
    /// Bit values match Dear ImGui's `ImGuiViewportFlags_`, so a raw flags
    /// word read from a native viewport converts with [`ViewportFlags::from_bits_retain`].
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ViewportFlags: u32 {
        /// Represent a platform window
        const IS_PLATFORM_WINDOW = 1 << 0;
        /// Represent a platform monitor (unused)
        const IS_PLATFORM_MONITOR = 1 << 1;
        /// Platform window created and managed by the application
        const OWNED_BY_APP = 1 << 2;
        /// Disable platform decorations: title bar, borders, etc.
        const NO_DECORATION = 1 << 3;
        /// Disable platform task bar icon
        const NO_TASK_BAR_ICON = 1 << 4;
        /// Don't take focus when created
        const NO_FOCUS_ON_APPEARING = 1 << 5;
        /// Don't take focus when clicked on
        const NO_FOCUS_ON_CLICK = 1 << 6;
        /// Make mouse pass through so we can drag this window while peeking behind it
        const NO_INPUTS = 1 << 7;
        /// Renderer doesn't need to clear the framebuffer ahead
        const NO_RENDERER_CLEAR = 1 << 8;
        /// Avoid merging this window into another host window
        const NO_AUTO_MERGE = 1 << 9;
        /// Display on top (for tooltips only)
        const TOP_MOST = 1 << 10;
        /// Viewport can host multiple imgui windows
        const CAN_HOST_OTHER_WINDOWS = 1 << 11;
        /// Platform window is minimized
        const IS_MINIMIZED = 1 << 12;
        /// Platform window is focused
        const IS_FOCUSED = 1 << 13;
    }
}

bitflags! {
    /// Options passed to the windowing library when creating a viewport window
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct WindowFlags: u32 {
        /// Window starts invisible
        const HIDDEN = 1 << 0;
        /// Window does not show up in the task bar / task switcher
        const SKIP_TASKBAR = 1 << 1;
        /// Window has no title bar or borders
        const BORDERLESS = 1 << 2;
        /// Window can be resized by the user
        const RESIZABLE = 1 << 3;
        /// Window stays above normal windows
        const ALWAYS_ON_TOP = 1 << 4;
    }
}

/// Translate viewport flags into window-creation options.
///
/// The result always contains [`WindowFlags::HIDDEN`]: the GUI library shows
/// the window itself once its first frame is ready. A decorated viewport is
/// resizable, an undecorated one is borderless and fixed.
pub fn window_flags_for(viewport_flags: ViewportFlags) -> WindowFlags {
    let mut flags = WindowFlags::HIDDEN;
    if viewport_flags.contains(ViewportFlags::NO_TASK_BAR_ICON) {
        flags |= WindowFlags::SKIP_TASKBAR;
    }
    if viewport_flags.contains(ViewportFlags::NO_DECORATION) {
        flags |= WindowFlags::BORDERLESS;
    } else {
        flags |= WindowFlags::RESIZABLE;
    }
    if viewport_flags.contains(ViewportFlags::TOP_MOST) {
        flags |= WindowFlags::ALWAYS_ON_TOP;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_viewport_flags_give_hidden_resizable_window() {
        assert_eq!(
            window_flags_for(ViewportFlags::empty()),
            WindowFlags::HIDDEN | WindowFlags::RESIZABLE
        );
    }

    #[test]
    fn unrelated_viewport_flags_are_ignored() {
        let flags = ViewportFlags::NO_INPUTS
            | ViewportFlags::NO_FOCUS_ON_CLICK
            | ViewportFlags::NO_RENDERER_CLEAR
            | ViewportFlags::IS_PLATFORM_WINDOW;
        assert_eq!(
            window_flags_for(flags),
            WindowFlags::HIDDEN | WindowFlags::RESIZABLE
        );
    }

    #[test]
    fn all_mapped_flags_combined() {
        let flags = ViewportFlags::NO_TASK_BAR_ICON
            | ViewportFlags::NO_DECORATION
            | ViewportFlags::TOP_MOST;
        assert_eq!(
            window_flags_for(flags),
            WindowFlags::HIDDEN
                | WindowFlags::SKIP_TASKBAR
                | WindowFlags::BORDERLESS
                | WindowFlags::ALWAYS_ON_TOP
        );
    }

    #[test]
    fn raw_imgui_bits_round_trip() {
        // ImGuiViewportFlags_NoDecoration | ImGuiViewportFlags_TopMost
        let raw = (1 << 3) | (1 << 10);
        let flags = ViewportFlags::from_bits_retain(raw);
        assert!(flags.contains(ViewportFlags::NO_DECORATION));
        assert!(flags.contains(ViewportFlags::TOP_MOST));
        assert_eq!(flags.bits(), raw);
    }
}
