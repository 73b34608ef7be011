//! Viewport descriptors as seen by the window shim

use std::ffi::c_void;

use crate::flags::ViewportFlags;
use crate::registry::WindowKey;

/// Identifier the GUI library assigns to a viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViewportId(pub u32);

impl std::fmt::Display for ViewportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// The part of a GUI-library viewport the window shim reads and writes.
///
/// The GUI library owns the viewport. The shim reads its geometry and flags
/// at construction, raises the `platform_request_*` flags when the OS reports
/// a resize, move or close, and parks its correlation key and native record
/// pointer in the platform slots.
pub trait PlatformViewport {
    /// Viewport identifier
    fn id(&self) -> ViewportId;

    /// Position of the client area in screen coordinates
    fn pos(&self) -> [f32; 2];

    /// Size of the client area
    fn size(&self) -> [f32; 2];

    /// Viewport flags
    fn flags(&self) -> ViewportFlags;

    /// Signal that the OS moved the window
    fn set_platform_request_move(&mut self, request: bool);

    /// Signal that the OS resized the window
    fn set_platform_request_resize(&mut self, request: bool);

    /// Signal that the user asked the OS to close the window
    fn set_platform_request_close(&mut self, request: bool);

    /// Correlation key of the adapter bound to this viewport, if any
    fn platform_user_data(&self) -> Option<WindowKey>;

    /// Store or clear the correlation key
    fn set_platform_user_data(&mut self, key: Option<WindowKey>);

    /// Native platform record readable by foreign code
    fn platform_handle_raw(&self) -> *mut c_void;

    /// Store or clear the native platform record pointer
    fn set_platform_handle_raw(&mut self, data: *mut c_void);

    /// OS window handle
    fn platform_handle(&self) -> *mut c_void;

    /// Store or clear the OS window handle
    fn set_platform_handle(&mut self, handle: *mut c_void);
}

/// A plain viewport descriptor.
///
/// Mirrors the fields of Dear ImGui's `ImGuiViewport` that the platform layer
/// touches. GUI bindings with their own viewport type can implement
/// [`PlatformViewport`] instead.
#[derive(Debug)]
pub struct Viewport {
    id: ViewportId,
    pos: [f32; 2],
    size: [f32; 2],
    flags: ViewportFlags,
    platform_request_move: bool,
    platform_request_resize: bool,
    platform_request_close: bool,
    platform_user_data: Option<WindowKey>,
    platform_handle: *mut c_void,
    platform_handle_raw: *mut c_void,
}

impl Viewport {
    /// Create a viewport descriptor with no flags set
    pub fn new(id: ViewportId, pos: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            id,
            pos,
            size,
            flags: ViewportFlags::empty(),
            platform_request_move: false,
            platform_request_resize: false,
            platform_request_close: false,
            platform_user_data: None,
            platform_handle: std::ptr::null_mut(),
            platform_handle_raw: std::ptr::null_mut(),
        }
    }

    /// Builder-style flags setter
    pub fn with_flags(mut self, flags: ViewportFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn set_pos(&mut self, pos: [f32; 2]) {
        self.pos = pos;
    }

    pub fn set_size(&mut self, size: [f32; 2]) {
        self.size = size;
    }

    pub fn set_flags(&mut self, flags: ViewportFlags) {
        self.flags = flags;
    }

    /// Whether the OS moved the window since the flag was last cleared
    pub fn platform_request_move(&self) -> bool {
        self.platform_request_move
    }

    /// Whether the OS resized the window since the flag was last cleared
    pub fn platform_request_resize(&self) -> bool {
        self.platform_request_resize
    }

    /// Whether the user asked to close the window
    pub fn platform_request_close(&self) -> bool {
        self.platform_request_close
    }

    /// Clear all pending platform requests, as the GUI library does after
    /// consuming them at the start of a frame.
    pub fn clear_platform_requests(&mut self) {
        self.platform_request_move = false;
        self.platform_request_resize = false;
        self.platform_request_close = false;
    }
}

impl PlatformViewport for Viewport {
    fn id(&self) -> ViewportId {
        self.id
    }

    fn pos(&self) -> [f32; 2] {
        self.pos
    }

    fn size(&self) -> [f32; 2] {
        self.size
    }

    fn flags(&self) -> ViewportFlags {
        self.flags
    }

    fn set_platform_request_move(&mut self, request: bool) {
        self.platform_request_move = request;
    }

    fn set_platform_request_resize(&mut self, request: bool) {
        self.platform_request_resize = request;
    }

    fn set_platform_request_close(&mut self, request: bool) {
        self.platform_request_close = request;
    }

    fn platform_user_data(&self) -> Option<WindowKey> {
        self.platform_user_data
    }

    fn set_platform_user_data(&mut self, key: Option<WindowKey>) {
        self.platform_user_data = key;
    }

    fn platform_handle_raw(&self) -> *mut c_void {
        self.platform_handle_raw
    }

    fn set_platform_handle_raw(&mut self, data: *mut c_void) {
        self.platform_handle_raw = data;
    }

    fn platform_handle(&self) -> *mut c_void {
        self.platform_handle
    }

    fn set_platform_handle(&mut self, handle: *mut c_void) {
        self.platform_handle = handle;
    }
}
