//! Native platform record shared with foreign code
//!
//! GUI libraries with a C core read per-viewport platform data straight out
//! of memory, so the record has a fixed `repr(C)` layout and lives in a block
//! that is allocated and freed explicitly.

use std::alloc::{self, Layout};
use std::ffi::c_void;
use std::ptr::NonNull;

use crate::error::{ViewportError, ViewportResult};

/// Per-viewport platform record, laid out for direct reads from C
#[repr(C)]
#[derive(Debug)]
pub struct ViewportData {
    /// OS window handle
    pub window: *mut c_void,
    /// GL context; always null, the swapchain owns presentation
    pub gl_context: *mut c_void,
    /// Windowing library id of the window
    pub window_id: u32,
    /// Set to false for windows the shim wraps but did not create
    pub window_owned: bool,
}

/// Owner of one explicitly allocated [`ViewportData`] block.
///
/// The pointer handed out by [`as_ptr`](Self::as_ptr) stays valid until
/// [`free`](Self::free) runs. Dropping the owner frees the block as well.
#[derive(Debug)]
pub struct NativeViewportData {
    block: Option<NonNull<ViewportData>>,
}

impl NativeViewportData {
    const LAYOUT: Layout = Layout::new::<ViewportData>();

    /// Allocate and fill a record
    pub fn alloc(window: *mut c_void, window_id: u32, window_owned: bool) -> ViewportResult<Self> {
        // SAFETY: the layout has a non-zero size.
        let raw = unsafe { alloc::alloc_zeroed(Self::LAYOUT) } as *mut ViewportData;
        let block =
            NonNull::new(raw).ok_or_else(|| ViewportError::native_allocation(Self::LAYOUT.size()))?;
        // SAFETY: freshly allocated, correctly sized and aligned for ViewportData.
        unsafe {
            block.as_ptr().write(ViewportData {
                window,
                gl_context: std::ptr::null_mut(),
                window_id,
                window_owned,
            });
        }
        vp_trace!("allocated native viewport data at {:p}", block.as_ptr());
        Ok(Self { block: Some(block) })
    }

    /// Raw pointer to the record, null once freed
    pub fn as_ptr(&self) -> *mut ViewportData {
        self.block
            .map_or(std::ptr::null_mut(), |block| block.as_ptr())
    }

    /// Read access to the record, `None` once freed
    pub fn get(&self) -> Option<&ViewportData> {
        // SAFETY: the block is live while it is stored in `self.block`.
        self.block.map(|block| unsafe { &*block.as_ptr() })
    }

    /// Whether the block has been freed
    pub fn is_freed(&self) -> bool {
        self.block.is_none()
    }

    /// Release the block. Later calls do nothing.
    pub fn free(&mut self) {
        if let Some(block) = self.block.take() {
            vp_trace!("freeing native viewport data at {:p}", block.as_ptr());
            // SAFETY: allocated in `alloc` with the same layout, and taken out
            // of `self.block` so it cannot be freed twice.
            unsafe { alloc::dealloc(block.as_ptr() as *mut u8, Self::LAYOUT) };
        }
    }
}

impl Drop for NativeViewportData {
    fn drop(&mut self) {
        self.free();
    }
}
