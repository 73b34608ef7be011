//! Recording collaborators shared by the integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::c_void;
use std::rc::Rc;

use dear_viewport::{
    GraphicsDevice, PlatformWindow, Swapchain, SwapchainDescription, ViewportRegistry,
    WindowDescriptor, WindowEvent, WindowSystem,
};

/// Ordered log of every collaborator call
#[derive(Debug, Default, Clone)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

#[derive(Debug, thiserror::Error)]
#[error("mock failure: {0}")]
pub struct MockError(pub String);

/// Surface source handed to the mock device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockSurface {
    pub window_id: u32,
}

pub struct MockWindow {
    id: u32,
    size: [u32; 2],
    events: VecDeque<WindowEvent>,
    log: CallLog,
}

impl MockWindow {
    pub fn new(id: u32, size: [u32; 2], log: CallLog) -> Self {
        Self {
            id,
            size,
            events: VecDeque::new(),
            log,
        }
    }

    /// Queue an OS event, delivered on the next pump
    pub fn push_event(&mut self, event: WindowEvent) {
        if let WindowEvent::Resized { width, height } = event {
            self.size = [width, height];
        }
        self.events.push_back(event);
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }
}

impl PlatformWindow for MockWindow {
    type SurfaceSource = MockSurface;
    type Error = MockError;

    fn surface_source(&self) -> MockSurface {
        MockSurface { window_id: self.id }
    }

    fn size(&self) -> [u32; 2] {
        self.size
    }

    fn native_handle(&self) -> *mut c_void {
        (0x1000 + self.id as usize) as *mut c_void
    }

    fn window_id(&self) -> u32 {
        self.id
    }

    fn pump_events(&mut self, sink: &mut dyn FnMut(WindowEvent)) {
        self.log.record(format!("pump_events(window={})", self.id));
        while let Some(event) = self.events.pop_front() {
            sink(event);
        }
    }

    fn close(&mut self) {
        self.log.record(format!("close_window(window={})", self.id));
    }
}

pub struct MockWindowSystem {
    log: CallLog,
    next_id: u32,
    pub fail: bool,
    pub created: Vec<WindowDescriptor>,
}

impl MockWindowSystem {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            next_id: 1,
            fail: false,
            created: Vec::new(),
        }
    }

    pub fn last_descriptor(&self) -> &WindowDescriptor {
        self.created.last().expect("no window created")
    }
}

impl WindowSystem for MockWindowSystem {
    type Window = MockWindow;

    fn create_window(&mut self, descriptor: &WindowDescriptor) -> Result<MockWindow, MockError> {
        if self.fail {
            return Err(MockError("no display".into()));
        }
        let id = self.next_id;
        self.next_id += 1;
        self.log.record(format!(
            "create_window(window={}, {}x{})",
            id, descriptor.size[0], descriptor.size[1]
        ));
        self.created.push(descriptor.clone());
        Ok(MockWindow::new(id, descriptor.size, self.log.clone()))
    }
}

pub struct MockSwapchain {
    window_id: u32,
    size: [u32; 2],
    log: CallLog,
}

impl MockSwapchain {
    pub fn size(&self) -> [u32; 2] {
        self.size
    }
}

impl Swapchain for MockSwapchain {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = [width, height];
        self.log.record(format!(
            "resize_swapchain(window={}, {}x{})",
            self.window_id, width, height
        ));
    }

    fn release(self) {
        self.log
            .record(format!("release_swapchain(window={})", self.window_id));
    }
}

pub struct MockDevice {
    log: CallLog,
    pub fail: bool,
    pub descriptions: RefCell<Vec<SwapchainDescription>>,
}

impl MockDevice {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            fail: false,
            descriptions: RefCell::new(Vec::new()),
        }
    }
}

impl GraphicsDevice<MockSurface> for MockDevice {
    type Swapchain = MockSwapchain;
    type Error = MockError;

    fn create_swapchain(
        &self,
        source: MockSurface,
        description: &SwapchainDescription,
    ) -> Result<MockSwapchain, MockError> {
        if self.fail {
            return Err(MockError("unsupported surface".into()));
        }
        self.log.record(format!(
            "create_swapchain(window={}, {}x{})",
            source.window_id, description.width, description.height
        ));
        self.descriptions.borrow_mut().push(*description);
        Ok(MockSwapchain {
            window_id: source.window_id,
            size: [description.width, description.height],
            log: self.log.clone(),
        })
    }
}

pub type MockRegistry = ViewportRegistry<MockWindow, MockSwapchain>;

/// Log, windowing system and device sharing one log
pub fn mock_backends() -> (CallLog, MockWindowSystem, MockDevice) {
    let log = CallLog::new();
    let windows = MockWindowSystem::new(log.clone());
    let device = MockDevice::new(log.clone());
    (log, windows, device)
}
