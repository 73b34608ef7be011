//! Several viewport windows driven by winit + wgpu
//!
//! Run with:
//! ```bash
//! cargo run -p dear-viewport-demos --bin multi_window
//! ```
//!
//! What this demo shows:
//! - The main window is wrapped as the main viewport (tracked, never closed
//!   by the shim)
//! - Two secondary viewports get their own hidden OS window and swapchain
//! - winit events are routed to the viewport windows and forwarded into the
//!   viewports on `update`
//! - Closing a secondary window disposes it; closing the main window
//!   disposes everything and exits

use std::sync::Arc;

use dear_viewport::{
    GraphicsDevice, PixelFormat, PlatformViewport, PlatformWindow, Swapchain, SwapchainConfig,
    Viewport, ViewportFlags, ViewportId, ViewportRegistry, ViewportWindowConfig, logging,
};
use dear_viewport_wgpu::{WgpuDevice, WgpuSwapchain};
use dear_viewport_winit::{EventRouter, WinitWindow, WinitWindowSystem};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

const MAIN_VIEWPORT: ViewportId = ViewportId(0x11111111);

// Presentable formats to try, most preferred first.
const FORMATS: [PixelFormat; 4] = [
    PixelFormat::Bgra8UnormSrgb,
    PixelFormat::Rgba8UnormSrgb,
    PixelFormat::Bgra8Unorm,
    PixelFormat::Rgba8Unorm,
];

type Registry = ViewportRegistry<WinitWindow, WgpuSwapchain>;

struct AppState {
    window: Arc<Window>,
    device: WgpuDevice,
    main_swapchain: WgpuSwapchain,
    router: EventRouter,
    registry: Registry,
    main_viewport: Viewport,
    viewports: Vec<Viewport>,
    config: ViewportWindowConfig,
}

impl AppState {
    fn new(event_loop: &ActiveEventLoop) -> Result<Self, Box<dyn std::error::Error>> {
        let window = Arc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title("dear-viewport: main window")
                    .with_inner_size(LogicalSize::new(960.0, 600.0)),
            )?,
        );

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..wgpu::InstanceDescriptor::new_without_display_handle()
        });
        let device = WgpuDevice::request(instance)?;
        logging::log_renderer_init("wgpu");

        let size = window.inner_size();
        let (format, main_swapchain) = FORMATS
            .iter()
            .find_map(|&format| {
                let description = SwapchainConfig {
                    format,
                    ..Default::default()
                }
                .describe([size.width, size.height]);
                device
                    .create_swapchain(window.clone(), &description)
                    .ok()
                    .map(|swapchain| (format, swapchain))
            })
            .ok_or("no presentable surface format")?;
        tracing::info!("presenting with {:?}", format);

        let router = EventRouter::new();
        let mut registry = Registry::new();
        let mut main_viewport = Viewport::new(
            MAIN_VIEWPORT,
            [0.0, 0.0],
            [size.width as f32, size.height as f32],
        )
        .with_flags(ViewportFlags::OWNED_BY_APP);
        registry.wrap(
            &mut main_viewport,
            WinitWindow::from_window(window.clone(), &router),
        )?;
        logging::log_platform_init("winit");

        Ok(Self {
            window,
            device,
            main_swapchain,
            router,
            registry,
            main_viewport,
            viewports: Vec::new(),
            config: ViewportWindowConfig::default().with_format(format),
        })
    }

    fn spawn_viewports(&mut self, event_loop: &ActiveEventLoop) {
        let specs = [
            (
                ViewportId(0x1001),
                [80.0, 80.0],
                ViewportFlags::NO_DECORATION | ViewportFlags::TOP_MOST,
            ),
            (
                ViewportId(0x1002),
                [420.0, 160.0],
                ViewportFlags::NO_TASK_BAR_ICON,
            ),
        ];

        let mut windows = WinitWindowSystem::new(event_loop, &self.router);
        for (id, pos, flags) in specs {
            let mut viewport = Viewport::new(id, pos, [320.0, 240.0]).with_flags(flags);
            let config = self.config.clone().with_title(format!("viewport {id}"));
            match self
                .registry
                .create_with_config(&self.device, &mut windows, &mut viewport, &config)
            {
                Ok(_) => {
                    // The shim creates windows hidden; showing them is the caller's call.
                    if let Some(window) = self.registry.lookup(&viewport) {
                        window.window().window().set_visible(true);
                    }
                    self.viewports.push(viewport);
                }
                Err(e) => tracing::error!("failed to create viewport {}: {}", id, e),
            }
        }
    }

    /// Forward pending window events into every viewport and act on the requests
    fn update_viewports(&mut self) {
        self.registry.update(&mut self.main_viewport);

        let registry = &mut self.registry;
        self.viewports.retain_mut(|viewport| {
            registry.update(viewport);

            if viewport.platform_request_close() {
                tracing::info!("viewport {} asked to close", viewport.id());
                registry.dispose(viewport);
                return false;
            }
            if viewport.platform_request_resize() {
                if let Some(window) = registry.lookup(viewport) {
                    let [width, height] = window.window().size();
                    viewport.set_size([width as f32, height as f32]);
                }
            }
            if viewport.platform_request_move() {
                if let Some(pos) = registry
                    .lookup(viewport)
                    .and_then(|window| window.window().window().outer_position().ok())
                {
                    viewport.set_pos([pos.x as f32, pos.y as f32]);
                }
            }
            viewport.clear_platform_requests();
            true
        });
    }

    fn render(&mut self) {
        let queue = &self.device.queue;
        let device = &self.device.device;

        clear(device, queue, &mut self.main_swapchain, wgpu::Color {
            r: 0.1,
            g: 0.12,
            b: 0.15,
            a: 1.0,
        });

        for (index, (_, window)) in self.registry.iter_mut().enumerate() {
            if let Some(swapchain) = window.swapchain_mut() {
                let shade = 0.2 + 0.2 * index as f64;
                clear(device, queue, swapchain, wgpu::Color {
                    r: shade,
                    g: 0.3,
                    b: 0.45,
                    a: 1.0,
                });
            }
        }
    }

    fn resize_main(&mut self, width: u32, height: u32) {
        self.main_swapchain.resize(width, height);
        self.main_viewport.set_size([width as f32, height as f32]);
    }

    fn shutdown(&mut self) {
        self.registry.dispose_all();
        self.viewports.clear();
    }
}

fn clear(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    swapchain: &mut WgpuSwapchain,
    color: wgpu::Color,
) {
    let frame = match swapchain.acquire_frame() {
        Ok(Some(frame)) => frame,
        Ok(None) => return,
        Err(e) => {
            tracing::error!("failed to acquire frame: {}", e);
            return;
        }
    };
    let view = frame
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("dear-viewport-demo::clear-encoder"),
    });
    {
        let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("dear-viewport-demo::clear-pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(color),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: swapchain.depth_view().map(|view| {
                wgpu::RenderPassDepthStencilAttachment {
                    view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
    }
    queue.submit(Some(encoder.finish()));
    frame.present();
}

#[derive(Default)]
struct App {
    state: Option<AppState>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        match AppState::new(event_loop) {
            Ok(mut state) => {
                state.spawn_viewports(event_loop);
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(e) => {
                tracing::error!("failed to start: {}", e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        state.router.route(window_id, &event);
        if window_id != state.window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                state.shutdown();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => state.resize_main(size.width, size.height),
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = state.window.inner_size();
                state.resize_main(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                state.update_viewports();
                state.render();
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = self.state.as_mut() {
            state.shutdown();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::default();
    event_loop.run_app(&mut app)?;
    Ok(())
}
