mod common;

use common::{CallLog, MockRegistry, MockWindow, mock_backends};
use dear_viewport::{
    PlatformViewport, PlatformWindow, Viewport, ViewportData, ViewportFlags, ViewportId,
    WindowEvent,
};
use pretty_assertions::assert_eq;

fn viewport(id: u32) -> Viewport {
    Viewport::new(ViewportId(id), [0.0, 0.0], [320.0, 240.0])
}

#[test]
fn create_publishes_correlation_and_native_record() {
    let (_log, mut windows, device) = mock_backends();
    let mut registry = MockRegistry::new();
    let mut vp = viewport(1);

    let key = registry.create(&device, &mut windows, &mut vp).unwrap();

    assert_eq!(vp.platform_user_data(), Some(key));
    assert_eq!(vp.platform_handle() as usize, 0x1001);
    let record = vp.platform_handle_raw() as *const ViewportData;
    assert!(!record.is_null());
    // SAFETY: published by the registry and live until disposal.
    let record = unsafe { &*record };
    assert_eq!(record.window_id, 1);
    assert!(record.window_owned);

    assert!(registry.contains(key));
    assert_eq!(registry.len(), 1);
}

#[test]
fn lookup_finds_adapter_from_viewport_alone() {
    let (_log, mut windows, device) = mock_backends();
    let mut registry = MockRegistry::new();
    let mut first = viewport(1);
    let mut second = viewport(2);

    registry.create(&device, &mut windows, &mut first).unwrap();
    registry.create(&device, &mut windows, &mut second).unwrap();

    assert_eq!(
        registry.lookup(&first).map(|w| w.viewport_id()),
        Some(ViewportId(1))
    );
    assert_eq!(
        registry.lookup(&second).map(|w| w.window().window_id()),
        Some(2)
    );
    assert!(registry.lookup(&viewport(3)).is_none());
}

#[test]
fn keys_are_not_reused() {
    let (_log, mut windows, device) = mock_backends();
    let mut registry = MockRegistry::new();
    let mut vp = viewport(1);

    let first = registry.create(&device, &mut windows, &mut vp).unwrap();
    assert!(registry.dispose(&mut vp));
    let second = registry.create(&device, &mut windows, &mut vp).unwrap();

    assert_ne!(first, second);
    assert!(!registry.contains(first));
}

#[test]
fn update_routes_events_to_correlated_viewport() {
    let (_log, mut windows, device) = mock_backends();
    let mut registry = MockRegistry::new();
    let mut moved = viewport(1);
    let mut still = viewport(2);
    registry.create(&device, &mut windows, &mut moved).unwrap();
    registry.create(&device, &mut windows, &mut still).unwrap();

    registry
        .lookup_mut(&moved)
        .unwrap()
        .window_mut()
        .push_event(WindowEvent::Moved { x: 5, y: 5 });

    assert!(registry.update(&mut moved));
    assert!(registry.update(&mut still));
    assert!(moved.platform_request_move());
    assert!(!still.platform_request_move());

    assert!(!registry.update(&mut viewport(9)));
}

#[test]
fn dispose_releases_then_invalidates_correlation() {
    let (log, mut windows, device) = mock_backends();
    let mut registry = MockRegistry::new();
    let mut vp = viewport(1);
    let key = registry.create(&device, &mut windows, &mut vp).unwrap();
    log.clear();

    assert!(registry.dispose(&mut vp));

    assert_eq!(
        log.calls(),
        vec!["release_swapchain(window=1)", "close_window(window=1)"]
    );
    assert_eq!(vp.platform_user_data(), None);
    assert!(vp.platform_handle_raw().is_null());
    assert!(vp.platform_handle().is_null());
    assert!(!registry.contains(key));
    assert!(registry.is_empty());
}

#[test]
fn double_dispose_is_a_no_op() {
    let (log, mut windows, device) = mock_backends();
    let mut registry = MockRegistry::new();
    let mut vp = viewport(1);
    registry.create(&device, &mut windows, &mut vp).unwrap();

    assert!(registry.dispose(&mut vp));
    assert!(!registry.dispose(&mut vp));

    assert_eq!(log.count("release_swapchain"), 1);
    assert_eq!(log.count("close_window"), 1);
}

#[test]
fn failed_creation_leaves_viewport_untouched() {
    let (_log, mut windows, device) = mock_backends();
    windows.fail = true;
    let mut registry = MockRegistry::new();
    let mut vp = viewport(1).with_flags(ViewportFlags::NO_DECORATION);

    assert!(registry.create(&device, &mut windows, &mut vp).is_err());

    assert_eq!(vp.platform_user_data(), None);
    assert!(vp.platform_handle_raw().is_null());
    assert!(registry.is_empty());
}

#[test]
fn wrapped_main_window_is_tracked_but_not_closed() {
    let log = CallLog::new();
    let mut registry = MockRegistry::new();
    let mut main = Viewport::new(ViewportId(0x11111111), [0.0, 0.0], [1280.0, 720.0])
        .with_flags(ViewportFlags::OWNED_BY_APP);

    let key = registry
        .wrap(&mut main, MockWindow::new(100, [1280, 720], log.clone()))
        .unwrap();

    assert_eq!(main.platform_user_data(), Some(key));
    // SAFETY: published by the registry and live until disposal.
    let record = unsafe { &*(main.platform_handle_raw() as *const ViewportData) };
    assert!(!record.window_owned);
    assert_eq!(record.window_id, 100);

    assert!(registry.dispose(&mut main));
    assert_eq!(log.count("close_window"), 0);
}

#[test]
fn recreating_for_bound_viewport_disposes_previous_window() {
    let (log, mut windows, device) = mock_backends();
    let mut registry = MockRegistry::new();
    let mut vp = viewport(1);

    let first = registry.create(&device, &mut windows, &mut vp).unwrap();
    let second = registry.create(&device, &mut windows, &mut vp).unwrap();

    assert!(!registry.contains(first));
    assert!(registry.contains(second));
    assert_eq!(registry.len(), 1);
    assert_eq!(log.count("close_window(window=1)"), 1);
    assert_eq!(log.count("close_window(window=2)"), 0);
}

#[test]
fn dispose_all_and_drop_release_everything_once() {
    let (log, mut windows, device) = mock_backends();
    let mut registry = MockRegistry::new();
    for id in 1..=3 {
        registry
            .create(&device, &mut windows, &mut viewport(id))
            .unwrap();
    }

    registry.dispose_all();
    assert!(registry.is_empty());
    drop(registry);

    assert_eq!(log.count("release_swapchain"), 3);
    assert_eq!(log.count("close_window"), 3);
}
