mod common;

use common::mock_backends;
use dear_viewport::{
    Viewport, ViewportFlags, ViewportId, ViewportWindow, WindowFlags, window_flags_for,
};
use pretty_assertions::assert_eq;

#[test]
fn no_decoration_gives_borderless_fixed_window() {
    let flags = window_flags_for(ViewportFlags::NO_DECORATION);
    assert!(flags.contains(WindowFlags::BORDERLESS));
    assert!(!flags.contains(WindowFlags::RESIZABLE));
    assert!(!flags.contains(WindowFlags::SKIP_TASKBAR));
}

#[test]
fn decorated_viewport_is_resizable() {
    let flags = window_flags_for(ViewportFlags::empty());
    assert!(flags.contains(WindowFlags::RESIZABLE));
    assert!(!flags.contains(WindowFlags::BORDERLESS));
}

#[test]
fn top_most_always_maps_to_always_on_top() {
    let others = [
        ViewportFlags::empty(),
        ViewportFlags::NO_DECORATION,
        ViewportFlags::NO_TASK_BAR_ICON,
        ViewportFlags::NO_DECORATION | ViewportFlags::NO_TASK_BAR_ICON,
        ViewportFlags::NO_INPUTS | ViewportFlags::NO_FOCUS_ON_APPEARING,
    ];
    for other in others {
        let flags = window_flags_for(other | ViewportFlags::TOP_MOST);
        assert!(
            flags.contains(WindowFlags::ALWAYS_ON_TOP),
            "missing ALWAYS_ON_TOP for {other:?}"
        );
    }
    assert!(!window_flags_for(ViewportFlags::empty()).contains(WindowFlags::ALWAYS_ON_TOP));
}

#[test]
fn no_task_bar_icon_skips_taskbar() {
    let flags = window_flags_for(ViewportFlags::NO_TASK_BAR_ICON);
    assert!(flags.contains(WindowFlags::SKIP_TASKBAR));
    assert!(flags.contains(WindowFlags::RESIZABLE));
}

#[test]
fn windows_always_start_hidden() {
    for bits in 0..(1u32 << 14) {
        let flags = window_flags_for(ViewportFlags::from_bits_retain(bits));
        assert!(flags.contains(WindowFlags::HIDDEN), "bits {bits:#x}");
    }
}

#[test]
fn created_window_uses_mapped_flags_and_geometry() {
    let (_log, mut windows, device) = mock_backends();
    let viewport = Viewport::new(ViewportId(3), [120.7, -40.2], [300.9, 200.0])
        .with_flags(ViewportFlags::NO_DECORATION | ViewportFlags::TOP_MOST);

    let _window = ViewportWindow::new(&device, &mut windows, &viewport).unwrap();

    let descriptor = windows.last_descriptor();
    assert_eq!(descriptor.title, "No Title Yet");
    assert_eq!(descriptor.position, [120, -40]);
    assert_eq!(descriptor.size, [300, 200]);
    assert_eq!(
        descriptor.flags,
        WindowFlags::HIDDEN | WindowFlags::BORDERLESS | WindowFlags::ALWAYS_ON_TOP
    );
    assert!(!descriptor.own_window);
}
