//! Per-window event queues fed by the application's event handler

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::mem::discriminant;
use std::rc::Rc;
use std::sync::Weak;

use dear_viewport::WindowEvent;
use winit::event::WindowEvent as WinitEvent;
use winit::window::{Window, WindowId};

/// Identifies one registration of a window with the router.
///
/// The same OS window can be registered again (e.g. the main window wrapped
/// for a second time); only the latest registration may remove the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Registration(u64);

struct Slot {
    registration: Registration,
    // Scale-factor changes need the window to read the new inner size.
    window: Weak<Window>,
    queue: VecDeque<WindowEvent>,
}

#[derive(Default)]
struct RouterState {
    slots: HashMap<WindowId, Slot>,
    next_registration: u64,
}

/// Routes winit window events to the viewport windows they belong to.
///
/// Cloning is cheap; all clones share the same queues. Call
/// [`route`](Self::route) from `ApplicationHandler::window_event` for every
/// event, then let each viewport adapter drain its window on `update`.
///
/// A queue holds at most one event of each kind: a newer resize, move or
/// close replaces the pending one, so windows whose adapter is not updated
/// for a while keep a bounded backlog carrying the latest geometry.
#[derive(Clone, Default)]
pub struct EventRouter {
    state: Rc<RefCell<RouterState>>,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(&self, id: WindowId, window: Weak<Window>) -> Registration {
        let mut state = self.state.borrow_mut();
        state.next_registration += 1;
        let registration = Registration(state.next_registration);
        let previous = state.slots.insert(
            id,
            Slot {
                registration,
                window,
                queue: VecDeque::new(),
            },
        );
        if previous.is_some() {
            tracing::debug!("event router: {:?} registered again", id);
        } else {
            tracing::trace!("event router: registered {:?}", id);
        }
        registration
    }

    /// Remove the slot of `id` if it still belongs to `registration`
    pub(crate) fn unregister(&self, id: WindowId, registration: Registration) {
        let mut state = self.state.borrow_mut();
        if state
            .slots
            .get(&id)
            .is_some_and(|slot| slot.registration == registration)
        {
            state.slots.remove(&id);
            tracing::trace!("event router: unregistered {:?}", id);
        }
    }

    /// Whether events for `id` are being collected
    pub fn is_registered(&self, id: WindowId) -> bool {
        self.state.borrow().slots.contains_key(&id)
    }

    /// Number of events queued for `id`
    pub fn pending(&self, id: WindowId) -> usize {
        self.state
            .borrow()
            .slots
            .get(&id)
            .map_or(0, |slot| slot.queue.len())
    }

    /// Queue `event` for the viewport window `id`.
    ///
    /// Returns `true` when the event was queued. Input events and events for
    /// windows that are not viewport windows are ignored; the application
    /// keeps handling them as usual.
    pub fn route(&self, id: WindowId, event: &WinitEvent) -> bool {
        let mut state = self.state.borrow_mut();
        let Some(slot) = state.slots.get_mut(&id) else {
            return false;
        };

        let translated = match event {
            WinitEvent::Resized(size) => Some(WindowEvent::Resized {
                width: size.width,
                height: size.height,
            }),
            WinitEvent::Moved(pos) => Some(WindowEvent::Moved { x: pos.x, y: pos.y }),
            WinitEvent::CloseRequested => Some(WindowEvent::CloseRequested),
            WinitEvent::ScaleFactorChanged { .. } => slot.window.upgrade().map(|window| {
                let size = window.inner_size();
                WindowEvent::Resized {
                    width: size.width,
                    height: size.height,
                }
            }),
            _ => None,
        };

        match translated {
            Some(event) => {
                let kind = discriminant(&event);
                slot.queue.retain(|queued| discriminant(queued) != kind);
                slot.queue.push_back(event);
                true
            }
            None => false,
        }
    }

    /// Take every event queued for `id`
    pub(crate) fn take_pending(&self, id: WindowId) -> VecDeque<WindowEvent> {
        self.state
            .borrow_mut()
            .slots
            .get_mut(&id)
            .map(|slot| std::mem::take(&mut slot.queue))
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for EventRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRouter")
            .field("windows", &self.state.borrow().slots.len())
            .finish()
    }
}
