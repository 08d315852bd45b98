//! In-process publish/subscribe channels between independently rendered shell regions.
//!
//! The desktop surface and the taskbar are siblings with no reference to each other. The
//! registry side publishes [`WindowLifecycleEvent`]s and the taskbar publishes
//! [`WindowRequest`]s back; each direction is an [`EventBus`] instance. Delivery is synchronous
//! and reaches the listeners registered for the event's kind at publish time.

use std::{
    cell::RefCell,
    collections::HashMap,
    fmt,
    hash::Hash,
    rc::{Rc, Weak},
};

use crate::{model::WindowId, registry::WindowLifecycleEvent};

/// An event that can travel over an [`EventBus`].
pub trait BusEvent: 'static {
    /// Discriminant listeners subscribe to.
    type Kind: Copy + Eq + Hash + fmt::Debug + 'static;

    fn kind(&self) -> Self::Kind;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowEventKind {
    Open,
    Close,
    Focus,
}

impl BusEvent for WindowLifecycleEvent {
    type Kind = WindowEventKind;

    fn kind(&self) -> WindowEventKind {
        match self {
            Self::Opened { .. } => WindowEventKind::Open,
            Self::Closed { .. } => WindowEventKind::Close,
            Self::Focused { .. } => WindowEventKind::Focus,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Registry mutations requested by the taskbar.
pub enum WindowRequest {
    Focus(WindowId),
    Close(WindowId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowRequestKind {
    Focus,
    Close,
}

impl BusEvent for WindowRequest {
    type Kind = WindowRequestKind;

    fn kind(&self) -> WindowRequestKind {
        match self {
            Self::Focus(_) => WindowRequestKind::Focus,
            Self::Close(_) => WindowRequestKind::Close,
        }
    }
}

/// Lifecycle notifications flowing from the registry to listeners.
pub type WindowEventBus = EventBus<WindowLifecycleEvent>;
/// Focus/close requests flowing from the taskbar to the registry.
pub type WindowRequestBus = EventBus<WindowRequest>;

type Listener<E> = Rc<dyn Fn(&E)>;

struct BusInner<E: BusEvent> {
    next_listener_id: u64,
    listeners: HashMap<E::Kind, Vec<(u64, Listener<E>)>>,
}

impl<E: BusEvent> BusInner<E> {
    fn remove(&mut self, kind: E::Kind, listener_id: u64) {
        if let Some(entries) = self.listeners.get_mut(&kind) {
            entries.retain(|(id, _)| *id != listener_id);
            if entries.is_empty() {
                self.listeners.remove(&kind);
            }
        }
    }
}

/// Typed synchronous broadcast channel. Clones share the same listener table.
pub struct EventBus<E: BusEvent> {
    inner: Rc<RefCell<BusInner<E>>>,
}

impl<E: BusEvent> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: BusEvent> Default for EventBus<E> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner {
                next_listener_id: 0,
                listeners: HashMap::new(),
            })),
        }
    }
}

impl<E: BusEvent> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        let counts: HashMap<E::Kind, usize> = inner
            .listeners
            .iter()
            .map(|(kind, entries)| (*kind, entries.len()))
            .collect();
        f.debug_struct("EventBus")
            .field("listeners", &counts)
            .finish()
    }
}

impl<E: BusEvent> EventBus<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for events of `kind`.
    ///
    /// The returned [`Subscription`] removes the listener when unsubscribed or dropped.
    pub fn subscribe(&self, kind: E::Kind, listener: impl Fn(&E) + 'static) -> Subscription {
        let listener_id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner
                .listeners
                .entry(kind)
                .or_default()
                .push((id, Rc::new(listener)));
            id
        };

        let weak: Weak<RefCell<BusInner<E>>> = Rc::downgrade(&self.inner);
        Subscription {
            remover: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().remove(kind, listener_id);
                }
            })),
        }
    }

    /// Delivers `event` to every listener registered for its kind and returns how many ran.
    ///
    /// Listeners may subscribe or unsubscribe while being called; those changes apply to the
    /// next publish.
    pub fn publish(&self, event: &E) -> usize {
        let listeners: Vec<Listener<E>> = self
            .inner
            .borrow()
            .listeners
            .get(&event.kind())
            .map(|entries| entries.iter().map(|(_, l)| Rc::clone(l)).collect())
            .unwrap_or_default();

        for listener in &listeners {
            listener(event);
        }
        listeners.len()
    }

    pub fn listener_count(&self, kind: E::Kind) -> usize {
        self.inner
            .borrow()
            .listeners
            .get(&kind)
            .map_or(0, Vec::len)
    }
}

/// Disposer returned by [`EventBus::subscribe`].
#[must_use = "dropping a Subscription unsubscribes the listener immediately"]
pub struct Subscription {
    remover: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Removes the listener. Safe to call after the bus itself is gone.
    pub fn unsubscribe(mut self) {
        self.run_remover();
    }

    fn run_remover(&mut self) {
        if let Some(remover) = self.remover.take() {
            remover();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_remover();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.remover.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<WindowLifecycleEvent>>>, impl Fn(&WindowLifecycleEvent)) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |event: &WindowLifecycleEvent| {
            sink.borrow_mut().push(event.clone())
        })
    }

    #[test]
    fn publish_reaches_only_listeners_of_that_kind() {
        let bus = WindowEventBus::new();
        let (opens, on_open) = recorder();
        let (closes, on_close) = recorder();
        let _open_sub = bus.subscribe(WindowEventKind::Open, on_open);
        let _close_sub = bus.subscribe(WindowEventKind::Close, on_close);

        let delivered = bus.publish(&WindowLifecycleEvent::opened(WindowId::About));

        assert_eq!(delivered, 1);
        assert_eq!(
            *opens.borrow(),
            vec![WindowLifecycleEvent::opened(WindowId::About)]
        );
        assert!(closes.borrow().is_empty());
    }

    #[test]
    fn unsubscribe_stops_delivery_and_releases_the_slot() {
        let bus = WindowEventBus::new();
        let (seen, listener) = recorder();
        let sub = bus.subscribe(WindowEventKind::Focus, listener);
        assert_eq!(bus.listener_count(WindowEventKind::Focus), 1);

        sub.unsubscribe();
        let delivered = bus.publish(&WindowLifecycleEvent::Focused {
            id: WindowId::Chess,
        });

        assert_eq!(delivered, 0);
        assert!(seen.borrow().is_empty());
        assert_eq!(bus.listener_count(WindowEventKind::Focus), 0);
    }

    #[test]
    fn dropping_a_subscription_unsubscribes() {
        let bus = WindowEventBus::new();
        {
            let _sub = bus.subscribe(WindowEventKind::Open, |_| {});
            assert_eq!(bus.listener_count(WindowEventKind::Open), 1);
        }
        assert_eq!(bus.listener_count(WindowEventKind::Open), 0);
    }

    #[test]
    fn publish_without_listeners_is_a_noop() {
        let bus = WindowRequestBus::new();
        assert_eq!(bus.publish(&WindowRequest::Focus(WindowId::Sudoku)), 0);
    }

    #[test]
    fn unsubscribing_after_the_bus_is_gone_is_harmless() {
        let bus = WindowEventBus::new();
        let sub = bus.subscribe(WindowEventKind::Close, |_| {});
        drop(bus);
        sub.unsubscribe();
    }

    #[test]
    fn repeated_mount_cycles_do_not_leak_listeners() {
        let bus = WindowEventBus::new();
        for _ in 0..10 {
            let subs = [
                bus.subscribe(WindowEventKind::Open, |_| {}),
                bus.subscribe(WindowEventKind::Close, |_| {}),
                bus.subscribe(WindowEventKind::Focus, |_| {}),
            ];
            for sub in subs {
                sub.unsubscribe();
            }
        }
        assert_eq!(bus.listener_count(WindowEventKind::Open), 0);
        assert_eq!(bus.listener_count(WindowEventKind::Close), 0);
        assert_eq!(bus.listener_count(WindowEventKind::Focus), 0);
    }

    #[test]
    fn listeners_may_subscribe_during_delivery() {
        let bus = WindowEventBus::new();
        let late_hits = Rc::new(Cell::new(0));
        let late_subs = Rc::new(RefCell::new(Vec::new()));

        let bus_handle = bus.clone();
        let hits = Rc::clone(&late_hits);
        let subs = Rc::clone(&late_subs);
        let _sub = bus.subscribe(WindowEventKind::Open, move |_| {
            let hits = Rc::clone(&hits);
            let sub = bus_handle.subscribe(WindowEventKind::Open, move |_| {
                hits.set(hits.get() + 1);
            });
            subs.borrow_mut().push(sub);
        });

        assert_eq!(bus.publish(&WindowLifecycleEvent::opened(WindowId::About)), 1);
        assert_eq!(late_hits.get(), 0);

        assert_eq!(bus.publish(&WindowLifecycleEvent::opened(WindowId::Essays)), 2);
        assert_eq!(late_hits.get(), 1);
    }

    #[test]
    fn listeners_may_unsubscribe_themselves_during_delivery() {
        let bus = WindowEventBus::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let hits = Rc::new(Cell::new(0));

        let slot_handle = Rc::clone(&slot);
        let counter = Rc::clone(&hits);
        let sub = bus.subscribe(WindowEventKind::Close, move |_| {
            counter.set(counter.get() + 1);
            if let Some(sub) = slot_handle.borrow_mut().take() {
                sub.unsubscribe();
            }
        });
        *slot.borrow_mut() = Some(sub);

        bus.publish(&WindowLifecycleEvent::Closed { id: WindowId::Chess });
        bus.publish(&WindowLifecycleEvent::Closed { id: WindowId::Chess });

        assert_eq!(hits.get(), 1);
        assert_eq!(bus.listener_count(WindowEventKind::Close), 0);
    }
}
