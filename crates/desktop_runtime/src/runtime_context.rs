//! Runtime provider and context wiring for the window manager.
//!
//! This module owns the registry signal, the two event buses, and the dispatch callback that
//! applies [`RegistryAction`]s. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    config::DesktopConfig,
    deep_link::{boot_sequence, current_deep_link},
    event_bus::{
        Subscription, WindowEventBus, WindowEventKind, WindowRequest, WindowRequestBus,
        WindowRequestKind,
    },
    host,
    model::{Viewport, WindowId},
    registry::{reduce_registry, RegistryAction, WindowLifecycleEvent, WindowRegistry},
};

#[derive(Clone, Copy)]
/// Leptos context for reading window state and dispatching [`RegistryAction`] values.
pub struct DesktopRuntimeContext {
    /// Desktop settings and per-window layout defaults.
    pub config: StoredValue<DesktopConfig>,
    /// Authoritative window registry.
    pub registry: RwSignal<WindowRegistry>,
    /// Desktop area above the taskbar, tracked across browser resizes.
    pub viewport: RwSignal<Viewport>,
    /// Lifecycle notifications published after every registry transition.
    pub events: StoredValue<WindowEventBus>,
    /// Focus/close requests addressed to the registry.
    pub requests: StoredValue<WindowRequestBus>,
    /// Registry dispatch callback.
    pub dispatch: Callback<RegistryAction>,
    booted: StoredValue<bool>,
}

impl DesktopRuntimeContext {
    /// Dispatches a registry action through the runtime context callback.
    pub fn dispatch_action(&self, action: RegistryAction) {
        self.dispatch.call(action);
    }

    pub fn open(&self, id: WindowId) {
        self.dispatch_action(RegistryAction::Open(id));
    }

    pub fn close(&self, id: WindowId) {
        self.dispatch_action(RegistryAction::Close(id));
    }

    /// Raises `id` unless it is already frontmost.
    pub fn focus(&self, id: WindowId) {
        if !self.registry.with_untracked(|registry| registry.is_frontmost(id)) {
            self.dispatch_action(RegistryAction::Focus(id));
        }
    }

    /// Publishes a request on the request bus; the provider routes it to the registry.
    pub fn request(&self, request: WindowRequest) {
        self.requests.with_value(|bus| bus.publish(&request));
    }

    pub fn subscribe_lifecycle(
        &self,
        kind: WindowEventKind,
        listener: impl Fn(&WindowLifecycleEvent) + 'static,
    ) -> Subscription {
        self.events.with_value(|bus| bus.subscribe(kind, listener))
    }

    /// Opens the configured boot windows followed by any `?open=` deep-link windows.
    ///
    /// Runs once per provider; later calls are ignored.
    pub fn boot(&self) {
        if self.booted.get_value() {
            return;
        }
        self.booted.set_value(true);

        let deep_link = current_deep_link();
        for token in &deep_link.rejected {
            logging::warn!("deep link names unknown window `{token}`, skipping");
        }
        let sequence = self
            .config
            .with_value(|config| boot_sequence(&config.boot_open, &deep_link));
        for id in sequence {
            logging::log!("boot: opening `{id}`");
            self.open(id);
        }
    }
}

fn route_requests(runtime: DesktopRuntimeContext) -> Vec<Subscription> {
    runtime.requests.with_value(|bus| {
        vec![
            bus.subscribe(WindowRequestKind::Focus, move |request| {
                if let WindowRequest::Focus(id) = *request {
                    runtime.focus(id);
                }
            }),
            bus.subscribe(WindowRequestKind::Close, move |request| {
                if let WindowRequest::Close(id) = *request {
                    runtime.close(id);
                }
            }),
        ]
    })
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let config = DesktopConfig::load();
    let taskbar_height = config.taskbar_height;
    let registry = create_rw_signal(WindowRegistry::new(config.base_z_index));
    let viewport = create_rw_signal(host::desktop_viewport(taskbar_height));
    let config = store_value(config);
    let events = store_value(WindowEventBus::new());
    let requests = store_value(WindowRequestBus::new());

    let dispatch = Callback::new(move |action: RegistryAction| {
        let mut next = registry.get_untracked();
        let Some(event) = reduce_registry(&mut next, action) else {
            return;
        };
        registry.set(next);
        events.with_value(|bus| bus.publish(&event));
    });

    let runtime = DesktopRuntimeContext {
        config,
        registry,
        viewport,
        events,
        requests,
        dispatch,
        booted: store_value(false),
    };

    provide_context(runtime);

    let request_routes = route_requests(runtime);
    on_cleanup(move || drop(request_routes));

    let resize_listener = window_event_listener(ev::resize, move |_| {
        viewport.set(host::desktop_viewport(taskbar_height));
    });
    on_cleanup(move || resize_listener.remove());

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use pretty_assertions::assert_eq;

    use super::*;

    /// Renders a `DesktopProvider` on the native target and hands back its context.
    fn mount_provider() -> DesktopRuntimeContext {
        let captured = Rc::new(Cell::new(None));
        let sink = Rc::clone(&captured);
        let props = DesktopProviderProps::builder()
            .children(Box::new(move || {
                sink.set(Some(use_desktop_runtime()));
                Fragment::new(Vec::new())
            }))
            .build();
        let _ = DesktopProvider(props).into_view();
        captured.get().expect("provider renders its children")
    }

    fn count_events(
        runtime: &DesktopRuntimeContext,
        kind: WindowEventKind,
    ) -> (Rc<Cell<usize>>, Subscription) {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let sub = runtime.subscribe_lifecycle(kind, move |_| counter.set(counter.get() + 1));
        (hits, sub)
    }

    #[test]
    fn open_listeners_see_the_registry_already_updated() {
        let owner = create_runtime();
        let runtime = mount_provider();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = runtime.subscribe_lifecycle(WindowEventKind::Open, move |event| {
            if let WindowLifecycleEvent::Opened { id, .. } = *event {
                let open = runtime.registry.with_untracked(|r| r.is_open(id));
                sink.borrow_mut().push((id, open));
            }
        });

        runtime.open(WindowId::Chess);
        runtime.request(WindowRequest::Close(WindowId::Chess));
        runtime.open(WindowId::Chess);

        assert_eq!(
            *seen.borrow(),
            vec![(WindowId::Chess, true), (WindowId::Chess, true)]
        );
        assert_eq!(
            runtime.registry.with_untracked(WindowRegistry::open_windows),
            vec![WindowId::Chess]
        );
        owner.dispose();
    }

    #[test]
    fn close_request_reaches_the_registry_once() {
        let owner = create_runtime();
        let runtime = mount_provider();
        runtime.open(WindowId::Chess);
        let (closed, _sub) = count_events(&runtime, WindowEventKind::Close);

        runtime.request(WindowRequest::Close(WindowId::Chess));
        assert!(!runtime.registry.with_untracked(|r| r.is_open(WindowId::Chess)));
        assert_eq!(closed.get(), 1);

        runtime.request(WindowRequest::Close(WindowId::Chess));
        assert_eq!(closed.get(), 1);
        owner.dispose();
    }

    #[test]
    fn focus_request_on_the_frontmost_window_is_silent() {
        let owner = create_runtime();
        let runtime = mount_provider();
        runtime.open(WindowId::About);
        runtime.open(WindowId::Essays);
        let (focused, _sub) = count_events(&runtime, WindowEventKind::Focus);

        runtime.request(WindowRequest::Focus(WindowId::Essays));
        assert_eq!(focused.get(), 0);

        runtime.request(WindowRequest::Focus(WindowId::About));
        assert_eq!(focused.get(), 1);
        assert_eq!(
            runtime.registry.with_untracked(WindowRegistry::frontmost),
            Some(WindowId::About)
        );
        owner.dispose();
    }

    #[test]
    fn focusing_a_background_window_raises_it_before_its_controls_act() {
        let owner = create_runtime();
        let runtime = mount_provider();
        runtime.open(WindowId::Sudoku);
        runtime.open(WindowId::Snake);
        let (focused, _focus_sub) = count_events(&runtime, WindowEventKind::Focus);
        let (closed, _close_sub) = count_events(&runtime, WindowEventKind::Close);

        // Pointer-down on a control focuses, the click then closes.
        runtime.focus(WindowId::Sudoku);
        assert_eq!(
            runtime.registry.with_untracked(WindowRegistry::frontmost),
            Some(WindowId::Sudoku)
        );
        runtime.close(WindowId::Sudoku);

        assert_eq!((focused.get(), closed.get()), (1, 1));
        assert_eq!(
            runtime.registry.with_untracked(WindowRegistry::frontmost),
            Some(WindowId::Snake)
        );
        owner.dispose();
    }
}
