use super::*;
use desktop_app_contract::AppMountContext;
use leptos::ev::{MouseEvent, PointerEvent};
use system_ui::{
    ResizeHandle, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

use crate::{
    geometry::title_scale,
    host::{is_primary_pointer, pointer_from_pointer_event, try_set_pointer_capture},
};

type ListenerRemover = Box<dyn FnOnce()>;

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let (initial, draggable, resizable, limits) = runtime.config.with_value(|config| {
        let layout = config.layout(window_id);
        (
            layout.initial_geometry(),
            layout.draggable,
            layout.resizable,
            config.limits(),
        )
    });
    let title_bar_height = limits.title_bar_height;

    let geometry = create_rw_signal(initial);
    let minimized = Signal::derive(move || geometry.with(|g| g.minimized));
    let z_index = create_memo(move |_| runtime.registry.with(|r| r.state(window_id).z_index));
    let focused = create_memo(move |_| runtime.registry.with(|r| r.is_frontmost(window_id)));
    // Memo equality drops identical consecutive sizes.
    let content_size = create_memo(move |_| geometry.with(|g| g.content_size(title_bar_height)));
    let scale = create_memo(move |_| {
        geometry.with(|g| title_scale(window_id.title(), g.size.width))
    });

    create_effect(move |_| {
        let viewport = runtime.viewport.get();
        let mut next = geometry.get_untracked();
        if next.fit_to_viewport(viewport, limits) {
            geometry.set(next);
        }
    });

    let gesture_listeners = store_value(Vec::<ListenerRemover>::new());
    let release_listeners = move || {
        let removers = gesture_listeners
            .try_update_value(std::mem::take)
            .unwrap_or_default();
        for remove in removers {
            remove();
        }
    };
    let end_gesture = move || {
        release_listeners();
        let mut next = geometry.get_untracked();
        if next.end_gesture() {
            geometry.set(next);
        }
    };
    let install_gesture_listeners = move || {
        release_listeners();
        let on_move = window_event_listener(ev::pointermove, move |ev| {
            let pointer = pointer_from_pointer_event(&ev);
            let viewport = runtime.viewport.get_untracked();
            let mut next = geometry.get_untracked();
            if next.pointer_move(pointer, viewport, limits) {
                geometry.set(next);
            }
        });
        let on_up = window_event_listener(ev::pointerup, move |_| end_gesture());
        let on_cancel = window_event_listener(ev::pointercancel, move |_| end_gesture());
        gesture_listeners.set_value(vec![
            Box::new(move || on_move.remove()),
            Box::new(move || on_up.remove()),
            Box::new(move || on_cancel.remove()),
        ]);
    };
    on_cleanup(release_listeners);

    let focus = Callback::new(move |_: PointerEvent| runtime.focus(window_id));
    let begin_drag = Callback::new(move |ev: PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        let mut next = geometry.get_untracked();
        if !next.begin_drag(pointer_from_pointer_event(&ev), draggable) {
            return;
        }
        ev.prevent_default();
        try_set_pointer_capture(&ev);
        geometry.set(next);
        install_gesture_listeners();
        runtime.focus(window_id);
    });
    let begin_resize = Callback::new(move |ev: PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        let mut next = geometry.get_untracked();
        if !next.begin_resize(pointer_from_pointer_event(&ev), resizable) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        try_set_pointer_capture(&ev);
        geometry.set(next);
        install_gesture_listeners();
        runtime.focus(window_id);
    });
    let toggle_minimized = Callback::new(move |_: MouseEvent| {
        geometry.update(|g| {
            g.toggle_minimized();
        });
    });
    let close = Callback::new(move |_: MouseEvent| runtime.close(window_id));

    let frame_style = Signal::derive(move || {
        let g = geometry.get();
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            g.position.x,
            g.position.y,
            g.size.width,
            g.rendered_height(title_bar_height),
            z_index.get()
        )
    });

    let content = apps::app_module(window_id).mount(AppMountContext {
        window_id: window_id.token(),
        content_size: content_size.into(),
        close: Callback::new(move |_| runtime.close(window_id)),
    });

    view! {
        <WindowFrame
            style=frame_style
            aria_label=window_id.title().to_string()
            data_window=window_id.token().to_string()
            focused=focused
            minimized=minimized
            on_pointerdown=focus
        >
            <WindowTitleBar
                draggable=draggable
                on_pointerdown=begin_drag
                on_dblclick=Callback::new(move |ev: MouseEvent| {
                    ev.prevent_default();
                    toggle_minimized.call(ev);
                })
            >
                <WindowTitle icon=window_id.icon() text=window_id.title() scale=scale />
                <WindowControls>
                    {move || {
                        if minimized.get() {
                            view! {
                                <WindowControlButton
                                    icon=IconName::WindowRestore
                                    aria_label="Restore window".to_string()
                                    on_pointerdown=focus
                                    on_click=toggle_minimized
                                />
                            }
                            .into_view()
                        } else {
                            view! {
                                <WindowControlButton
                                    icon=IconName::WindowMinimize
                                    aria_label="Minimize window".to_string()
                                    on_pointerdown=focus
                                    on_click=toggle_minimized
                                />
                            }
                            .into_view()
                        }
                    }}
                    <WindowControlButton
                        icon=IconName::Dismiss
                        aria_label="Close window".to_string()
                        on_pointerdown=focus
                        on_click=close
                    />
                </WindowControls>
            </WindowTitleBar>
            <WindowBody hidden=minimized>{content}</WindowBody>
            <Show when=move || resizable && !minimized.get() fallback=|| ()>
                <ResizeHandle on_pointerdown=begin_resize />
            </Show>
        </WindowFrame>
    }
}
