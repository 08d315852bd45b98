use super::*;

#[component]
/// Desktop wallpaper and backdrop host.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop icon grid.
pub fn DesktopIconGrid(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-desktop-icon-grid", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop icon launcher button.
pub fn DesktopIconButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] data_window: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-desktop-icon-button", layout_class)
            aria-label=aria_label
            data-window=data_window
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Window stack host.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Floating window frame. Pointer-down anywhere inside the frame is reported to the owner.
pub fn WindowFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] data_window: Option<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional, into)] minimized: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-window-frame", layout_class)
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-window=data_window
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-minimized=move || bool_token(minimized.get())
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </section>
    }
}

#[component]
/// Window title bar; the drag handle when `draggable` is set.
pub fn WindowTitleBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] draggable: bool,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-titlebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            data-ui-draggable=bool_token(draggable)
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Title text with an icon. `scale` shrinks the text instead of truncating it.
pub fn WindowTitle(
    icon: IconName,
    #[prop(into)] text: String,
    #[prop(into)] scale: MaybeSignal<f64>,
) -> impl IntoView {
    view! {
        <div class="ui-window-title" data-ui-primitive="true" data-ui-kind="window-title">
            <span class="ui-window-title-icon" aria-hidden="true">
                <Icon icon=icon size=IconSize::Sm />
            </span>
            <span
                class="ui-window-title-text"
                style=move || {
                    format!(
                        "display:inline-block;white-space:nowrap;transform:scale({:.3});transform-origin:left center;",
                        scale.get()
                    )
                }
            >
                {text}
            </span>
        </div>
    }
}

#[component]
/// Title bar control group.
pub fn WindowControls(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-controls" data-ui-primitive="true" data-ui-kind="window-controls">
            {children()}
        </div>
    }
}

#[component]
/// Title bar control button.
///
/// Pointer-down stops at the button so a control never starts a title bar drag; `on_pointerdown`
/// runs first so the owning window can still take focus.
pub fn WindowControlButton(
    icon: IconName,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-window-control"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-control"
            on:pointerdown=move |ev: PointerEvent| {
                ev.stop_propagation();
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon=icon size=IconSize::Xs />
        </button>
    }
}

#[component]
/// Window content host. Hidden content stays mounted so embedded app state survives.
pub fn WindowBody(
    #[prop(optional, into)] hidden: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-window-body"
            data-ui-primitive="true"
            data-ui-kind="window-body"
            aria-hidden=move || bool_token(hidden.get())
            style=move || if hidden.get() { "display:none;" } else { "" }
        >
            {children()}
        </div>
    }
}

#[component]
/// Corner resize handle.
pub fn ResizeHandle(#[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>) -> impl IntoView {
    view! {
        <div
            class="ui-resize-handle"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-ui-slot="south-east"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        ></div>
    }
}

#[component]
/// Taskbar root.
pub fn Taskbar(
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class="ui-taskbar"
            role="toolbar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Taskbar section.
pub fn TaskbarSection(
    ui_slot: &'static str,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-taskbar-section"
            role="group"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Taskbar entry. When `on_close` is set a close glyph is rendered whose click never reaches
/// the entry's own `on_click`.
pub fn TaskbarButton(
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] data_window: Option<String>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_close: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let close_glyph = on_close.map(|on_close| {
        view! {
            <span
                class="ui-taskbar-button-close"
                role="button"
                aria-label="Close window"
                data-ui-slot="taskbar-close"
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    on_close.call(ev);
                }
            >
                <Icon icon=IconName::Dismiss size=IconSize::Xs />
            </span>
        }
    });

    view! {
        <div
            class="ui-taskbar-button"
            role="button"
            tabindex="0"
            aria-label=move || aria_label.get()
            aria-pressed=move || bool_token(active.get())
            data-window=data_window
            data-ui-primitive="true"
            data-ui-kind="taskbar-button"
            data-ui-active=move || bool_token(active.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
            {close_glyph}
        </div>
    }
}

#[component]
/// System tray list.
pub fn TrayList(children: Children) -> impl IntoView {
    view! {
        <div class="ui-tray-list" data-ui-primitive="true" data-ui-kind="tray-list">
            {children()}
        </div>
    }
}
