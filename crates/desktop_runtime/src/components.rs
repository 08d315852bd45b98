//! Desktop shell UI composition and interaction surfaces.

mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;

use self::{taskbar::DesktopTaskbar, window::DesktopWindow};

use crate::{apps, model::WindowId, registry::WindowRegistry};
use system_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer, Icon, IconName,
    IconSize,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// Windows that have a mounted component: exactly the open ones.
fn mounted_windows(registry: &WindowRegistry) -> Vec<WindowId> {
    registry.open_windows()
}

#[component]
/// Desktop surface: icons, the window layer, and the taskbar. Boot windows open once mounted.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let (icons, shell_style) = runtime.config.with_value(|config| {
        let icons: Vec<(WindowId, String)> = config
            .desktop_icons()
            .map(|layout| (layout.id, layout.desktop_label.clone()))
            .collect();
        let style = format!(
            "--taskbar-height:{}px;--title-bar-height:{}px;",
            config.taskbar_height, config.title_bar_height
        );
        (icons, style)
    });
    let open_windows = create_memo(move |_| runtime.registry.with(mounted_windows));

    let shell = view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            style=shell_style
        >
            <DesktopBackdrop>
                <DesktopIconGrid>
                    {icons
                        .into_iter()
                        .map(|(id, label)| {
                            view! {
                                <DesktopIconButton
                                    aria_label=format!("Open {label}")
                                    data_window=id.token().to_string()
                                    on_click=Callback::new(move |_| runtime.open(id))
                                    on_dblclick=Callback::new(move |_| runtime.open(id))
                                >
                                    <span>
                                        <Icon icon=id.icon() size=IconSize::Lg />
                                    </span>
                                    <span>{label}</span>
                                </DesktopIconButton>
                            }
                        })
                        .collect_view()}
                </DesktopIconGrid>

                <DesktopWindowLayer>
                    <For each=move || open_windows.get() key=|id| *id let:id>
                        <DesktopWindow window_id=id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>

            <DesktopTaskbar />
        </div>
    };

    // Taskbar listeners are registered by now, so boot opens reach it.
    runtime.boot();
    shell
}
