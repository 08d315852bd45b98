use super::*;
use leptos::ev::MouseEvent;
use system_ui::{Taskbar, TaskbarButton, TaskbarSection, TrayList};

use crate::{
    event_bus::{Subscription, WindowEventKind},
    taskbar::{entry_click_request, entry_close_request, ClockSnapshot, TaskbarModel},
};

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let model = create_rw_signal(TaskbarModel::default());
    let clock = create_rw_signal(ClockSnapshot::now());

    let subscriptions: Vec<Subscription> = [
        WindowEventKind::Open,
        WindowEventKind::Close,
        WindowEventKind::Focus,
    ]
    .into_iter()
    .map(|kind| {
        runtime.subscribe_lifecycle(kind, move |event| {
            let mut next = model.get_untracked();
            if next.apply(event) {
                model.set(next);
            }
        })
    })
    .collect();
    on_cleanup(move || {
        for subscription in subscriptions {
            subscription.unsubscribe();
        }
    });

    if let Ok(interval) = set_interval_with_handle(
        move || clock.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <Taskbar aria_label="Taskbar">
            <TaskbarSection ui_slot="brand">
                <span class="taskbar-brand" aria-hidden="true">
                    <Icon icon=IconName::Launcher size=IconSize::Sm />
                </span>
            </TaskbarSection>
            <TaskbarSection ui_slot="running" aria_label="Open windows">
                <For
                    each=move || model.with(|m| m.entries().to_vec())
                    key=|entry| entry.id
                    let:entry
                >
                    {{
                        let id = entry.id;
                        view! {
                            <TaskbarButton
                                aria_label=entry.title.to_string()
                                data_window=id.token().to_string()
                                active=Signal::derive(move || model.with(|m| m.is_active(id)))
                                on_click=Callback::new(move |_: MouseEvent| {
                                    runtime.request(entry_click_request(id));
                                })
                                on_close=Callback::new(move |_: MouseEvent| {
                                    runtime.request(entry_close_request(id));
                                })
                            >
                                <Icon icon=entry.icon size=IconSize::Sm />
                                <span class="taskbar-button-title">{entry.title}</span>
                            </TaskbarButton>
                        }
                    }}
                </For>
            </TaskbarSection>
            <TaskbarSection ui_slot="tray" aria_label="System tray">
                <TrayList>
                    <span class="taskbar-clock" role="timer" aria-live="off">
                        {move || clock.get().format()}
                    </span>
                </TrayList>
            </TaskbarSection>
        </Taskbar>
    }
}
