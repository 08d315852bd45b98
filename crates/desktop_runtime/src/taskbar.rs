//! Taskbar state derived purely from window lifecycle events.
//!
//! The taskbar never reads the registry. It replays [`WindowLifecycleEvent`]s into a
//! [`TaskbarModel`] and answers clicks with [`WindowRequest`]s on the request bus.

use system_ui::IconName;

use crate::{event_bus::WindowRequest, model::WindowId, registry::WindowLifecycleEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub id: WindowId,
    pub title: &'static str,
    pub icon: IconName,
}

/// Open windows in the order they were opened plus the highlighted entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskbarModel {
    entries: Vec<TaskbarEntry>,
    active: Option<WindowId>,
}

impl TaskbarModel {
    pub fn entries(&self) -> &[TaskbarEntry] {
        &self.entries
    }

    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    pub fn is_active(&self, id: WindowId) -> bool {
        self.active == Some(id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Folds one lifecycle event into the model. Returns `true` when anything changed.
    pub fn apply(&mut self, event: &WindowLifecycleEvent) -> bool {
        let before = (self.entries.len(), self.active);
        match *event {
            WindowLifecycleEvent::Opened { id, title, icon } => {
                if !self.contains(id) {
                    self.entries.push(TaskbarEntry { id, title, icon });
                }
                self.active = Some(id);
            }
            WindowLifecycleEvent::Closed { id } => {
                self.entries.retain(|entry| entry.id != id);
                if self.active == Some(id) {
                    self.active = None;
                }
            }
            WindowLifecycleEvent::Focused { id } => {
                self.active = Some(id);
            }
        }
        before != (self.entries.len(), self.active)
    }
}

/// Request issued by a click on the body of a taskbar entry.
pub fn entry_click_request(id: WindowId) -> WindowRequest {
    WindowRequest::Focus(id)
}

/// Request issued by a click on an entry's close glyph.
pub fn entry_close_request(id: WindowId) -> WindowRequest {
    WindowRequest::Close(id)
}

/// Wall-clock reading shown in the tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockSnapshot {
    pub hour: u32,
    pub minute: u32,
}

impl ClockSnapshot {
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::default()
        }
    }

    /// `HH:MM AM` style, 12-hour.
    pub fn format(self) -> String {
        let hour = match self.hour % 12 {
            0 => 12,
            hour => hour,
        };
        let suffix = if self.hour >= 12 { "PM" } else { "AM" };
        format!("{hour:02}:{:02} {suffix}", self.minute)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        event_bus::{WindowEventBus, WindowEventKind},
        registry::{reduce_registry, RegistryAction, WindowRegistry},
    };

    fn ids(model: &TaskbarModel) -> Vec<WindowId> {
        model.entries().iter().map(|entry| entry.id).collect()
    }

    #[test]
    fn opened_appends_in_open_order_and_becomes_active() {
        let mut model = TaskbarModel::default();
        model.apply(&WindowLifecycleEvent::opened(WindowId::Snake));
        model.apply(&WindowLifecycleEvent::opened(WindowId::About));

        assert_eq!(ids(&model), vec![WindowId::Snake, WindowId::About]);
        assert_eq!(model.active(), Some(WindowId::About));
        assert_eq!(
            model.entries()[0],
            TaskbarEntry {
                id: WindowId::Snake,
                title: "Snake",
                icon: IconName::Snake,
            }
        );
    }

    #[test]
    fn duplicate_opened_does_not_add_a_second_entry() {
        let mut model = TaskbarModel::default();
        model.apply(&WindowLifecycleEvent::opened(WindowId::Chess));
        model.apply(&WindowLifecycleEvent::opened(WindowId::About));

        model.apply(&WindowLifecycleEvent::opened(WindowId::Chess));

        assert_eq!(ids(&model), vec![WindowId::Chess, WindowId::About]);
        assert_eq!(model.active(), Some(WindowId::Chess));
    }

    #[test]
    fn closing_the_active_entry_clears_active() {
        let mut model = TaskbarModel::default();
        model.apply(&WindowLifecycleEvent::opened(WindowId::About));
        model.apply(&WindowLifecycleEvent::opened(WindowId::Essays));

        assert!(model.apply(&WindowLifecycleEvent::Closed {
            id: WindowId::Essays
        }));

        assert_eq!(ids(&model), vec![WindowId::About]);
        assert_eq!(model.active(), None);
    }

    #[test]
    fn closing_an_inactive_entry_keeps_active() {
        let mut model = TaskbarModel::default();
        model.apply(&WindowLifecycleEvent::opened(WindowId::About));
        model.apply(&WindowLifecycleEvent::opened(WindowId::Essays));

        model.apply(&WindowLifecycleEvent::Closed {
            id: WindowId::About,
        });

        assert_eq!(model.active(), Some(WindowId::Essays));
    }

    #[test]
    fn focused_only_moves_the_highlight() {
        let mut model = TaskbarModel::default();
        model.apply(&WindowLifecycleEvent::opened(WindowId::About));
        model.apply(&WindowLifecycleEvent::opened(WindowId::Essays));

        model.apply(&WindowLifecycleEvent::Focused {
            id: WindowId::About,
        });

        assert_eq!(ids(&model), vec![WindowId::About, WindowId::Essays]);
        assert!(model.is_active(WindowId::About));
    }

    #[test]
    fn clicks_map_to_focus_and_close_requests() {
        assert_eq!(
            entry_click_request(WindowId::Sudoku),
            WindowRequest::Focus(WindowId::Sudoku)
        );
        assert_eq!(
            entry_close_request(WindowId::Sudoku),
            WindowRequest::Close(WindowId::Sudoku)
        );
    }

    #[test]
    fn clock_formats_twelve_hour_time() {
        assert_eq!(ClockSnapshot { hour: 0, minute: 5 }.format(), "12:05 AM");
        assert_eq!(ClockSnapshot { hour: 9, minute: 30 }.format(), "09:30 AM");
        assert_eq!(ClockSnapshot { hour: 12, minute: 0 }.format(), "12:00 PM");
        assert_eq!(ClockSnapshot { hour: 23, minute: 59 }.format(), "11:59 PM");
    }

    /// Deterministic linear congruential generator for reproducible interleavings.
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self) -> u64 {
            self.0 = self
                .0
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            self.0 >> 33
        }

        fn pick<T: Copy>(&mut self, items: &[T]) -> T {
            items[(self.next() % items.len() as u64) as usize]
        }
    }

    #[test]
    fn taskbar_mirrors_registry_under_random_interleavings() {
        for seed in 0..32 {
            let mut rng = Lcg(seed);
            let mut registry = WindowRegistry::default();
            let bus = WindowEventBus::new();
            let model = Rc::new(RefCell::new(TaskbarModel::default()));
            let _subs: Vec<_> = [
                WindowEventKind::Open,
                WindowEventKind::Close,
                WindowEventKind::Focus,
            ]
            .into_iter()
            .map(|kind| {
                let model = Rc::clone(&model);
                bus.subscribe(kind, move |event| {
                    model.borrow_mut().apply(event);
                })
            })
            .collect();

            for _ in 0..200 {
                let id = rng.pick(&WindowId::ALL);
                let action = match rng.next() % 3 {
                    0 => RegistryAction::Open(id),
                    1 => RegistryAction::Close(id),
                    _ => RegistryAction::Focus(id),
                };
                if let Some(event) = reduce_registry(&mut registry, action) {
                    bus.publish(&event);
                }

                let model = model.borrow();
                let mut mirrored = ids(&model);
                mirrored.sort();
                assert_eq!(mirrored, registry.open_windows(), "seed {seed}");
                if let Some(active) = model.active() {
                    assert_eq!(registry.frontmost(), Some(active), "seed {seed}");
                }
            }
        }
    }
}
