//! Window manager for the retro desktop shell.
//!
//! Window state, stacking, gestures, and taskbar bookkeeping are plain Rust types
//! ([`registry`], [`geometry`], [`taskbar`], [`event_bus`]); [`components`] wires them to the DOM.

pub mod apps;
pub mod components;
pub mod config;
pub mod deep_link;
pub mod event_bus;
pub mod geometry;
pub mod host;
pub mod model;
pub mod registry;
mod runtime_context;
pub mod taskbar;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{ConfigError, DesktopConfig, WindowLayout};
pub use event_bus::{
    BusEvent, EventBus, Subscription, WindowEventBus, WindowEventKind, WindowRequest,
    WindowRequestBus, WindowRequestKind,
};
pub use model::*;
pub use registry::{reduce_registry, RegistryAction, WindowLifecycleEvent, WindowRegistry};
