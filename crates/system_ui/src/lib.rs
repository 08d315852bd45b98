//! Presentation primitives for the retro desktop shell.
//!
//! The crate owns the desktop chrome markup (icon grid, window frame, title bar, taskbar) and a
//! small icon catalog. Primitives are stateless: every interaction is surfaced as a callback so
//! the window manager in `desktop_runtime` stays the only owner of behavior.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer, ResizeHandle,
    Taskbar, TaskbarButton, TaskbarSection, TrayList, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for crates composing the shell primitives.
pub mod prelude {
    pub use crate::{
        DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer, Icon, IconName,
        IconSize, ResizeHandle, Taskbar, TaskbarButton, TaskbarSection, TrayList, WindowBody,
        WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
    };
}
