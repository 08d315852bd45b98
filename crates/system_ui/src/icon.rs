//! Pixel-style icon catalog rendered as inline SVG.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by the shell and window descriptors.
pub enum IconName {
    /// "About me" card.
    Person,
    /// Essay reader.
    Document,
    /// Calculator.
    Calculator,
    /// Chess board piece.
    ChessKnight,
    /// Snake game.
    Snake,
    /// Sudoku grid.
    Grid,
    /// Solitaire cards.
    Cards,
    /// Breakout bricks.
    Bricks,
    /// Now-playing widget.
    Music,
    /// Start button glyph.
    Launcher,
    /// Minimize control.
    WindowMinimize,
    /// Restore control (shown while minimized).
    WindowRestore,
    /// Close control.
    Dismiss,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Document => "document",
            Self::Calculator => "calculator",
            Self::ChessKnight => "chess-knight",
            Self::Snake => "snake",
            Self::Grid => "grid",
            Self::Cards => "cards",
            Self::Bricks => "bricks",
            Self::Music => "music",
            Self::Launcher => "launcher",
            Self::WindowMinimize => "window-minimize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    // Shapes are drawn on a 16x16 grid so they stay crisp at integer scales.
    fn svg_body(self) -> &'static str {
        match self {
            Self::Person => {
                r#"<rect x="6" y="2" width="4" height="4"/><rect x="4" y="7" width="8" height="2"/><rect x="3" y="9" width="10" height="5"/>"#
            }
            Self::Document => {
                r#"<path d="M3 1h7l3 3v11H3z" fill="none" stroke="currentColor"/><rect x="5" y="6" width="6" height="1"/><rect x="5" y="8" width="6" height="1"/><rect x="5" y="10" width="4" height="1"/>"#
            }
            Self::Calculator => {
                r#"<rect x="3" y="1" width="10" height="14" fill="none" stroke="currentColor"/><rect x="5" y="3" width="6" height="3"/><rect x="5" y="8" width="2" height="2"/><rect x="9" y="8" width="2" height="2"/><rect x="5" y="11" width="2" height="2"/><rect x="9" y="11" width="2" height="2"/>"#
            }
            Self::ChessKnight => {
                r#"<path d="M5 14h7v-2l-1-1V8l1-2-3-4H7L4 6v2h3l-2 3z"/>"#
            }
            Self::Snake => {
                r#"<rect x="2" y="2" width="8" height="2"/><rect x="8" y="4" width="2" height="4"/><rect x="4" y="8" width="6" height="2"/><rect x="4" y="10" width="2" height="4"/><rect x="6" y="12" width="8" height="2"/><rect x="12" y="2" width="2" height="2"/>"#
            }
            Self::Grid => {
                r#"<path d="M1.5 1.5h13v13h-13zM5.5 1.5v13M10.5 1.5v13M1.5 5.5h13M1.5 10.5h13" fill="none" stroke="currentColor"/>"#
            }
            Self::Cards => {
                r#"<rect x="2" y="3" width="7" height="10" fill="none" stroke="currentColor"/><rect x="7" y="2" width="7" height="10"/>"#
            }
            Self::Bricks => {
                r#"<rect x="1" y="2" width="6" height="2"/><rect x="9" y="2" width="6" height="2"/><rect x="4" y="5" width="8" height="2"/><rect x="7" y="10" width="2" height="2"/><rect x="5" y="13" width="6" height="1"/>"#
            }
            Self::Music => {
                r#"<rect x="6" y="2" width="2" height="9"/><rect x="8" y="2" width="5" height="2"/><rect x="11" y="4" width="2" height="5"/><rect x="3" y="10" width="5" height="4"/><rect x="9" y="8" width="4" height="3"/>"#
            }
            Self::Launcher => {
                r#"<rect x="2" y="2" width="5" height="5"/><rect x="9" y="2" width="5" height="5"/><rect x="2" y="9" width="5" height="5"/><rect x="9" y="9" width="5" height="5"/>"#
            }
            Self::WindowMinimize => r#"<rect x="3" y="11" width="10" height="2"/>"#,
            Self::WindowRestore => {
                r#"<rect x="3.5" y="5.5" width="8" height="7" fill="none" stroke="currentColor"/><rect x="3" y="5" width="9" height="2"/>"#
            }
            Self::Dismiss => {
                r#"<path d="M3 3l10 10M13 3L3 13" fill="none" stroke="currentColor" stroke-width="2"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 12px glyph for window controls.
    Xs,
    /// 16px taskbar and title bar icon.
    #[default]
    Sm,
    /// 32px desktop launcher icon.
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Lg => 32,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon from the shell catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 16 16"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            shape-rendering="crispEdges"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_tokens_are_unique() {
        let all = [
            IconName::Person,
            IconName::Document,
            IconName::Calculator,
            IconName::ChessKnight,
            IconName::Snake,
            IconName::Grid,
            IconName::Cards,
            IconName::Bricks,
            IconName::Music,
            IconName::Launcher,
            IconName::WindowMinimize,
            IconName::WindowRestore,
            IconName::Dismiss,
        ];
        let mut tokens: Vec<_> = all.iter().map(|icon| icon.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), all.len());
    }
}
