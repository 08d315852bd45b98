//! Placeholder content for the embedded apps.
//!
//! The real games and readers live outside the window manager. These surfaces exercise the
//! window contract: they render the live content size and can ask their window to close.

use desktop_app_contract::{AppMountContext, ContentSize};
use leptos::*;

fn size_label(size: ContentSize) -> String {
    if size.is_collapsed() {
        "hidden".to_string()
    } else {
        format!("{}x{}", size.width, size.height)
    }
}

/// Board-style apps keep a square play field that fits the content box.
fn square_side(size: ContentSize, chrome_px: i32) -> i32 {
    (size.width.min(size.height - chrome_px) - 16).max(0)
}

#[component]
fn PlaceholderApp(
    context: AppMountContext,
    heading: &'static str,
    blurb: &'static str,
    #[prop(optional)] square_board: bool,
) -> impl IntoView {
    let content_size = context.content_size;
    let board_style = move || {
        let side = square_side(content_size.get(), 48);
        format!("width:{side}px;height:{side}px;")
    };

    view! {
        <div class="app-shell" data-app=context.window_id>
            <div class="app-card">
                <p><strong>{heading}</strong></p>
                <p>{blurb}</p>
            </div>
            <Show when=move || square_board fallback=|| ()>
                <div class="app-board" style=board_style aria-hidden="true"></div>
            </Show>
            <div class="app-statusbar">
                <span>{move || format!("Content: {}", size_label(content_size.get()))}</span>
                <button type="button" class="app-action" on:click=move |_| context.request_close()>
                    "Close"
                </button>
            </div>
        </div>
    }
}

pub(super) fn mount_about_app(context: AppMountContext) -> View {
    view! {
        <PlaceholderApp
            context=context
            heading="Hello!"
            blurb="Engineer, tinkerer, and occasional essayist. Double-click an icon to look around."
        />
    }
    .into_view()
}

pub(super) fn mount_essays_app(context: AppMountContext) -> View {
    view! {
        <PlaceholderApp
            context=context
            heading="Essays"
            blurb="Long-form writing opens here once the reader is wired up."
        />
    }
    .into_view()
}

/// Keeps a scratch entry so minimize/restore can be checked by hand.
pub(super) fn mount_calculator_app(context: AppMountContext) -> View {
    let entry = create_rw_signal(String::new());
    view! {
        <div class="app-shell app-calculator-shell" data-app=context.window_id>
            <input
                class="app-calculator-display"
                type="text"
                inputmode="decimal"
                aria-label="Calculator display"
                prop:value=move || entry.get()
                on:input=move |ev| entry.set(event_target_value(&ev))
            />
            <div class="app-statusbar">
                <span>{move || format!("Content: {}", size_label(context.size()))}</span>
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn mount_chess_app(context: AppMountContext) -> View {
    view! {
        <PlaceholderApp
            context=context
            heading="Chess"
            blurb="The board scales with the window."
            square_board=true
        />
    }
    .into_view()
}

pub(super) fn mount_snake_app(context: AppMountContext) -> View {
    view! {
        <PlaceholderApp
            context=context
            heading="Snake"
            blurb="Arrow keys steer once the game loop is attached."
            square_board=true
        />
    }
    .into_view()
}

pub(super) fn mount_sudoku_app(context: AppMountContext) -> View {
    view! {
        <PlaceholderApp
            context=context
            heading="Sudoku"
            blurb="A fresh grid every visit."
            square_board=true
        />
    }
    .into_view()
}

pub(super) fn mount_solitaire_app(context: AppMountContext) -> View {
    view! {
        <PlaceholderApp
            context=context
            heading="Solitaire"
            blurb="Klondike, draw three."
        />
    }
    .into_view()
}

pub(super) fn mount_breakout_app(context: AppMountContext) -> View {
    view! {
        <PlaceholderApp
            context=context
            heading="Breakout"
            blurb="The paddle spans the content width."
        />
    }
    .into_view()
}

pub(super) fn mount_now_playing_app(context: AppMountContext) -> View {
    view! {
        <PlaceholderApp
            context=context
            heading="Now Playing"
            blurb="Nothing queued."
        />
    }
    .into_view()
}
