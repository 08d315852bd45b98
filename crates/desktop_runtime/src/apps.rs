//! App catalog: which content module each desktop window hosts.

mod placeholders;

use desktop_app_contract::AppModule;

use crate::model::WindowId;

/// Returns the content module mounted inside `id`'s window.
pub fn app_module(id: WindowId) -> AppModule {
    match id {
        WindowId::About => AppModule::new(placeholders::mount_about_app),
        WindowId::Essays => AppModule::new(placeholders::mount_essays_app),
        WindowId::Calculator => AppModule::new(placeholders::mount_calculator_app),
        WindowId::Chess => AppModule::new(placeholders::mount_chess_app),
        WindowId::Snake => AppModule::new(placeholders::mount_snake_app),
        WindowId::Sudoku => AppModule::new(placeholders::mount_sudoku_app),
        WindowId::Solitaire => AppModule::new(placeholders::mount_solitaire_app),
        WindowId::Breakout => AppModule::new(placeholders::mount_breakout_app),
        WindowId::NowPlaying => AppModule::new(placeholders::mount_now_playing_app),
    }
}
