#![cfg_attr(windows, windows_subsystem = "windows")]

use fltk::{app, prelude::*};
use tracing::info;

use short_pad::app::infrastructure::logging::init_logging;
use short_pad::app::state::AppState;
use short_pad::app::{ApplicationContext, Message};
use short_pad::ui::main_window::build_main_window;
use short_pad::ui::menu::build_menu;

fn main() {
    init_logging();

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let ctx = ApplicationContext::from_user_dirs();
    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender, &ctx.settings);

    let mut state = AppState::new(widgets, ctx);
    state.start();
    state.window.show();
    state.editor.take_focus().ok();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::TextEdited => state.text_edited(),
                Message::ClearText => state.clear_text(),
                Message::FileOpen => state.file_open(),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::SetFontFamily(family) => state.set_font_family(family),
                Message::SetFontSize(size) => state.set_font_size(size),
                Message::PromptFontFamily => state.prompt_font_family(),
                Message::SetColor(token) => state.set_color(token),
                Message::PromptColor => state.prompt_color(),
                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::ResetPreferences => state.reset_preferences(),
                Message::ShowAbout => state.show_about(),
                Message::FileQuit | Message::WindowClose => {
                    if state.file_quit() {
                        info!("Exiting");
                        app.quit();
                    }
                }
            }
        }
    }
}
