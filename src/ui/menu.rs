use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::{AppSettings, Message};

/// Preset families offered under Format/Font.
pub const FONT_FAMILIES: &[&str] = &["Courier", "Helvetica", "Serif", "Screen"];

/// Preset sizes offered under Format/Font Size.
pub const FONT_SIZES: &[u32] = &[12, 14, 16, 18, 24, 32];

/// Menu label and color token for the presets under Format/Color.
pub const COLOR_PRESETS: &[(&str, &str)] = &[
    ("Black", "black"),
    ("Dark Gray", "dark-gray"),
    ("Red", "red"),
    ("Green", "green"),
    ("Blue", "blue"),
    ("Orange", "orange"),
    ("Magenta", "magenta"),
];

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, settings: &AppSettings) {
    let s = sender;

    // Snippet
    menu.add("Snippet/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("Snippet/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("Snippet/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("Snippet/Clear Text", Shortcut::Ctrl | 'l', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ClearText) });
    menu.add("Snippet/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Format
    for &family in FONT_FAMILIES {
        let path = format!("Format/Font/{}", family);
        menu.add(&path, Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontFamily(family)) });
    }
    menu.add("Format/Font/Custom...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::PromptFontFamily) });
    for &size in FONT_SIZES {
        let path = format!("Format/Font Size/{}", size);
        menu.add(&path, Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(size)) });
    }
    for &(label, token) in COLOR_PRESETS {
        let path = format!("Format/Color/{}", label);
        menu.add(&path, Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetColor(token)) });
    }
    menu.add("Format/Color/Custom...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::PromptColor) });

    // View
    let dm_flag = if settings.is_dark() { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Dark Mode", Shortcut::None, dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });
    menu.add("View/Reset Preferences", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ResetPreferences) });

    // Help
    menu.add("Help/About ShortPad", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
