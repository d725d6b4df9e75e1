use fltk::{
    app,
    button::Button,
    enums::{Color, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use crate::app::domain::MAX_CHARS;

/// Show About dialog
pub fn show_about_dialog() {
    let version = env!("CARGO_PKG_VERSION");
    let mut dialog = Window::default()
        .with_size(360, 230)
        .with_label("About ShortPad")
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 340, 210, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(8);

    let mut title = Frame::default();
    title.set_label("ShortPad");
    title.set_label_size(22);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 36);

    let mut version_frame = Frame::default();
    version_frame.set_label(&format!("Version {}", version));
    version_frame.set_label_size(14);
    flex.fixed(&version_frame, 22);

    let mut desc_frame = Frame::default();
    desc_frame.set_label(&format!(
        "Compose snippets of up to {} characters.\nFont, color and window placement\nare remembered between launches.",
        MAX_CHARS
    ));
    desc_frame.set_label_size(12);
    desc_frame.set_label_color(Color::from_rgb(100, 100, 100));
    desc_frame.set_align(fltk::enums::Align::Center | fltk::enums::Align::Inside);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 32);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    while dialog.shown() {
        app::wait();
        if app::should_program_quit() {
            dialog.hide();
        }
    }
}
