use fltk::{
    app::{self, Sender},
    enums::{Align, CallbackTrigger, Color, Event, FrameType},
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::Message;

pub const DEFAULT_WIDTH: i32 = 480;
pub const DEFAULT_HEIGHT: i32 = 220;
const MENU_HEIGHT: i32 = 30;
const STATUS_HEIGHT: i32 = 24;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub text_buffer: TextBuffer,
    pub status_bar: Frame,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, DEFAULT_WIDTH, DEFAULT_HEIGHT, "ShortPad");
    wind.set_xclass("ShortPad");

    let mut flex = Flex::new(0, 0, DEFAULT_WIDTH, DEFAULT_HEIGHT, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let text_buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(text_buffer.clone());
    text_editor.wrap_mode(WrapMode::AtBounds, 0);
    // Every keystroke or paste reports back so the model can re-check the cap
    text_editor.set_trigger(CallbackTrigger::Changed);
    text_editor.emit(*sender, Message::TextEdited);

    let mut status_bar = Frame::default();
    status_bar.set_frame(FrameType::FlatBox);
    status_bar.set_color(Color::from_rgb(240, 240, 240));
    status_bar.set_label_size(12);
    status_bar.set_align(Align::Left | Align::Inside);
    status_bar.set_label("Ready");
    flex.fixed(&status_bar, STATUS_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Route the close button through the dispatch loop so the session is saved
    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        flex,
        menu,
        text_editor,
        text_buffer,
        status_bar,
    }
}
