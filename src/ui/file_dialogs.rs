use fltk::dialog;

use crate::app::services::snippet_file::SNIPPET_FILE_FILTER;

pub fn native_open_dialog(directory: Option<&str>) -> Option<String> {
    dialog::file_chooser("Open Snippet", SNIPPET_FILE_FILTER, directory.unwrap_or("."), false)
}

pub fn native_save_dialog(directory: Option<&str>) -> Option<String> {
    dialog::file_chooser("Save Snippet As", SNIPPET_FILE_FILTER, directory.unwrap_or("."), false)
}
