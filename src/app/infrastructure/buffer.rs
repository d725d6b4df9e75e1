/// Copy the contents of an FLTK `TextBuffer` into a `String`, freeing the C copy.
///
/// `TextBuffer::text()` hands back FLTK's `malloc()`'d string without ever
/// releasing it, so reading the buffer on every keystroke would leak. This goes
/// through the C API directly and frees the allocation after copying.
pub fn buffer_text_no_leak(buf: &fltk::text::TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `buf.as_ptr()` is the live FLTK buffer owned by `buf`.
    // `Fl_Text_Buffer_text` returns either null or a NUL-terminated string
    // allocated with malloc, which we copy and then release with the matching
    // `free`. Invalid UTF-8 is replaced rather than trusted.
    unsafe {
        let ptr = Fl_Text_Buffer_text(buf.as_ptr() as *mut std::ffi::c_void);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        text
    }
}
