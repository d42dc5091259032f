use std::cell::Cell;
use std::ffi::{c_char, c_int, c_void};
use std::rc::Rc;

use fltk::app::Sender;
use fltk::text::TextBuffer;

use crate::app::domain::Message;
use crate::ui::style_table::FIRST_STYLE;

/// The closure type stored behind the FFI `void* cbArg`.
type ModifyCb = dyn FnMut(i32, i32, i32, i32, *const c_char);

/// Module-level shim passed to FLTK as the C callback.  Because this is a
/// single, fixed function pointer, `remove_modify_callback` can find it by
/// pointer equality (unlike fltk-rs's wrapper which creates a new shim each
/// time and therefore can never match).
///
/// # Safety
///
/// This function is called by FLTK's C++ code. The `cb_arg` parameter must be
/// a valid pointer to `Box<ModifyCb>` created in `BufferSync::attach()`.
/// The pointer remains valid until `detach()` removes the callback and frees
/// the box.
unsafe extern "C" fn modify_shim(
    pos: c_int,
    n_inserted: c_int,
    n_deleted: c_int,
    n_restyled: c_int,
    deleted_text: *const c_char,
    cb_arg: *mut c_void,
) {
    if cb_arg.is_null() {
        tracing::warn!("modify_shim called with null callback argument");
        return;
    }
    // SAFETY: cb_arg points to the Box<ModifyCb> allocated in attach() and
    // stays valid until detach() unregisters this shim.
    unsafe {
        let cb: &mut Box<ModifyCb> = &mut *(cb_arg as *mut Box<ModifyCb>);
        cb(pos, n_inserted, n_deleted, n_restyled, deleted_text);
    }
}

type ModifyFn = unsafe extern "C" fn(c_int, c_int, c_int, c_int, *const c_char, *mut c_void);

unsafe extern "C" {
    fn Fl_Text_Buffer_add_modify_callback(buf: *mut c_void, cb: Option<ModifyFn>, cb_arg: *mut c_void);
    fn Fl_Text_Buffer_remove_modify_callback(buf: *mut c_void, cb: Option<ModifyFn>, cb_arg: *mut c_void);
    fn Fl_Text_Buffer_text_range(buf: *mut c_void, start: c_int, end: c_int) -> *mut c_char;
    fn free(ptr: *mut c_void);
}

/// Read `[start, end)` from an FLTK TextBuffer without leaking the C copy.
///
/// `Fl_Text_Buffer::text_range()` returns a `malloc()`'d string that the
/// fltk-rs wrapper never frees, so we go through the FFI and free it here.
pub fn buffer_text_range_no_leak(buf: &TextBuffer, start: i32, end: i32) -> String {
    if end <= start {
        return String::new();
    }
    // SAFETY:
    //   1. buf.as_ptr() is the live FLTK buffer (valid while buf exists)
    //   2. Fl_Text_Buffer_text_range returns a malloc'd, null-terminated copy
    //   3. we copy it into a Rust String, then free() it with the matching allocator
    unsafe {
        let inner = buf.as_ptr() as *mut c_void;
        let ptr = Fl_Text_Buffer_text_range(inner, start, end);
        if ptr.is_null() {
            return String::new();
        }
        let result = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut c_void);
        result
    }
}

/// Mirrors keystroke edits in the editor buffer into the document.
///
/// Every user edit patches the style buffer immediately (so FLTK never draws
/// text without style bytes) and posts a [`Message::BufferEdited`] for the
/// controller. Programmatic rewrites go through [`BufferSync::suppressed`].
pub struct BufferSync {
    buffer: TextBuffer,
    suppressed: Rc<Cell<bool>>,
    typing_style: Rc<Cell<u8>>,
    /// Heap-allocated closure passed to FLTK's modify callback.
    /// Must be freed in detach() after removing the callback.
    modify_cb_data: *mut c_void,
}

impl BufferSync {
    pub fn attach(buffer: &TextBuffer, style_buffer: &TextBuffer, sender: Sender<Message>) -> Self {
        let suppressed = Rc::new(Cell::new(false));
        let typing_style = Rc::new(Cell::new(FIRST_STYLE));

        let skip = suppressed.clone();
        let typing = typing_style.clone();
        let text_buf = buffer.clone();
        let mut style_buf = style_buffer.clone();

        let cb: Box<ModifyCb> = Box::new(
            move |pos: i32, inserted: i32, deleted: i32, _restyled: i32, _deleted_text: *const c_char| {
                if skip.get() || (inserted <= 0 && deleted <= 0) {
                    return;
                }
                if deleted > 0 {
                    style_buf.remove(pos, pos + deleted);
                }
                let text = if inserted > 0 {
                    let filler = (typing.get() as char).to_string().repeat(inserted as usize);
                    style_buf.insert(pos, &filler);
                    buffer_text_range_no_leak(&text_buf, pos, pos + inserted)
                } else {
                    String::new()
                };
                sender.send(Message::BufferEdited {
                    pos: pos.max(0) as usize,
                    deleted: deleted.max(0) as usize,
                    inserted: text,
                });
            },
        );

        let data = Box::into_raw(Box::new(cb)) as *mut c_void;

        // SAFETY: `data` (Box<Box<ModifyCb>>) is handed to modify_shim on every
        // modification and stays alive until detach() removes the callback.
        unsafe {
            Fl_Text_Buffer_add_modify_callback(buffer.as_ptr() as *mut c_void, Some(modify_shim), data);
        }

        Self {
            buffer: buffer.clone(),
            suppressed,
            typing_style,
            modify_cb_data: data,
        }
    }

    /// Style character used for newly typed text.
    pub fn set_typing_style(&self, ch: u8) {
        self.typing_style.set(ch);
    }

    /// Run `f` with edit mirroring switched off.
    pub fn suppressed<T>(&self, f: impl FnOnce() -> T) -> T {
        let was = self.suppressed.replace(true);
        let result = f();
        self.suppressed.set(was);
        result
    }

    /// Unregister the callback and free its closure. Idempotent.
    pub fn detach(&mut self) {
        if self.modify_cb_data.is_null() {
            return;
        }

        // SAFETY: remove the callback FIRST so FLTK stops calling modify_shim
        // with our pointer, then free the closure. The same shim pointer lets
        // FLTK find the entry by pointer equality.
        unsafe {
            Fl_Text_Buffer_remove_modify_callback(
                self.buffer.as_ptr() as *mut c_void,
                Some(modify_shim),
                self.modify_cb_data,
            );
            let _ = Box::from_raw(self.modify_cb_data as *mut Box<ModifyCb>);
        }
        self.modify_cb_data = std::ptr::null_mut();
    }
}

impl Drop for BufferSync {
    fn drop(&mut self) {
        self.detach();
    }
}
