use std::{
    collections::VecDeque,
    ffi::CString,
    mem::{self, size_of, MaybeUninit},
    ptr,
};
use winapi::{
    ctypes::c_void,
    shared::{
        minwindef::{DWORD, FALSE, HINSTANCE, HIWORD, LOWORD, LPARAM, LRESULT, UINT, WPARAM},
        windef::{HDC, HWND, RECT},
        winerror::ERROR_CLASS_ALREADY_EXISTS,
    },
    um::{
        errhandlingapi::GetLastError,
        libloaderapi::GetModuleHandleA,
        wingdi::{self, BITMAPINFO, BITMAPINFOHEADER},
        windowsx::{GET_X_LPARAM, GET_Y_LPARAM},
        winuser::{self, WNDCLASSEXA},
    },
};
use crate::{
    backend::{Backend, Event},
    debug::last_error_message,
    error::WindowError,
    graphics::{Buffer, BufferInfo},
    input::{Key, MouseButton},
    win_assert_non_null,
    win_assert_non_zero,
};

/// A Win32 window presenting through GDI.
///
/// The window procedure pushes into `events`, a heap queue whose address is
/// stored in the window's `GWLP_USERDATA` slot.
pub struct Win32 {
    handle: HWND,
    device_context: HDC,
    instance: HINSTANCE,
    class_name: CString,
    style: DWORD,
    events: *mut VecDeque<Event>,
}

impl Backend for Win32 {
    fn open(title: &str, width: u32, height: u32) -> Result<Self, WindowError> {
        use winapi::um::winuser::{
            AdjustWindowRectEx, CreateWindowExA, GetDC, GetSystemMetrics, LoadCursorW,
            RegisterClassExA, ShowWindow, UnregisterClassA,
        };

        let class_name = CString::new(title).map_err(|_| WindowError::Creation {
            call: "CString::new",
            message: "title contains a NUL byte".to_owned(),
        })?;
        let instance = win_assert_non_null!( GetModuleHandleA(ptr::null()) );

        let class = WNDCLASSEXA {
            cbSize: size_of::<WNDCLASSEXA>() as u32,
            style: winuser::CS_HREDRAW | winuser::CS_VREDRAW | winuser::CS_OWNDC,
            lpfnWndProc: Some(window_class_proc),
            cbClsExtra: 0,
            cbWndExtra: 0,
            hInstance: instance,
            hIcon: ptr::null_mut(),
            hCursor: unsafe { LoadCursorW(ptr::null_mut(), winuser::IDC_ARROW) },
            hbrBackground: ptr::null_mut(),
            lpszMenuName: ptr::null(),
            lpszClassName: class_name.as_ptr(),
            hIconSm: ptr::null_mut(),
        };
        if unsafe { RegisterClassExA(&class) } == 0 {
            if unsafe { GetLastError() } != ERROR_CLASS_ALREADY_EXISTS {
                return Err(creation_error("RegisterClassExA"));
            }
            log::debug!("window class {:?} already registered", title);
        }

        let style = winuser::WS_OVERLAPPEDWINDOW;
        let mut window_dim = RECT {
            left: 0,
            top: 0,
            right: width as i32,
            bottom: height as i32,
        };
        win_assert_non_zero!( AdjustWindowRectEx(&mut window_dim, style, FALSE, 0) );
        let outer_width = window_dim.right - window_dim.left;
        let outer_height = window_dim.bottom - window_dim.top;
        let x = (unsafe { GetSystemMetrics(winuser::SM_CXSCREEN) } - outer_width) / 2;
        let y = (unsafe { GetSystemMetrics(winuser::SM_CYSCREEN) } - outer_height) / 2;

        let events = Box::into_raw(Box::new(VecDeque::<Event>::new()));
        let handle = unsafe {
            CreateWindowExA(
                0,
                class_name.as_ptr(),
                class_name.as_ptr(),
                style,
                x,
                y,
                outer_width,
                outer_height,
                ptr::null_mut(),
                ptr::null_mut(),
                instance,
                events as *mut c_void,
            )
        };
        if handle.is_null() {
            let error = creation_error("CreateWindowExA");
            unsafe {
                drop(Box::from_raw(events));
                UnregisterClassA(class_name.as_ptr(), instance);
            }
            return Err(error);
        }

        // From here on Drop releases whatever was acquired.
        let mut window = Self {
            handle,
            device_context: ptr::null_mut(),
            instance,
            class_name,
            style,
            events,
        };
        window.device_context = unsafe { GetDC(handle) };
        if window.device_context.is_null() {
            return Err(creation_error("GetDC"));
        }
        unsafe { ShowWindow(handle, winuser::SW_SHOW) };

        Ok(window)
    }

    fn poll_events(&mut self, out: &mut Vec<Event>) {
        use winapi::um::winuser::{DispatchMessageA, PeekMessageA, TranslateMessage};

        loop {
            let msg = unsafe {
                let mut msg = MaybeUninit::uninit();
                if PeekMessageA(msg.as_mut_ptr(), ptr::null_mut(), 0, 0, winuser::PM_REMOVE) != 0 {
                    Some(msg.assume_init())
                } else {
                    None
                }
            };

            match msg {
                None => break,
                Some(msg) if msg.message == winuser::WM_QUIT => unsafe {
                    (*self.events).push_back(Event::Close);
                },
                Some(msg) => unsafe {
                    TranslateMessage(&msg);
                    DispatchMessageA(&msg);
                },
            }
        }

        out.extend(unsafe { (*self.events).drain(..) });
    }

    fn present(&mut self, buffer: &Buffer, width: u32, height: u32) {
        let bitmap_info = bitmap_info(buffer.info());
        let blit_result = unsafe {
            wingdi::SetStretchBltMode(self.device_context, wingdi::COLORONCOLOR);
            wingdi::StretchDIBits(
                self.device_context,
                0,
                0,
                width as i32,
                height as i32,
                0,
                0,
                buffer.width() as i32,
                buffer.height() as i32,
                buffer.as_ptr() as *const c_void,
                &bitmap_info,
                wingdi::DIB_RGB_COLORS,
                wingdi::SRCCOPY,
            )
        };
        if blit_result == 0 {
            log::error!(
                "StretchDIBits {{ hdc: {:p}, dest: {}x{}, src: {}x{}, bits: {:p} }} failed: {}",
                self.device_context,
                width,
                height,
                buffer.width(),
                buffer.height(),
                buffer.as_ptr(),
                last_error_message(),
            );
        }
    }

    fn request_size(&mut self, width: u32, height: u32) {
        use winapi::um::winuser::{AdjustWindowRectEx, SetWindowPos};

        let mut window_dim = RECT {
            left: 0,
            top: 0,
            right: width as i32,
            bottom: height as i32,
        };
        win_assert_non_zero!( AdjustWindowRectEx(&mut window_dim, self.style, FALSE, 0) );
        let resized = unsafe {
            SetWindowPos(
                self.handle,
                ptr::null_mut(),
                0,
                0,
                window_dim.right - window_dim.left,
                window_dim.bottom - window_dim.top,
                winuser::SWP_NOMOVE | winuser::SWP_NOZORDER | winuser::SWP_NOACTIVATE,
            )
        };
        if resized == 0 {
            log::warn!("SetWindowPos to {}x{} failed: {}", width, height, last_error_message());
        }
    }

    fn set_title(&mut self, title: &str) {
        match CString::new(title) {
            Ok(title) => unsafe {
                winuser::SetWindowTextA(self.handle, title.as_ptr());
            },
            Err(_) => log::warn!("title {:?} contains a NUL byte", title),
        }
    }
}

impl Drop for Win32 {
    fn drop(&mut self) {
        use winapi::um::winuser::{DestroyWindow, ReleaseDC, SetWindowLongPtrA, UnregisterClassA};

        unsafe {
            SetWindowLongPtrA(self.handle, winuser::GWLP_USERDATA, 0);
            if !self.device_context.is_null() {
                ReleaseDC(self.handle, self.device_context);
            }
            DestroyWindow(self.handle);
            // Fails harmlessly while other windows still use the class.
            UnregisterClassA(self.class_name.as_ptr(), self.instance);
            drop(Box::from_raw(self.events));
        }
    }
}

fn creation_error(call: &'static str) -> WindowError {
    WindowError::Creation { call, message: last_error_message() }
}

fn bitmap_info(info: BufferInfo) -> BITMAPINFO {
    let height = info.height as i32;
    BITMAPINFO {
        bmiHeader: BITMAPINFOHEADER {
            biSize: size_of::<BITMAPINFOHEADER>() as u32,
            biWidth: info.width as i32,
            //NOTE: negative means that bitmap is top-down
            biHeight: if info.top_down { -height } else { height },
            biPlanes: 1,
            biBitCount: info.bits_per_pixel,
            biCompression: wingdi::BI_RGB,
            ..unsafe { mem::zeroed() }
        },
        bmiColors: unsafe { mem::zeroed() },
    }
}

unsafe extern "system" fn window_class_proc(
    window_handle: HWND,
    message: UINT,
    w_param: WPARAM,
    l_param: LPARAM,
) -> LRESULT {
    use winapi::um::winuser::{DefWindowProcA, GetWindowLongPtrA, SetWindowLongPtrA, CREATESTRUCTA};

    if message == winuser::WM_NCCREATE {
        let create = &*(l_param as *const CREATESTRUCTA);
        SetWindowLongPtrA(window_handle, winuser::GWLP_USERDATA, create.lpCreateParams as isize);
        return DefWindowProcA(window_handle, message, w_param, l_param);
    }

    let events = GetWindowLongPtrA(window_handle, winuser::GWLP_USERDATA) as *mut VecDeque<Event>;
    if events.is_null() {
        return DefWindowProcA(window_handle, message, w_param, l_param);
    }
    let events = &mut *events;

    let button = |button, down| Some(Event::Button { button, down });
    let event = match message {
        winuser::WM_CLOSE => Some(Event::Close),
        winuser::WM_SIZE => Some(Event::Resized {
            width: LOWORD(l_param as u32) as u32,
            height: HIWORD(l_param as u32) as u32,
        }),
        winuser::WM_KEYDOWN | winuser::WM_KEYUP => {
            key_from_vk(w_param).map(|key| Event::Key { key, down: message == winuser::WM_KEYDOWN })
        }
        // Alt and F10 arrive as system keys; Alt+F4 still needs the default handler.
        winuser::WM_SYSKEYDOWN | winuser::WM_SYSKEYUP => {
            if let Some(key) = key_from_vk(w_param) {
                events.push_back(Event::Key { key, down: message == winuser::WM_SYSKEYDOWN });
            }
            return DefWindowProcA(window_handle, message, w_param, l_param);
        }
        winuser::WM_LBUTTONDOWN => button(MouseButton::Left, true),
        winuser::WM_LBUTTONUP => button(MouseButton::Left, false),
        winuser::WM_RBUTTONDOWN => button(MouseButton::Right, true),
        winuser::WM_RBUTTONUP => button(MouseButton::Right, false),
        winuser::WM_MBUTTONDOWN => button(MouseButton::Middle, true),
        winuser::WM_MBUTTONUP => button(MouseButton::Middle, false),
        winuser::WM_MOUSEMOVE => Some(Event::MouseMoved {
            x: GET_X_LPARAM(l_param),
            y: GET_Y_LPARAM(l_param),
        }),
        _ => return DefWindowProcA(window_handle, message, w_param, l_param),
    };

    if let Some(event) = event {
        events.push_back(event);
    }
    0
}

/// Virtual-key code to [`Key`].
fn key_from_vk(vk: WPARAM) -> Option<Key> {
    use crate::input::Key::*;

    let key = match vk {
        0x08 => Backspace,
        0x09 => Tab,
        0x0D => Enter,
        0x10 => Shift,
        0x11 => Ctrl,
        0x12 => Alt,
        0x14 => CapsLock,
        0x1B => Escape,
        0x20 => Space,
        0x21 => PageUp,
        0x22 => PageDown,
        0x23 => End,
        0x24 => Home,
        0x25 => Left,
        0x26 => Up,
        0x27 => Right,
        0x28 => Down,
        0x2C => PrintScreen,
        0x2D => Insert,
        0x2E => Delete,
        0x30..=0x39 => return Key::from_index(D0 as usize + (vk - 0x30)),
        0x41..=0x5A => return Key::from_index(A as usize + (vk - 0x41)),
        0x60..=0x69 => return Key::from_index(N0 as usize + (vk - 0x60)),
        0x6A => NMul,
        0x6B => NAdd,
        0x6D => NSub,
        0x6E => NDec,
        0x6F => NDiv,
        0x70..=0x87 => return Key::from_index(F1 as usize + (vk - 0x70)),
        0xA0 => LShift,
        0xA1 => RShift,
        0xA2 => LCtrl,
        0xA3 => RCtrl,
        0xA4 => LAlt,
        0xA5 => RAlt,
        0xBA => Semicolon,
        0xBB => Plus,
        0xBC => Comma,
        0xBD => Minus,
        0xBE => Period,
        0xBF => Slash,
        0xC0 => Tilde,
        0xDB => LBracket,
        0xDC => Backslash,
        0xDD => RBracket,
        0xDE => Quote,
        _ => return None,
    };

    Some(key)
}
