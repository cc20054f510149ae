use std::{ffi::CStr, mem::MaybeUninit, os::raw::c_char, ptr};
use winapi::um::{
    errhandlingapi::GetLastError,
    winbase::{
        FormatMessageA,
        LocalFree,
        FORMAT_MESSAGE_ALLOCATE_BUFFER,
        FORMAT_MESSAGE_FROM_SYSTEM,
        FORMAT_MESSAGE_IGNORE_INSERTS,
    },
};

/// System description of the calling thread's last error.
pub fn last_error_message() -> String {
    let error_code = unsafe { GetLastError() };
    let mut message_ptr = MaybeUninit::<*mut c_char>::uninit();
    let length = unsafe {
        FormatMessageA(
            FORMAT_MESSAGE_ALLOCATE_BUFFER
                | FORMAT_MESSAGE_FROM_SYSTEM
                | FORMAT_MESSAGE_IGNORE_INSERTS,
            ptr::null(),
            error_code,
            0,
            message_ptr.as_mut_ptr() as *mut _,
            0,
            ptr::null_mut(),
        )
    };
    if length == 0 {
        return format!("error code {}", error_code);
    }

    unsafe {
        let message_ptr = message_ptr.assume_init();
        let message = CStr::from_ptr(message_ptr).to_string_lossy().trim_end().to_owned();
        LocalFree(message_ptr as *mut _);
        format!("{} (error code {})", message, error_code)
    }
}

pub fn panic_with_last_error_message(fn_name: &str) -> ! {
    panic!("{} failed. Error: {}", fn_name, last_error_message());
}

/// Calls an unsafe Win32 function and panics with the system error message if it returns 0.
#[macro_export]
macro_rules! win_assert_non_zero {
    (
        $fn_name:ident( $($arg:expr),* $(,)? ) $(;)?
    ) => {
        {
            let result = unsafe { $fn_name($($arg),*) };
            if result == 0 {
                $crate::debug::panic_with_last_error_message(stringify!($fn_name));
            }
            result
        }
    };
}

/// Calls an unsafe Win32 function and panics with the system error message if it returns null.
#[macro_export]
macro_rules! win_assert_non_null {
    (
        $fn_name:ident( $($arg:expr),* $(,)? ) $(;)?
    ) => {
        {
            let result = unsafe { $fn_name($($arg),*) };
            if result.is_null() {
                $crate::debug::panic_with_last_error_message(stringify!($fn_name));
            }
            result
        }
    };
}
