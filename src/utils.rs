use std::process::ExitStatus;

#[cfg(windows)]
pub fn get_user_locale_name() -> Option<String> {
    use windows::Win32::Globalization::GetUserDefaultLocaleName;

    // LOCALE_NAME_MAX_LENGTH
    let mut buffer = [0u16; 85];
    let len = unsafe { GetUserDefaultLocaleName(&mut buffer) };
    if len <= 1 {
        return None;
    }
    // len includes the terminating null
    Some(String::from_utf16_lossy(&buffer[..len as usize - 1]))
}

#[cfg(not(windows))]
pub fn get_user_locale_name() -> Option<String> {
    None
}

/// Converts a child's exit status into the code this process should exit with.
///
/// Codes are forwarded as is. On Unix a child killed by a signal has no code, so it is
/// reported the way shells do, as `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
