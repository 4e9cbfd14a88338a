pub const DIALOG_TITLE: &str = "IMAPViewer Launcher Error";

/// Receives the user-facing message for a failed launch.
pub trait Reporter {
    fn report(&mut self, message: &str);
}

/// Shows a modal error box and writes the same text to stderr.
///
/// Platforms without a native message box only get the stderr line.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogReporter;

impl Reporter for DialogReporter {
    fn report(&mut self, message: &str) {
        show_error_box(message);
        eprintln!("{}", message);
    }
}

#[cfg(windows)]
fn show_error_box(message: &str) {
    use windows::{core::HSTRING, Win32::{Foundation::HWND, UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK}}};

    unsafe {
        MessageBoxW(
            None::<&HWND>,
            &HSTRING::from(message),
            &HSTRING::from(DIALOG_TITLE),
            MB_OK | MB_ICONERROR
        );
    }
}

#[cfg(not(windows))]
fn show_error_box(_message: &str) {}

/// Keeps every reported message in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    messages: Vec<String>
}

impl RecordingReporter {
    pub fn new() -> RecordingReporter {
        RecordingReporter::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}
