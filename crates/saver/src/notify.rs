//! User-visible error messages

/// Show `message` in a message box (stderr outside Windows)
pub fn show_error(message: &str) {
    tracing::warn!("Showing error: {}", message);

    #[cfg(windows)]
    unsafe {
        use windows::core::HSTRING;
        use windows::Win32::Foundation::HWND;
        use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONEXCLAMATION, MB_OK};

        let _ = MessageBoxW(
            HWND::default(),
            &HSTRING::from(message),
            &HSTRING::from("ScreenSaver"),
            MB_OK | MB_ICONEXCLAMATION,
        );
    }

    #[cfg(not(windows))]
    {
        eprintln!("ScreenSaver: {}", message);
    }
}
