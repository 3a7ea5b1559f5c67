//! Panic hook for crash reporting

use backtrace::Backtrace;
use chrono::Local;
use std::panic::PanicHookInfo;

/// Initialize the panic hook for crash reporting
pub fn init_panic_hook() {
    std::panic::set_hook(Box::new(panic_handler));
    tracing::debug!("Panic hook initialized");
}

fn panic_handler(info: &PanicHookInfo) {
    let thread = std::thread::current();
    let thread_name = thread.name().unwrap_or("<unnamed>");
    let report = crash_report(
        &Local::now().to_rfc3339(),
        thread_name,
        info,
        &format!("{:?}", Backtrace::new()),
    );

    eprintln!("{}", report);
    tracing::error!("{}", report);

    let dump_filename = format!(
        "image_renamer_crash_{}.txt",
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let dump_path = std::env::temp_dir().join(&dump_filename);

    if let Err(e) = std::fs::write(&dump_path, &report) {
        eprintln!("Failed to write crash dump: {}", e);
    }

    #[cfg(windows)]
    show_error_dialog(&dump_path, info);
}

fn crash_report(timestamp: &str, thread_name: &str, info: &PanicHookInfo, backtrace: &str) -> String {
    format!(
        "=== CRITICAL PANIC ===\n\
         Timestamp: {}\n\
         Thread: {}\n\
         Location: {:?}\n\
         Payload: {}\n\n\
         Stack Trace:\n{}",
        timestamp,
        thread_name,
        info.location(),
        payload_message(info),
        backtrace
    )
}

/// Panic payloads are either `&str` (literal messages) or `String` (formatted ones)
fn payload_message<'a>(info: &'a PanicHookInfo) -> &'a str {
    let payload = info.payload();
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "<unknown>"
    }
}

#[cfg(windows)]
fn show_error_dialog(dump_path: &std::path::Path, info: &PanicHookInfo) {
    use windows::core::HSTRING;
    use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK};

    let msg = format!(
        "An unexpected error occurred.\n\n\
         Crash report: {}\n\n\
         Error: {}",
        dump_path.display(),
        payload_message(info)
    );

    unsafe {
        MessageBoxW(
            None,
            &HSTRING::from(msg),
            &HSTRING::from("Renamer - Fatal Error"),
            MB_ICONERROR | MB_OK,
        );
    }
}
