//! Serialized line output
//!
//! Demonstration lines may come from the main thread or from strands. Writes
//! are serialized through a coroutine-aware mutex (a contended strand yields
//! instead of blocking its worker thread), and on Unix they go straight to
//! fd 1 so two coroutines sharing an OS thread never contend on std's stdout
//! lock.

use std::sync::LazyLock;

static STDOUT_MUTEX: LazyLock<may::sync::Mutex<()>> = LazyLock::new(|| may::sync::Mutex::new(()));

/// Write `line` and a newline to stdout.
///
/// Output errors (closed pipe and the like) are ignored: stdout is
/// informational and nothing downstream depends on it.
pub fn write_line(line: &str) {
    let _guard = STDOUT_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let mut buf = Vec::with_capacity(line.len() + 1);
    buf.extend_from_slice(line.as_bytes());
    buf.push(b'\n');
    write_stdout(&buf);
}

/// Write a block of text line by line, keeping it contiguous.
pub fn write_block(text: &str) {
    let _guard = STDOUT_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let mut buf = Vec::with_capacity(text.len() + 1);
    buf.extend_from_slice(text.as_bytes());
    if !text.ends_with('\n') {
        buf.push(b'\n');
    }
    write_stdout(&buf);
}

/// Retries on `EINTR`; any other failure drops the rest of the buffer.
#[cfg(unix)]
fn write_stdout(mut bytes: &[u8]) {
    while !bytes.is_empty() {
        // SAFETY: pointer and length come from a live slice
        let written =
            unsafe { libc::write(1, bytes.as_ptr() as *const libc::c_void, bytes.len()) };
        if written < 0 {
            if std::io::Error::last_os_error().kind() == std::io::ErrorKind::Interrupted {
                continue;
            }
            return;
        }
        if written == 0 {
            return;
        }
        bytes = &bytes[written as usize..];
    }
}

#[cfg(not(unix))]
fn write_stdout(bytes: &[u8]) {
    use std::io::Write;
    let _ = std::io::stdout().lock().write_all(bytes);
}
