//! `tracing` output for the browser console.
//!
//! `fmt` formats each event into a fresh [`ConsoleWriter`]; the line is
//! handed to `console.log` when the writer is dropped. Timestamps are off
//! because `std::time` is unavailable on `wasm32-unknown-unknown`.

use std::io;

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl ConsoleWriter {
    /// Buffered line without the trailing newline.
    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            web_sys::console::log_1(&JsValue::from_str(&self.line()));
            self.buf.clear();
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::default()
    }
}

/// Install the console subscriber. Safe to call more than once.
pub fn init(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_ansi(false)
        .without_time()
        .with_max_level(level)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn buffers_until_flush() {
        let mut writer = ConsoleWriter::default();
        writer.write_all(b"INFO eventol_home: mounted\n").unwrap();
        assert_eq!(writer.line(), "INFO eventol_home: mounted");
        // Drop would log to the console, which only exists in a browser.
        writer.buf.clear();
    }
}
