//! `tracing` output routed to the browser console.

use std::io;

use tracing::{warn, Level, Metadata, Subscriber};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{reload, EnvFilter, Registry};
use wasm_bindgen::JsValue;

/// Buffers one formatted event and emits it on drop.
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        let message = JsValue::from_str(line.trim_end());
        if self.level == Level::ERROR {
            web_sys::console::error_1(&message);
        } else if self.level == Level::WARN {
            web_sys::console::warn_1(&message);
        } else if self.level == Level::INFO {
            web_sys::console::info_1(&message);
        } else {
            web_sys::console::debug_1(&message);
        }
    }
}

pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buffer: Vec::new(),
        }
    }
}

/// Filter used until the configured one is applied.
pub const DEFAULT_FILTER: &str = "info";

/// Swaps the active `EnvFilter` after the subscriber is installed.
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Subscriber stack with a reloadable filter, writing to `make_writer`.
pub fn build<W>(make_writer: W) -> (impl Subscriber + Send + Sync + 'static, FilterHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(EnvFilter::new(DEFAULT_FILTER));
    // There is no wall clock in wasm32-unknown-unknown std, so no timestamps
    let fmt_layer = fmt::layer()
        .with_writer(make_writer)
        .with_ansi(false)
        .with_target(false)
        .without_time();
    (tracing_subscriber::registry().with(filter).with(fmt_layer), handle)
}

/// Install the console subscriber at [`DEFAULT_FILTER`]. Call this before
/// anything that logs; None if a subscriber was already installed.
pub fn init() -> Option<FilterHandle> {
    let (subscriber, handle) = build(ConsoleMakeWriter);
    subscriber.try_init().ok()?;
    Some(handle)
}

/// Switch to `directive`. An invalid directive keeps the current filter.
pub fn apply_filter(handle: &FilterHandle, directive: &str) {
    let filter = match EnvFilter::try_new(directive) {
        Ok(filter) => filter,
        Err(e) => {
            warn!("Invalid log filter '{}', keeping the current one: {}", directive, e);
            return;
        }
    };
    if let Err(e) = handle.reload(filter) {
        warn!("Could not apply log filter '{}': {}", directive, e);
    }
}
