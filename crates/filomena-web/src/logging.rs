//! `tracing` output for the browser console.
//!
//! [`ConsoleLayer`] renders each event as a single line,
//! `LEVEL target: message key=value ...`, and hands it to a [`ConsoleSink`].
//! On `wasm32` the sink is the page's `console`; tests plug in a capture.

use std::fmt::{self, Write as _};
use std::panic::Location;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Destination for formatted log lines.
pub trait ConsoleSink: Send + Sync + 'static {
    fn emit(&self, level: Level, line: &str);
}

pub struct ConsoleLayer<S> {
    sink: S,
}

impl<S: ConsoleSink> ConsoleLayer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }
}

impl<S, Sub> Layer<Sub> for ConsoleLayer<S>
where
    S: ConsoleSink,
    Sub: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, Sub>) {
        self.sink.emit(*event.metadata().level(), &format_event(event));
    }
}

/// Render an event as one console line.
#[must_use]
pub fn format_event(event: &Event<'_>) -> String {
    let meta = event.metadata();
    let mut visitor = LineVisitor::default();
    event.record(&mut visitor);
    let mut line = format!("{} {}: {}", meta.level(), meta.target(), visitor.message);
    line.push_str(&visitor.fields);
    line
}

/// Render a panic report in the same single-line shape as events.
#[must_use]
pub fn format_panic(location: Option<&Location<'_>>, message: &str) -> String {
    match location {
        Some(loc) => format!(
            "{} panic: {message} at {}:{}:{}",
            Level::ERROR,
            loc.file(),
            loc.line(),
            loc.column()
        ),
        None => format!("{} panic: {message}", Level::ERROR),
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserConsole, init, install_panic_hook};

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::sync::Once;

    use filomena_core::LogLevel;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;
    use wasm_bindgen::JsValue;
    use web_sys::console;

    use super::{ConsoleLayer, ConsoleSink, format_panic};

    /// Sink writing to the page's `console` object.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserConsole;

    impl ConsoleSink for BrowserConsole {
        fn emit(&self, level: Level, line: &str) {
            let line = JsValue::from_str(line);
            match level {
                Level::ERROR => console::error_1(&line),
                Level::WARN => console::warn_1(&line),
                Level::INFO => console::info_1(&line),
                _ => console::debug_1(&line),
            }
        }
    }

    /// Report panics on the console. Installed once; safe to call repeatedly.
    pub fn install_panic_hook() {
        static ONCE: Once = Once::new();
        ONCE.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let payload = info.payload();
                let message = payload
                    .downcast_ref::<&str>()
                    .copied()
                    .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
                    .unwrap_or("non-string payload");
                BrowserConsole.emit(Level::ERROR, &format_panic(info.location(), message));
            }));
        });
    }

    /// Install the global subscriber. Later calls are ignored, whatever level
    /// they ask for.
    pub fn init(level: LogLevel) {
        static ONCE: Once = Once::new();
        ONCE.call_once(|| {
            let subscriber = tracing_subscriber::registry()
                .with(level.as_level_filter())
                .with(ConsoleLayer::new(BrowserConsole));
            let _ = tracing::subscriber::set_global_default(subscriber);
        });
    }
}
