//! tracing integration for the browser console.
//!
//! Events are rendered as `[target] message key=value ...` and routed to the
//! console method matching their level.

use std::fmt::Write as FmtWrite;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{EnvFilter, Layer};

/// A tracing Layer that forwards events to `console.*`.
pub struct ConsoleLayer;

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let js = wasm_bindgen::JsValue::from(visitor.into_line(metadata.target()));
        match *metadata.level() {
            Level::ERROR => web_sys::console::error_1(&js),
            Level::WARN => web_sys::console::warn_1(&js),
            Level::INFO => web_sys::console::info_1(&js),
            _ => web_sys::console::debug_1(&js),
        }
    }
}

#[derive(Default)]
struct LineVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl LineVisitor {
    fn push(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }

    fn into_line(self, target: &str) -> String {
        format_line(target, self.message.as_deref().unwrap_or_default(), &self.fields)
    }
}

impl Visit for LineVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.push(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.push(field, value.to_string());
    }
}

fn format_line(target: &str, message: &str, fields: &[(String, String)]) -> String {
    let mut line = format!("[{target}] {message}");
    for (key, value) in fields {
        let _ = write!(line, " {key}={value}");
    }
    line
}

/// Installs the console subscriber. `filter` is an `EnvFilter` directive;
/// an unparsable directive falls back to `info`.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry().with(ConsoleLayer.with_filter(filter));

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        web_sys::console::warn_1(&"tracing subscriber already installed".into());
    }
}
