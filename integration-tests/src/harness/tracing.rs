use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// One recorded event, with every field rendered as text.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn message(&self) -> Option<&str> {
        self.field("message")
    }
}

pub type EventLog = Arc<Mutex<Vec<CapturedEvent>>>;

/// Returns the process-wide event log, installing the recorder on first use.
pub fn captured_events() -> EventLog {
    static LOG: OnceLock<EventLog> = OnceLock::new();

    LOG.get_or_init(|| {
        let log = EventLog::default();
        let subscriber = tracing_subscriber::registry().with(Recorder(log.clone()));
        tracing::subscriber::set_global_default(subscriber)
            .expect("failed to set global tracing subscriber");
        log
    })
    .clone()
}

struct Recorder(EventLog);

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::default();
        event.record(&mut fields);

        self.0.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: fields.0,
        });
    }
}

#[derive(Default)]
struct Fields(BTreeMap<String, String>);

impl Visit for Fields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}
