use crate::config::Config;
use crate::domain::ports::{Span, Tracer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

pub fn init(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;
    init_metrics(config)?;
    Ok(())
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_thread_ids(true)
        .with_target(true);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "adserve=debug,tower_http=debug".into());

    Registry::default().with(env_filter).with(fmt_layer).init();

    Ok(())
}

fn init_metrics(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], config.metrics_port))
        .install()?;

    tracing::info!(
        "Metrics exporter (Prometheus) started on port {}",
        config.metrics_port
    );
    Ok(())
}

/// Real implementation of the instrumentation capability: operations become
/// `tracing` spans, closed when the guard drops. Wired in when tracing is
/// enabled; `NoopTracer` takes its place otherwise.
pub struct TracingTracer {
    service_name: String,
}

impl TracingTracer {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }
}

struct TracingSpan {
    _span: tracing::Span,
}

impl Span for TracingSpan {}

impl Tracer for TracingTracer {
    fn start_span(&self, operation: &str) -> Box<dyn Span> {
        let span = tracing::info_span!(
            "ads_operation",
            service = %self.service_name,
            operation = %operation
        );
        Box::new(TracingSpan { _span: span })
    }
}
