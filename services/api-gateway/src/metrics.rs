use prometheus::{IntCounterVec, Opts, Registry, TextEncoder};

/// Prometheus counters for formula operations, on a private registry.
#[derive(Clone)]
pub struct ApiMetrics {
    registry: Registry,
    operations: IntCounterVec,
}

impl ApiMetrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new_custom(Some("formula".to_string()), None)?;
        let operations = IntCounterVec::new(
            Opts::new("requests_total", "Formula operations requested, by operation"),
            &["operation"],
        )?;
        registry.register(Box::new(operations.clone()))?;

        Ok(Self {
            registry,
            operations,
        })
    }

    pub fn record(&self, operation: &str) {
        self.operations.with_label_values(&[operation]).inc();
    }

    pub fn render(&self) -> prometheus::Result<String> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}
