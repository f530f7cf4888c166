/// Instrumentation capability for the read path.
///
/// Selected once at construction time: a real tracer when instrumentation
/// is enabled, `NoopTracer` otherwise. The calling code is identical either
/// way.
pub trait Tracer: Send + Sync {
    fn start_span(&self, operation: &str) -> Box<dyn Span>;
}

/// An open span. Implementations end the span when the box is dropped.
pub trait Span: Send {}

pub struct NoopTracer;

struct NoopSpan;

impl Span for NoopSpan {}

impl Tracer for NoopTracer {
    fn start_span(&self, _operation: &str) -> Box<dyn Span> {
        Box::new(NoopSpan)
    }
}
