use tokio::time::Instant;
use tracing::Span;

pub struct TracingContext {
    pub span: Span,
    pub start_time: Instant,
}
