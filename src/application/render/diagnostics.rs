use metrics::counter;
use tracing::warn;

use crate::domain::elements::UnsupportedBlock;

/// Receives a record for every block the renderer could not display.
///
/// Sinks are fire-and-forget: they must not panic and cannot influence the
/// render result.
pub trait DiagnosticsSink: Send + Sync {
    fn record(&self, block: &UnsupportedBlock);
}

/// Default sink: a structured warning plus a per-tag counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn record(&self, block: &UnsupportedBlock) {
        let element = serde_json::to_string(&block.raw)
            .unwrap_or_else(|err| format!("<unencodable element: {err}>"));

        warn!(
            target = "application::render::elements",
            tag = %block.tag,
            is_mandatory = block.is_mandatory,
            element = %element,
            "Unsupported element"
        );
        counter!("folio_elements_unsupported_total", "tag" => block.tag.clone()).increment(1);
    }
}
