//! Where swallowed decoration failures are reported.

use crate::error::DecorateError;

/// Receives failures that [`DecorationRenderer::decorate`](crate::DecorationRenderer::decorate)
/// catches instead of returning.
pub trait DiagnosticSink {
    fn decoration_failed(&self, error: &DecorateError);
}

/// Reports failures as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn decoration_failed(&self, error: &DecorateError) {
        tracing::warn!(error = %error, "Swipe decoration failed, frame left undecorated");
    }
}

impl<D: DiagnosticSink + ?Sized> DiagnosticSink for &D {
    fn decoration_failed(&self, error: &DecorateError) {
        (**self).decoration_failed(error);
    }
}
