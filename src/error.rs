//! Error types for drawing surfaces, decoration and profiles.

use thiserror::Error;

/// A failure reported by a [`Surface`](crate::Surface) implementation.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("clip failed: {0}")]
    Clip(String),

    #[error("fill failed: {0}")]
    Fill(String),

    #[error("image draw failed for icon `{icon}`: {reason}")]
    Image { icon: String, reason: String },

    #[error("text failed: {0}")]
    Text(String),
}

/// A failure while decorating a single frame.
///
/// Only [`DecorationRenderer::try_decorate`](crate::DecorationRenderer::try_decorate)
/// returns these; `decorate` reports them to its diagnostic sink instead.
#[derive(Debug, Error)]
pub enum DecorateError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// A surface panicked mid-frame. Only `decorate` produces this.
    #[error("surface panicked: {0}")]
    Panicked(String),
}

/// A failure while reading or applying a decoration profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid color `{0}`, expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),

    #[error("profile JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DecorateResult<T> = Result<T, DecorateError>;
