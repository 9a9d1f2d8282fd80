//! Crate error type for surface discovery and startup.

use thiserror::Error;

/// Errors raised while locating the drawing surface or wiring input.
///
/// All variants are construction-time failures: once a [`crate::stage::Stage`]
/// or [`crate::surface::Surface`] exists, its operations do not produce these.
#[derive(Debug, Error)]
pub enum EaselError {
    /// No canvas element could be found in the document.
    #[error("no drawing surface: no `#{id}` element and no <canvas> in the document")]
    CanvasNotFound {
        /// The well-known id that was probed before falling back.
        id: String,
    },
    /// A canvas exists but refused to produce a 2d rendering context.
    #[error("canvas has no 2d rendering context")]
    ContextUnavailable,
    /// The browser rejected an input-event listener registration.
    #[error("failed to register input listeners: {0}")]
    ListenerRegistration(String),
}
