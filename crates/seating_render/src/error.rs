//! Render-layer error types.

/// Errors that can occur while exporting or loading a render plan.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Failed to encode a plan to JSON.
    #[error("failed to encode render plan: {0}")]
    Encode(#[source] serde_json::Error),

    /// Failed to decode a plan from JSON.
    #[error("failed to decode render plan: {0}")]
    Decode(#[source] serde_json::Error),
}
