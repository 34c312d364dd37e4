//! Configuration errors for scroll-reactive sections.
//!
//! Everything here is raised while a section is being compiled. Frame-time
//! arithmetic never fails; out-of-range inputs are clamped instead.

/// Errors produced while validating a section's configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("phase `{name}` has an empty window: start {start} must be below end {end}")]
    EmptyPhase {
        name: &'static str,
        start: f32,
        end: f32,
    },

    #[error("breakpoint {index} does not strictly increase in input")]
    UnsortedBreakpoints { index: usize },

    #[error("breakpoint list needs at least 2 entries, got {len}")]
    TooFewBreakpoints { len: usize },

    #[error("`{field}` must be finite")]
    NonFinite { field: &'static str },

    #[error("`{field}` is out of range: {value}")]
    InvalidValue { field: &'static str, value: f32 },

    #[error("unknown option `{key}`")]
    UnknownOption { key: String },

    #[error("option `{key}` cannot parse `{raw}`")]
    Unparsable { key: String, raw: String },
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ConfigError>;
