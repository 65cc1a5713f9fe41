use thiserror::Error;

/// Failure of the asset batch. Any single failed load fails the whole batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// One asset could not be loaded from its resolved URL.
    #[error("failed to load asset `{id}` from {url}: {reason}")]
    Asset {
        id: String,
        url: String,
        reason: String,
    },

    /// A lookup asked for an identifier the table does not hold.
    #[error("asset `{0}` is not in the loaded table")]
    Missing(String),
}

/// Draw configuration rejected at start-up.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("visible_count must be at least 1")]
    NoVisibleBalls,

    #[error("visible_count {visible} exceeds range_size {range}")]
    CountExceedsRange { visible: usize, range: u32 },

    #[error("ball size must be positive, got {width}x{height}")]
    BallSize { width: f32, height: f32 },

    #[error("travel_ms must be greater than zero")]
    ZeroTravel,
}
