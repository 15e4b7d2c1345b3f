// crates/kryon-core/src/lib.rs
pub mod item;
pub mod layout_units;

pub use item::*;
pub use layout_units::*;

#[derive(Debug, thiserror::Error)]
pub enum KryonError {
    #[error("Item {index} reported an invalid measured size: {width}x{height}")]
    InvalidMeasurement {
        index: usize,
        width: f32,
        height: f32,
    },

    #[error("Requested column count must be at least 1, got {0}")]
    InvalidColumnCount(u32),

    #[error("Invalid layout dimension: {0}")]
    InvalidDimension(String),
}

pub type Result<T> = std::result::Result<T, KryonError>;
