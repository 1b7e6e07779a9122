//! Image processing for favicon generation.
//!
//! # Modules
//!
//! - [`key`]: near-white keying to transparency
//! - [`crop`]: content bounding box and crop
//! - [`resize`]: proportional thumbnails and square centering
//! - [`mask`]: rounded-corner alpha masks
//! - [`export`]: the full pipeline and PNG output

pub mod crop;
pub mod export;
pub mod key;
pub mod mask;
pub mod resize;

pub use export::{ExportKind, generate};
pub use mask::MaskMode;
