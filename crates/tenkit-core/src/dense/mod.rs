//! Dense tensor implementation and operations
//!
//! The tensor type lives in [`types`]; operations are grouped by concern in
//! private sub-modules that each add an `impl` block.

// Core type definition
pub mod types;

// Unfold bookkeeping
pub mod state;

// Operation modules (organized by functionality)
mod describe;
mod product;
mod shape_ops;

// Supporting modules
#[cfg(feature = "serde")]
mod record;
pub mod densend_traits;
pub(crate) mod functions;

// Re-export the main types
pub use state::UnfoldState;
pub use types::DenseND;
