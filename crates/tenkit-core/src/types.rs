//! Core type definitions for tenkit tensors.
//!
//! - Type aliases for tensor dimensions ([`Mode`], [`Order`], [`Shape`])
//! - Default mode naming ([`default_mode_name`], [`default_mode_names`])
//!
//! # Examples
//!
//! ```
//! use tenkit_core::{default_mode_names, DenseND};
//!
//! let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
//! assert_eq!(tensor.mode_names(), default_mode_names(3).as_slice());
//! assert_eq!(tensor.mode_names()[1], "mode-1");
//! ```

use smallvec::SmallVec;

// Re-export the actual DenseND implementation
pub use crate::dense::DenseND;

/// Type alias for a mode (axis) index.
///
/// Zero-indexed (0 is the first mode).
///
/// # Examples
///
/// ```
/// use tenkit_core::{DenseND, Mode};
///
/// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
/// let mode: Mode = 1;
/// let unfolded = tensor.unfold(mode).unwrap();
/// assert_eq!(unfolded.shape(), &[3, 8]);
/// ```
pub type Mode = usize;

/// Type alias for the order (number of modes) of a tensor.
pub type Order = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Optimized for tensors with up to 6 modes, falling back to the heap for
/// higher orders.
pub type Shape = SmallVec<[usize; 6]>;

/// Label given to mode `mode` when the caller supplies none.
///
/// # Examples
///
/// ```
/// use tenkit_core::default_mode_name;
///
/// assert_eq!(default_mode_name(0), "mode-0");
/// ```
pub fn default_mode_name(mode: Mode) -> String {
    format!("mode-{}", mode)
}

/// Default labels for every mode of an order-`order` tensor.
pub fn default_mode_names(order: Order) -> Vec<String> {
    (0..order).map(default_mode_name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_names() {
        assert_eq!(default_mode_names(0), Vec::<String>::new());
        assert_eq!(default_mode_names(2), vec!["mode-0", "mode-1"]);
    }
}
