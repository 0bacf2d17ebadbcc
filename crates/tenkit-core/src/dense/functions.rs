//! Elementwise arithmetic and comparison between tensors
//!
//! Operands must have identical shapes; there is no broadcasting. The
//! operator forms panic on a mismatch, the `checked_*` forms return
//! [`TensorError::ShapeMismatch`].

use super::types::DenseND;
use crate::error::{TensorError, TensorResult};
use scirs2_core::ndarray_ext::{Array, IxDyn};
use scirs2_core::numeric::{Float, Num};

pub(crate) fn ensure_same_shape<T>(
    lhs: &DenseND<T>,
    rhs: &DenseND<T>,
    operation: &str,
) -> TensorResult<()>
where
    T: Clone + Num,
{
    if lhs.same_shape(rhs) {
        Ok(())
    } else {
        Err(TensorError::ShapeMismatch(format!(
            "{}: {:?} vs {:?}",
            operation,
            lhs.shape(),
            rhs.shape()
        )))
    }
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Elementwise sum; keeps the left operand's mode names and state.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::ShapeMismatch`] unless both shapes are equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenkit_core::DenseND;
    ///
    /// let a = DenseND::<f64>::ones(&[2, 2]);
    /// let b = DenseND::<f64>::ones(&[2, 2]);
    /// assert_eq!(a.checked_add(&b).unwrap()[&[0, 1]], 2.0);
    ///
    /// let c = DenseND::<f64>::ones(&[4]);
    /// assert!(a.checked_add(&c).is_err());
    /// ```
    pub fn checked_add(&self, other: &Self) -> TensorResult<Self> {
        ensure_same_shape(self, other, "add")?;
        Ok(self.with_data(&self.data + &other.data))
    }

    /// Elementwise difference; keeps the left operand's mode names and state.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::ShapeMismatch`] unless both shapes are equal.
    pub fn checked_sub(&self, other: &Self) -> TensorResult<Self> {
        ensure_same_shape(self, other, "sub")?;
        Ok(self.with_data(&self.data - &other.data))
    }

    /// Whether both tensors have the same shape and every pair of elements
    /// differs by at most `tol`. Names and fold state are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenkit_core::DenseND;
    ///
    /// let a = DenseND::from_vec(vec![1.0, 2.0], &[2]).unwrap();
    /// let b = DenseND::from_vec(vec![1.0, 2.0 + 1e-12], &[2]).unwrap();
    /// assert!(a.approx_eq(&b, 1e-9));
    /// assert!(!a.approx_eq(&b, 1e-15));
    /// ```
    pub fn approx_eq(&self, other: &Self, tol: T) -> bool
    where
        T: Float,
    {
        self.same_shape(other)
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() <= tol)
    }

    fn with_data(&self, data: Array<T, IxDyn>) -> Self {
        DenseND {
            data,
            mode_names: self.mode_names.clone(),
            state: self.state.clone(),
        }
    }
}

impl<'b, T> std::ops::Add<&'b DenseND<T>> for &DenseND<T>
where
    T: Clone + Num,
{
    type Output = DenseND<T>;
    fn add(self, rhs: &'b DenseND<T>) -> Self::Output {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "Shapes must match for addition"
        );
        self.with_data(&self.data + &rhs.data)
    }
}

impl<'b, T> std::ops::Sub<&'b DenseND<T>> for &DenseND<T>
where
    T: Clone + Num,
{
    type Output = DenseND<T>;
    fn sub(self, rhs: &'b DenseND<T>) -> Self::Output {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "Shapes must match for subtraction"
        );
        self.with_data(&self.data - &rhs.data)
    }
}
