//! Dense tensor type definition and basic operations
//!
//! This module defines the core `DenseND<T>` type and provides creation,
//! accessor and mode-name methods. Unfolding, products and descriptions live
//! in sibling modules.

use super::state::UnfoldState;
use crate::error::{TensorError, TensorResult};
use crate::types::{default_mode_name, default_mode_names, Mode, Shape};
use scirs2_core::ndarray_ext::{Array, ArrayView, ArrayViewMut, IxDyn};
use scirs2_core::numeric::{Float, Num};

/// Dense N-dimensional tensor backed by scirs2_core's ndarray
///
/// Wraps a dynamic-dimensionality array together with one display name per
/// mode and the bookkeeping needed to fold an unfolded tensor back.
///
/// # Type Parameters
///
/// * `T` - The element type (typically `f32` or `f64`)
///
/// # Memory Layout
///
/// Raw buffers are read in C-contiguous (row-major) order, and every
/// operation in this crate produces standard-layout arrays.
///
/// # Thread Safety
///
/// A `DenseND` owns its buffer exclusively. Shared references may be read
/// from many threads at once; the `*_inplace` methods need `&mut self`, so a
/// single writer is enforced at compile time.
///
/// # Examples
///
/// ```
/// use tenkit_core::dense::DenseND;
///
/// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.order(), 3);
/// assert_eq!(tensor.size(), 24);
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        into = "super::record::DenseRecord<T>",
        try_from = "super::record::DenseRecord<T>",
        bound(
            serialize = "T: Clone + serde::Serialize",
            deserialize = "T: Clone + Num + serde::Deserialize<'de>"
        )
    )
)]
pub struct DenseND<T> {
    /// Underlying ndarray storage (via scirs2_core)
    pub(crate) data: Array<T, IxDyn>,
    /// One label per current mode
    pub(crate) mode_names: Vec<String>,
    /// Present while the tensor is unfolded
    pub(crate) state: Option<UnfoldState>,
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Create a tensor from an existing ndarray
    ///
    /// Modes get the default names `mode-0`, `mode-1`, ...
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::Array;
    /// use tenkit_core::dense::DenseND;
    ///
    /// let arr = Array::<f64, _>::zeros(vec![2, 3]);
    /// let tensor = DenseND::from_array(arr);
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// ```
    pub fn from_array(array: Array<T, IxDyn>) -> Self {
        let mode_names = default_mode_names(array.ndim());
        Self {
            data: array.as_standard_layout().into_owned(),
            mode_names,
            state: None,
        }
    }

    /// Create a tensor from a vector with given shape
    ///
    /// # Arguments
    ///
    /// * `vec` - Flattened data in row-major order
    /// * `shape` - Target shape
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::InvalidShape`] if `vec.len()` is not the
    /// product of `shape`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenkit_core::dense::DenseND;
    ///
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let tensor = DenseND::from_vec(data, &[2, 3]).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3]);
    ///
    /// assert!(DenseND::from_vec(vec![1.0, 2.0], &[3]).is_err());
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> TensorResult<Self> {
        let total: usize = shape.iter().product();
        if vec.len() != total {
            return Err(TensorError::InvalidShape(format!(
                "Shape {:?} requires {} elements, but got {}",
                shape,
                total,
                vec.len()
            )));
        }
        let array = Array::from_shape_vec(IxDyn(shape), vec)
            .map_err(|e| TensorError::InvalidShape(e.to_string()))?;
        Ok(Self::from_array(array))
    }

    /// Create a tensor filled with a specific value
    ///
    /// # Examples
    ///
    /// ```
    /// use tenkit_core::dense::DenseND;
    ///
    /// let tensor = DenseND::from_elem(&[2, 3], 5.0);
    /// assert_eq!(tensor[&[1, 2]], 5.0);
    /// ```
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        Self::from_array(Array::from_elem(IxDyn(shape), value))
    }

    /// Create a tensor of zeros
    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_array(Array::zeros(IxDyn(shape)))
    }

    /// Create a tensor of ones
    pub fn ones(shape: &[usize]) -> Self {
        Self::from_array(Array::ones(IxDyn(shape)))
    }

    /// Replace all mode names at once (builder form).
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::ShapeMismatch`] unless exactly one name per
    /// mode is given.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenkit_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[2, 3])
    ///     .with_mode_names(vec!["time", "channel"])
    ///     .unwrap();
    /// assert_eq!(tensor.mode_names(), &["time", "channel"]);
    /// ```
    pub fn with_mode_names<S: Into<String>>(mut self, names: Vec<S>) -> TensorResult<Self> {
        if names.len() != self.order() {
            return Err(TensorError::ShapeMismatch(format!(
                "Expected {} mode names, got {}",
                self.order(),
                names.len()
            )));
        }
        self.mode_names = names.into_iter().map(Into::into).collect();
        Ok(self)
    }

    /// Number of modes
    pub fn order(&self) -> usize {
        self.data.ndim()
    }

    /// Size of every mode, in mode order
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Total number of elements, the product of [`shape`](Self::shape)
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Get a copy of the shape as a [`Shape`].
    pub fn shape_vec(&self) -> Shape {
        self.shape().iter().copied().collect()
    }

    /// Label of every current mode
    pub fn mode_names(&self) -> &[String] {
        &self.mode_names
    }

    /// Rename selected modes.
    ///
    /// Every index is validated before any name changes.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::InvalidMode`] if an index is not a mode of
    /// this tensor.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenkit_core::DenseND;
    ///
    /// let mut tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
    /// tensor.set_mode_names([(0, "country"), (2, "year")]).unwrap();
    /// assert_eq!(tensor.mode_names(), &["country", "mode-1", "year"]);
    ///
    /// assert!(tensor.set_mode_names([(3, "extra")]).is_err());
    /// ```
    pub fn set_mode_names<I, S>(&mut self, names: I) -> TensorResult<&mut Self>
    where
        I: IntoIterator<Item = (Mode, S)>,
        S: Into<String>,
    {
        let order = self.order();
        let names: Vec<(Mode, String)> = names
            .into_iter()
            .map(|(mode, name)| (mode, name.into()))
            .collect();

        if let Some(&(mode, _)) = names.iter().find(|(mode, _)| *mode >= order) {
            return Err(TensorError::invalid_mode(
                mode,
                order,
                "Cannot name a mode the tensor does not have",
            ));
        }

        for (mode, name) in names {
            self.mode_names[mode] = name;
        }
        Ok(self)
    }

    /// Restore the default `mode-k` labels for every current mode
    pub fn reset_mode_names(&mut self) -> &mut Self {
        for (mode, name) in self.mode_names.iter_mut().enumerate() {
            *name = default_mode_name(mode);
        }
        self
    }

    /// Whether the tensor is in its folded (normal) state
    pub fn is_folded(&self) -> bool {
        self.state.is_none()
    }

    /// Unfold bookkeeping, present only while the tensor is unfolded
    pub fn unfold_state(&self) -> Option<&UnfoldState> {
        self.state.as_ref()
    }

    /// Shape the tensor has once folded; equals [`shape`](Self::shape) when
    /// already folded.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenkit_core::DenseND;
    ///
    /// let mut tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
    /// tensor.unfold_inplace(1).unwrap();
    /// assert_eq!(tensor.shape(), &[3, 8]);
    /// assert_eq!(tensor.folded_shape().as_slice(), &[2, 3, 4]);
    /// ```
    pub fn folded_shape(&self) -> Shape {
        match &self.state {
            Some(state) => state.folded_shape.clone(),
            None => self.shape_vec(),
        }
    }

    /// Get an immutable reference to the underlying ndarray
    pub fn as_array(&self) -> &Array<T, IxDyn> {
        &self.data
    }

    /// Get a mutable reference to the underlying ndarray
    ///
    /// The shape cannot change through this reference, so the unfold state
    /// stays consistent.
    pub fn as_array_mut(&mut self) -> &mut Array<T, IxDyn> {
        &mut self.data
    }

    /// Consume the tensor and return the underlying array
    pub fn into_array(self) -> Array<T, IxDyn> {
        self.data
    }

    /// Get an immutable view of the tensor
    pub fn view(&self) -> ArrayView<'_, T, IxDyn> {
        self.data.view()
    }

    /// Get a mutable view of the tensor
    pub fn view_mut(&mut self) -> ArrayViewMut<'_, T, IxDyn> {
        self.data.view_mut()
    }

    /// Convert the tensor to a flat vector in row-major order
    ///
    /// # Examples
    ///
    /// ```
    /// use tenkit_core::dense::DenseND;
    ///
    /// let tensor = DenseND::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(tensor.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().cloned().collect()
    }

    /// Create an iterator over all elements in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Check if two tensors have the same shape
    pub fn same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    /// Frobenius norm: square root of the sum of squared elements.
    ///
    /// Unfolding only reorders elements, so the norm does not depend on the
    /// fold state.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenkit_core::dense::DenseND;
    ///
    /// let tensor = DenseND::<f64>::ones(&[2, 3]);
    /// assert!((tensor.frob_norm() - 6.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frob_norm(&self) -> T
    where
        T: Float,
    {
        // Sum squares relative to the largest magnitude so huge or tiny
        // entries neither overflow nor underflow.
        let scale = self.data.iter().fold(T::zero(), |m, &x| m.max(x.abs()));
        if scale == T::zero() || !scale.is_finite() {
            return scale;
        }
        let sum = self.data.iter().fold(T::zero(), |acc, &x| {
            let r = x / scale;
            acc + r * r
        });
        scale * sum.sqrt()
    }
}
