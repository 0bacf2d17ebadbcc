//! Flat serialized form of [`DenseND`].
//!
//! The array is stored as its shape plus the row-major element sequence, so
//! no serde support is needed from the array backend. Deserialization goes
//! through the validating constructor.

use super::state::UnfoldState;
use super::types::DenseND;
use crate::error::TensorError;
use scirs2_core::numeric::Num;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub(crate) struct DenseRecord<T> {
    shape: Vec<usize>,
    data: Vec<T>,
    mode_names: Vec<String>,
    state: Option<UnfoldState>,
}

impl<T: Clone> From<DenseND<T>> for DenseRecord<T> {
    fn from(tensor: DenseND<T>) -> Self {
        Self {
            shape: tensor.data.shape().to_vec(),
            data: tensor.data.iter().cloned().collect(),
            mode_names: tensor.mode_names,
            state: tensor.state,
        }
    }
}

impl<T: Clone + Num> TryFrom<DenseRecord<T>> for DenseND<T> {
    type Error = TensorError;

    fn try_from(record: DenseRecord<T>) -> Result<Self, Self::Error> {
        if record.mode_names.len() != record.shape.len() {
            return Err(TensorError::ShapeMismatch(format!(
                "{} mode names for {} modes",
                record.mode_names.len(),
                record.shape.len()
            )));
        }
        if let Some(state) = &record.state {
            let folded_size: usize = state.folded_shape().iter().product();
            let size: usize = record.shape.iter().product();
            if folded_size != size {
                return Err(TensorError::ShapeMismatch(format!(
                    "Unfold state folds {} elements into shape {:?}",
                    size,
                    state.folded_shape()
                )));
            }
        }
        let mut tensor = DenseND::from_vec(record.data, &record.shape)?;
        tensor.mode_names = record.mode_names;
        tensor.state = record.state;
        Ok(tensor)
    }
}
