//! Forward-pass trace consumed by backpropagation.
//!
//! Slot 0 holds the input column. Slot `i + 1` is recorded as the raw product
//! of layer `i` and is then mutated in place through the handle returned by
//! [`Trace::record`], so once the forward pass finishes it holds the
//! activated output of that layer.
//!
//! The backward pass pops slots from the end. Each popped slot is turned into
//! that layer's gradient in place, so slots are consumed exactly once and in
//! strictly decreasing order.

use crate::matrix::Matrix;

#[derive(Debug, Clone)]
pub(crate) struct Trace {
    slots: Vec<Matrix>,
}

impl Trace {
    /// Starts a trace with the network input in slot 0.
    pub(crate) fn new(input: Matrix) -> Self {
        Self { slots: vec![input] }
    }

    /// The most recently recorded slot.
    pub(crate) fn last(&self) -> &Matrix {
        &self.slots[self.slots.len() - 1]
    }

    /// Stores `matrix` and returns a mutable handle to the stored slot.
    pub(crate) fn record(&mut self, matrix: Matrix) -> &mut Matrix {
        self.slots.push(matrix);
        let slot = self.slots.len() - 1;
        &mut self.slots[slot]
    }

    /// Removes the last layer output, returning its layer index, the popped
    /// matrix, and the slot that fed that layer.
    ///
    /// Returns `None` once only the input remains.
    pub(crate) fn pop_layer_output(&mut self) -> Option<(usize, Matrix, &Matrix)> {
        if self.slots.len() < 2 {
            return None;
        }
        let output = self.slots.pop()?;
        let layer = self.slots.len() - 1;
        Some((layer, output, &self.slots[layer]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_returns_handle_to_stored_slot() {
        let mut trace = Trace::new(Matrix::from_slice(&[1.0]));

        let stored = trace.record(Matrix::from_slice(&[2.0, 3.0]));
        stored.add_scalar(1.0).map_in_place(|x| x * 10.0);

        assert_eq!(trace.last().to_vec(), vec![30.0, 40.0]);

        let (layer, output, input) = trace.pop_layer_output().unwrap();
        assert_eq!(layer, 0);
        assert_eq!(output.to_vec(), vec![30.0, 40.0]);
        assert_eq!(input.to_vec(), vec![1.0]);
    }

    #[test]
    fn test_pop_layer_output_in_decreasing_order() {
        let mut trace = Trace::new(Matrix::from_slice(&[0.0]));
        trace.record(Matrix::from_slice(&[1.0]));
        trace.record(Matrix::from_slice(&[2.0]));

        let (layer, output, previous) = trace.pop_layer_output().unwrap();
        assert_eq!(layer, 1);
        assert_eq!(output.to_vec(), vec![2.0]);
        assert_eq!(previous.to_vec(), vec![1.0]);

        let (layer, output, previous) = trace.pop_layer_output().unwrap();
        assert_eq!(layer, 0);
        assert_eq!(output.to_vec(), vec![1.0]);
        assert_eq!(previous.to_vec(), vec![0.0]);

        assert!(trace.pop_layer_output().is_none());
        assert_eq!(trace.last().to_vec(), vec![0.0]);
    }
}
