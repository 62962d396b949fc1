/// Marker trait for state values driven by a [`Reducer`](super::Reducer).
///
/// `PartialEq` lets callers skip notifications when a reduce was a no-op;
/// `Default` lets dispatchers `mem::take` the current value.
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}
