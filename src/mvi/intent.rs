/// Marker trait for intents: user actions such as "create note" or
/// "confirm delete", fully resolved so that reducing them is deterministic.
pub trait Intent: Send + 'static {}
