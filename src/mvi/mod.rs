//! Model-View-Intent primitives shared by the notes store and the UI dialogs.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View / Persistence
//!    ↑                                   │
//!    └───────────────────────────────────┘
//! ```
//!
//! A reducer is the only place a state transition happens. Anything impure
//! (clocks, id generation, randomness, I/O) is resolved before the intent is
//! built or after the new state is produced.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
