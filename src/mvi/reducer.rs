use super::intent::Intent;
use super::state::ViewState;

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: ViewState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
