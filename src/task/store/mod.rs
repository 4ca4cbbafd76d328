//! Task store: the action set, the list state and the reducer.

mod action;
mod error;
mod reducer;
mod state;

pub use action::TaskAction;
pub use error::TaskStoreError;
pub use reducer::reduce;
pub use state::TaskListState;
