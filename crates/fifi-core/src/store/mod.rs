//! Application state store
//!
//! A reducer-style store: the state is a plain value, transitions are named
//! [`Action`]s, and [`apply`] is the only code that computes a new state.
//! [`Store`] runs the single writer task; [`StoreHandle`] is how everything
//! else talks to it.

mod action;
mod handle;
mod reducer;
mod state;

pub use action::{Action, CategoryPatch, GoalPatch, ProfilePatch, SpendingPatch};
pub use handle::{Producer, Store, StoreHandle};
pub use reducer::apply;
pub use state::AppState;
