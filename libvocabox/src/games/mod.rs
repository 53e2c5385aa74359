//! Word mini-games
//!
//! Each game follows the same layout:
//! - `actions`: what can happen
//! - `state`: what is true right now, plus read-only selectors
//! - `reducer`: pure `(State, Action) -> State` with an explicit transition table
//! - `session`: owns the word pool, the RNG and the state; resolves randomness
//!   and timestamps, then dispatches to the reducer
//!
//! Actions that do not apply in the current status are ignored.

pub mod hangman;
pub mod memorandum;
pub mod quiz;
