//! Memorandum: match each word card with its meaning card

pub mod actions;
pub mod pairs;
pub mod reducer;
pub mod session;
pub mod state;

pub use actions::MemorandumAction;
pub use pairs::{build_pairs, build_pairs_with_validation, deal_cards, PairsBuild};
pub use reducer::reduce;
pub use session::MemorandumSession;
pub use state::{Card, CardKind, MemorandumState, MemorandumStatus, Pair};
