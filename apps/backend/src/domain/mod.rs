//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_round;
#[cfg(test)]
mod tests_snapshot_visibility;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, hand_has_suit, is_single_suit};
pub use cards_parsing::parse_card_token;
pub use cards_types::{Card, Rank, Suit};
pub use dealing::Deck;
pub use seed_derivation::{derive_room_seed, master_seed_from_u64};
pub use snapshot::{RoomHeader, SeatPublic, Snapshot};
pub use state::{GameState, MatchRules, Phase, Play, Seat, TeamId};
