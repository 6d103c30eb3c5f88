use super::cards_types::Rank;

pub const PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 52;

pub const DEFAULT_WIN_THRESHOLD: u16 = 6;
pub const DEFAULT_HAND_SIZE: u8 = 6;

/// Cards dealt to each seat on every go-again pass.
pub const GO_AGAIN_CARDS: usize = 3;

pub const GIVE_ONE_POINTS: u16 = 1;
pub const HIGH_POINTS: u16 = 1;
pub const LOW_POINTS: u16 = 1;
pub const JACK_POINTS: u16 = 1;
pub const HANG_JACK_POINTS: u16 = 3;
pub const GAME_POINTS: u16 = 1;

/// Points the dealer's team earns for the rank of a flipped trump card.
pub const fn kick_points(rank: Rank) -> u16 {
    match rank {
        Rank::Jack => 3,
        Rank::Six => 2,
        Rank::Ace => 1,
        _ => 0,
    }
}

/// A hand size is playable when four hands plus the trump flip fit in one deck.
pub const fn valid_hand_size(hand_size: u8) -> bool {
    let needed = PLAYERS * hand_size as usize + 1;
    hand_size >= 1 && needed <= DECK_SIZE
}

/// Cards a full go-again pass consumes: three per seat plus the new flip.
pub const fn go_again_pass_cards() -> usize {
    PLAYERS * GO_AGAIN_CARDS + 1
}
