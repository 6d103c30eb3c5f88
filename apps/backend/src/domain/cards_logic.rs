//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// True when every card in a non-empty hand shares one suit.
pub fn is_single_suit(hand: &[Card]) -> bool {
    match hand.first() {
        Some(first) => hand.iter().all(|c| c.suit == first.suit),
        None => false,
    }
}

/// Does `a` beat `b` in a trick with call suit `call` and trump suit `trump`?
pub fn card_beats(a: Card, b: Card, call: Suit, trump: Suit) -> bool {
    let a_trump = a.suit == trump;
    let b_trump = b.suit == trump;
    if a_trump && !b_trump {
        return true;
    }
    if b_trump && !a_trump {
        return false;
    }
    if a_trump && b_trump {
        return a.rank > b.rank;
    }
    // Neither is trump: only cards following the call suit count
    let a_follows = a.suit == call;
    let b_follows = b.suit == call;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    if a_follows && b_follows {
        return a.rank > b.rank;
    }
    false
}
