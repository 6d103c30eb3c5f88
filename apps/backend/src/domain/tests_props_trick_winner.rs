/// Property-based tests for trick resolution
use proptest::prelude::*;

use crate::domain::tricks::trick_winner;
use crate::domain::{card_beats, test_gens, test_prelude, Rank};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: trump beats non-trump; the winner is the highest trump if
    /// any was played, else the highest card of the call suit.
    #[test]
    fn prop_winner_is_highest_trump_or_call(
        plays in test_gens::complete_trick(),
        trump in test_gens::suit(),
    ) {
        let winner = trick_winner(&plays, Some(trump)).unwrap();
        prop_assert!(plays.contains(&winner));

        let call = plays[0].card.suit;
        let trumps: Vec<_> = plays.iter().filter(|p| p.card.suit == trump).collect();
        if let Some(top) = trumps.iter().max_by_key(|p| p.card.rank) {
            prop_assert_eq!(winner, **top);
        } else {
            prop_assert_eq!(winner.card.suit, call);
            for p in plays.iter().filter(|p| p.card.suit == call) {
                prop_assert!(winner.card.rank >= p.card.rank);
            }
        }
    }

    /// Property: the winner's card is beaten by no other card in the trick.
    #[test]
    fn prop_winner_unbeaten(
        plays in test_gens::complete_trick(),
        trump in test_gens::suit(),
    ) {
        let winner = trick_winner(&plays, Some(trump)).unwrap();
        let call = plays[0].card.suit;
        for p in &plays {
            prop_assert!(!card_beats(p.card, winner.card, call, trump));
        }
    }

    /// Property: the winner does not depend on which seat led.
    #[test]
    fn prop_winner_card_independent_of_seats(
        plays in test_gens::complete_trick(),
        trump in test_gens::suit(),
        shift in 0u8..4,
    ) {
        let rotated: Vec<_> = plays
            .iter()
            .map(|p| crate::domain::Play { seat: (p.seat + shift) % 4, card: p.card })
            .collect();
        let a = trick_winner(&plays, Some(trump)).unwrap();
        let b = trick_winner(&rotated, Some(trump)).unwrap();
        prop_assert_eq!(a.card, b.card);
    }
}

#[test]
fn ranks_are_totally_ordered() {
    for pair in Rank::ALL.windows(2) {
        assert!(pair[0] < pair[1]);
        assert!(pair[0].value() < pair[1].value());
    }
}
