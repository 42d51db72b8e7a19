//! Deck integration tests.

use provable_cards::{
    Card, ChaChaShuffle, DECK_SIZE, Deck, DeckError, DeckOptions, ShuffleRequest, ShuffleSource,
};

const CLIENT_SEED: &str = "123";
const SERVER_SEED: &str = "456";

/// Fixed single-deck shuffle used as the generator output for seeds "123"/"456".
const RECORDED: [i64; DECK_SIZE] = [
    8, 50, 51, 0, 44, 39, 27, 33, 36, 3, 37, 22, 4, 15, 26, 14, 12, 1, 35, 11, 16, 47, 19, 41, 23,
    18, 20, 43, 13, 24, 38, 6, 9, 10, 17, 45, 49, 31, 5, 46, 32, 21, 7, 34, 40, 2, 42, 25, 28, 30,
    29, 48,
];

/// Stand-in for the upstream generator: the fixed shuffle for a single deck,
/// the range in order for anything else.
fn recorded_source(_client: &str, _server: &str, min: i64, max: i64) -> Vec<i64> {
    if (min, max) == (0, 51) {
        RECORDED.to_vec()
    } else {
        (min..=max).collect()
    }
}

fn recorded_deck(options: DeckOptions) -> Deck {
    Deck::with_source(options, CLIENT_SEED, SERVER_SEED, &recorded_source).unwrap()
}

#[test]
fn recorded_shuffle_regression() {
    let deck = recorded_deck(DeckOptions::default());
    assert_eq!(deck.cards()[0], 8);
    assert_eq!(deck.cards(), &RECORDED);

    let remaining = deck.remaining_cards();
    assert_eq!(remaining[0].to_string(), "four of clubs");
    assert_eq!(remaining[1].to_string(), "ace of hearts");
    assert_eq!(remaining[3].to_string(), "two of clubs");
    assert_eq!(remaining[51].to_string(), "ace of clubs");
}

#[test]
fn construction_counts() {
    let deck = recorded_deck(DeckOptions::default());
    assert_eq!(deck.cards().len(), DECK_SIZE);
    assert_eq!(deck.remaining_cards().len(), DECK_SIZE);

    let deck = recorded_deck(DeckOptions::default().with_decks(3));
    assert_eq!(deck.cards().len(), 156);
    assert_eq!(deck.remaining_cards().len(), 156);
    assert!(deck.dealt_cards().is_empty());
    assert!(deck.burnt_cards().is_empty());
    assert_eq!(deck.total(), 156);
}

#[test]
fn jokers_take_the_negative_range() {
    let options = DeckOptions::default().with_decks(2).with_jokers(true);
    let deck = recorded_deck(options);
    assert_eq!(deck.total(), 2 * (DECK_SIZE + 2));
    assert_eq!(deck.remaining_cards().iter().filter(|c| c.is_joker()).count(), 4);

    let request = deck.request().unwrap();
    assert_eq!((request.min, request.max), (-4, 103));
    assert_eq!(request.client_seed, CLIENT_SEED);
    assert_eq!(request.server_seed, SERVER_SEED);
}

#[test]
fn remaining_cards_decode_values_in_order() {
    let deck = recorded_deck(DeckOptions::default().with_jokers(true));
    let decoded: Vec<Card> = deck.cards().iter().copied().map(Card::from).collect();
    assert_eq!(deck.remaining_cards(), decoded.as_slice());
}

#[test]
fn deal_moves_every_card_once() {
    let mut deck = recorded_deck(DeckOptions::default());
    let original = deck.remaining_cards().to_vec();

    assert!(deck.dealt_cards().is_empty());
    let first = deck.deal().unwrap();
    assert_eq!(first, original[0]);
    assert_eq!(deck.dealt_cards(), &[first]);
    assert_eq!(deck.remaining_cards().len(), DECK_SIZE - 1);

    while !deck.is_empty() {
        deck.deal().unwrap();
    }

    assert_eq!(deck.dealt_cards(), original.as_slice());
    assert!(deck.burnt_cards().is_empty());
    assert_eq!(deck.deal(), None);
    assert_eq!(deck.dealt_cards().len(), DECK_SIZE);
}

#[test]
fn burn_moves_every_card_once() {
    let mut deck = recorded_deck(DeckOptions::default());
    let original = deck.remaining_cards().to_vec();

    assert!(deck.burnt_cards().is_empty());
    assert_eq!(deck.burn(), Some(original[0]));
    assert_eq!(deck.burnt_cards(), &original[..1]);

    while deck.burn().is_some() {}

    assert_eq!(deck.burnt_cards(), original.as_slice());
    assert!(deck.dealt_cards().is_empty());
    assert_eq!(deck.burn(), None);
}

#[test]
fn partitions_always_add_up() {
    let mut deck = recorded_deck(DeckOptions::default().with_decks(2).with_jokers(true));
    let total = deck.total();

    let mut step = 0_usize;
    loop {
        let moved = if step % 3 == 0 { deck.burn() } else { deck.deal() };
        assert_eq!(
            deck.remaining_cards().len() + deck.dealt_cards().len() + deck.burnt_cards().len(),
            total
        );
        if moved.is_none() {
            break;
        }
        step += 1;
    }

    assert_eq!(step, total);
    assert_eq!(deck.burnt_cards().len(), total.div_ceil(3));
    assert_eq!(deck.deal(), None);
    assert_eq!(deck.burn(), None);
}

#[test]
fn zero_decks_is_rejected() {
    let options = DeckOptions::default().with_decks(0);
    assert_eq!(
        Deck::new(options, CLIENT_SEED, SERVER_SEED).unwrap_err(),
        DeckError::NoDecks
    );
}

#[test]
fn invalid_source_output_is_rejected() {
    let short = |_: &str, _: &str, min: i64, max: i64| (min..max).collect::<Vec<_>>();
    let duplicated = |_: &str, _: &str, min: i64, max: i64| {
        let mut values: Vec<i64> = (min..=max).collect();
        values[0] = values[1];
        values
    };
    let shifted = |_: &str, _: &str, min: i64, max: i64| (min + 1..=max + 1).collect::<Vec<_>>();

    let expected = DeckError::NotAPermutation { min: 0, max: 51 };
    let options = DeckOptions::default();
    assert_eq!(
        Deck::with_source(options, CLIENT_SEED, SERVER_SEED, &short).unwrap_err(),
        expected
    );
    assert_eq!(
        Deck::with_source(options, CLIENT_SEED, SERVER_SEED, &duplicated).unwrap_err(),
        expected
    );
    assert_eq!(
        Deck::with_source(options, CLIENT_SEED, SERVER_SEED, &shifted).unwrap_err(),
        expected
    );
}

#[test]
fn explicit_values_decode_without_checks() {
    let mut deck = Deck::from_values(vec![-1, 0, 51, 52, 1_000]);
    assert!(deck.request().is_none());
    assert_eq!(deck.cards(), &[-1, 0, 51, 52, 1_000]);
    assert_eq!(deck.len(), 5);

    let joker = deck.deal().unwrap();
    assert!(joker.is_joker());
    assert_eq!(deck.burn().unwrap().to_string(), "two of clubs");
    assert_eq!(deck.deal().unwrap().to_string(), "ace of spades");
    assert_eq!(deck.remaining_cards().len(), 2);
    assert_eq!(deck.cards().len(), 5);
}

#[test]
fn chacha_shuffle_is_reproducible() {
    let options = DeckOptions::default().with_decks(2).with_jokers(true);
    let first = Deck::new(options, CLIENT_SEED, SERVER_SEED).unwrap();
    let second = Deck::new(options, CLIENT_SEED, SERVER_SEED).unwrap();
    assert_eq!(first.cards(), second.cards());

    let other = Deck::new(options, CLIENT_SEED, "789").unwrap();
    assert_ne!(first.cards(), other.cards());

    let request = first.request().unwrap();
    assert!(request.is_permutation(first.cards()));
    assert_eq!(request.replay(&ChaChaShuffle), first.cards());
}

#[test]
fn seed_order_matters() {
    assert_ne!(ChaChaShuffle::seed("a", "b"), ChaChaShuffle::seed("b", "a"));
    assert_ne!(ChaChaShuffle::seed("ab", ""), ChaChaShuffle::seed("a", "b"));
}

#[test]
fn seed_boundary_is_unambiguous() {
    assert_ne!(ChaChaShuffle::seed("a:b", "c"), ChaChaShuffle::seed("b", "c:a"));
    assert_ne!(ChaChaShuffle::seed("", "ab"), ChaChaShuffle::seed("b", "a"));
    assert_ne!(ChaChaShuffle::seed(":", ""), ChaChaShuffle::seed("", ":"));

    let options = DeckOptions::default();
    let first = Deck::new(options, "a:b", "c").unwrap();
    let second = Deck::new(options, "b", "c:a").unwrap();
    assert_ne!(first.cards(), second.cards());
}

#[test]
fn permutation_check() {
    let request = ShuffleRequest::new(CLIENT_SEED, SERVER_SEED, -2, 3);
    assert!(request.is_permutation(&[3, -2, 0, 1, -1, 2]));
    assert!(!request.is_permutation(&[3, -2, 0, 1, -1]));
    assert!(!request.is_permutation(&[3, -2, 0, 1, -1, 4]));
    assert!(!request.is_permutation(&[3, -2, 0, 1, 1, 2]));
    assert_eq!(request.replay(&recorded_source), vec![-2, -1, 0, 1, 2, 3]);
    assert_eq!(ChaChaShuffle.generate("x", "y", 5, 5), vec![5]);
}

#[test]
fn largest_deck_count() {
    let options = DeckOptions::default().with_decks(u8::MAX).with_jokers(true);
    assert_eq!(options.card_count(), 255 * (DECK_SIZE + 2));
    assert_eq!(options.value_range(), -510..=13_259);
}
