//! Interactive deck dealing example.

use std::io::{self, Write};

use provable_cards::{Card, Deck, DeckOptions, Face, Suit};

fn main() {
    println!("Provable deck example (type 'q' to quit)");

    let client_seed = prompt_line("Client seed: ");
    let server_seed = prompt_line("Server seed: ");
    let Some(decks) = prompt_u8("Number of decks (1-8): ") else {
        return;
    };
    let jokers = matches!(prompt_line("Include jokers? (y/n): ").as_str(), "y" | "yes");

    let options = DeckOptions::default().with_decks(decks).with_jokers(jokers);
    let mut deck = match Deck::new(options, &client_seed, &server_seed) {
        Ok(deck) => deck,
        Err(err) => {
            println!("Deck error: {err}");
            return;
        }
    };

    loop {
        println!("\nDeck: {} of {} cards remaining", deck.len(), deck.total());
        println!("Dealt: {}", format_cards(deck.dealt_cards()));
        println!("Burnt: {}", format_cards(deck.burnt_cards()));

        let drawn = match prompt_line("Action (d = deal, b = burn, q = quit): ").as_str() {
            "d" | "deal" => deck.deal(),
            "b" | "burn" => deck.burn(),
            "q" | "quit" => break,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match drawn {
            Some(card) => println!("{} ({card}, worth {})", format_card(&card), card.value()),
            None => {
                println!("The deck is empty.");
                break;
            }
        }
    }

    let dealt_total: u32 = deck.dealt_cards().iter().map(|c| u32::from(c.value())).sum();
    println!("Dealt value total: {dealt_total}");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_u8(prompt: &str) -> Option<u8> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u8>() {
            Ok(value @ 1..=8) => return Some(value),
            _ => println!("Please enter a number from 1 to 8."),
        }
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(none)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit() {
        Suit::Heart => ("H", "31"),
        Suit::Diamond => ("D", "31"),
        Suit::Club => ("C", "32"),
        Suit::Spade => ("S", "34"),
    };

    let rank = match card.face() {
        Face::Joker => return colorize("JK", "35"),
        Face::Jack => "J".to_string(),
        Face::Queen => "Q".to_string(),
        Face::King => "K".to_string(),
        Face::Ace => "A".to_string(),
        face => face.id().to_string(),
    };

    let rank = if card.is_royalty() || card.is_ace() {
        colorize(&rank, color_code)
    } else {
        rank
    };
    format!("{rank}{}", colorize(suit, color_code))
}
