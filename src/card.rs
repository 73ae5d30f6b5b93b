//! Card types, themes, and deck construction.

use alloc::vec::Vec;
use core::fmt;

/// Number of cards on the board for every theme.
pub const DECK_SIZE: usize = 52;

/// Number of pairs in a full deck.
pub const PAIR_COUNT: u8 = (DECK_SIZE / 2) as u8;

const SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

const RANK_LABELS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

const ANIMALS: [&str; PAIR_COUNT as usize] = [
    "cat", "dog", "rabbit", "fox", "bear", "panda", "koala", "tiger", "lion", "cow", "pig",
    "frog", "monkey", "chicken", "penguin", "owl", "duck", "horse", "unicorn", "bee", "snail",
    "turtle", "snake", "octopus", "whale", "dolphin",
];

const ALPHABET: [&str; PAIR_COUNT as usize] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

const VEHICLES: [&str; PAIR_COUNT as usize] = [
    "car", "taxi", "bus", "truck", "van", "tractor", "ambulance", "fire engine", "police car",
    "bicycle", "scooter", "motorcycle", "train", "tram", "subway", "monorail", "ship", "ferry",
    "sailboat", "canoe", "airplane", "helicopter", "rocket", "balloon", "cable car", "skateboard",
];

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// Returns the colour of the suit.
    #[must_use]
    pub const fn color(self) -> SuitColor {
        match self {
            Self::Hearts | Self::Diamonds => SuitColor::Red,
            Self::Clubs | Self::Spades => SuitColor::Black,
        }
    }

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Hearts => "♥",
            Self::Diamonds => "♦",
            Self::Clubs => "♣",
            Self::Spades => "♠",
        }
    }
}

/// Colour of a suit. Standard cards pair up by rank and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SuitColor {
    /// Hearts and diamonds.
    Red,
    /// Clubs and spades.
    Black,
}

/// Deck theme selected at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Theme {
    /// Standard 52-card deck without jokers.
    #[default]
    Standard,
    /// 26 animals, two of each.
    Animals,
    /// The letters A to Z, two of each.
    Alphabet,
    /// 26 vehicles, two of each.
    Vehicles,
}

impl Theme {
    /// All supported themes.
    pub const ALL: [Self; 4] = [Self::Standard, Self::Animals, Self::Alphabet, Self::Vehicles];

    /// Returns the label of a themed entry, or `None` for the standard deck or
    /// an out-of-range index.
    #[must_use]
    pub fn entry_label(self, index: u8) -> Option<&'static str> {
        let entries: &[&'static str] = match self {
            Self::Standard => return None,
            Self::Animals => &ANIMALS,
            Self::Alphabet => &ALPHABET,
            Self::Vehicles => &VEHICLES,
        };
        entries.get(index as usize).copied()
    }
}

/// Unique identifier of a card within a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardId(pub u8);

impl CardId {
    /// Creates a card id.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What is printed on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    /// A standard playing card (rank 1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    Standard {
        /// The suit of the card.
        suit: Suit,
        /// The rank of the card.
        rank: u8,
    },
    /// An entry of a themed deck.
    Themed {
        /// The theme the entry belongs to.
        theme: Theme,
        /// Index of the entry within the theme.
        index: u8,
    },
}

/// The value that decides whether two cards form a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchKey {
    /// Standard cards match on rank and suit colour.
    Standard {
        /// Card rank.
        rank: u8,
        /// Suit colour.
        color: SuitColor,
    },
    /// Themed cards match on the entry index.
    Themed(u8),
}

/// A card on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// Identity of the card.
    pub id: CardId,
    /// What the card shows.
    pub face: Face,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the face. Ranks outside 1..=13
    /// or theme indices outside the theme are accepted and get a `?` label.
    #[must_use]
    pub const fn new(id: CardId, face: Face) -> Self {
        Self { id, face }
    }

    /// Returns the matching key of the card.
    #[must_use]
    pub const fn match_key(&self) -> MatchKey {
        match self.face {
            Face::Standard { suit, rank } => MatchKey::Standard {
                rank,
                color: suit.color(),
            },
            Face::Themed { index, .. } => MatchKey::Themed(index),
        }
    }

    /// Returns whether two cards form a pair.
    ///
    /// A card never pairs with itself.
    #[must_use]
    pub fn pairs_with(&self, other: &Self) -> bool {
        self.id != other.id && self.match_key() == other.match_key()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face {
            Face::Standard { suit, rank } => {
                let rank = RANK_LABELS
                    .get(usize::from(rank).wrapping_sub(1))
                    .copied()
                    .unwrap_or("?");
                write!(f, "{rank}{}", suit.symbol())
            }
            Face::Themed { theme, index } => {
                f.write_str(theme.entry_label(index).unwrap_or("?"))
            }
        }
    }
}

/// Builds the unshuffled 52-card deck for a theme.
///
/// Ids are assigned 0..52 in construction order. Every matching key appears on
/// exactly two cards.
#[must_use]
pub fn build_deck(theme: Theme) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    match theme {
        Theme::Standard => {
            for suit in SUITS {
                for rank in 1..=13 {
                    let id = CardId::new(cards.len() as u8);
                    cards.push(Card::new(id, Face::Standard { suit, rank }));
                }
            }
        }
        Theme::Animals | Theme::Alphabet | Theme::Vehicles => {
            for _ in 0..2 {
                for index in 0..PAIR_COUNT {
                    let id = CardId::new(cards.len() as u8);
                    cards.push(Card::new(id, Face::Themed { theme, index }));
                }
            }
        }
    }

    cards
}
