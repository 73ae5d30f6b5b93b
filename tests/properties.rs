//! Property tests for deck construction, shuffling, and scoring.

use std::collections::HashMap;

use concentration::{
    CardId, DECK_SIZE, Game, GameOptions, GameState, MatchKey, PAIR_COUNT, Player, RevealOutcome,
    Theme, build_deck,
};
use proptest::prelude::*;

fn any_theme() -> impl Strategy<Value = Theme> {
    prop::sample::select(Theme::ALL.to_vec())
}

fn started(players: usize, seed: u64, theme: Theme) -> Game {
    let mut game = Game::new(GameOptions::default(), seed);
    let roster = (0..players).map(|seat| Player::new(format!("p{seat}"))).collect();
    game.start_game(roster, theme).unwrap();
    game
}

fn sorted_ids(game: &Game) -> Vec<CardId> {
    let mut ids: Vec<CardId> = game.deck().iter().map(|card| card.id).collect();
    ids.sort_unstable();
    ids
}

#[test]
fn every_theme_has_26_keys_twice() {
    for theme in Theme::ALL {
        let deck = build_deck(theme);
        assert_eq!(deck.len(), DECK_SIZE);

        let mut counts: HashMap<MatchKey, usize> = HashMap::new();
        for card in &deck {
            *counts.entry(card.match_key()).or_default() += 1;
        }
        assert_eq!(counts.len(), usize::from(PAIR_COUNT), "{theme:?}");
        assert!(counts.values().all(|&n| n == 2), "{theme:?}");

        let mut ids: Vec<CardId> = deck.iter().map(|card| card.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DECK_SIZE);
    }
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>(), theme in any_theme(), rounds in 1usize..5) {
        let mut game = started(2, seed, theme);
        let before = sorted_ids(&game);
        let keys_before: Vec<MatchKey> = {
            let mut keys: Vec<MatchKey> = game.deck().iter().map(|c| c.match_key()).collect();
            keys.sort_unstable();
            keys
        };

        for _ in 0..rounds {
            prop_assert!(game.shuffle());
        }

        prop_assert_eq!(sorted_ids(&game), before);
        let mut keys_after: Vec<MatchKey> = game.deck().iter().map(|c| c.match_key()).collect();
        keys_after.sort_unstable();
        prop_assert_eq!(keys_after, keys_before);
    }

    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        players in 2usize..=10,
        theme in any_theme(),
        picks in prop::collection::vec(0usize..DECK_SIZE, 1..400),
    ) {
        let mut game = started(players, seed, theme);
        let mut total_points = 0;

        for pick in picks {
            if game.state() == GameState::GameOver {
                break;
            }
            if game.can_hide() {
                let seat = game.current_player();
                prop_assert!(game.hide_mismatch());
                prop_assert_eq!(game.current_player(), (seat + 1) % players);
                continue;
            }

            let id = game.deck()[pick].id;
            let before = game.snapshot();
            let seat = game.current_player();

            match game.reveal_card(id) {
                RevealOutcome::Rejected(_) => {
                    prop_assert_eq!(game.snapshot(), before);
                }
                RevealOutcome::FirstCard => {
                    prop_assert_eq!(game.revealed(), &[id]);
                }
                RevealOutcome::Matched { player_index, points } => {
                    let expected = if before.pairs_remaining <= 5 { 2 } else { 1 };
                    prop_assert_eq!(points, expected);
                    prop_assert_eq!(player_index, seat);
                    prop_assert_eq!(game.current_player(), seat);
                    prop_assert_eq!(game.pairs_remaining(), before.pairs_remaining - 1);
                    prop_assert_eq!(game.matched_count(), before.matched.len() + 2);
                    prop_assert!(game.revealed().is_empty());
                    prop_assert_eq!(
                        game.state() == GameState::GameOver,
                        game.pairs_remaining() == 0
                    );
                    total_points += points;
                }
                RevealOutcome::Mismatched => {
                    prop_assert_eq!(game.revealed().len(), 2);
                    prop_assert!(game.is_input_locked());
                }
                RevealOutcome::Reset => {
                    prop_assert!(false, "cards on the board never reset");
                }
            }

            let scores: u32 = game.players().iter().map(Player::score).sum();
            prop_assert_eq!(scores, total_points);
            prop_assert!(game.revealed().len() <= 2);
        }
    }

    #[test]
    fn full_game_awards_31_points(
        seed in any::<u64>(),
        players in 2usize..=10,
        theme in any_theme(),
    ) {
        let mut game = started(players, seed, theme);

        while game.pairs_remaining() > 0 {
            prop_assert_eq!(game.state(), GameState::InProgress);
            let first = *game.deck().iter().find(|c| !game.is_matched(c.id)).unwrap();
            let partner = *game.deck().iter().find(|c| c.pairs_with(&first)).unwrap();
            game.reveal_card(first.id);
            game.reveal_card(partner.id);
        }

        prop_assert_eq!(game.state(), GameState::GameOver);
        let scores: u32 = game.players().iter().map(Player::score).sum();
        prop_assert_eq!(scores, 31);
        let standings = game.standings().unwrap();
        prop_assert_eq!(standings.winners(), &[0]);
        prop_assert!(standings.placements.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
