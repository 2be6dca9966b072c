use holdem_engine::cards::parse_cards;
use holdem_engine::deck::Deck;
use holdem_engine::errors::{GameError, IllegalAction};
use holdem_engine::game::{Game, Phase, TableConfig, HUMAN_SEAT, MAX_STARTING_CHIPS};
use holdem_engine::logger::TableEvent;
use holdem_engine::player::PlayerAction;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const TABLE_TOTAL: u32 = 4_000;

fn act(game: &mut Game, action: PlayerAction) {
    let seat = game.current_actor().expect("hand in progress");
    game.submit_action(seat, action)
        .unwrap_or_else(|e| panic!("seat {} {:?}: {}", seat, action, e));
}

/// Deals in seat order, one card per pass: seat0..seat3, seat0..seat3, then the board.
fn rigged(cards: &str) -> Deck {
    Deck::stacked(&parse_cards(cards).expect("valid cards"))
}

fn check_down(game: &mut Game) {
    while game.is_hand_in_progress() {
        act(game, PlayerAction::Check);
    }
}

#[test]
fn all_checks_pre_flop_deal_the_flop() {
    let mut game = Game::new(TableConfig::default(), 11);
    game.new_hand().unwrap();
    assert_eq!(game.community_count(), 0);
    for _ in 0..4 {
        act(&mut game, PlayerAction::Check);
    }
    assert_eq!(game.phase(), Phase::Flop);
    assert_eq!(game.community_count(), 3);
    assert_eq!(game.pot(), 0);
    // dealer is seat 1, so seat 2 opens every street
    assert_eq!(game.current_actor(), Some(2));
}

#[test]
fn checking_every_street_reaches_showdown_with_full_board() {
    let mut game = Game::new(TableConfig::default(), 12);
    game.new_hand().unwrap();
    check_down(&mut game);
    assert_eq!(game.phase(), Phase::Showdown);
    assert_eq!(game.community_count(), 5);
    let result = game.last_showdown().expect("showdown result");
    assert_eq!(result.hands.len(), 4);
    assert_eq!(game.total_chips(), TABLE_TOTAL);
}

#[test]
fn everyone_folding_awards_the_pot_without_a_board() {
    let mut game = Game::new(TableConfig::default(), 13);
    game.new_hand().unwrap();
    assert_eq!(game.current_actor(), Some(2));
    act(&mut game, PlayerAction::Raise(50));
    act(&mut game, PlayerAction::Fold);
    act(&mut game, PlayerAction::Fold);
    act(&mut game, PlayerAction::Fold);

    assert_eq!(game.phase(), Phase::Showdown);
    assert_eq!(game.community_count(), 0);
    assert_eq!(game.player(2).chips(), 1_000);
    assert_eq!(game.pot(), 0);

    let result = game.last_showdown().unwrap();
    assert_eq!(result.winners, vec![2]);
    assert_eq!(result.pot, 50);
    assert!(result.hands.is_empty());

    let record = game.hand_record();
    assert_eq!(record.actions.len(), 4);
    let showdown = record.showdown.as_ref().unwrap();
    assert_eq!(showdown.notes.as_deref(), Some("uncontested"));

    let lines: Vec<String> = game.drain_events().iter().map(|e| e.to_string()).collect();
    assert_eq!(lines.first().map(String::as_str), Some("AI2 raised to $50"));
    assert_eq!(lines.last().map(String::as_str), Some("AI2 won $50"));
}

#[test]
fn identical_hands_split_the_pot_with_odd_chip_left_of_dealer() {
    let mut game = Game::new(TableConfig::default(), 14);
    // seats 0 and 1 both make the ace-high straight
    game.rig_next_deck(rigged("Ah Ac 7c 2s Kd Ks 8d 2d Qh Jc Td 5s 4h"));
    game.new_hand().unwrap();

    act(&mut game, PlayerAction::Raise(15)); // seat 2
    act(&mut game, PlayerAction::Fold); // seat 3
    act(&mut game, PlayerAction::Call); // seat 0
    act(&mut game, PlayerAction::Call); // seat 1
    assert_eq!(game.phase(), Phase::Flop);
    assert_eq!(game.pot(), 45);
    check_down(&mut game);

    let result = game.last_showdown().unwrap();
    assert_eq!(result.winners, vec![0, 1]);
    assert_eq!(result.share, 22);
    assert_eq!(result.remainder, 1);
    // clockwise from seat 2: seat 0 is the first winner and takes the odd chip
    assert_eq!(game.player(0).chips(), 1_008);
    assert_eq!(game.player(1).chips(), 1_007);
    assert_eq!(game.total_chips(), TABLE_TOTAL);

    let events = game.drain_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, TableEvent::SplitPot { share: 22, .. })));
}

#[test]
fn illegal_actions_leave_state_unchanged() {
    let mut game = Game::new(TableConfig::default(), 15);
    game.new_hand().unwrap();
    let chips: Vec<u32> = game.players().iter().map(|p| p.chips()).collect();

    let err = game.submit_action(HUMAN_SEAT, PlayerAction::Check).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalAction(IllegalAction::NotPlayersTurn {
            expected: 2,
            actual: 0
        })
    );
    let err = game.submit_action(2, PlayerAction::Raise(5)).unwrap_err();
    assert!(matches!(
        err,
        GameError::IllegalAction(IllegalAction::RaiseTooSmall { minimum: 10, .. })
    ));
    let err = game.submit_action(2, PlayerAction::Raise(5_000)).unwrap_err();
    assert!(matches!(
        err,
        GameError::IllegalAction(IllegalAction::InsufficientChips { .. })
    ));

    assert_eq!(game.current_actor(), Some(2));
    assert_eq!(game.pot(), 0);
    assert_eq!(game.current_bet(), 0);
    let after: Vec<u32> = game.players().iter().map(|p| p.chips()).collect();
    assert_eq!(chips, after);
    assert!(game.hand_record().actions.is_empty());

    act(&mut game, PlayerAction::Raise(20));
    let err = game.submit_action(3, PlayerAction::Check).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalAction(IllegalAction::CheckFacingBet { to_call: 20 })
    );
    assert_eq!(game.current_actor(), Some(3));
}

#[test]
fn folded_seat_cannot_act_again() {
    let mut game = Game::new(TableConfig::default(), 16);
    game.new_hand().unwrap();
    act(&mut game, PlayerAction::Fold); // seat 2
    let err = game.submit_action(2, PlayerAction::Call).unwrap_err();
    assert_eq!(err, GameError::IllegalAction(IllegalAction::SeatFolded(2)));
}

#[test]
fn no_actions_accepted_between_hands() {
    let mut game = Game::new(TableConfig::default(), 17);
    let err = game.submit_action(HUMAN_SEAT, PlayerAction::Check).unwrap_err();
    assert_eq!(err, GameError::IllegalAction(IllegalAction::HandNotInProgress));
    assert_eq!(game.current_actor(), None);
}

#[test]
fn button_rotates_each_hand() {
    let mut game = Game::new(TableConfig::default(), 18);
    game.new_hand().unwrap();
    assert_eq!(game.dealer(), 1);
    check_down(&mut game);
    game.new_hand().unwrap();
    assert_eq!(game.dealer(), 2);
    assert_eq!(game.current_actor(), Some(3));
}

#[test]
fn busted_seat_sits_out_and_gets_no_cards() {
    let mut game = Game::new(TableConfig::default(), 19);
    game.players_mut()[1].set_chips(0);
    game.new_hand().unwrap();
    assert!(game.player(1).is_folded());
    assert_eq!(game.player(1).hand(), None);
    assert_eq!(game.active_players(), 3);
    assert_eq!(game.deck_remaining(), 52 - 6);
}

#[test]
fn short_stack_all_in_runs_out_the_board_and_ends_the_game() {
    let mut game = Game::new(TableConfig::default(), 20);
    game.players_mut()[HUMAN_SEAT].set_chips(30);
    game.rig_next_deck(rigged("7c 3d As 4h 2d 8s Ah 9c Kc Qd 5h 6s Jd"));
    game.new_hand().unwrap();

    act(&mut game, PlayerAction::Raise(100)); // seat 2
    act(&mut game, PlayerAction::Fold); // seat 3
    act(&mut game, PlayerAction::Call); // seat 0, all-in for 30
    assert!(game.player(HUMAN_SEAT).is_all_in());
    act(&mut game, PlayerAction::Fold); // seat 1

    assert_eq!(game.phase(), Phase::Showdown);
    assert_eq!(game.community_count(), 5);
    assert_eq!(game.last_showdown().unwrap().winners, vec![2]);
    assert_eq!(game.player(2).chips(), 1_030);
    assert_eq!(game.player(HUMAN_SEAT).chips(), 0);
    assert!(game.is_game_over());
    assert_eq!(game.new_hand(), Err(GameError::GameOver));
    assert!(game
        .drain_events()
        .iter()
        .any(|e| matches!(e, TableEvent::GameOver)));
}

#[test]
fn short_all_in_raise_is_accepted() {
    let mut game = Game::new(TableConfig::default(), 21);
    game.players_mut()[3].set_chips(130);
    game.new_hand().unwrap();
    act(&mut game, PlayerAction::Raise(100)); // seat 2, min next target 200
    act(&mut game, PlayerAction::Raise(130)); // seat 3, all-in
    assert_eq!(game.current_bet(), 130);
    assert!(game.player(3).is_all_in());
    assert_eq!(game.last_raiser(), Some(3));
}

#[test]
fn largest_stacks_all_in_keep_the_table_total() {
    let config = TableConfig {
        starting_chips: u32::MAX,
        min_raise: 10,
    };
    let mut game = Game::new(config, 21);
    let total = 4 * MAX_STARTING_CHIPS;
    assert_eq!(game.total_chips(), total);

    game.new_hand().unwrap();
    act(&mut game, PlayerAction::Raise(MAX_STARTING_CHIPS));
    for _ in 0..3 {
        act(&mut game, PlayerAction::Call);
        assert_eq!(game.total_chips(), total);
    }

    assert_eq!(game.phase(), Phase::Showdown);
    assert_eq!(game.community_count(), 5);
    assert_eq!(game.pot(), 0);
    assert_eq!(game.last_showdown().unwrap().pot, total);
    assert_eq!(game.total_chips(), total);
}

#[test]
fn random_legal_play_conserves_chips() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let mut game = Game::new(TableConfig::default(), 99);
    for _ in 0..60 {
        if game.is_game_over() {
            break;
        }
        game.new_hand().unwrap();
        while let Some(seat) = game.current_actor() {
            let p = game.player(seat);
            let to_call = game.to_call(seat);
            let all_in_target = p.bet() + p.chips();
            let roll = rng.random_range(0..10);
            let action = if roll < 2 && all_in_target > game.current_bet() {
                PlayerAction::Raise(game.min_raise_target().min(all_in_target))
            } else if roll < 3 && to_call > 0 {
                PlayerAction::Fold
            } else if to_call > 0 {
                PlayerAction::Call
            } else {
                PlayerAction::Check
            };
            game.submit_action(seat, action)
                .unwrap_or_else(|e| panic!("seat {} {:?}: {}", seat, action, e));
            assert_eq!(game.total_chips(), TABLE_TOTAL);
        }
        assert_eq!(game.pot(), 0);
        assert_eq!(game.total_chips(), TABLE_TOTAL);
    }
    assert!(game.hands_played() > 0);
}
