//! Behavioral tests for the match engine.

use tres_en_raya_engine::{
    Cell, Ignored, InvariantSet, Mark, Match, MatchInvariants, MatchPhase, Outcome, Position,
    Transition,
};

fn play(game: &mut Match, indices: &[usize]) -> Vec<Transition> {
    indices.iter().map(|i| game.place_index(*i)).collect()
}

fn permutations(items: &[usize]) -> Vec<Vec<usize>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut all = Vec::new();
    for (i, first) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, *first);
            all.push(tail);
        }
    }
    all
}

#[test]
fn test_marks_alternate_starting_with_x() {
    // Every order of six cells, including orders that end in a win.
    for order in permutations(&[0, 1, 2, 4, 6, 8]) {
        let mut game = Match::new();
        for (turn, index) in order.iter().enumerate() {
            let expected = if turn % 2 == 0 { Mark::X } else { Mark::O };
            let transition = game.place_index(*index);
            if transition == Transition::Ignored(Ignored::MatchOver) {
                break;
            }
            let pos = Position::from_index(*index).unwrap();
            assert_eq!(
                game.board().get(pos),
                Cell::Occupied(expected),
                "order {order:?}, turn {turn}"
            );
        }
        assert!(MatchInvariants::check_all(&game).is_ok());
        for (turn, pos) in game.history().iter().enumerate() {
            let expected = if turn % 2 == 0 { Mark::X } else { Mark::O };
            assert_eq!(game.board().get(*pos), Cell::Occupied(expected));
        }
    }
}

#[test]
fn test_top_row_wins_on_third_mark() {
    let mut game = Match::new();
    let transitions = play(&mut game, &[0, 3, 1, 4]);
    assert!(transitions.iter().all(|t| t.outcome().is_none()));
    assert_eq!(game.phase(), MatchPhase::InProgress);

    let last = game.place_index(2);
    assert_eq!(last, Transition::Concluded(Outcome::Winner(Mark::X)));
    assert_eq!(game.outcome(), Some(Outcome::Winner(Mark::X)));
    assert_eq!(game.phase(), MatchPhase::Won(Mark::X));
}

#[test]
fn test_o_can_win() {
    let mut game = Match::new();
    play(&mut game, &[0, 2, 1, 4, 8]);
    assert_eq!(
        game.place_index(6),
        Transition::Concluded(Outcome::Winner(Mark::O))
    );
}

#[test]
fn test_won_match_ignores_further_presses() {
    let mut game = Match::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    let frozen = game.clone();

    for index in 0..9 {
        assert_eq!(
            game.place_index(index),
            Transition::Ignored(Ignored::MatchOver)
        );
    }
    assert_eq!(game, frozen);
}

#[test]
fn test_full_board_without_winner_is_draw() {
    let mut game = Match::new();
    // X O X / X O O / O X X
    let transitions = play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(
        transitions.last(),
        Some(&Transition::Concluded(Outcome::Draw))
    );
    assert_eq!(game.phase(), MatchPhase::Drawn);
    assert_eq!(game.winning_line(), None);
    assert!(MatchInvariants::check_all(&game).is_ok());
}

#[test]
fn test_reset_restores_initial_state() {
    let mut game = Match::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    game.reset();

    assert!(game.board().cells().iter().all(|c| *c == Cell::Empty));
    assert_eq!(game.next_mark(), Mark::X);
    assert_eq!(game.outcome(), None);
    assert!(game.history().is_empty());
    assert_eq!(game, Match::new());
}

#[test]
fn test_reset_mid_match() {
    let mut game = Match::new();
    play(&mut game, &[4]);
    assert_eq!(game.next_mark(), Mark::O);
    game.reset();
    assert_eq!(game.next_mark(), Mark::X);
}

#[test]
fn test_match_serializes_to_json() {
    let mut game = Match::new();
    play(&mut game, &[4, 0]);

    let json = serde_json::to_string(&game).unwrap();
    let restored: Match = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
}
