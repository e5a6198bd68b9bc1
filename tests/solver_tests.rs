use triplecoach::solver::{eligible_candidates, ordered_moves};
use triplecoach::{
    get_best_move, get_best_move_for, Board, Card, Category, MoveSuggestion, Rules, Side, Stats,
};

fn card(id: &str, [t, r, b, l]: [u8; 4], side: Side) -> Card {
    Card::new(id, id, Stats::new(t, r, b, l), Category::None, side)
}

/// Board with every cell but 0 and 8 held by far fives.
fn two_hole_board() -> Board {
    let mut board = Board::new();
    for idx in 1u8..8 {
        board.set(idx, Some(card(&format!("f{idx}"), [5, 5, 5, 5], Side::Far)));
    }
    board
}

#[test]
fn evaluates_every_pair_and_keeps_strict_best() {
    let mut board = two_hole_board();
    // Hold cell 7 already so that cell 0 becomes strictly better than cell 8.
    board.set_side(7, Side::Near);

    let hand = vec![card("weak", [1, 1, 1, 1], Side::Near), card("strong", [9, 9, 9, 9], Side::Near)];
    let moves = ordered_moves(&board, &hand, &Rules::default());
    assert_eq!(moves.len(), 4, "2 cards x 2 empty cells");

    let best = get_best_move(&board, &hand, &Rules::default(), None).expect("a move");
    assert_eq!(
        best,
        MoveSuggestion { card_idx: 1, slot_idx: 0, score: 4, flipped_count: 4 }
    );
}

#[test]
fn ties_keep_first_candidate_then_first_cell() {
    let board = two_hole_board();
    let hand = vec![card("weak", [1, 1, 1, 1], Side::Near), card("strong", [9, 9, 9, 9], Side::Near)];

    // Strong at 0 and strong at 8 both end with 3 cells; the lower cell wins.
    let best = get_best_move(&board, &hand, &Rules::default(), None).expect("a move");
    assert_eq!((best.card_idx, best.slot_idx, best.score), (1, 0, 3));

    // Identical candidates: the earlier pool index wins.
    let twins = vec![card("a", [9, 9, 9, 9], Side::Near), card("b", [9, 9, 9, 9], Side::Near)];
    let best = get_best_move(&board, &twins, &Rules::default(), None).expect("a move");
    assert_eq!((best.card_idx, best.slot_idx), (0, 0));
}

#[test]
fn placed_cards_are_excluded_by_id() {
    let board = Board::new().with(4, card("used", [9, 9, 9, 9], Side::Near));
    let hand = vec![card("used", [9, 9, 9, 9], Side::Near), card("free", [2, 2, 2, 2], Side::Near)];

    assert_eq!(eligible_candidates(&board, &hand, &Rules::default()), vec![1]);
    let best = get_best_move(&board, &hand, &Rules::default(), None).expect("a move");
    assert_eq!(best.card_idx, 1);
}

#[test]
fn order_rule_restricts_to_first_unused() {
    let mut board = two_hole_board();
    board.set(1, Some(card("a", [5, 5, 5, 5], Side::Near)));

    let hand = vec![
        card("a", [5, 5, 5, 5], Side::Near),
        card("b", [1, 1, 1, 1], Side::Near),
        card("c", [9, 9, 9, 9], Side::Near),
    ];

    let ordered = Rules { order: true, ..Rules::default() };
    assert_eq!(eligible_candidates(&board, &hand, &ordered), vec![1]);
    let best = get_best_move(&board, &hand, &ordered, None).expect("a move");
    assert_eq!(best.card_idx, 1, "only B may be played under Order");

    let free = get_best_move(&board, &hand, &Rules::default(), None).expect("a move");
    assert_eq!(free.card_idx, 2, "C is best without Order");
}

#[test]
fn order_rule_with_every_card_used_yields_none() {
    let board = Board::new().with(0, card("a", [1, 1, 1, 1], Side::Near));
    let hand = vec![card("a", [1, 1, 1, 1], Side::Near)];
    let ordered = Rules { order: true, ..Rules::default() };
    assert!(eligible_candidates(&board, &hand, &ordered).is_empty());
    assert_eq!(get_best_move(&board, &hand, &ordered, None), None);
}

#[test]
fn empty_states_yield_none() {
    let mut full = Board::new();
    for idx in 0u8..9 {
        full.set(idx, Some(card(&format!("f{idx}"), [5, 5, 5, 5], Side::Far)));
    }
    let hand = vec![card("x", [9, 9, 9, 9], Side::Near)];
    assert_eq!(get_best_move(&full, &hand, &Rules::default(), None), None);
    assert_eq!(get_best_move(&Board::new(), &[], &Rules::default(), None), None);
}

#[test]
fn candidate_side_is_forced_to_the_acting_side() {
    let board = Board::new().with(1, card("f", [5, 5, 1, 5], Side::Far));
    // Pool card arrives marked Far; the near-side solver still counts it as Near.
    let hand = vec![card("x", [9, 9, 9, 9], Side::Far)];

    let best = get_best_move(&board, &hand, &Rules::default(), None).expect("a move");
    assert_eq!(best.slot_idx, 0);
    assert_eq!(best.score, 2);

    let far_view = get_best_move_for(&board, &hand, &Rules::default(), None, Side::Far).expect("a move");
    assert_eq!(far_view.score, 2);
}

#[test]
fn solver_leaves_inputs_untouched() {
    let board = two_hole_board();
    let hand = vec![card("strong", [9, 9, 9, 9], Side::Near)];
    let before_board = board.clone();
    let before_hand = hand.clone();

    let _ = get_best_move(&board, &hand, &Rules::all_enabled(), None);
    assert_eq!(board, before_board);
    assert_eq!(hand, before_hand);
}

#[test]
fn known_opponent_cards_do_not_change_the_choice() {
    let board = two_hole_board();
    let hand = vec![card("weak", [1, 1, 1, 1], Side::Near), card("strong", [9, 9, 9, 9], Side::Near)];
    let opp = vec![card("o", [10, 10, 10, 10], Side::Far)];

    assert_eq!(
        get_best_move(&board, &hand, &Rules::default(), Some(opp.as_slice())),
        get_best_move(&board, &hand, &Rules::default(), None)
    );
}

#[test]
fn solver_scores_through_special_rules() {
    // Same makes the 5-card the best pick even though it cannot win a comparison.
    let board = Board::new()
        .with(1, card("up", [2, 3, 5, 4], Side::Far))
        .with(3, card("left", [6, 5, 7, 8], Side::Far));
    let hand = vec![card("nine", [9, 1, 1, 1], Side::Near), card("five", [5, 1, 1, 5], Side::Near)];
    let rules = Rules { same: true, ..Rules::default() };

    let best = get_best_move(&board, &hand, &rules, None).expect("a move");
    assert_eq!((best.card_idx, best.slot_idx, best.score), (1, 4, 3));
}
