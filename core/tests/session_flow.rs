use std::collections::BTreeMap;

use syncd_core::*;

/// Easy session dealt as `0 0 1 1 2 2 3 3 4 4 5 5`.
fn easy_session() -> GameSession<FixedBoardGenerator> {
    GameSession::with_generator(
        Difficulty::Easy,
        Alphabet::default(),
        FixedBoardGenerator::adjacent_pairs(6),
    )
    .unwrap()
}

/// Matches every pair after making `misses` mismatched attempts first.
fn play_to_completion<G: BoardGenerator>(session: &mut GameSession<G>, misses: u32) {
    for _ in 0..misses {
        assert!(matches!(
            session.flip(0).unwrap(),
            FlipOutcome::Revealed { .. }
        ));
        assert!(matches!(
            session.flip(2).unwrap(),
            FlipOutcome::Mismatched { .. }
        ));
    }
    let pairs = session.pair_count();
    for pair in 0..pairs {
        session.flip(pair * 2).unwrap();
        session.flip(pair * 2 + 1).unwrap();
    }
}

#[test]
fn every_level_deals_each_symbol_twice() {
    for difficulty in Difficulty::ALL {
        let session = GameSession::new(difficulty, Alphabet::default(), 99).unwrap();
        let state = session.snapshot();

        let mut counts = BTreeMap::new();
        for card in &state.cards {
            *counts.entry(card.symbol.clone()).or_insert(0) += 1;
        }

        assert_eq!(state.cards.len(), usize::from(difficulty.pair_count()) * 2);
        assert_eq!(counts.len(), usize::from(difficulty.pair_count()));
        assert!(counts.values().all(|&count| count == 2));
        let ids: Vec<CardId> = state.cards.iter().map(|card| card.id).collect();
        assert_eq!(ids, (0..state.cards.len() as CardId).collect::<Vec<_>>());
    }
}

#[test]
fn boards_differ_between_seeds() {
    let deal = |seed| {
        GameSession::new(Difficulty::Hard, Alphabet::default(), seed)
            .unwrap()
            .snapshot()
            .cards
    };
    let first = deal(0);
    assert!((1..20).any(|seed| deal(seed) != first));
}

#[test]
fn matching_pair_stays_face_up() {
    let mut session = easy_session();

    assert_eq!(session.flip(0), Ok(FlipOutcome::Revealed { card: 0 }));
    assert_eq!(
        session.flip(1),
        Ok(FlipOutcome::Matched {
            first: 0,
            second: 1
        })
    );

    let state = session.snapshot();
    assert!(state.cards[0].is_matched && state.cards[0].is_flipped);
    assert!(state.cards[1].is_matched && state.cards[1].is_flipped);
    assert_eq!(state.matched_pair_count, 1);
    assert!(state.pending_selection.is_empty());
    assert_eq!(state.attempt_count, 1);
}

#[test]
fn mismatched_pair_turns_back_down() {
    let mut session = easy_session();

    session.flip(0).unwrap();
    assert_eq!(
        session.flip(2),
        Ok(FlipOutcome::Mismatched {
            first: 0,
            second: 2
        })
    );

    let state = session.snapshot();
    assert!(!state.cards[0].is_flipped && !state.cards[2].is_flipped);
    assert!(!state.cards[0].is_matched && !state.cards[2].is_matched);
    assert_eq!(state.attempt_count, 1);
    assert_eq!(state.matched_pair_count, 0);
    assert!(state.pending_selection.is_empty());

    let reveal = state.last_pair.unwrap();
    assert_eq!((reveal.first, reveal.second, reveal.matched), (0, 2, false));
}

#[test]
fn attempts_count_pairs_not_flips() {
    let mut session = easy_session();

    session.flip(0).unwrap();
    assert_eq!(session.attempt_count(), 0);
    session.flip(3).unwrap();
    assert_eq!(session.attempt_count(), 1);
    session.flip(5).unwrap();
    assert_eq!(session.attempt_count(), 1);
    session.flip(4).unwrap();
    assert_eq!(session.attempt_count(), 2);
}

#[test]
fn flipping_revealed_or_matched_cards_is_ignored() {
    let mut session = easy_session();

    session.flip(0).unwrap();
    assert_eq!(session.flip(0), Ok(FlipOutcome::Ignored));
    assert_eq!(session.pending_selection(), &[0]);

    session.flip(1).unwrap();
    let before = session.snapshot();
    assert_eq!(session.flip(1), Ok(FlipOutcome::Ignored));
    assert_eq!(session.flip(0), Ok(FlipOutcome::Ignored));
    assert_eq!(session.snapshot(), before);
}

#[test]
fn out_of_range_flip_is_an_error() {
    let mut session = easy_session();

    assert_eq!(
        session.flip(12),
        Err(GameError::InvalidIndex { index: 12, len: 12 })
    );
    assert_eq!(session.phase(), SessionPhase::Idle);
}

#[test]
fn completing_every_pair_ends_the_session() {
    let mut session = easy_session();

    session.flip(0).unwrap();
    session.flip(2).unwrap();
    for pair in 0..5 {
        session.flip(pair * 2).unwrap();
        session.flip(pair * 2 + 1).unwrap();
    }
    assert!(!session.is_complete());

    session.flip(10).unwrap();
    assert_eq!(
        session.flip(11),
        Ok(FlipOutcome::Completed {
            first: 10,
            second: 11,
            attempts: 7,
            new_best: true,
        })
    );

    let state = session.snapshot();
    assert!(state.is_complete);
    assert!(!state.is_active);
    assert_eq!(state.matched_pair_count, 6);
    assert_eq!(state.best_attempts, Some(7));
    assert!(state.cards.iter().all(|card| card.is_matched));
}

#[test]
fn best_score_only_improves() {
    // three pairs, so rounds of 6, 4 and 5 attempts are all reachable
    let layout = BoardLayout::new(2, 3, 3).unwrap();
    let alphabet = Alphabet::with_min_unique(["a", "b", "c"], 3).unwrap();
    let mut session =
        GameSession::with_layout(layout, alphabet, FixedBoardGenerator::adjacent_pairs(3)).unwrap();

    play_to_completion(&mut session, 3);
    assert_eq!(session.attempt_count(), 6);
    assert_eq!(session.best_attempts(), Some(6));

    session.reset().unwrap();
    play_to_completion(&mut session, 1);
    assert_eq!(session.attempt_count(), 4);
    assert_eq!(session.best_attempts(), Some(4));

    session.reset().unwrap();
    play_to_completion(&mut session, 2);
    assert_eq!(session.attempt_count(), 5);
    assert_eq!(session.best_attempts(), Some(4));
    assert_eq!(session.best_scores().get(None::<Difficulty>), Some(4));
}

#[test]
fn carried_over_records_are_respected() {
    let mut session = easy_session();
    let mut best = BestScores::new();
    best.record(Difficulty::Easy, 6);
    session.set_best_scores(best);

    play_to_completion(&mut session, 1);

    assert_eq!(session.best_attempts(), Some(6));
    assert_eq!(session.best_scores().get(Difficulty::Easy), Some(6));
}

#[test]
fn clock_only_runs_while_active() {
    let mut session = easy_session();

    assert!(!session.tick());
    assert_eq!(session.elapsed_seconds(), 0);

    session.flip(0).unwrap();
    assert!(session.is_active());
    assert!(session.tick());
    assert!(session.tick());
    assert_eq!(session.elapsed_seconds(), 2);

    session.flip(1).unwrap();
    for pair in 1..6 {
        session.flip(pair * 2).unwrap();
        session.flip(pair * 2 + 1).unwrap();
    }
    assert!(session.is_complete());
    assert!(!session.tick());
    assert_eq!(session.elapsed_seconds(), 2);
}

#[test]
fn flips_after_completion_are_ignored() {
    let mut session = easy_session();
    play_to_completion(&mut session, 0);

    for id in 0..12 {
        assert_eq!(session.flip(id), Ok(FlipOutcome::Ignored));
    }
    assert_eq!(session.attempt_count(), 6);
}

#[test]
fn reset_keeps_best_and_clears_progress() {
    let mut session = easy_session();
    play_to_completion(&mut session, 0);
    session.tick();

    session.reset().unwrap();

    let state = session.snapshot();
    assert_eq!(state.attempt_count, 0);
    assert_eq!(state.matched_pair_count, 0);
    assert_eq!(state.elapsed_seconds, 0);
    assert!(!state.is_complete);
    assert!(!state.is_active);
    assert_eq!(state.best_attempts, Some(6));
    assert_eq!(state.last_pair, None);
    assert!(state.cards.iter().all(Card::is_selectable));
}

#[test]
fn best_scores_are_kept_per_difficulty() {
    let mut session = GameSession::new(Difficulty::Easy, Alphabet::default(), 5).unwrap();
    let mut best = BestScores::new();
    best.record(Difficulty::Easy, 9);
    session.set_best_scores(best);

    session.set_difficulty(Difficulty::Hard).unwrap();
    assert_eq!(session.difficulty(), Some(Difficulty::Hard));
    assert_eq!(session.snapshot().best_attempts, None);
    assert_eq!(session.board().len(), 24);
    assert_eq!(session.board().dims(), (4, 6));

    session.set_difficulty(Difficulty::Easy).unwrap();
    assert_eq!(session.snapshot().best_attempts, Some(9));
}

#[test]
fn single_pair_board_completes_in_one_attempt() {
    let layout = BoardLayout::new(1, 2, 1).unwrap();
    let alphabet = Alphabet::with_min_unique(["🃏"], 1).unwrap();
    let mut session =
        GameSession::with_layout(layout, alphabet, ShuffledBoardGenerator::new(3)).unwrap();

    assert_eq!(session.flip(0), Ok(FlipOutcome::Revealed { card: 0 }));
    assert!(session.is_active());
    assert_eq!(
        session.flip(1),
        Ok(FlipOutcome::Completed {
            first: 0,
            second: 1,
            attempts: 1,
            new_best: true,
        })
    );
    assert_eq!(session.best_attempts(), Some(1));
    assert_eq!(session.difficulty(), None);
}

#[test]
fn alphabet_too_small_for_hard_fails_construction() {
    let alphabet = Alphabet::with_min_unique(["a", "b", "c", "d", "e", "f", "g", "h"], 6).unwrap();
    let result = GameSession::new(Difficulty::Easy, alphabet, 0);
    assert!(matches!(
        result,
        Err(GameError::ConfigurationError {
            required: 12,
            available: 8
        })
    ));
}

#[test]
fn snapshot_serializes_for_front_ends() {
    let mut session = easy_session();
    session.flip(4).unwrap();

    let json = serde_json::to_value(session.snapshot()).unwrap();

    assert_eq!(json["difficulty"], "easy");
    assert_eq!(json["rows"], 3);
    assert_eq!(json["cols"], 4);
    assert_eq!(json["pending_selection"], serde_json::json!([4]));
    assert_eq!(json["is_active"], true);
    assert_eq!(json["cards"][4]["is_flipped"], true);
    assert_eq!(json["cards"][4]["symbol"], "🎨");
    assert!(json["best_attempts"].is_null());
}
