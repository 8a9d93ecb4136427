//! End-to-end play-throughs against JSON datasets.

use phrase_game_core::{
    Answer, CardResult, Dataset, GameSession, Segment, SessionStatus, SubmissionOutcome,
};
use pretty_assertions::assert_eq;

const ANIMALS: &str = r#"{
    "0": [
        { "url": "img/cat.png", "phrase": "The | is sleeping", "type": "input", "answer": "cat" },
        { "url": "img/sky.png", "phrase": "The sky is |", "type": "select",
          "options": ["red", "blue", "green"], "answer": "blue" }
    ],
    "1": [
        { "url": "img/dog.png", "phrase": "A | barks at night", "type": "input", "answer": "dog" }
    ]
}"#;

fn session() -> GameSession {
    GameSession::new(Dataset::from_json(ANIMALS).expect("valid dataset"))
}

#[test]
fn correct_first_submission_advances() {
    let mut session = session();
    let result = session
        .submit(&[Answer::text("cat"), Answer::selected("blue")])
        .unwrap();

    assert_eq!(result.results, vec![CardResult::Correct, CardResult::Correct]);
    assert_eq!(session.level_index(), 1);
    assert_eq!(session.correct_count(), 0);
}

#[test]
fn wrong_then_corrected_submission() {
    let mut session = session();

    let result = session
        .submit(&[Answer::text("dog"), Answer::selected("blue")])
        .unwrap();
    assert_eq!(result.results, vec![CardResult::Wrong, CardResult::Correct]);
    assert_eq!(session.level_index(), 0);

    let result = session
        .submit(&[Answer::text("cat"), Answer::selected("blue")])
        .unwrap();
    assert_eq!(result.outcome, SubmissionOutcome::Advanced { level_index: 1 });
}

#[test]
fn same_partial_answer_twice_does_not_advance() {
    let mut session = session();
    let half = [Answer::text("dog"), Answer::selected("blue")];
    session.submit(&half).unwrap();
    session.submit(&half).unwrap();
    assert_eq!(session.level_index(), 0);
    assert_eq!(session.status(), SessionStatus::InProgress);
}

#[test]
fn full_play_through_completes() {
    let mut session = session();
    session
        .submit(&[Answer::text("cat "), Answer::selected("blue")])
        .unwrap();

    let cards = session.current_cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].image_ref, "img/dog.png");
    assert_eq!(cards[0].phrase.segments()[1], Segment::Blank);

    let result = session.submit(&[Answer::text("dog")]).unwrap();
    assert_eq!(result.outcome, SubmissionOutcome::Completed);

    let result = session.submit(&[Answer::text("cat")]).unwrap();
    assert_eq!(result.outcome, SubmissionOutcome::Ignored);
    assert_eq!(session.level_index(), 1);
    assert_eq!(session.status(), SessionStatus::Completed);
}

#[test]
fn unselected_choice_is_wrong() {
    let mut session = session();
    let result = session
        .submit(&[Answer::text("cat"), Answer::Unselected])
        .unwrap();
    assert_eq!(result.results[1], CardResult::Wrong);
}

#[test]
fn submission_result_serializes_for_hosts() {
    let mut session = session();
    let result = session
        .submit(&[Answer::text("dog"), Answer::selected("blue")])
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "results": ["wrong", "correct"],
            "outcome": { "outcome": "retry", "correct": 1, "total": 2 },
            "status": "in_progress",
            "level_index": 0
        })
    );
}
