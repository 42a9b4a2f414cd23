//! End-to-end flows over the embedded catalog, mirroring what a user does
//! in the quiz screen: click answer radios in some order, press Done, read
//! the results, start over.

use choice_quiz::data::read_questions_embedded;
use choice_quiz::session::{Feedback, QuizSession, SessionState};
use choice_quiz::view_models::ResultsView;

fn correct_idx(session: &QuizSession, question_id: u32) -> usize {
    session
        .questions()
        .iter()
        .find(|q| q.id == question_id)
        .expect("question in catalog")
        .answers
        .iter()
        .position(|a| a.is_correct)
        .expect("catalog question has a correct answer")
}

fn wrong_idx(session: &QuizSession, question_id: u32) -> usize {
    session
        .questions()
        .iter()
        .find(|q| q.id == question_id)
        .expect("question in catalog")
        .answers
        .iter()
        .position(|a| !a.is_correct)
        .expect("catalog question has a wrong answer")
}

#[test]
fn all_answers_correct() {
    let mut session = QuizSession::new(read_questions_embedded());
    for id in [1, 2, 3] {
        let idx = correct_idx(&session, id);
        assert_eq!(session.select_answer(id, idx), Feedback::Correct);
    }
    let snap = session.submit();
    assert_eq!(snap.correct, 3);
    assert_eq!(snap.attempted, 3);
    assert_eq!(snap.percentage, 100);
    assert_eq!(snap.formatted, "3/3");
}

#[test]
fn mixed_answers() {
    let mut session = QuizSession::new(read_questions_embedded());
    session.select_answer(1, wrong_idx(&session, 1));
    session.select_answer(2, correct_idx(&session, 2));
    session.select_answer(3, wrong_idx(&session, 3));
    let snap = session.submit();
    assert_eq!(snap.correct, 1);
    assert_eq!(snap.attempted, 3);
    assert_eq!(snap.percentage, 33);
    assert_eq!(snap.formatted, "1/3");
}

#[test]
fn submit_without_answering() {
    let mut session = QuizSession::new(read_questions_embedded());
    let snap = session.submit();
    assert_eq!(snap.correct, 0);
    assert_eq!(snap.attempted, 0);
    assert_eq!(snap.percentage, 0);
    assert_eq!(snap.formatted, "0/0");
}

#[test]
fn partial_completion() {
    let mut session = QuizSession::new(read_questions_embedded());
    session.select_answer(1, correct_idx(&session, 1));
    let snap = session.submit();
    assert_eq!(snap.formatted, "1/1");
    assert_eq!(snap.percentage, 100);
}

#[test]
fn progress_counter_tracks_each_selection() {
    let mut session = QuizSession::new(read_questions_embedded());
    assert_eq!(session.attempted(), 0);
    session.select_answer(1, correct_idx(&session, 1));
    assert_eq!(session.attempted(), 1);
    session.select_answer(2, wrong_idx(&session, 2));
    assert_eq!(session.attempted(), 2);
}

#[test]
fn restart_after_submission_starts_clean() {
    let mut session = QuizSession::new(read_questions_embedded());
    session.select_answer(1, wrong_idx(&session, 1));
    session.submit();

    let mut fresh = session.restart();
    assert_eq!(fresh.state(), SessionState::InProgress);
    assert_eq!(fresh.attempted(), 0);

    // The new attempt is fully independent of the submitted one.
    let idx = correct_idx(&fresh, 1);
    fresh.select_answer(1, idx);
    let snap = fresh.submit();
    assert_eq!(snap.formatted, "1/1");
}

#[test]
fn results_view_over_a_real_run() {
    let mut session = QuizSession::new(read_questions_embedded());
    session.select_answer(1, correct_idx(&session, 1));
    session.select_answer(2, correct_idx(&session, 2));
    session.select_answer(3, wrong_idx(&session, 3));
    let results = ResultsView::new(session.submit());
    assert_eq!(results.snapshot.percentage, 67);
    assert_eq!(results.verdict(), "✔ Good effort!");
    assert_eq!(
        results.detail(),
        "You answered 2 out of 3 questions correctly."
    );
}
