use crate::model::{Answer, Question};

/// Count recorded answers that match their question's correct option.
///
/// Works on any prefix of the answer list; positions past the end of either slice
/// are ignored.
#[must_use]
pub fn score(answers: &[Answer], questions: &[Question]) -> usize {
    answers
        .iter()
        .zip(questions)
        .filter(|(answer, question)| answer.matches(question.correct_answer_index()))
        .count()
}
