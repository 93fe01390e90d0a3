use quiz_core::model::{QuizStatus, SessionSnapshot};
use url::Url;

use crate::vm::markdown_vm::{inline_markdown_to_html, markdown_to_html};
use crate::vm::time_fmt::format_countdown;

/// Seconds at or below which the countdown is drawn as urgent.
const URGENT_SECS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    Correct,
    Wrong,
    Dimmed,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Idle => "option option--idle",
            Self::Selected => "option option--selected",
            Self::Correct => "option option--correct",
            Self::Wrong => "option option--wrong",
            Self::Dimmed => "option option--dimmed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub letter: char,
    pub label_html: String,
    pub state: OptionState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryAction {
    Confirm,
    Next,
    Finish,
}

impl PrimaryAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Confirm => "Confirm Selection",
            Self::Next => "Next Question",
            Self::Finish => "See Results",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub section_label: String,
    pub progress_label: String,
    /// Percentage of the bar to fill, counting the current question.
    pub progress_percent: usize,
    pub question_html: String,
    pub options: Vec<OptionVm>,
    pub primary: PrimaryAction,
    pub primary_enabled: bool,
    pub timer_label: Option<String>,
    pub timer_urgent: bool,
    pub timed_out: bool,
    pub locked: bool,
}

impl QuestionVm {
    #[must_use]
    pub fn options_enabled(&self) -> bool {
        !self.locked && self.primary == PrimaryAction::Confirm
    }
}

/// Map an in-progress snapshot to the question panel. `None` for any other status.
#[must_use]
pub fn map_question(snapshot: &SessionSnapshot) -> Option<QuestionVm> {
    let category = snapshot.category.as_ref()?;
    let question = snapshot.question()?;
    let confirmed = snapshot.is_confirmed;
    let selected = snapshot.selected_option;

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let is_correct = index == question.correct_answer_index();
            let is_selected = selected == Some(index);
            let state = match (confirmed, is_correct, is_selected) {
                (true, true, _) => OptionState::Correct,
                (true, false, true) => OptionState::Wrong,
                (true, false, false) => OptionState::Dimmed,
                (false, _, true) => OptionState::Selected,
                (false, _, false) => OptionState::Idle,
            };
            OptionVm {
                index,
                letter: option_letter(index),
                label_html: inline_markdown_to_html(label),
                state,
            }
        })
        .collect();

    let primary = match (confirmed, snapshot.is_last_question()) {
        (false, _) => PrimaryAction::Confirm,
        (true, false) => PrimaryAction::Next,
        (true, true) => PrimaryAction::Finish,
    };
    let locked = snapshot.cheating_detected;
    let primary_enabled = !locked && (confirmed || selected.is_some());
    let total = snapshot.question_count.max(1);
    let position = snapshot.question_index + 1;

    Some(QuestionVm {
        section_label: format!("Section: {}", category.title().to_uppercase()),
        progress_label: format!("Question {position} of {}", snapshot.question_count),
        progress_percent: (position * 100 / total).min(100),
        question_html: markdown_to_html(question.text()),
        options,
        primary,
        primary_enabled,
        timer_label: snapshot.time_left.map(format_countdown),
        timer_urgent: snapshot.time_left.is_some_and(|secs| secs <= URGENT_SECS),
        timed_out: confirmed && selected.is_none(),
        locked,
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub category_title: String,
    pub headline: &'static str,
    pub score_label: String,
    pub message: String,
    pub passed: bool,
    pub secret_word: Option<String>,
    pub reward_url: Option<String>,
    pub reward_host: Option<String>,
}

#[must_use]
pub fn map_result(snapshot: &SessionSnapshot, reward_url: Option<&Url>) -> Option<ResultVm> {
    if snapshot.status != QuizStatus::Completed {
        return None;
    }
    let category = snapshot.category.as_ref()?;
    let passed = snapshot.is_passed();
    let secret_word = snapshot.secret_word().map(str::to_string);
    let reward = reward_url.filter(|_| passed);

    let message = if passed {
        format!(
            "You have successfully unlocked the vault for {}.",
            category.title()
        )
    } else {
        format!(
            "You need at least {} correct answers to view the secret word.",
            snapshot.pass_threshold
        )
    };

    Some(ResultVm {
        category_title: category.title().to_string(),
        headline: if passed {
            "Subject Mastered"
        } else {
            "Assessment Failed"
        },
        score_label: format!("{}/{}", snapshot.score, snapshot.question_count),
        message,
        passed,
        secret_word,
        reward_url: reward.map(|url| url.as_str().to_string()),
        reward_host: reward.and_then(Url::host_str).map(str::to_string),
    })
}

fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|offset| b'A'.checked_add(offset))
        .filter(u8::is_ascii_uppercase)
        .map_or('?', char::from)
}
