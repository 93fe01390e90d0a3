use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::Intent;
use quiz_core::model::{CategoryId, QuizStatus, SessionSnapshot};

use crate::context::AppContext;
use crate::routes::Route;
use crate::session::{use_dispatch, use_session, use_session_snapshot};
use crate::vm::{PrimaryAction, QuestionVm, ResultVm, map_question, map_result};

fn primary_intent(action: PrimaryAction) -> Intent {
    match action {
        PrimaryAction::Confirm => Intent::Confirm,
        PrimaryAction::Next | PrimaryAction::Finish => Intent::Advance,
    }
}

/// An attempt on this category that the view should resume instead of restarting.
fn is_resumable(snapshot: &SessionSnapshot, id: &CategoryId) -> bool {
    let same_category = snapshot.category.as_ref().is_some_and(|c| c.id() == id);
    same_category && matches!(snapshot.status, QuizStatus::InProgress | QuizStatus::Completed)
}

/// Digit keys pick options by their 1-based position.
fn option_for_key(key: &str) -> Option<usize> {
    let digit = key.parse::<usize>().ok()?;
    digit.checked_sub(1)
}

#[component]
pub fn QuizView(category_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let handle = use_session();
    let dispatch = use_dispatch();
    let navigator = use_navigator();
    let snapshot = use_session_snapshot();
    let id = CategoryId::new(category_id.clone());
    let known = handle.catalog().contains(&id);

    {
        let id = id.clone();
        let current = handle.snapshot();
        use_hook(move || {
            if !is_resumable(&current, &id) {
                dispatch.call(Intent::Start(id));
            }
        });
    }

    use_effect(move || {
        let _ = eval(r#"document.getElementById("quiz-root")?.focus();"#);
    });

    let on_exit = use_callback(move |()| {
        dispatch.call(Intent::Reset);
        navigator.push(Route::Home {});
    });

    let current = snapshot.read().clone();
    let question = map_question(&current);
    let result = map_result(&current, ctx.reward_url());

    let on_key = {
        let question = question.clone();
        move |evt: KeyboardEvent| {
            if evt.data.key() == Key::Escape {
                evt.prevent_default();
                on_exit.call(());
                return;
            }
            let Some(vm) = question.as_ref() else {
                return;
            };
            match evt.data.key() {
                Key::Enter if vm.primary_enabled => {
                    evt.prevent_default();
                    dispatch.call(primary_intent(vm.primary));
                }
                Key::Character(value) if vm.options_enabled() => {
                    if let Some(index) = option_for_key(&value) {
                        evt.prevent_default();
                        dispatch.call(Intent::Select(index));
                    }
                }
                _ => {}
            }
        }
    };

    if !known {
        return rsx! {
            div { class: "page quiz",
                p { class: "quiz__missing", "Unknown protocol: {category_id}" }
                button { class: "btn btn-secondary", onclick: move |_| on_exit.call(()), "Return to Hub" }
            }
        };
    }

    let body = match (question, result) {
        (_, Some(result)) => rsx! {
            ResultPanel { result, category_id: id.to_string(), on_exit }
        },
        (Some(vm), None) => rsx! {
            QuestionPanel { vm, on_exit }
        },
        (None, None) => rsx! {
            div { class: "quiz__pending", div { class: "spinner" } }
        },
    };

    rsx! {
        div {
            id: "quiz-root",
            class: "page quiz",
            tabindex: "0",
            onkeydown: on_key,
            {body}
        }
    }
}

#[component]
fn QuestionPanel(vm: QuestionVm, on_exit: Callback<()>) -> Element {
    let dispatch = use_dispatch();
    let options_enabled = vm.options_enabled();
    let primary = vm.primary;
    let timer_class = if vm.timer_urgent {
        "quiz__timer quiz__timer--urgent"
    } else {
        "quiz__timer"
    };

    rsx! {
        div { class: "quiz__panel",
            div { class: "quiz__header",
                div { class: "quiz__meta",
                    span { class: "quiz__section", "{vm.section_label}" }
                    span { class: "quiz__progress-label", "{vm.progress_label}" }
                }
                if let Some(label) = vm.timer_label.as_ref() {
                    span { id: "quiz-timer", class: timer_class, "{label}" }
                }
                button {
                    id: "quiz-abort",
                    class: "btn btn-ghost",
                    onclick: move |_| on_exit.call(()),
                    "Abort"
                }
            }
            div { class: "progress",
                div {
                    class: "progress__fill",
                    style: "width: {vm.progress_percent}%",
                }
            }
            div { class: "quiz__question", dangerous_inner_html: "{vm.question_html}" }
            div { class: "quiz__options",
                for option in vm.options.iter().cloned() {
                    button {
                        key: "{option.index}",
                        class: option.state.class(),
                        disabled: !options_enabled,
                        onclick: move |_| dispatch.call(Intent::Select(option.index)),
                        span { class: "option__letter", "{option.letter}" }
                        span {
                            class: "option__label",
                            dangerous_inner_html: "{option.label_html}",
                        }
                    }
                }
            }
            if vm.timed_out {
                p { class: "quiz__notice", "Time expired. No answer was recorded for this question." }
            }
            div { class: "quiz__actions",
                button {
                    id: "quiz-primary",
                    class: "btn btn-primary",
                    disabled: !vm.primary_enabled,
                    onclick: move |_| dispatch.call(primary_intent(primary)),
                    "{primary.label()}"
                }
            }
            if vm.locked {
                div { class: "lock",
                    h2 { class: "lock__title", "Attempt Locked" }
                    p { class: "lock__message",
                        "Focus left the assessment window. This attempt is frozen and can only be reset."
                    }
                    button {
                        id: "quiz-lock-reset",
                        class: "btn btn-primary",
                        onclick: move |_| on_exit.call(()),
                        "Return to Hub"
                    }
                }
            }
        }
    }
}

#[component]
fn ResultPanel(result: ResultVm, category_id: String, on_exit: Callback<()>) -> Element {
    let dispatch = use_dispatch();
    let panel_class = if result.passed {
        "result result--passed"
    } else {
        "result result--failed"
    };

    rsx! {
        div { class: panel_class,
            h2 { class: "result__headline", "{result.headline}" }
            p { class: "result__score",
                "Final score: "
                span { class: "result__score-value", "{result.score_label}" }
                ". {result.message}"
            }
            if let Some(secret) = result.secret_word.as_ref() {
                match result.reward_url.as_ref() {
                    Some(url) => rsx! {
                        a {
                            class: "reward",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            p { class: "reward__eyebrow", "Click to claim Restricted Access" }
                            div { class: "reward__secret", "{secret}" }
                            if let Some(host) = result.reward_host.as_ref() {
                                div { class: "reward__host", "Visit {host}" }
                            }
                        }
                    },
                    None => rsx! {
                        div { class: "reward",
                            p { class: "reward__eyebrow", "Restricted Access" }
                            div { class: "reward__secret", "{secret}" }
                        }
                    },
                }
            } else {
                button {
                    id: "quiz-restart",
                    class: "btn btn-primary btn-wide",
                    onclick: move |_| dispatch.call(Intent::Start(CategoryId::new(category_id.clone()))),
                    "Restart Assessment"
                }
            }
            button {
                id: "quiz-hub",
                class: "btn btn-secondary",
                onclick: move |_| on_exit.call(()),
                "Return to Hub"
            }
        }
    }
}
