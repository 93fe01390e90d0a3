use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::Intent;

use crate::routes::Route;
use crate::session::{use_dispatch, use_session};
use crate::vm::map_category_cards;

#[component]
pub fn HubView() -> Element {
    let handle = use_session();
    let dispatch = use_dispatch();
    let navigator = use_navigator();

    // Arriving at the hub always ends whatever attempt was open.
    use_hook(move || dispatch.call(Intent::Reset));

    let cards = map_category_cards(handle.catalog());

    rsx! {
        div { class: "page hub",
            div { class: "hub__grid",
                for card in cards {
                    div { key: "{card.id}", class: "category-card",
                        h3 { class: "category-card__title", "{card.title}" }
                        p { class: "category-card__description", "{card.description}" }
                        div { class: "category-card__footer",
                            span { class: "category-card__count", "{card.question_count_label}" }
                            div { class: "category-card__actions",
                                if card.has_briefing {
                                    button {
                                        class: "btn btn-secondary",
                                        onclick: {
                                            let category_id = card.id.to_string();
                                            move |_| {
                                                navigator.push(Route::Briefing {
                                                    category_id: category_id.clone(),
                                                });
                                            }
                                        },
                                        "Briefing"
                                    }
                                }
                                button {
                                    class: "btn btn-primary",
                                    onclick: {
                                        let category_id = card.id.to_string();
                                        move |_| {
                                            navigator.push(Route::Quiz {
                                                category_id: category_id.clone(),
                                            });
                                        }
                                    },
                                    "Start Quiz"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
