use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use quiz_core::Intent;
use quiz_core::model::CategoryId;

use crate::routes::Route;
use crate::session::{use_dispatch, use_session};
use crate::vm::map_briefing;

#[component]
pub fn BriefingView(category_id: String) -> Element {
    let handle = use_session();
    let dispatch = use_dispatch();
    let navigator = use_navigator();
    let id = CategoryId::new(category_id.clone());

    {
        let id = id.clone();
        use_hook(move || dispatch.call(Intent::Brief(id)));
    }

    let Some(vm) = map_briefing(handle.catalog(), &id) else {
        return rsx! {
            div { class: "page briefing",
                p { class: "briefing__missing", "Unknown protocol: {category_id}" }
                Link { class: "btn btn-secondary", to: Route::Home {}, "Return to Hub" }
            }
        };
    };

    let on_back = move |_| {
        dispatch.call(Intent::Reset);
        navigator.push(Route::Home {});
    };
    let on_start = {
        let category_id = category_id.clone();
        move |_| {
            navigator.push(Route::Quiz {
                category_id: category_id.clone(),
            });
        }
    };

    rsx! {
        div { class: "page briefing",
            span { class: "briefing__eyebrow", "Briefing" }
            h2 { class: "briefing__title", "{vm.title}" }
            if vm.paragraphs_html.is_empty() {
                p { class: "briefing__empty", "No briefing material for this protocol." }
            }
            for (idx, paragraph) in vm.paragraphs_html.iter().enumerate() {
                div {
                    key: "{idx}",
                    class: "briefing__paragraph",
                    dangerous_inner_html: "{paragraph}",
                }
            }
            div { class: "briefing__actions",
                button { class: "btn btn-secondary", onclick: on_back, "Return to Hub" }
                button { class: "btn btn-primary", onclick: on_start, "Start Quiz" }
            }
        }
    }
}
