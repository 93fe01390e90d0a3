use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::context::AppContext;
use crate::session::use_session;
use crate::views::{BriefingView, HubView, QuizView};
use crate::vm::map_hub_stats;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HubView)] Home {},
        #[route("/briefing/:category_id", BriefingView)] Briefing { category_id: String },
        #[route("/quiz/:category_id", QuizView)] Quiz { category_id: String },
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let policy = ctx.policy();
    let tagline = format!(
        "Select a subject to test your technical knowledge. Successfully complete {}/{} questions to unlock exclusive protocol secrets.",
        policy.pass_threshold(),
        policy.question_count(),
    );

    rsx! {
        div { class: "app",
            header { class: "masthead",
                span { class: "masthead__badge", "DeFi Intelligence Hub" }
                h1 { class: "masthead__title", "Protocol Assessment" }
                p { class: "masthead__tagline", "{tagline}" }
                if policy.is_timed() {
                    p { class: "masthead__mode", "Timed mode: leaving the window locks the attempt." }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

#[component]
fn Footer() -> Element {
    let handle = use_session();
    let stats = map_hub_stats(handle.catalog());

    rsx! {
        footer { class: "footer",
            div { class: "footer__stats",
                div { class: "footer__stat",
                    span { class: "footer__value", "{stats.categories}" }
                    span { class: "footer__label", "Protocols" }
                }
                div { class: "footer__stat",
                    span { class: "footer__value", "{stats.questions}" }
                    span { class: "footer__label", "Questions" }
                }
            }
        }
    }
}
