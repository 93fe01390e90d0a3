use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::Router;

use services::{QuizService, SessionDriver, SessionHandle, load_catalog};

use crate::context::AppContext;
use crate::routes::Route;
use crate::session::FocusBridge;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Protocol Assessment" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Shell {}
            }
        }
    }
}

/// Loads the catalog once and starts the session driver. A failed load leaves the
/// app on the not-ready screen; there is no retry.
#[component]
pub(crate) fn Shell() -> Element {
    let ctx = use_context::<AppContext>();
    let resource = use_resource(move || {
        let source = ctx.catalog_source();
        let policy = ctx.policy();
        async move {
            let catalog = load_catalog(source.as_ref(), &policy)
                .await
                .map_err(|_| ViewError::CatalogUnavailable)?;
            let service = QuizService::new(Arc::new(catalog), policy);
            Ok::<_, ViewError>(SessionDriver::spawn(service))
        }
    });

    match view_state_from_resource(resource) {
        ViewState::Ready(handle) => rsx! { SessionScope { handle } },
        ViewState::Error(err) => rsx! {
            div { class: "not-ready",
                h1 { "Protocol Assessment" }
                p { class: "not-ready__message", "{err.message()}" }
            }
        },
        ViewState::Idle | ViewState::Loading => rsx! {
            div { class: "not-ready",
                div { class: "spinner" }
            }
        },
    }
}

#[derive(Props, Clone)]
struct SessionScopeProps {
    handle: SessionHandle,
}

impl PartialEq for SessionScopeProps {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self.handle.catalog(), other.handle.catalog())
    }
}

#[component]
fn SessionScope(props: SessionScopeProps) -> Element {
    use_context_provider(|| props.handle.clone());
    rsx! {
        FocusBridge {}
        Router::<Route> {}
    }
}
