use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::QuizPolicy;
use services::{
    CatalogSource, QuizService, SessionDriver, SessionHandle, StaticSource, load_catalog,
};
use url::Url;

use crate::app::Shell;
use crate::context::{UiApp, build_app_context};
use crate::views::{BriefingView, HubView, QuizView};

pub const REWARD_URL: &str = "https://rewards.example.org/claim";

#[derive(Clone)]
struct TestApp {
    source: Arc<dyn CatalogSource>,
    policy: QuizPolicy,
}

impl UiApp for TestApp {
    fn catalog_source(&self) -> Arc<dyn CatalogSource> {
        Arc::clone(&self.source)
    }

    fn policy(&self) -> QuizPolicy {
        self.policy
    }

    fn reward_url(&self) -> Option<Url> {
        Url::parse(REWARD_URL).ok()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Hub,
    Briefing(&'static str),
    Quiz(&'static str),
    Shell,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handle: Option<SessionHandle>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handle) = props.handle.clone() {
        use_context_provider(|| handle);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Hub => rsx! { HubView {} },
        ViewKind::Briefing(id) => rsx! { BriefingView { category_id: id.to_string() } },
        ViewKind::Quiz(id) => rsx! { QuizView { category_id: id.to_string() } },
        ViewKind::Shell => rsx! { Shell {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handle: Option<SessionHandle>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn handle(&self) -> &SessionHandle {
        self.handle.as_ref().expect("harness without a session driver")
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Views rendered against the bundled catalog with a live driver.
pub async fn setup_view_harness(view: ViewKind, policy: QuizPolicy) -> ViewHarness {
    let source: Arc<dyn CatalogSource> = Arc::new(StaticSource::bundled());
    let catalog = load_catalog(source.as_ref(), &policy)
        .await
        .expect("bundled catalog");
    let handle = SessionDriver::spawn(QuizService::new(Arc::new(catalog), policy));
    build(view, source, policy, Some(handle))
}

/// The loading shell with an arbitrary source and no driver yet.
pub fn setup_shell_harness(source: Arc<dyn CatalogSource>) -> ViewHarness {
    build(ViewKind::Shell, source, QuizPolicy::classic(), None)
}

fn build(
    view: ViewKind,
    source: Arc<dyn CatalogSource>,
    policy: QuizPolicy,
    handle: Option<SessionHandle>,
) -> ViewHarness {
    let app = Arc::new(TestApp { source, policy });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handle: handle.clone(),
        },
    );
    ViewHarness { dom, handle }
}
