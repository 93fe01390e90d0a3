//! Hooks that connect components to the running session driver.

use dioxus::document::eval;
use dioxus::prelude::*;

use quiz_core::Intent;
use quiz_core::model::SessionSnapshot;
use services::SessionHandle;

use crate::context::AppContext;

/// Reports `hidden` or `blur` every time the window stops being the active one.
/// Listeners from an earlier run are detached first, so at most one pair is live.
const FOCUS_BRIDGE_SCRIPT: &str = r#"
    const previous = window.__quizFocusBridge;
    if (previous) {
        document.removeEventListener("visibilitychange", previous.onVisibility);
        window.removeEventListener("blur", previous.onBlur);
    }
    const bridge = {
        onVisibility: () => {
            if (document.hidden) dioxus.send("hidden");
        },
        onBlur: () => dioxus.send("blur"),
    };
    window.__quizFocusBridge = bridge;
    document.addEventListener("visibilitychange", bridge.onVisibility);
    window.addEventListener("blur", bridge.onBlur);
    await new Promise(() => {});
"#;

#[must_use]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// A signal mirroring the driver's published snapshots.
#[must_use]
pub fn use_session_snapshot() -> Signal<SessionSnapshot> {
    let handle = use_session();
    let snapshot = use_signal(|| handle.snapshot());
    use_future(move || {
        let mut rx = handle.subscribe();
        let mut snapshot = snapshot;
        async move {
            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                snapshot.set(next);
            }
        }
    });
    snapshot
}

/// Fire-and-forget intent delivery. Results arrive through `use_session_snapshot`.
#[must_use]
pub fn use_dispatch() -> Callback<Intent> {
    let handle = use_session();
    use_callback(move |intent: Intent| {
        let name = intent.name();
        if let Err(err) = handle.send(intent) {
            tracing::warn!(intent = name, error = %err, "intent dropped");
        }
    })
}

/// Forward window focus loss as `Intent::FocusLost` when the policy locks on it.
pub fn use_focus_lock() {
    let focus_lock = use_context::<AppContext>().policy().focus_lock();
    let dispatch = use_dispatch();
    use_future(move || async move {
        if !focus_lock {
            return;
        }
        let mut bridge = eval(FOCUS_BRIDGE_SCRIPT);
        while let Ok(signal) = bridge.recv::<String>().await {
            tracing::warn!(%signal, "window lost focus");
            dispatch.call(Intent::FocusLost);
        }
    });
}

/// Mounted once beside the router so route changes never re-register listeners.
#[component]
pub fn FocusBridge() -> Element {
    use_focus_lock();
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::FOCUS_BRIDGE_SCRIPT;

    #[test]
    fn focus_bridge_detaches_previous_listeners_before_attaching() {
        let detach = FOCUS_BRIDGE_SCRIPT
            .find("removeEventListener(\"visibilitychange\"")
            .unwrap();
        let attach = FOCUS_BRIDGE_SCRIPT
            .find("document.addEventListener(\"visibilitychange\"")
            .unwrap();
        assert!(detach < attach);
        assert!(
            FOCUS_BRIDGE_SCRIPT.contains("window.removeEventListener(\"blur\", previous.onBlur)")
        );
        assert!(FOCUS_BRIDGE_SCRIPT.contains("window.__quizFocusBridge = bridge"));
    }
}
