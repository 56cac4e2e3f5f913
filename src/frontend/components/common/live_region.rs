//! Screen-reader announcements.

use crate::backend::utils::config::AppConfig;
use dioxus::core::Task;
use dioxus::prelude::*;
use std::time::Duration;

/// Posts short messages to the polite live region.
///
/// The clear timer belongs to [`LiveRegion`], so a message posted by a
/// component that unmounts right away is still cleared.
#[derive(Clone, Copy)]
pub struct Announcer {
    message: Signal<String>,
    revision: Signal<u64>,
}

impl Announcer {
    pub fn announce(&mut self, text: impl Into<String>) {
        self.message.set(text.into());
        *self.revision.write() += 1;
    }
}

pub fn use_announcer() -> Option<Announcer> {
    try_use_context::<Announcer>()
}

#[component]
pub fn LiveRegion(children: Element) -> Element {
    let config = use_context::<AppConfig>();
    let clear_after = Duration::from_millis(config.ui.announcement_clear_ms);
    let mut message = use_signal(String::new);
    let revision = use_signal(|| 0u64);
    let mut pending = use_signal(|| None::<Task>);

    use_context_provider(|| Announcer { message, revision });

    // Each announcement restarts the timer in this scope.
    use_effect(move || {
        if revision() == 0 {
            return;
        }
        let previous = pending.write().take();
        if let Some(task) = previous {
            task.cancel();
        }
        let task = spawn(async move {
            tokio::time::sleep(clear_after).await;
            message.set(String::new());
            pending.set(None);
        });
        pending.set(Some(task));
    });

    use_drop(move || {
        if let Some(task) = *pending.peek() {
            task.cancel();
        }
    });

    rsx! {
        {children}
        div {
            class: "sr-only",
            role: "status",
            aria_live: "polite",
            "{message}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Slot(Rc<RefCell<Option<Announcer>>>);

    #[component]
    fn Witness() -> Element {
        let announcer = use_announcer();
        let slot = use_context::<Slot>();
        use_hook(move || *slot.0.borrow_mut() = announcer);
        rsx! {}
    }

    /// Announces once, like the login page after signing in.
    #[component]
    fn Speaker() -> Element {
        let announcer = use_announcer();
        use_hook(move || {
            if let Some(mut announcer) = announcer {
                announcer.announce("Signed in");
            }
        });
        rsx! {}
    }

    /// Unmounts the speaker straight after its first render.
    #[component]
    fn Toggle() -> Element {
        let mut shown = use_signal(|| true);
        use_effect(move || shown.set(false));
        rsx! {
            if shown() {
                Speaker {}
            }
        }
    }

    fn Host() -> Element {
        use_context_provider(|| {
            let mut config = AppConfig::default();
            config.ui.announcement_clear_ms = 20;
            config
        });
        rsx! {
            LiveRegion {
                Witness {}
                Toggle {}
            }
        }
    }

    #[tokio::test]
    async fn message_clears_after_the_announcing_component_unmounts() {
        let slot = Slot::default();
        let mut dom = VirtualDom::new(Host).with_root_context(slot.clone());
        dom.rebuild_in_place();

        let announcer = slot.0.borrow().expect("live region provides an announcer");
        assert_eq!(
            dom.in_runtime(|| announcer.message.peek().clone()),
            "Signed in"
        );

        let cleared = tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate_to_vec();
                if dom.in_runtime(|| announcer.message.peek().is_empty()) {
                    break;
                }
            }
        })
        .await;
        assert!(cleared.is_ok(), "announcement was never cleared");
    }
}
