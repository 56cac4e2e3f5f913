//! Root component and the process-wide setup it reads.

use crate::backend::i18n::FileStore;
use crate::backend::session::{AuthService, LocalSessionSource, SessionStore};
use crate::backend::utils::config::AppConfig;
use crate::frontend::app::Route;
use crate::frontend::components::common::LiveRegion;
use crate::frontend::components::i18n::I18nProvider;
use crate::frontend::services::context::PortalAuth;
use crate::frontend::services::i18n::Preferences;
use dioxus::prelude::*;
use dioxus_router::Router;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::OnceLock;

pub const PORTAL_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styles/portal.css"
));

static SETUP: OnceLock<Setup> = OnceLock::new();

/// Resolved before launch and read once by [`App`].
#[derive(Debug, Clone, Default)]
pub struct Setup {
    pub config: AppConfig,
    /// Directory for `session.json` and `preferences.json`.
    pub data_dir: PathBuf,
    /// When false no preference file is used and the language stays French.
    pub persist_preferences: bool,
}

pub fn install(setup: Setup) {
    if SETUP.set(setup).is_err() {
        log::warn!("Setup installed twice; keeping the first one");
    }
}

#[component]
pub fn App() -> Element {
    let setup = use_hook(|| SETUP.get().cloned().unwrap_or_default());

    use_context_provider(|| setup.config.clone());
    use_hook(|| {
        if setup.persist_preferences {
            let store = FileStore::new(setup.data_dir.join("preferences.json"));
            provide_context(Preferences(Rc::new(store)));
        }
    });

    let auth: PortalAuth = use_context_provider(|| {
        let source = LocalSessionSource::new(
            setup.data_dir.join("session.json"),
            setup.config.auth.admin_users.clone(),
        );
        AuthService::new(source, SessionStore::new())
    });
    use_context_provider(|| auth.store().clone());

    use_future(move || {
        let auth = auth.clone();
        async move { auth.restore().await }
    });

    rsx! {
        I18nProvider {
            LiveRegion {
                Router::<Route> {}
            }
        }
    }
}
