use std::rc::Rc;

use leptos_router::hooks::use_navigate;

use super::use_query::{use_query_client, QueryClient};
use crate::core::services::TauriTaskApi;
use crate::core::{CardActions, Navigator};
use crate::features::notifications::{use_toasts, Toasts};

/// Navigator backed by the router's `navigate`.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str)>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |target: &str| navigate(target, Default::default())),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, target: &str) {
        tracing::debug!(to = target, "navigating");
        (self.navigate)(target);
    }
}

pub type BoardActions = CardActions<RouterNavigator, TauriTaskApi, QueryClient, Toasts>;

/// Card actions wired to the router, the Tauri task store, the shared query
/// cache and the toast queue.
pub fn use_card_actions() -> BoardActions {
    CardActions {
        navigator: RouterNavigator::new(),
        api: TauriTaskApi,
        cache: use_query_client(),
        notifier: use_toasts(),
    }
}
