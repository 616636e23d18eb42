//! Action dispatch: routes shortcut actions to the view manager.

use classdock_common::ViewId;

use super::core::ClassdockApp;
use super::keys::Action;

impl ClassdockApp {
    /// Dispatch a resolved [`Action`].
    pub(super) fn dispatch(&mut self, action: Action) {
        let Some(views) = self.views.as_mut() else {
            tracing::debug!(?action, "no views yet, action ignored");
            return;
        };

        match action {
            Action::ShowApp(n) => {
                let Some(app) = self.config.apps.iter().filter(|a| a.visible).nth(n) else {
                    return;
                };
                let id = ViewId::from(app.id.as_str());
                if let Err(e) = self.runtime.block_on(views.show_view(&id)) {
                    tracing::warn!(id = %id, error = %e, "ShowApp failed");
                }
            }
            Action::ToggleSidebar => {
                let open = !views.sidebar_open();
                views.set_sidebar_state(open);
            }
            Action::HideActive => {
                if let Err(e) = views.hide_active() {
                    tracing::warn!(error = %e, "HideActive failed");
                }
            }
            Action::ReloadActive | Action::Back | Action::Forward => {
                let Some(id) = views.active_id().cloned() else {
                    return;
                };
                let result = match action {
                    Action::ReloadActive => views.reload(&id),
                    Action::Back => views.go_back(&id),
                    _ => views.go_forward(&id),
                };
                if let Err(e) = result {
                    tracing::warn!(?action, error = %e, "history action failed");
                }
            }
        }
    }
}
