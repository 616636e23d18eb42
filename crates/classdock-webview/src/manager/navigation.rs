use classdock_common::{ViewError, ViewId};
use tracing::{debug, warn};

use crate::runtime::{EmbeddingRuntime, HostWindow, ViewSurface};

use super::ViewManager;

impl<R: EmbeddingRuntime, H: HostWindow> ViewManager<R, H> {
    pub fn navigate(&mut self, id: &ViewId, url: &str) -> Result<(), ViewError> {
        let view = self
            .registry
            .get_mut(id)
            .ok_or_else(|| ViewError::NotFound(id.clone()))?;
        if url.trim().is_empty() {
            return Err(ViewError::load(id, "empty url"));
        }

        view.surface.load_url(url).map_err(|e| {
            warn!(id = %id, url = %url, error = %e, "navigation failed");
            ViewError::load(id, e)
        })?;
        view.current_url = url.to_string();
        debug!(id = %id, url = %url, "navigating");
        Ok(())
    }

    pub fn reload(&self, id: &ViewId) -> Result<(), ViewError> {
        let view = self
            .registry
            .get(id)
            .ok_or_else(|| ViewError::NotFound(id.clone()))?;
        view.surface.reload().map_err(|e| {
            warn!(id = %id, error = %e, "reload failed");
            ViewError::load(id, e)
        })
    }

    /// Evaluate `code` in the view and return the JSON-serialized result.
    pub async fn execute_script(&self, id: &ViewId, code: &str) -> Result<String, ViewError> {
        let view = self
            .registry
            .get(id)
            .ok_or_else(|| ViewError::NotFound(id.clone()))?;

        match tokio::time::timeout(self.script_timeout, view.surface.execute_script(code)).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => {
                warn!(id = %id, error = %e, "script execution failed");
                Err(ViewError::script(id, e))
            }
            Err(_) => {
                warn!(id = %id, timeout = ?self.script_timeout, "script execution timed out");
                Err(ViewError::script(
                    id,
                    format!("timed out after {:?}", self.script_timeout),
                ))
            }
        }
    }

    pub fn go_back(&self, id: &ViewId) -> Result<(), ViewError> {
        self.run_history_script(id, "history.back();")
    }

    pub fn go_forward(&self, id: &ViewId) -> Result<(), ViewError> {
        self.run_history_script(id, "history.forward();")
    }

    fn run_history_script(&self, id: &ViewId, script: &str) -> Result<(), ViewError> {
        let view = self
            .registry
            .get(id)
            .ok_or_else(|| ViewError::NotFound(id.clone()))?;
        view.surface.run_script(script).map_err(|e| {
            warn!(id = %id, error = %e, "history navigation failed");
            ViewError::script(id, e)
        })
    }
}
