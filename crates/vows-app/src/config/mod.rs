use std::sync::Arc;

use salvo::async_trait;
pub use vows_core::config::*;

use crate::error::{AppError, AppResult};

/// Hoop that makes the loaded [`Settings`] available to every handler below it.
pub struct ConfigHandler {
    settings: Arc<Settings>,
}

impl ConfigHandler {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

#[async_trait]
impl salvo::Handler for ConfigHandler {
    #[tracing::instrument(skip_all)]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.settings));
    }
}

/// ## Summary
/// Retrieves the application configuration from the depot.
///
/// ## Errors
/// Returns an invariant violation if no [`ConfigHandler`] ran for this request.
pub fn get_config_from_depot(depot: &salvo::Depot) -> AppResult<Arc<Settings>> {
    depot.obtain::<Arc<Settings>>().cloned().map_err(|_err| {
        AppError::CoreError(vows_core::error::CoreError::InvariantViolation(
            "Configuration not found in depot",
        ))
    })
}
