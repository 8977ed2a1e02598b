use salvo::Depot;
use tracing::error;

use crate::{config::get_config_from_depot, db_handler::get_db_from_depot};
use vows_db::model::user::DepotUser;
use vows_service::auth::{depot::depot_keys, session::resolve_session};

/// ## Summary
/// Resolves the session cookie and stores the caller in the depot.
///
/// Requests without a cookie are marked public without touching the database.
/// Unknown or expired tokens are also treated as public; route handlers decide
/// whether that is enough.
///
/// ## Side Effects
/// Inserts a [`DepotUser`] under `AUTHENTICATED_ADMIN`, and the session id
/// under `SESSION_ID` when a session matched.
///
/// ## Errors
/// Returns HTTP 500 if the depot is missing its config or database provider,
/// or if the session lookup fails.
#[salvo::async_trait]
impl salvo::Handler for AuthMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        tracing::trace!("Authenticating request");

        let config = match get_config_from_depot(depot) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(error = ?e, "Failed to get config from depot");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        let Some(token) = req
            .cookie(&config.auth.cookie_name)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
        else {
            depot.insert(depot_keys::AUTHENTICATED_ADMIN, DepotUser::Public);
            return;
        };

        let provider = match get_db_from_depot(depot) {
            Ok(p) => p,
            Err(e) => {
                error!(error = ?e, "Failed to get database provider from depot");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        let mut conn = match provider.get_connection().await {
            Ok(c) => c,
            Err(e) => {
                error!(error = ?e, "Failed to get database connection");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        match resolve_session(&mut conn, &token).await {
            Ok(Some((session, user))) => {
                tracing::debug!(username = %user.username, "Session resolved");
                depot.insert(depot_keys::SESSION_ID, session.id);
                depot.insert(depot_keys::AUTHENTICATED_ADMIN, DepotUser::User(user));
            }
            Ok(None) => {
                tracing::debug!("Unknown or expired session, treating as public");
                depot.insert(depot_keys::AUTHENTICATED_ADMIN, DepotUser::Public);
            }
            Err(service_err) => {
                error!(error = ?service_err, "Session lookup failed");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                res.render(salvo::writing::Json(
                    serde_json::json!({ "message": "Internal server error" }),
                ));
                ctrl.skip_rest();
            }
        }
    }
}

/// ## Summary
/// Session gate for the `/api` tree.
pub struct AuthMiddleware;
