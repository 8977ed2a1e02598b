//! Depot helpers for reading the authenticated admin from Salvo requests.

use vows_db::model::user::{AdminUser, DepotUser};

use crate::error::{ServiceError, ServiceResult};

pub mod depot_keys {
    pub const AUTHENTICATED_ADMIN: &str = "__authenticated_admin";
    pub const SESSION_ID: &str = "__session_id";
}

/// Get the authenticated admin from the depot.
///
/// ## Errors
///
/// Returns `NotAuthenticated` if no user is found in the depot or if the user is public.
pub fn get_user_from_depot(depot: &salvo::Depot) -> ServiceResult<&AdminUser> {
    let depot_user = depot
        .get::<DepotUser>(depot_keys::AUTHENTICATED_ADMIN)
        .map_err(|_e| ServiceError::NotAuthenticated)?;

    match depot_user {
        DepotUser::User(user) => Ok(user),
        DepotUser::Public => Err(ServiceError::NotAuthenticated),
    }
}

/// Returns the id of the session that authenticated this request.
///
/// ## Errors
///
/// Returns `NotAuthenticated` if the request carried no valid session.
pub fn get_session_id_from_depot(depot: &salvo::Depot) -> ServiceResult<uuid::Uuid> {
    depot
        .get::<uuid::Uuid>(depot_keys::SESSION_ID)
        .copied()
        .map_err(|_e| ServiceError::NotAuthenticated)
}

/// Check if the request is from an authenticated admin (not public).
#[must_use]
pub fn is_authenticated(depot: &salvo::Depot) -> bool {
    depot
        .get::<DepotUser>(depot_keys::AUTHENTICATED_ADMIN)
        .is_ok_and(|u| matches!(u, DepotUser::User(_)))
}
