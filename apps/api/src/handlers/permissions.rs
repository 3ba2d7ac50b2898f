use axum::Json;
use axum::extract::{Extension, Query, State};
use orus_core::Identity;
use orus_domain::ClientPermission;
use serde::Deserialize;
use tracing::warn;

use crate::dto::{EffectivePermissionsResponse, PermissionCheckResponse};
use crate::state::AppState;

/// Query string of a permission check.
#[derive(Debug, Deserialize)]
pub struct PermissionCheckQuery {
    pub name: String,
}

/// Resolves a client-side permission check against the aggregated set.
pub async fn check_permission_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<PermissionCheckQuery>,
) -> Json<PermissionCheckResponse> {
    let resolution = state
        .access_service
        .permissions_for_identity(&identity)
        .await;
    let permission = ClientPermission::resolve(&resolution.permissions, query.name.trim());

    Json(PermissionCheckResponse {
        has_permission: permission.has_permission(),
        is_loading: permission.is_loading(),
    })
}

pub async fn my_permissions_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Json<EffectivePermissionsResponse> {
    let resolution = state
        .access_service
        .permissions_for_identity(&identity)
        .await;
    if resolution.is_degraded() {
        warn!(user_id = %identity.id(), "serving partial permission list");
    }

    Json(EffectivePermissionsResponse {
        permissions: resolution
            .permissions
            .names()
            .into_iter()
            .map(ToOwned::to_owned)
            .collect(),
        degraded: resolution.is_degraded(),
    })
}

#[cfg(test)]
mod tests {
    use axum::Json;
    use axum::extract::{Extension, Query, State};
    use orus_infrastructure::InMemoryFailure;

    use crate::dto::PermissionCheckResponse;
    use crate::handlers::test_support::TestContext;

    use super::{PermissionCheckQuery, check_permission_handler, my_permissions_handler};

    #[tokio::test]
    async fn check_answers_from_aggregated_permissions() {
        let context = TestContext::new();
        let member = context.member("ada@orus.dev", &["users.read"]).await;
        let check = |name: &str| {
            check_permission_handler(
                State(context.state.clone()),
                Extension(member.clone()),
                Query(PermissionCheckQuery {
                    name: name.to_owned(),
                }),
            )
        };

        let Json(granted) = check(" users.read ").await;
        let Json(denied) = check("users.manage").await;

        assert_eq!(
            granted,
            PermissionCheckResponse {
                has_permission: true,
                is_loading: false,
            }
        );
        assert!(!denied.has_permission);
    }

    #[tokio::test]
    async fn permission_list_flags_degraded_branch() {
        let context = TestContext::new();
        let member = context.member("ada@orus.dev", &["users.read"]).await;
        context.directory.fail(InMemoryFailure::RoleBranch).await;

        let Json(response) =
            my_permissions_handler(State(context.state.clone()), Extension(member)).await;

        assert!(response.degraded);
        assert_eq!(response.permissions, ["users.read"]);
    }
}
