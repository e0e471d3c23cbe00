use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use gatekeeper_auth::Principal;
use gatekeeper_models::{
    AssignPermissionsRequest, AuthDetail, CreatePermissionRequest, LoginRequest, LoginResponse,
    MessageResponse, Permission, RegisterRequest, UserRole,
};

use crate::modules::auth::controller::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::me,
        crate::modules::permissions::controller::create_permission,
        crate::modules::permissions::controller::assign_permissions,
        crate::modules::reports::controller::get_auth_details,
        crate::modules::reports::controller::get_auth_details_by_id,
    ),
    components(
        schemas(
            UserRole,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            Principal,
            Permission,
            CreatePermissionRequest,
            AssignPermissionsRequest,
            AuthDetail,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and token introspection"),
        (name = "Permissions", description = "Permission administration (ADMIN only)"),
        (name = "Reports", description = "Flattened user permission reports (ADMIN or MANAGER)")
    ),
    info(
        title = "Gatekeeper API",
        version = "0.1.0",
        description = "User registration, JWT login and permission assignment built with Axum and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/api/auth/register",
            "/api/auth/login",
            "/api/auth/me",
            "/api/permissions",
            "/api/permissions/users/{name}",
            "/api/auth-details",
            "/api/auth-details/{id}",
        ] {
            assert!(paths.contains(&expected), "missing path {}", expected);
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
