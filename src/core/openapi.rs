use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::links::{dtos as links_dtos, handlers as links_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Links
        links_handlers::list_links,
        links_handlers::create_link,
        links_handlers::update_link,
        links_handlers::delete_link,
    ),
    components(
        schemas(
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Links
            links_dtos::CreateLinkDto,
            links_dtos::UpdateLinkDto,
            links_dtos::LinkResponseDto,
            ApiResponse<Vec<links_dtos::LinkResponseDto>>,
            ApiResponse<links_dtos::LinkResponseDto>,
        )
    ),
    tags(
        (name = "categories", description = "Bookmark categories (own + public)"),
        (name = "links", description = "Bookmarked links (own + public)"),
    ),
    info(
        title = "Linkshelf API",
        version = "0.1.0",
        description = "Personal bookmark manager API",
    )
)]
pub struct ApiDoc;

/// Documents the trusted identity header set by the fronting proxy
pub struct SecurityAddon {
    pub header: String,
}

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "identity_header",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(&self.header))),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_api_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for path in ["/api/categories", "/api/category", "/api/links", "/api/link"] {
            assert!(paths.iter().any(|p| p.as_str() == path), "missing {}", path);
        }
    }

    #[test]
    fn test_security_addon_uses_configured_header() {
        let mut doc = ApiDoc::openapi();
        SecurityAddon {
            header: "x-remote-user".to_string(),
        }
        .modify(&mut doc);

        let json = serde_json::to_value(&doc).unwrap();
        let scheme = &json["components"]["securitySchemes"]["identity_header"];
        assert_eq!(scheme["in"], "header");
        assert_eq!(scheme["name"], "x-remote-user");
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
    }
}
