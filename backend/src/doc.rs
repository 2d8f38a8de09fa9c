//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every inbound HTTP path together with the schema
//! wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves it in
//! debug builds and `cargo run --bin openapi-dump` exports it.

use utoipa::OpenApi;

use crate::inbound::http::articles::ArticleRequestBody;
use crate::inbound::http::comments::CommentRequestBody;
use crate::inbound::http::schemas::{
    ArticlePageSchema, ArticleSchema, CommentSchema, ErrorCodeSchema, ErrorSchema,
    PageLinksSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Article board API",
        description = "Articles, their comments, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::articles::create_article,
        crate::inbound::http::articles::list_articles,
        crate::inbound::http::articles::get_article,
        crate::inbound::http::articles::update_article,
        crate::inbound::http::articles::delete_article,
        crate::inbound::http::comments::create_comment,
        crate::inbound::http::comments::list_comments,
        crate::inbound::http::comments::update_comment,
        crate::inbound::http::comments::delete_comment,
        crate::inbound::http::query_test::query_test,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ArticleRequestBody,
        ArticleSchema,
        ArticlePageSchema,
        PageLinksSchema,
        CommentRequestBody,
        CommentSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "articles", description = "Article records"),
        (name = "comments", description = "Comments scoped to a parent article"),
        (name = "diagnostics", description = "Request inspection helpers"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[rstest]
    #[case("crate.domain.ArticleView")]
    #[case("crate.domain.CommentView")]
    fn response_bodies_use_domain_view_schemas(#[case] name: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("view schema registered");
        assert_object_schema_has_field(schema, "writer");
    }

    #[rstest]
    #[case("/articles")]
    #[case("/articles/{id}")]
    #[case("/articles/{articleId}/comments")]
    #[case("/articles/{articleId}/comments/{commentId}")]
    #[case("/query-test")]
    #[case("/health/ready")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn comment_item_path_exposes_put_and_delete() {
        let doc = ApiDoc::openapi();
        let item = doc
            .paths
            .paths
            .get("/articles/{articleId}/comments/{commentId}")
            .expect("comment item path");
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }
}
