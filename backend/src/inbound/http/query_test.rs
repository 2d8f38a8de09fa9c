//! Query-parameter echo endpoint.
//!
//! Accepts a handful of typed query parameters, logs them, and answers with an
//! empty body. Useful for checking how clients encode query strings.

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use tracing::info;

use crate::inbound::http::schemas::ErrorSchema;

const DEFAULT_HEIGHT: i32 = 175;

/// Parameters accepted by `GET /query-test`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryTestParams {
    pub name: String,
    pub age: Option<i32>,
    #[serde(default = "default_height")]
    pub height: i32,
    pub weight: i32,
}

fn default_height() -> i32 {
    DEFAULT_HEIGHT
}

/// Log the supplied query parameters.
#[utoipa::path(
    get,
    path = "/query-test",
    params(
        ("name" = String, Query, description = "Required name"),
        ("age" = Option<i32>, Query, description = "Optional age"),
        ("height" = Option<i32>, Query, description = "Height, default 175"),
        ("weight" = i32, Query, description = "Required weight")
    ),
    responses(
        (status = 200, description = "Parameters logged"),
        (status = 400, description = "Missing or malformed parameter", body = ErrorSchema)
    ),
    tags = ["diagnostics"],
    operation_id = "queryTest"
)]
#[get("/query-test")]
pub async fn query_test(query: web::Query<QueryTestParams>) -> HttpResponse {
    let QueryTestParams {
        name,
        age,
        height,
        weight,
    } = query.into_inner();
    info!(%name, ?age, height, weight, "query parameters received");
    HttpResponse::Ok().finish()
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    use super::*;
    use crate::inbound::http::error::configure_extractors;

    #[rstest]
    #[case("/query-test?name=minkyu&weight=70", StatusCode::OK)]
    #[case("/query-test?name=minkyu&age=25&height=180&weight=70", StatusCode::OK)]
    #[case("/query-test?name=minkyu", StatusCode::BAD_REQUEST)]
    #[case("/query-test?weight=70", StatusCode::BAD_REQUEST)]
    #[case("/query-test?name=minkyu&weight=heavy", StatusCode::BAD_REQUEST)]
    #[actix_web::test]
    async fn required_parameters_are_enforced(#[case] uri: &str, #[case] expected: StatusCode) {
        let app = actix_test::init_service(
            App::new().configure(configure_extractors).service(query_test),
        )
        .await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;

        assert_eq!(response.status(), expected);
        if expected == StatusCode::OK {
            assert!(actix_test::read_body(response).await.is_empty());
        }
    }

    #[rstest]
    fn height_defaults_when_absent() {
        let params = web::Query::<QueryTestParams>::from_query("name=minkyu&weight=70")
            .expect("parse query")
            .into_inner();
        assert_eq!(params.height, 175);
        assert_eq!(params.age, None);
    }
}
