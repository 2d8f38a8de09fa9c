//! Scenario world driving the HTTP adapter over the in-memory store.
//!
//! Each request builds a fresh Actix test service around the same
//! [`HttpState`], so state carries across steps through the shared store.
//! Steps stay synchronous and run requests on a short-lived Actix system.

use std::sync::Arc;

use actix_web::http::Method;
use actix_web::{App, test, web};
use article_board::Trace;
use article_board::domain::{ArticleService, CommentService};
use article_board::inbound::http::articles::{
    create_article, delete_article, get_article, list_articles, update_article,
};
use article_board::inbound::http::comments::{
    create_comment, delete_comment, list_comments, update_comment,
};
use article_board::inbound::http::configure_extractors;
use article_board::inbound::http::state::{HttpState, HttpStatePorts};
use article_board::outbound::memory::InMemoryStore;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, then};
use serde_json::{Value, json};

/// Store plus the HTTP state wired over it.
#[derive(Clone)]
pub struct Board {
    pub store: Arc<InMemoryStore>,
    state: web::Data<HttpState>,
}

impl Board {
    fn new() -> Self {
        let store = Arc::new(InMemoryStore::default());
        let state = HttpState::new(HttpStatePorts::from_services(
            Arc::new(ArticleService::new(store.clone())),
            Arc::new(CommentService::new(store.clone(), store.clone())),
        ));
        Self {
            store,
            state: web::Data::new(state),
        }
    }
}

/// Status and decoded body of the last response.
#[derive(Clone, Debug)]
pub struct Captured {
    pub status: u16,
    pub body: Option<Value>,
}

#[derive(Default, ScenarioState)]
pub struct BoardWorld {
    board: Slot<Board>,
    article_ids: Slot<Vec<i64>>,
    comment: Slot<Value>,
    last: Slot<Captured>,
}

impl BoardWorld {
    pub fn board(&self) -> Board {
        self.board.get().expect("board initialised")
    }

    /// Identifiers of articles created by steps, in creation order.
    pub fn article_ids(&self) -> Vec<i64> {
        self.article_ids.get().unwrap_or_default()
    }

    pub fn nth_article(&self, index: usize) -> i64 {
        *self.article_ids().get(index).expect("article was created")
    }

    pub fn latest_article(&self) -> i64 {
        *self.article_ids().last().expect("article was created")
    }

    pub fn remember_comment(&self, comment: Value) {
        self.comment.set(comment);
    }

    pub fn comment(&self) -> Value {
        self.comment.get().expect("comment was created")
    }

    pub fn comment_id(&self) -> i64 {
        self.comment()["id"].as_i64().expect("comment id")
    }

    pub fn last(&self) -> Captured {
        self.last.get().expect("a request was sent")
    }

    pub fn last_body(&self) -> Value {
        self.last().body.expect("response body")
    }

    /// Send one request through the adapter and record the response.
    pub fn send(&self, method: Method, path: &str, payload: Option<Value>) -> Captured {
        let state = self.board().state;
        let captured = actix_rt::System::new().block_on(async move {
            let app = test::init_service(
                App::new()
                    .app_data(state)
                    .configure(configure_extractors)
                    .wrap(Trace)
                    .service(create_article)
                    .service(list_articles)
                    .service(get_article)
                    .service(update_article)
                    .service(delete_article)
                    .service(create_comment)
                    .service(list_comments)
                    .service(update_comment)
                    .service(delete_comment),
            )
            .await;

            let mut request = test::TestRequest::default().method(method).uri(path);
            if let Some(payload) = payload {
                request = request.set_json(payload);
            }
            let response = test::call_service(&app, request.to_request()).await;
            let status = response.status().as_u16();
            let bytes = test::read_body(response).await;
            Captured {
                status,
                body: serde_json::from_slice(&bytes).ok(),
            }
        });
        self.last.set(captured.clone());
        captured
    }

    pub fn create_article(&self, title: &str) -> i64 {
        let created = self.send(
            Method::POST,
            "/articles",
            Some(json!({"title": title, "content": "body", "writer": "Alice"})),
        );
        assert_eq!(created.status, 200, "article creation failed");
        let id = created
            .body
            .and_then(|body| body["id"].as_i64())
            .expect("created article id");
        let mut ids = self.article_ids();
        ids.push(id);
        self.article_ids.set(ids);
        id
    }
}

#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

#[given("an empty article board")]
pub fn an_empty_article_board(world: &BoardWorld) {
    world.board.set(Board::new());
    world.article_ids.set(Vec::new());
}

#[given("the board holds {count} articles")]
pub fn the_board_holds_articles(world: &BoardWorld, count: usize) {
    for index in 1..=count {
        world.create_article(&format!("Article {index}"));
    }
}

#[then("the response status is {status}")]
pub fn the_response_status_is(world: &BoardWorld, status: u16) {
    assert_eq!(world.last().status, status);
}

#[then("the error code is {code}")]
pub fn the_error_code_is(world: &BoardWorld, code: String) {
    assert_eq!(world.last_body()["code"], Value::String(code));
}
