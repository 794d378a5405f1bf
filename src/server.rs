// server.rs - Web 服务
//! 搜索页面表单和 JSON 接口的 axum 路由

use axum::{
    Form, Json, Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::html::{SEARCH_FILE_PATH, render_search_page};
use crate::api::{LoadRequest, SearchForm, SearchResponse};
use crate::engine::{Command, SearchController};
use crate::query::SearchQuery;

/// 各个 handler 共享的状态
///
/// 控制器放在一把锁后面，导入和查询逐个执行。
#[derive(Clone)]
pub struct AppState {
    controller: Arc<Mutex<SearchController>>,
    size_precision: usize,
}

impl AppState {
    pub fn new(controller: SearchController, size_precision: usize) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            size_precision,
        }
    }

    fn controller(&self) -> MutexGuard<'_, SearchController> {
        self.controller.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn handle(&self, command: Option<Command>) -> SearchResponse {
        let outcome = self.controller().handle(command);
        SearchResponse::from_outcome(outcome, self.size_precision)
    }
}

/// 构建路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route(SEARCH_FILE_PATH, get(search_page).post(submit_search_form))
        .route("/api/status", get(api_status))
        .route("/api/load", post(api_load))
        .route("/api/search", post(api_search))
        .with_state(state)
}

async fn index() -> &'static str {
    "csvfile"
}

async fn search_page(State(state): State<AppState>) -> Html<String> {
    Html(render_search_page(&state.handle(None)))
}

async fn submit_search_form(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Html<String> {
    Html(render_search_page(&state.handle(form.into_command())))
}

async fn api_status(State(state): State<AppState>) -> Json<SearchResponse> {
    Json(state.handle(None))
}

async fn api_load(
    State(state): State<AppState>,
    Json(request): Json<LoadRequest>,
) -> Json<SearchResponse> {
    Json(state.handle(Some(request.into())))
}

async fn api_search(
    State(state): State<AppState>,
    Json(query): Json<SearchQuery>,
) -> Json<SearchResponse> {
    Json(state.handle(Some(Command::Search(query))))
}
