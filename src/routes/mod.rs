pub mod envelope;
pub mod extractors;
pub mod user;

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{AppState, config::ApiStyle, middleware::log_errors};

// REST 风格：路径参数 + {data}/{error}
fn rest_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/users", post(user::create_user).get(user::list_users))
        .route(
            "/v1/users/{id}",
            get(user::read_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
}

// 信封风格：固定路径，请求和响应都带 requestId / responseCode
fn envelope_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/users",
            post(envelope::create_user)
                .get(user::list_users)
                .delete(envelope::delete_user),
        )
        .route("/search-user", post(envelope::search_user))
        .route("/update-user", post(envelope::update_user))
}

/// 两种风格都占用 `POST /v1/users`，按配置只挂载其中一种
pub fn build_router(state: AppState) -> Router {
    let router = match state.config.api_style {
        ApiStyle::Rest => rest_routes(),
        ApiStyle::Envelope => envelope_routes(),
    };

    let router = router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(axum::middleware::from_fn(log_errors)),
    );

    // 开发模式允许所有来源跨域
    #[cfg(debug_assertions)]
    let router = router.layer(tower_http::cors::CorsLayer::permissive());

    router.with_state(state)
}

#[cfg(test)]
fn test_config(api_style: ApiStyle) -> crate::config::Config {
    let mut config = crate::config::Config::from_lookup(|key| match key {
        "STORAGE_BACKEND" => Some("memory".to_string()),
        _ => None,
    })
    .expect("memory config");
    config.api_style = api_style;
    config
}

#[cfg(test)]
pub(crate) fn test_state(api_style: ApiStyle) -> AppState {
    use std::sync::Arc;

    use crate::database::MemoryUserStore;

    AppState::new(Arc::new(MemoryUserStore::new()), test_config(api_style))
}

/// 返回的存储句柄用来在请求之间切换故障
#[cfg(test)]
pub(crate) fn flaky_state(
    api_style: ApiStyle,
) -> (AppState, std::sync::Arc<crate::database::flaky::FlakyUserStore>) {
    use std::sync::Arc;

    use crate::database::flaky::FlakyUserStore;

    let store = Arc::new(FlakyUserStore::default());
    let state = AppState::new(store.clone(), test_config(api_style));
    (state, store)
}
