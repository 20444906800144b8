use axum::{
    body::{Body, to_bytes},
    http::Request,
    response::Response,
};
use tracing::{error, warn};

const MAX_LOGGED_BODY: usize = 16 * 1024;

/// 记录所有失败响应（4xx/5xx）的状态码和响应体
pub async fn log_errors(req: Request<Body>, next: axum::middleware::Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;

    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to read error response body: {}", e);
            return Response::from_parts(parts, Body::empty());
        }
    };
    // 只记录前缀，响应体原样返回
    let body_str = String::from_utf8_lossy(&bytes[..bytes.len().min(MAX_LOGGED_BODY)]);

    if status.is_server_error() {
        error!("{} {} failed - Status: {}, Body: {}", method, uri, status, body_str);
    } else {
        warn!("{} {} rejected - Status: {}, Body: {}", method, uri, status, body_str);
    }

    // 重置body以便重新构建响应
    parts.headers.remove(axum::http::header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
