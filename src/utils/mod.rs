use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

// REST 风格成功响应：{"data": ...}
pub fn data_response<T: Serialize>(data: T) -> Json<DataResponse<T>> {
    Json(DataResponse { data })
}

/// 信封响应中的 responseTime
pub fn response_time() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// 信封响应中的 responseId：沿用非空的 requestId，否则生成新的
pub fn response_id(request_id: &str) -> String {
    let request_id = request_id.trim();
    if request_id.is_empty() {
        uuid::Uuid::new_v4().to_string()
    } else {
        request_id.to_string()
    }
}

pub mod response_codes {
    pub const SUCCESS: &str = "00";
    pub const BLANK_USERNAME: &str = "01";
    pub const BLANK_NAME: &str = "02";
    pub const BLANK_PHONE: &str = "03";
    pub const DUPLICATE: &str = "04";
    pub const INSERT_FAILED: &str = "05";
    pub const SEARCH_FAILED: &str = "06";
    pub const SEARCH_NOT_FOUND: &str = "07";
    pub const UPDATE_NOT_FOUND: &str = "09";
    pub const WRITE_FAILED: &str = "10";
}
