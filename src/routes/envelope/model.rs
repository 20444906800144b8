use serde::{Deserialize, Serialize};

use crate::users::User;
use crate::utils::{response_codes, response_id, response_time};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            name: user.name,
            phone: user.phone,
        }
    }
}

/// `{requestId, requestTime, data: {username, name, phone}}`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeRequest {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub request_time: String,
    #[serde(default)]
    pub data: UserData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeResponse {
    pub response_id: String,
    pub response_time: String,
    pub response_code: String,
    pub response_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<UserData>,
}

impl EnvelopeResponse {
    pub fn success(request: &EnvelopeRequest, message: &str, user: Option<User>) -> Self {
        Self {
            response_id: response_id(&request.request_id),
            response_time: response_time(),
            response_code: response_codes::SUCCESS.into(),
            response_message: message.into(),
            data: user.map(UserData::from),
        }
    }

    pub fn failure(request: &EnvelopeRequest, code: &str, message: String) -> Self {
        Self {
            response_id: response_id(&request.request_id),
            response_time: response_time(),
            response_code: code.into(),
            response_message: message,
            data: None,
        }
    }
}
