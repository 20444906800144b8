// 用户领域逻辑：校验、分页、增删改查
// 两种接口形式（REST / 信封）共用这里的实现

mod error;
mod input;
mod paging;
mod service;

pub use error::{UserError, UserKey};
pub use input::{UserPatch, new_user};
pub use paging::Paging;
pub use service::UserService;

pub use crate::database::{NewUser, User};
