use serde::Deserialize;

use super::{NewUser, User, UserError};

fn required(value: &str, blank: UserError) -> Result<String, UserError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(blank);
    }
    Ok(value.to_string())
}

/// 去除首尾空白后校验三个字段，按 username / name / phone 的顺序报错
pub fn new_user(username: &str, name: &str, phone: &str) -> Result<NewUser, UserError> {
    Ok(NewUser {
        username: required(username, UserError::BlankUsername)?,
        name: required(name, UserError::BlankName)?,
        phone: required(phone, UserError::BlankPhone)?,
    })
}

/// 按 id 更新时的请求体，未提供的字段保持原值
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub username: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl UserPatch {
    /// 校验已提供的字段，返回去除空白后的 patch
    pub fn validate(self) -> Result<UserPatch, UserError> {
        Ok(UserPatch {
            username: self
                .username
                .map(|v| required(&v, UserError::BlankUsername))
                .transpose()?,
            name: self
                .name
                .map(|v| required(&v, UserError::BlankName))
                .transpose()?,
            phone: self
                .phone
                .map(|v| required(&v, UserError::BlankPhone))
                .transpose()?,
        })
    }

    pub fn apply(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(phone) = self.phone {
            user.phone = phone;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_all_fields() {
        let user = new_user("  bob  ", "\tBob B\n", " 555 ").unwrap();
        assert_eq!(user, new_user("bob", "Bob B", "555").unwrap());
        assert_eq!(user.username, "bob");
        assert_eq!(user.name, "Bob B");
        assert_eq!(user.phone, "555");
    }

    #[test]
    fn reports_first_blank_field() {
        assert!(matches!(
            new_user("   ", "", "").unwrap_err(),
            UserError::BlankUsername
        ));
        assert!(matches!(
            new_user("bob", "  ", "").unwrap_err(),
            UserError::BlankName
        ));
        assert!(matches!(
            new_user("bob", "Bob", " ").unwrap_err(),
            UserError::BlankPhone
        ));
    }

    #[test]
    fn patch_rejects_blank_supplied_field() {
        let patch = UserPatch {
            name: Some("   ".into()),
            ..Default::default()
        };
        assert!(matches!(patch.validate().unwrap_err(), UserError::BlankName));
    }

    #[test]
    fn patch_keeps_missing_fields() {
        let mut user = User {
            id: 1,
            username: "alice".into(),
            name: "Alice".into(),
            phone: "111".into(),
        };
        let patch = UserPatch {
            phone: Some(" 222 ".into()),
            ..Default::default()
        }
        .validate()
        .unwrap();

        patch.apply(&mut user);
        assert_eq!(user.username, "alice");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.phone, "222");
    }
}
