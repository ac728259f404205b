use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}

id_newtype!(UserId);
id_newtype!(CategoryId);
id_newtype!(QuestionId);
id_newtype!(AnswerId);
id_newtype!(LogId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Company,
    Employee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub role: UserRole,
    pub status: UserStatus,
}

impl User {
    /// Company accounts are presented by their company name; everyone else
    /// by their personal name.
    pub fn display_name(&self) -> &str {
        match self.role {
            UserRole::Company => &self.company_name,
            _ => &self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: AnswerId,
    pub text: String,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub category_id: CategoryId,
    pub text: String,
    pub answers: Vec<AnswerOption>,
    pub target_role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

/// Partial administrator update; only fields that actually changed are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl AdminUpdate {
    /// Builds an update containing only the fields that differ from the
    /// original admin record. An empty new password means "keep current".
    pub fn diff(original: &User, name: &str, email: &str, phone: &str, password: &str) -> Self {
        let mut updates = Self::default();
        if !name.is_empty() && name != original.name {
            updates.name = Some(name.to_string());
        }
        if !email.is_empty() && email != original.email {
            updates.email = Some(email.to_string());
        }
        if !phone.is_empty() && phone != original.phone {
            updates.phone = Some(phone.to_string());
        }
        if !password.is_empty() {
            updates.password = Some(password.to_string());
        }
        updates
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.password.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAnswer {
    pub text: String,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub category_id: CategoryId,
    pub text: String,
    pub answers: Vec<NewAnswer>,
    pub target_role: UserRole,
}

/// Outcome contract every external mutating operation returns.
/// `success = false` is a recoverable application-level failure, not a
/// transport fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CommitResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogType {
    Approval,
    Login,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: LogId,
    pub log_type: LogType,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub admin_name: Option<String>,
}

/// One day's aggregate event count in the 7-day activity chart window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date_label: String,
    pub count: u32,
}

/// Combined categories+questions payload returned by the questionnaire
/// fetch; both sections are always replaced together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireData {
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> User {
        User {
            id: UserId::new("a1"),
            name: "Morgan".to_string(),
            email: "morgan@example.com".to_string(),
            phone: "555-0100".to_string(),
            company_name: String::new(),
            role: UserRole::Admin,
            status: UserStatus::Approved,
        }
    }

    #[test]
    fn diff_keeps_only_changed_fields() {
        let updates = AdminUpdate::diff(
            &admin(),
            "Morgan",
            "other@example.com",
            "555-0100",
            "",
        );
        assert_eq!(updates.email.as_deref(), Some("other@example.com"));
        assert!(updates.name.is_none());
        assert!(updates.phone.is_none());
        assert!(updates.password.is_none());
    }

    #[test]
    fn diff_with_no_changes_is_empty() {
        let updates = AdminUpdate::diff(&admin(), "Morgan", "morgan@example.com", "555-0100", "");
        assert!(updates.is_empty());
    }

    #[test]
    fn empty_password_means_keep_current() {
        let with_password = AdminUpdate::diff(&admin(), "", "", "", "hunter2");
        assert_eq!(with_password.password.as_deref(), Some("hunter2"));

        let without = AdminUpdate::diff(&admin(), "", "", "", "");
        assert!(without.password.is_none());
    }

    #[test]
    fn company_users_display_their_company_name() {
        let mut user = admin();
        user.role = UserRole::Company;
        user.company_name = "Initech".to_string();
        assert_eq!(user.display_name(), "Initech");

        assert_eq!(admin().display_name(), "Morgan");
    }
}
