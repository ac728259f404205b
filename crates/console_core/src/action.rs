//! Action descriptors: immutable values describing one staged mutating
//! operation, plus the human-readable preview shown before confirmation.

use shared::domain::{AdminUpdate, Category, NewAdmin, NewQuestion, Question, User};

/// One pending mutating operation together with the payload its execution
/// needs. Created when the operator triggers an action, consumed by a single
/// confirmation cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionDescriptor {
    AddAdmin(NewAdmin),
    EditAdmin { admin: User, updates: AdminUpdate },
    DeleteAdmin { admin: User },
    AddCategory { name: String },
    EditCategory { category: Category, new_name: String },
    DeleteCategory { category: Category },
    AddQuestion(NewQuestion),
    EditQuestion { question: Question },
    DeleteQuestion { question: Question },
    ApproveUser { user: User },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmStyle {
    Destructive,
    Affirmative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionPreview {
    pub title: String,
    pub body: String,
    pub confirm_label: String,
    pub confirm_style: ConfirmStyle,
}

impl ActionDescriptor {
    pub fn kind(&self) -> &'static str {
        match self {
            ActionDescriptor::AddAdmin(_) => "add_admin",
            ActionDescriptor::EditAdmin { .. } => "edit_admin",
            ActionDescriptor::DeleteAdmin { .. } => "delete_admin",
            ActionDescriptor::AddCategory { .. } => "add_category",
            ActionDescriptor::EditCategory { .. } => "edit_category",
            ActionDescriptor::DeleteCategory { .. } => "delete_category",
            ActionDescriptor::AddQuestion(_) => "add_question",
            ActionDescriptor::EditQuestion { .. } => "edit_question",
            ActionDescriptor::DeleteQuestion { .. } => "delete_question",
            ActionDescriptor::ApproveUser { .. } => "approve_user",
        }
    }

    /// Pure preview: names every value the operation will change, using
    /// display names rather than raw ids.
    pub fn preview(&self) -> ActionPreview {
        match self {
            ActionDescriptor::AddAdmin(admin) => ActionPreview {
                title: "Confirm Administrator Addition".to_string(),
                body: format!(
                    "Add {} ({}) as a new administrator?",
                    admin.name, admin.email
                ),
                confirm_label: "Confirm Addition".to_string(),
                confirm_style: ConfirmStyle::Affirmative,
            },
            ActionDescriptor::EditAdmin { admin, .. } => ActionPreview {
                title: "Confirm Administrator Update".to_string(),
                body: format!("Save the changes for administrator {}?", admin.name),
                confirm_label: "Confirm Update".to_string(),
                confirm_style: ConfirmStyle::Affirmative,
            },
            ActionDescriptor::DeleteAdmin { admin } => ActionPreview {
                title: "Confirm Administrator Deletion".to_string(),
                body: format!(
                    "Delete administrator {}? This action cannot be undone.",
                    admin.name
                ),
                confirm_label: "Confirm Deletion".to_string(),
                confirm_style: ConfirmStyle::Destructive,
            },
            ActionDescriptor::AddCategory { name } => ActionPreview {
                title: "Confirm Category Addition".to_string(),
                body: format!("Add the new category \"{name}\"?"),
                confirm_label: "Confirm Addition".to_string(),
                confirm_style: ConfirmStyle::Affirmative,
            },
            ActionDescriptor::EditCategory { category, new_name } => ActionPreview {
                title: "Confirm Category Update".to_string(),
                body: format!(
                    "Rename the category \"{}\" to \"{}\"?",
                    category.name, new_name
                ),
                confirm_label: "Confirm Update".to_string(),
                confirm_style: ConfirmStyle::Affirmative,
            },
            ActionDescriptor::DeleteCategory { category } => ActionPreview {
                title: "Confirm Category Deletion".to_string(),
                body: format!(
                    "Delete the category \"{}\"? Questions inside this category \
                     will NOT be deleted. This action cannot be undone.",
                    category.name
                ),
                confirm_label: "Confirm Deletion".to_string(),
                confirm_style: ConfirmStyle::Destructive,
            },
            ActionDescriptor::AddQuestion(question) => ActionPreview {
                title: "Confirm Question Addition".to_string(),
                body: format!("Add the new question \"{}\"?", question.text),
                confirm_label: "Confirm Addition".to_string(),
                confirm_style: ConfirmStyle::Affirmative,
            },
            ActionDescriptor::EditQuestion { question } => ActionPreview {
                title: "Confirm Question Update".to_string(),
                body: format!(
                    "Save the changes for the question \"{}\"?",
                    question.text
                ),
                confirm_label: "Confirm Update".to_string(),
                confirm_style: ConfirmStyle::Affirmative,
            },
            ActionDescriptor::DeleteQuestion { question } => ActionPreview {
                title: "Confirm Question Deletion".to_string(),
                body: format!(
                    "Delete the question \"{}\"? This action cannot be undone.",
                    question.text
                ),
                confirm_label: "Confirm Deletion".to_string(),
                confirm_style: ConfirmStyle::Destructive,
            },
            ActionDescriptor::ApproveUser { user } => ActionPreview {
                title: "Confirm User Approval".to_string(),
                body: format!(
                    "Approve the user {} from company {}?",
                    user.display_name(),
                    user.company_name
                ),
                confirm_label: "Confirm Approval".to_string(),
                confirm_style: ConfirmStyle::Affirmative,
            },
        }
    }
}

#[cfg(test)]
#[path = "tests/action_tests.rs"]
mod tests;
