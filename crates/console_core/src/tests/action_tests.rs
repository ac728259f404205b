use super::*;
use shared::domain::{
    AdminUpdate, Category, CategoryId, NewAdmin, User, UserId, UserRole, UserStatus,
};

fn admin_user(name: &str) -> User {
    User {
        id: UserId::new("a1"),
        name: name.to_string(),
        email: "admin@example.com".to_string(),
        phone: "555-0100".to_string(),
        company_name: "Acme".to_string(),
        role: UserRole::Admin,
        status: UserStatus::Approved,
    }
}

#[test]
fn rename_preview_names_old_and_new_values() {
    let preview = ActionDescriptor::EditCategory {
        category: Category {
            id: CategoryId::new("c1"),
            name: "Old".to_string(),
        },
        new_name: "New".to_string(),
    }
    .preview();

    assert!(preview.body.contains("\"Old\""));
    assert!(preview.body.contains("\"New\""));
    assert_eq!(preview.confirm_style, ConfirmStyle::Affirmative);
    // Display names only, never raw ids.
    assert!(!preview.body.contains("c1"));
}

#[test]
fn delete_category_preview_warns_questions_survive() {
    let preview = ActionDescriptor::DeleteCategory {
        category: Category {
            id: CategoryId::new("c1"),
            name: "Culture".to_string(),
        },
    }
    .preview();

    assert!(preview.body.contains("Culture"));
    assert!(preview.body.contains("NOT be deleted"));
    assert_eq!(preview.confirm_style, ConfirmStyle::Destructive);
}

#[test]
fn deletions_are_destructive_additions_affirmative() {
    let delete = ActionDescriptor::DeleteAdmin {
        admin: admin_user("Dana"),
    }
    .preview();
    assert_eq!(delete.confirm_style, ConfirmStyle::Destructive);
    assert!(delete.body.contains("Dana"));
    assert!(delete.body.contains("cannot be undone"));

    let add = ActionDescriptor::AddAdmin(NewAdmin {
        name: "Riley".to_string(),
        email: "riley@example.com".to_string(),
        password: "secret".to_string(),
        phone: "555-0101".to_string(),
    })
    .preview();
    assert_eq!(add.confirm_style, ConfirmStyle::Affirmative);
    assert!(add.body.contains("Riley"));
    assert!(add.body.contains("riley@example.com"));
}

#[test]
fn approve_user_preview_uses_company_display_name() {
    let mut user = admin_user("Jo");
    user.role = UserRole::Company;
    user.company_name = "Initech".to_string();
    user.status = UserStatus::Pending;

    let preview = ActionDescriptor::ApproveUser { user }.preview();
    assert!(preview.body.contains("Initech"));
    assert_eq!(preview.confirm_style, ConfirmStyle::Affirmative);
}

#[test]
fn edit_admin_preview_names_the_admin() {
    let preview = ActionDescriptor::EditAdmin {
        admin: admin_user("Morgan"),
        updates: AdminUpdate {
            email: Some("new@example.com".to_string()),
            ..AdminUpdate::default()
        },
    }
    .preview();

    assert!(preview.body.contains("Morgan"));
    assert_eq!(preview.title, "Confirm Administrator Update");
}

#[test]
fn every_variant_has_a_distinct_kind() {
    let kinds = [
        ActionDescriptor::AddCategory {
            name: "x".to_string(),
        }
        .kind(),
        ActionDescriptor::DeleteCategory {
            category: Category {
                id: CategoryId::new("c"),
                name: "x".to_string(),
            },
        }
        .kind(),
        ActionDescriptor::ApproveUser {
            user: admin_user("x"),
        }
        .kind(),
    ];
    assert_eq!(kinds, ["add_category", "delete_category", "approve_user"]);
}
