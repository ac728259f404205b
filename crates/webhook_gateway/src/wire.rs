//! Payload shapes spoken by the remote scoring service. The service predates
//! this console and uses Portuguese field names on the wire; everything is
//! translated into the shared domain model at this boundary.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use shared::domain::{
    AnswerId, AnswerOption, Category, CategoryId, CommitResult, LogEntry, LogId, LogType, Question,
    QuestionId, User, UserId, UserRole, UserStatus,
};

/// The service is inconsistent about id types; some endpoints send numbers,
/// others strings. Normalize everything to a string id.
pub(crate) fn id_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn role_from_wire(raw: &str) -> UserRole {
    match raw {
        "admin" => UserRole::Admin,
        "funcionario" => UserRole::Employee,
        _ => UserRole::Company,
    }
}

pub(crate) fn role_to_wire(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "admin",
        UserRole::Company => "empresa",
        UserRole::Employee => "funcionario",
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireAdmin {
    pub id: Value,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefone: String,
}

pub(crate) fn map_admin(wire: WireAdmin) -> User {
    User {
        id: UserId::new(id_string(&wire.id)),
        name: wire.nome,
        email: wire.email,
        phone: wire.telefone,
        company_name: String::new(),
        role: UserRole::Admin,
        status: UserStatus::Approved,
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WirePendingUser {
    pub id: Value,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default)]
    pub empresa: String,
    #[serde(default)]
    pub papel: String,
}

pub(crate) fn map_pending_user(wire: WirePendingUser) -> User {
    User {
        id: UserId::new(id_string(&wire.id)),
        name: wire.nome,
        email: wire.email,
        phone: wire.telefone,
        company_name: wire.empresa,
        role: role_from_wire(&wire.papel),
        status: UserStatus::Pending,
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireCategory {
    pub id: Value,
    #[serde(default)]
    pub nome: String,
}

pub(crate) fn map_category(wire: WireCategory) -> Category {
    Category {
        id: CategoryId::new(id_string(&wire.id)),
        name: wire.nome,
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireAnswer {
    #[serde(default)]
    pub texto: String,
    #[serde(default)]
    pub pontos: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireQuestion {
    pub id: Value,
    #[serde(default)]
    pub pergunta: String,
    #[serde(default)]
    pub categoria: String,
    #[serde(default)]
    pub respostas: Vec<WireAnswer>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireQuestionnaire {
    #[serde(default)]
    pub categorias: Vec<WireCategory>,
    #[serde(default)]
    pub perguntas: Vec<WireQuestion>,
}

/// Questions reference their category by display name, not id. Unknown names
/// get a synthetic id so the question still renders under a heading.
pub(crate) fn resolve_category_id(name: &str, categories: &[Category]) -> CategoryId {
    categories
        .iter()
        .find(|category| category.name == name)
        .map(|category| category.id.clone())
        .unwrap_or_else(|| {
            CategoryId::new(format!(
                "cat-fallback-{}",
                name.trim().to_lowercase().replace(' ', "-")
            ))
        })
}

pub(crate) fn map_question(
    wire: WireQuestion,
    categories: &[Category],
    target_role: UserRole,
    id_prefix: &str,
) -> Question {
    let question_id = format!("{id_prefix}{}", id_string(&wire.id));
    let answers = wire
        .respostas
        .into_iter()
        .enumerate()
        .map(|(index, answer)| AnswerOption {
            id: AnswerId::new(format!("{question_id}-a{index}")),
            text: answer.texto,
            score: answer.pontos,
        })
        .collect();

    Question {
        id: QuestionId::new(question_id),
        category_id: resolve_category_id(&wire.categoria, categories),
        text: wire.pergunta,
        answers,
        target_role,
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireLogEntry {
    pub id: Value,
    #[serde(default, alias = "mensagem")]
    pub message: String,
    #[serde(alias = "data_hora")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, alias = "admin")]
    pub admin_name: Option<String>,
}

pub(crate) fn map_log_entry(wire: WireLogEntry, log_type: LogType) -> LogEntry {
    LogEntry {
        id: LogId::new(id_string(&wire.id)),
        log_type,
        message: wire.message,
        timestamp: wire.timestamp,
        admin_name: wire.admin_name,
    }
}

fn default_success() -> bool {
    true
}

/// Mutation outcome envelope. The service omits the envelope entirely on
/// success, and some endpoints localize the field names.
#[derive(Debug, Deserialize)]
pub(crate) struct WireOutcome {
    #[serde(default = "default_success", alias = "sucesso")]
    pub success: bool,
    #[serde(default, alias = "mensagem")]
    pub message: Option<String>,
}

impl From<WireOutcome> for CommitResult {
    fn from(outcome: WireOutcome) -> Self {
        CommitResult {
            success: outcome.success,
            message: outcome.message,
        }
    }
}
