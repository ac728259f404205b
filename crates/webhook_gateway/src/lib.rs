//! HTTP gateway onto the remote scoring service's webhook endpoints.
//!
//! Implements [`ScoreBackend`] over reqwest. Transport and HTTP-status faults
//! surface as errors; application-level rejections travel inside the
//! [`CommitResult`] envelope. List endpoints that answer with garbage are
//! logged and degraded to an empty list so one bad payload cannot wedge the
//! console.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use console_core::ScoreBackend;
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    domain::{
        AdminUpdate, Category, CommitResult, LogEntry, LogType, NewAdmin, NewQuestion, Question,
        QuestionnaireData, User, UserRole,
    },
    error::{ApiException, ErrorCode},
};
use tracing::error;

pub mod config;
mod wire;

pub use config::{load_settings, Settings};

use wire::{
    map_admin, map_category, map_log_entry, map_pending_user, map_question, role_to_wire,
    WireAdmin, WireLogEntry, WireOutcome, WirePendingUser, WireQuestion, WireQuestionnaire,
};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

pub struct WebhookGateway {
    http: reqwest::Client,
    service_url: String,
}

#[derive(Debug, Serialize)]
struct AddAdminBody<'a> {
    nome: &'a str,
    email: &'a str,
    senha: &'a str,
    telefone: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdateAdminBody<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    nome: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    telefone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    senha: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct IdBody<'a> {
    id: &'a str,
}

#[derive(Debug, Serialize)]
struct AddCategoryBody<'a> {
    nome: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdateCategoryBody<'a> {
    id: &'a str,
    nome: &'a str,
}

#[derive(Debug, Serialize)]
struct AnswerBody<'a> {
    texto: &'a str,
    pontos: i32,
}

#[derive(Debug, Serialize)]
struct AddQuestionBody<'a> {
    pergunta: &'a str,
    categoria_id: &'a str,
    publico: &'static str,
    respostas: Vec<AnswerBody<'a>>,
}

#[derive(Debug, Serialize)]
struct UpdateQuestionBody<'a> {
    id: &'a str,
    pergunta: &'a str,
    categoria_id: &'a str,
    publico: &'static str,
    respostas: Vec<AnswerBody<'a>>,
}

impl WebhookGateway {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_seconds))
            .build()
            .context("failed to build http client")?;

        Ok(Self {
            http,
            service_url: settings.service_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_text(&self, path: &str) -> Result<String> {
        let response = self
            .http
            .get(format!("{}{path}", self.service_url))
            .send()
            .await
            .with_context(|| format!("request to {path} failed"))?;
        if !response.status().is_success() {
            return Err(classify_status(response.status(), path).into());
        }
        let text = response
            .text()
            .await
            .with_context(|| format!("failed to read response body from {path}"))?;
        Ok(text)
    }

    /// GET a list endpoint. Empty bodies and malformed payloads both produce
    /// an empty list; only transport and status faults are errors.
    async fn fetch_list<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<Vec<T>> {
        let text = self.get_text(path).await?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let value: serde_json::Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(err) => {
                error!(endpoint = path, "gateway: {what} payload was not valid JSON: {err}");
                return Ok(Vec::new());
            }
        };
        if !value.is_array() {
            error!(endpoint = path, "gateway: {what} endpoint did not return an array");
            return Ok(Vec::new());
        }
        match serde_json::from_value::<Vec<T>>(value) {
            Ok(items) => Ok(items),
            Err(err) => {
                error!(endpoint = path, "gateway: {what} payload was malformed: {err}");
                Ok(Vec::new())
            }
        }
    }

    /// POST a mutation and decode its outcome envelope. An empty or
    /// unparseable success body counts as success.
    async fn post_commit<B: Serialize>(&self, path: &str, body: &B) -> Result<CommitResult> {
        let response = self
            .http
            .post(format!("{}{path}", self.service_url))
            .json(body)
            .send()
            .await
            .with_context(|| format!("request to {path} failed"))?;
        if !response.status().is_success() {
            return Err(classify_status(response.status(), path).into());
        }
        let text = response
            .text()
            .await
            .with_context(|| format!("failed to read response body from {path}"))?;

        if text.trim().is_empty() {
            return Ok(CommitResult::ok());
        }
        match serde_json::from_str::<WireOutcome>(&text) {
            Ok(outcome) => Ok(outcome.into()),
            Err(_) => Ok(CommitResult::ok()),
        }
    }
}

fn classify_status(status: StatusCode, path: &str) -> ApiException {
    let code = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ErrorCode::Unauthorized,
        StatusCode::NOT_FOUND => ErrorCode::NotFound,
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ErrorCode::Validation,
        status if status.is_server_error() => ErrorCode::Upstream,
        _ => ErrorCode::Internal,
    };
    ApiException::new(code, format!("request to {path} returned {status}"))
}

#[async_trait]
impl ScoreBackend for WebhookGateway {
    async fn add_admin(&self, admin: &NewAdmin) -> Result<CommitResult> {
        self.post_commit(
            "/admins/add",
            &AddAdminBody {
                nome: &admin.name,
                email: &admin.email,
                senha: &admin.password,
                telefone: &admin.phone,
            },
        )
        .await
    }

    async fn update_admin(&self, admin: &User, updates: &AdminUpdate) -> Result<CommitResult> {
        self.post_commit(
            "/admins/update",
            &UpdateAdminBody {
                id: admin.id.as_str(),
                nome: updates.name.as_deref(),
                email: updates.email.as_deref(),
                telefone: updates.phone.as_deref(),
                senha: updates.password.as_deref(),
            },
        )
        .await
    }

    async fn delete_admin(&self, admin: &User) -> Result<CommitResult> {
        self.post_commit(
            "/admins/delete",
            &IdBody {
                id: admin.id.as_str(),
            },
        )
        .await
    }

    async fn add_category(&self, name: &str) -> Result<CommitResult> {
        self.post_commit("/categories/add", &AddCategoryBody { nome: name })
            .await
    }

    async fn update_category(&self, category: &Category, new_name: &str) -> Result<CommitResult> {
        self.post_commit(
            "/categories/update",
            &UpdateCategoryBody {
                id: category.id.as_str(),
                nome: new_name,
            },
        )
        .await
    }

    async fn delete_category(&self, category: &Category) -> Result<CommitResult> {
        self.post_commit(
            "/categories/delete",
            &IdBody {
                id: category.id.as_str(),
            },
        )
        .await
    }

    async fn add_question(&self, question: &NewQuestion) -> Result<CommitResult> {
        self.post_commit(
            "/questions/add",
            &AddQuestionBody {
                pergunta: &question.text,
                categoria_id: question.category_id.as_str(),
                publico: role_to_wire(question.target_role),
                respostas: question
                    .answers
                    .iter()
                    .map(|answer| AnswerBody {
                        texto: &answer.text,
                        pontos: answer.score,
                    })
                    .collect(),
            },
        )
        .await
    }

    async fn update_question(&self, question: &Question) -> Result<CommitResult> {
        self.post_commit(
            "/questions/update",
            &UpdateQuestionBody {
                id: question.id.as_str(),
                pergunta: &question.text,
                categoria_id: question.category_id.as_str(),
                publico: role_to_wire(question.target_role),
                respostas: question
                    .answers
                    .iter()
                    .map(|answer| AnswerBody {
                        texto: &answer.text,
                        pontos: answer.score,
                    })
                    .collect(),
            },
        )
        .await
    }

    async fn delete_question(&self, question: &Question) -> Result<CommitResult> {
        self.post_commit(
            "/questions/delete",
            &IdBody {
                id: question.id.as_str(),
            },
        )
        .await
    }

    async fn approve_user(&self, user: &User) -> Result<CommitResult> {
        self.post_commit(
            "/users/approve",
            &IdBody {
                id: user.id.as_str(),
            },
        )
        .await
    }

    async fn fetch_admins(&self) -> Result<Vec<User>> {
        let wires: Vec<WireAdmin> = self.fetch_list("/admins", "admin list").await?;
        Ok(wires.into_iter().map(map_admin).collect())
    }

    async fn fetch_pending_users(&self) -> Result<Vec<User>> {
        let wires: Vec<WirePendingUser> =
            self.fetch_list("/users/pending", "pending user list").await?;
        Ok(wires.into_iter().map(map_pending_user).collect())
    }

    async fn fetch_questionnaire_data(&self) -> Result<QuestionnaireData> {
        let text = self.get_text("/questionnaire").await?;
        let data = if text.trim().is_empty() {
            WireQuestionnaire::default()
        } else {
            match serde_json::from_str::<WireQuestionnaire>(&text) {
                Ok(data) => data,
                Err(err) => {
                    error!("gateway: questionnaire payload was malformed: {err}");
                    WireQuestionnaire::default()
                }
            }
        };

        let categories: Vec<Category> = data.categorias.into_iter().map(map_category).collect();
        let mut questions: Vec<Question> = data
            .perguntas
            .into_iter()
            .map(|wire| map_question(wire, &categories, UserRole::Company, ""))
            .collect();

        // Employee questions live behind a separate endpoint and get a
        // distinct id namespace so the two streams cannot collide.
        let employee: Vec<WireQuestion> = self
            .fetch_list("/employee-questions", "employee question list")
            .await?;
        questions.extend(
            employee
                .into_iter()
                .map(|wire| map_question(wire, &categories, UserRole::Employee, "emp-")),
        );

        Ok(QuestionnaireData {
            categories,
            questions,
        })
    }

    async fn fetch_approval_logs(&self) -> Result<Vec<LogEntry>> {
        let wires: Vec<WireLogEntry> = self.fetch_list("/logs/approvals", "approval log").await?;
        Ok(wires
            .into_iter()
            .map(|wire| map_log_entry(wire, LogType::Approval))
            .collect())
    }

    async fn fetch_login_logs(&self) -> Result<Vec<LogEntry>> {
        let wires: Vec<WireLogEntry> = self.fetch_list("/logs/logins", "login log").await?;
        Ok(wires
            .into_iter()
            .map(|wire| map_log_entry(wire, LogType::Login))
            .collect())
    }
}
