// src/error.rs
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de variável de ambiente: {0}")]
    EnvVarError(#[from] std::env::VarError),

    #[error("Aluno não encontrado")]
    AlunoNaoEncontrado,

    #[error("Turma não encontrada")]
    TurmaNaoEncontrada,

    #[error("Turma está lotada")]
    TurmaLotada,

    #[error("Já existe uma turma com este nome")]
    TurmaDuplicada,

    #[error("{0}")]
    Validacao(String),

    #[error("Erro interno inesperado")]
    InternalServerError,
}

// Como converter AppError numa resposta HTTP
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Loga o erro detalhado no servidor
        tracing::error!("Erro processado: {:?}", self);

        let (status, mensagem) = match &self {
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro ao aceder aos dados.".to_string(),
            ),
            AppError::EnvVarError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro de configuração.".to_string(),
            ),
            AppError::AlunoNaoEncontrado | AppError::TurmaNaoEncontrada => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::TurmaLotada | AppError::Validacao(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::TurmaDuplicada => (StatusCode::CONFLICT, self.to_string()),
            AppError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Ocorreu um erro inesperado.".to_string(),
            ),
        };

        (status, Json(json!({ "detail": mensagem }))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
