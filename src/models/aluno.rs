// src/models/aluno.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Representa um aluno lido da tabela 'alunos'.
// A ordem dos campos fixa a ordem das chaves no JSON exportado
// e das colunas no CSV: id, nome, data_nascimento, email, status, turma_id.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Aluno {
    pub id: i64,
    pub nome: String,
    pub data_nascimento: NaiveDate, // YYYY-MM-DD
    pub email: Option<String>,
    pub status: bool, // true = ativo, false = inativo
    pub turma_id: Option<i64>,
}

fn status_padrao() -> bool {
    true
}

// Payload de criação (POST /alunos)
#[derive(Debug, Deserialize)]
pub struct NovoAluno {
    pub nome: String,
    pub data_nascimento: NaiveDate,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "status_padrao")]
    pub status: bool,
    #[serde(default)]
    pub turma_id: Option<i64>,
}

/// Payload de substituição integral (PUT /alunos/{id}).
/// Cada campo mutável aparece explicitamente; o id nunca é sobrescrito.
#[derive(Debug, Deserialize)]
pub struct AtualizaAluno {
    pub nome: String,
    pub data_nascimento: NaiveDate,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "status_padrao")]
    pub status: bool,
    #[serde(default)]
    pub turma_id: Option<i64>,
}

// Filtros da listagem (GET /alunos). Compõem por AND; campo ausente não filtra.
#[derive(Debug, Default, Deserialize)]
pub struct FiltroAlunos {
    pub search: Option<String>,
    pub turma_id: Option<i64>,
    pub status: Option<bool>,
}
