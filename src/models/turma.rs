// src/models/turma.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Representa uma turma lida da tabela 'turmas'
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Turma {
    pub id: i64, // SQLite usa i64 para inteiros
    pub nome: String,
    pub capacidade: i64,
}

// Payload de criação (POST /turmas)
#[derive(Debug, Deserialize)]
pub struct NovaTurma {
    pub nome: String,
    pub capacidade: i64,
}
