// src/models/mod.rs
pub mod aluno;
pub mod matricula;
pub mod turma;
