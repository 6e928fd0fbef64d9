// src/services/mod.rs
pub mod aluno_service;
pub mod matricula_service;
pub mod relatorio_service;
pub mod turma_service;
