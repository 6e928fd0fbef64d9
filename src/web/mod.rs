// src/web/mod.rs
pub mod aluno_handlers;
pub mod matricula_handlers;
pub mod relatorio_handlers;
pub mod routes;
pub mod turma_handlers;
