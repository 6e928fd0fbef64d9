// src/web/routes.rs
use crate::{
    state::AppState,
    web::{aluno_handlers, matricula_handlers, relatorio_handlers, turma_handlers},
};
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/turmas",
            get(turma_handlers::listar_turmas).post(turma_handlers::criar_turma),
        )
        .route(
            "/alunos",
            get(aluno_handlers::listar_alunos).post(aluno_handlers::criar_aluno),
        )
        .route(
            "/alunos/{id}",
            put(aluno_handlers::atualizar_aluno).delete(aluno_handlers::deletar_aluno),
        )
        .route("/matriculas", post(matricula_handlers::criar_matricula))
        .route(
            "/relatorios/alunos",
            get(relatorio_handlers::exportar_alunos),
        )
        .with_state(app_state)
}
