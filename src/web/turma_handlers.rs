// src/web/turma_handlers.rs
use crate::{
    error::AppResult,
    models::turma::{NovaTurma, Turma},
    services::turma_service,
    state::AppState,
};
use axum::{extract::State, Json};

// GET /turmas
pub async fn listar_turmas(State(state): State<AppState>) -> AppResult<Json<Vec<Turma>>> {
    let turmas = turma_service::find_all_turmas(&state.db_pool).await?;
    Ok(Json(turmas))
}

// POST /turmas
pub async fn criar_turma(
    State(state): State<AppState>,
    Json(payload): Json<NovaTurma>,
) -> AppResult<Json<Turma>> {
    let turma = turma_service::create_turma(&state.db_pool, payload).await?;
    Ok(Json(turma))
}
