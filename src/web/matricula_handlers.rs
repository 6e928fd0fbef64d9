// src/web/matricula_handlers.rs
use crate::{
    error::AppResult, models::matricula::NovaMatricula, services::matricula_service,
    state::AppState,
};
use axum::{extract::State, Json};
use serde_json::{json, Value};

// POST /matriculas
pub async fn criar_matricula(
    State(state): State<AppState>,
    Json(payload): Json<NovaMatricula>,
) -> AppResult<Json<Value>> {
    matricula_service::matricular(&state.db_pool, payload.aluno_id, payload.turma_id).await?;
    Ok(Json(json!({ "message": "Matrícula realizada com sucesso" })))
}
