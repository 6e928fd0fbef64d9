// src/web/aluno_handlers.rs
use crate::{
    error::AppResult,
    models::aluno::{AtualizaAluno, Aluno, FiltroAlunos, NovoAluno},
    services::aluno_service,
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

// GET /alunos?search=&turma_id=&status=
pub async fn listar_alunos(
    State(state): State<AppState>,
    Query(filtro): Query<FiltroAlunos>,
) -> AppResult<Json<Vec<Aluno>>> {
    let alunos = aluno_service::find_alunos(&state.db_pool, &filtro).await?;
    Ok(Json(alunos))
}

// POST /alunos
pub async fn criar_aluno(
    State(state): State<AppState>,
    Json(payload): Json<NovoAluno>,
) -> AppResult<Json<Aluno>> {
    let aluno = aluno_service::create_aluno(&state.db_pool, payload).await?;
    Ok(Json(aluno))
}

// PUT /alunos/{id}
pub async fn atualizar_aluno(
    State(state): State<AppState>,
    Path(aluno_id): Path<i64>,
    Json(payload): Json<AtualizaAluno>,
) -> AppResult<Json<Aluno>> {
    let aluno = aluno_service::update_aluno(&state.db_pool, aluno_id, payload).await?;
    Ok(Json(aluno))
}

// DELETE /alunos/{id}
pub async fn deletar_aluno(
    State(state): State<AppState>,
    Path(aluno_id): Path<i64>,
) -> AppResult<Json<Value>> {
    aluno_service::delete_aluno(&state.db_pool, aluno_id).await?;
    Ok(Json(json!({ "message": "Aluno deletado com sucesso" })))
}
