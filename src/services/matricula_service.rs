// src/services/matricula_service.rs
use crate::{
    error::{AppError, AppResult},
    services::{aluno_service, turma_service},
    validation,
};
use sqlx::SqlitePool;

/// Matricula um aluno numa turma: grava alunos.turma_id e reativa o aluno.
/// A ordem das verificações é observável nas respostas: aluno primeiro,
/// depois turma, depois capacidade.
pub async fn matricular(db_pool: &SqlitePool, aluno_id: i64, turma_id: i64) -> AppResult {
    validation::validar_ids_matricula(aluno_id, turma_id)?;
    tracing::info!("Matriculando aluno {} na turma {}...", aluno_id, turma_id);

    if aluno_service::find_aluno_by_id(db_pool, aluno_id)
        .await?
        .is_none()
    {
        return Err(AppError::AlunoNaoEncontrado);
    }
    if turma_service::find_turma_by_id(db_pool, turma_id)
        .await?
        .is_none()
    {
        return Err(AppError::TurmaNaoEncontrada);
    }

    // Contagem de vagas e gravação num único UPDATE condicional: o SQLite
    // serializa escritas, então duas matrículas concorrentes na mesma turma
    // não passam ambas do limite de capacidade.
    let rows_affected = sqlx::query(
        r#"
        UPDATE alunos
        SET turma_id = ?1, status = 1
        WHERE id = ?2
          AND (SELECT COUNT(*) FROM alunos WHERE turma_id = ?1)
              < (SELECT capacidade FROM turmas WHERE id = ?1)
        "#,
    )
    .bind(turma_id)
    .bind(aluno_id)
    .execute(db_pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Matrícula recusada: turma {} está lotada.", turma_id);
        return Err(AppError::TurmaLotada);
    }

    tracing::info!("✅ Matrícula realizada: aluno {} → turma {}.", aluno_id, turma_id);
    Ok(())
}
