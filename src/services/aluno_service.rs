// src/services/aluno_service.rs
use crate::{
    error::{AppError, AppResult},
    models::aluno::{AtualizaAluno, Aluno, FiltroAlunos, NovoAluno},
    services::turma_service,
    validation,
};
use sqlx::SqlitePool;

/// Busca um aluno pelo seu ID.
pub async fn find_aluno_by_id(db_pool: &SqlitePool, aluno_id: i64) -> AppResult<Option<Aluno>> {
    let aluno = sqlx::query_as::<_, Aluno>(
        r#"
        SELECT id, nome, data_nascimento, email, status, turma_id
        FROM alunos WHERE id = ?1
        "#,
    )
    .bind(aluno_id)
    .fetch_optional(db_pool)
    .await?;
    Ok(aluno)
}

/// Lista alunos aplicando os filtros opcionais (compostos por AND):
/// - search: substring do nome, sem distinção de maiúsculas;
/// - turma_id: igualdade exata;
/// - status: igualdade exata.
pub async fn find_alunos(db_pool: &SqlitePool, filtro: &FiltroAlunos) -> AppResult<Vec<Aluno>> {
    tracing::debug!("Buscando alunos com filtro: {:?}", filtro);
    let alunos = sqlx::query_as::<_, Aluno>(
        r#"
        SELECT id, nome, data_nascimento, email, status, turma_id
        FROM alunos
        WHERE (?1 IS NULL OR lower(nome) LIKE '%' || lower(?1) || '%')
          AND (?2 IS NULL OR turma_id = ?2)
          AND (?3 IS NULL OR status = ?3)
        "#,
    )
    .bind(filtro.search.as_deref())
    .bind(filtro.turma_id)
    .bind(filtro.status)
    .fetch_all(db_pool)
    .await?;
    tracing::debug!("Encontrados {} alunos.", alunos.len());
    Ok(alunos)
}

/// Cria um aluno e retorna o registo completo.
pub async fn create_aluno(db_pool: &SqlitePool, dados: NovoAluno) -> AppResult<Aluno> {
    validation::validar_nome_aluno(&dados.nome)?;
    validation::validar_idade_minima(dados.data_nascimento)?;
    if let Some(email) = &dados.email {
        validation::validar_email(email)?;
    }
    // Criar já vinculado a uma turma passa pela mesma verificação de vaga.
    if let Some(turma_id) = dados.turma_id {
        turma_service::garantir_vaga(db_pool, turma_id).await?;
    }

    tracing::info!("Tentando criar aluno: {}", dados.nome);
    let aluno_id = sqlx::query(
        r#"
        INSERT INTO alunos (nome, data_nascimento, email, status, turma_id)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(&dados.nome)
    .bind(dados.data_nascimento)
    .bind(dados.email.as_deref())
    .bind(dados.status)
    .bind(dados.turma_id)
    .execute(db_pool)
    .await?
    .last_insert_rowid();

    let aluno = find_aluno_by_id(db_pool, aluno_id)
        .await?
        .ok_or(AppError::InternalServerError)?;
    tracing::info!("✅ Aluno '{}' criado com id {}.", aluno.nome, aluno.id);
    Ok(aluno)
}

/// Substituição integral do registo (PUT). Todos os campos do payload
/// sobrescrevem o registo guardado, exceto o id.
/// Quando a turma de destino muda, a vaga é verificada de novo para a
/// atualização não furar o limite de capacidade por fora da matrícula.
pub async fn update_aluno(
    db_pool: &SqlitePool,
    aluno_id: i64,
    dados: AtualizaAluno,
) -> AppResult<Aluno> {
    let atual = find_aluno_by_id(db_pool, aluno_id)
        .await?
        .ok_or(AppError::AlunoNaoEncontrado)?;

    validation::validar_nome_aluno(&dados.nome)?;
    if let Some(email) = &dados.email {
        validation::validar_email(email)?;
    }
    if let Some(turma_id) = dados.turma_id {
        if atual.turma_id != Some(turma_id) {
            turma_service::garantir_vaga(db_pool, turma_id).await?;
        }
    }

    tracing::info!("Atualizando dados do aluno {}", aluno_id);
    sqlx::query(
        r#"
        UPDATE alunos
        SET nome = ?1, data_nascimento = ?2, email = ?3, status = ?4, turma_id = ?5
        WHERE id = ?6
        "#,
    )
    .bind(&dados.nome)
    .bind(dados.data_nascimento)
    .bind(dados.email.as_deref())
    .bind(dados.status)
    .bind(dados.turma_id)
    .bind(aluno_id)
    .execute(db_pool)
    .await?;

    find_aluno_by_id(db_pool, aluno_id)
        .await?
        .ok_or(AppError::AlunoNaoEncontrado)
}

/// Remove um aluno pelo ID. Falha com AlunoNaoEncontrado se não existir.
pub async fn delete_aluno(db_pool: &SqlitePool, aluno_id: i64) -> AppResult {
    let rows_affected = sqlx::query(
        r#"
        DELETE FROM alunos WHERE id = ?1
        "#,
    )
    .bind(aluno_id)
    .execute(db_pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao deletar: aluno {} não encontrado.", aluno_id);
        return Err(AppError::AlunoNaoEncontrado);
    }
    tracing::info!("✅ Aluno {} deletado.", aluno_id);
    Ok(())
}
