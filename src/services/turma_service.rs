// src/services/turma_service.rs
use crate::{
    error::{AppError, AppResult},
    models::turma::{NovaTurma, Turma},
    validation,
};
use sqlx::SqlitePool;

/// Busca uma turma pelo seu ID.
pub async fn find_turma_by_id(db_pool: &SqlitePool, turma_id: i64) -> AppResult<Option<Turma>> {
    let turma = sqlx::query_as::<_, Turma>(
        r#"
        SELECT id, nome, capacidade FROM turmas WHERE id = ?1
        "#,
    )
    .bind(turma_id)
    .fetch_optional(db_pool)
    .await?;
    Ok(turma)
}

/// Busca todas as turmas, na ordem natural da tabela.
pub async fn find_all_turmas(db_pool: &SqlitePool) -> AppResult<Vec<Turma>> {
    tracing::debug!("Buscando todas as turmas...");
    let turmas = sqlx::query_as::<_, Turma>(
        r#"
        SELECT id, nome, capacidade FROM turmas
        "#,
    )
    .fetch_all(db_pool)
    .await?;
    tracing::debug!("Encontradas {} turmas.", turmas.len());
    Ok(turmas)
}

/// Cria uma turma e retorna o registo completo.
pub async fn create_turma(db_pool: &SqlitePool, nova: NovaTurma) -> AppResult<Turma> {
    validation::validar_nova_turma(&nova.nome, nova.capacidade)?;
    tracing::info!("Tentando criar turma: {}", nova.nome);

    let resultado = sqlx::query(
        r#"
        INSERT INTO turmas (nome, capacidade) VALUES (?1, ?2)
        "#,
    )
    .bind(&nova.nome)
    .bind(nova.capacidade)
    .execute(db_pool)
    .await;

    // Verifica erro de constraint (nome duplicado)
    if let Err(sqlx::Error::Database(db_err)) = &resultado {
        // Códigos comuns para UNIQUE no SQLite: 19, 2067, 1555
        if db_err
            .code()
            .map_or(false, |c| c == "19" || c == "2067" || c == "1555")
        {
            tracing::warn!("Falha ao criar turma: nome '{}' já existe.", nova.nome);
            return Err(AppError::TurmaDuplicada);
        }
    }
    let turma_id = resultado?.last_insert_rowid();

    let turma = find_turma_by_id(db_pool, turma_id)
        .await?
        .ok_or(AppError::InternalServerError)?;
    tracing::info!("✅ Turma '{}' criada com id {}.", turma.nome, turma.id);
    Ok(turma)
}

/// Garante que a turma existe e ainda tem vaga livre.
/// Falha com TurmaNaoEncontrada ou TurmaLotada conforme o caso.
pub async fn garantir_vaga(db_pool: &SqlitePool, turma_id: i64) -> AppResult<Turma> {
    let turma = find_turma_by_id(db_pool, turma_id)
        .await?
        .ok_or(AppError::TurmaNaoEncontrada)?;

    let ocupadas: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM alunos WHERE turma_id = ?1
        "#,
    )
    .bind(turma_id)
    .fetch_one(db_pool)
    .await?;

    if ocupadas >= turma.capacidade {
        tracing::warn!(
            "Turma '{}' está lotada ({}/{}).",
            turma.nome,
            ocupadas,
            turma.capacidade
        );
        return Err(AppError::TurmaLotada);
    }
    Ok(turma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[tokio::test]
    async fn test_criar_e_listar_turmas() {
        let pool = db::create_test_pool().await;

        let criada = create_turma(
            &pool,
            NovaTurma {
                nome: "5A".to_string(),
                capacidade: 30,
            },
        )
        .await
        .expect("Falha ao criar turma");

        assert_eq!(criada.nome, "5A");
        assert_eq!(criada.capacidade, 30);
        assert!(criada.id > 0);

        let turmas = find_all_turmas(&pool).await.expect("Falha ao listar");
        assert_eq!(turmas, vec![criada]);
    }

    #[tokio::test]
    async fn test_nome_de_turma_duplicado() {
        let pool = db::create_test_pool().await;

        create_turma(
            &pool,
            NovaTurma {
                nome: "5A".to_string(),
                capacidade: 30,
            },
        )
        .await
        .expect("Falha ao criar turma");

        let erro = create_turma(
            &pool,
            NovaTurma {
                nome: "5A".to_string(),
                capacidade: 10,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(erro, AppError::TurmaDuplicada));
    }

    #[tokio::test]
    async fn test_capacidade_invalida() {
        let pool = db::create_test_pool().await;

        let erro = create_turma(
            &pool,
            NovaTurma {
                nome: "5A".to_string(),
                capacidade: 0,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(erro, AppError::Validacao(_)));
    }

    #[tokio::test]
    async fn test_garantir_vaga_turma_inexistente() {
        let pool = db::create_test_pool().await;

        let erro = garantir_vaga(&pool, 42).await.unwrap_err();
        assert!(matches!(erro, AppError::TurmaNaoEncontrada));
    }
}
