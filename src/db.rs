// src/db.rs
use crate::error::AppResult;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

pub async fn create_db_pool() -> AppResult<SqlitePool> {
    dotenvy::dotenv().ok(); // Carrega .env
    let database_url = std::env::var("DATABASE_URL")?; // Lê URL da DB
    connect(&database_url).await
}

pub async fn connect(database_url: &str) -> AppResult<SqlitePool> {
    tracing::info!("Ligando à base de dados: {}", database_url);

    // Opções de conexão (criar se não existir, timeout)
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Executando migrações da base de dados...");
    // Executa automaticamente os ficheiros SQL em ./migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrações concluídas.");

    Ok(pool)
}

/// Cria uma base em memória isolada (cache=shared mantém os dados
/// visíveis para todas as conexões do pool).
#[cfg(test)]
pub async fn create_test_pool() -> SqlitePool {
    let db_url = format!(
        "sqlite:file:memdb_{}?mode=memory&cache=shared",
        uuid::Uuid::new_v4()
    );
    connect(&db_url)
        .await
        .expect("Falha ao criar base de dados de teste")
}
