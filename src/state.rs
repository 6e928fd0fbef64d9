// src/state.rs
use sqlx::SqlitePool;

// Estado partilhado da aplicação: apenas o pool da base de dados.
// Os serviços recebem o pool por referência em cada chamada.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

// Permite extrair o pool da DB diretamente
impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.db_pool.clone()
    }
}
