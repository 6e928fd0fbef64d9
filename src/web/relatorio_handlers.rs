// src/web/relatorio_handlers.rs
use crate::{
    error::AppResult,
    services::relatorio_service::{self, FormatoRelatorio},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ParamsRelatorio {
    pub format: String,
}

// GET /relatorios/alunos?format=csv|json
pub async fn exportar_alunos(
    State(state): State<AppState>,
    Query(params): Query<ParamsRelatorio>,
) -> AppResult<Response> {
    let formato = params.format.parse::<FormatoRelatorio>()?;
    let corpo = relatorio_service::exportar_alunos(&state.db_pool, formato).await?;

    let content_type = match formato {
        FormatoRelatorio::Json => "application/json",
        FormatoRelatorio::Csv => "text/csv; charset=utf-8",
    };
    Ok(([(header::CONTENT_TYPE, content_type)], corpo).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_formato_desconhecido_retorna_400() {
        let state = AppState {
            db_pool: db::create_test_pool().await,
        };

        let erro = exportar_alunos(
            State(state),
            Query(ParamsRelatorio {
                format: "xml".to_string(),
            }),
        )
        .await
        .unwrap_err();

        let resposta = erro.into_response();
        assert_eq!(resposta.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_content_type_por_formato() {
        let state = AppState {
            db_pool: db::create_test_pool().await,
        };

        let resposta = exportar_alunos(
            State(state.clone()),
            Query(ParamsRelatorio {
                format: "csv".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(
            resposta.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );

        let resposta = exportar_alunos(
            State(state),
            Query(ParamsRelatorio {
                format: "json".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(resposta.headers()[header::CONTENT_TYPE], "application/json");
    }
}
