// src/services/relatorio_service.rs
use crate::{
    error::{AppError, AppResult},
    models::aluno::FiltroAlunos,
    services::aluno_service,
};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Formatos aceites pelo relatório de alunos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatoRelatorio {
    Csv,
    Json,
}

impl FromStr for FormatoRelatorio {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(FormatoRelatorio::Csv),
            "json" => Ok(FormatoRelatorio::Json),
            outro => Err(AppError::Validacao(format!(
                "Formato inválido: '{}'. Use 'csv' ou 'json'.",
                outro
            ))),
        }
    }
}

/// Serializa a tabela inteira de alunos como texto, sem paginação.
/// Campos e ordem são os mesmos nos dois formatos:
/// id, nome, data_nascimento (ISO-8601), email, status, turma_id.
pub async fn exportar_alunos(db_pool: &SqlitePool, formato: FormatoRelatorio) -> AppResult<String> {
    let alunos = aluno_service::find_alunos(db_pool, &FiltroAlunos::default()).await?;
    tracing::info!("Exportando {} alunos em {:?}.", alunos.len(), formato);

    match formato {
        FormatoRelatorio::Json => serde_json::to_string(&alunos).map_err(|e| {
            tracing::error!("Erro ao serializar relatório JSON: {}", e);
            AppError::InternalServerError
        }),
        FormatoRelatorio::Csv => {
            // Cabeçalho escrito à mão para sair mesmo com a tabela vazia.
            let mut wtr = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(Vec::new());
            wtr.write_record(["id", "nome", "data_nascimento", "email", "status", "turma_id"])
                .map_err(|e| {
                    tracing::error!("Erro ao escrever cabeçalho CSV: {}", e);
                    AppError::InternalServerError
                })?;
            for aluno in &alunos {
                wtr.serialize(aluno).map_err(|e| {
                    tracing::error!("Erro ao serializar aluno {} em CSV: {}", aluno.id, e);
                    AppError::InternalServerError
                })?;
            }
            let bytes = wtr.into_inner().map_err(|e| {
                tracing::error!("Erro ao finalizar CSV: {}", e);
                AppError::InternalServerError
            })?;
            String::from_utf8(bytes).map_err(|e| {
                tracing::error!("Relatório CSV não é UTF-8 válido: {}", e);
                AppError::InternalServerError
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db,
        models::{aluno::Aluno, aluno::NovoAluno, turma::NovaTurma},
        services::turma_service,
    };
    use chrono::NaiveDate;

    async fn popular(pool: &SqlitePool) {
        let turma = turma_service::create_turma(
            pool,
            NovaTurma {
                nome: "5A".to_string(),
                capacidade: 30,
            },
        )
        .await
        .unwrap();

        aluno_service::create_aluno(
            pool,
            NovoAluno {
                nome: "Ana Souza".to_string(),
                data_nascimento: NaiveDate::from_ymd_opt(2015, 3, 10).unwrap(),
                email: Some("ana@example.com".to_string()),
                status: true,
                turma_id: Some(turma.id),
            },
        )
        .await
        .unwrap();

        aluno_service::create_aluno(
            pool,
            NovoAluno {
                nome: "Bruno Alves".to_string(),
                data_nascimento: NaiveDate::from_ymd_opt(2014, 11, 2).unwrap(),
                email: None,
                status: false,
                turma_id: None,
            },
        )
        .await
        .unwrap();
    }

    #[test]
    fn test_formato_a_partir_de_string() {
        assert_eq!("csv".parse::<FormatoRelatorio>().unwrap(), FormatoRelatorio::Csv);
        assert_eq!("json".parse::<FormatoRelatorio>().unwrap(), FormatoRelatorio::Json);
        assert!("xml".parse::<FormatoRelatorio>().is_err());
        assert!("CSV".parse::<FormatoRelatorio>().is_err());
    }

    #[tokio::test]
    async fn test_exportar_json() {
        let pool = db::create_test_pool().await;
        popular(&pool).await;

        let json = exportar_alunos(&pool, FormatoRelatorio::Json).await.unwrap();

        // A ordem das chaves segue a declaração da struct
        assert!(json.starts_with(
            r#"[{"id":1,"nome":"Ana Souza","data_nascimento":"2015-03-10","email":"ana@example.com","status":true,"turma_id":1}"#
        ));

        let alunos: Vec<Aluno> = serde_json::from_str(&json).unwrap();
        assert_eq!(alunos.len(), 2);
        assert_eq!(alunos[1].nome, "Bruno Alves");
        assert_eq!(alunos[1].email, None);
        assert!(!alunos[1].status);
    }

    #[tokio::test]
    async fn test_exportar_csv() {
        let pool = db::create_test_pool().await;
        popular(&pool).await;

        let csv = exportar_alunos(&pool, FormatoRelatorio::Csv).await.unwrap();
        let linhas: Vec<&str> = csv.lines().collect();

        assert_eq!(linhas.len(), 3);
        assert_eq!(linhas[0], "id,nome,data_nascimento,email,status,turma_id");
        assert_eq!(linhas[1], "1,Ana Souza,2015-03-10,ana@example.com,true,1");
        assert_eq!(linhas[2], "2,Bruno Alves,2014-11-02,,false,");
    }

    #[tokio::test]
    async fn test_csv_e_json_carregam_os_mesmos_valores() {
        let pool = db::create_test_pool().await;
        popular(&pool).await;

        let json = exportar_alunos(&pool, FormatoRelatorio::Json).await.unwrap();
        let csv = exportar_alunos(&pool, FormatoRelatorio::Csv).await.unwrap();

        let do_json: Vec<Aluno> = serde_json::from_str(&json).unwrap();

        let mut rdr = csv::Reader::from_reader(csv.as_bytes());
        let do_csv: Vec<Aluno> = rdr
            .deserialize()
            .collect::<Result<_, _>>()
            .expect("CSV exportado deve ser legível de volta");

        assert_eq!(do_json, do_csv);
    }

    #[tokio::test]
    async fn test_exportar_tabela_vazia() {
        let pool = db::create_test_pool().await;

        let json = exportar_alunos(&pool, FormatoRelatorio::Json).await.unwrap();
        assert_eq!(json, "[]");

        let csv = exportar_alunos(&pool, FormatoRelatorio::Csv).await.unwrap();
        assert_eq!(csv.trim_end(), "id,nome,data_nascimento,email,status,turma_id");
    }
}
