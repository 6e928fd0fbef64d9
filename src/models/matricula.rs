// src/models/matricula.rs
use serde::Deserialize;

// A matrícula não é persistida como entidade própria: é a operação
// que grava alunos.turma_id e reativa o aluno.
#[derive(Debug, Deserialize)]
pub struct NovaMatricula {
    pub aluno_id: i64,
    pub turma_id: i64,
}
