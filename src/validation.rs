// src/validation.rs
use crate::error::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

pub const IDADE_MINIMA: i32 = 5;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("Regex de email inválida")
});

/// Nome do aluno: entre 3 e 80 caracteres.
pub fn validar_nome_aluno(nome: &str) -> AppResult {
    let tamanho = nome.chars().count();
    if !(3..=80).contains(&tamanho) {
        return Err(AppError::Validacao(
            "Nome deve ter entre 3 e 80 caracteres".to_string(),
        ));
    }
    Ok(())
}

pub fn validar_email(email: &str) -> AppResult {
    if !EMAIL_RE.is_match(email) {
        return Err(AppError::Validacao("Email inválido".to_string()));
    }
    Ok(())
}

/// Idade mínima na criação do aluno.
/// A idade é a diferença simples de anos; mês e dia não entram no cálculo.
pub fn validar_idade_minima(data_nascimento: NaiveDate) -> AppResult {
    let hoje = chrono::Local::now().date_naive();
    let idade = hoje.year() - data_nascimento.year();
    if idade < IDADE_MINIMA {
        return Err(AppError::Validacao(
            "Aluno deve ter no mínimo 5 anos".to_string(),
        ));
    }
    Ok(())
}

pub fn validar_nova_turma(nome: &str, capacidade: i64) -> AppResult {
    if nome.trim().is_empty() {
        return Err(AppError::Validacao(
            "Nome da turma é obrigatório".to_string(),
        ));
    }
    if capacidade < 1 {
        return Err(AppError::Validacao(
            "Capacidade deve ser um inteiro positivo".to_string(),
        ));
    }
    Ok(())
}

/// IDs referenciados na matrícula devem ser inteiros positivos.
pub fn validar_ids_matricula(aluno_id: i64, turma_id: i64) -> AppResult {
    if aluno_id < 1 || turma_id < 1 {
        return Err(AppError::Validacao(
            "aluno_id e turma_id devem ser inteiros positivos".to_string(),
        ));
    }
    Ok(())
}
