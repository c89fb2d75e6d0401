//! Conselhos gerados pelo processo de recomendação. O utilizador aceita ou
//! rejeita; a resposta remove o conselho do conjunto de trabalho visível.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoConselho {
    #[serde(rename = "reposicao")]
    Reposicao,
    #[serde(rename = "otimizacao")]
    Otimizacao,
    #[serde(rename = "alerta")]
    Alerta,
    #[serde(rename = "sugestao")]
    Sugestao,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prioridade {
    #[serde(rename = "alta")]
    Alta,
    #[serde(rename = "media")]
    Media,
    #[serde(rename = "baixa")]
    Baixa,
}

impl Prioridade {
    pub fn rotulo(&self) -> &'static str {
        match self {
            Prioridade::Alta => "Alta",
            Prioridade::Media => "Média",
            Prioridade::Baixa => "Baixa",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conselho {
    pub id: String,
    pub tipo: TipoConselho,
    pub titulo: String,
    pub descricao: String,
    pub prioridade: Prioridade,
    #[serde(rename = "produtosRelacionados")]
    pub produtos_relacionados: Vec<String>,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aceito: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("o motivo da rejeição é obrigatório")]
pub struct MotivoObrigatorio;

/// Resposta do utilizador a um conselho. O motivo da rejeição é validado no
/// cliente; o corpo enviado ao servidor leva apenas `aceito`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RespostaConselho {
    pub aceito: bool,
    pub motivo: Option<String>,
}

impl RespostaConselho {
    pub fn aceitar() -> Self {
        Self {
            aceito: true,
            motivo: None,
        }
    }

    /// Rejeição exige motivo não vazio; string em branco bloqueia o envio.
    pub fn rejeitar(motivo: &str) -> Result<Self, MotivoObrigatorio> {
        let motivo = motivo.trim();
        if motivo.is_empty() {
            return Err(MotivoObrigatorio);
        }
        Ok(Self {
            aceito: false,
            motivo: Some(motivo.to_string()),
        })
    }
}

/// Corpo do `POST /conselhos/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespostaConselhoWire {
    pub aceito: bool,
}

impl From<&RespostaConselho> for RespostaConselhoWire {
    fn from(resposta: &RespostaConselho) -> Self {
        Self {
            aceito: resposta.aceito,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejeicao_sem_motivo_e_bloqueada() {
        assert_eq!(RespostaConselho::rejeitar(""), Err(MotivoObrigatorio));
        assert_eq!(RespostaConselho::rejeitar("   "), Err(MotivoObrigatorio));
    }

    #[test]
    fn rejeicao_com_motivo_normaliza_espacos() {
        let r = RespostaConselho::rejeitar("  stock já reposto  ").unwrap();
        assert!(!r.aceito);
        assert_eq!(r.motivo.as_deref(), Some("stock já reposto"));
    }

    #[test]
    fn wire_leva_apenas_o_aceito() {
        let r = RespostaConselho::rejeitar("duplicado").unwrap();
        let wire = RespostaConselhoWire::from(&r);
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(json, serde_json::json!({ "aceito": false }));
    }
}
