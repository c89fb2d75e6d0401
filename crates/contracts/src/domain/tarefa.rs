//! Tarefas por zona: criadas por humanos ou sinalizadas como sugeridas pela
//! IA, com transição única de pendente para um estado terminal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTarefa {
    #[serde(rename = "pendente")]
    Pendente,
    #[serde(rename = "concluida")]
    Concluida,
    #[serde(rename = "erro")]
    Erro,
}

impl StatusTarefa {
    pub fn terminal(&self) -> bool {
        !matches!(self, StatusTarefa::Pendente)
    }
}

/// Comentário anexado a uma tarefa, tipicamente no momento da transição.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComentarioTarefa {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fotos: Option<Vec<String>>,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("tarefa em estado terminal não admite nova transição")]
pub struct TransicaoInvalida;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tarefa {
    pub id: String,
    pub titulo: String,
    pub descricao: String,
    pub zona: String,
    #[serde(rename = "criadaPorIA")]
    pub criada_por_ia: bool,
    pub status: StatusTarefa,
    #[serde(default)]
    pub comentarios: Vec<ComentarioTarefa>,
}

impl Tarefa {
    /// Transição pendente -> concluida, com comentário opcional.
    pub fn concluir(&mut self, comentario: Option<ComentarioTarefa>) -> Result<(), TransicaoInvalida> {
        self.transitar(StatusTarefa::Concluida, comentario)
    }

    /// Transição pendente -> erro, com comentário opcional.
    pub fn reportar_erro(
        &mut self,
        comentario: Option<ComentarioTarefa>,
    ) -> Result<(), TransicaoInvalida> {
        self.transitar(StatusTarefa::Erro, comentario)
    }

    fn transitar(
        &mut self,
        destino: StatusTarefa,
        comentario: Option<ComentarioTarefa>,
    ) -> Result<(), TransicaoInvalida> {
        if self.status.terminal() {
            return Err(TransicaoInvalida);
        }
        self.status = destino;
        if let Some(c) = comentario {
            self.comentarios.push(c);
        }
        Ok(())
    }
}

/// Corpo do `POST /tarefa`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NovaTarefa {
    pub titulo: String,
    pub descricao: String,
    pub zona: String,
    #[serde(rename = "criadaPorIA")]
    pub criada_por_ia: bool,
}

/// Corpo do `PUT /tarefa/{id}`; todos os campos opcionais.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtualizacaoTarefa {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titulo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusTarefa>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zona: Option<String>,
}

/// Corpo do `POST /tarefa/{id}/comentario`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NovoComentarioTarefa {
    pub texto: String,
    pub fotos: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pendente() -> Tarefa {
        Tarefa {
            id: "t1".into(),
            titulo: "Reabastecer Tomates".into(),
            descricao: "Stock crítico na zona B1".into(),
            zona: "reposicao".into(),
            criada_por_ia: true,
            status: StatusTarefa::Pendente,
            comentarios: vec![],
        }
    }

    fn comentario(texto: &str) -> ComentarioTarefa {
        ComentarioTarefa {
            texto: Some(texto.into()),
            fotos: None,
            timestamp: "2026-08-30T12:00:00Z".into(),
        }
    }

    #[test]
    fn conclui_uma_unica_vez() {
        let mut t = pendente();
        t.concluir(Some(comentario("feito"))).unwrap();
        assert_eq!(t.status, StatusTarefa::Concluida);
        assert_eq!(t.comentarios.len(), 1);

        assert_eq!(t.concluir(None), Err(TransicaoInvalida));
        assert_eq!(t.reportar_erro(None), Err(TransicaoInvalida));
    }

    #[test]
    fn reporta_erro_a_partir_de_pendente() {
        let mut t = pendente();
        t.reportar_erro(None).unwrap();
        assert_eq!(t.status, StatusTarefa::Erro);
        assert!(t.comentarios.is_empty());

        assert_eq!(t.concluir(None), Err(TransicaoInvalida));
    }

    #[test]
    fn atualizacao_omite_campos_ausentes() {
        let corpo = AtualizacaoTarefa {
            status: Some(StatusTarefa::Concluida),
            ..Default::default()
        };
        let json = serde_json::to_value(&corpo).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "concluida" }));
    }
}
