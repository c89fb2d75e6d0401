use crate::shared::api_utils::{api_delete, api_get, api_post, api_post_vazio, api_put_vazio};
use chrono::Utc;
use contracts::domain::tarefa::{
    AtualizacaoTarefa, NovaTarefa, NovoComentarioTarefa, StatusTarefa, Tarefa,
};
use contracts::shared::gateway::{
    resolver_escrita, resolver_leitura, ErroGateway, ModoFonte, OrigemDados, Resolucao,
    RespostaApi,
};
use serde::Deserialize;

use super::mock;

#[derive(Debug, Deserialize)]
struct RespostaRemocao {
    ok: bool,
}

pub async fn carregar_tarefas_da_zona(
    modo: ModoFonte,
    zona: &str,
) -> RespostaApi<Resolucao<Vec<Tarefa>>> {
    let tentativa = if modo.tenta_servidor() {
        Some(api_get::<Vec<Tarefa>>(&format!("/tarefas/{}", urlencoding::encode(zona))).await)
    } else {
        None
    };
    let zona = zona.to_string();
    resolver_leitura(modo, tentativa, move || mock::tarefas_da_zona(&zona))
}

pub async fn obter_tarefa(modo: ModoFonte, id: &str) -> RespostaApi<Resolucao<Option<Tarefa>>> {
    let tentativa = if modo.tenta_servidor() {
        Some(api_get::<Tarefa>(&format!("/tarefa/{id}")).await.map(Some))
    } else {
        None
    };
    let id = id.to_string();
    resolver_leitura(modo, tentativa, move || mock::tarefa_por_id(&id))
}

/// Cria uma tarefa. Sem servidor disponível a tarefa nasce localmente, com
/// id gerado no cliente, para que a lista continue utilizável.
pub async fn criar_tarefa(modo: ModoFonte, nova: &NovaTarefa) -> RespostaApi<Resolucao<Tarefa>> {
    let tentativa = if modo.tenta_servidor() {
        Some(api_post::<NovaTarefa, Tarefa>("/tarefa", nova).await)
    } else {
        None
    };
    let local = Tarefa {
        id: format!("local-{}", uuid::Uuid::new_v4()),
        titulo: nova.titulo.clone(),
        descricao: nova.descricao.clone(),
        zona: nova.zona.clone(),
        criada_por_ia: nova.criada_por_ia,
        status: StatusTarefa::Pendente,
        comentarios: vec![],
    };
    resolver_leitura(modo, tentativa, move || local)
}

pub async fn atualizar_tarefa(
    modo: ModoFonte,
    id: &str,
    atualizacao: &AtualizacaoTarefa,
) -> RespostaApi<OrigemDados> {
    let tentativa = if modo.tenta_servidor() {
        Some(api_put_vazio(&format!("/tarefa/{id}"), atualizacao).await)
    } else {
        None
    };
    resolver_escrita(modo, tentativa)
}

pub async fn comentar_tarefa(
    modo: ModoFonte,
    id: &str,
    texto: &str,
    fotos: Vec<String>,
) -> RespostaApi<OrigemDados> {
    let corpo = NovoComentarioTarefa {
        texto: texto.to_string(),
        fotos,
    };
    let tentativa = if modo.tenta_servidor() {
        Some(api_post_vazio(&format!("/tarefa/{id}/comentario"), &corpo).await)
    } else {
        None
    };
    resolver_escrita(modo, tentativa)
}

pub async fn remover_tarefa(modo: ModoFonte, id: &str) -> RespostaApi<OrigemDados> {
    let tentativa = if modo.tenta_servidor() {
        let resultado = api_delete::<RespostaRemocao>(&format!("/tarefa/{id}"))
            .await
            .and_then(|r| {
                if r.ok {
                    Ok(())
                } else {
                    Err(ErroGateway::Payload("remoção recusada pelo servidor".into()))
                }
            });
        Some(resultado)
    } else {
        None
    };
    resolver_escrita(modo, tentativa)
}

/// Timestamp no formato usado nos comentários de tarefa.
pub fn agora() -> String {
    Utc::now().to_rfc3339()
}
