use crate::shared::api_utils::{api_get, api_post_vazio};
use contracts::domain::conselho::{Conselho, RespostaConselho, RespostaConselhoWire};
use contracts::shared::gateway::{
    resolver_escrita, resolver_leitura, ModoFonte, OrigemDados, Resolucao, RespostaApi,
};

use super::mock;

pub async fn carregar_conselhos(modo: ModoFonte) -> RespostaApi<Resolucao<Vec<Conselho>>> {
    let tentativa = if modo.tenta_servidor() {
        Some(api_get::<Vec<Conselho>>("/conselhos").await)
    } else {
        None
    };
    resolver_leitura(modo, tentativa, mock::conselhos)
}

/// Aceita ou rejeita um conselho. O motivo da rejeição fica no cliente; o
/// corpo enviado leva apenas o veredicto.
pub async fn responder_conselho(
    modo: ModoFonte,
    id: &str,
    resposta: &RespostaConselho,
) -> RespostaApi<OrigemDados> {
    let corpo = RespostaConselhoWire::from(resposta);
    let tentativa = if modo.tenta_servidor() {
        Some(api_post_vazio(&format!("/conselhos/{id}"), &corpo).await)
    } else {
        None
    };
    resolver_escrita(modo, tentativa)
}
