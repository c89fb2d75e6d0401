use crate::shared::api_utils::api_get_sensores;
use contracts::domain::loja::Loja;
use contracts::shared::gateway::{resolver_leitura, ModoFonte, Resolucao, RespostaApi};
use contracts::wire::RespostaLojas;

use super::mock;

/// Lista de lojas do backend de sensores.
pub async fn carregar_lojas(modo: ModoFonte) -> RespostaApi<Resolucao<Vec<Loja>>> {
    let tentativa = if modo.tenta_servidor() {
        Some(
            api_get_sensores::<RespostaLojas>("/lojas")
                .await
                .map(|r| r.lojas),
        )
    } else {
        None
    };
    resolver_leitura(modo, tentativa, mock::lojas)
}
