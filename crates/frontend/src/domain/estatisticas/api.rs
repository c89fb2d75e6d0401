use crate::shared::api_utils::api_get_sensores;
use contracts::domain::consumo::{gerar_historico, HistoricoConsumo};
use contracts::domain::estatistica::Estatistica;
use contracts::shared::gateway::{resolver_leitura, ModoFonte, Resolucao, RespostaApi};
use contracts::wire::RespostaEstadisticas;

use super::mock;

pub async fn carregar_estatisticas(
    modo: ModoFonte,
    loja_id: u32,
) -> RespostaApi<Resolucao<Vec<Estatistica>>> {
    let tentativa = if modo.tenta_servidor() {
        Some(
            api_get_sensores::<RespostaEstadisticas>(&format!("/estadistica/{loja_id}"))
                .await
                .map(|r| r.estadisticas.iter().map(Estatistica::do_backend).collect()),
        )
    } else {
        None
    };
    resolver_leitura(modo, tentativa, mock::estatisticas)
}

/// Histórico de consumo dos últimos 30 dias para o produto dado. Dataset
/// gerado localmente; o sorteio vem de `Math.random` no browser.
pub fn historico_consumo(produto: &str, valor_base: f64) -> HistoricoConsumo {
    let hoje = chrono::Utc::now().date_naive();
    let mut sorteio = || js_sys::Math::random();
    gerar_historico(produto, valor_base, hoje, &mut sorteio)
}
