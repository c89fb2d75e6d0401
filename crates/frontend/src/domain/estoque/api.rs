use crate::shared::api_utils::{api_get_sensores, api_post_vazio};
use contracts::domain::loja::Loja;
use contracts::domain::produto::{ComentarioProduto, Produto};
use contracts::shared::gateway::{
    resolver_escrita, resolver_leitura, ModoFonte, OrigemDados, Resolucao, RespostaApi,
};
use contracts::shared::grade::GradeConfig;
use contracts::wire::RespostaStatus;

use super::mock;

/// Stock da loja dada. As leituras do sensor são convertidas com a loja já
/// resolvida, para que a zona de cada produto venha da lista de câmaras.
pub async fn carregar_estoque(
    modo: ModoFonte,
    loja: &Loja,
    grade: &GradeConfig,
) -> RespostaApi<Resolucao<Vec<Produto>>> {
    let tentativa = if modo.tenta_servidor() {
        Some(
            api_get_sensores::<RespostaStatus>(&format!("/status/{}", loja.id))
                .await
                .map(|r| {
                    r.productos
                        .iter()
                        .map(|p| Produto::do_sensor(p, loja, grade))
                        .collect()
                }),
        )
    } else {
        None
    };
    resolver_leitura(modo, tentativa, mock::produtos)
}

/// Comentário de operador sobre um produto.
pub async fn enviar_comentario(
    modo: ModoFonte,
    comentario: &ComentarioProduto,
) -> RespostaApi<OrigemDados> {
    let tentativa = if modo.tenta_servidor() {
        Some(api_post_vazio("/stock/comentario", comentario).await)
    } else {
        None
    };
    resolver_escrita(modo, tentativa)
}
