//! Resultado normalizado do gateway HTTP e a estratégia de resolução
//! live/mock usada por todas as fontes de dados.
//!
//! O gateway nunca propaga exceções: toda chamada devolve `RespostaApi<T>`.
//! As fontes de dados decidem, através de `ModoFonte`, se tentam o servidor,
//! se usam sempre o dataset mock, ou se caem para o mock em caso de falha.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Falha normalizada na fronteira do gateway. As três categorias colapsam
/// para a mesma forma do ponto de vista do chamador.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErroGateway {
    #[error("falha de rede: {0}")]
    Transporte(String),
    #[error("resposta HTTP {0}")]
    Http(u16),
    #[error("payload inválido: {0}")]
    Payload(String),
}

/// Resultado uniforme de qualquer chamada ao gateway.
pub type RespostaApi<T> = Result<T, ErroGateway>;

/// Modo de operação de uma fonte de dados, configurável por fonte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModoFonte {
    /// Somente o servidor; falhas são devolvidas ao chamador.
    Live,
    /// Nunca toca na rede; devolve sempre o dataset local.
    Mock,
    /// Tenta o servidor uma única vez; em falha substitui pelo mock.
    #[default]
    LiveComFallback,
}

impl ModoFonte {
    /// Indica se a fonte deve sequer tentar a chamada de rede.
    pub fn tenta_servidor(&self) -> bool {
        !matches!(self, ModoFonte::Mock)
    }
}

/// De onde vieram os dados efetivamente entregues à página.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrigemDados {
    Servidor,
    Mock,
}

/// Dados resolvidos mais a sua origem, para que a UI possa sinalizar
/// quando está a exibir o dataset local.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolucao<T> {
    pub dados: T,
    pub origem: OrigemDados,
}

/// Modo de cada fonte de dados, construído uma vez no arranque da aplicação
/// e passado explicitamente (nunca lido de globais).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigFontes {
    pub lojas: ModoFonte,
    pub estoque: ModoFonte,
    pub conselhos: ModoFonte,
    pub estatisticas: ModoFonte,
    pub tarefas: ModoFonte,
}

impl ConfigFontes {
    /// Configuração usada em produção: o backend de sensores que serve
    /// stock e estatísticas está indisponível, por isso essas duas fontes
    /// ficam fixadas em mock. As restantes tentam o servidor.
    pub fn padrao() -> Self {
        Self {
            estoque: ModoFonte::Mock,
            estatisticas: ModoFonte::Mock,
            ..Self::default()
        }
    }
}

/// Resolve uma operação de leitura.
///
/// `tentativa` é o resultado da única chamada de rede efetuada, ou `None`
/// quando o modo dispensou a rede. A política é determinística: tenta o
/// servidor no máximo uma vez; em falha substitui o mock; nunca busca os
/// dois datasets para a mesma leitura.
pub fn resolver_leitura<T>(
    modo: ModoFonte,
    tentativa: Option<RespostaApi<T>>,
    mock: impl FnOnce() -> T,
) -> RespostaApi<Resolucao<T>> {
    match modo {
        ModoFonte::Mock => Ok(Resolucao {
            dados: mock(),
            origem: OrigemDados::Mock,
        }),
        ModoFonte::Live => match tentativa {
            Some(Ok(dados)) => Ok(Resolucao {
                dados,
                origem: OrigemDados::Servidor,
            }),
            Some(Err(erro)) => Err(erro),
            None => Err(ErroGateway::Transporte(
                "nenhuma tentativa de rede efetuada".into(),
            )),
        },
        ModoFonte::LiveComFallback => match tentativa {
            Some(Ok(dados)) => Ok(Resolucao {
                dados,
                origem: OrigemDados::Servidor,
            }),
            _ => Ok(Resolucao {
                dados: mock(),
                origem: OrigemDados::Mock,
            }),
        },
    }
}

/// Resolve uma operação de escrita sem payload de retorno.
///
/// No caminho mock (ou quando o servidor falha sob fallback) a escrita é
/// absorvida e apresentada como sucesso local.
pub fn resolver_escrita(
    modo: ModoFonte,
    tentativa: Option<RespostaApi<()>>,
) -> RespostaApi<OrigemDados> {
    match modo {
        ModoFonte::Mock => Ok(OrigemDados::Mock),
        ModoFonte::Live => match tentativa {
            Some(Ok(())) => Ok(OrigemDados::Servidor),
            Some(Err(erro)) => Err(erro),
            None => Err(ErroGateway::Transporte(
                "nenhuma tentativa de rede efetuada".into(),
            )),
        },
        ModoFonte::LiveComFallback => match tentativa {
            Some(Ok(())) => Ok(OrigemDados::Servidor),
            _ => Ok(OrigemDados::Mock),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn falha() -> RespostaApi<Vec<u32>> {
        Err(ErroGateway::Http(502))
    }

    #[test]
    fn leitura_mock_ignora_rede() {
        let r = resolver_leitura(ModoFonte::Mock, None, || vec![1, 2, 3]).unwrap();
        assert_eq!(r.dados, vec![1, 2, 3]);
        assert_eq!(r.origem, OrigemDados::Mock);
    }

    #[test]
    fn leitura_fallback_substitui_mock_em_falha() {
        let r = resolver_leitura(ModoFonte::LiveComFallback, Some(falha()), || vec![9]).unwrap();
        assert_eq!(r.dados, vec![9]);
        assert_eq!(r.origem, OrigemDados::Mock);
    }

    #[test]
    fn leitura_fallback_prefere_servidor() {
        let r = resolver_leitura(ModoFonte::LiveComFallback, Some(Ok(vec![7])), || vec![9]).unwrap();
        assert_eq!(r.dados, vec![7]);
        assert_eq!(r.origem, OrigemDados::Servidor);
    }

    #[test]
    fn leitura_live_propaga_falha() {
        let r = resolver_leitura(ModoFonte::Live, Some(falha()), || vec![9]);
        assert_eq!(r.unwrap_err(), ErroGateway::Http(502));
    }

    #[test]
    fn leitura_fallback_e_idempotente() {
        // Com o gateway sempre em falha, toda leitura devolve o mesmo dataset.
        let primeira =
            resolver_leitura(ModoFonte::LiveComFallback, Some(falha()), || vec![1, 2]).unwrap();
        let segunda =
            resolver_leitura(ModoFonte::LiveComFallback, Some(falha()), || vec![1, 2]).unwrap();
        assert_eq!(primeira, segunda);
    }

    #[test]
    fn escrita_absorve_falha_sob_fallback() {
        let r = resolver_escrita(ModoFonte::LiveComFallback, Some(Err(ErroGateway::Http(500))));
        assert_eq!(r.unwrap(), OrigemDados::Mock);
    }

    #[test]
    fn escrita_mock_e_sucesso_local() {
        assert_eq!(
            resolver_escrita(ModoFonte::Mock, None).unwrap(),
            OrigemDados::Mock
        );
    }

    #[test]
    fn escrita_live_propaga_falha() {
        let r = resolver_escrita(ModoFonte::Live, Some(Err(ErroGateway::Http(401))));
        assert_eq!(r.unwrap_err(), ErroGateway::Http(401));
    }
}
