//! Estatísticas de vendas vs. espaço, somente leitura, reordenáveis por
//! qualquer campo numérico.

use crate::wire::EstadisticaWire;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estatistica {
    pub id: String,
    #[serde(rename = "nomeProduto")]
    pub nome_produto: String,
    pub categoria: String,
    #[serde(rename = "percentualVendas")]
    pub percentual_vendas: f64,
    #[serde(rename = "percentualEspaco")]
    pub percentual_espaco: f64,
    pub eficiencia: f64,
}

impl Estatistica {
    /// Razão derivada vendas/espaço; espaço nulo resulta em eficiência zero.
    pub fn eficiencia_de(percentual_vendas: f64, percentual_espaco: f64) -> f64 {
        if percentual_espaco <= 0.0 {
            0.0
        } else {
            percentual_vendas / percentual_espaco
        }
    }

    /// Conversão da linha do backend. A eficiência é recalculada a partir
    /// dos dois percentuais em vez de confiar no valor pré-computado.
    pub fn do_backend(linha: &EstadisticaWire) -> Self {
        Self {
            id: format!("e{}", linha.id_producto),
            nome_produto: linha.nombre.clone(),
            categoria: String::new(),
            percentual_vendas: linha.rotacao,
            percentual_espaco: linha.uso_espaco,
            eficiencia: Self::eficiencia_de(linha.rotacao, linha.uso_espaco),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampoOrdenacao {
    PercentualVendas,
    PercentualEspaco,
    Eficiencia,
}

/// Estado de ordenação da tabela: repetir o mesmo campo inverte a direção;
/// um campo novo volta a descendente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordenacao {
    pub campo: CampoOrdenacao,
    pub descendente: bool,
}

impl Default for Ordenacao {
    fn default() -> Self {
        Self {
            campo: CampoOrdenacao::PercentualVendas,
            descendente: true,
        }
    }
}

impl Ordenacao {
    pub fn alternar(&mut self, campo: CampoOrdenacao) {
        self.descendente = if self.campo == campo {
            !self.descendente
        } else {
            true
        };
        self.campo = campo;
    }
}

/// Ordena a coleção no lugar segundo o estado dado. `total_cmp` garante
/// resultado determinístico para entradas idênticas.
pub fn ordenar(itens: &mut [Estatistica], ordenacao: Ordenacao) {
    itens.sort_by(|a, b| {
        let (va, vb) = match ordenacao.campo {
            CampoOrdenacao::PercentualVendas => (a.percentual_vendas, b.percentual_vendas),
            CampoOrdenacao::PercentualEspaco => (a.percentual_espaco, b.percentual_espaco),
            CampoOrdenacao::Eficiencia => (a.eficiencia, b.eficiencia),
        };
        let cmp = va.total_cmp(&vb);
        if ordenacao.descendente {
            cmp.reverse()
        } else {
            cmp
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amostra() -> Vec<Estatistica> {
        let linhas = [
            ("e1", "Bananas", 18.5, 10.0),
            ("e2", "Limões", 5.8, 7.0),
            ("e3", "Tomate", 15.4, 12.0),
        ];
        linhas
            .iter()
            .map(|(id, nome, vendas, espaco)| Estatistica {
                id: (*id).into(),
                nome_produto: (*nome).into(),
                categoria: "Frutas".into(),
                percentual_vendas: *vendas,
                percentual_espaco: *espaco,
                eficiencia: Estatistica::eficiencia_de(*vendas, *espaco),
            })
            .collect()
    }

    #[test]
    fn repetir_o_campo_inverte_a_direcao() {
        let mut ord = Ordenacao::default();
        assert!(ord.descendente);
        ord.alternar(CampoOrdenacao::PercentualVendas);
        assert!(!ord.descendente);
        ord.alternar(CampoOrdenacao::PercentualVendas);
        assert!(ord.descendente);
    }

    #[test]
    fn campo_novo_volta_a_descendente() {
        let mut ord = Ordenacao::default();
        ord.alternar(CampoOrdenacao::PercentualVendas); // ascendente
        ord.alternar(CampoOrdenacao::Eficiencia);
        assert_eq!(ord.campo, CampoOrdenacao::Eficiencia);
        assert!(ord.descendente);
    }

    #[test]
    fn ordena_descendente_e_ascendente() {
        let mut itens = amostra();
        ordenar(
            &mut itens,
            Ordenacao {
                campo: CampoOrdenacao::PercentualVendas,
                descendente: true,
            },
        );
        assert_eq!(itens[0].id, "e1");
        assert_eq!(itens[2].id, "e2");

        ordenar(
            &mut itens,
            Ordenacao {
                campo: CampoOrdenacao::PercentualEspaco,
                descendente: false,
            },
        );
        assert_eq!(itens[0].id, "e2");
        assert_eq!(itens[2].id, "e3");
    }

    #[test]
    fn eficiencia_protege_espaco_nulo() {
        assert_eq!(Estatistica::eficiencia_de(10.0, 0.0), 0.0);
        assert!((Estatistica::eficiencia_de(18.5, 10.0) - 1.85).abs() < 1e-9);
    }
}
