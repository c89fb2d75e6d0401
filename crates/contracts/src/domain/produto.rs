//! Produtos e a derivação de status a partir de quantidade/capacidade.
//!
//! A coleção de produtos é reconstruída por inteiro a cada carregamento
//! (conversão do backend ou mock); nunca é mutada no lugar.

use crate::shared::grade::{mapear_posicao, GradeConfig, PosicaoGrade};
use crate::wire::ProdutoStatusWire;
use crate::domain::loja::Loja;
use serde::{Deserialize, Serialize};

/// Classificação de stock partilhada pela derivação e por todos os ramos de
/// renderização. `Desconhecido` e `SemEstoque` são estados terminais
/// atribuídos diretamente pela fonte de dados, fora da regra numérica.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusProduto {
    #[serde(rename = "ok")]
    Ok,
    #[serde(rename = "baixo")]
    Baixo,
    #[serde(rename = "critico")]
    Critico,
    #[serde(rename = "desconhecido")]
    Desconhecido,
    #[serde(rename = "sem-estoque")]
    SemEstoque,
}

impl StatusProduto {
    /// Regra numérica: `< 20` critico, `< 60` baixo, caso contrário ok.
    /// Nas fronteiras, 20.0 é baixo e 60.0 é ok.
    pub fn classificar(percentual: f64) -> Self {
        if percentual < 20.0 {
            StatusProduto::Critico
        } else if percentual < 60.0 {
            StatusProduto::Baixo
        } else {
            StatusProduto::Ok
        }
    }

    /// Ordem de severidade dos três estados numéricos (critico < baixo < ok).
    /// Os estados terminais não participam da ordenação.
    pub fn nivel(&self) -> Option<u8> {
        match self {
            StatusProduto::Critico => Some(0),
            StatusProduto::Baixo => Some(1),
            StatusProduto::Ok => Some(2),
            StatusProduto::Desconhecido | StatusProduto::SemEstoque => None,
        }
    }

    pub fn rotulo(&self) -> &'static str {
        match self {
            StatusProduto::Ok => "OK",
            StatusProduto::Baixo => "Baixo",
            StatusProduto::Critico => "Crítico",
            StatusProduto::Desconhecido => "Desconhecido",
            StatusProduto::SemEstoque => "Sem estoque",
        }
    }
}

/// Percentual de ocupação bruto, sem arredondamento. A classificação usa
/// sempre este valor; o valor exibido é arredondado à parte.
pub fn percentual_ocupacao(quantidade_atual: f64, quantidade_maxima: f64) -> f64 {
    quantidade_atual / quantidade_maxima * 100.0
}

/// Função pura central: converte o par quantidade/capacidade em percentual
/// bruto e status derivado.
pub fn derivar_status(quantidade_atual: f64, quantidade_maxima: f64) -> (f64, StatusProduto) {
    let percentual = percentual_ocupacao(quantidade_atual, quantidade_maxima);
    (percentual, StatusProduto::classificar(percentual))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localizacao {
    pub zona: String,
    pub posicao: PosicaoGrade,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Produto {
    pub id: String,
    pub nome: String,
    pub categoria: String,
    #[serde(rename = "quantidadeAtual")]
    pub quantidade_atual: f64,
    #[serde(rename = "quantidadeMaxima")]
    pub quantidade_maxima: f64,
    pub percentual: f64,
    pub status: StatusProduto,
    pub localizacao: Localizacao,
}

impl Produto {
    /// Constrói um produto derivando percentual e status. O percentual
    /// armazenado é arredondado para exibição; a classificação acontece
    /// antes do arredondamento.
    pub fn novo(
        id: impl Into<String>,
        nome: impl Into<String>,
        categoria: impl Into<String>,
        quantidade_atual: f64,
        quantidade_maxima: f64,
        localizacao: Localizacao,
    ) -> Self {
        let (percentual, status) = derivar_status(quantidade_atual, quantidade_maxima);
        Self {
            id: id.into(),
            nome: nome.into(),
            categoria: categoria.into(),
            quantidade_atual,
            quantidade_maxima,
            percentual: percentual.round(),
            status,
            localizacao,
        }
    }

    /// Conversão da leitura de sensor do backend para o modelo do cliente.
    ///
    /// Exige a loja já resolvida: o nome da zona vem da lista de zonas da
    /// loja, pelo que dados dependentes de zona nunca são convertidos antes
    /// de a loja estar carregada.
    ///
    /// Estados terminais atribuídos aqui, não pela regra numérica:
    /// capacidade não positiva marca o produto como `Desconhecido` (a
    /// pipeline de visão não o identificou); quantidade zero com capacidade
    /// válida marca `SemEstoque` (depósito confirmado vazio).
    pub fn do_sensor(leitura: &ProdutoStatusWire, loja: &Loja, grade: &GradeConfig) -> Self {
        let zona = loja
            .zona_da_camara(leitura.id_camara)
            .unwrap_or("desconhecida")
            .to_string();
        let posicao = mapear_posicao(grade, leitura.coordenadas.x, leitura.coordenadas.y);
        let localizacao = Localizacao { zona, posicao };

        let mut produto = if leitura.espacio_total <= 0.0 {
            Produto {
                id: format!("p{}", leitura.id_producto),
                nome: format!("Produto {}", leitura.id_producto),
                categoria: String::new(),
                quantidade_atual: leitura.cantidad_actual,
                quantidade_maxima: leitura.espacio_total,
                percentual: 0.0,
                status: StatusProduto::Desconhecido,
                localizacao,
            }
        } else {
            Produto::novo(
                format!("p{}", leitura.id_producto),
                format!("Produto {}", leitura.id_producto),
                String::new(),
                leitura.cantidad_actual,
                leitura.espacio_total,
                localizacao,
            )
        };

        if leitura.espacio_total > 0.0 && leitura.cantidad_actual <= 0.0 {
            produto.status = StatusProduto::SemEstoque;
        }
        produto
    }
}

/// Comentário livre de um operador sobre um produto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComentarioProduto {
    #[serde(rename = "produtoId")]
    pub produto_id: String,
    pub comentario: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::loja::Zona;
    use crate::shared::grade::GRADE_ESTOQUE;
    use crate::wire::CoordenadasWire;

    #[test]
    fn cenarios_de_referencia() {
        let (p, s) = derivar_status(15.0, 100.0);
        assert_eq!(p, 15.0);
        assert_eq!(s, StatusProduto::Critico);

        let (p, s) = derivar_status(72.0, 100.0);
        assert_eq!(p, 72.0);
        assert_eq!(s, StatusProduto::Ok);
    }

    #[test]
    fn fronteiras_exatas() {
        assert_eq!(StatusProduto::classificar(19.999999), StatusProduto::Critico);
        assert_eq!(StatusProduto::classificar(20.0), StatusProduto::Baixo);
        assert_eq!(StatusProduto::classificar(59.999999), StatusProduto::Baixo);
        assert_eq!(StatusProduto::classificar(60.0), StatusProduto::Ok);
    }

    #[test]
    fn percentual_e_status_sao_monotonicos() {
        let mut percentual_anterior = f64::NEG_INFINITY;
        let mut nivel_anterior = 0u8;
        for atual in 0..=200 {
            let (percentual, status) = derivar_status(atual as f64, 200.0);
            assert!(percentual >= percentual_anterior);
            let nivel = status.nivel().unwrap();
            assert!(nivel >= nivel_anterior);
            percentual_anterior = percentual;
            nivel_anterior = nivel;
        }
    }

    #[test]
    fn serializa_status_nos_literais_do_wire() {
        let json = serde_json::to_string(&StatusProduto::SemEstoque).unwrap();
        assert_eq!(json, "\"sem-estoque\"");
        let de: StatusProduto = serde_json::from_str("\"critico\"").unwrap();
        assert_eq!(de, StatusProduto::Critico);
    }

    fn loja_teste() -> Loja {
        Loja {
            id: 1,
            nome: "Loja Centro".into(),
            zonas: vec![Zona {
                zona: "A1".into(),
                camara_id: 7,
            }],
        }
    }

    fn leitura(cantidad: f64, espacio: f64) -> ProdutoStatusWire {
        ProdutoStatusWire {
            id_producto: 42,
            id_camara: 7,
            coordenadas: CoordenadasWire { x: 0.3, y: 0.5 },
            cantidad_actual: cantidad,
            espacio_total: espacio,
            timestamp: "2026-08-30T10:00:00Z".into(),
        }
    }

    #[test]
    fn conversao_do_sensor_deriva_e_posiciona() {
        let p = Produto::do_sensor(&leitura(15.0, 100.0), &loja_teste(), &GRADE_ESTOQUE);
        assert_eq!(p.status, StatusProduto::Critico);
        assert_eq!(p.percentual, 15.0);
        assert_eq!(p.localizacao.zona, "A1");
        assert_eq!(p.localizacao.posicao.x, 2);
        assert_eq!(p.localizacao.posicao.y, 3);
    }

    #[test]
    fn capacidade_invalida_marca_desconhecido() {
        let p = Produto::do_sensor(&leitura(5.0, 0.0), &loja_teste(), &GRADE_ESTOQUE);
        assert_eq!(p.status, StatusProduto::Desconhecido);
    }

    #[test]
    fn quantidade_zero_marca_sem_estoque() {
        let p = Produto::do_sensor(&leitura(0.0, 100.0), &loja_teste(), &GRADE_ESTOQUE);
        assert_eq!(p.status, StatusProduto::SemEstoque);
    }

    #[test]
    fn camara_desconhecida_cai_em_zona_desconhecida() {
        let mut l = leitura(50.0, 100.0);
        l.id_camara = 99;
        let p = Produto::do_sensor(&l, &loja_teste(), &GRADE_ESTOQUE);
        assert_eq!(p.localizacao.zona, "desconhecida");
        assert_eq!(p.status, StatusProduto::Baixo);
    }
}
