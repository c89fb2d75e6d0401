//! Dataset local do mapa de stock: uma grelha 4x5 com as seis zonas.

use contracts::domain::produto::{Localizacao, Produto, StatusProduto};
use contracts::shared::grade::PosicaoGrade;

fn produto(
    id: &str,
    nome: &str,
    categoria: &str,
    quantidade: f64,
    zona: &str,
    x: u32,
    y: u32,
) -> Produto {
    Produto::novo(
        id,
        nome,
        categoria,
        quantidade,
        100.0,
        Localizacao {
            zona: zona.to_string(),
            posicao: PosicaoGrade { x, y },
        },
    )
}

pub fn produtos() -> Vec<Produto> {
    let mut itens = vec![
        // Corredor superior, cítricos
        produto("p1", "Laranjas", "Frutas", 15.0, "A1", 1, 1),
        produto("p2", "Limões", "Frutas", 38.0, "A1", 2, 1),
        produto("p3", "Tangerinas", "Frutas", 72.0, "A1", 3, 1),
        produto("p4", "Toranjas", "Frutas", 85.0, "A1", 4, 1),
        // Corredor lateral esquerdo, tropicais
        produto("p9", "Bananas", "Frutas", 35.0, "B1", 1, 2),
        produto("p10", "Manga", "Frutas", 8.0, "B1", 1, 3),
        produto("p11", "Abacaxi", "Frutas", 78.0, "B1", 1, 4),
        // Ilha central, frutas mistas
        produto("p21", "Maçãs", "Frutas", 85.0, "C1", 2, 3),
        produto("p22", "Peras", "Frutas", 18.0, "C1", 3, 3),
        produto("p23", "Pêssegos", "Frutas", 48.0, "C1", 4, 3),
        produto("p29", "Melancia", "Frutas", 68.0, "C2", 2, 4),
        produto("p30", "Melão", "Frutas", 11.0, "C2", 3, 4),
        produto("p31", "Kiwi", "Frutas", 42.0, "C2", 4, 4),
        // Corredor lateral direito, verduras
        produto("p51", "Tomate", "Verduras", 87.0, "B2", 4, 2),
        produto("p53", "Pimento", "Verduras", 44.0, "B2", 4, 4),
        // Corredor inferior, folhosas
        produto("p37", "Alface", "Verduras", 78.0, "D1", 1, 5),
        produto("p38", "Rúcula", "Verduras", 12.0, "D1", 2, 5),
        produto("p39", "Espinafre", "Verduras", 36.0, "D1", 3, 5),
        produto("p40", "Couve", "Verduras", 91.0, "D1", 4, 5),
    ];

    // Leitura que a pipeline de visão não conseguiu identificar.
    let mut desconhecido = produto("p52", "Produto Desconhecido", "Frutas", 0.0, "B2", 4, 3);
    desconhecido.status = StatusProduto::Desconhecido;
    itens.push(desconhecido);

    itens
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::grade::GRADE_ESTOQUE;

    #[test]
    fn status_acompanha_o_percentual_derivado() {
        for p in produtos() {
            if p.status == StatusProduto::Desconhecido {
                continue;
            }
            assert_eq!(p.status, StatusProduto::classificar(p.percentual), "{}", p.id);
        }
    }

    #[test]
    fn posicoes_cabem_na_grelha() {
        for p in produtos() {
            assert!(p.localizacao.posicao.x >= 1);
            assert!(p.localizacao.posicao.x <= GRADE_ESTOQUE.colunas);
            assert!(p.localizacao.posicao.y >= 1);
            assert!(p.localizacao.posicao.y <= GRADE_ESTOQUE.linhas);
        }
    }

    #[test]
    fn ids_sao_unicos() {
        let mut ids: Vec<String> = produtos().into_iter().map(|p| p.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
