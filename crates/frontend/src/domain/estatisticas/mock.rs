//! Dataset local de estatísticas de vendas vs. espaço e os produtos com
//! histórico de consumo disponível.

use contracts::domain::estatistica::Estatistica;

fn linha(id: &str, nome: &str, categoria: &str, vendas: f64, espaco: f64) -> Estatistica {
    Estatistica {
        id: id.to_string(),
        nome_produto: nome.to_string(),
        categoria: categoria.to_string(),
        percentual_vendas: vendas,
        percentual_espaco: espaco,
        eficiencia: Estatistica::eficiencia_de(vendas, espaco),
    }
}

pub fn estatisticas() -> Vec<Estatistica> {
    vec![
        // Melhor desempenho
        linha("e1", "Bananas", "Frutas", 18.5, 10.0),
        linha("e2", "Maçãs", "Frutas", 14.2, 10.0),
        linha("e3", "Tomate", "Verduras", 15.4, 12.0),
        linha("e4", "Batata", "Verduras", 16.7, 13.0),
        linha("e5", "Cenoura", "Verduras", 13.2, 10.0),
        // Bom desempenho
        linha("e6", "Laranjas", "Frutas", 9.8, 8.5),
        linha("e7", "Morangos", "Frutas", 12.3, 9.0),
        linha("e8", "Peras", "Frutas", 11.6, 9.5),
        linha("e9", "Alface", "Verduras", 10.7, 9.5),
        linha("e10", "Espinafre", "Verduras", 9.3, 8.5),
        linha("e11", "Pepino", "Verduras", 8.5, 8.5),
        // Desempenho médio
        linha("e12", "Limões", "Frutas", 5.8, 7.0),
        linha("e13", "Melão", "Frutas", 8.9, 11.0),
        linha("e14", "Uvas Verdes", "Frutas", 7.2, 8.0),
        linha("e15", "Couve", "Verduras", 6.8, 8.0),
        linha("e16", "Beringela", "Verduras", 4.8, 7.0),
        // Baixo desempenho
        linha("e17", "Brócolos", "Verduras", 4.2, 7.5),
        linha("e18", "Melão Galia", "Frutas", 3.2, 8.0),
        linha("e19", "Romãs", "Frutas", 2.8, 6.5),
        linha("e20", "Acelga", "Verduras", 3.1, 7.0),
        // Frutas especiais
        linha("e21", "Framboesas", "Frutas", 6.5, 6.0),
        linha("e22", "Mirtilos", "Frutas", 8.1, 6.5),
        linha("e23", "Manga", "Frutas", 7.3, 8.0),
        linha("e24", "Abacaxi", "Frutas", 9.2, 10.0),
        linha("e25", "Kiwi", "Frutas", 6.9, 7.5),
        // Verduras variadas
        linha("e26", "Pimento", "Verduras", 10.2, 9.5),
        linha("e27", "Beterraba", "Verduras", 7.4, 8.0),
        linha("e28", "Rabanete", "Verduras", 4.6, 6.5),
        linha("e29", "Repolho", "Verduras", 8.8, 9.0),
        linha("e30", "Couve-flor", "Verduras", 7.9, 8.5),
    ]
}

/// Produtos com histórico de consumo e o seu consumo diário de referência.
pub const PRODUTOS_CONSUMO: &[(&str, f64)] = &[
    ("Tomates", 120.0),
    ("Alfaces", 85.0),
    ("Maçãs", 150.0),
    ("Bananas", 200.0),
    ("Cenouras", 95.0),
    ("Pimentos", 70.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eficiencia_e_consistente_com_os_percentuais() {
        for e in estatisticas() {
            let esperada = Estatistica::eficiencia_de(e.percentual_vendas, e.percentual_espaco);
            assert!((e.eficiencia - esperada).abs() < 1e-9, "{}", e.id);
        }
    }

    #[test]
    fn ids_sao_unicos() {
        let mut ids: Vec<String> = estatisticas().into_iter().map(|e| e.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
