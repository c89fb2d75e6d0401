//! Dataset local de conselhos do processo de recomendação.

use chrono::Utc;
use contracts::domain::conselho::{Conselho, Prioridade, TipoConselho};

fn conselho(
    id: &str,
    tipo: TipoConselho,
    titulo: &str,
    descricao: &str,
    prioridade: Prioridade,
    produtos: &[&str],
) -> Conselho {
    Conselho {
        id: id.to_string(),
        tipo,
        titulo: titulo.to_string(),
        descricao: descricao.to_string(),
        prioridade,
        produtos_relacionados: produtos.iter().map(|p| p.to_string()).collect(),
        timestamp: Utc::now().to_rfc3339(),
        aceito: None,
    }
}

pub fn conselhos() -> Vec<Conselho> {
    vec![
        conselho(
            "c1",
            TipoConselho::Alerta,
            "Múltiplos produtos críticos detectados",
            "Sistema detectou 14 produtos abaixo de 20%. Priorizar: Laranjas (15%), \
             Manga (8%), Peras (18%), Melão (11%), Rúcula (12%).",
            Prioridade::Alta,
            &["p1", "p10", "p22", "p30", "p38"],
        ),
        conselho(
            "c2",
            TipoConselho::Reposicao,
            "Repor frutas tropicais antes das 14h",
            "Manga (8%) e Bananas (35%) estão em níveis baixos. Histórico indica pico \
             de vendas às 14h para esta categoria.",
            Prioridade::Alta,
            &["p10", "p9"],
        ),
        conselho(
            "c3",
            TipoConselho::Alerta,
            "Rúcula em estado crítico",
            "Produto de alta rotação com stock crítico (12%). Contactar fornecedor \
             urgentemente.",
            Prioridade::Alta,
            &["p38"],
        ),
        conselho(
            "c4",
            TipoConselho::Otimizacao,
            "Redistribuir espaço de frutas cítricas",
            "Toranjas (85%) e Tangerinas (72%) mantêm stock alto consistentemente. \
             Considerar reduzir 15% do espaço para produtos de maior rotação.",
            Prioridade::Media,
            &["p4", "p3"],
        ),
        conselho(
            "c5",
            TipoConselho::Reposicao,
            "Verificar Espinafre e Pimento",
            "Verduras em nível baixo. Espinafre: 36%, Pimento: 44%. Padrão indica que \
             a queda continua após as 15h. Repor ainda hoje.",
            Prioridade::Alta,
            &["p39", "p53"],
        ),
        conselho(
            "c6",
            TipoConselho::Sugestao,
            "Aumentar espaço para Couve",
            "Couve mantém 91% de stock mas tem rotação 45% superior à média. \
             Oportunidade de aumentar vendas.",
            Prioridade::Media,
            &["p40"],
        ),
        conselho(
            "c7",
            TipoConselho::Alerta,
            "Melão próximo da ruptura",
            "Stock crítico (11%) com lead time de fornecedor de 48h. Ação urgente \
             necessária.",
            Prioridade::Alta,
            &["p30"],
        ),
        conselho(
            "c8",
            TipoConselho::Otimizacao,
            "Kiwi com baixa rotação",
            "Kiwi ocupa 8% do espaço mas representa apenas 3.2% das vendas da \
             categoria. Considerar substituir por outra fruta.",
            Prioridade::Baixa,
            &["p31"],
        ),
        conselho(
            "c9",
            TipoConselho::Reposicao,
            "Pêssegos necessitam atenção",
            "Produto em nível baixo com tendência de queda (48%). Agendar reposição \
             para as próximas 2 horas.",
            Prioridade::Media,
            &["p23"],
        ),
        conselho(
            "c10",
            TipoConselho::Sugestao,
            "Secção de folhosas bem equilibrada",
            "Alface (78%) e Couve (91%) mantêm níveis ótimos. A proporção atual está \
             ideal para a procura.",
            Prioridade::Baixa,
            &["p37", "p40"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todos_comecam_sem_veredicto() {
        assert!(conselhos().iter().all(|c| c.aceito.is_none()));
    }

    #[test]
    fn ids_sao_unicos() {
        let mut ids: Vec<String> = conselhos().into_iter().map(|c| c.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
