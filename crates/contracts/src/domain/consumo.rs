//! Histórico de consumo dos últimos 30 dias. Único dataset mock que é
//! gerado por sorteio a cada chamada; a fonte de aleatoriedade é injetada
//! para manter o gerador testável fora do browser.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DIAS_HISTORICO: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DadoConsumo {
    pub data: String,
    pub quantidade: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricoConsumo {
    pub produto: String,
    pub dados: Vec<DadoConsumo>,
}

impl HistoricoConsumo {
    pub fn media(&self) -> f64 {
        if self.dados.is_empty() {
            return 0.0;
        }
        let soma: u64 = self.dados.iter().map(|d| u64::from(d.quantidade)).sum();
        soma as f64 / self.dados.len() as f64
    }
}

/// Gera 30 dias de consumo terminando em `hoje`, do mais antigo para o mais
/// recente. `sorteio` devolve valores em 0..1; cada dia varia até ±15% do
/// valor base e nunca fica negativo.
pub fn gerar_historico(
    produto: &str,
    valor_base: f64,
    hoje: NaiveDate,
    sorteio: &mut dyn FnMut() -> f64,
) -> HistoricoConsumo {
    let mut dados = Vec::with_capacity(DIAS_HISTORICO);
    for atras in (0..DIAS_HISTORICO).rev() {
        let data = hoje - Duration::days(atras as i64);
        let variacao = (sorteio() - 0.5) * 0.3 * valor_base;
        let quantidade = (valor_base + variacao).round().max(0.0) as u32;
        dados.push(DadoConsumo {
            data: data.format("%Y-%m-%d").to_string(),
            quantidade,
        });
    }
    HistoricoConsumo {
        produto: produto.to_string(),
        dados,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dia(ano: i32, mes: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, d).unwrap()
    }

    #[test]
    fn gera_trinta_entradas_em_ordem_cronologica() {
        let mut constante = || 0.5;
        let h = gerar_historico("Tomates", 120.0, dia(2026, 8, 30), &mut constante);
        assert_eq!(h.dados.len(), DIAS_HISTORICO);
        assert_eq!(h.dados.first().unwrap().data, "2026-08-01");
        assert_eq!(h.dados.last().unwrap().data, "2026-08-30");
    }

    #[test]
    fn sorteio_no_centro_preserva_o_valor_base() {
        let mut constante = || 0.5;
        let h = gerar_historico("Alfaces", 85.0, dia(2026, 8, 30), &mut constante);
        assert!(h.dados.iter().all(|d| d.quantidade == 85));
        assert_eq!(h.media(), 85.0);
    }

    #[test]
    fn quantidades_nunca_ficam_negativas() {
        // Sorteio sempre no extremo inferior, com base pequena.
        let mut minimo = || 0.0;
        let h = gerar_historico("Pimentos", 1.0, dia(2026, 8, 30), &mut minimo);
        assert!(h.dados.iter().all(|d| d.quantidade <= 1));
    }
}
