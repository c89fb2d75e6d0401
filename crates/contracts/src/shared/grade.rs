//! Mapeamento das coordenadas fracionárias do backend (0..1 por eixo) para
//! células inteiras da grelha de zonas exibida no mapa da loja.

use serde::{Deserialize, Serialize};

/// Número de células por eixo. Varia entre iterações do layout, por isso é
/// configuração nomeada e não literal espalhado pelo código.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeConfig {
    pub colunas: u32,
    pub linhas: u32,
}

/// Grelha do mapa de stock atual: 4 colunas x 5 linhas.
pub const GRADE_ESTOQUE: GradeConfig = GradeConfig {
    colunas: 4,
    linhas: 5,
};

/// Célula inteira, com origem em (1, 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosicaoGrade {
    pub x: u32,
    pub y: u32,
}

/// Converte um par fracionário em célula: multiplica pelo número de células
/// do eixo e soma 1. Valores fora de 0..1 são fixados na célula de borda.
pub fn mapear_posicao(grade: &GradeConfig, x: f64, y: f64) -> PosicaoGrade {
    PosicaoGrade {
        x: mapear_eixo(x, grade.colunas),
        y: mapear_eixo(y, grade.linhas),
    }
}

fn mapear_eixo(fracao: f64, celulas: u32) -> u32 {
    // Um eixo sem células degenera para uma única célula.
    let limite = i64::from(celulas.max(1));
    let celula = (fracao * celulas as f64).floor() as i64 + 1;
    celula.clamp(1, limite) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapeia_para_celulas_com_base_um() {
        let p = mapear_posicao(&GRADE_ESTOQUE, 0.0, 0.0);
        assert_eq!(p, PosicaoGrade { x: 1, y: 1 });

        let p = mapear_posicao(&GRADE_ESTOQUE, 0.3, 0.5);
        assert_eq!(p, PosicaoGrade { x: 2, y: 3 });

        let p = mapear_posicao(&GRADE_ESTOQUE, 0.99, 0.99);
        assert_eq!(p, PosicaoGrade { x: 4, y: 5 });
    }

    #[test]
    fn fixa_valores_fora_do_intervalo() {
        // 1.0 exato multiplicaria para uma célula além da última.
        let p = mapear_posicao(&GRADE_ESTOQUE, 1.0, 1.0);
        assert_eq!(p, PosicaoGrade { x: 4, y: 5 });

        let p = mapear_posicao(&GRADE_ESTOQUE, -0.1, 2.0);
        assert_eq!(p, PosicaoGrade { x: 1, y: 5 });
    }

    #[test]
    fn grade_sem_celulas_degenera_para_celula_unica() {
        let grade = GradeConfig {
            colunas: 0,
            linhas: 0,
        };
        let p = mapear_posicao(&grade, 0.7, 1.5);
        assert_eq!(p, PosicaoGrade { x: 1, y: 1 });
    }

    #[test]
    fn respeita_grades_alternativas() {
        let grade = GradeConfig {
            colunas: 10,
            linhas: 2,
        };
        let p = mapear_posicao(&grade, 0.55, 0.4);
        assert_eq!(p, PosicaoGrade { x: 6, y: 1 });
    }
}
