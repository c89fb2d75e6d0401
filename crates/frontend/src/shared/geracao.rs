//! Etiquetas de geração para carregamentos assíncronos.
//!
//! Cada página mantém um contador; trocar de loja ou de filtro inicia uma
//! geração nova e qualquer resultado que chegue com etiqueta antiga é
//! descartado em vez de sobrescrever o estado corrente.

/// Contador monotónico de gerações de carregamento.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControleGeracao {
    atual: u64,
}

impl ControleGeracao {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalida os carregamentos em curso e devolve a etiqueta da nova
    /// geração, a guardar pelo carregamento que agora começa.
    pub fn iniciar(&mut self) -> u64 {
        self.atual += 1;
        self.atual
    }

    /// Indica se a etiqueta ainda corresponde à geração corrente.
    pub fn vigente(&self, etiqueta: u64) -> bool {
        self.atual == etiqueta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resultado_da_geracao_corrente_e_aceite() {
        let mut controle = ControleGeracao::new();
        let etiqueta = controle.iniciar();
        assert!(controle.vigente(etiqueta));
    }

    #[test]
    fn nova_geracao_invalida_a_anterior() {
        let mut controle = ControleGeracao::new();
        let antiga = controle.iniciar();
        let nova = controle.iniciar();
        assert!(!controle.vigente(antiga));
        assert!(controle.vigente(nova));
    }

    #[test]
    fn varias_trocas_seguidas_so_validam_a_ultima() {
        let mut controle = ControleGeracao::new();
        let etiquetas: Vec<u64> = (0..5).map(|_| controle.iniciar()).collect();
        for etiqueta in &etiquetas[..4] {
            assert!(!controle.vigente(*etiqueta));
        }
        assert!(controle.vigente(etiquetas[4]));
    }
}
