pub mod api;
pub mod mock;
pub mod ui;

use contracts::domain::tarefa::Tarefa;

/// Zonas de trabalho com lista de tarefas própria, na ordem de exibição.
pub const ZONAS: &[(&str, &str)] = &[
    ("reposicao", "Reposição"),
    ("carniceria", "Carniceria"),
    ("panaderia", "Padaria"),
];

/// Rótulo da zona dada, ou o identificador cru quando desconhecida.
pub fn rotulo_da_zona(zona: &str) -> &str {
    ZONAS
        .iter()
        .find(|(valor, _)| *valor == zona)
        .map(|(_, rotulo)| *rotulo)
        .unwrap_or(zona)
}

/// Substitui na lista a tarefa com o mesmo id. Listas carregadas não mudam
/// de composição por causa de uma transição, só a entrada alterada.
pub fn substituir_tarefa(lista: &mut [Tarefa], nova: Tarefa) {
    if let Some(existente) = lista.iter_mut().find(|t| t.id == nova.id) {
        *existente = nova;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::tarefa::StatusTarefa;

    #[test]
    fn resolve_rotulos_conhecidos() {
        assert_eq!(rotulo_da_zona("panaderia"), "Padaria");
        assert_eq!(rotulo_da_zona("congelados"), "congelados");
    }

    #[test]
    fn substitui_apenas_a_tarefa_alterada() {
        let mut lista = mock::tarefas_da_zona("reposicao");
        let original = lista.clone();
        let mut alterada = lista[0].clone();
        alterada.concluir(None).unwrap();

        substituir_tarefa(&mut lista, alterada);

        assert_eq!(lista[0].status, StatusTarefa::Concluida);
        assert_eq!(lista[1..], original[1..]);
    }

    #[test]
    fn ignora_ids_desconhecidos() {
        let mut lista = mock::tarefas_da_zona("panaderia");
        let original = lista.clone();
        let mut intrusa = lista[0].clone();
        intrusa.id = "t-inexistente".to_string();

        substituir_tarefa(&mut lista, intrusa);

        assert_eq!(lista, original);
    }
}
