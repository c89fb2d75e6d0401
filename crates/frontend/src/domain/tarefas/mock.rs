//! Datasets locais de tarefas por zona.

use chrono::Utc;
use contracts::domain::tarefa::{ComentarioTarefa, StatusTarefa, Tarefa};

fn tarefa(
    id: &str,
    titulo: &str,
    descricao: &str,
    zona: &str,
    criada_por_ia: bool,
    status: StatusTarefa,
    comentarios: Vec<ComentarioTarefa>,
) -> Tarefa {
    Tarefa {
        id: id.to_string(),
        titulo: titulo.to_string(),
        descricao: descricao.to_string(),
        zona: zona.to_string(),
        criada_por_ia,
        status,
        comentarios,
    }
}

fn comentario(texto: &str) -> ComentarioTarefa {
    ComentarioTarefa {
        texto: Some(texto.to_string()),
        fotos: None,
        timestamp: Utc::now().to_rfc3339(),
    }
}

pub fn tarefas_da_zona(zona: &str) -> Vec<Tarefa> {
    match zona {
        "reposicao" => vec![
            tarefa(
                "t1",
                "Reabastecer Tomates",
                "Stock crítico de tomates na zona B1. Prioridade alta para reposição imediata.",
                "reposicao",
                true,
                StatusTarefa::Pendente,
                vec![],
            ),
            tarefa(
                "t2",
                "Verificar Validade Alfaces",
                "Realizar inspeção de validade das alfaces na zona A2.",
                "reposicao",
                false,
                StatusTarefa::Pendente,
                vec![],
            ),
            tarefa(
                "t3",
                "Organizar Maçãs",
                "Reorganizar display de maçãs na entrada. Produto em destaque da semana.",
                "reposicao",
                false,
                StatusTarefa::Concluida,
                vec![comentario("Display reorganizado conforme solicitado")],
            ),
            tarefa(
                "t4",
                "Repor Bananas",
                "Nível de stock baixo detectado. Necessário reposição nas próximas 2 horas.",
                "reposicao",
                true,
                StatusTarefa::Pendente,
                vec![],
            ),
        ],
        "carniceria" => vec![
            tarefa(
                "tc1",
                "Preparar Cortes Especiais",
                "Cliente solicitou 5kg de picanha cortada em bifes de 200g.",
                "carniceria",
                false,
                StatusTarefa::Pendente,
                vec![],
            ),
            tarefa(
                "tc2",
                "Limpeza da Câmara Fria",
                "Realizar limpeza e higienização da câmara fria conforme protocolo.",
                "carniceria",
                false,
                StatusTarefa::Pendente,
                vec![],
            ),
            tarefa(
                "tc3",
                "Verificar Temperatura",
                "Temperatura da vitrine acima do ideal (4.5°C). Verificar equipamento.",
                "carniceria",
                true,
                StatusTarefa::Erro,
                vec![comentario("Técnico foi acionado. Aguardando manutenção.")],
            ),
        ],
        "panaderia" => vec![
            tarefa(
                "tp1",
                "Preparar Massa para Amanhã",
                "Preparar 20kg de massa para pães de forma e 15kg para baguetes.",
                "panaderia",
                false,
                StatusTarefa::Pendente,
                vec![],
            ),
            tarefa(
                "tp2",
                "Repor Pães na Vitrine",
                "Vitrine com baixo estoque de pães. Necessário reposição imediata.",
                "panaderia",
                true,
                StatusTarefa::Pendente,
                vec![],
            ),
            tarefa(
                "tp3",
                "Higienização dos Equipamentos",
                "Realizar limpeza profunda dos fornos e bancadas.",
                "panaderia",
                false,
                StatusTarefa::Concluida,
                vec![],
            ),
        ],
        _ => vec![],
    }
}

pub fn tarefa_por_id(id: &str) -> Option<Tarefa> {
    ["reposicao", "carniceria", "panaderia"]
        .iter()
        .flat_map(|zona| tarefas_da_zona(zona))
        .find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zona_desconhecida_fica_vazia() {
        assert!(tarefas_da_zona("congelados").is_empty());
    }

    #[test]
    fn tarefas_pertencem_a_sua_zona() {
        for zona in ["reposicao", "carniceria", "panaderia"] {
            assert!(tarefas_da_zona(zona).iter().all(|t| t.zona == zona));
        }
    }

    #[test]
    fn busca_por_id_atravessa_as_zonas() {
        let t = tarefa_por_id("tc3").unwrap();
        assert_eq!(t.zona, "carniceria");
        assert_eq!(t.status, StatusTarefa::Erro);
        assert!(tarefa_por_id("tx9").is_none());
    }
}
