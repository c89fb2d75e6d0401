pub mod gerente;
pub mod lista;
pub mod modal;

use contracts::domain::tarefa::StatusTarefa;

pub(crate) fn rotulo_status(status: StatusTarefa) -> &'static str {
    match status {
        StatusTarefa::Pendente => "Pendente",
        StatusTarefa::Concluida => "Concluída",
        StatusTarefa::Erro => "Com erro",
    }
}

pub(crate) fn variante_status(status: StatusTarefa) -> &'static str {
    match status {
        StatusTarefa::Pendente => "warning",
        StatusTarefa::Concluida => "success",
        StatusTarefa::Erro => "error",
    }
}
