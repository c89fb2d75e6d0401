//! Conselhos estratégicos por loja: catálogo fixo do nível de rede, filtrado
//! pela loja selecionada no cabeçalho.

use crate::layout::contexto::use_contexto;
use crate::shared::components::{Badge, EstadoVazio};
use contracts::domain::conselho::Prioridade;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoEstrategico {
    RecursosHumanos,
    Manutencao,
    Vendas,
    Inventario,
    Operacional,
    Reconhecimento,
}

impl TipoEstrategico {
    pub fn rotulo(&self) -> &'static str {
        match self {
            TipoEstrategico::RecursosHumanos => "Recursos Humanos",
            TipoEstrategico::Manutencao => "Manutenção",
            TipoEstrategico::Vendas => "Vendas",
            TipoEstrategico::Inventario => "Inventário",
            TipoEstrategico::Operacional => "Operacional",
            TipoEstrategico::Reconhecimento => "Reconhecimento",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConselhoEstrategico {
    pub id: &'static str,
    pub tipo: TipoEstrategico,
    pub titulo: &'static str,
    pub descricao: &'static str,
    pub prioridade: Prioridade,
    pub loja: &'static str,
}

const fn ce(
    id: &'static str,
    tipo: TipoEstrategico,
    titulo: &'static str,
    descricao: &'static str,
    prioridade: Prioridade,
    loja: &'static str,
) -> ConselhoEstrategico {
    ConselhoEstrategico {
        id,
        tipo,
        titulo,
        descricao,
        prioridade,
        loja,
    }
}

pub const CONSELHOS_ESTRATEGICOS: &[ConselhoEstrategico] = &[
    ce(
        "ce1",
        TipoEstrategico::RecursosHumanos,
        "Muitas tarefas pendentes acumuladas",
        "Se você tem muitas tarefas pendentes, avalie contratar mais colaboradores e/ou \
         conversar com o gerente para entender se há sobrecarga na equipe. A eficiência \
         operacional pode estar comprometida.",
        Prioridade::Alta,
        "Loja Centro",
    ),
    ce(
        "ce2",
        TipoEstrategico::Manutencao,
        "Equipamentos com problemas recorrentes",
        "Você tem muitos equipamentos quebrados ou desgastados com notificações de \
         problemas frequentes. Analise conversar com a equipe de manutenção para ver o \
         que está acontecendo nesta loja e se é necessário um plano de substituição.",
        Prioridade::Alta,
        "Loja Sul",
    ),
    ce(
        "ce3",
        TipoEstrategico::Vendas,
        "Declínio nas vendas sem precedente",
        "As vendas estão caindo sem uma lógica aparente. Converse com o gerente para \
         entender o que está acontecendo e por que as vendas estão em queda. Pode haver \
         problemas operacionais, de atendimento ou com a concorrência local.",
        Prioridade::Alta,
        "Loja Norte",
    ),
    ce(
        "ce4",
        TipoEstrategico::Inventario,
        "Falta frequente de frutas e verduras",
        "Acontece muito de faltar frutas e/ou verduras porque não há stock suficiente de \
         reserva. Analise os envios de maçã para esta loja que está ficando sem durante \
         vários dias consecutivos. Pode ser necessário ajustar a frequência de pedidos.",
        Prioridade::Alta,
        "Loja Centro",
    ),
    ce(
        "ce5",
        TipoEstrategico::Reconhecimento,
        "Excelentes métricas de eficiência",
        "Esta loja está com métricas muito boas durante as últimas semanas, mantendo 96% \
         de eficiência operacional. Você pode dar um reconhecimento para animar os \
         colaboradores pela organização.",
        Prioridade::Baixa,
        "Loja Sul",
    ),
    ce(
        "ce6",
        TipoEstrategico::Reconhecimento,
        "Redução impressionante de desperdício",
        "A equipe desta loja conseguiu reduzir o desperdício de 19% para 11% em apenas 2 \
         meses. Parabenize a equipe e documente as práticas que estão funcionando para \
         replicar em outras unidades. Economia estimada: 1.250 EUR.",
        Prioridade::Baixa,
        "Loja Centro",
    ),
    ce(
        "ce7",
        TipoEstrategico::Operacional,
        "Horários de pico mal distribuídos",
        "Durante o horário das 14h às 16h você tem menor movimento do que das 18h às \
         20h. Pode analisar dar um reforço nas horas de pico ou modificar o horário dos \
         colaboradores para que os descansos sejam melhor organizados.",
        Prioridade::Media,
        "Loja Sul",
    ),
    ce(
        "ce8",
        TipoEstrategico::Reconhecimento,
        "Zero rupturas críticas por 5 semanas",
        "Esta loja completou 5 semanas consecutivas sem nenhuma ruptura crítica de \
         estoque. Considere compartilhar as boas práticas com outras lojas da rede.",
        Prioridade::Baixa,
        "Loja Norte",
    ),
    ce(
        "ce9",
        TipoEstrategico::Inventario,
        "Excesso de desperdício detectado",
        "Esta loja está com alto índice de desperdício de produtos perecíveis. Revise os \
         processos de rotação de estoque e a quantidade de pedidos.",
        Prioridade::Media,
        "Loja Norte",
    ),
    ce(
        "ce10",
        TipoEstrategico::Operacional,
        "Abertura da loja com atrasos",
        "A loja está abrindo com atraso nos últimos dias. Verifique com o gerente se há \
         problemas de transporte dos colaboradores ou se o horário de entrada precisa \
         ser ajustado.",
        Prioridade::Media,
        "Loja Centro",
    ),
    ce(
        "ce11",
        TipoEstrategico::Reconhecimento,
        "Satisfação do cliente em alta",
        "Esta loja alcançou 4.8/5.0 em satisfação do cliente nas últimas 4 semanas, \
         acima da média da rede. Reconheça publicamente a equipe por este resultado.",
        Prioridade::Baixa,
        "Loja Sul",
    ),
    ce(
        "ce12",
        TipoEstrategico::Manutencao,
        "Equipamentos próximos ao fim da vida útil",
        "Alguns equipamentos essenciais estão próximos ou já ultrapassaram a vida útil \
         recomendada. Prepare um orçamento para substituição gradual nos próximos meses.",
        Prioridade::Media,
        "Loja Sul",
    ),
];

/// Conselhos da loja com o nome dado, na ordem do catálogo.
pub fn conselhos_da_loja(nome: &str) -> Vec<&'static ConselhoEstrategico> {
    CONSELHOS_ESTRATEGICOS
        .iter()
        .filter(|c| c.loja == nome)
        .collect()
}

fn variante_prioridade(prioridade: Prioridade) -> &'static str {
    match prioridade {
        Prioridade::Alta => "error",
        Prioridade::Media => "warning",
        Prioridade::Baixa => "primary",
    }
}

#[component]
pub fn PaginaConselhosEstrategicos() -> impl IntoView {
    let contexto = use_contexto();

    let itens = move || {
        contexto
            .loja_atual()
            .map(|loja| conselhos_da_loja(&loja.nome))
            .unwrap_or_default()
    };

    view! {
        <section class="page">
            <div class="page__header">
                <h1>"Conselhos Estratégicos"</h1>
                <p class="page__subtitulo">
                    {move || {
                        contexto
                            .loja_atual()
                            .map(|l| l.nome)
                            .unwrap_or_else(|| "Selecione uma loja".to_string())
                    }}
                </p>
            </div>

            <Show
                when=move || !itens().is_empty()
                fallback=|| {
                    view! {
                        <EstadoVazio mensagem="Sem conselhos estratégicos para esta loja"
                            .to_string() />
                    }
                }
            >
                <div class="cartoes">
                    {move || {
                        itens()
                            .into_iter()
                            .map(|c| {
                                view! {
                                    <article class="cartao cartao--estrategico">
                                        <div class="cartao__topo">
                                            <span class="cartao__tipo">{c.tipo.rotulo()}</span>
                                            <Badge variant=variante_prioridade(c.prioridade)>
                                                {c.prioridade.rotulo()}
                                            </Badge>
                                        </div>
                                        <h2 class="cartao__titulo">{c.titulo}</h2>
                                        <p class="cartao__descricao">{c.descricao}</p>
                                    </article>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtra_pelo_nome_da_loja() {
        let centro = conselhos_da_loja("Loja Centro");
        assert!(!centro.is_empty());
        assert!(centro.iter().all(|c| c.loja == "Loja Centro"));
    }

    #[test]
    fn loja_desconhecida_fica_vazia() {
        assert!(conselhos_da_loja("Loja Oeste").is_empty());
    }

    #[test]
    fn catalogo_cobre_as_tres_lojas() {
        for loja in ["Loja Centro", "Loja Sul", "Loja Norte"] {
            assert!(!conselhos_da_loja(loja).is_empty(), "{loja}");
        }
    }
}
