//! Tarefas da zona do operador, agrupadas por estado.

use super::modal::ModalTarefa;
use super::{rotulo_status, variante_status};
use crate::domain::tarefas::{api, substituir_tarefa, ZONAS};
use crate::layout::contexto::use_contexto;
use crate::shared::components::{Badge, EstadoVazio, MensagemErro, Spinner};
use crate::shared::geracao::ControleGeracao;
use contracts::domain::tarefa::{StatusTarefa, Tarefa};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
fn CartaoTarefa(tarefa: Tarefa, on_abrir: Callback<Tarefa>) -> impl IntoView {
    let aberta = tarefa.clone();
    view! {
        <button class="tarefa" on:click=move |_| on_abrir.run(aberta.clone())>
            <div class="tarefa__topo">
                <span class="tarefa__titulo">{tarefa.titulo.clone()}</span>
                {tarefa
                    .criada_por_ia
                    .then(|| view! { <Badge variant="primary">"IA"</Badge> })}
                <Badge variant=variante_status(tarefa.status)>
                    {rotulo_status(tarefa.status)}
                </Badge>
            </div>
            <p class="tarefa__descricao">{tarefa.descricao.clone()}</p>
            <Show when={
                let total = tarefa.comentarios.len();
                move || total > 0
            }>
                <span class="tarefa__comentarios">
                    {format!("{} comentário(s)", tarefa.comentarios.len())}
                </span>
            </Show>
        </button>
    }
}

#[component]
pub fn PaginaTarefas() -> impl IntoView {
    let contexto = use_contexto();

    let zona = RwSignal::new("reposicao".to_string());
    let tarefas = RwSignal::new(Vec::<Tarefa>::new());
    let carregando = RwSignal::new(false);
    let erro = RwSignal::new(None::<String>);
    let selecionada = RwSignal::new(None::<Tarefa>);

    let geracao = StoredValue::new(ControleGeracao::new());

    let recarregar = move || {
        let alvo = zona.get_untracked();
        let mut etiqueta = 0;
        geracao.update_value(|g| etiqueta = g.iniciar());
        carregando.set(true);
        erro.set(None);
        spawn_local(async move {
            let resultado = api::carregar_tarefas_da_zona(contexto.fontes.tarefas, &alvo).await;
            if !geracao.with_value(|g| g.vigente(etiqueta)) {
                return;
            }
            carregando.set(false);
            match resultado {
                Ok(resolucao) => {
                    contexto.registrar_origem(resolucao.origem);
                    tarefas.set(resolucao.dados);
                }
                Err(e) => {
                    log::error!("carregamento de tarefas falhou: {e}");
                    erro.set(Some(format!("Falha ao carregar tarefas: {e}")));
                }
            }
        });
    };

    Effect::new(move |_| {
        let _ = zona.get();
        recarregar();
    });

    let grupo = move |status: StatusTarefa, titulo: &'static str| {
        view! {
            <div class="tarefas__grupo">
                <h2>{titulo}</h2>
                <For
                    each=move || {
                        tarefas
                            .get()
                            .into_iter()
                            .filter(|t| t.status == status)
                            .collect::<Vec<_>>()
                    }
                    key=|t| t.id.clone()
                    children=move |t| {
                        view! {
                            <CartaoTarefa
                                tarefa=t
                                on_abrir=Callback::new(move |t| selecionada.set(Some(t)))
                            />
                        }
                    }
                />
            </div>
        }
    };

    view! {
        <section class="page">
            <div class="page__header">
                <h1>"Tarefas"</h1>
                <div class="abas-zona">
                    {ZONAS
                        .iter()
                        .map(|(valor, rotulo)| {
                            let valor = *valor;
                            let ativa = move || zona.get() == valor;
                            view! {
                                <button
                                    class=move || {
                                        if ativa() {
                                            "abas-zona__aba abas-zona__aba--ativa"
                                        } else {
                                            "abas-zona__aba"
                                        }
                                    }
                                    on:click=move |_| zona.set(valor.to_string())
                                >
                                    {*rotulo}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <Show when=move || erro.get().is_some()>
                <MensagemErro
                    mensagem=Signal::derive(move || erro.get().unwrap_or_default())
                    on_repetir=Callback::new(move |_| recarregar())
                />
            </Show>

            <Show
                when=move || !carregando.get()
                fallback=|| view! { <Spinner mensagem="A carregar tarefas..." /> }
            >
                <Show
                    when=move || !tarefas.get().is_empty()
                    fallback=|| {
                        view! { <EstadoVazio mensagem="Sem tarefas nesta zona".to_string() /> }
                    }
                >
                    <div class="tarefas">
                        {grupo(StatusTarefa::Pendente, "Pendentes")}
                        {grupo(StatusTarefa::Erro, "Com erro")}
                        {grupo(StatusTarefa::Concluida, "Concluídas")}
                    </div>
                </Show>
            </Show>

            {move || {
                selecionada
                    .get()
                    .map(|t| {
                        view! {
                            <ModalTarefa
                                tarefa=t
                                on_alterada=Callback::new(move |nova| {
                                    tarefas.update(|lista| substituir_tarefa(lista, nova));
                                })
                                on_close=Callback::new(move |_| selecionada.set(None))
                            />
                        }
                    })
            }}
        </section>
    }
}
