//! Quadro do gerente: colunas por zona com as tarefas em aberto, criação e
//! remoção de tarefas e as sugestões do processo de recomendação.

use super::{rotulo_status, variante_status};
use crate::domain::tarefas::{api, rotulo_da_zona, ZONAS};
use crate::layout::contexto::use_contexto;
use crate::layout::toast::use_toasts;
use crate::shared::components::{Badge, MensagemErro, Modal, Spinner};
use crate::shared::geracao::ControleGeracao;
use contracts::domain::tarefa::{NovaTarefa, StatusTarefa, Tarefa};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use thaw::{Button, ButtonAppearance, Input, Textarea};

/// Sugestões fixas do processo de recomendação, uma por zona.
const SUGESTOES_IA: &[(&str, &str, &str)] = &[
    (
        "reposicao",
        "Otimizar organização das prateleiras",
        "Reorganizar produtos por categoria para melhorar a experiência do cliente",
    ),
    (
        "carniceria",
        "Revisar sistema de refrigeração",
        "Verificação preventiva dos equipamentos de refrigeração",
    ),
    (
        "panaderia",
        "Implementar novo sistema de produção",
        "Otimizar horários de produção baseado em picos de demanda",
    ),
];

#[component]
pub fn PaginaGestaoTarefas() -> impl IntoView {
    let contexto = use_contexto();
    let toasts = use_toasts();

    let colunas = RwSignal::new(HashMap::<String, Vec<Tarefa>>::new());
    let carregando = RwSignal::new(false);
    let erro = RwSignal::new(None::<String>);

    // Zona alvo do diálogo de criação e os campos em edição.
    let dialogo_zona = RwSignal::new(None::<&'static str>);
    let titulo = RwSignal::new(String::new());
    let descricao = RwSignal::new(String::new());

    let sugestoes_abertas = RwSignal::new(false);

    let geracao = StoredValue::new(ControleGeracao::new());

    let recarregar = move || {
        let mut etiqueta = 0;
        geracao.update_value(|g| etiqueta = g.iniciar());
        carregando.set(true);
        erro.set(None);
        spawn_local(async move {
            let modo = contexto.fontes.tarefas;
            let mut novas = HashMap::new();
            for (zona, _) in ZONAS {
                match api::carregar_tarefas_da_zona(modo, zona).await {
                    Ok(resolucao) => {
                        contexto.registrar_origem(resolucao.origem);
                        // O quadro só mostra o trabalho em aberto.
                        let abertas: Vec<Tarefa> = resolucao
                            .dados
                            .into_iter()
                            .filter(|t| t.status != StatusTarefa::Concluida)
                            .collect();
                        novas.insert(zona.to_string(), abertas);
                    }
                    Err(e) => {
                        if geracao.with_value(|g| g.vigente(etiqueta)) {
                            carregando.set(false);
                            erro.set(Some(format!("Falha ao carregar tarefas: {e}")));
                        }
                        return;
                    }
                }
            }
            if !geracao.with_value(|g| g.vigente(etiqueta)) {
                return;
            }
            carregando.set(false);
            colunas.set(novas);
        });
    };

    Effect::new(move |_| recarregar());

    let criar = move |_| {
        let Some(zona) = dialogo_zona.get_untracked() else {
            return;
        };
        let titulo_novo = titulo.get_untracked().trim().to_string();
        let descricao_nova = descricao.get_untracked().trim().to_string();
        if titulo_novo.is_empty() || descricao_nova.is_empty() {
            toasts.erro("Preencha o título e a descrição");
            return;
        }
        let nova = NovaTarefa {
            titulo: titulo_novo,
            descricao: descricao_nova,
            zona: zona.to_string(),
            criada_por_ia: false,
        };
        spawn_local(async move {
            match api::criar_tarefa(contexto.fontes.tarefas, &nova).await {
                Ok(resolucao) => {
                    contexto.registrar_origem(resolucao.origem);
                    colunas.update(|mapa| {
                        mapa.entry(zona.to_string()).or_default().push(resolucao.dados);
                    });
                    dialogo_zona.set(None);
                    titulo.set(String::new());
                    descricao.set(String::new());
                    toasts.sucesso(format!(
                        "Nova tarefa adicionada à zona de {}",
                        rotulo_da_zona(zona),
                    ));
                }
                Err(e) => toasts.erro(format!("Falha ao criar tarefa: {e}")),
            }
        });
    };

    let remover = move |zona: String, id: String| {
        spawn_local(async move {
            match api::remover_tarefa(contexto.fontes.tarefas, &id).await {
                Ok(origem) => {
                    contexto.registrar_origem(origem);
                    colunas.update(|mapa| {
                        if let Some(lista) = mapa.get_mut(&zona) {
                            lista.retain(|t| t.id != id);
                        }
                    });
                    toasts.info("Tarefa removida");
                }
                Err(e) => toasts.erro(format!("Falha ao remover tarefa: {e}")),
            }
        });
    };

    let aplicar_sugestoes = move |_| {
        sugestoes_abertas.set(false);
        spawn_local(async move {
            let modo = contexto.fontes.tarefas;
            for (zona, titulo, descricao) in SUGESTOES_IA {
                let nova = NovaTarefa {
                    titulo: titulo.to_string(),
                    descricao: descricao.to_string(),
                    zona: zona.to_string(),
                    criada_por_ia: true,
                };
                if let Ok(resolucao) = api::criar_tarefa(modo, &nova).await {
                    contexto.registrar_origem(resolucao.origem);
                    colunas.update(|mapa| {
                        mapa.entry(zona.to_string()).or_default().push(resolucao.dados);
                    });
                }
            }
            toasts.sucesso("As tarefas sugeridas pela IA foram adicionadas");
        });
    };

    view! {
        <section class="page">
            <div class="page__header">
                <h1>"Gestão de Tarefas"</h1>
                <p class="page__subtitulo">"Gerencie tarefas para todas as zonas"</p>
                <Button on_click=move |_| sugestoes_abertas.set(true)>"Sugestões da IA"</Button>
            </div>

            <Show when=move || erro.get().is_some()>
                <MensagemErro
                    mensagem=Signal::derive(move || erro.get().unwrap_or_default())
                    on_repetir=Callback::new(move |_| recarregar())
                />
            </Show>

            <Show
                when=move || !carregando.get()
                fallback=|| view! { <Spinner mensagem="A carregar o quadro..." /> }
            >
                <div class="quadro">
                    {ZONAS
                        .iter()
                        .map(|(zona, rotulo)| {
                            let zona = *zona;
                            view! {
                                <div class="quadro__coluna">
                                    <div class="quadro__cabecalho">
                                        <h2>{*rotulo}</h2>
                                        <Button
                                            appearance=ButtonAppearance::Primary
                                            on_click=move |_| {
                                                titulo.set(String::new());
                                                descricao.set(String::new());
                                                dialogo_zona.set(Some(zona));
                                            }
                                        >
                                            "+"
                                        </Button>
                                    </div>
                                    <For
                                        each=move || {
                                            colunas
                                                .get()
                                                .get(zona)
                                                .cloned()
                                                .unwrap_or_default()
                                        }
                                        key=|t| t.id.clone()
                                        children=move |t| {
                                            let zona_remocao = t.zona.clone();
                                            let id_remocao = t.id.clone();
                                            view! {
                                                <div class="quadro__tarefa">
                                                    <div class="quadro__tarefa-topo">
                                                        <span class="quadro__tarefa-titulo">
                                                            {t.titulo.clone()}
                                                        </span>
                                                        {t
                                                            .criada_por_ia
                                                            .then(|| {
                                                                view! { <Badge variant="primary">"IA"</Badge> }
                                                            })}
                                                        <Badge variant=variante_status(t.status)>
                                                            {rotulo_status(t.status)}
                                                        </Badge>
                                                    </div>
                                                    <p class="quadro__tarefa-descricao">
                                                        {t.descricao.clone()}
                                                    </p>
                                                    <button
                                                        class="button button--icon"
                                                        on:click=move |_| {
                                                            remover(zona_remocao.clone(), id_remocao.clone())
                                                        }
                                                    >
                                                        "Remover"
                                                    </button>
                                                </div>
                                            }
                                        }
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>

            {move || {
                dialogo_zona
                    .get()
                    .map(|zona| {
                        view! {
                            <Modal
                                title=format!("Adicionar Tarefa - {}", rotulo_da_zona(zona))
                                on_close=Callback::new(move |_| dialogo_zona.set(None))
                            >
                                <div class="form-tarefa">
                                    <label class="form-tarefa__campo">
                                        "Título"
                                        <Input value=titulo placeholder="Título da tarefa" />
                                    </label>
                                    <label class="form-tarefa__campo">
                                        "Descrição"
                                        <Textarea
                                            value=descricao
                                            placeholder="Descreva o trabalho a realizar"
                                        />
                                    </label>
                                    <Button appearance=ButtonAppearance::Primary on_click=criar>
                                        "Adicionar"
                                    </Button>
                                </div>
                            </Modal>
                        }
                    })
            }}

            <Show when=move || sugestoes_abertas.get()>
                <Modal
                    title="Sugestões da IA".to_string()
                    on_close=Callback::new(move |_| sugestoes_abertas.set(false))
                >
                    <div class="sugestoes">
                        {SUGESTOES_IA
                            .iter()
                            .map(|(zona, titulo, descricao)| {
                                view! {
                                    <div class="sugestoes__item">
                                        <span class="sugestoes__zona">
                                            {rotulo_da_zona(zona).to_string()}
                                        </span>
                                        <strong>{*titulo}</strong>
                                        <p>{*descricao}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <Button appearance=ButtonAppearance::Primary on_click=aplicar_sugestoes>
                            "Aplicar sugestões"
                        </Button>
                    </div>
                </Modal>
            </Show>
        </section>
    }
}
