//! Conselhos operacionais: cartões com aceitar/rejeitar e diálogo de motivo
//! na rejeição.

pub mod estrategico;

use super::api;
use crate::layout::contexto::use_contexto;
use crate::layout::toast::use_toasts;
use crate::shared::components::{Badge, EstadoVazio, MensagemErro, Modal, Spinner};
use crate::shared::geracao::ControleGeracao;
use contracts::domain::conselho::{Conselho, Prioridade, RespostaConselho, TipoConselho};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Textarea};

fn rotulo_tipo(tipo: TipoConselho) -> &'static str {
    match tipo {
        TipoConselho::Reposicao => "Reposição",
        TipoConselho::Otimizacao => "Otimização",
        TipoConselho::Alerta => "Alerta",
        TipoConselho::Sugestao => "Sugestão",
    }
}

fn variante_prioridade(prioridade: Prioridade) -> &'static str {
    match prioridade {
        Prioridade::Alta => "error",
        Prioridade::Media => "warning",
        Prioridade::Baixa => "primary",
    }
}

#[component]
pub fn PaginaConselhos() -> impl IntoView {
    let contexto = use_contexto();
    let toasts = use_toasts();

    let conselhos = RwSignal::new(Vec::<Conselho>::new());
    let carregando = RwSignal::new(false);
    let erro = RwSignal::new(None::<String>);

    // Conselho alvo do diálogo de rejeição e o motivo em edição.
    let rejeitando = RwSignal::new(None::<Conselho>);
    let motivo = RwSignal::new(String::new());

    // Id do conselho com envio em curso; bloqueia o segundo clique.
    let em_envio = RwSignal::new(None::<String>);

    let geracao = StoredValue::new(ControleGeracao::new());

    let recarregar = move || {
        let mut etiqueta = 0;
        geracao.update_value(|g| etiqueta = g.iniciar());
        carregando.set(true);
        erro.set(None);
        spawn_local(async move {
            let resultado = api::carregar_conselhos(contexto.fontes.conselhos).await;
            if !geracao.with_value(|g| g.vigente(etiqueta)) {
                return;
            }
            carregando.set(false);
            match resultado {
                Ok(resolucao) => {
                    contexto.registrar_origem(resolucao.origem);
                    conselhos.set(resolucao.dados);
                }
                Err(e) => {
                    log::error!("carregamento de conselhos falhou: {e}");
                    erro.set(Some(format!("Falha ao carregar conselhos: {e}")));
                }
            }
        });
    };

    Effect::new(move |_| recarregar());

    let responder = move |id: String, resposta: RespostaConselho| {
        if em_envio.get_untracked().is_some() {
            return;
        }
        em_envio.set(Some(id.clone()));
        spawn_local(async move {
            let resultado =
                api::responder_conselho(contexto.fontes.conselhos, &id, &resposta).await;
            em_envio.set(None);
            match resultado {
                Ok(origem) => {
                    contexto.registrar_origem(origem);
                    // Removido uma única vez; respostas repetidas não têm alvo.
                    conselhos.update(|itens| itens.retain(|c| c.id != id));
                    rejeitando.set(None);
                    motivo.set(String::new());
                    if resposta.aceito {
                        toasts.sucesso("Conselho aceito");
                    } else {
                        toasts.info("Conselho rejeitado");
                    }
                }
                Err(e) => toasts.erro(format!("Falha ao responder ao conselho: {e}")),
            }
        });
    };

    let confirmar_rejeicao = move |_| {
        let Some(conselho) = rejeitando.get_untracked() else {
            return;
        };
        match RespostaConselho::rejeitar(&motivo.get_untracked()) {
            Ok(resposta) => responder(conselho.id, resposta),
            Err(_) => toasts.erro("Indique o motivo da rejeição"),
        }
    };

    view! {
        <section class="page">
            <div class="page__header">
                <h1>"Conselhos"</h1>
            </div>

            <Show when=move || erro.get().is_some()>
                <MensagemErro
                    mensagem=Signal::derive(move || erro.get().unwrap_or_default())
                    on_repetir=Callback::new(move |_| recarregar())
                />
            </Show>

            <Show
                when=move || !carregando.get()
                fallback=|| view! { <Spinner mensagem="A carregar conselhos..." /> }
            >
                <Show
                    when=move || !conselhos.get().is_empty()
                    fallback=|| {
                        view! { <EstadoVazio mensagem="Sem conselhos pendentes".to_string() /> }
                    }
                >
                    <div class="cartoes">
                        <For
                            each=move || conselhos.get()
                            key=|c| c.id.clone()
                            children=move |c| {
                                let id_aceitar = c.id.clone();
                                let para_rejeitar = c.clone();
                                view! {
                                    <article class="cartao">
                                        <div class="cartao__topo">
                                            <span class="cartao__tipo">{rotulo_tipo(c.tipo)}</span>
                                            <Badge variant=variante_prioridade(c.prioridade)>
                                                {c.prioridade.rotulo()}
                                            </Badge>
                                        </div>
                                        <h2 class="cartao__titulo">{c.titulo.clone()}</h2>
                                        <p class="cartao__descricao">{c.descricao.clone()}</p>
                                        <Show when={
                                            let tem = !c.produtos_relacionados.is_empty();
                                            move || tem
                                        }>
                                            <p class="cartao__produtos">
                                                {format!(
                                                    "Produtos: {}",
                                                    c.produtos_relacionados.join(", "),
                                                )}
                                            </p>
                                        </Show>
                                        <div class="cartao__acoes">
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                on_click=move |_| {
                                                    responder(
                                                        id_aceitar.clone(),
                                                        RespostaConselho::aceitar(),
                                                    )
                                                }
                                            >
                                                "Aceitar"
                                            </Button>
                                            <Button on_click=move |_| {
                                                motivo.set(String::new());
                                                rejeitando.set(Some(para_rejeitar.clone()));
                                            }>"Rejeitar"</Button>
                                        </div>
                                    </article>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>

            {move || {
                rejeitando
                    .get()
                    .map(|c| {
                        view! {
                            <Modal
                                title=format!("Rejeitar: {}", c.titulo)
                                on_close=Callback::new(move |_| rejeitando.set(None))
                            >
                                <div class="dialogo-rejeicao">
                                    <p>"Explique por que este conselho não se aplica."</p>
                                    <Textarea value=motivo placeholder="Motivo da rejeição" />
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=confirmar_rejeicao
                                    >
                                        "Confirmar rejeição"
                                    </Button>
                                </div>
                            </Modal>
                        }
                    })
            }}
        </section>
    }
}
