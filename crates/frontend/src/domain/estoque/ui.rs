//! Mapa de stock: grelha de zonas com um chip por produto, legenda de
//! severidade e painel de comentário por produto.

use super::api;
use crate::layout::contexto::use_contexto;
use crate::layout::toast::use_toasts;
use crate::shared::components::{Badge, EstadoVazio, MensagemErro, Modal, Spinner};
use crate::shared::geracao::ControleGeracao;
use chrono::Utc;
use contracts::domain::produto::{ComentarioProduto, Produto, StatusProduto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Textarea};

fn classe_status(status: StatusProduto) -> &'static str {
    match status {
        StatusProduto::Ok => "chip chip--ok",
        StatusProduto::Baixo => "chip chip--baixo",
        StatusProduto::Critico => "chip chip--critico",
        StatusProduto::Desconhecido => "chip chip--desconhecido",
        StatusProduto::SemEstoque => "chip chip--sem-estoque",
    }
}

fn variante_badge(status: StatusProduto) -> &'static str {
    match status {
        StatusProduto::Ok => "success",
        StatusProduto::Baixo => "warning",
        StatusProduto::Critico | StatusProduto::SemEstoque => "error",
        StatusProduto::Desconhecido => "neutral",
    }
}

#[component]
pub fn PaginaStatus() -> impl IntoView {
    let contexto = use_contexto();
    let toasts = use_toasts();

    let produtos = RwSignal::new(Vec::<Produto>::new());
    let carregando = RwSignal::new(false);
    let erro = RwSignal::new(None::<String>);
    let selecionado = RwSignal::new(None::<Produto>);
    let comentario = RwSignal::new(String::new());

    let geracao = StoredValue::new(ControleGeracao::new());

    let recarregar = move || {
        let Some(loja) = contexto.loja_atual() else {
            return;
        };
        let mut etiqueta = 0;
        geracao.update_value(|g| etiqueta = g.iniciar());
        carregando.set(true);
        erro.set(None);
        let grade = contexto.grade;
        spawn_local(async move {
            let resultado = api::carregar_estoque(contexto.fontes.estoque, &loja, &grade).await;
            if !geracao.with_value(|g| g.vigente(etiqueta)) {
                return;
            }
            carregando.set(false);
            match resultado {
                Ok(resolucao) => {
                    contexto.registrar_origem(resolucao.origem);
                    produtos.set(resolucao.dados);
                }
                Err(e) => {
                    log::error!("carregamento de stock falhou: {e}");
                    erro.set(Some(format!("Falha ao carregar o stock: {e}")));
                }
            }
        });
    };

    Effect::new(move |_| {
        // Reage à troca de loja.
        let _ = contexto.loja_selecionada.get();
        recarregar();
    });

    let enviar = move |_| {
        let Some(produto) = selecionado.get_untracked() else {
            return;
        };
        let texto = comentario.get_untracked();
        if texto.trim().is_empty() {
            toasts.erro("Escreva o comentário antes de enviar");
            return;
        }
        let corpo = ComentarioProduto {
            produto_id: produto.id.clone(),
            comentario: texto.trim().to_string(),
            timestamp: Utc::now().to_rfc3339(),
        };
        spawn_local(async move {
            match api::enviar_comentario(contexto.fontes.estoque, &corpo).await {
                Ok(origem) => {
                    contexto.registrar_origem(origem);
                    toasts.sucesso("Comentário registado");
                    comentario.set(String::new());
                    selecionado.set(None);
                }
                Err(e) => toasts.erro(format!("Falha ao enviar comentário: {e}")),
            }
        });
    };

    let grade = contexto.grade;

    view! {
        <section class="page">
            <div class="page__header">
                <h1>"Mapa de Stock"</h1>
                <div class="legenda">
                    <span class="legenda__item legenda__item--ok">"OK (60%+)"</span>
                    <span class="legenda__item legenda__item--baixo">"Baixo (20-59%)"</span>
                    <span class="legenda__item legenda__item--critico">"Crítico (<20%)"</span>
                    <span class="legenda__item legenda__item--desconhecido">"Desconhecido"</span>
                    <span class="legenda__item legenda__item--sem-estoque">"Sem estoque"</span>
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
                fallback=|| view! { <Spinner mensagem="A carregar o stock..." /> }
            >
                <Show
                    when=move || !produtos.get().is_empty()
                    fallback=|| view! { <EstadoVazio mensagem="Sem produtos para esta loja".to_string() /> }
                >
                    <div
                        class="grade"
                        style=format!(
                            "grid-template-columns: repeat({}, 1fr); grid-template-rows: repeat({}, 1fr);",
                            grade.colunas,
                            grade.linhas,
                        )
                    >
                        {(1..=grade.linhas)
                            .flat_map(|y| (1..=grade.colunas).map(move |x| (x, y)))
                            .map(|(x, y)| {
                                view! {
                                    <div class="grade__celula">
                                        <For
                                            each=move || {
                                                produtos
                                                    .get()
                                                    .into_iter()
                                                    .filter(|p| {
                                                        p.localizacao.posicao.x == x
                                                            && p.localizacao.posicao.y == y
                                                    })
                                                    .collect::<Vec<_>>()
                                            }
                                            key=|p| p.id.clone()
                                            children=move |p| {
                                                let aberto = p.clone();
                                                view! {
                                                    <button
                                                        class=classe_status(p.status)
                                                        on:click=move |_| selecionado.set(Some(aberto.clone()))
                                                    >
                                                        <span class="chip__nome">{p.nome.clone()}</span>
                                                        <span class="chip__percentual">
                                                            {format!("{:.0}%", p.percentual)}
                                                        </span>
                                                        <span class="chip__zona">{p.localizacao.zona.clone()}</span>
                                                    </button>
                                                }
                                            }
                                        />
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </Show>

            {move || {
                selecionado
                    .get()
                    .map(|p| {
                        let titulo = p.nome.clone();
                        view! {
                            <Modal
                                title=titulo
                                on_close=Callback::new(move |_| selecionado.set(None))
                            >
                                <div class="detalhe-produto">
                                    <p>
                                        <Badge variant=variante_badge(p.status)>
                                            {p.status.rotulo()}
                                        </Badge>
                                        " "
                                        {format!(
                                            "{:.0} de {:.0} unidades ({:.0}%)",
                                            p.quantidade_atual,
                                            p.quantidade_maxima,
                                            p.percentual,
                                        )}
                                    </p>
                                    <p class="detalhe-produto__meta">
                                        {format!(
                                            "Zona {} · célula ({}, {})",
                                            p.localizacao.zona,
                                            p.localizacao.posicao.x,
                                            p.localizacao.posicao.y,
                                        )}
                                    </p>
                                    <Textarea
                                        value=comentario
                                        placeholder="Comentário sobre este produto"
                                    />
                                    <Button appearance=ButtonAppearance::Primary on_click=enviar>
                                        "Enviar comentário"
                                    </Button>
                                </div>
                            </Modal>
                        }
                    })
            }}
        </section>
    }
}
