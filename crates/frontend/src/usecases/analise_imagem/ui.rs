//! Página de análise de imagem: upload de uma foto de prateleira, reprodução
//! passo a passo das imagens intermédias da pipeline e o resultado final.

use super::api;
use crate::layout::toast::use_toasts;
use crate::shared::components::Spinner;
use contracts::wire::InfoAnalise;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};
use web_sys::Url;

const INTERVALO_PASSOS_MS: u32 = 1500;
const PAUSA_FINAL_MS: u32 = 1000;

#[component]
pub fn PaginaAnaliseImagem() -> impl IntoView {
    let toasts = use_toasts();

    let ficheiro = RwSignal::new(None::<web_sys::File>);
    let previa = RwSignal::new(None::<String>);
    let enviando = RwSignal::new(false);
    let passos = RwSignal::new(Vec::<String>::new());
    let passo_atual = RwSignal::new(None::<usize>);
    let resultado = RwSignal::new(None::<InfoAnalise>);

    let ao_escolher = move |ev| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let escolhido = input.files().and_then(|lista| lista.get(0));
        if let Some(f) = &escolhido {
            if let Ok(url) = Url::create_object_url_with_blob(f) {
                previa.set(Some(url));
            }
        }
        ficheiro.set(escolhido);
        passos.set(vec![]);
        passo_atual.set(None);
        resultado.set(None);
    };

    let analisar = move |_| {
        let Some(f) = ficheiro.get_untracked() else {
            toasts.erro("Escolha uma imagem primeiro");
            return;
        };
        if enviando.get_untracked() {
            return;
        }
        enviando.set(true);
        passos.set(vec![]);
        passo_atual.set(None);
        resultado.set(None);
        spawn_local(async move {
            let resposta = api::enviar_imagem(&f).await;
            match resposta {
                Ok(r) if r.ok => {
                    let analise = r.forward_response.map(|e| e.forward_response);
                    let imagens = analise
                        .as_ref()
                        .map(|a| a.steps.clone())
                        .unwrap_or_default();
                    passos.set(imagens.clone());

                    // As imagens intermédias entram uma a uma, em cadência fixa.
                    for indice in 0..imagens.len() {
                        passo_atual.set(Some(indice));
                        TimeoutFuture::new(INTERVALO_PASSOS_MS).await;
                    }
                    TimeoutFuture::new(PAUSA_FINAL_MS).await;

                    resultado.set(analise.map(|a| a.info));
                    enviando.set(false);
                }
                Ok(r) => {
                    enviando.set(false);
                    toasts.erro(format!("Análise recusada: {}", r.message));
                }
                Err(e) => {
                    enviando.set(false);
                    toasts.erro(format!("Falha no envio da imagem: {e}"));
                }
            }
        });
    };

    let limpar = move |_| {
        ficheiro.set(None);
        previa.set(None);
        passos.set(vec![]);
        passo_atual.set(None);
        resultado.set(None);
    };

    view! {
        <section class="page">
            <div class="page__header">
                <h1>"Análise de Imagem"</h1>
                <p class="page__subtitulo">
                    "Envie uma foto de prateleira para análise automática de stock"
                </p>
            </div>

            <div class="analise">
                <input type="file" accept="image/*" on:change=ao_escolher />

                {move || {
                    previa
                        .get()
                        .map(|url| {
                            view! {
                                <img class="analise__previa" src=url alt="Pré-visualização" />
                            }
                        })
                }}

                <div class="analise__acoes">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=enviando
                        on_click=analisar
                    >
                        "Analisar"
                    </Button>
                    <Button on_click=limpar>"Limpar"</Button>
                </div>

                <Show when=move || enviando.get()>
                    <Spinner mensagem="A analisar a imagem..." />
                </Show>

                {move || {
                    passo_atual
                        .get()
                        .and_then(|indice| passos.get().get(indice).cloned())
                        .map(|url| {
                            view! {
                                <div class="analise__passo">
                                    <img src=url alt="Passo da análise" />
                                </div>
                            }
                        })
                }}

                {move || {
                    resultado
                        .get()
                        .map(|info| {
                            view! {
                                <div class="analise__resultado">
                                    <h2>{info.product_detected.clone()}</h2>
                                    <p>{format!("Stock estimado: {:.1}%", info.stock_percent)}</p>
                                    <Show when={
                                        let tem = !info.alerts.is_empty();
                                        move || tem
                                    }>
                                        <ul class="analise__alertas">
                                            {info
                                                .alerts
                                                .iter()
                                                .map(|a| view! { <li>{a.clone()}</li> })
                                                .collect_view()}
                                        </ul>
                                    </Show>
                                </div>
                            }
                        })
                }}
            </div>
        </section>
    }
}
