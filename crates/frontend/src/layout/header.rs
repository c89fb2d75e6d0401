//! Cabeçalho com navegação por páginas, seleção de loja e aviso de dados
//! de demonstração.

use super::contexto::use_contexto;
use crate::shared::components::Badge;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let contexto = use_contexto();

    let ao_trocar_loja = move |ev| {
        let valor = event_target_value(&ev);
        contexto.loja_selecionada.set(valor.parse::<u32>().ok());
    };

    view! {
        <header class="header">
            <div class="header__marca">
                <span class="header__titulo">"Painel de Operações"</span>
                <Show when=move || contexto.exibindo_mock.get()>
                    <Badge variant="warning">"dados de demonstração"</Badge>
                </Show>
            </div>

            <nav class="header__nav">
                {move || {
                    contexto
                        .vista
                        .get()
                        .map(|vista| {
                            vista
                                .paginas()
                                .iter()
                                .map(|&pagina| {
                                    let ativa = move || contexto.pagina.get() == pagina;
                                    view! {
                                        <button
                                            class=move || {
                                                if ativa() {
                                                    "header__aba header__aba--ativa"
                                                } else {
                                                    "header__aba"
                                                }
                                            }
                                            on:click=move |_| contexto.abrir_pagina(pagina)
                                        >
                                            {pagina.rotulo()}
                                        </button>
                                    }
                                })
                                .collect_view()
                        })
                }}
            </nav>

            <div class="header__acoes">
                <select class="header__loja" on:change=ao_trocar_loja>
                    <For
                        each=move || contexto.lojas.get()
                        key=|loja| loja.id
                        children=move |loja| {
                            let selecionada =
                                move || contexto.loja_selecionada.get() == Some(loja.id);
                            view! {
                                <option value=loja.id.to_string() selected=selecionada>
                                    {loja.nome.clone()}
                                </option>
                            }
                        }
                    />
                </select>
                <button class="button button--secondary" on:click=move |_| contexto.sair_da_vista()>
                    "Trocar perfil"
                </button>
            </div>
        </header>
    }
}
