//! Ecrã inicial de escolha de perfil.

use super::contexto::{use_contexto, Vista};
use leptos::prelude::*;

const VISTAS: [Vista; 3] = [Vista::Operador, Vista::Gerente, Vista::Estrategico];

#[component]
pub fn SelecaoVista() -> impl IntoView {
    let contexto = use_contexto();

    view! {
        <div class="selecao-vista">
            <h1 class="selecao-vista__titulo">"Painel de Operações de Loja"</h1>
            <p class="selecao-vista__subtitulo">"Escolha o seu perfil para continuar"</p>
            <div class="selecao-vista__cartoes">
                {VISTAS
                    .into_iter()
                    .map(|vista| {
                        view! {
                            <button
                                class="selecao-vista__cartao"
                                on:click=move |_| contexto.escolher_vista(vista)
                            >
                                <span class="selecao-vista__rotulo">{vista.rotulo()}</span>
                                <span class="selecao-vista__descricao">{vista.descricao()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
