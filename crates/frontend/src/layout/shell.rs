use super::contexto::{use_contexto, Pagina};
use super::header::Header;
use super::selecao_vista::SelecaoVista;
use super::toast::{use_toasts, ToastHost};
use crate::domain::conselhos::ui::estrategico::PaginaConselhosEstrategicos;
use crate::domain::conselhos::ui::PaginaConselhos;
use crate::domain::estatisticas::ui::PaginaEstatisticas;
use crate::domain::estoque::ui::PaginaStatus;
use crate::domain::lojas;
use crate::domain::tarefas::ui::gerente::PaginaGestaoTarefas;
use crate::domain::tarefas::ui::lista::PaginaTarefas;
use crate::usecases::analise_imagem::ui::PaginaAnaliseImagem;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AppShell() -> impl IntoView {
    let contexto = use_contexto();
    let toasts = use_toasts();

    // A lista de lojas é carregada uma única vez por sessão.
    let lojas_pedidas = StoredValue::new(false);
    Effect::new(move |_| {
        if lojas_pedidas.get_value() {
            return;
        }
        lojas_pedidas.set_value(true);
        spawn_local(async move {
            match lojas::api::carregar_lojas(contexto.fontes.lojas).await {
                Ok(resolucao) => {
                    contexto.registrar_origem(resolucao.origem);
                    if contexto.loja_selecionada.get_untracked().is_none() {
                        contexto
                            .loja_selecionada
                            .set(resolucao.dados.first().map(|l| l.id));
                    }
                    contexto.lojas.set(resolucao.dados);
                }
                Err(erro) => {
                    log::error!("carregamento de lojas falhou: {erro}");
                    toasts.erro(format!("Falha ao carregar lojas: {erro}"));
                }
            }
        });
    });

    view! {
        <ToastHost />
        {move || match contexto.vista.get() {
            None => view! { <SelecaoVista /> }.into_any(),
            Some(_) => {
                view! {
                    <Header />
                    <main class="conteudo">
                        {move || match contexto.pagina.get() {
                            Pagina::Status => view! { <PaginaStatus /> }.into_any(),
                            Pagina::Conselhos => view! { <PaginaConselhos /> }.into_any(),
                            Pagina::ConselhosEstrategicos => {
                                view! { <PaginaConselhosEstrategicos /> }.into_any()
                            }
                            Pagina::Estatisticas => view! { <PaginaEstatisticas /> }.into_any(),
                            Pagina::Tarefas => view! { <PaginaTarefas /> }.into_any(),
                            Pagina::GestaoTarefas => view! { <PaginaGestaoTarefas /> }.into_any(),
                            Pagina::AnaliseImagem => view! { <PaginaAnaliseImagem /> }.into_any(),
                        }}
                    </main>
                }
                    .into_any()
            }
        }}
    }
}
