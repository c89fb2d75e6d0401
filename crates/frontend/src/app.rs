use crate::layout::contexto::ContextoApp;
use crate::layout::toast::ToastService;
use crate::layout::AppShell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Contexto global da aplicação: vista, lojas, configuração das fontes.
    provide_context(ContextoApp::new());

    // Serviço central de toasts.
    provide_context(ToastService::new());

    view! {
        <AppShell />
    }
}
