//! Toasts globais com remoção automática.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DURACAO_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoToast {
    Sucesso,
    Erro,
    Info,
}

impl TipoToast {
    fn classe(&self) -> &'static str {
        match self {
            TipoToast::Sucesso => "toast--success",
            TipoToast::Erro => "toast--error",
            TipoToast::Info => "toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub tipo: TipoToast,
    pub mensagem: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    itens: RwSignal<Vec<Toast>>,
    proximo_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            itens: RwSignal::new(vec![]),
            proximo_id: RwSignal::new(0),
        }
    }

    pub fn sucesso(&self, mensagem: impl Into<String>) {
        self.empurrar(TipoToast::Sucesso, mensagem.into());
    }

    pub fn erro(&self, mensagem: impl Into<String>) {
        self.empurrar(TipoToast::Erro, mensagem.into());
    }

    pub fn info(&self, mensagem: impl Into<String>) {
        self.empurrar(TipoToast::Info, mensagem.into());
    }

    fn empurrar(&self, tipo: TipoToast, mensagem: String) {
        let id = self.proximo_id.get_untracked();
        self.proximo_id.set(id + 1);
        self.itens.update(|itens| {
            itens.push(Toast { id, tipo, mensagem });
        });

        let itens = self.itens;
        spawn_local(async move {
            TimeoutFuture::new(DURACAO_MS).await;
            itens.update(|itens| itens.retain(|t| t.id != id));
        });
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService fornecido na raiz da aplicação")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let servico = use_toasts();
    view! {
        <div class="toast-host">
            <For
                each=move || servico.itens.get()
                key=|toast| toast.id
                children=move |toast| {
                    view! {
                        <div class=format!("toast {}", toast.tipo.classe())>
                            {toast.mensagem.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
