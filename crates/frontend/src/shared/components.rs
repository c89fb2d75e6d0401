//! Componentes de apresentação partilhados pelas páginas.

use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Spinner(
    /// Texto exibido sob o indicador
    #[prop(optional, into)]
    mensagem: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="spinner">
            <div class="spinner__circulo"></div>
            {move || mensagem.get().map(|m| view! { <p class="spinner__texto">{m}</p> })}
        </div>
    }
}

#[component]
pub fn MensagemErro(
    #[prop(into)] mensagem: Signal<String>,
    /// Ação de repetição opcional
    #[prop(optional, into)]
    on_repetir: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="alert alert--error">
            <span class="alert__texto">{move || mensagem.get()}</span>
            {on_repetir.map(|cb| {
                view! {
                    <button class="button button--secondary" on:click=move |_| cb.run(())>
                        "Tentar novamente"
                    </button>
                }
            })}
        </div>
    }
}

#[component]
pub fn EstadoVazio(#[prop(into)] mensagem: String) -> impl IntoView {
    view! {
        <div class="estado-vazio">
            <p>{mensagem}</p>
        </div>
    }
}

/// Badge with different variants
#[component]
pub fn Badge(
    /// Variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

#[component]
pub fn Modal(
    /// Title of the modal
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=handle_close>
                        "✕"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
