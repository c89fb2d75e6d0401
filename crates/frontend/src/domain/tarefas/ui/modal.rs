//! Detalhe de tarefa: comentário, fotos e a transição única para
//! concluída ou com erro.

use super::{rotulo_status, variante_status};
use crate::domain::tarefas::{api, rotulo_da_zona};
use crate::layout::contexto::use_contexto;
use crate::layout::toast::use_toasts;
use crate::shared::components::{Badge, Modal};
use contracts::domain::tarefa::{AtualizacaoTarefa, ComentarioTarefa, StatusTarefa, Tarefa};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Textarea};

#[component]
pub fn ModalTarefa(
    tarefa: Tarefa,
    on_alterada: Callback<Tarefa>,
    on_close: Callback<()>,
) -> impl IntoView {
    let contexto = use_contexto();
    let toasts = use_toasts();

    let comentario = RwSignal::new(String::new());
    let fotos = RwSignal::new(Vec::<String>::new());
    let enviando = RwSignal::new(false);

    let pendente = tarefa.status == StatusTarefa::Pendente;
    let tarefa = StoredValue::new(tarefa);

    let ao_escolher_fotos = move |ev| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let mut nomes = vec![];
        if let Some(lista) = input.files() {
            for indice in 0..lista.length() {
                if let Some(ficheiro) = lista.get(indice) {
                    nomes.push(ficheiro.name());
                }
            }
        }
        fotos.set(nomes);
    };

    let transitar = move |destino: StatusTarefa| {
        if enviando.get_untracked() {
            return;
        }

        let texto = comentario.get_untracked().trim().to_string();
        let nomes = fotos.get_untracked();
        let anexo = (!texto.is_empty() || !nomes.is_empty()).then(|| ComentarioTarefa {
            texto: (!texto.is_empty()).then(|| texto.clone()),
            fotos: (!nomes.is_empty()).then(|| nomes.clone()),
            timestamp: api::agora(),
        });

        // A transição é validada no modelo antes de tocar na rede.
        let mut alvo = tarefa.get_value();
        let resultado = match destino {
            StatusTarefa::Erro => alvo.reportar_erro(anexo),
            _ => alvo.concluir(anexo),
        };
        if resultado.is_err() {
            toasts.erro("Esta tarefa já está num estado terminal");
            return;
        }

        enviando.set(true);
        spawn_local(async move {
            let modo = contexto.fontes.tarefas;
            let atualizacao = AtualizacaoTarefa {
                status: Some(destino),
                ..Default::default()
            };
            let resultado = api::atualizar_tarefa(modo, &alvo.id, &atualizacao).await;
            if let Ok(origem) = &resultado {
                contexto.registrar_origem(*origem);
                if !texto.is_empty() || !nomes.is_empty() {
                    if let Err(e) = api::comentar_tarefa(modo, &alvo.id, &texto, nomes).await {
                        log::error!("comentário da tarefa {} não foi gravado: {e}", alvo.id);
                        toasts.erro(format!("O comentário não foi gravado: {e}"));
                    }
                }
            }
            enviando.set(false);
            match resultado {
                Ok(_) => {
                    match destino {
                        StatusTarefa::Erro => toasts.info("Tarefa marcada com erro"),
                        _ => toasts.sucesso("Tarefa concluída"),
                    }
                    on_alterada.run(alvo.clone());
                    on_close.run(());
                }
                Err(e) => toasts.erro(format!("Falha ao atualizar a tarefa: {e}")),
            }
        });
    };

    view! {
        <Modal title=tarefa.with_value(|t| t.titulo.clone()) on_close=on_close>
            <div class="detalhe-tarefa">
                <div class="detalhe-tarefa__badges">
                    {tarefa
                        .with_value(|t| t.criada_por_ia)
                        .then(|| view! { <Badge variant="primary">"IA"</Badge> })}
                    <Badge variant=tarefa
                        .with_value(|t| variante_status(t.status))>
                        {tarefa.with_value(|t| rotulo_status(t.status))}
                    </Badge>
                    <span class="detalhe-tarefa__zona">
                        {tarefa.with_value(|t| rotulo_da_zona(&t.zona).to_string())}
                    </span>
                </div>
                <p class="detalhe-tarefa__descricao">
                    {tarefa.with_value(|t| t.descricao.clone())}
                </p>

                <Show when={
                    let tem = tarefa.with_value(|t| !t.comentarios.is_empty());
                    move || tem
                }>
                    <div class="detalhe-tarefa__comentarios">
                        <h3>"Comentários"</h3>
                        {tarefa
                            .with_value(|t| t.comentarios.clone())
                            .into_iter()
                            .map(|c| {
                                view! {
                                    <div class="comentario">
                                        {c.texto.clone().unwrap_or_default()}
                                        {c
                                            .fotos
                                            .as_ref()
                                            .map(|f| format!(" ({} foto(s))", f.len()))}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>

                <Show when=move || pendente>
                    <div class="detalhe-tarefa__acoes">
                        <Textarea value=comentario placeholder="Comentário (opcional)" />
                        <input type="file" multiple accept="image/*" on:change=ao_escolher_fotos />
                        <div class="detalhe-tarefa__botoes">
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=enviando
                                on_click=move |_| transitar(StatusTarefa::Concluida)
                            >
                                "Concluir"
                            </Button>
                            <Button
                                disabled=enviando
                                on_click=move |_| transitar(StatusTarefa::Erro)
                            >
                                "Reportar erro"
                            </Button>
                        </div>
                    </div>
                </Show>
            </div>
        </Modal>
    }
}
