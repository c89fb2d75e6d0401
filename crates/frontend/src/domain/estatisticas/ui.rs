//! Estatísticas de vendas vs. espaço com ordenação por coluna e o histórico
//! de consumo dos últimos 30 dias.

use super::{api, mock};
use crate::layout::contexto::use_contexto;
use crate::shared::components::{MensagemErro, Spinner};
use crate::shared::geracao::ControleGeracao;
use contracts::domain::consumo::HistoricoConsumo;
use contracts::domain::estatistica::{ordenar, CampoOrdenacao, Estatistica, Ordenacao};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

#[component]
pub fn PaginaEstatisticas() -> impl IntoView {
    let contexto = use_contexto();

    let itens = RwSignal::new(Vec::<Estatistica>::new());
    let carregando = RwSignal::new(false);
    let erro = RwSignal::new(None::<String>);
    let ordenacao = RwSignal::new(Ordenacao::default());

    let produto_consumo = RwSignal::new(0usize);
    let historico = RwSignal::new(None::<HistoricoConsumo>);

    let geracao = StoredValue::new(ControleGeracao::new());

    let recarregar = move || {
        let Some(loja_id) = contexto.loja_selecionada.get_untracked() else {
            return;
        };
        let mut etiqueta = 0;
        geracao.update_value(|g| etiqueta = g.iniciar());
        carregando.set(true);
        erro.set(None);
        spawn_local(async move {
            let resultado =
                api::carregar_estatisticas(contexto.fontes.estatisticas, loja_id).await;
            if !geracao.with_value(|g| g.vigente(etiqueta)) {
                return;
            }
            carregando.set(false);
            match resultado {
                Ok(resolucao) => {
                    contexto.registrar_origem(resolucao.origem);
                    itens.set(resolucao.dados);
                }
                Err(e) => {
                    log::error!("carregamento de estatísticas falhou: {e}");
                    erro.set(Some(format!("Falha ao carregar estatísticas: {e}")));
                }
            }
        });
    };

    Effect::new(move |_| {
        let _ = contexto.loja_selecionada.get();
        recarregar();
    });

    // Histórico regenerado quando o produto escolhido muda.
    Effect::new(move |_| {
        let indice = produto_consumo.get();
        if let Some((nome, base)) = mock::PRODUTOS_CONSUMO.get(indice) {
            historico.set(Some(api::historico_consumo(nome, *base)));
        }
    });

    let ordenados = move || {
        let mut v = itens.get();
        ordenar(&mut v, ordenacao.get());
        v
    };

    let cabecalho = move |campo: CampoOrdenacao, rotulo: &'static str| {
        let indicador = move || {
            let ord = ordenacao.get();
            if ord.campo != campo {
                ""
            } else if ord.descendente {
                " ▼"
            } else {
                " ▲"
            }
        };
        view! {
            <button
                class="tabela__ordenar"
                on:click=move |_| ordenacao.update(|o| o.alternar(campo))
            >
                {rotulo}
                {indicador}
            </button>
        }
    };

    let ao_trocar_produto = move |ev| {
        let valor = event_target_value(&ev);
        if let Ok(indice) = valor.parse::<usize>() {
            produto_consumo.set(indice);
        }
    };

    view! {
        <section class="page">
            <div class="page__header">
                <h1>"Estatísticas"</h1>
            </div>

            <Show when=move || erro.get().is_some()>
                <MensagemErro
                    mensagem=Signal::derive(move || erro.get().unwrap_or_default())
                    on_repetir=Callback::new(move |_| recarregar())
                />
            </Show>

            <Show
                when=move || !carregando.get()
                fallback=|| view! { <Spinner mensagem="A carregar estatísticas..." /> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Produto"</TableHeaderCell>
                            <TableHeaderCell>"Categoria"</TableHeaderCell>
                            <TableHeaderCell>
                                {cabecalho(CampoOrdenacao::PercentualVendas, "Vendas %")}
                            </TableHeaderCell>
                            <TableHeaderCell>
                                {cabecalho(CampoOrdenacao::PercentualEspaco, "Espaço %")}
                            </TableHeaderCell>
                            <TableHeaderCell>
                                {cabecalho(CampoOrdenacao::Eficiencia, "Eficiência")}
                            </TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=ordenados
                            key=|e| e.id.clone()
                            children=move |e| {
                                view! {
                                    <TableRow>
                                        <TableCell>{e.nome_produto.clone()}</TableCell>
                                        <TableCell>{e.categoria.clone()}</TableCell>
                                        <TableCell>
                                            {format!("{:.1}", e.percentual_vendas)}
                                        </TableCell>
                                        <TableCell>
                                            {format!("{:.1}", e.percentual_espaco)}
                                        </TableCell>
                                        <TableCell>{format!("{:.2}", e.eficiencia)}</TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </Show>

            <div class="consumo">
                <h2>"Consumo dos últimos 30 dias"</h2>
                <select class="consumo__produto" on:change=ao_trocar_produto>
                    {mock::PRODUTOS_CONSUMO
                        .iter()
                        .enumerate()
                        .map(|(indice, (nome, _))| {
                            let selecionado = move || produto_consumo.get() == indice;
                            view! {
                                <option value=indice.to_string() selected=selecionado>
                                    {*nome}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                {move || {
                    historico
                        .get()
                        .map(|h| {
                            let maximo = h
                                .dados
                                .iter()
                                .map(|d| d.quantidade)
                                .max()
                                .unwrap_or(1)
                                .max(1);
                            view! {
                                <div class="consumo__resumo">
                                    <p>
                                        {format!(
                                            "Média diária de {}: {:.1} unidades",
                                            h.produto,
                                            h.media(),
                                        )}
                                    </p>
                                    <div class="consumo__barras">
                                        {h
                                            .dados
                                            .iter()
                                            .map(|d| {
                                                let altura = d.quantidade as f64 / maximo as f64 * 100.0;
                                                view! {
                                                    <div
                                                        class="consumo__barra"
                                                        style=format!("height: {altura:.0}%")
                                                        title=format!("{}: {}", d.data, d.quantidade)
                                                    ></div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>
        </section>
    }
}
