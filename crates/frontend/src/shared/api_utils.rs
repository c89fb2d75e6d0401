//! Gateway HTTP do cliente.
//!
//! Todas as chamadas devolvem `RespostaApi<T>`: falha de transporte, status
//! não-2xx e payload inválido colapsam nas três variantes de `ErroGateway`
//! e nunca atravessam esta fronteira como panic.

use contracts::shared::gateway::{ErroGateway, RespostaApi};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;

/// Cookie de sessão lido do documento e reenviado como header homónimo.
pub const COOKIE_SESSAO: &str = "Autenticacao";

/// Backend de sensores (lojas, stock, estatísticas). Serviço externo com
/// endereço fixo; não recebe o header de sessão.
pub const BASE_SENSORES: &str = "https://sensores.lojaops.app";

/// Base do gateway da aplicação (conselhos, tarefas, upload), derivada da
/// localização atual com o backend na porta 3000.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000/api", protocol, hostname)
}

/// Valor do cookie de sessão, se presente no documento.
pub fn ler_cookie_sessao() -> Option<String> {
    let documento = web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?;
    let cookies = documento.cookie().ok()?;
    cookies.split(';').find_map(|par| {
        let (nome, valor) = par.trim().split_once('=')?;
        (nome == COOKIE_SESSAO).then(|| valor.to_string())
    })
}

fn com_sessao(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match ler_cookie_sessao() {
        Some(sessao) => req.header(COOKIE_SESSAO, &sessao),
        None => req,
    }
}

async fn interpretar<T: DeserializeOwned>(resposta: Response) -> RespostaApi<T> {
    if !resposta.ok() {
        return Err(ErroGateway::Http(resposta.status()));
    }
    resposta
        .json::<T>()
        .await
        .map_err(|e| ErroGateway::Payload(e.to_string()))
}

async fn interpretar_vazio(resposta: Response) -> RespostaApi<()> {
    if !resposta.ok() {
        return Err(ErroGateway::Http(resposta.status()));
    }
    Ok(())
}

/// GET no gateway da aplicação, com header de sessão.
pub async fn api_get<T: DeserializeOwned>(caminho: &str) -> RespostaApi<T> {
    let resposta = com_sessao(Request::get(&format!("{}{}", api_base(), caminho)))
        .send()
        .await
        .map_err(|e| ErroGateway::Transporte(e.to_string()))?;
    interpretar(resposta).await
}

/// GET no backend de sensores, sem header de sessão.
pub async fn api_get_sensores<T: DeserializeOwned>(caminho: &str) -> RespostaApi<T> {
    let resposta = Request::get(&format!("{}{}", BASE_SENSORES, caminho))
        .send()
        .await
        .map_err(|e| ErroGateway::Transporte(e.to_string()))?;
    interpretar(resposta).await
}

/// POST com corpo JSON, devolvendo o payload desserializado.
pub async fn api_post<B: Serialize, T: DeserializeOwned>(caminho: &str, corpo: &B) -> RespostaApi<T> {
    let resposta = com_sessao(Request::post(&format!("{}{}", api_base(), caminho)))
        .json(corpo)
        .map_err(|e| ErroGateway::Payload(e.to_string()))?
        .send()
        .await
        .map_err(|e| ErroGateway::Transporte(e.to_string()))?;
    interpretar(resposta).await
}

/// POST com corpo JSON cujo retorno interessa só pelo status.
pub async fn api_post_vazio<B: Serialize>(caminho: &str, corpo: &B) -> RespostaApi<()> {
    let resposta = com_sessao(Request::post(&format!("{}{}", api_base(), caminho)))
        .json(corpo)
        .map_err(|e| ErroGateway::Payload(e.to_string()))?
        .send()
        .await
        .map_err(|e| ErroGateway::Transporte(e.to_string()))?;
    interpretar_vazio(resposta).await
}

/// PUT com corpo JSON cujo retorno interessa só pelo status.
pub async fn api_put_vazio<B: Serialize>(caminho: &str, corpo: &B) -> RespostaApi<()> {
    let resposta = com_sessao(Request::put(&format!("{}{}", api_base(), caminho)))
        .json(corpo)
        .map_err(|e| ErroGateway::Payload(e.to_string()))?
        .send()
        .await
        .map_err(|e| ErroGateway::Transporte(e.to_string()))?;
    interpretar_vazio(resposta).await
}

/// DELETE, devolvendo o payload desserializado.
pub async fn api_delete<T: DeserializeOwned>(caminho: &str) -> RespostaApi<T> {
    let resposta = com_sessao(Request::delete(&format!("{}{}", api_base(), caminho)))
        .send()
        .await
        .map_err(|e| ErroGateway::Transporte(e.to_string()))?;
    interpretar(resposta).await
}
