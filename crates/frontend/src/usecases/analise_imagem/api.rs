//! Upload de imagens para o colaborador externo de visão. A resposta é
//! retransmitida à UI sem interpretação além da forma aninhada.

use crate::shared::api_utils::api_base;
use contracts::shared::gateway::{ErroGateway, RespostaApi};
use contracts::wire::RespostaUpload;
use gloo_net::http::Request;
use web_sys::{File, FormData};

pub async fn enviar_imagem(ficheiro: &File) -> RespostaApi<RespostaUpload> {
    let formulario = FormData::new()
        .map_err(|_| ErroGateway::Payload("não foi possível montar o formulário".into()))?;
    formulario
        .append_with_blob("file", ficheiro)
        .map_err(|_| ErroGateway::Payload("não foi possível anexar o ficheiro".into()))?;

    let resposta = Request::post(&format!("{}/upload-supermarket", api_base()))
        .body(formulario)
        .map_err(|e| ErroGateway::Payload(e.to_string()))?
        .send()
        .await
        .map_err(|e| ErroGateway::Transporte(e.to_string()))?;

    if !resposta.ok() {
        return Err(ErroGateway::Http(resposta.status()));
    }
    resposta
        .json::<RespostaUpload>()
        .await
        .map_err(|e| ErroGateway::Payload(e.to_string()))
}
