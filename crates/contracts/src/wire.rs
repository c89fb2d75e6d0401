//! DTOs dos backends externos, nomeados como chegam no fio (as chaves
//! mantêm a grafia espanhola do backend de sensores).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GET /lojas
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespostaLojas {
    pub total: u32,
    pub lojas: Vec<crate::domain::loja::Loja>,
}

// ---------------------------------------------------------------------------
// GET /status/{storeId}
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordenadasWire {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProdutoStatusWire {
    pub id_producto: u32,
    pub id_camara: u32,
    pub coordenadas: CoordenadasWire,
    pub cantidad_actual: f64,
    pub espacio_total: f64,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespostaStatus {
    pub id_loja: u32,
    pub source: String,
    pub productos: Vec<ProdutoStatusWire>,
}

// ---------------------------------------------------------------------------
// GET /estadistica/{storeId}
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstadisticaWire {
    pub id_producto: u32,
    pub nombre: String,
    #[serde(rename = "rotacion_%")]
    pub rotacao: f64,
    #[serde(rename = "uso_espacio_%")]
    pub uso_espaco: f64,
    #[serde(rename = "eficacia_%")]
    pub eficacia: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespostaEstadisticas {
    pub id_loja: u32,
    pub source: String,
    pub estadisticas: Vec<EstadisticaWire>,
}

// ---------------------------------------------------------------------------
// POST /upload-supermarket — colaborador externo, forma apenas retransmitida
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoAnalise {
    pub product_detected: String,
    pub stock_percent: f64,
    #[serde(default)]
    pub alerts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnaliseImagem {
    pub info: InfoAnalise,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub raw_data: Option<serde_json::Value>,
}

/// O serviço de visão embrulha a própria resposta reencaminhada, daí o
/// `forward_response` duplamente aninhado.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncaminhamentoAnalise {
    pub forward_response: AnaliseImagem,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespostaUpload {
    pub ok: bool,
    pub message: String,
    #[serde(default)]
    pub forward_response: Option<EncaminhamentoAnalise>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desserializa_chaves_com_percentual() {
        let json = r#"{
            "id_producto": 3,
            "nombre": "Tomate",
            "rotacion_%": 15.4,
            "uso_espacio_%": 12.0,
            "eficacia_%": 128.0
        }"#;
        let linha: EstadisticaWire = serde_json::from_str(json).unwrap();
        assert_eq!(linha.nombre, "Tomate");
        assert_eq!(linha.rotacao, 15.4);
        assert_eq!(linha.uso_espaco, 12.0);
    }

    #[test]
    fn desserializa_upload_aninhado() {
        let json = r#"{
            "ok": true,
            "message": "ok",
            "forward_response": {
                "forward_response": {
                    "info": {
                        "product_detected": "Laranjas",
                        "stock_percent": 42.5,
                        "alerts": ["nível baixo"]
                    },
                    "steps": ["https://cdn/passo1.png"],
                    "raw_data": {"boxes": 3}
                }
            }
        }"#;
        let r: RespostaUpload = serde_json::from_str(json).unwrap();
        let analise = r.forward_response.unwrap().forward_response;
        assert_eq!(analise.info.product_detected, "Laranjas");
        assert_eq!(analise.steps.len(), 1);
    }

    #[test]
    fn upload_invalido_sem_encaminhamento() {
        let json = r#"{ "ok": false, "message": "imagem inválida" }"#;
        let r: RespostaUpload = serde_json::from_str(json).unwrap();
        assert!(!r.ok);
        assert!(r.forward_response.is_none());
    }
}
