//! Lojas e zonas. A lista de lojas é buscada uma vez por sessão e é imutável
//! no cliente; a seleção de loja determina as zonas e os produtos exibidos.

use serde::{Deserialize, Serialize};

/// Subsecção nomeada de uma loja, associada a uma câmara/sensor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zona {
    pub zona: String,
    pub camara_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loja {
    pub id: u32,
    #[serde(rename = "nombre")]
    pub nome: String,
    pub zonas: Vec<Zona>,
}

impl Loja {
    /// Nome da zona coberta pela câmara indicada, se conhecida.
    pub fn zona_da_camara(&self, camara_id: u32) -> Option<&str> {
        self.zonas
            .iter()
            .find(|z| z.camara_id == camara_id)
            .map(|z| z.zona.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_zona_pela_camara() {
        let loja = Loja {
            id: 1,
            nome: "Loja Centro".into(),
            zonas: vec![
                Zona {
                    zona: "A1".into(),
                    camara_id: 10,
                },
                Zona {
                    zona: "B1".into(),
                    camara_id: 11,
                },
            ],
        };
        assert_eq!(loja.zona_da_camara(11), Some("B1"));
        assert_eq!(loja.zona_da_camara(99), None);
    }
}
