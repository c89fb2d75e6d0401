//! Dataset local de lojas, com as zonas cobertas pelo mapa de stock.

use contracts::domain::loja::{Loja, Zona};

fn zona(nome: &str, camara_id: u32) -> Zona {
    Zona {
        zona: nome.to_string(),
        camara_id,
    }
}

pub fn lojas() -> Vec<Loja> {
    vec![
        Loja {
            id: 1,
            nome: "Loja Centro".to_string(),
            zonas: vec![
                zona("A1", 101),
                zona("B1", 102),
                zona("B2", 103),
                zona("C1", 104),
                zona("C2", 105),
                zona("D1", 106),
            ],
        },
        Loja {
            id: 2,
            nome: "Loja Sul".to_string(),
            zonas: vec![
                zona("A1", 201),
                zona("B1", 202),
                zona("B2", 203),
                zona("C1", 204),
                zona("C2", 205),
                zona("D1", 206),
            ],
        },
        Loja {
            id: 3,
            nome: "Loja Norte".to_string(),
            zonas: vec![
                zona("A1", 301),
                zona("B1", 302),
                zona("B2", 303),
                zona("C1", 304),
                zona("C2", 305),
                zona("D1", 306),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toda_loja_cobre_as_seis_zonas_do_mapa() {
        for loja in lojas() {
            let nomes: Vec<&str> = loja.zonas.iter().map(|z| z.zona.as_str()).collect();
            assert_eq!(nomes, ["A1", "B1", "B2", "C1", "C2", "D1"]);
        }
    }

    #[test]
    fn camaras_sao_unicas_entre_lojas() {
        let todas: Vec<u32> = lojas()
            .iter()
            .flat_map(|l| l.zonas.iter().map(|z| z.camara_id))
            .collect();
        let mut unicas = todas.clone();
        unicas.sort_unstable();
        unicas.dedup();
        assert_eq!(todas.len(), unicas.len());
    }
}
