use contracts::domain::loja::Loja;
use contracts::shared::gateway::{ConfigFontes, OrigemDados};
use contracts::shared::grade::{GradeConfig, GRADE_ESTOQUE};
use leptos::prelude::*;

/// Perfil escolhido no arranque. Determina as páginas disponíveis e a
/// página inicial; não há routing por URL, a navegação vive neste contexto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vista {
    Operador,
    Gerente,
    Estrategico,
}

impl Vista {
    pub fn rotulo(&self) -> &'static str {
        match self {
            Vista::Operador => "Operador",
            Vista::Gerente => "Gerente",
            Vista::Estrategico => "Estratégico",
        }
    }

    pub fn descricao(&self) -> &'static str {
        match self {
            Vista::Operador => "Tarefas da zona e mapa de stock",
            Vista::Gerente => "Stock, conselhos, estatísticas e gestão de tarefas",
            Vista::Estrategico => "Conselhos estratégicos e estatísticas",
        }
    }

    pub fn pagina_inicial(&self) -> Pagina {
        match self {
            Vista::Operador => Pagina::Tarefas,
            Vista::Gerente => Pagina::Status,
            Vista::Estrategico => Pagina::ConselhosEstrategicos,
        }
    }

    pub fn paginas(&self) -> &'static [Pagina] {
        match self {
            Vista::Operador => &[Pagina::Tarefas, Pagina::Status],
            Vista::Gerente => &[
                Pagina::Status,
                Pagina::Conselhos,
                Pagina::Estatisticas,
                Pagina::GestaoTarefas,
                Pagina::AnaliseImagem,
            ],
            Vista::Estrategico => &[Pagina::ConselhosEstrategicos, Pagina::Estatisticas],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagina {
    Status,
    Conselhos,
    ConselhosEstrategicos,
    Estatisticas,
    Tarefas,
    GestaoTarefas,
    AnaliseImagem,
}

impl Pagina {
    pub fn rotulo(&self) -> &'static str {
        match self {
            Pagina::Status => "Mapa de Stock",
            Pagina::Conselhos => "Conselhos",
            Pagina::ConselhosEstrategicos => "Conselhos Estratégicos",
            Pagina::Estatisticas => "Estatísticas",
            Pagina::Tarefas => "Tarefas",
            Pagina::GestaoTarefas => "Gestão de Tarefas",
            Pagina::AnaliseImagem => "Análise de Imagem",
        }
    }
}

/// Contexto global da aplicação. A configuração das fontes e da grelha é
/// fixada no arranque; o resto é estado reativo partilhado pelas páginas.
#[derive(Clone, Copy)]
pub struct ContextoApp {
    pub vista: RwSignal<Option<Vista>>,
    pub pagina: RwSignal<Pagina>,
    pub fontes: ConfigFontes,
    pub grade: GradeConfig,
    pub lojas: RwSignal<Vec<Loja>>,
    pub loja_selecionada: RwSignal<Option<u32>>,
    /// Ligado sempre que alguma página resolveu dados a partir do dataset
    /// local; alimenta o aviso "dados de demonstração" no cabeçalho.
    pub exibindo_mock: RwSignal<bool>,
}

impl ContextoApp {
    pub fn new() -> Self {
        Self {
            vista: RwSignal::new(None),
            pagina: RwSignal::new(Pagina::Status),
            fontes: ConfigFontes::padrao(),
            grade: GRADE_ESTOQUE,
            lojas: RwSignal::new(vec![]),
            loja_selecionada: RwSignal::new(None),
            exibindo_mock: RwSignal::new(false),
        }
    }

    pub fn escolher_vista(&self, vista: Vista) {
        self.pagina.set(vista.pagina_inicial());
        self.vista.set(Some(vista));
    }

    pub fn sair_da_vista(&self) {
        self.vista.set(None);
    }

    pub fn abrir_pagina(&self, pagina: Pagina) {
        self.pagina.set(pagina);
    }

    /// Loja correspondente à seleção corrente, se já carregada.
    pub fn loja_atual(&self) -> Option<Loja> {
        let id = self.loja_selecionada.get()?;
        self.lojas.with(|lojas| lojas.iter().find(|l| l.id == id).cloned())
    }

    /// Regista a origem de um carregamento resolvido.
    pub fn registrar_origem(&self, origem: OrigemDados) {
        if origem == OrigemDados::Mock && !self.exibindo_mock.get_untracked() {
            log::warn!("a exibir dados de demonstração; o servidor não respondeu ou está desativado");
            self.exibindo_mock.set(true);
        }
    }
}

pub fn use_contexto() -> ContextoApp {
    use_context::<ContextoApp>().expect("ContextoApp fornecido na raiz da aplicação")
}
