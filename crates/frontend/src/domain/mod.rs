pub mod conselhos;
pub mod estatisticas;
pub mod estoque;
pub mod lojas;
pub mod tarefas;
