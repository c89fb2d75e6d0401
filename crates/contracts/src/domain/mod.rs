pub mod conselho;
pub mod consumo;
pub mod estatistica;
pub mod loja;
pub mod produto;
pub mod tarefa;
