pub mod contexto;
pub mod header;
pub mod selecao_vista;
pub mod shell;
pub mod toast;

pub use shell::AppShell;
