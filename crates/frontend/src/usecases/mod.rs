pub mod analise_imagem;
