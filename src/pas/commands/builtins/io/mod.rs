pub mod cat;
pub mod echo;
