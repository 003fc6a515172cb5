pub mod lexer;
pub mod parser;
pub mod environment;
pub mod codegen;
pub mod compiler;
pub mod utils;
