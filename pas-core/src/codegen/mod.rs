pub mod codegen;
pub mod instruction;

pub mod prelude {
    pub use super::{
        codegen::*,
        instruction::*
    };
}

#[cfg(test)]
mod tests;
