
//! Tokenizing and reordering of space-separated infix expressions.

pub mod operator;
pub mod shunting_yard;
pub mod source;
pub mod tokenizer;
