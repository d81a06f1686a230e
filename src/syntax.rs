mod expr;
mod lexer;
mod parser;
mod token;

pub(crate) use expr::Expression;
pub(crate) use parser::Parser;
pub(crate) use token::Operator;
