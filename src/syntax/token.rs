#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    Plus,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'src> {
    Word(&'src str),
    Number(&'src str),
    Op(Operator),
}
