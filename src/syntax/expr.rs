use super::token::Operator;

#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum Expression<'src> {
    Word(&'src str),
    Length {
        // Kept as lexed text; parsed to an integer at evaluation time.
        count: &'src str,
        unit: &'src str,
    },
    Binary {
        lhs: Box<Expression<'src>>,
        op: Operator,
        rhs: Box<Expression<'src>>,
    },
}
