use crate::{
    error::{ErrorKind, PResult},
    syntax::{lexer::Lexer, token::Token, Expression},
};

pub(crate) struct Parser<'src> {
    lexer: Lexer<'src>,
}

impl<'src> Parser<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            lexer: Lexer::new(src),
        }
    }

    pub fn parse_expr(&mut self) -> PResult<Option<Box<Expression<'src>>>> {
        self.parse_rest(None)
    }

    // The accumulator holds the most recent bare word; an operator takes it as
    // its left operand, end of input returns it as the whole expression.
    fn parse_rest(
        &mut self,
        so_far: Option<Box<Expression<'src>>>,
    ) -> PResult<Option<Box<Expression<'src>>>> {
        match self.lexer.next() {
            None => Ok(so_far),
            Some(Token::Word(word)) => self.parse_rest(Some(Box::new(Expression::Word(word)))),
            Some(Token::Number(count)) => {
                let unit = self.parse_unit()?;

                // A length ends the grammar; nothing may follow its unit.
                match self.lexer.next() {
                    None => Ok(Some(Box::new(Expression::Length { count, unit }))),
                    Some(other) => Err(ErrorKind::MalformedExpression(format!(
                        "Expected end of input, found {other:?}"
                    ))),
                }
            }
            Some(Token::Op(op)) => {
                let lhs = match so_far {
                    Some(expr) => expr,
                    None => {
                        return Err(ErrorKind::MalformedExpression(format!(
                            "Expected expression, found `{}`",
                            op.symbol()
                        )))
                    }
                };
                let rhs = match self.parse_rest(None)? {
                    Some(expr) => expr,
                    None => {
                        return Err(ErrorKind::MalformedExpression(
                            "Expected expression, found EOF".into(),
                        ))
                    }
                };

                Ok(Some(Box::new(Expression::Binary { lhs, op, rhs })))
            }
        }
    }

    fn parse_unit(&mut self) -> PResult<&'src str> {
        match self.lexer.next() {
            None => Err(ErrorKind::MalformedExpression(
                "Expected unit, found EOF".into(),
            )),
            Some(Token::Word(unit)) => Ok(unit),
            Some(other) => Err(ErrorKind::MalformedExpression(format!(
                "Expected unit, found {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Parser;
    use crate::{
        error::ErrorKind,
        syntax::{expr::Expression, token::Operator},
    };

    #[test]
    fn parse_word() {
        let mut parser = Parser::new("today");
        let expr = parser.parse_expr().unwrap().unwrap();
        let expected = Box::new(Expression::Word("today"));

        assert_eq!(expr, expected);
    }

    #[test]
    fn parse_length() {
        let mut parser = Parser::new("2 days");
        let expr = parser.parse_expr().unwrap().unwrap();
        let expected = Box::new(Expression::Length {
            count: "2",
            unit: "days",
        });

        assert_eq!(expr, expected);
    }

    #[test]
    fn parse_binary_expr() {
        let mut parser = Parser::new("today + 3 days");
        let expr = parser.parse_expr().unwrap().unwrap();
        let expected = Box::new(Expression::Binary {
            lhs: Box::new(Expression::Word("today")),
            op: Operator::Plus,
            rhs: Box::new(Expression::Length {
                count: "3",
                unit: "days",
            }),
        });

        assert_eq!(expr, expected);
    }

    #[test]
    fn last_word_before_operator_wins() {
        let mut parser = Parser::new("today tomorrow + 1 day");
        let expr = parser.parse_expr().unwrap().unwrap();
        let expected = Box::new(Expression::Binary {
            lhs: Box::new(Expression::Word("tomorrow")),
            op: Operator::Plus,
            rhs: Box::new(Expression::Length {
                count: "1",
                unit: "day",
            }),
        });

        assert_eq!(expr, expected);
    }

    #[test]
    fn unknown_words_parse() {
        let mut parser = Parser::new("banana");
        let expr = parser.parse_expr().unwrap().unwrap();

        assert_eq!(expr, Box::new(Expression::Word("banana")));
    }

    #[test]
    fn parse_empty() {
        let mut parser = Parser::new("");

        assert_eq!(parser.parse_expr().unwrap(), None);
    }

    #[test]
    fn dangling_number() {
        let mut parser = Parser::new("3");
        let err = parser.parse_expr().unwrap_err();

        assert_eq!(
            err,
            ErrorKind::MalformedExpression("Expected unit, found EOF".into())
        );
    }

    #[test]
    fn number_followed_by_operator() {
        let mut parser = Parser::new("3 + 1 day");
        let err = parser.parse_expr().unwrap_err();

        assert_eq!(
            err,
            ErrorKind::MalformedExpression("Expected unit, found Op(Plus)".into())
        );
    }

    #[test]
    fn leading_operator() {
        let mut parser = Parser::new("+ 3 days");
        let err = parser.parse_expr().unwrap_err();

        assert_eq!(
            err,
            ErrorKind::MalformedExpression("Expected expression, found `+`".into())
        );
    }

    #[test]
    fn trailing_operator() {
        let mut parser = Parser::new("today +");
        let err = parser.parse_expr().unwrap_err();

        assert_eq!(
            err,
            ErrorKind::MalformedExpression("Expected expression, found EOF".into())
        );
    }

    #[test]
    fn tokens_after_length() {
        let mut parser = Parser::new("2 days 3 weeks");
        let err = parser.parse_expr().unwrap_err();

        assert_eq!(
            err,
            ErrorKind::MalformedExpression("Expected end of input, found Number(\"3\")".into())
        );
    }
}
