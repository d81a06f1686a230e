use chrono::{Duration, NaiveDate};

use super::value::Value;
use crate::{
    error::{ErrorKind, PResult},
    syntax::{Expression, Operator, Parser},
};

pub(crate) struct Interpreter {
    today: NaiveDate,
}

impl Interpreter {
    // The reference date is injected once by the driver; evaluation itself
    // never reads the clock.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn eval(&self, src: &str) -> PResult<Option<Value>> {
        let mut parser = Parser::new(src);

        match parser.parse_expr()? {
            None => Ok(None),
            Some(expr) => {
                log::debug!("{expr:?}");
                Ok(Some(self.eval_expr(&expr)?))
            }
        }
    }

    fn eval_expr(&self, expr: &Expression) -> PResult<Value> {
        match expr {
            Expression::Word(word) => self.eval_word(word),
            Expression::Length { count, unit } => Ok(Value::Length(length_in_days(count, unit)?)),
            Expression::Binary { lhs, op, rhs } => {
                match (self.eval_expr(lhs)?, self.eval_expr(rhs)?) {
                    (Value::Date(date), Value::Length(days)) => shift_date(date, days),
                    _ => Err(ErrorKind::MalformedExpression(format!(
                        "`{}` expects a date on the left and a length on the right",
                        op.symbol()
                    ))),
                }
            }
        }
    }

    fn eval_word(&self, word: &str) -> PResult<Value> {
        match word {
            "today" => Ok(Value::Date(self.today)),
            "tomorrow" => shift_date(self.today, 1),
            "yesterday" => shift_date(self.today, -1),
            other => Err(ErrorKind::UnknownWord(other.to_string())),
        }
    }
}

fn length_in_days(count: &str, unit: &str) -> PResult<i64> {
    let days = count
        .parse::<i64>()
        .map_err(|_| ErrorKind::MalformedExpression(format!("Invalid number literal `{count}`")))?;

    match unit {
        "day" | "days" => Ok(days),
        "week" | "weeks" => days
            .checked_mul(7)
            .ok_or_else(|| ErrorKind::OutOfRange(format!("{count} weeks overflows a day count"))),
        other => Err(ErrorKind::UnknownUnit(other.to_string())),
    }
}

fn shift_date(date: NaiveDate, days: i64) -> PResult<Value> {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .map(Value::Date)
        .ok_or_else(|| {
            ErrorKind::OutOfRange(format!("{date} {days:+} days overflows the calendar"))
        })
}
