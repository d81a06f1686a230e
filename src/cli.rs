use chrono::NaiveDate;

#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    /// Expressions to evaluate, e.g. `today + 3 days`. With none given,
    /// expressions are read from stdin until a blank line
    pub exprs: Vec<String>,

    /// Evaluate against this date (YYYY-MM-DD) instead of the current one
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,
}
