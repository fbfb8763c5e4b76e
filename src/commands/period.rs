use crate::{
    libs::{
        config::Config,
        messages::Message,
        period::{PayPeriod, PeriodType},
        view::View,
    },
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PeriodArgs {
    /// Period type; defaults to the configured one
    #[arg(short = 't', long = "type", value_enum)]
    period_type: Option<PeriodType>,

    /// Periods away from the current one, e.g. -1 for the previous period
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    offset: i64,
}

pub fn cmd(args: PeriodArgs) -> Result<()> {
    let config = Config::read()?;
    let period_type = args.period_type.unwrap_or(config.payroll().default_period);

    let period = PayPeriod::current(period_type, args.offset)?;

    msg_print!(Message::PeriodHeader(period.label()), true);
    View::period(&period)
}
