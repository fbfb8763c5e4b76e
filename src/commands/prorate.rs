use crate::{
    libs::{
        config::Config,
        formatter::format_currency,
        messages::Message,
        proration::{prorate, PayFrequency},
        view::View,
    },
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ProrateArgs {
    /// Monthly amount
    amount: f64,

    /// Pay frequency; all frequencies are listed when omitted
    #[arg(short, long, value_enum)]
    frequency: Option<PayFrequency>,
}

pub fn cmd(args: ProrateArgs) -> Result<()> {
    let currency = Config::read()?.payroll().currency;

    match args.frequency {
        Some(frequency) => {
            msg_print!(Message::ProrationResult {
                monthly: format_currency(args.amount, &currency),
                frequency: frequency.label().to_lowercase(),
                amount: format_currency(prorate(args.amount, frequency), &currency),
            });
            Ok(())
        }
        None => {
            msg_print!(Message::ProrationHeader(format_currency(args.amount, &currency)), true);
            View::proration(args.amount, &currency)
        }
    }
}
