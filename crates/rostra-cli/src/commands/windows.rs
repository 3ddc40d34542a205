use rostra_core::audit::{compute_windows, suggest_fortnight_start};
use rostra_core::error::RosterError;

pub fn run(fortnight_start: Option<&str>, pay_date: Option<&str>) -> Result<(), RosterError> {
    let pay_date = pay_date.map(rostra_core::parse_iso_date).transpose()?;

    match fortnight_start {
        Some(start) => {
            let start = rostra_core::parse_iso_date(start)?;
            let periods = compute_windows(start, pay_date);
            println!("Current window:   {}", periods.current);
            println!("Previous window:  {}", periods.prev);
            println!("Inferred pay date: {}", periods.inferred_pay_date);
            if let Some(delta) = periods.pay_delta_days {
                println!("Pay date delta:    {delta:+} day(s) vs inferred");
            }
            Ok(())
        }
        None => match pay_date {
            Some(pay) => {
                println!("Suggested fortnight start: {}", suggest_fortnight_start(pay));
                Ok(())
            }
            None => Err(RosterError::MissingInput(
                "--fortnight-start and/or --pay-date".into(),
            )),
        },
    }
}
