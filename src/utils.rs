#[macro_export]
macro_rules! menu_funcs {
    ( $( ( $func_name:ident, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                pub fn $func_name(
                    session: &$crate::database::Session,
                    input: &mut dyn $crate::input::Prompt,
                    output: &$crate::protocol::Output,
                ) {
                    tracing::debug!(operation = stringify!($func_name), "start");
                    let response = match [<$func_name _impl>](session, input) {
                        Ok(response) => response,
                        Err(err) => {
                            tracing::warn!(operation = stringify!($func_name), "{:#}", err);
                            <$response>::err(format!("{:#}", err))
                        }
                    };
                    output.emit(&response);
                }
            }
        )+
    };
}

use crate::models::patients::{GENDER_FEMALE, GENDER_MALE};
use anyhow::{bail, Context};
use chrono::NaiveDate;

pub const DATE_FMT: &str = "%Y/%m/%d";

pub fn assert_gender_str(gender: &str) -> anyhow::Result<()> {
    if gender != GENDER_FEMALE && gender != GENDER_MALE {
        bail!("Gender must be F or M, got '{}'", gender)
    }
    Ok(())
}

pub fn parse_date_str<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveDate> {
    let s = s.as_ref().trim();
    NaiveDate::parse_from_str(s, DATE_FMT)
        .with_context(|| format!("Unparseable date '{}' (expected YYYY/MM/DD)", s))
}

pub fn format_date_str(date: &NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

pub fn parse_int_str<S: AsRef<str>>(s: S) -> anyhow::Result<i32> {
    let s = s.as_ref().trim();
    s.parse::<i32>()
        .with_context(|| format!("'{}' is not a valid integer", s))
}

/// Accepts `HH:MM-HH:MM` with a 24 hour clock.
pub fn assert_time_slot_str(slot: &str) -> anyhow::Result<()> {
    fn valid_clock(s: &str) -> bool {
        let mut parts = s.splitn(2, ':');
        match (parts.next(), parts.next()) {
            (Some(h), Some(m))
                if h.len() == 2
                    && m.len() == 2
                    && h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) =>
            {
                matches!((h.parse::<u8>(), m.parse::<u8>()), (Ok(h), Ok(m)) if h < 24 && m < 60)
            }
            _ => false,
        }
    }

    let mut ends = slot.splitn(2, '-');
    match (ends.next(), ends.next()) {
        (Some(start), Some(end)) if valid_clock(start) && valid_clock(end) => Ok(()),
        _ => bail!("Time slot must look like HH:MM-HH:MM, got '{}'", slot),
    }
}
