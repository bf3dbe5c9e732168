pub mod donut;
mod format;
mod time_utils;

pub use format::{
    change_arrow, format_locale_number, format_market_cap, format_price, format_signed,
    format_signed_pct, format_thousands, format_usd, truncate_chars,
};
pub use time_utils::{
    LooseTime, TimeUtils, format_clock, format_event_date, format_local_datetime, parse_loose_time,
};
