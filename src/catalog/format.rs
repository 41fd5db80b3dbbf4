use rust_decimal::{Decimal, RoundingStrategy};
use time::{Date, Month};

const NBSP: char = '\u{a0}';

/// Units at which the detail page's stock bar is full.
const STOCK_BAR_FULL: u32 = 50;

/// Formats a CAD amount the way fr-CA locales do: `1 234,50 $`.
pub fn format_price(price: Decimal) -> String {
    let mut rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    let raw = rounded.abs().to_string();
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(NBSP);
        }
        grouped.push(ch);
    }

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}{grouped},{frac_part}{NBSP}$")
}

fn month_fr(month: Month) -> &'static str {
    match month {
        Month::January => "janvier",
        Month::February => "février",
        Month::March => "mars",
        Month::April => "avril",
        Month::May => "mai",
        Month::June => "juin",
        Month::July => "juillet",
        Month::August => "août",
        Month::September => "septembre",
        Month::October => "octobre",
        Month::November => "novembre",
        Month::December => "décembre",
    }
}

/// Long French date, e.g. `15 janvier 2024`.
pub fn format_date(date: Option<Date>) -> String {
    match date {
        Some(d) => format!("{} {} {}", d.day(), month_fr(d.month()), d.year()),
        None => "Date inconnue".to_string(),
    }
}

/// Fill ratio of the stock bar, capped at 100.
pub fn stock_fill_percent(stock: u32) -> u8 {
    let pct = stock.saturating_mul(100) / STOCK_BAR_FULL;
    pct.min(100) as u8
}
