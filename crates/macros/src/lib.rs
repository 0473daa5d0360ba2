// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Timeframe project*
//!
//! This crate contains the Timeframe procedural macros
//!

extern crate proc_macro;

use chrono::NaiveDate;
use proc_macro::TokenStream;
use quote::quote;
use syn::{LitStr, parse_macro_input};

// TODO: these are copied from timeframe-core (so are not synced)
const MIN_YEAR: i64 = 0;
const MAX_YEAR: i64 = 9999;

/// Split `YYYY-MM-DD` into its year, month and day, checking each
fn parse_checked_date(text: &str) -> Result<(i64, i64, i64), String> {
    let pieces: Vec<&str> = text.trim().split('-').collect();
    let &[year, month, day] = pieces.as_slice() else {
        return Err(format!("`{text}` is not of the form YYYY-MM-DD"));
    };

    let mut values = [0_i64; 3];
    for (value, piece) in values.iter_mut().zip([year, month, day]) {
        if piece.is_empty() || !piece.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(format!("`{text}` is not of the form YYYY-MM-DD"));
        }
        *value = piece
            .parse::<i64>()
            .map_err(|_| format!("`{piece}` is too large"))?;
    }
    let [year, month, day] = values;

    if year < MIN_YEAR || year > MAX_YEAR {
        return Err(format!("Year must be between {MIN_YEAR} and {MAX_YEAR}"));
    }
    if !(1..=12).contains(&month) {
        return Err(String::from("Month must be between 1 and 12"));
    }
    if !(1..=31).contains(&day) {
        return Err(String::from("Day must be between 1 and 31"));
    }
    if NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32).is_none() {
        return Err(format!("Day {day} does not exist in {year:04}-{month:02}"));
    }
    Ok((year, month, day))
}

/// Create a `Date`, using `date!("YYYY-MM-DD")`, with compile time checking of
/// the value.  `Date` must be in scope.
#[proc_macro]
pub fn date(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitStr);

    let (year, month, day) = match parse_checked_date(&lit.value()) {
        Ok(parts) => parts,
        Err(message) => return syn::Error::new_spanned(lit, message).to_compile_error().into(),
    };

    let expanded: proc_macro2::TokenStream = quote! {
        Date::from_ymd(#year, #month, #day).unwrap()
    };
    expanded.into()
}
