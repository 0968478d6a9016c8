use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse a `usize` constrained to the inclusive range [1, 512].
///
/// # Errors
/// Returns an error if the input string is not a valid number or is outside the range [1, 512].
pub fn parse_usize_1_to_512(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, Some(512))
}

/// `ext=tag` 形式の拡張子マッピングを分解する
///
/// A leading dot on the extension is dropped and the extension is lowercased,
/// so `.TPL=erlang` and `tpl=erlang` mean the same thing.
///
/// # Errors
/// Returns an error if there is no `=` or either side is empty.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (ext, tag) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ext=tag, got '{s}'"))?;
    let ext = ext.trim().trim_start_matches('.');
    let tag = tag.trim();
    if ext.is_empty() || tag.is_empty() {
        return Err(format!("expected ext=tag, got '{s}'"));
    }
    Ok((ext.to_ascii_lowercase(), tag.to_owned()))
}
