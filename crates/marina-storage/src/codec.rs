//! Line codec for boat records.
//!
//! # Line Format
//!
//! ```text
//! [name],[length],[kind],[payload],[amount_owed]
//! ```
//!
//! - `length` is written with zero decimal places, so lengths persist as whole feet.
//! - `kind` is one of `slip`, `land`, `trailer`, `storage` (lowercase on write,
//!   any case on read, plus the legacy `trailor` spelling).
//! - `payload` is the slip number, bay letter, trailer tag or storage space.
//! - `amount_owed` is written with exactly two decimal places.
//!
//! Numbers are read leniently: the longest numeric prefix is used and a field
//! with no numeric prefix reads as zero. Fields after the fifth are ignored.

use std::fmt::{self, Display};

use marina_types::{Boat, Location, LocationKind, MAX_NAME_LEN, MAX_TAG_LEN};

/// Field separator.
pub const DELIMITER: char = ',';

/// The five logical fields of a record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Length,
    LocationKind,
    LocationPayload,
    AmountOwed,
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Length => "length",
            Field::LocationKind => "location type",
            Field::LocationPayload => "location",
            Field::AmountOwed => "amount owed",
        })
    }
}

/// Reasons a line cannot be decoded into a boat.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A required field is absent or empty.
    #[error("invalid boat data format: missing {field}")]
    MissingField { field: Field },

    /// The location keyword is not one of the known kinds.
    #[error("invalid location type: {keyword:?}")]
    UnknownLocationKind { keyword: String },

    /// The line is not valid UTF-8.
    #[error("invalid boat data format: line is not valid UTF-8")]
    InvalidUtf8,
}

/// Decodes one record line into a [`Boat`].
///
/// A trailing line terminator (`\n` or `\r\n`) is ignored. Names longer than
/// [`MAX_NAME_LEN`] and tags longer than [`MAX_TAG_LEN`] characters are
/// truncated.
///
/// # Errors
///
/// - [`DecodeError::MissingField`] if fewer than five non-empty fields are present
/// - [`DecodeError::UnknownLocationKind`] if the kind keyword is not recognized
///
/// # Examples
///
/// ```
/// # use marina_storage::decode_line;
/// # use marina_types::Location;
/// let boat = decode_line("Alice,40,slip,12,0.00").unwrap();
/// assert_eq!(boat.name, "Alice");
/// assert_eq!(boat.location, Location::Slip { number: 12 });
/// ```
pub fn decode_line(line: &str) -> Result<Boat, DecodeError> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let mut fields = line.split(DELIMITER);

    let name = next_field(&mut fields, Field::Name)?;
    let length = parse_lenient_f64(next_field(&mut fields, Field::Length)?);

    let keyword = next_field(&mut fields, Field::LocationKind)?;
    let kind = LocationKind::parse(keyword).ok_or_else(|| DecodeError::UnknownLocationKind {
        keyword: keyword.to_string(),
    })?;

    let payload = next_field(&mut fields, Field::LocationPayload)?;
    let location = match kind {
        LocationKind::Slip => Location::Slip {
            number: parse_lenient_i32(payload),
        },
        LocationKind::Land => Location::Land {
            // next_field never yields an empty string
            bay: payload.chars().next().unwrap_or_default(),
        },
        LocationKind::Trailer => Location::Trailer {
            tag: truncate_chars(payload, MAX_TAG_LEN).to_string(),
        },
        LocationKind::Storage => Location::Storage {
            space: parse_lenient_i32(payload),
        },
    };

    let amount_owed = parse_lenient_f64(next_field(&mut fields, Field::AmountOwed)?);

    Ok(Boat::new(
        truncate_chars(name, MAX_NAME_LEN),
        length,
        location,
        amount_owed,
    ))
}

/// Encodes a [`Boat`] as one record line, without a terminator.
///
/// # Examples
///
/// ```
/// # use marina_storage::encode_line;
/// # use marina_types::{Boat, Location};
/// let boat = Boat::new("Bob", 20.0, Location::Land { bay: 'C' }, 12.5);
/// assert_eq!(encode_line(&boat), "Bob,20,land,C,12.50");
/// ```
pub fn encode_line(boat: &Boat) -> String {
    format!(
        "{name}{d}{length:.0}{d}{kind}{d}{payload}{d}{owed:.2}",
        name = boat.name,
        length = boat.length,
        kind = boat.kind(),
        payload = boat.location,
        owed = boat.amount_owed,
        d = DELIMITER,
    )
}

/// Parses a decimal number the way C's `atof` does.
///
/// Leading whitespace is skipped, then the longest prefix that forms a
/// number is used. Text with no numeric prefix yields `0.0`.
///
/// # Examples
///
/// ```
/// # use marina_storage::parse_lenient_f64;
/// assert_eq!(parse_lenient_f64(" 200.00\n"), 200.0);
/// assert_eq!(parse_lenient_f64("40ft"), 40.0);
/// assert_eq!(parse_lenient_f64("abc"), 0.0);
/// ```
pub fn parse_lenient_f64(text: &str) -> f64 {
    let text = text.trim_start();
    let end = numeric_prefix_len(text, true);
    text[..end].parse().unwrap_or(0.0)
}

/// Parses an integer the way C's `atoi` does.
///
/// Leading whitespace is skipped, then an optional sign and digits are read.
/// Text with no numeric prefix, or a value that overflows `i32`, yields `0`.
pub fn parse_lenient_i32(text: &str) -> i32 {
    let text = text.trim_start();
    let end = numeric_prefix_len(text, false);
    text[..end].parse().unwrap_or(0)
}

/// Returns the byte length of the numeric prefix of `text`, or 0 if none.
fn numeric_prefix_len(text: &str, allow_fraction: bool) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;
    let mut mantissa_digits = int_digits;

    if allow_fraction {
        if bytes.get(end) == Some(&b'.') {
            let frac_digits = digits_from(end + 1);
            if int_digits + frac_digits > 0 {
                end += 1 + frac_digits;
                mantissa_digits += frac_digits;
            }
        }

        if mantissa_digits > 0 && matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let exp_digits = digits_from(exp);
            if exp_digits > 0 {
                end = exp + exp_digits;
            }
        }
    }

    if mantissa_digits == 0 { 0 } else { end }
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    field: Field,
) -> Result<&'a str, DecodeError> {
    fields
        .next()
        .filter(|value| !value.is_empty())
        .ok_or(DecodeError::MissingField { field })
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
