use crate::core::constants::{CODE_LENGTH, SEPARATOR, SEPARATOR_POSITIONS, symbol_position};
use crate::util::error::DigipinError;

/// Groups a raw symbol sequence into the canonical `XXX-XXX-XXXX` form.
///
/// Formatting only changes textual grouping, never the symbols themselves.
pub fn format_code(symbols: &str) -> String {
    let mut out = String::with_capacity(CODE_LENGTH + SEPARATOR_POSITIONS.len());
    for (i, symbol) in symbols.chars().enumerate() {
        if SEPARATOR_POSITIONS.contains(&i) {
            out.push(SEPARATOR);
        }
        out.push(symbol);
    }
    out
}

/// Strips separators and normalises a code to its raw upper-case symbols.
///
/// Separators are accepted at any position (only the total symbol count is
/// checked). Fails with [`DigipinError::MalformedCode`] when the stripped
/// length is not [`CODE_LENGTH`] or a character is outside the symbol grid.
pub fn parse_code(code: &str) -> Result<String, DigipinError> {
    let mut symbols = String::with_capacity(CODE_LENGTH);
    for c in code.chars() {
        if c == SEPARATOR {
            continue;
        }
        let symbol = c.to_ascii_uppercase();
        if symbol_position(symbol).is_none() {
            return Err(DigipinError::MalformedCode(format!(
                "invalid character '{c}'"
            )));
        }
        symbols.push(symbol);
    }

    if symbols.len() != CODE_LENGTH {
        return Err(DigipinError::MalformedCode(format!(
            "expected {} symbols, got {}",
            CODE_LENGTH,
            symbols.len()
        )));
    }

    Ok(symbols)
}
