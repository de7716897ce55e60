//! Tolerantes Parsen von Zahlen aus Formular-Texten.
//!
//! Akzeptiert das längste gültige numerische Präfix und ignoriert den Rest
//! (`"12abc"` → 12). Ohne numerisches Präfix ist das Ergebnis `NaN`.

/// Parst das führende numerische Präfix eines Strings als `f64`.
///
/// Regeln:
/// - führender Whitespace wird übersprungen
/// - optionales Vorzeichen `+`/`-`
/// - entweder `Infinity` oder `ziffern [. ziffern] [e|E [+|-] ziffern]`,
///   wobei die Mantisse mindestens eine Ziffer enthält (`.5` und `5.` sind gültig)
/// - ein Exponent ohne Ziffern wird ignoriert (`"1e"` → 1)
///
/// Alles ohne gültiges Präfix (leer, `"abc"`, `"-"`, `"."`, `"NaN"`) liefert `NaN`.
pub fn parse_float_prefix(input: &str) -> f64 {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if text[pos..].starts_with(INFINITY_LITERAL) {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[pos..]);
    let mut end = pos + int_digits;
    let mut mantissa_digits = int_digits;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = count_digits(&bytes[end + 1..]);
        mantissa_digits += frac_digits;
        // "5." ist gültig, ein einzelner Punkt nicht
        if mantissa_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_pos = end + 1;
        if matches!(bytes.get(exp_pos), Some(b'+') | Some(b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_pos + exp_digits;
        }
    }

    // Das Präfix besteht nur aus ASCII-Zeichen, die `f64::from_str` versteht.
    text[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Schreibt einen Wert so, dass `parse_float_prefix` ihn wieder liest.
///
/// Endliche Werte nutzen die `f64`-Darstellung (`-1.0` → `"-1"`),
/// Unendlich wird als `Infinity`/`-Infinity` geschrieben.
pub fn format_float(value: f64) -> String {
    if value == f64::INFINITY {
        INFINITY_LITERAL.to_string()
    } else if value == f64::NEG_INFINITY {
        format!("-{}", INFINITY_LITERAL)
    } else {
        value.to_string()
    }
}

const INFINITY_LITERAL: &str = "Infinity";

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
