use crate::error::ColorFormatError;

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes.
///
/// Only the six-digit form is recognized. Before parsing, leading and trailing
/// white space is trimmed. Hexadecimal digits may use either case.
pub(crate) fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let s = s.trim();
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    } else if s.len() != 7 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(1 + 2 * index..3 + 2 * index)
            .ok_or(ColorFormatError::UnexpectedCharacters)?;

        // from_str_radix accepts a leading plus sign, which has no place here.
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorFormatError::MalformedHex);
        }
        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
    }

    let c1 = parse_coordinate(s, 0)?;
    let c2 = parse_coordinate(s, 1)?;
    let c3 = parse_coordinate(s, 2)?;
    Ok([c1, c2, c3])
}

/// Format the 24-bit coordinates in hashed hexadecimal format.
///
/// This function always writes two digits per coordinate, using lowercase
/// digits unless `uppercase` is set.
pub(crate) fn format_hashed(
    coordinates: &[u8; 3],
    uppercase: bool,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let [r, g, b] = *coordinates;
    if uppercase {
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    } else {
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

// ====================================================================================================================
