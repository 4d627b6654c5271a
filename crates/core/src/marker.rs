//! Two-valued status markers as stored in the sheet.
//!
//! The sheet encodes the `entregue` and `pago` columns as the literal
//! strings `SIM` / `NÃO`. Inside the system these are plain `bool`s; the
//! markers exist only at the row encode/decode edge.

/// Marker written for a `true` flag.
pub const YES: &str = "SIM";

/// Marker written for a `false` flag.
pub const NO: &str = "NÃO";

/// Encode a flag as its storage marker.
pub fn encode(flag: bool) -> &'static str {
    if flag {
        YES
    } else {
        NO
    }
}

/// Decode a stored marker.
///
/// Comparison is trimmed and case-insensitive; anything other than `SIM`
/// decodes to `false`, matching how the existing sheet data is read
/// (accent-less `NAO`, blanks, and unknown values all count as "no").
pub fn decode(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(YES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_true_is_sim() {
        assert_eq!(encode(true), "SIM");
    }

    #[test]
    fn encode_false_is_nao() {
        assert_eq!(encode(false), "NÃO");
    }

    #[test]
    fn decode_is_case_insensitive() {
        assert!(decode("SIM"));
        assert!(decode("sim"));
        assert!(decode("  Sim "));
    }

    #[test]
    fn decode_anything_else_is_false() {
        assert!(!decode("NÃO"));
        assert!(!decode("NAO"));
        assert!(!decode(""));
        assert!(!decode("yes"));
    }
}
