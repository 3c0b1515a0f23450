//! # Characteristic identifier canonicalization.
//!
//! BLE stacks hand the same identifier back in several spellings: 16-bit
//! short form (`"180D"`), 128-bit with dashes, 128-bit without. Registry
//! keys must be canonical or lookups silently miss, so the registration
//! path and the dispatch path both funnel through [`canonical_uuid`].
//!
//! # Example
//! ```rust
//! use gattlink::canonical_uuid;
//!
//! // Short forms are lowercased.
//! assert_eq!(canonical_uuid("180D"), "180d");
//!
//! // 128-bit identifiers get the standard 8-4-4-4-12 grouping,
//! // with or without dashes in the input.
//! assert_eq!(
//!     canonical_uuid("0000180D00001000800000805F9B34FB"),
//!     "0000180d-0000-1000-8000-00805f9b34fb",
//! );
//! assert_eq!(
//!     canonical_uuid("0000180d-0000-1000-8000-00805f9b34fb"),
//!     "0000180d-0000-1000-8000-00805f9b34fb",
//! );
//! ```

/// Canonical registry-key form of a characteristic identifier.
///
/// Lowercases the input and strips dashes, then reinserts them in the
/// standard 8-4-4-4-12 grouping when the identifier is a full 128-bit
/// value. Short-form identifiers stay bare lowercase hex.
///
/// Inputs that are not plain hex are returned lowercased and dash-stripped
/// as-is; the function never fails.
pub fn canonical_uuid(uuid: &str) -> String {
    let hex: String = uuid
        .chars()
        .filter(|c| *c != '-')
        .collect::<String>()
        .to_ascii_lowercase();

    if hex.len() == 32 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        format!(
            "{}-{}-{}-{}-{}",
            &hex[..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..]
        )
    } else {
        hex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_form_is_case_insensitive() {
        assert_eq!(canonical_uuid("2A37"), canonical_uuid("2a37"));
        assert_eq!(canonical_uuid("180D"), "180d");
    }

    #[test]
    fn test_dashed_and_undashed_full_forms_agree() {
        let dashed = "0000180D-0000-1000-8000-00805F9B34FB";
        let bare = "0000180d00001000800000805f9b34fb";
        assert_eq!(canonical_uuid(dashed), canonical_uuid(bare));
        assert_eq!(
            canonical_uuid(bare),
            "0000180d-0000-1000-8000-00805f9b34fb"
        );
    }

    #[test]
    fn test_canonical_form_is_idempotent() {
        let once = canonical_uuid("0000180d00001000800000805f9b34fb");
        assert_eq!(canonical_uuid(&once), once);

        let short = canonical_uuid("2a38");
        assert_eq!(canonical_uuid(&short), short);
    }

    #[test]
    fn test_non_hex_input_passes_through_normalized() {
        assert_eq!(canonical_uuid("Not-A-Uuid"), "notauuid");
    }

    #[test]
    fn test_32_chars_of_non_hex_stays_bare() {
        let s = "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz";
        assert_eq!(canonical_uuid(s), s);
    }
}
