use crate::error::PhraseError;

/// The twelve keys a phrase is shown in for practice, flat spellings
pub const DISPLAY_KEYS: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Every spelling accepted by [`semitone_offset`]
pub const PITCH_CLASSES: [&str; 21] = [
    "C", "C#", "Db", "D", "D#", "Eb", "E", "Fb", "E#", "F", "F#", "Gb", "G", "G#", "Ab", "A",
    "A#", "Bb", "B", "Cb", "B#",
];

/// Reduce a free-form key such as "F#m", "Bb" or "G mixolydian" to a pitch-class token.
///
/// Everything from the first lowercase `m` is dropped (minor suffix, and incidentally
/// any mode name starting with `m`), then the rest is trimmed. A token ending in `#` or
/// `b` keeps its first two characters, anything else only its first.
/// The result is not guaranteed to be a known pitch class.
pub fn normalize_key(key: &str) -> &str {
    let base = match key.find('m') {
        Some(pos) => &key[..pos],
        None => key,
    }
    .trim();

    let len = if base.ends_with('#') || base.ends_with('b') { 2 } else { 1 };
    take_chars(base, len)
}

fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((pos, _)) => &s[..pos],
        None => s,
    }
}

/// Semitones above C for a normalized key. Enharmonic spellings share an offset.
pub fn semitone_offset(normalized_key: &str) -> Option<u8> {
    match normalized_key {
        "C" | "B#" => Some(0),
        "C#" | "Db" => Some(1),
        "D" => Some(2),
        "D#" | "Eb" => Some(3),
        "E" | "Fb" => Some(4),
        "F" | "E#" => Some(5),
        "F#" | "Gb" => Some(6),
        "G" => Some(7),
        "G#" | "Ab" => Some(8),
        "A" => Some(9),
        "A#" | "Bb" => Some(10),
        "B" | "Cb" => Some(11),
        _ => None,
    }
}

/// Whether a free-form key normalizes to a known pitch class
pub fn is_known_key(key: &str) -> bool {
    semitone_offset(normalize_key(key)).is_some()
}

fn lookup(key: &str) -> Result<u8, PhraseError> {
    let normalized = normalize_key(key);
    semitone_offset(normalized).ok_or_else(|| PhraseError::UnknownKey {
        key: key.to_string(),
        normalized: normalized.to_string(),
    })
}

/// Semitones to move from `original_key` to `target_key`, in `-11..=11`.
/// No wraparound is applied: C to B is +11, not -1.
pub fn try_transpose_amount(original_key: &str, target_key: &str) -> Result<i8, PhraseError> {
    let original = lookup(original_key)?;
    let target = lookup(target_key)?;
    Ok(target as i8 - original as i8)
}

/// Like [`try_transpose_amount`], but an unrecognized key logs a warning and yields 0
/// so that a bad key only disables transposition.
///
/// # Example
/// ```rust
/// use phraselib::get_transpose_amount;
///
/// assert_eq!(get_transpose_amount("C", "G"), 7);
/// assert_eq!(get_transpose_amount("G", "C"), -7);
/// assert_eq!(get_transpose_amount("F#m", "Am"), 3);
/// assert_eq!(get_transpose_amount("Xyz", "C"), 0);
/// ```
pub fn get_transpose_amount(original_key: &str, target_key: &str) -> i8 {
    match try_transpose_amount(original_key, target_key) {
        Ok(semitones) => semitones,
        Err(e) => {
            log::warn!(
                "Could not determine semitone offset for keys: {} ({}) or {} ({}): {}",
                original_key,
                normalize_key(original_key),
                target_key,
                normalize_key(target_key),
                e
            );
            0
        }
    }
}
