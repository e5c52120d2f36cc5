use crate::error::{Result, WordCrossError};

pub const ALPHABET : &[u8] = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".as_bytes();

pub fn get_idx(a: char) -> usize {
    (a.to_ascii_uppercase() as u8 - b'A') as usize
}

pub fn is_letter(a: char) -> bool {
    a.is_ascii_uppercase()
}

pub fn normalize(s: &str) -> String {
    s.to_ascii_uppercase().chars().filter(|&x| is_letter(x)).collect()
}

/// Accepts exactly one uppercase letter.
pub fn validate_letter(a: char) -> Result<char> {
    if is_letter(a) {
        Ok(a)
    } else {
        Err(WordCrossError::InvalidLetter(a.to_string()))
    }
}

/// Parses a single-letter string such as a line typed at the prompt.
/// The input is taken as-is; callers that accept lowercase uppercase it first.
pub fn parse_letter(input: &str) -> Result<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_letter(c) => Ok(c),
        _ => Err(WordCrossError::InvalidLetter(input.to_string())),
    }
}
