//! The 26-letter alphabet and the per-character shift every cipher is built on.

pub const ALPHABET_SIZE: usize = 26;

/// Position of `c` in the alphabet, ignoring case. `None` for non-letters.
pub fn letter_index(c: char) -> Option<u8> {
  if c.is_ascii_alphabetic() {
    Some(c.to_ascii_lowercase() as u8 - b'a')
  } else {
    None
  }
}

/// Lowercase letter encoding `shift`, reduced modulo 26.
pub fn letter(shift: u8) -> char {
  (b'a' + shift % ALPHABET_SIZE as u8) as char
}

/// Rotate a letter by `amount`, keeping its case. Anything else passes through.
pub fn shift(c: char, amount: i64) -> char {
  let base = if c.is_ascii_lowercase() {
    b'a'
  } else if c.is_ascii_uppercase() {
    b'A'
  } else {
    return c;
  };

  let index = (c as u8 - base) as i64;
  let rotated = (index + amount).rem_euclid(ALPHABET_SIZE as i64) as u8;
  (base + rotated) as char
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_shift_preserves_case() {
    assert_eq!(shift('a', 3), 'd');
    assert_eq!(shift('A', 3), 'D');
    assert_eq!(shift('z', 1), 'a');
    assert_eq!(shift('Z', 1), 'A');
  }

  #[test]
  fn test_shift_negative_amounts() {
    assert_eq!(shift('a', -1), 'z');
    assert_eq!(shift('C', -3), 'Z');
    assert_eq!(shift('m', -26 * 4), 'm');
  }

  #[test]
  fn test_shift_large_amounts() {
    assert_eq!(shift('a', 27), 'b');
    assert_eq!(shift('y', 26 * 100 + 2), 'a');
  }

  #[test]
  fn test_shift_passthrough() {
    for c in ['1', ' ', '!', '\n', 'é', 'ß'] {
      assert_eq!(shift(c, 5), c);
    }
  }

  #[test]
  fn test_letter_index() {
    assert_eq!(letter_index('a'), Some(0));
    assert_eq!(letter_index('Z'), Some(25));
    assert_eq!(letter_index('5'), None);
  }

  #[test]
  fn test_letter() {
    assert_eq!(letter(0), 'a');
    assert_eq!(letter(25), 'z');
    assert_eq!(letter(26), 'a');
  }
}
