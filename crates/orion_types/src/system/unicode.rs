//! Classification of entered code points.
//!
//! Text events deliver raw code points. The text field only needs to tell
//! control characters, newlines and backspace apart from printable input.

/// Unicode code point as delivered by text events.
pub type Key = u32;

/// Null, first C0 control character.
pub const NULL: Key = 0x00;
/// Backspace.
pub const BACKSPACE: Key = 0x08;
/// Horizontal tabulator.
pub const HORIZONTAL_TABULATOR: Key = 0x09;
/// Line feed.
pub const LINE_FEED: Key = 0x0A;
/// Vertical tabulator.
pub const VERTICAL_TABULATOR: Key = 0x0B;
/// Carriage return.
pub const CARRIAGE_RETURN: Key = 0x0D;
/// Information separator one, last C0 control character.
pub const INFO_SEPARATOR_ONE: Key = 0x1F;
/// Space, first printable character.
pub const SPACE: Key = 0x20;
/// Digit zero.
pub const NUMBER_0: Key = 0x30;
/// Digit nine.
pub const NUMBER_9: Key = 0x39;
/// Latin capital letter A.
pub const LETTER_A: Key = 0x41;
/// Latin small letter z.
pub const LETTER_Z: Key = 0x7A;
/// Delete, first control character after ASCII.
pub const DELETE: Key = 0x7F;
/// Application program command, last C1 control character.
pub const APC: Key = 0x9F;

/// Returns `true` for the Latin letters `A`-`Z` and `a`-`z`.
pub fn is_alphabetic(key: Key) -> bool {
	(LETTER_A..=LETTER_Z).contains(&key) && char::from_u32(key).is_some_and(|c| c.is_ascii_alphabetic())
}

/// Returns `true` for the digits `0`-`9`.
pub fn is_numeric(key: Key) -> bool {
	(NUMBER_0..=NUMBER_9).contains(&key)
}

/// Returns `true` unless `key` is a C0 or C1 control character or delete.
pub fn is_printable(key: Key) -> bool {
	!((NULL..=INFO_SEPARATOR_ONE).contains(&key) || (DELETE..=APC).contains(&key))
}

/// Returns `true` for line feed and carriage return.
pub fn is_newline(key: Key) -> bool {
	key == LINE_FEED || key == CARRIAGE_RETURN
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_alphabetic() {
		assert!(is_alphabetic('A' as Key));
		assert!(is_alphabetic('z' as Key));
		assert!(!is_alphabetic('[' as Key));
		assert!(!is_alphabetic('`' as Key));
		assert!(!is_alphabetic('7' as Key));
	}

	#[test]
	fn test_numeric() {
		assert!(is_numeric('0' as Key));
		assert!(is_numeric('9' as Key));
		assert!(!is_numeric('a' as Key));
	}

	#[test]
	fn test_printable() {
		assert!(is_printable(SPACE));
		assert!(is_printable('~' as Key));
		assert!(is_printable('ä' as Key));
		assert!(!is_printable(BACKSPACE));
		assert!(!is_printable(LINE_FEED));
		assert!(!is_printable(DELETE));
		assert!(!is_printable(0x85));
		assert!(is_printable(0xA0));
	}

	#[test]
	fn test_newline() {
		assert!(is_newline(LINE_FEED));
		assert!(is_newline(CARRIAGE_RETURN));
		assert!(!is_newline(VERTICAL_TABULATOR));
	}
}
