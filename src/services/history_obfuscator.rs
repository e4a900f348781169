//! History obfuscation for MyBrowser.
//!
//! Every character's code point is XORed with a fixed key. This keeps casual
//! readers from skimming the history file and nothing more: the key is a
//! single constant byte, there is no integrity check, and anyone with this
//! source (or a few minutes) can reverse it. It is not encryption.

/// Fixed XOR key applied to each code point.
pub const OBFUSCATION_KEY: u32 = 0x55;

/// XORs each character's code point with [`OBFUSCATION_KEY`].
pub fn encode(text: &str) -> String {
    text.chars().map(xor_char).collect()
}

/// Inverse of [`encode`]. The transform is its own inverse.
pub fn decode(text: &str) -> String {
    encode(text)
}

/// The key only flips bits in the low byte, and the surrogate block starts and
/// ends on a 256 boundary, so a valid `char` always maps to a valid `char`.
fn xor_char(c: char) -> char {
    char::from_u32(c as u32 ^ OBFUSCATION_KEY).unwrap_or(c)
}
