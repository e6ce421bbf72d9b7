/// The designated wildcard symbol, matching any single symbol.
pub const WILDCARD: u8 = b'?';

/// Tests two symbols for equality under wildcard rules.
///
/// True iff the symbols are equal or either of them is [`WILDCARD`].
/// Symmetric; every symbol comparison in this crate goes through here.
#[inline]
pub fn symbols_match(a: u8, b: u8) -> bool {
    a == b || a == WILDCARD || b == WILDCARD
}
