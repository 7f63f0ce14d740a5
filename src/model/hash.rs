//! Portable 32-bit hash code.
//!
//! Matches the conventional `31 * h + f` accumulation used by the API's other
//! client libraries so a record hashes to the same value on every platform:
//! strings hash over their UTF-16 code units, integers contribute their value,
//! booleans contribute 1231 / 1237 and absent values contribute 0.

const PRIME: i32 = 31;
const SEED: i32 = 1;

/// Field value that can feed a [`HashCode`] accumulator.
pub trait FieldHash {
    fn field_hash(&self) -> i32;
}

impl FieldHash for str {
    fn field_hash(&self) -> i32 {
        self.encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(PRIME).wrapping_add(unit as i32))
    }
}

impl FieldHash for String {
    fn field_hash(&self) -> i32 {
        self.as_str().field_hash()
    }
}

impl FieldHash for i32 {
    fn field_hash(&self) -> i32 {
        *self
    }
}

impl FieldHash for bool {
    fn field_hash(&self) -> i32 {
        if *self { 1231 } else { 1237 }
    }
}

impl<T: FieldHash + ?Sized> FieldHash for Option<&T> {
    fn field_hash(&self) -> i32 {
        self.map_or(0, |v| v.field_hash())
    }
}

/// Running `h = 31 * h + f` accumulator seeded at 1, wrapping on overflow.
#[derive(Debug, Clone, Copy)]
pub struct HashCode(i32);

impl HashCode {
    pub fn new() -> Self {
        Self(SEED)
    }

    pub fn field<T: FieldHash + ?Sized>(self, value: Option<&T>) -> Self {
        Self(self.0.wrapping_mul(PRIME).wrapping_add(value.field_hash()))
    }

    pub fn finish(self) -> i32 {
        self.0
    }
}

impl Default for HashCode {
    fn default() -> Self {
        Self::new()
    }
}
