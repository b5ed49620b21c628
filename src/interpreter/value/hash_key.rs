use crate::interpreter::value::core::ValueKind;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// The key a hashable value is stored under in a `Value::Hash`.
///
/// Keys of different kinds may share a hash value but never compare equal,
/// since the kind is part of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashKey {
    /// Kind of the value the key was computed from.
    pub kind:  ValueKind,
    /// The 64-bit hash of the value.
    pub value: u64,
}

impl HashKey {
    /// Key of an integer: its own bit pattern.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn integer(value: i64) -> Self {
        Self { kind:  ValueKind::Integer,
               value: value as u64, }
    }

    /// Key of a boolean: `0` for false, `1` for true.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self { kind:  ValueKind::Boolean,
               value: value as u64, }
    }

    /// Key of a string: the 64-bit FNV-1a hash of its bytes.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::hash_key::HashKey;
    ///
    /// assert_eq!(HashKey::string("Hello world"), HashKey::string("Hello world"));
    /// assert_ne!(HashKey::string("Hello world"), HashKey::string("My name is johnny"));
    /// ```
    #[must_use]
    pub fn string(text: &str) -> Self {
        Self { kind:  ValueKind::String,
               value: fnv1a(text.as_bytes()), }
    }
}

/// 64-bit FNV-1a.
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &b| (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME))
}
