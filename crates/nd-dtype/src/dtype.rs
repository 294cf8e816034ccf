use std::fmt;

/// Element data types a tensor can hold.
///
/// Engine bindings exchange dtypes across process and language boundaries
/// by integer id, so every variant carries an explicitly assigned
/// discriminant (see [`DType::id`]). The list is append-only: new variants
/// take the next free value and existing values are never renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DType {
    /// 32-bit IEEE 754 floating point.
    F32 = 0,
    /// 64-bit IEEE 754 floating point.
    F64 = 1,
    /// 16-bit floating point (IEEE 754 half-precision, via the `half` crate).
    F16 = 2,
    /// 8-bit unsigned integer.
    U8 = 3,
    /// 32-bit signed integer.
    I32 = 4,
    /// 8-bit signed integer.
    I8 = 5,
    /// 64-bit signed integer.
    I64 = 6,
    /// Boolean, stored as one byte per element.
    Bool = 7,
    /// 64-bit complex number. Width counts one 32-bit component, not the pair.
    C64 = 8,
    /// Element type with no layout known to this library.
    Unknown = 9,
    /// Variable-length string.
    String = 10,
    /// 16-bit brain floating point (via the `half` crate).
    BF16 = 11,
    /// 64-bit unsigned integer.
    U64 = 12,
    /// 32-bit unsigned integer.
    U32 = 13,
    /// 16-bit unsigned integer.
    U16 = 14,
    /// 16-bit signed integer.
    I16 = 15,
}

/// Coarse classification of a [`DType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Real or complex floating point, including the 16-bit formats.
    Floating,
    /// Unsigned integers.
    Unsigned,
    /// Signed integers.
    Signed,
    /// One-byte booleans.
    Boolean,
    /// Variable-length text.
    Text,
    /// No known layout.
    Unknown,
}

impl DType {
    /// Returns the format classification of this dtype.
    pub fn format(&self) -> Format {
        match self {
            DType::F32 | DType::F64 | DType::F16 | DType::BF16 | DType::C64 => Format::Floating,
            DType::U8 | DType::U64 | DType::U32 | DType::U16 => Format::Unsigned,
            DType::I32 | DType::I8 | DType::I64 | DType::I16 => Format::Signed,
            DType::Bool => Format::Boolean,
            DType::String => Format::Text,
            DType::Unknown => Format::Unknown,
        }
    }

    /// Returns the size in bytes of a single element.
    ///
    /// `None` for [`DType::String`], whose elements have no fixed width.
    /// [`DType::Unknown`] reports `Some(0)`, and [`DType::C64`] reports the
    /// width of one of its two 32-bit components.
    pub fn size_in_bytes(&self) -> Option<usize> {
        match self {
            DType::U8 | DType::I8 | DType::Bool => Some(1),
            DType::F16 | DType::BF16 | DType::U16 | DType::I16 => Some(2),
            DType::F32 | DType::I32 | DType::U32 | DType::C64 => Some(4),
            DType::F64 | DType::I64 | DType::U64 => Some(8),
            DType::Unknown => Some(0),
            DType::String => None,
        }
    }

    /// Returns true if this dtype is a floating point format.
    pub fn is_floating(&self) -> bool {
        self.format() == Format::Floating
    }

    /// Returns true if this dtype is an integer format, signed or unsigned.
    pub fn is_integer(&self) -> bool {
        matches!(self.format(), Format::Signed | Format::Unsigned)
    }

    /// Returns true if this dtype is the boolean format.
    pub fn is_boolean(&self) -> bool {
        self.format() == Format::Boolean
    }

    /// Returns the stable integer id of this dtype.
    pub fn id(&self) -> u32 {
        *self as u32
    }

    /// Converts a stable integer id back to a `DType`.
    pub fn from_id(id: u32) -> Option<DType> {
        match id {
            0 => Some(DType::F32),
            1 => Some(DType::F64),
            2 => Some(DType::F16),
            3 => Some(DType::U8),
            4 => Some(DType::I32),
            5 => Some(DType::I8),
            6 => Some(DType::I64),
            7 => Some(DType::Bool),
            8 => Some(DType::C64),
            9 => Some(DType::Unknown),
            10 => Some(DType::String),
            11 => Some(DType::BF16),
            12 => Some(DType::U64),
            13 => Some(DType::U32),
            14 => Some(DType::U16),
            15 => Some(DType::I16),
            _ => None,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::F32 => write!(f, "f32"),
            DType::F64 => write!(f, "f64"),
            DType::F16 => write!(f, "f16"),
            DType::U8 => write!(f, "u8"),
            DType::I32 => write!(f, "i32"),
            DType::I8 => write!(f, "i8"),
            DType::I64 => write!(f, "i64"),
            DType::Bool => write!(f, "bool"),
            DType::C64 => write!(f, "c64"),
            DType::Unknown => write!(f, "unknown"),
            DType::String => write!(f, "string"),
            DType::BF16 => write!(f, "bf16"),
            DType::U64 => write!(f, "u64"),
            DType::U32 => write!(f, "u32"),
            DType::U16 => write!(f, "u16"),
            DType::I16 => write!(f, "i16"),
        }
    }
}

/// All dtype variants, in id order.
#[cfg(test)]
pub(crate) const ALL_DTYPES: [DType; 16] = [
    DType::F32,
    DType::F64,
    DType::F16,
    DType::U8,
    DType::I32,
    DType::I8,
    DType::I64,
    DType::Bool,
    DType::C64,
    DType::Unknown,
    DType::String,
    DType::BF16,
    DType::U64,
    DType::U32,
    DType::U16,
    DType::I16,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_in_bytes() {
        assert_eq!(DType::F32.size_in_bytes(), Some(4));
        assert_eq!(DType::F64.size_in_bytes(), Some(8));
        assert_eq!(DType::F16.size_in_bytes(), Some(2));
        assert_eq!(DType::U8.size_in_bytes(), Some(1));
        assert_eq!(DType::I32.size_in_bytes(), Some(4));
        assert_eq!(DType::I8.size_in_bytes(), Some(1));
        assert_eq!(DType::I64.size_in_bytes(), Some(8));
        assert_eq!(DType::Bool.size_in_bytes(), Some(1));
        assert_eq!(DType::C64.size_in_bytes(), Some(4));
        assert_eq!(DType::Unknown.size_in_bytes(), Some(0));
        assert_eq!(DType::String.size_in_bytes(), None);
        assert_eq!(DType::BF16.size_in_bytes(), Some(2));
        assert_eq!(DType::U64.size_in_bytes(), Some(8));
        assert_eq!(DType::U32.size_in_bytes(), Some(4));
        assert_eq!(DType::U16.size_in_bytes(), Some(2));
        assert_eq!(DType::I16.size_in_bytes(), Some(2));
    }

    #[test]
    fn test_format() {
        assert_eq!(DType::F32.format(), Format::Floating);
        assert_eq!(DType::BF16.format(), Format::Floating);
        assert_eq!(DType::C64.format(), Format::Floating);
        assert_eq!(DType::U8.format(), Format::Unsigned);
        assert_eq!(DType::I64.format(), Format::Signed);
        assert_eq!(DType::Bool.format(), Format::Boolean);
        assert_eq!(DType::String.format(), Format::Text);
        assert_eq!(DType::Unknown.format(), Format::Unknown);
    }

    #[test]
    fn test_predicates() {
        assert!(DType::F16.is_floating());
        assert!(!DType::F16.is_integer());
        assert!(DType::I32.is_integer());
        assert!(DType::U32.is_integer());
        assert!(!DType::U32.is_floating());
        assert!(DType::Bool.is_boolean());
        assert!(!DType::Bool.is_integer());
        assert!(!DType::String.is_floating());
        assert!(!DType::Unknown.is_integer());
    }

    #[test]
    fn test_ids_are_stable() {
        assert_eq!(DType::F32.id(), 0);
        assert_eq!(DType::F64.id(), 1);
        assert_eq!(DType::F16.id(), 2);
        assert_eq!(DType::U8.id(), 3);
        assert_eq!(DType::I32.id(), 4);
        assert_eq!(DType::I8.id(), 5);
        assert_eq!(DType::I64.id(), 6);
        assert_eq!(DType::Bool.id(), 7);
        assert_eq!(DType::C64.id(), 8);
        assert_eq!(DType::Unknown.id(), 9);
        assert_eq!(DType::String.id(), 10);
        assert_eq!(DType::BF16.id(), 11);
        assert_eq!(DType::U64.id(), 12);
        assert_eq!(DType::U32.id(), 13);
        assert_eq!(DType::U16.id(), 14);
        assert_eq!(DType::I16.id(), 15);
    }

    #[test]
    fn test_id_roundtrip() {
        for dtype in ALL_DTYPES {
            assert_eq!(DType::from_id(dtype.id()), Some(dtype));
        }
    }

    #[test]
    fn test_from_id_unknown() {
        assert!(DType::from_id(16).is_none());
        assert!(DType::from_id(999).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(DType::F32.to_string(), "f32");
        assert_eq!(DType::BF16.to_string(), "bf16");
        assert_eq!(DType::Bool.to_string(), "bool");
        assert_eq!(DType::Unknown.to_string(), "unknown");
        assert_eq!(DType::String.to_string(), "string");
    }
}
