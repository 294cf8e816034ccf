//! Conversions between [`DType`] and safetensors dtype tokens.
//!
//! Tokens are fixed uppercase mnemonics (`"F32"`, `"BF16"`, `"BOOL"`, ...)
//! as they appear in a safetensors file header.

use crate::dtype::DType;
use crate::error::{DTypeError, Result};

impl DType {
    /// Parses a safetensors dtype token.
    ///
    /// # Errors
    /// Returns [`DTypeError::UnsupportedRepresentation`] for any token
    /// outside the fixed set.
    pub fn from_safetensors(dtype: &str) -> Result<DType> {
        match dtype {
            "F64" => Ok(DType::F64),
            "F32" => Ok(DType::F32),
            "F16" => Ok(DType::F16),
            "BF16" => Ok(DType::BF16),
            "I64" => Ok(DType::I64),
            "I32" => Ok(DType::I32),
            "I8" => Ok(DType::I8),
            "U8" => Ok(DType::U8),
            "BOOL" => Ok(DType::Bool),
            other => Err(DTypeError::UnsupportedRepresentation {
                repr: "safetensors dtype",
                value: other.to_string(),
            }),
        }
    }

    /// Renders this dtype as a safetensors token.
    ///
    /// # Errors
    /// Returns [`DTypeError::UnsupportedRepresentation`] for dtypes the
    /// format does not define (I16, U16, U32, U64, String, C64, Unknown).
    pub fn to_safetensors(&self) -> Result<&'static str> {
        match self {
            DType::F64 => Ok("F64"),
            DType::F32 => Ok("F32"),
            DType::F16 => Ok("F16"),
            DType::BF16 => Ok("BF16"),
            DType::I64 => Ok("I64"),
            DType::I32 => Ok("I32"),
            DType::I8 => Ok("I8"),
            DType::U8 => Ok("U8"),
            DType::Bool => Ok("BOOL"),
            other => Err(DTypeError::UnsupportedRepresentation {
                repr: "safetensors dtype",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::ALL_DTYPES;

    /// Dtypes the safetensors format defines.
    const REPRESENTABLE: [DType; 9] = [
        DType::F64,
        DType::F32,
        DType::F16,
        DType::BF16,
        DType::I64,
        DType::I32,
        DType::I8,
        DType::U8,
        DType::Bool,
    ];

    #[test]
    fn test_roundtrip() {
        for dtype in REPRESENTABLE {
            let token = dtype.to_safetensors().unwrap();
            assert_eq!(DType::from_safetensors(token).unwrap(), dtype);
        }
    }

    #[test]
    fn test_tokens() {
        assert_eq!(DType::F32.to_safetensors().unwrap(), "F32");
        assert_eq!(DType::BF16.to_safetensors().unwrap(), "BF16");
        assert_eq!(DType::Bool.to_safetensors().unwrap(), "BOOL");
        assert_eq!(DType::from_safetensors("BF16").unwrap(), DType::BF16);
        assert_eq!(DType::from_safetensors("U8").unwrap(), DType::U8);
    }

    #[test]
    fn test_unrepresentable_dtypes() {
        for dtype in ALL_DTYPES {
            if REPRESENTABLE.contains(&dtype) {
                continue;
            }
            let err = dtype.to_safetensors().unwrap_err();
            match err {
                DTypeError::UnsupportedRepresentation { value, .. } => {
                    assert_eq!(value, dtype.to_string());
                }
                other => panic!("unexpected error: {}", other),
            }
        }
    }

    #[test]
    fn test_from_safetensors_unknown_token() {
        for token in ["F128", "f32", "BOOLEAN", "", "Q4_0"] {
            assert!(DType::from_safetensors(token).is_err());
        }
    }
}
