//! Conversions between [`DType`] and numpy dtype descriptors.
//!
//! A descriptor is a three-character token: a byte-order marker (`<`, `>`,
//! or `=`, with `|` standing in for single-byte types), a kind letter
//! (`f`, `u`, `i`, `b`, `S`), and the element width in bytes.

use crate::dtype::DType;
use crate::error::{DTypeError, Result};

impl DType {
    /// Parses a numpy dtype descriptor such as `"<f4"` or `"|u1"`.
    ///
    /// Byte-order markers are accepted but not acted on: `"<f4"`, `">f4"`,
    /// and `"=f4"` all resolve to [`DType::F32`]. Byte swapping, where
    /// needed, is the reader's concern, not this table's.
    ///
    /// # Errors
    /// Returns [`DTypeError::UnsupportedRepresentation`] for any token
    /// outside the descriptor table.
    pub fn from_numpy(descr: &str) -> Result<DType> {
        match descr {
            "<f4" | ">f4" | "=f4" => Ok(DType::F32),
            "<f8" | ">f8" | "=f8" => Ok(DType::F64),
            "<f2" | ">f2" | "=f2" => Ok(DType::F16),
            "|u1" => Ok(DType::U8),
            "<u2" | ">u2" | "=u2" => Ok(DType::U16),
            "<u4" | ">u4" | "=u4" => Ok(DType::U32),
            "<u8" | ">u8" | "=u8" => Ok(DType::U64),
            "|i1" => Ok(DType::I8),
            "<i2" | ">i2" | "=i2" => Ok(DType::I16),
            "<i4" | ">i4" | "=i4" => Ok(DType::I32),
            "<i8" | ">i8" | "=i8" => Ok(DType::I64),
            "|b1" => Ok(DType::Bool),
            "|S1" => Ok(DType::String),
            other => Err(DTypeError::UnsupportedRepresentation {
                repr: "numpy dtype",
                value: other.to_string(),
            }),
        }
    }

    /// Renders this dtype as a numpy descriptor.
    ///
    /// Multi-byte dtypes carry the byte-order marker of the machine this
    /// code was compiled for, so two hosts of different endianness emit
    /// different descriptors for the same dtype. A consumer exchanging
    /// files across hosts must agree on an order out-of-band rather than
    /// trust the marker alone.
    ///
    /// # Errors
    /// Returns [`DTypeError::UnsupportedRepresentation`] for [`DType::BF16`],
    /// [`DType::C64`], and [`DType::Unknown`], which have no descriptor.
    pub fn to_numpy(&self) -> Result<String> {
        let order = if cfg!(target_endian = "big") { '>' } else { '<' };
        match self {
            DType::F32 => Ok(format!("{}f4", order)),
            DType::F64 => Ok(format!("{}f8", order)),
            DType::F16 => Ok(format!("{}f2", order)),
            DType::U8 => Ok("|u1".to_string()),
            DType::U16 => Ok(format!("{}u2", order)),
            DType::U32 => Ok(format!("{}u4", order)),
            DType::U64 => Ok(format!("{}u8", order)),
            DType::I8 => Ok("|i1".to_string()),
            DType::I16 => Ok(format!("{}i2", order)),
            DType::I32 => Ok(format!("{}i4", order)),
            DType::I64 => Ok(format!("{}i8", order)),
            DType::Bool => Ok("|b1".to_string()),
            DType::String => Ok("|S1".to_string()),
            DType::BF16 | DType::C64 | DType::Unknown => {
                Err(DTypeError::UnsupportedRepresentation {
                    repr: "numpy dtype",
                    value: self.to_string(),
                })
            }
        }
    }
}
