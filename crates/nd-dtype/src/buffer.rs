use crate::dtype::DType;
use crate::error::{DTypeError, Result};

/// A borrowed host-side buffer, tagged by the element type of its storage.
///
/// This is the set of typed buffers a host runtime hands to the tensor
/// layer when materializing array data. The tag describes the *storage*,
/// not necessarily the logical element type: see [`DType::from_buffer`].
#[derive(Debug, Clone, Copy)]
pub enum HostBuffer<'a> {
    /// 32-bit float storage.
    F32(&'a [f32]),
    /// 64-bit float storage.
    F64(&'a [f64]),
    /// 16-bit signed storage, carrying half-precision float bits.
    I16(&'a [i16]),
    /// 32-bit signed integer storage.
    I32(&'a [i32]),
    /// 64-bit signed integer storage.
    I64(&'a [i64]),
    /// Untyped byte storage.
    Bytes(&'a [u8]),
    /// 16-bit unsigned storage. No dtype maps to it.
    U16(&'a [u16]),
}

impl HostBuffer<'_> {
    /// Name of this buffer's storage tag, as used in error messages.
    pub fn tag_name(&self) -> &'static str {
        match self {
            HostBuffer::F32(_) => "f32",
            HostBuffer::F64(_) => "f64",
            HostBuffer::I16(_) => "i16",
            HostBuffer::I32(_) => "i32",
            HostBuffer::I64(_) => "i64",
            HostBuffer::Bytes(_) => "bytes",
            HostBuffer::U16(_) => "u16",
        }
    }

    /// Number of elements in the buffer.
    pub fn len(&self) -> usize {
        match self {
            HostBuffer::F32(s) => s.len(),
            HostBuffer::F64(s) => s.len(),
            HostBuffer::I16(s) => s.len(),
            HostBuffer::I32(s) => s.len(),
            HostBuffer::I64(s) => s.len(),
            HostBuffer::Bytes(s) => s.len(),
            HostBuffer::U16(s) => s.len(),
        }
    }

    /// Returns true if the buffer contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DType {
    /// Infers the dtype carried by a host buffer.
    ///
    /// Two mappings are intentional reinterpretations rather than identity:
    /// i16 storage maps to [`DType::F16`], because engines exchange
    /// half-precision values as raw bits in 16-bit integer storage — an
    /// i16 buffer never denotes true 16-bit integer data here. Untyped
    /// byte storage maps to [`DType::I8`].
    ///
    /// # Errors
    /// Returns [`DTypeError::UnsupportedRepresentation`] for a buffer tag
    /// with no dtype mapping, naming the tag.
    pub fn from_buffer(buffer: &HostBuffer<'_>) -> Result<DType> {
        match buffer {
            HostBuffer::F32(_) => Ok(DType::F32),
            HostBuffer::I16(_) => Ok(DType::F16),
            HostBuffer::F64(_) => Ok(DType::F64),
            HostBuffer::I32(_) => Ok(DType::I32),
            HostBuffer::I64(_) => Ok(DType::I64),
            HostBuffer::Bytes(_) => Ok(DType::I8),
            other => Err(DTypeError::UnsupportedRepresentation {
                repr: "buffer type",
                value: other.tag_name().to_string(),
            }),
        }
    }
}
