use std::mem;

use half::{bf16, f16};

use crate::dtype::DType;
use crate::error::{DTypeError, Result};

/// A read-only, element-typed view over a borrowed byte span.
///
/// Produced by [`DType::reinterpret`]; no bytes are copied. Element values
/// are read in the host's native byte order.
#[derive(Debug, Clone, Copy)]
pub enum TypedView<'a> {
    /// The span unchanged: one-byte dtypes, plus dtypes whose elements
    /// have no native Rust representation (i16, u16, string, c64, unknown).
    Bytes(&'a [u8]),
    /// Half-precision float elements.
    F16(&'a [f16]),
    /// Brain-float elements.
    BF16(&'a [bf16]),
    /// 32-bit float elements.
    F32(&'a [f32]),
    /// 64-bit float elements.
    F64(&'a [f64]),
    /// 32-bit signed integer elements.
    I32(&'a [i32]),
    /// 32-bit unsigned integer elements.
    U32(&'a [u32]),
    /// 64-bit signed integer elements.
    I64(&'a [i64]),
    /// 64-bit unsigned integer elements.
    U64(&'a [u64]),
}

impl TypedView<'_> {
    /// Number of elements in the view.
    pub fn len(&self) -> usize {
        match self {
            TypedView::Bytes(s) => s.len(),
            TypedView::F16(s) => s.len(),
            TypedView::BF16(s) => s.len(),
            TypedView::F32(s) => s.len(),
            TypedView::F64(s) => s.len(),
            TypedView::I32(s) => s.len(),
            TypedView::U32(s) => s.len(),
            TypedView::I64(s) => s.len(),
            TypedView::U64(s) => s.len(),
        }
    }

    /// Returns true if the view contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DType {
    /// Views a byte span as elements of this dtype without copying.
    ///
    /// Multi-byte float and 32/64-bit integer dtypes yield a slice of the
    /// corresponding element type. One-byte dtypes and dtypes with no
    /// native element representation (I16, U16, String, C64, Unknown)
    /// yield the span unchanged, leaving interpretation to the caller.
    ///
    /// # Errors
    /// Returns [`DTypeError::MalformedBuffer`] if the span length is not a
    /// multiple of the element width, and [`DTypeError::MisalignedBuffer`]
    /// if the span does not start on an element boundary.
    pub fn reinterpret<'a>(&self, bytes: &'a [u8]) -> Result<TypedView<'a>> {
        Ok(match self {
            DType::F16 => TypedView::F16(cast_view(DType::F16, bytes)?),
            DType::BF16 => TypedView::BF16(cast_view(DType::BF16, bytes)?),
            DType::F32 => TypedView::F32(cast_view(DType::F32, bytes)?),
            DType::F64 => TypedView::F64(cast_view(DType::F64, bytes)?),
            DType::I32 => TypedView::I32(cast_view(DType::I32, bytes)?),
            DType::U32 => TypedView::U32(cast_view(DType::U32, bytes)?),
            DType::I64 => TypedView::I64(cast_view(DType::I64, bytes)?),
            DType::U64 => TypedView::U64(cast_view(DType::U64, bytes)?),
            _ => TypedView::Bytes(bytes),
        })
    }
}

/// Casts a byte span to a typed slice, mapping cast failures to errors.
fn cast_view<T: bytemuck::Pod>(dtype: DType, bytes: &[u8]) -> Result<&[T]> {
    let width = mem::size_of::<T>();
    if bytes.len() % width != 0 {
        return Err(DTypeError::MalformedBuffer {
            dtype,
            width,
            len: bytes.len(),
        });
    }
    bytemuck::try_cast_slice(bytes).map_err(|_| DTypeError::MisalignedBuffer {
        dtype,
        align: mem::align_of::<T>(),
    })
}
