use thiserror::Error;

use crate::dtype::DType;

#[derive(Error, Debug)]
pub enum DTypeError {
    #[error("unsupported {repr}: {value}")]
    UnsupportedRepresentation { repr: &'static str, value: String },
    #[error("malformed buffer: {len} bytes is not a multiple of {width}-byte {dtype} elements")]
    MalformedBuffer {
        dtype: DType,
        width: usize,
        len: usize,
    },
    #[error("misaligned buffer: {dtype} elements require {align}-byte alignment")]
    MisalignedBuffer { dtype: DType, align: usize },
}

pub type Result<T> = std::result::Result<T, DTypeError>;
