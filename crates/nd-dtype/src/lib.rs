//! `nd-dtype` - Tensor element dtypes and interchange codecs for nd-runtime.
//!
//! This crate provides:
//! - A closed `DType` registry with stable integer ids and `Format`
//!   classification
//! - Element byte widths and floating/integer/boolean predicates
//! - Codecs for numpy dtype descriptors and safetensors dtype tokens
//! - Dtype inference from host typed buffers (`HostBuffer`)
//! - Zero-copy typed views over raw byte spans (`TypedView`)
//!
//! All operations are pure lookups over compile-time tables; conversions
//! with no defined mapping fail with a typed error rather than guessing.

pub mod buffer;
pub mod dtype;
pub mod error;
mod numpy;
mod safetensors;
pub mod view;

// Re-export primary types at the crate root for convenience.
pub use buffer::HostBuffer;
pub use dtype::{DType, Format};
pub use error::{DTypeError, Result};
pub use view::TypedView;

#[cfg(test)]
mod tests {
    use super::*;

    /// A dtype read from one representation converts cleanly to the others.
    #[test]
    fn test_cross_representation_chain() {
        let dtype = DType::from_numpy("|u1").unwrap();
        assert_eq!(dtype, DType::U8);
        assert_eq!(dtype.size_in_bytes(), Some(1));
        assert_eq!(dtype.to_safetensors().unwrap(), "U8");
        assert_eq!(DType::from_safetensors("U8").unwrap(), dtype);
    }

    #[test]
    fn test_buffer_to_safetensors_chain() {
        let bits = [0x3c00i16; 2];
        let dtype = DType::from_buffer(&HostBuffer::I16(&bits)).unwrap();
        assert_eq!(dtype, DType::F16);
        assert_eq!(dtype.to_safetensors().unwrap(), "F16");
    }
}
