//! Variant and multipart document assemblers.

mod multipart;
mod variant;

pub use multipart::{AxisFilter, MultipartBuilder};
pub use variant::VariantBuilder;
