pub mod maths_utils;
pub mod text_utils;

pub use text_utils::to_half_width;
