/// Image loading and resampling for asciitone.

pub mod image;
pub mod resize;
