/// ASCII conversion engine for asciitone.
///
/// Tone-maps RGB frames and quantizes them onto a glyph ramp.
pub mod quantize;
pub mod tone;
