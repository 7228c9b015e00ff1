/// Text rendering for asciitone.
///
/// Turns an `AsciiGrid` into a block of lines, with or without
/// true-color escape sequences.
pub mod ansi;
