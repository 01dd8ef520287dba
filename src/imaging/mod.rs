/// Image decoding module
///
/// This module handles:
/// - Decoding browsed images
/// - Scaling them to the preview area
/// - Re-encoding the first preview as PNG bytes

pub mod preview;
