/// Convert a layout Y coordinate (top-left origin) to PDF user space (bottom-left origin).
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Encodes `text` as WinAnsi bytes.
///
/// Printable ASCII and U+00A0..=U+00FF share their code points with WinAnsi;
/// everything else becomes `?`.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            0x20..=0x7E | 0xA0..=0xFF => c as u8,
            _ => b'?',
        })
        .collect()
}
