/// Format a packed ARGB sample for the readout line.
///
/// The short hex form elides alpha only when fully opaque; otherwise the
/// full ARGB hex is appended parenthetically.
pub fn format_color(argb: u32) -> String {
    let a = (argb >> 24) & 0xFF;
    let r = (argb >> 16) & 0xFF;
    let g = (argb >> 8) & 0xFF;
    let b = argb & 0xFF;
    if a == 0xFF {
        format!("RGBA({r},{g},{b},{a}) HEX #{r:02X}{g:02X}{b:02X}")
    } else {
        format!("RGBA({r},{g},{b},{a}) HEX #{r:02X}{g:02X}{b:02X} (#{a:02X}{r:02X}{g:02X}{b:02X})")
    }
}
