/// sRGB-encoded color triple in [0, 1], as written in hex literals
pub type Rgb = [f32; 3];

/// Unpack a 0xRRGGBB literal
pub const fn hex_to_rgb(hex: u32) -> Rgb {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Quantize to an opaque RGBA8 pixel
pub fn to_rgba8(rgb: Rgb) -> [u8; 4] {
    let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    [q(rgb[0]), q(rgb[1]), q(rgb[2]), 255]
}
