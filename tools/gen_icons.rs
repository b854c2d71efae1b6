//! Generates the placeholder icon set under `icons/`.
//!
//! Run with: cargo run --features std --bin gen_icons
//!
//! Writes the files a desktop bundle expects: icon.ico for Windows, the PNG
//! sizes, and an empty icon.icns so macOS tooling finds the path. Re-running
//! overwrites the same files with identical bytes.

use std::fs;

use zenicons::{EncodeRequest, IconFrame, PixelLayout, Unstoppable};

/// Fill color for every generated asset, full opacity.
const FILL: [u8; 4] = [37, 99, 235, 255];

fn main() {
    fs::create_dir_all("icons").expect("failed to create icons directory");

    let png_sizes = [
        ("32x32.png", 32),
        ("128x128.png", 128),
        ("128x128@2x.png", 256),
    ];
    for (name, size) in png_sizes {
        let pixels = solid(size, size);
        let data = EncodeRequest::png()
            .encode(&pixels, size, size, PixelLayout::Rgba8, Unstoppable)
            .expect("PNG encode failed");
        let path = format!("icons/{name}");
        fs::write(&path, &data).unwrap_or_else(|e| panic!("failed to write {path}: {e}"));
        println!("Created {name} ({} bytes)", data.len());
    }

    let pixels = solid(32, 32);
    let frame = IconFrame::new(&pixels, 32, 32, PixelLayout::Rgba8);
    let data = EncodeRequest::ico()
        .encode_frames(&[frame], Unstoppable)
        .expect("ICO encode failed");
    fs::write("icons/icon.ico", &data).expect("failed to write icons/icon.ico");
    println!("Created icon.ico ({} bytes)", data.len());

    // Empty ICNS container: magic plus total length. Bundlers only check
    // that the file exists.
    let mut icns = Vec::with_capacity(8);
    icns.extend_from_slice(b"icns");
    icns.extend_from_slice(&8u32.to_be_bytes());
    fs::write("icons/icon.icns", &icns).expect("failed to write icons/icon.icns");
    println!("Created icon.icns ({} bytes)", icns.len());
}

fn solid(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..width * height {
        pixels.extend_from_slice(&FILL);
    }
    pixels
}
