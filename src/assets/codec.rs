use std::{io::Cursor, path::Path};

use anyhow::Context;

use crate::{
    foundation::{
        core::{Gray8, PixelRgba8},
        error::PixResult,
    },
    matrix::{Image, Matrix},
};

/// Decode any format `image` understands into straight (non-premultiplied) RGBA8.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_rgba8(bytes: &[u8]) -> PixResult<Image<PixelRgba8>> {
    let rgba = image::load_from_memory(bytes)
        .context("decode image from memory")?
        .to_rgba8();
    let (width, height) = rgba.dimensions();
    let pixels = rgba
        .into_raw()
        .chunks_exact(4)
        .map(|c| PixelRgba8::new(c[0], c[1], c[2], c[3]))
        .collect();
    Image::from_vec(width as usize, height as usize, pixels)
}

/// Decode into a single 8-bit luma channel.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_gray8(bytes: &[u8]) -> PixResult<Image<Gray8>> {
    let luma = image::load_from_memory(bytes)
        .context("decode image from memory")?
        .to_luma8();
    let (width, height) = luma.dimensions();
    Image::from_vec(width as usize, height as usize, luma.into_raw())
}

fn png_dims<S: Matrix + ?Sized>(src: &S) -> anyhow::Result<(u32, u32)> {
    let width = u32::try_from(src.width()).context("png width exceeds u32")?;
    let height = u32::try_from(src.height()).context("png height exceeds u32")?;
    Ok((width, height))
}

fn write_png(
    raw: Vec<u8>,
    width: u32,
    height: u32,
    color: image::ExtendedColorType,
) -> anyhow::Result<Vec<u8>> {
    let mut out = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut out),
        &raw,
        width,
        height,
        color,
        image::ImageFormat::Png,
    )
    .context("encode png")?;
    Ok(out)
}

/// Encode an RGBA matrix (any view or window) as PNG.
#[tracing::instrument(skip(src))]
pub fn encode_png_rgba8<S>(src: &S) -> PixResult<Vec<u8>>
where
    S: Matrix<Elem = PixelRgba8> + ?Sized,
{
    let (width, height) = png_dims(src)?;
    let mut raw = Vec::with_capacity(src.width() * src.height() * 4);
    for y in 0..src.height() {
        raw.extend(src.row(y).iter().flat_map(|p| p.to_array()));
    }
    Ok(write_png(raw, width, height, image::ExtendedColorType::Rgba8)?)
}

/// Encode a gray mask as an 8-bit luma PNG.
#[tracing::instrument(skip(src))]
pub fn encode_png_gray8<S>(src: &S) -> PixResult<Vec<u8>>
where
    S: Matrix<Elem = Gray8> + ?Sized,
{
    let (width, height) = png_dims(src)?;
    let mut raw = Vec::with_capacity(src.width() * src.height());
    for y in 0..src.height() {
        raw.extend_from_slice(src.row(y));
    }
    Ok(write_png(raw, width, height, image::ExtendedColorType::L8)?)
}

/// Read and decode an image file.
pub fn load_rgba8(path: &Path) -> PixResult<Image<PixelRgba8>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_rgba8(&bytes)
}

/// Encode as PNG and write to `path`, creating missing parent directories.
pub fn save_png_rgba8<S>(path: &Path, src: &S) -> PixResult<()>
where
    S: Matrix<Elem = PixelRgba8> + ?Sized,
{
    let png = encode_png_rgba8(src)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, png).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/codec.rs"]
mod tests;
