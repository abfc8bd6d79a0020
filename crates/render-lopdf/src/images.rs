use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use rackmark_render_core::{RasterImage, RenderError};
use std::io::Write;

pub(crate) fn deflate(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

fn gray_stream(width: u32, height: u32, samples: &[u8]) -> Result<Stream, RenderError> {
    Ok(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(width),
            "Height" => i64::from(height),
            "ColorSpace" => "DeviceGray",
            "BitsPerComponent" => 8,
            // Symbols are scaled up from one pixel per module; keep edges hard.
            "Interpolate" => false,
            "Filter" => "FlateDecode",
        },
        deflate(samples)?,
    ))
}

/// Adds `image` as an image XObject (plus its soft mask, for RGBA) and returns its id.
pub(crate) fn add_image_xobject(doc: &mut Document, image: &RasterImage) -> Result<ObjectId, RenderError> {
    match image {
        RasterImage::Gray(img) => {
            let stream = gray_stream(img.width(), img.height(), img.as_raw())?;
            Ok(doc.add_object(stream))
        }
        RasterImage::Rgba(img) => {
            let (width, height) = img.dimensions();
            let mut luma = Vec::with_capacity((width * height) as usize);
            let mut alpha = Vec::with_capacity((width * height) as usize);
            for px in img.pixels() {
                let [r, g, b, a] = px.0;
                let y = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
                luma.push(y as u8);
                alpha.push(a);
            }

            let mask_id = doc.add_object(gray_stream(width, height, &alpha)?);
            let mut stream = gray_stream(width, height, &luma)?;
            stream.dict.set("SMask", Object::Reference(mask_id));
            Ok(doc.add_object(stream))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};
    use std::sync::Arc;

    #[test]
    fn test_gray_image_xobject() {
        let mut doc = Document::with_version("1.7");
        let img = GrayImage::from_pixel(4, 3, Luma([255]));
        let id = add_image_xobject(&mut doc, &RasterImage::Gray(Arc::new(img))).unwrap();

        let stream = doc.get_object(id).unwrap().as_stream().unwrap();
        assert_eq!(stream.dict.get(b"Width").unwrap().as_i64().unwrap(), 4);
        assert_eq!(stream.dict.get(b"Height").unwrap().as_i64().unwrap(), 3);
        assert!(stream.dict.get(b"SMask").is_err());
        assert_eq!(stream.decompressed_content().unwrap(), vec![255u8; 12]);
    }

    #[test]
    fn test_rgba_image_carries_alpha_in_soft_mask() {
        let mut doc = Document::with_version("1.7");
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        let id = add_image_xobject(&mut doc, &RasterImage::Rgba(Arc::new(img))).unwrap();

        let stream = doc.get_object(id).unwrap().as_stream().unwrap();
        let mask_id = stream.dict.get(b"SMask").unwrap().as_reference().unwrap();
        let mask = doc.get_object(mask_id).unwrap().as_stream().unwrap();
        assert_eq!(mask.decompressed_content().unwrap(), vec![255, 0]);
        assert_eq!(stream.decompressed_content().unwrap(), vec![0, 0]);
    }
}
