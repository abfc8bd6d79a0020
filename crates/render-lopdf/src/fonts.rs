use crate::images::deflate;
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use rackmark_render_core::font::{FIRST_CHAR, LAST_CHAR};
use rackmark_render_core::{EmbeddedFace, LabelFont, RenderError};

/// Adds the document font and returns the id of its font dictionary.
pub(crate) fn add_font(doc: &mut Document, font: &LabelFont) -> Result<ObjectId, RenderError> {
    match font {
        LabelFont::Builtin => Ok(doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        })),
        LabelFont::Embedded(face) => add_embedded(doc, font, face),
    }
}

fn add_embedded(doc: &mut Document, font: &LabelFont, face: &EmbeddedFace) -> Result<ObjectId, RenderError> {
    let file_id = doc.add_object(Stream::new(
        dictionary! {
            "Length1" => face.data.len() as i64,
            "Filter" => "FlateDecode",
        },
        deflate(&face.data)?,
    ));

    let descriptor_id = doc.add_object(dictionary! {
        "Type" => "FontDescriptor",
        "FontName" => Object::Name(face.postscript_name.as_bytes().to_vec()),
        // Nonsymbolic: glyphs are addressed through WinAnsiEncoding.
        "Flags" => 32,
        "FontBBox" => face.bbox.iter().map(|&v| Object::Integer(i64::from(v))).collect::<Vec<_>>(),
        "ItalicAngle" => 0,
        "Ascent" => i64::from(face.ascent),
        "Descent" => i64::from(face.descent),
        "CapHeight" => i64::from(face.cap_height),
        "StemV" => 140,
        "FontFile2" => file_id,
    });

    let widths: Vec<Object> = (FIRST_CHAR..=LAST_CHAR)
        .map(|code| Object::Integer(i64::from(font.code_width(code))))
        .collect();

    Ok(doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "TrueType",
        "BaseFont" => Object::Name(face.postscript_name.as_bytes().to_vec()),
        "FirstChar" => i64::from(FIRST_CHAR),
        "LastChar" => i64::from(LAST_CHAR),
        "Widths" => widths,
        "FontDescriptor" => descriptor_id,
        "Encoding" => "WinAnsiEncoding",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_builtin_font_is_standard_type1() {
        let mut doc = Document::with_version("1.7");
        let id = add_font(&mut doc, &LabelFont::Builtin).unwrap();
        let dict = doc.get_object(id).unwrap().as_dict().unwrap();
        assert_eq!(dict.get(b"Subtype").unwrap().as_name().unwrap(), b"Type1");
        assert_eq!(dict.get(b"BaseFont").unwrap().as_name().unwrap(), b"Helvetica-Bold");
        assert_eq!(dict.get(b"Encoding").unwrap().as_name().unwrap(), b"WinAnsiEncoding");
        assert!(dict.get(b"FontDescriptor").is_err());
    }

    #[test]
    fn test_embedded_font_objects() {
        let data: Arc<Vec<u8>> = Arc::new(vec![7u8; 64]);
        let face = EmbeddedFace {
            postscript_name: "Test-Black".to_string(),
            data: data.clone(),
            widths: (FIRST_CHAR..=LAST_CHAR).map(|c| u16::from(c) * 2).collect(),
            ascent: 900,
            descent: -200,
            cap_height: 700,
            bbox: [-100, -200, 1000, 900],
        };
        let mut doc = Document::with_version("1.7");
        let id = add_font(&mut doc, &LabelFont::Embedded(face)).unwrap();

        let dict = doc.get_object(id).unwrap().as_dict().unwrap();
        assert_eq!(dict.get(b"Subtype").unwrap().as_name().unwrap(), b"TrueType");
        assert_eq!(dict.get(b"BaseFont").unwrap().as_name().unwrap(), b"Test-Black");
        assert_eq!(dict.get(b"FirstChar").unwrap().as_i64().unwrap(), 32);
        assert_eq!(dict.get(b"LastChar").unwrap().as_i64().unwrap(), 255);
        let widths = dict.get(b"Widths").unwrap().as_array().unwrap();
        assert_eq!(widths.len(), 224);
        assert_eq!(widths[b'A' as usize - 32].as_i64().unwrap(), 130);

        let descriptor_id = dict.get(b"FontDescriptor").unwrap().as_reference().unwrap();
        let descriptor = doc.get_object(descriptor_id).unwrap().as_dict().unwrap();
        assert_eq!(descriptor.get(b"Ascent").unwrap().as_i64().unwrap(), 900);
        let file_id = descriptor.get(b"FontFile2").unwrap().as_reference().unwrap();
        let file = doc.get_object(file_id).unwrap().as_stream().unwrap();
        assert_eq!(file.dict.get(b"Length1").unwrap().as_i64().unwrap(), 64);
        assert_eq!(file.decompressed_content().unwrap(), *data);
    }
}
