#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{Document as LopdfDocument, Object, ObjectId};
use rackmark::{InMemoryResourceProvider, LabelPipeline, LabelPipelineBuilder, LabelRow};
use std::collections::BTreeMap;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub const PAGE_WIDTH: f32 = 297.0 * MM;
pub const PAGE_HEIGHT: f32 = 210.0 * MM;
pub const MM: f32 = 72.0 / 25.4;

pub fn mm(v: f32) -> f32 {
    v * MM
}

pub fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.01
}

pub fn rows(codes: &[&str]) -> Vec<LabelRow> {
    codes.iter().map(|c| LabelRow::new(*c)).collect()
}

/// A pipeline whose font lookup always ends at Helvetica-Bold.
pub fn fallback_pipeline() -> LabelPipeline {
    LabelPipelineBuilder::new()
        .with_resource_provider(Arc::new(InMemoryResourceProvider::new()))
        .with_system_fonts(false)
        .build()
        .expect("default configuration is valid")
}

/// Bottom edge of each slot in PDF space, top slot first.
pub fn slot_bottoms() -> [f32; 2] {
    [PAGE_HEIGHT - mm(80.0) - mm(20.0), PAGE_HEIGHT - mm(160.0) - mm(40.0)]
}

pub fn margin_x() -> f32 {
    (PAGE_WIDTH - mm(260.0)) / 2.0
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    pub fn page_id(&self, page: u32) -> ObjectId {
        self.doc.get_pages()[&page]
    }

    pub fn operations(&self, page: u32) -> Vec<Operation> {
        let data = self.doc.get_page_content(self.page_id(page)).expect("page content");
        Content::decode(&data).expect("content stream").operations
    }

    /// Strings shown with `Tj`, decoded from WinAnsi.
    pub fn texts(&self, page: u32) -> Vec<String> {
        self.operations(page)
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| op.operands.first()?.as_str().ok().map(latin1))
            .collect()
    }

    /// `(x, y)` of every `Td`.
    pub fn text_origins(&self, page: u32) -> Vec<(f32, f32)> {
        self.operations(page)
            .iter()
            .filter(|op| op.operator == "Td")
            .map(|op| (float(&op.operands[0]), float(&op.operands[1])))
            .collect()
    }

    /// `[w, 0, 0, h, x, y]` of every image placement, in draw order.
    pub fn image_placements(&self, page: u32) -> Vec<[f32; 6]> {
        self.operations(page)
            .iter()
            .filter(|op| op.operator == "cm")
            .map(|op| {
                let mut m = [0.0; 6];
                for (slot, operand) in m.iter_mut().zip(&op.operands) {
                    *slot = float(operand);
                }
                m
            })
            .collect()
    }

    /// Names of the XObjects drawn with `Do`, in draw order.
    pub fn drawn_xobjects(&self, page: u32) -> Vec<String> {
        self.operations(page)
            .iter()
            .filter(|op| op.operator == "Do")
            .filter_map(|op| op.operands.first()?.as_name().ok().map(|n| String::from_utf8_lossy(n).into_owned()))
            .collect()
    }

    fn resources(&self, page: u32) -> &lopdf::Dictionary {
        let page = self.doc.get_dictionary(self.page_id(page)).expect("page dictionary");
        page.get(b"Resources")
            .and_then(Object::as_dict)
            .expect("inline resources")
    }

    pub fn xobjects(&self, page: u32) -> BTreeMap<String, ObjectId> {
        match self.resources(page).get(b"XObject").and_then(Object::as_dict) {
            Ok(dict) => dict
                .iter()
                .filter_map(|(name, obj)| {
                    let id = obj.as_reference().ok()?;
                    Some((String::from_utf8_lossy(name).into_owned(), id))
                })
                .collect(),
            Err(_) => BTreeMap::new(),
        }
    }

    pub fn font(&self, page: u32) -> &lopdf::Dictionary {
        let fonts = self
            .resources(page)
            .get(b"Font")
            .and_then(Object::as_dict)
            .expect("font resources");
        let id = fonts.get(b"F1").and_then(Object::as_reference).expect("F1 reference");
        self.doc.get_dictionary(id).expect("font dictionary")
    }

    pub fn base_font(&self, page: u32) -> String {
        let name = self.font(page).get(b"BaseFont").and_then(Object::as_name).expect("BaseFont");
        String::from_utf8_lossy(name).into_owned()
    }

    pub fn info(&self, key: &[u8]) -> Option<String> {
        let id = self.doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
        let info = self.doc.get_dictionary(id).ok()?;
        info.get(key).ok()?.as_str().ok().map(latin1)
    }
}

fn float(obj: &Object) -> f32 {
    obj.as_float().expect("numeric operand")
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $expected:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $expected,
            "Expected {} pages, found {}",
            $expected,
            $pdf.page_count()
        );
    };
}
