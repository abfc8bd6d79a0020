use crate::content::{PageContext, XObjectRef, FONT_RESOURCE};
use crate::fonts::add_font;
use crate::images::{add_image_xobject, deflate};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use rackmark_layout::PositionedElement;
use rackmark_render_core::{DocumentRenderer, LabelFont, RasterImage, RenderError};
use rackmark_types::Size;
use std::collections::HashMap;

const PRODUCER: &str = concat!("rackmark ", env!("CARGO_PKG_VERSION"));

/// An in-memory PDF renderer using the `lopdf` library.
/// It builds the document's object graph and serializes it in `finish`.
pub struct LopdfRenderer {
    document: Document,
    pages_id: ObjectId,
    font: LabelFont,
    font_id: Option<ObjectId>,
    title: String,
    page_size: Option<Size>,
    page_ids: Vec<ObjectId>,
    images: HashMap<String, XObjectRef>,
    current_page: Option<PageContext>,
}

impl LopdfRenderer {
    pub fn new(font: LabelFont, title: impl Into<String>) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        Self {
            document,
            pages_id,
            font,
            font_id: None,
            title: title.into(),
            page_size: None,
            page_ids: Vec::new(),
            images: HashMap::new(),
            current_page: None,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn started(&self) -> Result<(Size, ObjectId), RenderError> {
        match (self.page_size, self.font_id) {
            (Some(size), Some(font_id)) => Ok((size, font_id)),
            _ => Err(RenderError::State("document not started".into())),
        }
    }
}

impl DocumentRenderer for LopdfRenderer {
    type Output = Vec<u8>;

    fn begin_document(&mut self, page_size: Size) -> Result<(), RenderError> {
        if self.page_size.is_some() {
            return Err(RenderError::State("document already started".into()));
        }
        self.font_id = Some(add_font(&mut self.document, &self.font)?);
        self.page_size = Some(page_size);
        log::debug!(
            "Started PDF document {:.2}x{:.2}pt with font '{}'",
            page_size.width,
            page_size.height,
            self.font.base_font()
        );
        Ok(())
    }

    fn add_image(&mut self, src: &str, image: RasterImage) -> Result<(), RenderError> {
        self.started()?;
        if self.images.contains_key(src) {
            return Ok(());
        }
        let id = add_image_xobject(&mut self.document, &image)?;
        let name = format!("Im{}", self.images.len() + 1);
        log::trace!("Image '{}' -> /{} ({:?})", src, name, image.dimensions());
        self.images.insert(src.to_string(), XObjectRef { name, id });
        Ok(())
    }

    fn has_image(&self, src: &str) -> bool {
        self.images.contains_key(src)
    }

    fn begin_page(&mut self) -> Result<(), RenderError> {
        let (size, _) = self.started()?;
        if self.current_page.is_some() {
            return Err(RenderError::State("previous page was not ended".into()));
        }
        self.current_page = Some(PageContext::new(size.height));
        Ok(())
    }

    fn draw_elements(&mut self, elements: &[PositionedElement]) -> Result<(), RenderError> {
        let page = self
            .current_page
            .as_mut()
            .ok_or_else(|| RenderError::State("no open page".into()))?;
        for element in elements {
            page.draw_element(element, &self.images)?;
        }
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        let (size, font_id) = self.started()?;
        let page = self
            .current_page
            .take()
            .ok_or_else(|| RenderError::State("no open page".into()))?;
        let (content, xobjects) = page.finish();

        let content_stream = Stream::new(dictionary! {"Filter" => "FlateDecode"}, deflate(&content.encode()?)?);
        let content_id = self.document.add_object(content_stream);

        let mut resources = dictionary! {
            "Font" => dictionary! { FONT_RESOURCE => font_id },
        };
        if !xobjects.is_empty() {
            let mut xobject_dict = Dictionary::new();
            for (name, id) in xobjects {
                xobject_dict.set(name.into_bytes(), Object::Reference(id));
            }
            resources.set("XObject", Object::Dictionary(xobject_dict));
        }

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), size.width.into(), size.height.into()],
            "Contents" => content_id,
            "Resources" => resources,
        };
        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);
        log::debug!("Finished page {}", self.page_ids.len());
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        self.started()?;
        if self.current_page.is_some() {
            return Err(RenderError::State("last page was not ended".into()));
        }

        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i64,
        };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        let info_id = self.document.add_object(dictionary! {
            "Producer" => Object::string_literal(PRODUCER),
            "Title" => Object::string_literal(self.title.as_str()),
        });
        self.document.trailer.set("Root", catalog_id);
        self.document.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        self.document.save_to(&mut bytes)?;
        log::info!(
            "Serialized PDF: {} pages, {} images, {} bytes",
            self.page_ids.len(),
            self.images.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}
