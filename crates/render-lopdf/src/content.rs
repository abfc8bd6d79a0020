use lopdf::content::{Content, Operation};
use lopdf::{Object, ObjectId, StringFormat};
use rackmark_layout::{ImageElement, LayoutElement, PositionedElement, TextElement};
use rackmark_render_core::utils::{flip_y, to_win_ansi};
use rackmark_render_core::RenderError;
use std::collections::{BTreeMap, HashMap};

/// Resource name of the single document font.
pub(crate) const FONT_RESOURCE: &str = "F1";

/// An image XObject known to the document.
#[derive(Debug, Clone)]
pub(crate) struct XObjectRef {
    pub name: String,
    pub id: ObjectId,
}

/// Draw state for one page.
pub(crate) struct PageContext {
    page_height: f32,
    content: Content,
    font_size: Option<f32>,
    /// XObjects referenced by this page, by resource name.
    pub xobjects: BTreeMap<String, ObjectId>,
}

impl PageContext {
    pub fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            font_size: None,
            xobjects: BTreeMap::new(),
        }
    }

    pub fn finish(self) -> (Content, BTreeMap<String, ObjectId>) {
        (self.content, self.xobjects)
    }

    pub fn draw_element(
        &mut self,
        el: &PositionedElement,
        images: &HashMap<String, XObjectRef>,
    ) -> Result<(), RenderError> {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Image(image) => self.draw_image(image, el, images),
        }
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) -> Result<(), RenderError> {
        if text.content.is_empty() {
            return Ok(());
        }
        let ops = &mut self.content.operations;
        ops.push(Operation::new("BT", vec![]));
        // Tf is part of the graphics state, which survives BT/ET.
        if self.font_size != Some(text.font_size) {
            ops.push(Operation::new(
                "Tf",
                vec![Object::Name(FONT_RESOURCE.as_bytes().to_vec()), text.font_size.into()],
            ));
            self.font_size = Some(text.font_size);
        }
        let pdf_y = flip_y(el.baseline(), self.page_height);
        ops.push(Operation::new("Td", vec![el.x.into(), pdf_y.into()]));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
        Ok(())
    }

    fn draw_image(
        &mut self,
        image: &ImageElement,
        el: &PositionedElement,
        images: &HashMap<String, XObjectRef>,
    ) -> Result<(), RenderError> {
        let xobject = images
            .get(&image.src)
            .ok_or_else(|| RenderError::MissingImage(image.src.clone()))?;

        let pdf_y = flip_y(el.y + el.height, self.page_height);
        let ops = &mut self.content.operations;
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new(
            "cm",
            vec![
                el.width.into(),
                0.into(),
                0.into(),
                el.height.into(),
                el.x.into(),
                pdf_y.into(),
            ],
        ));
        ops.push(Operation::new("Do", vec![Object::Name(xobject.name.as_bytes().to_vec())]));
        ops.push(Operation::new("Q", vec![]));
        self.xobjects.insert(xobject.name.clone(), xobject.id);
        Ok(())
    }
}
