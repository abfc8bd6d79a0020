use crate::assembler::{draw_labels, prepare_labels};
use crate::config::LabelConfig;
use crate::document::{LabelDocument, RenderReport};
use crate::error::LabelError;
use crate::fonts::{resolve_font, FontRequest};
use rackmark_glyph::GlyphCache;
use rackmark_layout::{LabelLayout, SheetGeometry};
use rackmark_render_core::{DocumentRenderer, LabelFont};
use rackmark_render_lopdf::LopdfRenderer;
use rackmark_resource::FilesystemResourceProvider;
use rackmark_source::LocationTable;
use rackmark_symbol::SymbolConfig;
use rackmark_traits::ResourceProvider;
use rackmark_types::LabelRow;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a [`LabelPipeline`].
#[derive(Debug)]
pub struct LabelPipelineBuilder {
    config: LabelConfig,
    provider: Option<Arc<dyn ResourceProvider>>,
    system_fonts: bool,
}

impl Default for LabelPipelineBuilder {
    fn default() -> Self {
        Self {
            config: LabelConfig::default(),
            provider: None,
            system_fonts: cfg!(feature = "system-fonts"),
        }
    }
}

impl LabelPipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: LabelConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the configuration with one read from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, LabelError> {
        self.config = LabelConfig::from_json_file(path)?;
        Ok(self)
    }

    /// Sets where the font file is looked up.
    pub fn with_resource_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Shorthand for a [`FilesystemResourceProvider`] rooted at `path`.
    pub fn with_resource_dir<P: AsRef<Path>>(self, path: P) -> Self {
        self.with_resource_provider(Arc::new(FilesystemResourceProvider::new(path)))
    }

    /// Enables looking up the font family among installed fonts when the font file is missing.
    /// Has no effect without the `system-fonts` feature.
    pub fn with_system_fonts(mut self, enabled: bool) -> Self {
        self.system_fonts = enabled;
        self
    }

    pub fn with_font_resource(mut self, name: impl Into<String>) -> Self {
        self.config.font_resource = name.into();
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.config.font_family = family.into();
        self
    }

    pub fn with_geometry(mut self, geometry: SheetGeometry) -> Self {
        self.config.geometry = geometry;
        self
    }

    pub fn with_symbol_config(mut self, symbol: SymbolConfig) -> Self {
        self.config.symbol = symbol;
        self
    }

    pub fn with_glyph_dpi(mut self, dpi: f32) -> Self {
        self.config.glyph_dpi = dpi;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Validates the configuration and creates the pipeline.
    pub fn build(self) -> Result<LabelPipeline, LabelError> {
        self.config.validate()?;
        let layout = LabelLayout::new(self.config.geometry);
        Ok(LabelPipeline {
            config: self.config,
            provider: self.provider,
            system_fonts: self.system_fonts,
            layout,
        })
    }
}

/// Generates label PDFs. Reusable: every call is an independent build.
#[derive(Debug)]
pub struct LabelPipeline {
    config: LabelConfig,
    provider: Option<Arc<dyn ResourceProvider>>,
    system_fonts: bool,
    layout: LabelLayout,
}

impl LabelPipeline {
    pub fn builder() -> LabelPipelineBuilder {
        LabelPipelineBuilder::new()
    }

    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    pub fn layout(&self) -> &LabelLayout {
        &self.layout
    }

    /// Renders `rows` into a PDF held in memory.
    pub fn generate(&self, rows: &[LabelRow]) -> Result<LabelDocument, LabelError> {
        let title = self.config.title.clone();
        let report = self.render_with(rows, |font| LopdfRenderer::new(font.clone(), title))?;
        Ok(report.into())
    }

    pub fn generate_from_table(&self, table: &LocationTable) -> Result<LabelDocument, LabelError> {
        self.generate(&table.rows())
    }

    /// Like [`generate`](Self::generate), then writes the PDF to `path`.
    /// Nothing is written when the build fails.
    pub fn generate_to_file<P: AsRef<Path>>(&self, rows: &[LabelRow], path: P) -> Result<LabelDocument, LabelError> {
        let document = self.generate(rows)?;
        document.write_to_file(path.as_ref())?;
        log::info!("Wrote {} labels to {}", document.label_count, path.as_ref().display());
        Ok(document)
    }

    /// Runs a full build against any renderer. `make_renderer` receives the
    /// resolved face, which stays the same for the whole document.
    pub fn render_with<R, F>(&self, rows: &[LabelRow], make_renderer: F) -> Result<RenderReport<R::Output>, LabelError>
    where
        R: DocumentRenderer,
        F: FnOnce(&LabelFont) -> R,
    {
        if rows.is_empty() {
            return Err(LabelError::EmptyInput);
        }

        let system_family = self
            .system_fonts
            .then_some(self.config.font_family.as_str());
        let (font, notices) = resolve_font(FontRequest {
            provider: self.provider.as_deref(),
            resource: &self.config.font_resource,
            system_family,
        });

        let labels = prepare_labels(rows, &self.config.symbol)?;

        let mut renderer = make_renderer(&font);
        let mut glyphs = GlyphCache::new(self.config.geometry.arrow_size_mm, self.config.glyph_dpi);
        let page_count = draw_labels(&mut renderer, &self.layout, &labels, &font, &mut glyphs)?;
        let output = renderer.finish()?;

        log::info!(
            "Generated {} labels on {} pages ({} arrow glyphs, font '{}')",
            labels.len(),
            page_count,
            glyphs.len(),
            font.base_font()
        );
        Ok(RenderReport {
            output,
            page_count,
            label_count: labels.len(),
            font: font.choice(),
            notices,
        })
    }
}
