//! Resolution of the single face used for all label text.
//!
//! Order: the configured font file from the resource provider, then (with the
//! `system-fonts` feature) an installed face of the configured family, then the
//! built-in Helvetica-Bold. Falling back never fails the build; it is logged
//! and reported as a [`Notice`].

use crate::document::Notice;
use rackmark_render_core::{EmbeddedFace, LabelFont};
use rackmark_traits::{ResourceError, ResourceProvider};
use std::sync::Arc;

/// Where to look for the label face.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FontRequest<'a> {
    pub provider: Option<&'a dyn ResourceProvider>,
    pub resource: &'a str,
    /// `None` disables the installed-fonts lookup.
    pub system_family: Option<&'a str>,
}

pub(crate) fn resolve_font(request: FontRequest<'_>) -> (LabelFont, Vec<Notice>) {
    let mut reasons = Vec::new();

    match request.provider {
        Some(provider) => match load_from_provider(provider, request.resource) {
            Ok(face) => {
                log::info!(
                    "Using font '{}' from {} resource '{}'",
                    face.postscript_name,
                    provider.name(),
                    request.resource
                );
                return (LabelFont::Embedded(face), Vec::new());
            }
            Err(reason) => reasons.push(reason),
        },
        None => reasons.push("no resource provider configured".to_string()),
    }

    if let Some(family) = request.system_family {
        match load_system_face(family) {
            Ok(face) => {
                log::info!("Using installed font '{}' for family '{}'", face.postscript_name, family);
                return (LabelFont::Embedded(face), Vec::new());
            }
            Err(reason) => reasons.push(reason),
        }
    }

    let reason = reasons.join("; ");
    log::warn!(
        "Font '{}' unavailable ({}); falling back to Helvetica-Bold",
        request.resource,
        reason
    );
    let notice = Notice::FontFallback {
        requested: request.resource.to_string(),
        reason,
    };
    (LabelFont::Builtin, vec![notice])
}

fn load_from_provider(provider: &dyn ResourceProvider, resource: &str) -> Result<EmbeddedFace, String> {
    let data = provider.load(resource).map_err(|e| match e {
        ResourceError::NotFound(_) => format!("'{}' not found in {} resources", resource, provider.name()),
        other => other.to_string(),
    })?;
    EmbeddedFace::parse(data).map_err(|e| format!("'{}': {}", resource, e))
}

#[cfg(feature = "system-fonts")]
fn load_system_face(family: &str) -> Result<EmbeddedFace, String> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let query = fontdb::Query {
        families: &[fontdb::Family::Name(family)],
        weight: fontdb::Weight::BLACK,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };
    let id = db
        .query(&query)
        .ok_or_else(|| format!("family '{}' is not installed", family))?;

    let (data, index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or_else(|| format!("font data for '{}' could not be read", family))?;
    if index != 0 {
        return Err(format!("'{}' is face {} of a collection", family, index));
    }
    EmbeddedFace::parse(Arc::new(data)).map_err(|e| format!("installed '{}': {}", family, e))
}

#[cfg(not(feature = "system-fonts"))]
fn load_system_face(family: &str) -> Result<EmbeddedFace, String> {
    Err(format!("installed-font lookup for '{}' is not compiled in", family))
}
