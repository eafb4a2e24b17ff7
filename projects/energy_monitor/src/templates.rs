use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

pub const INDEX: &str = "index.html";
pub const ABOUT: &str = "about.html";

// Compiled in so the binary does not depend on its working directory.
const SOURCES: [(&str, &str); 3] = [
    ("base.html", include_str!("../templates/base.html")),
    (INDEX, include_str!("../templates/index.html")),
    (ABOUT, include_str!("../templates/about.html")),
];

#[derive(Debug, Error)]
pub enum TemplatesError {
    #[error("Compile: {source}")]
    Compile {
        source: tera::Error,
    },

    #[error("BuildContext: {source}")]
    BuildContext {
        source: tera::Error,
    },

    #[error("Render {name}: {source}")]
    Render {
        name: &'static str,
        source: tera::Error,
    },
}

/// The compiled page templates.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self, TemplatesError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(SOURCES)
            .map_err(|source| TemplatesError::Compile { source })?;
        Ok(Templates { tera })
    }

    pub fn render<T: Serialize>(&self, name: &'static str, page: &T) -> Result<String, TemplatesError> {
        let context = Context::from_serialize(page)
            .map_err(|source| TemplatesError::BuildContext { source })?;
        self.tera
            .render(name, &context)
            .map_err(|source| TemplatesError::Render { name, source })
    }
}
