use crate::errors::GeneratorResult;
use crate::template::Template;

/// LionWeb version baked into the pinned template.
pub const PINNED_LIONWEB_VERSION: &str = "2023.1";

const PINNED_TEMPLATE: &str = include_str!("../../templates/server-config.pinned.json");
const VERSIONED_TEMPLATE: &str = include_str!("../../templates/server-config.versioned.json");

/// The two shipped flavours of the server config template.
///
/// Both read the `PG*` database variables. `Versioned` also reads
/// `LIONWEB_VERSION` for the repository created at start-up, while `Pinned`
/// always creates a [`PINNED_LIONWEB_VERSION`] repository.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateVariant {
    Pinned,
    Versioned,
}

impl TemplateVariant {
    pub fn name(self) -> &'static str {
        match self {
            TemplateVariant::Pinned => "pinned",
            TemplateVariant::Versioned => "versioned",
        }
    }

    /// Raw template text.
    pub fn source(self) -> &'static str {
        match self {
            TemplateVariant::Pinned => PINNED_TEMPLATE,
            TemplateVariant::Versioned => VERSIONED_TEMPLATE,
        }
    }

    pub fn template(self) -> GeneratorResult<Template> {
        Template::parse(self.source())
    }
}
