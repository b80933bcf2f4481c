//! Single-shot generation of the server config file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::server_config::ServerConfig;
use crate::environment::{ProcessEnvironment, VariableSource};
use crate::errors::{GeneratorError, GeneratorResult};
use crate::models::config::GeneratorSettings;
use crate::template::{Template, TemplateVariant};

/// Entry point shared by the binaries: loads settings and renders `variant`
/// from the process environment.
pub fn run(variant: TemplateVariant) -> GeneratorResult<PathBuf> {
    let settings = GeneratorSettings::load()?;
    generate(&settings, variant, &ProcessEnvironment)
}

/// Renders the template selected by `settings` and `variant` and writes it
/// to `settings.output_path`, replacing any existing file.
///
/// The output file is only touched after every variable was found. Values are
/// written verbatim; text that does not parse as JSON is still written, with
/// a warning.
pub fn generate<S>(
    settings: &GeneratorSettings,
    variant: TemplateVariant,
    source: &S,
) -> GeneratorResult<PathBuf>
where
    S: VariableSource + ?Sized,
{
    let template = load_template(settings, variant)?;
    log::debug!("Required variables: {}", template.variables().join(", "));

    let rendered = template.render(source)?;
    match serde_json::from_str::<serde_json::Value>(&rendered) {
        Ok(document) => describe(document),
        Err(e) => log::warn!("Rendered server config is not valid JSON: {e}"),
    }

    write_output(&settings.output_path, &rendered)?;
    log::info!("Wrote server config to {}", settings.output_path.display());

    Ok(settings.output_path.clone())
}

fn load_template(
    settings: &GeneratorSettings,
    variant: TemplateVariant,
) -> GeneratorResult<Template> {
    match &settings.template_path {
        Some(path) => {
            log::info!("Using template {}", path.display());
            let text = fs::read_to_string(path).map_err(|source| GeneratorError::Io {
                path: path.clone(),
                source,
            })?;
            Template::parse(&text)
        }
        None => {
            log::info!("Using built-in {} template", variant.name());
            variant.template()
        }
    }
}

/// Logs what the server will be pointed at. Custom templates may not follow
/// the standard layout, in which case only a debug line is emitted.
fn describe(document: serde_json::Value) {
    match serde_json::from_value::<ServerConfig>(document) {
        Ok(config) => {
            let db = &config.database;
            log::info!(
                "Server on port {} using database {}@{}:{}/{}",
                config.server.server_port,
                db.user,
                db.host,
                db.port,
                db.db
            );
            for repository in &config.startup.create_repositories {
                log::info!(
                    "Repository {} with LionWeb {}",
                    repository.name,
                    repository.lion_web_version
                );
            }
        }
        Err(e) => log::debug!("Rendered config does not follow the standard layout: {e}"),
    }
}

fn write_output(path: &Path, contents: &str) -> GeneratorResult<()> {
    fs::write(path, contents).map_err(|source| GeneratorError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::MapSource;

    fn settings_in(dir: &Path) -> GeneratorSettings {
        GeneratorSettings {
            output_path: dir.join("server-config.json"),
            template_path: None,
        }
    }

    #[test]
    fn missing_template_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = GeneratorSettings {
            template_path: Some(dir.path().join("absent.json")),
            ..settings_in(dir.path())
        };

        let result = generate(&settings, TemplateVariant::Pinned, &MapSource::default());
        assert!(matches!(result, Err(GeneratorError::Io { .. })));
        assert!(!settings.output_path.exists());
    }

    #[test]
    fn missing_output_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = GeneratorSettings {
            output_path: dir.path().join("nested").join("server-config.json"),
            template_path: None,
        };
        let source = MapSource::from_pairs([
            ("PGHOST", "db"),
            ("PGUSER", "postgres"),
            ("PGDB", "lionweb"),
            ("PGPASSWORD", "secret"),
            ("PGPORT", "5432"),
        ]);

        match generate(&settings, TemplateVariant::Pinned, &source) {
            Err(GeneratorError::Io { path, .. }) => assert_eq!(path, settings.output_path),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
