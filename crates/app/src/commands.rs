//! Command handlers.
//!
//! Handlers write to the given sinks so they can be exercised without a
//! terminal. stdout carries only the response text.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use dip_application::{FetchDocument, FetchInput, HttpClient};
use dip_domain::{ApiSettings, DEFAULT_API_KEY, FilterKind, ResourceType};
use dip_infrastructure::SettingsRepository;
use tracing::info;

use crate::cli::FetchArgs;

impl FetchArgs {
    /// Converts the parsed arguments into use case input.
    pub fn to_input(&self) -> FetchInput {
        let input = FetchInput::new(self.resource)
            .with_api_key(&self.api_key)
            .with_identifier(&self.id)
            .with_query(&self.query);
        self.filters
            .iter()
            .fold(input, |input, f| input.with_filter(&f.key, &f.value))
    }

    /// Documented single-value filters that were passed more than once.
    ///
    /// Unknown keys are never reported.
    pub fn repeated_single_value_filters(&self) -> Vec<&str> {
        let mut repeated: Vec<&str> = Vec::new();
        for (index, param) in self.filters.iter().enumerate() {
            let key = param.key.as_str();
            let single = self
                .resource
                .filter(key)
                .is_some_and(|spec| !spec.kind.accepts_multiple());
            if single
                && !repeated.contains(&key)
                && self.filters[..index].iter().any(|p| p.key == key)
            {
                repeated.push(key);
            }
        }
        repeated
    }

    /// Applies command-line overrides to loaded settings.
    pub fn apply_overrides(&self, settings: ApiSettings) -> ApiSettings {
        match &self.base_url {
            Some(base_url) => settings.with_base_url(base_url.clone()),
            None => settings,
        }
    }
}

/// Runs one fetch and prints the result.
///
/// Fetch failures are reported on `err` and turned into a failing exit code;
/// only I/O errors on the sinks are returned as errors.
pub async fn fetch<C: HttpClient>(
    use_case: &FetchDocument<C>,
    args: &FetchArgs,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<ExitCode> {
    for key in args.repeated_single_value_filters() {
        writeln!(
            err,
            "warning: {key} takes a single value for {} but was given more than once",
            args.resource
        )?;
    }

    match use_case.execute(&args.to_input()).await {
        Ok(output) => {
            if args.status {
                writeln!(err, "{} {}", output.status, output.url)?;
            }
            writeln!(out, "{}", output.display_text())?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            writeln!(err, "{}: {}", e.title(), e.message())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Builds the use case with the reqwest adapter.
pub fn fetch_use_case(
    settings: ApiSettings,
) -> anyhow::Result<FetchDocument<dip_infrastructure::ReqwestHttpClient>> {
    let client = dip_infrastructure::ReqwestHttpClient::new()?;
    Ok(FetchDocument::new(Arc::new(client), settings))
}

/// Lists every resource with its label and documented filters.
pub fn resources(out: &mut impl Write) -> io::Result<()> {
    for resource in ResourceType::all() {
        writeln!(out, "{:<22}{}", resource.as_str(), resource.label())?;
        for filter in resource.filters() {
            write!(
                out,
                "    {:<20}{} ({})",
                filter.name,
                filter.label,
                filter.kind.as_str()
            )?;
            if let FilterKind::Select(options) = filter.kind {
                let values: Vec<_> = options
                    .iter()
                    .filter(|o| !o.value.is_empty())
                    .map(|o| o.value)
                    .collect();
                write!(out, ": {}", values.join(", "))?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Prints the settings in effect and where they come from.
pub fn config_show(
    repo: &SettingsRepository,
    settings: &ApiSettings,
    out: &mut impl Write,
) -> io::Result<()> {
    match repo.path() {
        Some(path) if path.exists() => writeln!(out, "settings file: {}", path.display())?,
        Some(path) => writeln!(out, "settings file: {} (not present)", path.display())?,
        None => writeln!(out, "settings file: none")?,
    }
    writeln!(out, "base_url: {}", settings.base_url)?;

    let key = if settings.default_api_key.expose() == DEFAULT_API_KEY {
        "public DIP key"
    } else if settings.default_api_key.is_blank() {
        "none"
    } else {
        "custom"
    };
    writeln!(out, "default_api_key: {key}")
}

/// Writes a settings file with default values.
pub async fn config_init(
    repo: &SettingsRepository,
    force: bool,
    out: &mut impl Write,
) -> anyhow::Result<ExitCode> {
    if let Some(path) = repo.path()
        && path.exists()
        && !force
    {
        writeln!(
            out,
            "{} already exists; use --force to overwrite",
            path.display()
        )?;
        return Ok(ExitCode::FAILURE);
    }

    let path = repo.save(&ApiSettings::default()).await?;
    info!(path = %path.display(), "settings written");
    writeln!(out, "wrote {}", path.display())?;
    Ok(ExitCode::SUCCESS)
}
