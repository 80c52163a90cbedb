//! Run configuration: endpoint URL, root type name and destination path.
//!
//! Values come from CLI flags when `--url` is given, otherwise from
//! interactive prompts. Both routes share the same validators so flag mode
//! and prompt mode accept exactly the same inputs.

use std::env;
use std::path::PathBuf;

use dialoguer::{Input, Select};
use tracing::debug;
use url::Url;

use crate::cli::GenerateArgs;
use crate::error::GenError;

/// Default root type name when none is provided.
pub const DEFAULT_TYPE_NAME: &str = "ApiTypes";

/// Fully resolved inputs for one generation run.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Endpoint the JSON payload is fetched from.
    pub url: Url,
    /// Name of the root TypeScript type, also the output file stem.
    pub type_name: String,
    /// Directory the `.ts` file is written into.
    pub destination: PathBuf,
}

/// Host-derived directories offered by the destination prompt.
#[derive(Debug, Clone)]
pub struct PromptDefaults {
    /// The user's desktop directory.
    pub desktop: PathBuf,
    /// The directory the command was launched from.
    pub current: PathBuf,
}

impl PromptDefaults {
    /// Resolve prompt defaults from the host environment.
    pub fn from_host() -> Result<Self, GenError> {
        let desktop = dirs::desktop_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
            .ok_or_else(|| {
                GenError::InvalidInput("could not determine a home directory".to_string())
            })?;
        let current = env::current_dir()
            .map_err(|err| GenError::InvalidInput(format!("could not read current directory: {err}")))?;
        Ok(Self { desktop, current })
    }
}

/// Validate and parse an endpoint URL. Only http(s) endpoints are accepted.
pub fn validate_url(raw: &str) -> Result<Url, GenError> {
    let url = Url::parse(raw.trim())
        .map_err(|err| GenError::InvalidInput(format!("invalid URL {raw:?}: {err}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(GenError::InvalidInput(format!(
            "unsupported URL scheme {scheme:?}, expected http or https"
        ))),
    }
}

/// Validate a custom destination: it must name an existing directory.
///
/// Only interactive custom paths go through this; a flag-supplied path may
/// be missing and is created by the persister.
pub fn validate_existing_dir(raw: &str) -> Result<PathBuf, GenError> {
    let path = PathBuf::from(raw.trim());
    if path.is_dir() {
        Ok(path)
    } else {
        Err(GenError::InvalidInput(format!(
            "{} is not an existing directory",
            path.display()
        )))
    }
}

/// Validate a root type name: an ASCII letter followed by letters or digits.
pub fn validate_type_name(raw: &str) -> Result<String, GenError> {
    let name = raw.trim();
    let mut chars = name.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric());
    if valid {
        Ok(name.to_string())
    } else {
        Err(GenError::InvalidInput(format!(
            "invalid type name {name:?}: must start with a letter and contain only letters and digits"
        )))
    }
}

/// Resolve the run configuration from flags, prompting for anything absent.
///
/// When `--url` is present the run is non-interactive: the type name falls
/// back to [`DEFAULT_TYPE_NAME`] and the destination to the current
/// directory. Without it, every value is collected via prompts. Host
/// defaults are only resolved when a default is actually consulted, so a
/// fully-specified flag run never touches the home directory lookup.
pub fn collect<F>(args: &GenerateArgs, resolve_defaults: F) -> Result<Configuration, GenError>
where
    F: FnOnce() -> Result<PromptDefaults, GenError>,
{
    let config = match &args.url {
        Some(raw_url) => {
            let url = validate_url(raw_url)?;
            let type_name = match &args.name {
                Some(name) => validate_type_name(name)?,
                None => DEFAULT_TYPE_NAME.to_string(),
            };
            let destination = match &args.path {
                Some(path) => path.clone(),
                None => resolve_defaults()?.current,
            };
            Configuration {
                url,
                type_name,
                destination,
            }
        }
        None => prompt_configuration(args, &resolve_defaults()?)?,
    };
    debug!(
        url = %config.url,
        type_name = %config.type_name,
        destination = %config.destination.display(),
        "resolved run configuration"
    );
    Ok(config)
}

fn prompt_configuration(
    args: &GenerateArgs,
    defaults: &PromptDefaults,
) -> Result<Configuration, GenError> {
    let raw_url = Input::<String>::new()
        .with_prompt("Enter the API URL to fetch data from")
        .validate_with(|input: &String| validate_url(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()
        .map_err(|err| GenError::InvalidInput(format!("failed to read URL: {err}")))?;
    let url = validate_url(&raw_url)?;

    let type_name = match &args.name {
        Some(name) => validate_type_name(name)?,
        None => {
            let input = Input::<String>::new()
                .with_prompt("What should the generated type be named?")
                .default(DEFAULT_TYPE_NAME.to_string())
                .validate_with(|input: &String| {
                    validate_type_name(input).map(|_| ()).map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(|err| GenError::InvalidInput(format!("failed to read type name: {err}")))?;
            validate_type_name(&input)?
        }
    };

    let destination = match &args.path {
        Some(path) => path.clone(),
        None => prompt_destination(defaults)?,
    };

    Ok(Configuration {
        url,
        type_name,
        destination,
    })
}

/// Offer Desktop, the current directory, or a custom pre-existing path.
fn prompt_destination(defaults: &PromptDefaults) -> Result<PathBuf, GenError> {
    let desktop_label = format!("Desktop ({})", defaults.desktop.display());
    let current_label = format!("Current directory ({})", defaults.current.display());
    let items = [
        desktop_label.as_str(),
        current_label.as_str(),
        "Custom path",
    ];
    let selection = Select::new()
        .with_prompt("Where should the file be saved?")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|err| GenError::InvalidInput(format!("failed to select destination: {err}")))?;

    match selection {
        0 => Ok(defaults.desktop.clone()),
        1 => Ok(defaults.current.clone()),
        _ => {
            let raw = Input::<String>::new()
                .with_prompt("Enter the destination directory")
                .validate_with(|input: &String| {
                    validate_existing_dir(input)
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(|err| {
                    GenError::InvalidInput(format!("failed to read destination: {err}"))
                })?;
            validate_existing_dir(&raw)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn defaults() -> Result<PromptDefaults, GenError> {
        Ok(PromptDefaults {
            desktop: PathBuf::from("/home/test/Desktop"),
            current: PathBuf::from("/work"),
        })
    }

    fn flag_args(url: Option<&str>, name: Option<&str>, path: Option<&str>) -> GenerateArgs {
        GenerateArgs {
            url: url.map(str::to_string),
            name: name.map(str::to_string),
            path: path.map(PathBuf::from),
        }
    }

    #[test]
    fn test_validate_url_accepts_http_and_https() {
        assert!(validate_url("https://api.example.com/users").is_ok());
        assert!(validate_url("http://localhost:3000/data").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_garbage_and_other_schemes() {
        assert!(matches!(
            validate_url("not a url"),
            Err(GenError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_url("ftp://example.com/file"),
            Err(GenError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_type_name() {
        assert_eq!(validate_type_name("ApiTypes").unwrap(), "ApiTypes");
        assert_eq!(validate_type_name("  v2Response  ").unwrap(), "v2Response");
        assert!(validate_type_name("2Fast").is_err());
        assert!(validate_type_name("My-Type").is_err());
        assert!(validate_type_name("").is_err());
    }

    #[test]
    fn test_validate_existing_dir_accepts_directory() {
        let dir = tempdir().unwrap();
        let raw = format!("  {}  ", dir.path().display());
        let validated = validate_existing_dir(&raw).unwrap();
        assert_eq!(validated, dir.path());
    }

    #[test]
    fn test_validate_existing_dir_rejects_missing_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = validate_existing_dir(missing.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, GenError::InvalidInput(_)));
        assert!(err.to_string().contains("not an existing directory"));
    }

    #[test]
    fn test_validate_existing_dir_rejects_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(validate_existing_dir(file.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_collect_flag_mode_full() {
        let args = flag_args(
            Some("https://api.example.com/users"),
            Some("User"),
            Some("/tmp/out"),
        );
        let config = collect(&args, defaults).unwrap();
        assert_eq!(config.url.as_str(), "https://api.example.com/users");
        assert_eq!(config.type_name, "User");
        assert_eq!(config.destination, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_collect_flag_mode_applies_defaults() {
        let args = flag_args(Some("https://api.example.com/users"), None, None);
        let config = collect(&args, defaults).unwrap();
        assert_eq!(config.type_name, DEFAULT_TYPE_NAME);
        assert_eq!(config.destination, PathBuf::from("/work"));
    }

    #[test]
    fn test_collect_fully_specified_flags_skip_host_lookup() {
        let args = flag_args(
            Some("https://api.example.com/users"),
            Some("User"),
            Some("/tmp/out"),
        );
        // A resolver failure must not matter when every flag is given.
        let config = collect(&args, || {
            Err(GenError::InvalidInput("no home directory".to_string()))
        })
        .unwrap();
        assert_eq!(config.destination, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_collect_flag_mode_rejects_invalid_url_before_any_fetch() {
        let args = flag_args(Some("definitely not a url"), None, None);
        let err = collect(&args, defaults).unwrap_err();
        assert!(matches!(err, GenError::InvalidInput(_)));
    }

    #[test]
    fn test_collect_flag_mode_rejects_invalid_name() {
        let args = flag_args(Some("https://api.example.com"), Some("9lives"), None);
        let err = collect(&args, defaults).unwrap_err();
        assert!(matches!(err, GenError::InvalidInput(_)));
    }
}
