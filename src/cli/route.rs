//! CLI route: single route table and run context. Dispatches to the context
//! domain and presentation.

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_inspect_json, format_inspect_text, format_validate_result_text,
};
use crate::config::{ConfigLoader, ContextKitConfig};
use crate::context::{self, ContextNode, TreeStats, Walker, WalkerConfig};
use crate::error::ApiError;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime context for CLI execution: resolved configuration.
pub struct RunContext {
    config: ContextKitConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        config.validate().map_err(|errors| {
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            ))
        })?;

        Ok(Self::with_config(config))
    }

    pub fn with_config(config: ContextKitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ContextKitConfig {
        &self.config
    }

    /// Execute a command and return its stdout text.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Validate { input } => self.validate(input),
            Commands::Inspect {
                input,
                format,
                sorted,
                max_depth,
            } => self.inspect(input, format.as_deref(), *sorted, *max_depth),
            Commands::Normalize {
                input,
                sort,
                compact,
            } => self.normalize(input, *sort, *compact),
        }
    }

    fn validate(&self, input: &Path) -> Result<String, ApiError> {
        let roots = load_document(input)?;
        let stats = TreeStats::collect(&roots);
        info!(
            input = %input.display(),
            contexts = stats.nodes,
            unknown_types = stats.unknown_types,
            unknown_topics = stats.unknown_topics,
            "Document validated"
        );
        Ok(format_validate_result_text(&stats, roots.len()))
    }

    fn inspect(
        &self,
        input: &Path,
        format: Option<&str>,
        sorted: bool,
        max_depth: Option<usize>,
    ) -> Result<String, ApiError> {
        let format = format.unwrap_or(self.config.output.format.as_str());
        let roots = load_document(input)?;
        let walker_config = WalkerConfig {
            max_depth,
            sort_by_display_order: sorted || self.config.output.sort_children,
        };
        let visits = Walker::over(&roots).with_config(walker_config).walk();
        debug!(visits = visits.len(), format, "Rendering inspect output");

        match format {
            "json" => format_inspect_json(&visits, self.config.output.pretty),
            "text" => Ok(format_inspect_text(&visits)),
            other => Err(ApiError::ConfigError(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }

    fn normalize(&self, input: &Path, sort: bool, compact: bool) -> Result<String, ApiError> {
        let source = read_input(input)?;
        let value: serde_json::Value =
            serde_json::from_str(&source).map_err(crate::error::DecodeError::from)?;
        let sort = sort || self.config.output.sort_children;
        let pretty = self.config.output.pretty && !compact;

        let prepare = |node: ContextNode| if sort { node.sorted() } else { node };
        let rendered = if value.is_array() {
            let roots: Vec<ContextNode> = context::decode_many_value(&value)?
                .into_iter()
                .map(prepare)
                .collect();
            render_json(&roots, pretty)
        } else {
            let node = prepare(context::decode_value(&value)?);
            render_json(&node, pretty)
        };
        rendered.map_err(|e| ApiError::Encode(e.to_string()))
    }
}

fn render_json<T: serde::Serialize + ?Sized>(
    value: &T,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Read a document from a path, or from stdin when the path is `-`.
pub fn read_input(input: &Path) -> Result<String, ApiError> {
    let result = if input.as_os_str() == "-" {
        let mut contents = String::new();
        std::io::stdin()
            .read_to_string(&mut contents)
            .map(|_| contents)
    } else {
        std::fs::read_to_string(input)
    };
    result.map_err(|source| ApiError::Input {
        path: input.display().to_string(),
        source,
    })
}

/// Decode a document holding one context or an array of contexts.
fn load_document(input: &Path) -> Result<Vec<ContextNode>, ApiError> {
    let source = read_input(input)?;
    Ok(context::decode_many_str(&source)?)
}
