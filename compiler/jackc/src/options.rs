//! Options for the tree dump commands.

/// How `jack parse` prints the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented outline with box-drawing connectors.
    #[default]
    Tree,
    /// Nested JSON objects.
    Json,
}

/// Configuration for `jack parse`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DumpOptions {
    pub format: OutputFormat,
    /// Print the byte span of every node.
    pub show_spans: bool,
}

/// Bad command line for a dump command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("missing file path")]
    MissingPath,
    #[error("unexpected argument '{0}': only one file can be parsed")]
    ExtraArgument(String),
}

/// Parse the arguments following `jack parse`.
///
/// Flags may come before or after the path. Exactly one path is required.
pub fn parse_dump_options(args: &[String]) -> Result<(DumpOptions, String), OptionsError> {
    let mut options = DumpOptions::default();
    let mut path: Option<String> = None;

    for arg in args {
        match arg.as_str() {
            "--json" => options.format = OutputFormat::Json,
            "--tree" => options.format = OutputFormat::Tree,
            "--spans" => options.show_spans = true,
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(OptionsError::UnknownOption(flag.to_string()));
            }
            _ if path.is_some() => return Err(OptionsError::ExtraArgument(arg.clone())),
            _ => path = Some(arg.clone()),
        }
    }

    let path = path.ok_or(OptionsError::MissingPath)?;
    Ok((options, path))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
