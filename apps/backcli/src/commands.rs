use routes_lib::{join_path, RouteError, RouteTable};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid parameter '{0}', expected name=value")]
    InvalidParam(String),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Parses `name=value` pairs given on the command line.
pub fn parse_params<'a, I>(raw: I) -> Result<Vec<(String, String)>, CliError>
where
    I: IntoIterator<Item = &'a str>,
{
    raw.into_iter()
        .map(|pair| {
            pair.split_once('=')
                .filter(|(name, _)| !name.is_empty())
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .ok_or_else(|| CliError::InvalidParam(pair.to_string()))
        })
        .collect()
}

/// One line per entry, `dotted-name  template`, names padded to align.
pub fn list(table: &RouteTable) -> String {
    let entries = table.entries();
    let width = entries
        .iter()
        .map(|e| e.dotted_name().len())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|e| format!("{:<width$}  {}", e.dotted_name(), e.template))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn list_json(table: &RouteTable) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(table)?)
}

pub fn resolve(
    table: &RouteTable,
    name: &str,
    params: &[(String, String)],
    prefix: &str,
) -> Result<String, CliError> {
    let template = table.lookup(name)?;
    let path = template.resolve(params)?;
    tracing::debug!(name, template = %template, path = %path, "route resolved");
    Ok(join_path(prefix, &path))
}
