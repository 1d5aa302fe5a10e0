use std::fmt;

use serde::Serialize;

use crate::errors::RouteError;

/// Marks a path segment as a parameter to be bound by the router.
pub const PARAM_MARKER: char = ':';

/// A path template from the route table, e.g. `/accounts/:id/balance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RouteTemplate(&'static str);

impl RouteTemplate {
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Placeholder names in the order they appear, without the marker.
    pub fn params(&self) -> impl Iterator<Item = &'static str> {
        self.0
            .split('/')
            .filter_map(|segment| segment.strip_prefix(PARAM_MARKER))
    }

    pub fn has_params(&self) -> bool {
        self.params().next().is_some()
    }

    /// Substitutes every placeholder with the matching value.
    ///
    /// Every placeholder must be given exactly one non-empty value and every
    /// name given must appear in the template. Values are inserted verbatim.
    pub fn resolve<K, V>(&self, values: &[(K, V)]) -> Result<String, RouteError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (i, (name, value)) in values.iter().enumerate() {
            let name = name.as_ref();
            if !self.params().any(|p| p == name) {
                return Err(RouteError::UnexpectedParam {
                    template: self.0.to_string(),
                    param: name.to_string(),
                });
            }
            if value.as_ref().is_empty() {
                return Err(RouteError::EmptyParam {
                    param: name.to_string(),
                });
            }
            if values[..i].iter().any(|(earlier, _)| earlier.as_ref() == name) {
                return Err(RouteError::DuplicateParam {
                    param: name.to_string(),
                });
            }
        }

        let segments = self
            .0
            .split('/')
            .map(|segment| match segment.strip_prefix(PARAM_MARKER) {
                Some(param) => values
                    .iter()
                    .find(|(name, _)| name.as_ref() == param)
                    .map(|(_, value)| value.as_ref())
                    .ok_or_else(|| RouteError::MissingParam {
                        template: self.0.to_string(),
                        param: param.to_string(),
                    }),
                None => Ok(segment),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(segments.join("/"))
    }

    /// Shorthand for templates whose only placeholder is `:id`.
    pub fn with_id(&self, id: impl fmt::Display) -> Result<String, RouteError> {
        self.resolve(&[("id", id.to_string())])
    }

    /// Rewrites `:name` segments to the `{name}` form axum routers expect.
    pub fn to_axum_path(&self) -> String {
        self.0
            .split('/')
            .map(|segment| match segment.strip_prefix(PARAM_MARKER) {
                Some(param) => format!("{{{param}}}"),
                None => segment.to_string(),
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for RouteTemplate {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Prepends a consumer prefix such as `/v1` to a path.
pub fn join_path(prefix: &str, path: &str) -> String {
    if prefix.is_empty() {
        return path.to_string();
    }

    let prefix = prefix.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match (prefix.is_empty(), path.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{path}"),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}/{path}"),
    }
}
