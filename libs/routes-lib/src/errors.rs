#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RouteError {
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    #[error("unknown resource: {0}")]
    UnknownResource(String),

    #[error("missing value for parameter '{param}' in {template}")]
    MissingParam { template: String, param: String },

    #[error("parameter '{param}' does not appear in {template}")]
    UnexpectedParam { template: String, param: String },

    #[error("empty value for parameter '{param}'")]
    EmptyParam { param: String },

    #[error("parameter '{param}' given more than once")]
    DuplicateParam { param: String },
}
