use thiserror::Error;
use value_mapping::ValueError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatementError {
    #[error("Placeholder :{0} has no bound value")]
    UnboundPlaceholder(String),

    #[error("Invalid bind variable name '{0}': expected a letter or underscore followed by letters, digits or underscores")]
    InvalidBindVariableName(String),

    #[error("Invalid value bound to :{name}: {source}")]
    InvalidValue {
        name: String,
        #[source]
        source: ValueError,
    },

    #[error("Limit must be greater than zero")]
    ZeroLimit,

    #[error("Incomplete select statement: {0}")]
    IncompleteSelect(String),
}
