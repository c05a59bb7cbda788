mod common;
pub use self::common::{OptionValue, Query, QueryOptions};

mod news;
pub use self::news::NewsQuery;

mod validate;
pub use self::validate::{
    validate_params, DefaultsMode, SanitizedParams, ACCESS_KEY_PARAM, DEFAULT_COUNTRY,
    DEFAULT_LANGUAGE, DEFAULT_LANGUAGE_KEY, DEFAULT_LIMIT, DEFAULT_SORT,
};
