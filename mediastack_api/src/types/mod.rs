mod meta;
pub use self::meta::{ApiError, ApiResponse, NewsPage, Pagination};

mod article;
pub use self::article::Article;

mod filters;
pub use self::filters::{Category, SortOrder, COUNTRIES, LANGUAGES};
