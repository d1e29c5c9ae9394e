//! Data access and request validation for the catalog.

mod castings;
mod humans;
mod movies;
mod validation;
pub use castings::CastingService;
pub use humans::HumanService;
pub use movies::MovieService;
pub use validation::{
    FieldKind, FieldRule, FieldValue, RequestValidator, ValidatedFields, CASTING_RULES, HUMAN_RULES, MOVIE_RULES,
};
