//! Worker marketplace storefront core: the listing engine behind the browse
//! grid, the profile read model, the display dictionary and form validation.

pub mod config;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod listing;
pub mod profiles;
pub mod telemetry;
