//! Configuration records for the Maya documentation site.
//!
//! Two providers hand the documentation host everything it needs:
//! [`site_settings`] for the site identity, locale and theme, and [`sidebars`]
//! for the navigation trees. Both records serialize with the field names the
//! host binds to.

mod config;
mod i18n;
mod policy;
mod presets;
mod sidebar;
mod site;
mod theme;
mod validate;

pub use self::config::*;
pub use self::i18n::*;
pub use self::policy::*;
pub use self::presets::*;
pub use self::sidebar::*;
pub use self::site::*;
pub use self::theme::*;
pub use self::validate::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
