pub mod locale;
pub mod messages;
pub mod types;

pub use locale::{Locale, LocaleStore};
pub use messages::Messages;
pub use types::{Skill, SkillSource};
