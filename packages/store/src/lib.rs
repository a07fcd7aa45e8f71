pub mod config;
pub mod models;
pub mod notice;
pub mod page;
pub mod roster;
pub mod validate;

mod ids;
pub use ids::{now_millis, IdGenerator};

pub use config::{Backend, ConfigError, RosterConfig};
pub use models::{Field, UserForm, UserId, UserRecord, DEPARTMENT_PLACEHOLDER};
pub use notice::{Action, Notice, NoticeLevel};
pub use page::{PageWindow, DEFAULT_PAGE_SIZE};
pub use roster::{Mode, PageView, Roster, Settled, Submission, Ticket};
pub use validate::{validate, ValidationError};
