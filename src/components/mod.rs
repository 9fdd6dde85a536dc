//! UI Components
//!
//! Block components and the small widgets they are built from.

mod avatar;
mod dropdown;
mod progress;
mod pager;
mod confirm_modal;
mod operation_modal;
mod applications;
mod basic_list;

pub use avatar::{Avatar, AvatarSize};
pub use dropdown::{Dropdown, MenuEntry};
pub use progress::{effective_status, ProgressBar};
pub use pager::Pager;
pub use confirm_modal::ConfirmModal;
pub use operation_modal::OperationModal;
pub use applications::ApplicationsGrid;
pub use basic_list::{BasicListPage, MoreAction};
