// Layout and display
pub mod button;
pub mod card;
pub mod data_table;
pub mod detail_list;
pub mod feedback;
pub mod page_header;
pub mod pagination;
pub mod skeleton;

// Form controls
pub mod filter_bar;
pub mod form;
pub mod form_select;
pub mod input;

// Primitive wrappers
pub mod alert_dialog;
pub mod label;
pub mod switch;
pub mod toast;

pub use alert_dialog::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use detail_list::*;
pub use feedback::*;
pub use filter_bar::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use page_header::*;
pub use pagination::*;
pub use skeleton::*;
pub use switch::*;
pub use toast::*;
