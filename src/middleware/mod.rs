pub mod form_title;
pub mod todo_id;

pub use form_title::FormTitle;
pub use todo_id::TodoId;
