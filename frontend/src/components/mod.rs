pub mod feedback_form;
pub mod header;
pub mod home;
pub mod product_list;
