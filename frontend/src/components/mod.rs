pub mod dropdown;
pub mod footer;
pub mod nav;
pub mod search_bar;
