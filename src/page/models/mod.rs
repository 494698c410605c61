pub mod page_view;
