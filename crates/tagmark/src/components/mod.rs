pub mod markdown_view;
pub mod tagged_name_view;
