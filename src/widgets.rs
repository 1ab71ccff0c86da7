pub mod pane;
pub mod scrollbar;
