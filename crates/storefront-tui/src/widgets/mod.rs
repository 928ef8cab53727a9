//! Custom widget components

mod header;
pub mod modal_overlay;
mod product_card;
mod product_detail;
mod product_list;
mod status_badge;
mod status_line;
pub mod text;

pub use header::MainHeader;
pub use product_card::{image_label, price_spans, ProductCard};
pub use product_detail::ProductDetail;
pub use product_list::ProductList;
pub use status_badge::StatusBadge;
pub use status_line::StatusLine;
