pub mod lost_items;
