// Terminal presentation of disk inventories

pub mod table;


pub use table::{display_or_na, format_size, render_disks};
