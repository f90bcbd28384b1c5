pub mod text;

pub use text::{format_matrix, load_dataset, parse_dataset, write_matrix};

#[cfg(test)]
mod test_text;
