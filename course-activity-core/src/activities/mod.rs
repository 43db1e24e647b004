pub mod color_filtering;
