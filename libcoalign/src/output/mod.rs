pub mod output_standard;
