pub mod databricks;
