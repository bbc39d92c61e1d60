pub mod evaluation_config;
