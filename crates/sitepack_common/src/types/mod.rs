pub mod defined_globals;
pub mod dev_server;
pub mod html_shell;
pub mod loader_stage;
pub mod output_asset;
pub mod output_spec;
