mod open_external;
mod open_folder;
mod run_command;
