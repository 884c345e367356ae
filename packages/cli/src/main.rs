mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    add, backups, generate, get, init, move_item, remove, serve, set, AddArgs, BackupsArgs,
    GenerateArgs, GetArgs, InitArgs, MoveArgs, RemoveArgs, ServeArgs, SetArgs,
};

/// dwd - content editor for the DWD landing page
#[derive(Parser, Debug)]
#[command(name = "dwd")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write config, seed content and the generated module
    Init(InitArgs),

    /// Emit the content module from the data file
    Generate(GenerateArgs),

    /// Run the content editor server
    Serve(ServeArgs),

    /// Print the value at a path
    Get(GetArgs),

    /// Replace the value at a path
    Set(SetArgs),

    /// Append an item to a list
    Add(AddArgs),

    /// Remove an item from a list
    Remove(RemoveArgs),

    /// Move an item within a list
    Move(MoveArgs),

    /// List content backups
    Backups(BackupsArgs),
}

fn main() {
    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Generate(args) => generate(args, &cwd),
        Command::Serve(args) => serve(args, &cwd),
        Command::Get(args) => get(args, &cwd),
        Command::Set(args) => set(args, &cwd),
        Command::Add(args) => add(args, &cwd),
        Command::Remove(args) => remove(args, &cwd),
        Command::Move(args) => move_item(args, &cwd),
        Command::Backups(args) => backups(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
