use clap::Parser;
use sentinel::cli::{
    handle_completions, handle_config_init, handle_config_validate, handle_wiring, Cli, Commands,
    ConfigCommands,
};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Wiring(args) => match handle_wiring(&args) {
            Ok(output) => {
                println!("{}", output);
                Ok(())
            }
            Err(e) => Err(e),
        },
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => handle_config_init(&args),
            ConfigCommands::Validate(args) => match handle_config_validate(&args) {
                Ok(output) => {
                    println!("{}", output);
                    Ok(())
                }
                Err(e) => Err(e),
            },
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
