use clap::Parser;
use quicknotes::cli::{
    handle_add, handle_delete, handle_get, handle_list, handle_serve, handle_update,
    resolve_config, Cli, Commands,
};

fn main() {
    let cli = Cli::parse();
    quicknotes::logging::init();

    let config = resolve_config(&cli);

    let result = match cli.command {
        Commands::Serve { bind } => handle_serve(config, bind),
        Commands::Add {
            title,
            content,
            stdin,
            json,
        } => handle_add(&config, title, content, stdin, json),
        Commands::List { sort, json } => handle_list(&config, sort, json),
        Commands::Get { id, json } => handle_get(&config, id, json),
        Commands::Update {
            id,
            title,
            content,
            stdin,
            json,
        } => handle_update(&config, id, title, content, stdin, json),
        Commands::Delete { ids } => handle_delete(&config, ids),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
