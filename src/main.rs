use clap::Parser;
use reftag::application::{
    init::init, ConfigService, DefineTagService, ExpandDocsService, ExpandOptions, ExpandOutcome,
    ListTagsService, RenderService,
};
use reftag::cli::{format_expand_summary, format_tag_list, Cli, Commands};
use reftag::error::ReftagError;
use reftag::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), ReftagError> {
    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::Expand { paths, write }) => {
            // Discover repository
            let repo = FileSystemRepository::discover()?;
            let service = ExpandDocsService::new(repo);

            match service.execute(&ExpandOptions { paths, write })? {
                ExpandOutcome::Preview(text) => print!("{}", text),
                ExpandOutcome::Written(reports) => print!("{}", format_expand_summary(&reports)),
            }
            Ok(())
        }
        Some(Commands::Render { raw_text, tag }) => {
            println!("{}", RenderService::execute(&raw_text, &tag)?);
            Ok(())
        }
        Some(Commands::Define { name, base_uri }) => {
            let repo = FileSystemRepository::discover()?;
            let service = DefineTagService::new(repo);

            service.execute(&name, &base_uri)?;
            println!("Defined {{{}}} -> {}", name, base_uri);
            Ok(())
        }
        Some(Commands::Tags) => {
            let repo = FileSystemRepository::discover()?;
            let tags = ListTagsService::new(repo).execute()?;
            println!("{}", format_tag_list(&tags).trim_end());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            // Discover repository
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                // List all config
                let config = service.list()?;
                println!("escape = {}", config.escape);
                println!("created = {}", config.created.to_rfc3339());
                for (name, base_uri) in &config.tags {
                    println!("tags.{} = {}", name, base_uri);
                }
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    // Set config value
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    // Get config value
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                // No key provided, show usage
                println!("Usage: reftag config [--list | <key> [<value>]]");
                println!("Valid keys: escape, created");
                Ok(())
            }
        }
        None => {
            // No command, show help pointer
            println!("reftag - Expand inline reference tags in documentation files");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
