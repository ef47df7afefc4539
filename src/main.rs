use chrono::Local;
use clap::Parser;
use promptshelf::application::{
    self, init::init, ConfigService, ImportMode, PromptScope, PromptStore,
};
use promptshelf::cli::{self, CategoryCommand, Cli, Commands, PromptCommand};
use promptshelf::domain::{MergePolicy, UuidGenerator, COMMON_ICONS};
use promptshelf::error::ShelfError;
use promptshelf::infrastructure::{
    CommandClipboard, FileSystemLibrary, LibraryRepository, SystemClipboard,
};
use promptshelf::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), ShelfError> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized promptshelf library at {}", path.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemLibrary::discover()?);

            if list {
                let config = service.list()?;
                println!("copy_command = {}", config.copy_command);
                println!("export_dir = {}", config.export_dir.display());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: promptshelf config [--list | <key> [<value>]]");
                println!("Valid keys: copy_command, export_dir, created");
                Ok(())
            }
        }
        Commands::Status => {
            let repo = FileSystemLibrary::discover()?;
            let store = PromptStore::open(&repo);
            let status = application::library_status(store.document());
            print!(
                "{}",
                cli::format_status(&repo.root.display().to_string(), &status)
            );
            Ok(())
        }
        Commands::Category(command) => run_category(command),
        Commands::Prompt(command) => run_prompt(command),
        Commands::Export { output } => {
            let repo = FileSystemLibrary::discover()?;
            let store = PromptStore::open(&repo);
            let path = application::export_library(
                &repo,
                store.document(),
                output.as_deref(),
                Local::now().date_naive(),
            )?;
            println!("Exported library to {}", path.display());
            Ok(())
        }
        Commands::Import {
            file,
            replace,
            yes,
            attach_to_existing,
        } => {
            let repo = FileSystemLibrary::discover()?;
            let mut store = PromptStore::open(&repo);
            let mode = if replace {
                ImportMode::Replace { confirmed: yes }
            } else if attach_to_existing {
                ImportMode::Merge(MergePolicy::AttachToExisting)
            } else {
                ImportMode::Merge(MergePolicy::Preserve)
            };

            let summary =
                application::import_file(&repo, &mut store, &mut UuidGenerator, &file, mode)?;
            print!("{}", cli::format_import_summary(&summary));
            Ok(())
        }
    }
}

fn run_category(command: CategoryCommand) -> Result<(), ShelfError> {
    if let CategoryCommand::Icons = command {
        println!("{}", COMMON_ICONS.join(" "));
        return Ok(());
    }

    let repo = FileSystemLibrary::discover()?;
    let mut store = PromptStore::open(&repo);

    match command {
        CategoryCommand::List => {
            let summaries = application::list_categories(store.document());
            print!("{}", cli::format_category_list(&summaries));
        }
        CategoryCommand::Add { name, icon } => {
            let category =
                application::add_category(&mut store, &mut UuidGenerator, &name, icon.as_deref())?;
            println!(
                "Added category {} {} [{}]",
                category.icon, category.name, category.id
            );
        }
        CategoryCommand::Edit {
            category,
            name,
            icon,
        } => {
            let category = application::edit_category(
                &mut store,
                &category,
                name.as_deref(),
                icon.as_deref(),
            )?;
            println!(
                "Updated category {} {} [{}]",
                category.icon, category.name, category.id
            );
        }
        CategoryCommand::Delete { category, yes } => {
            let (category, removed) = application::delete_category(&mut store, &category, yes)?;
            println!(
                "Deleted category {} and {} prompt(s)",
                category.name, removed
            );
        }
        CategoryCommand::Icons => {}
    }
    Ok(())
}

fn run_prompt(command: PromptCommand) -> Result<(), ShelfError> {
    let repo = FileSystemLibrary::discover()?;
    let mut store = PromptStore::open(&repo);

    match command {
        PromptCommand::List { category, orphaned } => {
            let scope = match (category, orphaned) {
                (Some(reference), _) => PromptScope::Category(reference),
                (None, true) => PromptScope::Orphaned,
                (None, false) => PromptScope::All,
            };
            let groups = application::list_prompts(store.document(), &scope)?;
            print!("{}", cli::format_prompt_groups(&groups));
        }
        PromptCommand::Add { category, content } => {
            let prompt =
                application::add_prompt(&mut store, &mut UuidGenerator, &category, &content)?;
            println!("Added prompt {}", prompt.id);
        }
        PromptCommand::Edit {
            id,
            content,
            category,
        } => {
            let prompt = application::edit_prompt(
                &mut store,
                &id,
                content.as_deref(),
                category.as_deref(),
            )?;
            println!("Updated prompt {}", prompt.id);
        }
        PromptCommand::Delete { id } => {
            let prompt = application::delete_prompt(&mut store, &id)?;
            println!("Deleted prompt {}", prompt.id);
        }
        PromptCommand::Show { id } => {
            let document = store.document();
            let prompt = application::find_prompt(document, &id)?;
            let category = document.category(&prompt.category_id);
            print!("{}", cli::format_prompt_detail(prompt, category));
        }
        PromptCommand::Copy { id } => {
            let config = repo.load_config()?;
            let mut copy_command = CommandClipboard::new(config.get_copy_command());
            let copied = application::copy_prompt(
                store.document(),
                &id,
                &mut SystemClipboard,
                &mut copy_command,
            )?;
            if copied {
                println!("Copied prompt {} to clipboard", id);
            }
        }
    }
    Ok(())
}
