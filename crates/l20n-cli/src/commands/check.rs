use std::path::PathBuf;

use l20n_syntax::Parser;

use super::source_loader::load_resource;

pub struct CheckArgs {
    pub resource_paths: Vec<PathBuf>,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    for path in &args.resource_paths {
        let source = match load_resource(Some(path.as_path()), None) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        };

        let result = Parser::new(&source.text)
            .with_recursion_limit(args.recursion_limit)
            .parse();

        match result {
            Ok(resource) => {
                tracing::debug!(
                    file = %source.name,
                    entries = resource.entries().count(),
                    "resource is valid"
                );
            }
            Err(e) => {
                eprint!(
                    "{}",
                    e.printer(&source.text)
                        .path(&source.name)
                        .colored(args.color)
                        .render()
                );
                std::process::exit(1);
            }
        }
    }

    // Silent on success (like cargo check)
}
