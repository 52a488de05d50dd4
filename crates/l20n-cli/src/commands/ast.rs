//! Show the syntax tree of a resource.

use std::path::PathBuf;

use l20n_syntax::{Parser, ResourcePrinter};

use super::source_loader::load_resource;

pub struct AstArgs {
    pub resource_path: Option<PathBuf>,
    pub resource_text: Option<String>,
    pub spans: bool,
    pub trivia: bool,
    pub json: bool,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let source = match load_resource(args.resource_path.as_deref(), args.resource_text.as_deref())
    {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let resource = match Parser::new(&source.text)
        .with_recursion_limit(args.recursion_limit)
        .parse()
    {
        Ok(resource) => resource,
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
    };

    if args.json {
        match serde_json::to_string_pretty(&resource) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let output = ResourcePrinter::new(&resource)
        .with_spans(args.spans)
        .with_trivia(args.trivia)
        .dump();
    print!("{}", output);
}
