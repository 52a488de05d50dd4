mod entries_tests;
mod resource_tests;
mod values_tests;

use crate::ResourcePrinter;
use crate::diagnostics::ParseError;
use crate::parser::parse;

fn dump(source: &str) -> String {
    let resource = parse(source).unwrap();
    ResourcePrinter::new(&resource).dump()
}

fn dump_spans(source: &str) -> String {
    let resource = parse(source).unwrap();
    ResourcePrinter::new(&resource).with_spans(true).dump()
}

fn parse_err(source: &str) -> ParseError {
    parse(source).unwrap_err()
}
