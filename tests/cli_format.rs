//! Tests the command-line formats similar to how an application would
//! describe a small subcommand.

use weft::cli::{self, CliArgs};
use weft::iso::{int, string, variant};
use weft::parser;


fn args(words: &[&str]) -> CliArgs {
    CliArgs::from_args(words.iter().copied())
}


#[derive(Clone, PartialEq, Debug)]
struct Serve {
    root: String,
    port: i64,
    verbose: bool,
    retries: Option<i64>,
}

fn serve() -> cli::Format<Serve> {
    cli::build()
        .skip(cli::command("serve"))
        .append(cli::arg("port", Some('p'), int()))
        .append(cli::option("verbose", Some('v')))
        .append(cli::arg_opt("retries", None, int()))
        .append(parser::slot(string()))
        .finish()
        .map(variant(
            |(port, verbose, retries, root)| {
                Serve { root, port, verbose, retries }
            },
            |s: &Serve| Some((s.port, s.verbose, s.retries, s.root.clone())),
        ))
}


#[test]
fn flags_parse_from_anywhere() {
    let f = serve();
    let expected = Serve {
        root: "site".to_string(),
        port: 8080,
        verbose: false,
        retries: None,
    };
    assert_eq!(f.parse(args(&["serve", "site", "--port", "8080"])),
               Ok(Some(expected.clone())));
    assert_eq!(f.parse(args(&["serve", "--port", "8080", "site"])),
               Ok(Some(expected)));

    assert_eq!(f.parse(args(&["serve", "-p", "8080", "-v", "site"])),
               Ok(Some(Serve {
                   root: "site".to_string(),
                   port: 8080,
                   verbose: true,
                   retries: None,
               })));

    assert_eq!(f.parse(args(&["serve", "--retries", "3", "--port", "80",
                              "site"])),
               Ok(Some(Serve {
                   root: "site".to_string(),
                   port: 80,
                   verbose: false,
                   retries: Some(3),
               })));
}

#[test]
fn missing_or_bad_arguments_mismatch() {
    let f = serve();
    assert_eq!(f.parse(args(&["serve", "site"])), Ok(None));
    assert_eq!(f.parse(args(&["serve", "--port", "many", "site"])), Ok(None));
    assert_eq!(f.parse(args(&["serve", "--port", "80", "site", "--loud"])),
               Ok(None));
    assert_eq!(f.parse(args(&["install", "--port", "80", "site"])), Ok(None));
}

#[test]
fn rendering_uses_canonical_spellings() {
    let f = serve();
    assert_eq!(f.render(&Serve {
                   root: "site".to_string(),
                   port: 8080,
                   verbose: true,
                   retries: Some(3),
               }),
               Ok(Some("serve --port 8080 --verbose --retries 3 site"
                   .to_string())));
    assert_eq!(f.render(&Serve {
                   root: "site".to_string(),
                   port: 8080,
                   verbose: false,
                   retries: None,
               }),
               Ok(Some("serve --port 8080 site".to_string())));
}

#[test]
fn templates_follow_the_value() {
    let f = serve();
    assert_eq!(f.template_for(&Serve {
                   root: String::new(),
                   port: 0,
                   verbose: true,
                   retries: Some(0),
               }),
               Ok(Some("serve --port <int> --verbose --retries <int> <string>"
                   .to_string())));
    assert_eq!(f.template_for(&Serve {
                   root: String::new(),
                   port: 0,
                   verbose: false,
                   retries: None,
               }),
               Ok(Some("serve --port <int> <string>".to_string())));
}
