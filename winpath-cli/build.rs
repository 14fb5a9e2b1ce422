//! Build script for winpath-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("winpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse, validate and rewrite Windows paths")
        .long_about(
            "Lexical parser for Windows path strings: drive, rooted, relative, UNC and \
             extended-length forms",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load configuration from this file")
                .value_name("FILE")
                .global(true)
                .env("WINPATH_CONFIG"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format for path reports")
                .value_name("FORMAT")
                .value_parser(["human", "json", "yaml"])
                .global(true),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail when any path has validation errors")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("parse")
                .about("Report every part of one or more paths")
                .long_about("Show device, node, components, flags and errors for each path"),
            Command::new("canonical")
                .about("Print the canonical form of a path")
                .long_about("Print the path with redundant separators removed"),
            Command::new("extended")
                .about("Print the extended-length form of a path")
                .long_about("Print the path with the \\\\?\\ or \\\\?\\UNC\\ prefix"),
            Command::new("absolute")
                .about("Resolve a relative path against a working directory")
                .long_about("Resolve lexically with --cwd, or through the operating system"),
            Command::new("directory")
                .about("Treat the last component of a path as a directory")
                .long_about("Move the trailing name onto the directory list"),
            Command::new("validate")
                .about("Report validation errors for one or more paths")
                .long_about("Print reserved, control and length errors; exit 1 if any"),
            Command::new("exists")
                .about("Check whether a path exists")
                .long_about("Exit 1 when the path (or directory, with --dir) is absent"),
            Command::new("system-dirs")
                .about("Show the machine name and well-known directories")
                .long_about("Resolve USERPROFILE, APPDATA, LOCALAPPDATA and PROGRAMDATA"),
            Command::new("encode")
                .about("Encode text into a legacy code page (printed as hex)"),
            Command::new("decode")
                .about("Decode hex bytes from a legacy code page"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).expect("failed to create man directory");

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).expect("failed to render man page");

    fs::write(man_dir.join("winpath.1"), buffer).expect("failed to write man page");

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
