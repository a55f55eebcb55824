use std::io::Read;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use jom_text::{merge_text, JsonAdapter, TextAdapter};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Merge(args) => cmd_merge(args),
        Command::Show(args) => cmd_show(args),
    }
}

fn cmd_merge(args: MergeArgs) -> anyhow::Result<()> {
    let source_text = read_input(&args.source)?;
    let target_text = read_input(&args.target)?;

    let adapter = adapter_for(args.pretty);
    let merged = merge_text(&adapter, &source_text, &target_text)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, merged)
                .with_context(|| format!("cannot write {}", path.display()))?;
            println!("{} Merged into {}", "✓".green().bold(), path.display().to_string().bold());
        }
        None => println!("{merged}"),
    }
    Ok(())
}

fn cmd_show(args: ShowArgs) -> anyhow::Result<()> {
    let text = read_input(&args.file)?;
    let adapter = adapter_for(args.pretty);
    let value = adapter
        .parse(&text)
        .with_context(|| format!("cannot parse {}", args.file.display()))?;
    println!("{}", adapter.serialize(&value));
    Ok(())
}

fn adapter_for(pretty: bool) -> JsonAdapter {
    if pretty {
        JsonAdapter::pretty()
    } else {
        JsonAdapter::new()
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("cannot read stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn merge_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_temp(&dir, "source.json", r#"{"name": "src"}"#);
        let target = write_temp(&dir, "target.json", r#"{"name": "tgt", "extra": 1}"#);
        let output = dir.path().join("merged.json");

        cmd_merge(MergeArgs {
            source,
            target,
            output: Some(output.clone()),
            pretty: false,
        })
        .unwrap();

        let merged = std::fs::read_to_string(output).unwrap();
        assert_eq!(merged, r#"{"name":"src","extra":1}"#);
    }

    #[test]
    fn merge_fails_on_malformed_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_temp(&dir, "source.json", "{not json");
        let target = write_temp(&dir, "target.json", "{}");

        let err = cmd_merge(MergeArgs {
            source,
            target,
            output: None,
            pretty: false,
        })
        .unwrap_err();

        assert!(err.to_string().contains("source"), "got: {err}");
    }

    #[test]
    fn merge_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = write_temp(&dir, "target.json", "{}");

        let err = cmd_merge(MergeArgs {
            source: dir.path().join("absent.json"),
            target,
            output: None,
            pretty: false,
        })
        .unwrap_err();

        assert!(err.to_string().contains("cannot read"), "got: {err}");
    }

    #[test]
    fn show_reprints_a_document() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_temp(&dir, "doc.json", r#"{  "a" :  [1,2]  }"#);

        cmd_show(ShowArgs { file, pretty: false }).unwrap();
    }
}
