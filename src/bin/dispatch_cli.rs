//! dispatch-cli — 资源目录查询、资源读取、校验与正则调试的命令行工具
//!
//! Usage:
//!   dispatch-cli resources                          List catalog entries
//!   dispatch-cli list <resource> [options]          List a resource
//!   dispatch-cli get <resource> <id>                Fetch one item
//!   dispatch-cli check-email <value>                Run the email validator
//!   dispatch-cli regex <pattern> <text> [--flags f] Run the regex playground

use anyhow::{anyhow, bail, Context};
use dispatch_client::resource::catalog;
use dispatch_client::validation;
use dispatch_client::{HttpTransport, ListOptions, Playground};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("DISPATCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "resources" => cmd_resources(),
        "list" => run_async(cmd_list(&args[2..])),
        "get" => run_async(cmd_get(&args[2..])),
        "check-email" => cmd_check_email(&args[2..]),
        "regex" => cmd_regex(&args[2..]),
        "version" | "--version" | "-V" => {
            println!("dispatch-cli {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"dispatch-cli — Dispatch API 命令行工具

USAGE:
    dispatch-cli <COMMAND> [OPTIONS]

COMMANDS:
    resources                         List every resource in the catalog
    list <resource> [--q <text>] [--page <n>] [--per-page <n>]
                                      List items of a resource
    get <resource> <id>               Fetch a single item
    check-email <value>               Validate an email address
    regex <pattern> <text> [--flags <f>]
                                      Show regex matches (default flags: g)
    version                           Show version information
    help                              Show this help message

ENVIRONMENT:
    DISPATCH_API_URL                  API root (required for list/get)
    DISPATCH_API_TOKEN                Bearer token
    DISPATCH_LOG                      Log filter (default: warn)"#
    );
}

fn run_async<F: std::future::Future<Output = anyhow::Result<()>>>(fut: F) -> anyhow::Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?
        .block_on(fut)
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn cmd_resources() -> anyhow::Result<()> {
    println!("{:<28} {:<32} VERBS", "NAME", "PATH");
    for d in catalog::ALL {
        let verbs: Vec<&str> = d.verbs.iter().map(|v| v.as_str()).collect();
        println!("{:<28} {:<32} {}", d.name, d.base_path, verbs.join(","));
    }
    Ok(())
}

async fn cmd_list(args: &[String]) -> anyhow::Result<()> {
    let name = args.first().ok_or_else(|| anyhow!("missing <resource>"))?;
    let descriptor =
        catalog::find(name).ok_or_else(|| anyhow!("unknown resource '{name}', see `resources`"))?;

    let mut options = ListOptions::new();
    if let Some(q) = flag_value(args, "--q") {
        options = options.query(q);
    }
    if let Some(page) = flag_value(args, "--page") {
        options = options.page(page.parse().context("--page must be a number")?);
    }
    if let Some(n) = flag_value(args, "--per-page") {
        options = options.items_per_page(n.parse().context("--per-page must be a number")?);
    }

    let transport = HttpTransport::from_env()?;
    let value = descriptor.client(&transport).list(&options).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

async fn cmd_get(args: &[String]) -> anyhow::Result<()> {
    let (name, id) = match args {
        [name, id, ..] => (name, id),
        _ => bail!("usage: get <resource> <id>"),
    };
    let descriptor =
        catalog::find(name).ok_or_else(|| anyhow!("unknown resource '{name}', see `resources`"))?;

    let transport = HttpTransport::from_env()?;
    let value = descriptor.client(&transport).get(id).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn cmd_check_email(args: &[String]) -> anyhow::Result<()> {
    let value = args.first().map(String::as_str).unwrap_or("");
    match validation::email(value) {
        Ok(()) => println!("ok"),
        Err(msg) => bail!(msg),
    }
    Ok(())
}

fn cmd_regex(args: &[String]) -> anyhow::Result<()> {
    let (pattern, text) = match args {
        [pattern, text, ..] => (pattern, text),
        _ => bail!("usage: regex <pattern> <text> [--flags <f>]"),
    };

    let mut playground = Playground::new();
    playground.update_pattern(pattern.as_str());
    playground.update_text(text.as_str());
    if let Some(flags) = flag_value(args, "--flags") {
        playground.update_flags(flags);
    }

    let set = playground.matches();
    if let Some(err) = &set.error {
        bail!("{err}");
    }
    for m in &set.matches {
        println!("{}..{}\t{:?}\t{:?}", m.start, m.end, m.text, m.groups);
    }
    println!("{} match(es)", set.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flag_value_reads_the_following_argument() {
        let a = args(&["teams", "--q", "oncall", "--page", "2"]);
        assert_eq!(flag_value(&a, "--q"), Some("oncall"));
        assert_eq!(flag_value(&a, "--page"), Some("2"));
        assert_eq!(flag_value(&a, "--per-page"), None);
        assert_eq!(flag_value(&args(&["teams", "--q"]), "--q"), None);
    }

    #[test]
    fn list_and_get_reject_bad_arguments_before_connecting() {
        assert!(run_async(cmd_list(&[])).is_err());
        let err = run_async(cmd_list(&args(&["no_such_thing"]))).unwrap_err();
        assert!(err.to_string().contains("unknown resource"));
        let err = run_async(cmd_list(&args(&["teams", "--page", "two"]))).unwrap_err();
        assert!(err.to_string().contains("--page"));
        let err = run_async(cmd_get(&args(&["teams"]))).unwrap_err();
        assert!(err.to_string().contains("usage: get"));
    }

    #[test]
    fn regex_and_email_commands() {
        assert!(cmd_regex(&args(&["a+"])).is_err());
        assert!(cmd_regex(&args(&["a+", "caab", "--flags", "g"])).is_ok());
        assert!(cmd_regex(&args(&["(", "x"])).is_err());
        assert!(cmd_check_email(&args(&["ops@example.com"])).is_ok());
        assert!(cmd_check_email(&[]).is_err());
    }
}
