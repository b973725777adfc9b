//! CLI argument parsing and subcommand dispatch.

use std::io::Write;

use symcheck_core::{Catalog, Config};

/// Parse CLI arguments and dispatch to the appropriate subcommand.
///
/// Returns `Ok(true)` if a subcommand was handled, `Ok(false)` if `serve`
/// should be started (handled by the caller). Logs go to stderr, so stdout
/// carries only command output.
pub fn dispatch(config: &Config, catalog: &Catalog, args: &[String]) -> anyhow::Result<bool> {
    let stdout = std::io::stdout();
    run(config, catalog, args, &mut stdout.lock())
}

fn run<W: Write>(
    config: &Config,
    catalog: &Catalog,
    args: &[String],
    out: &mut W,
) -> anyhow::Result<bool> {
    match args.get(1).map(|s| s.as_str()) {
        None | Some("serve") => Ok(false),
        Some("check") => {
            let text = args[2..].join(" ");
            match symcheck_core::check(catalog, Some(&text)) {
                Ok(report) => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
                Err(e) => anyhow::bail!("{e}\nUsage: symcheck check <symptom text>"),
            }
            Ok(true)
        }
        Some("catalog") => {
            writeln!(
                out,
                "Catalog OK ({}): {} conditions, {} red flags",
                config
                    .catalog
                    .path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "built-in".to_string()),
                catalog.conditions.len(),
                catalog.red_flags.len()
            )?;
            for c in &catalog.conditions {
                writeln!(out, "  {:<48} {}", c.name, c.keywords.join(", "))?;
            }
            Ok(true)
        }
        _ => {
            print_usage(out)?;
            Ok(true)
        }
    }
}

fn print_usage<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "symcheck v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Usage: symcheck <command>")?;
    writeln!(out, "  serve                 Start HTTP server (default)")?;
    writeln!(out, "  check <symptom text>  Print the JSON report for one description")?;
    writeln!(out, "  catalog               Validate and list the active catalog")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoke(args: &[&str]) -> (anyhow::Result<bool>, String) {
        let config = Config::from_lookup("", |_: &str| None);
        let catalog = Catalog::builtin().unwrap();
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let mut out = Vec::new();
        let handled = run(&config, &catalog, &args, &mut out);
        (handled, String::from_utf8(out).unwrap())
    }

    #[test]
    fn check_prints_only_json() {
        let (handled, out) = invoke(&["symcheck", "check", "fever", "and", "chills"]);
        assert!(handled.unwrap());

        let report: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(report["input"], "fever and chills");
        assert_eq!(report["possibleConditions"][0]["name"], "Influenza (flu)");
        assert_eq!(report["disclaimers"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn check_without_text_fails() {
        let (handled, out) = invoke(&["symcheck", "check"]);
        assert!(handled.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn serve_is_left_to_caller() {
        assert!(!invoke(&["symcheck"]).0.unwrap());
        assert!(!invoke(&["symcheck", "serve"]).0.unwrap());
    }

    #[test]
    fn catalog_lists_conditions() {
        let (handled, out) = invoke(&["symcheck", "catalog"]);
        assert!(handled.unwrap());
        assert!(out.starts_with("Catalog OK (built-in): 6 conditions, 5 red flags"));
        assert!(out.contains("Common cold"));
    }

    #[test]
    fn unknown_command_prints_usage() {
        let (handled, out) = invoke(&["symcheck", "bogus"]);
        assert!(handled.unwrap());
        assert!(out.contains("Usage: symcheck <command>"));
    }
}
