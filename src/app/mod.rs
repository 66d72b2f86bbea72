use crate::actions::DesktopActions;
use crate::config::{self, Settings};
use crate::index::AppIndex;
use crate::llm::OllamaClient;
use crate::privacy::InteractionLogger;
use crate::repl;
use crate::router::Router;
use crate::shared::logging::append_runtime_log_line;
use std::path::PathBuf;

const USAGE: &str = "Usage: sunny <command>\n\n\
Commands:\n\
  chat            interactive assistant session\n\
  ask <text>      route a single utterance and print the reply\n\
  index rebuild   rescan application roots and rewrite the app index\n\
  index show      print the cached app index\n\
  config init     write the default settings file if none exists\n\
  help            show this message";

struct AppContext {
    state_root: PathBuf,
    settings: Settings,
}

fn bootstrap() -> Result<AppContext, String> {
    let state_root = config::default_state_root().map_err(|err| err.to_string())?;
    let settings = config::load_global_settings().map_err(|err| err.to_string())?;
    Ok(AppContext {
        state_root,
        settings,
    })
}

fn build_index(ctx: &AppContext) -> AppIndex {
    AppIndex::new(
        config::app_index_path(&ctx.state_root),
        ctx.settings.app_scan_roots.clone(),
    )
}

fn run_session(ctx: &AppContext, one_shot: Option<&str>) -> Result<String, String> {
    let mut index = build_index(ctx);
    let model = OllamaClient::new(
        ctx.settings.model_endpoint.clone(),
        ctx.settings.model_name.clone(),
        ctx.settings.model_timeout(),
    );
    let actions = DesktopActions::new(
        config::cover_letter_dir(&ctx.state_root),
        ctx.settings.fetch_timeout(),
    );
    let logger = InteractionLogger::new(
        ctx.state_root.clone(),
        ctx.settings.very_sensitive_keywords.clone(),
    );
    let mut router = Router::new(
        &mut index,
        &model,
        &actions,
        &logger,
        ctx.settings.shell_timeout(),
    );

    match one_shot {
        Some(text) => Ok(router.route(text)),
        None => {
            append_runtime_log_line(&ctx.state_root, "chat session started");
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            repl::run_repl(&mut router, &mut stdin.lock(), &mut stdout.lock())
                .map_err(|err| format!("chat session failed: {err}"))?;
            Ok(String::new())
        }
    }
}

fn handle_index(ctx: &AppContext, args: &[String]) -> Result<String, String> {
    let mut index = build_index(ctx);
    match args.first().map(String::as_str) {
        Some("rebuild") => {
            let entries = index.rebuild().map_err(|err| err.to_string())?;
            append_runtime_log_line(
                &ctx.state_root,
                &format!("app index rebuilt with {} entries", entries.len()),
            );
            Ok(format!(
                "Discovered {} apps.\nWritten to: {}",
                entries.len(),
                index.store_path().display()
            ))
        }
        Some("show") => {
            let entries = index.load();
            let mut lines = vec![format!("{} apps indexed", entries.len())];
            for (name, path) in entries {
                lines.push(format!("{name} -> {path}"));
            }
            Ok(lines.join("\n"))
        }
        _ => Err(format!("unknown index command\n\n{USAGE}")),
    }
}

fn handle_config(ctx: &AppContext, args: &[String]) -> Result<String, String> {
    match args.first().map(String::as_str) {
        Some("init") => {
            let path = config::default_global_config_path().map_err(|err| err.to_string())?;
            if path.exists() {
                return Ok(format!("Settings already exist at {}", path.display()));
            }
            ctx.settings.save(&path).map_err(|err| err.to_string())?;
            Ok(format!("Wrote default settings to {}", path.display()))
        }
        _ => Err(format!("unknown config command\n\n{USAGE}")),
    }
}

pub fn run_cli(args: Vec<String>) -> Result<String, String> {
    let Some(command) = args.first().map(String::as_str) else {
        return Ok(USAGE.to_string());
    };

    match command {
        "help" | "--help" | "-h" => Ok(USAGE.to_string()),
        "chat" => {
            let ctx = bootstrap()?;
            run_session(&ctx, None)
        }
        "ask" => {
            let text = args[1..].join(" ");
            if text.trim().is_empty() {
                return Err(format!("ask requires an utterance\n\n{USAGE}"));
            }
            let ctx = bootstrap()?;
            run_session(&ctx, Some(&text))
        }
        "index" => {
            let ctx = bootstrap()?;
            handle_index(&ctx, &args[1..])
        }
        "config" => {
            let ctx = bootstrap()?;
            handle_config(&ctx, &args[1..])
        }
        other => Err(format!("unknown command `{other}`\n\n{USAGE}")),
    }
}
