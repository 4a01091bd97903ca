use html_display::engine::{LegacyProps, ModernProps};
use html_display::render::logging_link_handler;
use html_display::{
    DisplayError, DisplayServices, HtmlDisplay, RenderRequest, ThemePalette, View,
};
use serde::Deserialize;
use std::env;
use std::fs;
use std::process;
use std::sync::Arc;

/// One plan file: the palette, the platform fonts and the request to plan.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlanFile {
    #[serde(default)]
    theme: ThemePalette,
    #[serde(default)]
    system_fonts: Vec<String>,
    request: RenderRequest,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: html-display-plan <request.yaml>...");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  html-display-plan snippet.yaml");
        eprintln!("  html-display-plan requests/*.yaml");
        process::exit(1);
    }

    let mut exit_code = 0;

    for file_path in &args[1..] {
        match plan_file(file_path) {
            Ok(plan) => {
                println!("# {}", file_path);
                print!("{}", plan);
            }
            Err(e) => {
                eprintln!("✗ {} has errors:", file_path);
                print_error(&e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn plan_file(path: &str) -> Result<String, DisplayError> {
    let content = fs::read_to_string(path).map_err(|e| DisplayError::Io {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    let file: PlanFile = serde_yaml::from_str(&content)?;
    file.theme.validate()?;
    file.request.configuration.validate()?;

    let fonts: Arc<[String]> = file.system_fonts.into();
    let display = HtmlDisplay::new(DisplayServices {
        theme: Box::new(file.theme),
        links: Box::new(logging_link_handler()),
        loading: Box::new(View::text("Loading…", None)),
        fonts: Box::new(fonts),
        modern: Box::new(|props: &ModernProps| {
            View::text(props.shared.html.clone().unwrap_or_default(), None)
        }),
        legacy: Box::new(|props: &LegacyProps| {
            View::text(props.shared.html.clone().unwrap_or_default(), None)
        }),
    });

    let plan = display.plan(&file.request);
    Ok(serde_yaml::to_string(&plan)?)
}

fn print_error(error: &DisplayError) {
    match error {
        DisplayError::DeserializationError(msg) => {
            eprintln!("  Deserialization error:");
            eprintln!("    {}", msg);
        }
        DisplayError::InvalidColor {
            context,
            role,
            value,
            reason,
        } => {
            eprintln!("  Invalid {} color '{}' in context '{}':", role, value, context);
            eprintln!("    {}", reason);
        }
        e => {
            eprintln!("  {}", e);
        }
    }
}
