// tiling: headless host for the panel layout engine.
// Restores the last layout, replays an action script against it, prints the
// resulting panel rects and saves the layout for the next run.

mod host;
mod script;
mod session;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use host::Host;

#[derive(Parser)]
#[command(name = "tiling")]
#[command(about = "Replay tiling layout actions", long_about = None)]
struct Cli {
    /// JSON array of actions. Read from stdin when omitted.
    script: Option<PathBuf>,
    /// Start from the default layout instead of the saved session.
    #[arg(long)]
    fresh: bool,
    /// Do not write the resulting layout back to the session file.
    #[arg(long)]
    no_save: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let settings = settings::load_settings();
    let layout = if cli.fresh {
        session::default_layout()
    } else {
        session::load_session().unwrap_or_else(session::default_layout)
    };

    let actions = match script::read_script(cli.script.as_deref()) {
        Ok(actions) => actions,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut host = Host::new(layout, &settings);
    let report = host.replay(actions);
    log::info!(
        "replayed: {} applied, {} unchanged, {} refused",
        report.applied,
        report.unchanged,
        report.refused
    );

    for (panel_id, rect) in host.rects(settings.window_size()) {
        println!(
            "{panel_id}\t{:.1}\t{:.1}\t{:.1}\t{:.1}",
            rect.x, rect.y, rect.width, rect.height
        );
    }
    for tab_id in &report.closed_tabs {
        println!("closed\t{tab_id}");
    }

    if !cli.no_save {
        session::save_session(host.layout());
    }
    ExitCode::SUCCESS
}
