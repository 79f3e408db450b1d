mod app;
mod settings;
mod theme;
mod views;
mod workers;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use phraselator_core::faq::domain::faq_table::FaqTable;

use app::App;

/// Ask Alaska wage-and-hour questions out loud, in English or Yup'ik.
#[derive(Parser)]
#[command(name = "phraselator")]
struct Cli {
    /// Path to the bilingual FAQ table (JSON).
    faq: PathBuf,

    /// Directory holding bundled model/scorer files.
    #[arg(long)]
    model_dir: Option<PathBuf>,

    /// Log the speech recognizer's output streams.
    #[arg(short, long)]
    debug: bool,
}

fn main() -> iced::Result {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let table = match FaqTable::load(&cli.faq) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let model_dir = cli.model_dir;
    let debug = cli.debug;

    iced::application(
        move || App::new(table.clone(), model_dir.clone(), debug),
        App::update,
        App::view,
    )
    .title("Phraselator \u{2014} Alaska Wage and Hour FAQ")
    .theme(App::theme)
    .subscription(App::subscription)
    .window(iced::window::Settings {
        size: iced::Size::new(640.0, 560.0),
        ..Default::default()
    })
    .run()
}
