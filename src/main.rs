mod catalog;
mod command;
mod display;
mod engine;
mod error;
mod link;
mod prefs;
mod types;

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use command::Command;
use engine::Converter;
use error::ConvertError;
use link::ShareLink;
use prefs::Preferences;

#[derive(Parser)]
#[command(name = "tzconv", version, about = "Compare wall-clock time across time zones")]
struct Cli {
    /// Command script to execute, one command per line
    file: Option<PathBuf>,

    /// Evaluate inline commands separated by semicolons
    #[arg(short = 'e', long = "eval")]
    eval: Option<String>,

    /// Preference file location
    #[arg(long = "prefs")]
    prefs: Option<PathBuf>,
}

struct App {
    conv: Converter,
    prefs: Preferences,
    prefs_path: PathBuf,
    done: bool,
}

impl App {
    fn execute(&mut self, cmd: Command) -> Result<(), ConvertError> {
        match cmd {
            Command::Add(id) => {
                let key = self.conv.add_zone(&id)?;
                println!("added {key}");
            }
            Command::AddLocal => {
                let tz = catalog::host_zone();
                let key = self.conv.add_zone(tz.name())?;
                println!("added {key}");
            }
            Command::Remove(key) => {
                if self.conv.remove_zone(&key) {
                    println!("removed {key}");
                } else {
                    println!("no zone under {key}");
                }
            }
            Command::Set { key, minutes } => {
                self.conv.set_time(&key, minutes)?;
                self.list();
            }
            Command::Date(date) => {
                self.conv.set_date(date)?;
                println!("anchored to {date}");
                self.list();
            }
            Command::Reverse => {
                self.conv.toggle_reverse();
                self.list();
            }
            Command::Move { dragged, target } => {
                if self.conv.move_zone(&dragged, &target) {
                    self.list();
                }
            }
            Command::List => self.list(),
            Command::Zones(filter) => {
                for name in catalog::zone_names(filter.as_deref()) {
                    println!("{name}");
                }
            }
            Command::Times => {
                for option in display::time_options() {
                    println!("{}", option.label);
                }
            }
            Command::Link {
                include_time,
                include_date,
                time,
                date,
            } => {
                let mut share = ShareLink::from_state(&self.conv);
                share.include_time = include_time;
                share.include_date = include_date;
                if let Some(literal) = time {
                    share.time = literal;
                }
                if let Some(literal) = date {
                    share.date = literal;
                }
                println!("{}", share.build());
            }
            Command::Dark => {
                self.prefs.dark_mode = !self.prefs.dark_mode;
                if let Err(e) = self.prefs.save(&self.prefs_path) {
                    log::warn!("cannot persist preferences: {e}");
                }
                println!("dark mode {}", if self.prefs.dark_mode { "on" } else { "off" });
            }
            Command::Meet => println!("{}", link::MEETING_URL),
            Command::Help => print_help(),
            Command::Quit => self.done = true,
        }
        Ok(())
    }

    fn list(&self) {
        let theme = if self.prefs.dark_mode { "dark" } else { "light" };
        println!(
            "[{theme}] {}{}",
            display::format_date_label(self.conv.selected_date()),
            if self.conv.is_reversed() { " (reversed)" } else { "" }
        );
        for row in self.conv.rows() {
            println!("{}", display::render_row(&row));
            println!("       {}", display::render_slider(row.time.minutes));
            println!("       {}", display::tick_label_line());
        }
    }
}

fn print_help() {
    println!("add <zone|local>    register a zone (e.g. add Europe/Paris)");
    println!("remove <key>        drop a zone");
    println!("set <key> <HH:MM>   move one zone's clock; the rest follow");
    println!("date <YYYY-MM-DD>   anchor the shared instant to a date");
    println!("reverse             flip the display order");
    println!("move <key> <key>    drag one zone onto another's position");
    println!("list                show all zones");
    println!("zones [filter]      browse the zone catalog");
    println!("times               show the dropdown time grid");
    println!("link [--time[=..]] [--date[=..]]   build a shareable link");
    println!("dark                toggle the persisted dark-mode preference");
    println!("meet                print the meeting-scheduler URL");
    println!("quit                leave");
}

fn run_line(app: &mut App, line: &str) -> Result<(), String> {
    match command::parse(line) {
        Ok(None) => Ok(()),
        Ok(Some(cmd)) => app.execute(cmd).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    }
}

fn run_script(app: &mut App, source: &str) -> ExitCode {
    for piece in source.lines().flat_map(|line| line.split(';')) {
        if app.done {
            break;
        }
        if let Err(e) = run_line(app, piece) {
            eprintln!("{e}");
            return ExitCode::from(1);
        }
    }
    ExitCode::SUCCESS
}

fn run_file(app: &mut App, path: &Path) -> ExitCode {
    let source = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            return ExitCode::from(1);
        }
    };
    run_script(app, &source)
}

fn run_repl(app: &mut App) -> ExitCode {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("tzconv v{}", env!("CARGO_PKG_VERSION"));
    println!("Type `help` for commands. Press Ctrl-D to exit.");
    app.list();

    while !app.done {
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                if let Err(e) = run_line(app, &line) {
                    eprintln!("{e}");
                }
            }
            Err(e) => {
                eprintln!("Read error: {e}");
                return ExitCode::from(1);
            }
        }
    }

    println!();
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let prefs_path = cli.prefs.clone().unwrap_or_else(prefs::default_path);
    let mut app = App {
        conv: Converter::with_default_zones(),
        prefs: Preferences::load(&prefs_path),
        prefs_path,
        done: false,
    };

    if let Some(code) = &cli.eval {
        return run_script(&mut app, code);
    }

    if let Some(path) = &cli.file {
        return run_file(&mut app, path);
    }

    run_repl(&mut app)
}
