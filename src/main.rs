// vim: set ai et ts=4 sts=4 sw=4:
use std::error;
use std::io;
use std::process;
use clap::{App, Arg, ArgMatches};
use log::{info, LevelFilter};

use picross::puzzle::{Puzzle, Solver, SolverOptions};
use picross::ui::{render, RenderOptions};
use picross::util::is_a_tty;

pub struct Args {
    pub puzzle_file: String,
    pub steps: bool,
    pub verbosity: u64,
    pub solver: SolverOptions,
    pub render: RenderOptions,
}

impl Args {
    fn from_matches(matches: &ArgMatches) -> Result<Self, String> {
        let max_iterations = match matches.value_of("max-iterations") {
            Some(s) => s.parse::<usize>()
                        .map_err(|e| format!("invalid --max-iterations {:?}: {}", s, e))?,
            None    => SolverOptions::default().max_iterations,
        };
        let subdivision = match matches.value_of("subdivision") {
            Some(s) => s.parse::<usize>()
                        .map_err(|e| format!("invalid --subdivision {:?}: {}", s, e))?,
            None    => 5,
        };
        let emit_color = match matches.value_of("color").unwrap_or("auto") {
            "always" => true,
            "never"  => false,
            _        => is_a_tty(io::stdout()),
        };
        Ok(Args {
            puzzle_file: matches.value_of("PUZZLE").unwrap_or_default().to_string(),
            steps: matches.is_present("steps"),
            verbosity: matches.occurrences_of("verbose"),
            solver: SolverOptions {
                max_iterations,
                cache_candidates: !matches.is_present("no-cache"),
            },
            render: RenderOptions {
                subdivision: Some(subdivision),
                show_crosses: matches.is_present("show-crosses"),
                emit_color,
            },
        })
    }
}

fn parse_args() -> Result<Args, String> {
    let matches = App::new("picross")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves nonogram puzzles by line inference")
        .arg(Arg::with_name("PUZZLE")
             .help("Puzzle definition (.yaml or .json)")
             .required(true)
             .index(1))
        .arg(Arg::with_name("steps")
             .long("steps")
             .help("Print the grid after every propagation step"))
        .arg(Arg::with_name("max-iterations")
             .long("max-iterations")
             .value_name("N")
             .takes_value(true)
             .help("Give up after N propagation steps (default 1000)"))
        .arg(Arg::with_name("no-cache")
             .long("no-cache")
             .help("Regenerate line placements on every pass instead of caching them"))
        .arg(Arg::with_name("subdivision")
             .long("subdivision")
             .value_name("N")
             .takes_value(true)
             .help("Draw separator lines every N squares, 0 for none (default 5)"))
        .arg(Arg::with_name("show-crosses")
             .long("show-crosses")
             .help("Mark squares known to be empty with an x"))
        .arg(Arg::with_name("color")
             .long("color")
             .value_name("WHEN")
             .takes_value(true)
             .possible_values(&["auto", "always", "never"])
             .help("Dim completed clues using terminal colors"))
        .arg(Arg::with_name("verbose")
             .short("v")
             .multiple(true)
             .help("Log more (repeat for more detail)"))
        .get_matches();
    Args::from_matches(&matches)
}

fn setup_logging(verbosity: u64) -> Result<(), log::SetLoggerError> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}][{}] {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
}

fn drive(solver: &mut Solver, args: &Args) -> Result<(), picross::Error> {
    if !args.steps {
        return solver.solve().map(|_| ());
    }
    println!("{}", render(&solver.puzzle, &solver.grid, &args.render));
    while let Some(step) = solver.next() {
        let step = step?;
        println!("Iteration {} ({} squares deduced):", step.iteration, step.changes.len());
        println!("{}", render(&solver.puzzle, &solver.grid, &args.render));
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn error::Error>> {
    let puzzle = Puzzle::from_file(&args.puzzle_file)?;
    info!("loaded {}x{} puzzle from {}", puzzle.size(), puzzle.size(), args.puzzle_file);

    let mut solver = Solver::with_options(puzzle, args.solver.clone());
    let outcome = drive(&mut solver, args);
    match outcome {
        Ok(())  => println!("Result:"),
        Err(_)  => println!("Partial grid after {} iterations:", solver.iterations),
    }
    println!("{}", render(&solver.puzzle, &solver.grid, &args.render));
    outcome?;
    Ok(())
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("error: {}", msg);
            process::exit(2);
        }
    };
    if let Err(e) = setup_logging(args.verbosity) {
        eprintln!("warning: could not set up logging: {}", e);
    }
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
