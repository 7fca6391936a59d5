use std::env;
use std::process;
use std::time::Duration;

use clap::{App, Arg, ArgMatches};
use log::info;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use sokoban_search::config::{Algorithm, Mode, SolverConfig, ALGORITHMS};
use sokoban_search::level::Level;
use sokoban_search::solver::SolverErr;
use sokoban_search::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-search")
        .author("Martin Taibr <taibr.martin@gmail.com>")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves Sokoban levels in XSB format")
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .takes_value(true)
                .possible_values(&["bfs", "dfs", "greedy", "astar", "idastar"])
                .default_value("astar")
                .help("search algorithm"),
        )
        .arg(
            Arg::with_name("backward")
                .short("b")
                .long("backward")
                .help("search from the goals back to the initial position"),
        )
        .arg(
            Arg::with_name("max-states")
                .short("m")
                .long("max-states")
                .takes_value(true)
                .help("give up after expanding this many states"),
        )
        .arg(
            Arg::with_name("timeout")
                .short("t")
                .long("timeout")
                .takes_value(true)
                .help("give up after this many seconds"),
        )
        .arg(
            Arg::with_name("no-macros")
                .long("no-macros")
                .help("don't use tunnel and goal room macros"),
        )
        .arg(
            Arg::with_name("no-corrals")
                .long("no-corrals")
                .help("don't order pushes by corrals"),
        )
        .arg(
            Arg::with_name("keep-macros")
                .long("keep-macros")
                .help("print macros in brackets instead of expanding them"),
        )
        .arg(
            Arg::with_name("steps")
                .short("s")
                .long("steps")
                .help("print the level after every move, not just after pushes"),
        )
        .arg(
            Arg::with_name("compare")
                .short("c")
                .long("compare")
                .help("run every algorithm and print a table"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let path = matches.value_of("file").unwrap();
    let level = path.load_level().unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(dir) => println!("Can't load level {} in {}: {}", path, dir.display(), err),
            Err(_) => println!("Can't load level {}: {}", path, err),
        }
        process::exit(1);
    });

    let config = parse_config(&matches).unwrap_or_else(|err| {
        println!("{}", err);
        process::exit(1);
    });

    if matches.is_present("compare") {
        println!("Comparing algorithms on {}...", path);
        compare(&level, config);
        return;
    }

    println!("Solving {}...", path);
    info!("Config: {:?}", config);
    match level.solve(&config) {
        Ok(solver_ok) => {
            println!("{}", solver_ok.stats);
            let moves = solver_ok.solution.moves();
            println!("Found solution:");
            print!(
                "{}",
                level.format_solution(&moves, matches.is_present("steps"))
            );
            println!("{}", solver_ok.solution);
            println!("Moves: {}", solver_ok.solution.move_cnt());
            println!("Pushes: {}", solver_ok.solution.push_cnt());
            println!("Difficulty: {}", solver_ok.difficulty());
        }
        Err(SolverErr::Unsolvable(stats)) => {
            println!("{}", stats);
            println!("No solution");
        }
        Err(err) => {
            if let Some(stats) = err.stats() {
                println!("{}", stats);
            }
            println!("{}", err);
            process::exit(1);
        }
    }
}

fn parse_config(matches: &ArgMatches<'_>) -> Result<SolverConfig, String> {
    let algorithm: Algorithm = matches
        .value_of("algorithm")
        .unwrap_or("astar")
        .parse()
        .map_err(|err| format!("{}", err))?;
    let mode = if matches.is_present("backward") {
        Mode::Backward
    } else {
        Mode::Forward
    };

    let mut config = SolverConfig::default()
        .algorithm(algorithm)
        .mode(mode)
        .macro_moves(!matches.is_present("no-macros"))
        .corral_ordering(!matches.is_present("no-corrals"))
        .expand_macros(!matches.is_present("keep-macros"));

    if let Some(max_states) = matches.value_of("max-states") {
        let max_states = max_states
            .parse()
            .map_err(|_| format!("Invalid number of states: {}", max_states))?;
        config = config.max_states(max_states);
    }
    if let Some(timeout) = matches.value_of("timeout") {
        let secs: f64 = timeout
            .parse()
            .map_err(|_| format!("Invalid timeout: {}", timeout))?;
        if secs < 0.0 || !secs.is_finite() {
            return Err(format!("Invalid timeout: {}", timeout));
        }
        config = config.time_limit(Duration::from_millis((secs * 1000.0) as u64));
    }
    Ok(config)
}

fn compare(level: &Level, config: SolverConfig) {
    let mut table = Table::new();
    table.set_titles(Row::new(
        ["Algorithm", "Result", "Moves", "Pushes", "Created", "Visited", "Time (ms)"]
            .iter()
            .map(|title| Cell::new(title))
            .collect(),
    ));

    for &algorithm in &ALGORITHMS {
        let config = config.algorithm(algorithm);
        let (result, lengths, stats) = match level.solve(&config) {
            Ok(ok) => (
                "solved".to_owned(),
                Some((ok.solution.move_cnt(), ok.solution.push_cnt())),
                ok.stats,
            ),
            Err(SolverErr::InvalidLevel(err)) => {
                println!("Invalid level: {}", err);
                process::exit(1);
            }
            Err(SolverErr::Unsolvable(stats)) => ("no solution".to_owned(), None, stats),
            Err(SolverErr::ResourceExceeded(limit, stats)) => (limit.to_string(), None, stats),
        };
        let (moves, pushes) = match lengths {
            Some((moves, pushes)) => (moves.separated_string(), pushes.separated_string()),
            None => ("-".to_owned(), "-".to_owned()),
        };
        table.add_row(Row::new(vec![
            Cell::new(&algorithm.to_string()),
            Cell::new(&result),
            Cell::new(&moves),
            Cell::new(&pushes),
            Cell::new(&stats.generated().separated_string()),
            Cell::new(&stats.explored().separated_string()),
            Cell::new(&(stats.elapsed().as_millis() as u64).separated_string()),
        ]));
    }

    table.printstd();
}
