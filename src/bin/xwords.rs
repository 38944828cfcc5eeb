extern crate clap;

use clap::{App, Arg};
use log::info;
use std::time::Instant;
use xwords::Generator;

fn main() -> Result<(), String> {
    env_logger::init();

    let matches = App::new("xwords")
        .about("Fills a crossword template from a word list")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("FILE")
                .help("Template location: one row per line, '*' black, '.' blank, letters fixed")
                .required(true),
        )
        .arg(
            Arg::with_name("words")
                .short("w")
                .long("words")
                .value_name("FILE")
                .help("Word list location, one word per line")
                .required(true),
        )
        .arg(
            Arg::with_name("count")
                .short("n")
                .long("count")
                .value_name("COUNT")
                .default_value("1")
                .help("Number of fills to print"),
        )
        .arg(
            Arg::with_name("html")
                .long("html")
                .value_name("FILE")
                .help("Also write the first fill as an HTML page"),
        )
        .arg(
            Arg::with_name("heading")
                .long("heading")
                .value_name("TEXT")
                .help("Heading for the HTML page")
                .requires("html"),
        )
        .get_matches();

    let input = matches.value_of("input").ok_or("input not included")?;
    let input = std::fs::read_to_string(input).map_err(|e| format!("Failed to read input: {}", e))?;
    let template: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let count: usize = matches
        .value_of("count")
        .unwrap_or("1")
        .parse()
        .map_err(|e| format!("Failed to parse count: {}", e))?;

    let words = matches.value_of("words").ok_or("words not included")?;
    let now = Instant::now();
    let generator = Generator::from_path(&template[..], words).map_err(|e| e.to_string())?;
    info!("Loaded template and words in {}ms", now.elapsed().as_millis());

    let mut solutions = generator.solve();
    let mut printed = 0;
    while printed < count {
        let solution = match solutions.next() {
            Some(solution) => solution.map_err(|e| e.to_string())?,
            None => break,
        };

        if printed == 0 {
            if let Some(path) = matches.value_of("html") {
                std::fs::write(path, solution.to_html(matches.value_of("heading")))
                    .map_err(|e| format!("Failed to write {}: {}", path, e))?;
            }
        }

        println!("{}", solution);
        printed += 1;
    }

    info!(
        "Printed {} fills in {}ms ({:?})",
        printed,
        now.elapsed().as_millis(),
        solutions.statistics()
    );

    if printed == 0 {
        return Err(String::from("Failed to fill crossword"));
    }
    Ok(())
}
