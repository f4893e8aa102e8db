use std::env;
use std::process;

use zipcode_reader::{load_ken_all, partition, ZipcodeReader};

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} partition <ken-all-csv> <out-dir>", program);
    eprintln!("       {} lookup  <assets-dir> <code>", program);
    eprintln!("       {} resolve <assets-dir> <code>", program);
    eprintln!("       {} search  <assets-dir> <code>", program);
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("zipcode-reader");

    if args.len() != 4 {
        usage(program);
    }

    let command = args[1].as_str();
    if command == "partition" {
        let (csv_path, out_dir) = (&args[2], &args[3]);
        match load_ken_all(csv_path).and_then(|map| partition(&map, out_dir)) {
            Ok(summary) => {
                println!("Partitioned {} into {}", csv_path, out_dir);
                println!("  Buckets: {}", summary.buckets);
                println!("  Areas:   {}", summary.areas);
                println!("  Codes:   {}", summary.codes);
            }
            Err(e) => {
                eprintln!("ERROR: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let (assets_dir, code) = (&args[2], &args[3]);
    let reader = ZipcodeReader::open(assets_dir);

    // Missing data prints as JSON null / []; only bad input is an error.
    let output = match command {
        "lookup" => reader
            .lookup(code)
            .and_then(|map| Ok(serde_json::to_string_pretty(&map.as_deref())?)),
        "resolve" => reader
            .resolve(code)
            .and_then(|addresses| Ok(serde_json::to_string_pretty(&addresses)?)),
        "search" => reader
            .search(code)
            .and_then(|addresses| Ok(serde_json::to_string_pretty(&addresses)?)),
        _ => usage(program),
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    }
}
