// Copyright 2025. Coverage calculator CLI for rect-coverage.
//
// Usage:
//   coverage-report pixels <screen> <rect>...
//   coverage-report report <screen> <label=rect>...
//   coverage-report verify <width> <height> <count> [seed]
//
// Rectangles are written left,top,right,bottom.

use coverage_report::{
    compare, parse_labelled, parse_rects, random_rects, raster_fits, MAX_RASTER_PIXELS,
};
use rect_coverage::{coverage_pixels, CoverageError, Rect, ScreenCoverage};
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "pixels" => cmd_pixels(&args[2..]),
        "report" => cmd_report(&args[2..]),
        "verify" => cmd_verify(&args[2..]),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("coverage-report - screen coverage of a union of rectangles");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  pixels <screen> <rect>...");
    eprintln!("      Print the number of screen pixels covered by the rectangles.");
    eprintln!();
    eprintln!("  report <screen> <label=rect>...");
    eprintln!("      Print the covered percentage overall and per rectangle.");
    eprintln!();
    eprintln!("  verify <width> <height> <count> [seed]");
    eprintln!("      Compare the sweep against a brute-force raster on random input.");
    eprintln!("      width * height must not exceed {} pixels.", MAX_RASTER_PIXELS);
    eprintln!();
    eprintln!("Rectangles are written left,top,right,bottom.");
}

fn fail(err: CoverageError) -> ! {
    eprintln!("error: {}", err);
    process::exit(1);
}

fn parse_screen(arg: &str) -> Rect {
    arg.parse().unwrap_or_else(|e| fail(e))
}

fn cmd_pixels(args: &[String]) {
    if args.is_empty() {
        eprintln!("Usage: coverage-report pixels <screen> <rect>...");
        process::exit(1);
    }

    let screen = parse_screen(&args[0]);
    let rects = parse_rects(&args[1..]).unwrap_or_else(|e| fail(e));
    println!("{}", coverage_pixels(&screen, &rects));
}

fn cmd_report(args: &[String]) {
    if args.is_empty() {
        eprintln!("Usage: coverage-report report <screen> <label=rect>...");
        process::exit(1);
    }

    let screen = parse_screen(&args[0]);
    let items = args[1..]
        .iter()
        .map(|a| parse_labelled(a))
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|e| fail(e));

    let report = ScreenCoverage::compute(&screen, items);
    if screen.area() == 0 {
        eprintln!("warning: {}", CoverageError::EmptyScreen);
    }

    println!("global: {}%", report.global_percent);
    for entry in &report.entries {
        println!("  {} ({}): {}%", entry.label, entry.visible, entry.percent);
    }
}

fn cmd_verify(args: &[String]) {
    if args.len() < 3 {
        eprintln!("Usage: coverage-report verify <width> <height> <count> [seed]");
        process::exit(1);
    }

    let parse_num = |s: &str, what: &str| -> u64 {
        s.parse().unwrap_or_else(|_| {
            eprintln!("Invalid {}: {}", what, s);
            process::exit(1);
        })
    };

    let width = parse_num(&args[0], "width").min(i32::MAX as u64) as u32;
    let height = parse_num(&args[1], "height").min(i32::MAX as u64) as u32;
    let count = parse_num(&args[2], "count") as usize;
    let seed = args.get(3).map(|s| parse_num(s, "seed")).unwrap_or(1);

    let screen = Rect::from_origin_size(0, 0, width, height);
    if !raster_fits(&screen) {
        eprintln!(
            "Screen {}x{} is too large to verify: the raster is limited to {} pixels",
            width, height, MAX_RASTER_PIXELS
        );
        eprintln!("Usage: coverage-report verify <width> <height> <count> [seed]");
        process::exit(1);
    }
    let rects = random_rects(&screen, count, seed);

    println!("Verifying {} rects on {}x{} (seed {})...", count, width, height, seed);
    let result = compare(&screen, &rects);
    println!("{}", result);

    if !result.matches() {
        for r in &rects {
            println!("  {}", r);
        }
        process::exit(1);
    }
}
