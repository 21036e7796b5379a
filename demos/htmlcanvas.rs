extern crate argparse;
extern crate htmlcanvas;
use argparse::{ArgumentParser, Store, StoreOption, StoreTrue};
use htmlcanvas::config::{self, Config};
use std::io;
use std::io::Write;

fn translate<R>(input: R, config: &Config) -> String
where
    R: io::Read,
{
    config
        .string_from_read(input)
        .expect("Failed to convert HTML")
}

fn main() {
    env_logger::init();

    let mut infile: Option<String> = None;
    let mut outfile: Option<String> = None;
    let mut strict = false;
    let mut links = false;
    let mut anchors = false;
    let mut images = false;
    let mut dedup = false;
    let mut separator = String::from("  ");

    {
        let mut ap = ArgumentParser::new();
        ap.refer(&mut infile).add_argument(
            "infile",
            StoreOption,
            "Input HTML file (default is standard input)",
        );
        ap.refer(&mut outfile).add_option(
            &["-o", "--output"],
            StoreOption,
            "Output file (default is standard output)",
        );
        ap.refer(&mut strict).add_option(
            &["--strict"],
            StoreTrue,
            "Use browser-like styles (no extra indentation or spacing)",
        );
        ap.refer(&mut links)
            .add_option(&["--links"], StoreTrue, "Show link targets");
        ap.refer(&mut anchors)
            .add_option(&["--anchors"], StoreTrue, "Show anchor names");
        ap.refer(&mut images)
            .add_option(&["--images"], StoreTrue, "Show image captions");
        ap.refer(&mut dedup).add_option(
            &["--dedup-captions"],
            StoreTrue,
            "Skip repeated image captions",
        );
        ap.refer(&mut separator).add_option(
            &["--separator"],
            Store,
            "Text between table cells (default is two spaces)",
        );
        ap.parse_args_or_exit();
    }

    let config = if strict {
        config::strict()
    } else {
        config::relaxed()
    }
    .display_links(links)
    .display_anchors(anchors)
    .display_images(images)
    .deduplicate_captions(dedup)
    .table_cell_separator(&separator);

    let data = match infile {
        None => {
            let stdin = io::stdin();
            let data = translate(&mut stdin.lock(), &config);
            data
        }
        Some(name) => {
            let mut file = std::fs::File::open(name).expect("Tried to open file");
            translate(&mut file, &config)
        }
    };

    match outfile {
        None => {
            println!("{}", data);
        }
        Some(name) => {
            let mut file = std::fs::File::create(name).expect("Tried to create file");
            write!(file, "{}", data).unwrap();
        }
    };
}
