use super::VERSION;
use clap::{App, Arg};
use std::path::PathBuf;

/// Takes the CLI arguments that control the plotting of the piped data.
pub fn parse_cli() -> (PathBuf, bool) {
    let arg_pdfout = Arg::with_name("output_pdffile")
        .help("name of the output pdf file")
        .short("o")
        .long("pdffile")
        .takes_value(true)
        .default_value("res.pdf");
    let arg_close = Arg::with_name("close_path")
        .help("close the plotted path by joining the last point to the first")
        .short("c")
        .long("close")
        .takes_value(false)
        .required(false);
    let cli_args = App::new("Pipeplot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot two-column numeric data from stdin")
        .arg(arg_pdfout)
        .arg(arg_close)
        .get_matches();
    let pdfout = PathBuf::from(cli_args.value_of("output_pdffile").unwrap_or_default());
    let close = cli_args.is_present("close_path");
    return (pdfout, close);
}
