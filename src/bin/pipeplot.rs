use pipeplot::cli::parse_cli;
use pipeplot::XySeries;

fn main() {
    let (pdfout, close) = parse_cli();
    let mut xy = XySeries::from_stdin().unwrap();
    if close {
        xy.close_path().unwrap();
    }
    xy.plot(&pdfout).unwrap();
}
