use std::io::Read;
use std::path::Path;

use matplotlib as plt;

pub mod cli;
pub mod error;

use error::PlotError;
use error::Result;

pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");

/// The main struct for the piped xy data:
/// two parallel coordinate sequences of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct XySeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl XySeries {
    pub fn new(capacity: usize) -> XySeries {
        let x: Vec<f64> = Vec::with_capacity(capacity);
        let y: Vec<f64> = Vec::with_capacity(capacity);
        XySeries { x, y }
    }

    /// Init an XySeries from two-column text,
    /// one whitespace-separated xy pair per line.
    /// Any line without exactly two float columns is a fatal parse error;
    /// no partial series is returned.
    pub fn from_text(text: &str) -> Result<XySeries> {
        let mut series = XySeries::new(1024);
        for (i, l) in text.lines().enumerate() {
            let fields: Vec<&str> = l.split_whitespace().collect();
            if fields.len() != 2 {
                return Err(PlotError::Parse {
                    line: i + 1,
                    reason: format!("expected 2 columns, found {}", fields.len()),
                });
            }
            series.x.push(parse_field(fields[0], i + 1)?);
            series.y.push(parse_field(fields[1], i + 1)?);
        }
        Ok(series)
    }

    /// Reads the whole stream to its end, then parses it;
    /// no line is processed before the stream is exhausted.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<XySeries> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        XySeries::from_text(&text)
    }

    pub fn from_stdin() -> Result<XySeries> {
        XySeries::from_reader(std::io::stdin())
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Appends the first point at the end of both sequences so the
    /// plotted line forms a closed loop rather than an open polyline.
    /// Needs at least one point.
    pub fn close_path(&mut self) -> Result<()> {
        match (self.x.first().copied(), self.y.first().copied()) {
            (Some(x0), Some(y0)) => {
                self.x.push(x0);
                self.y.push(y0);
                Ok(())
            }
            _ => Err(PlotError::EmptyInput),
        }
    }

    /// Plots the series as a single connected line with default styling
    /// and writes the figure to fout as a pdf.
    /// The output file is overwritten unconditionally; an empty series
    /// gives an empty figure, not an error.
    pub fn plot(&self, fout: &Path) -> Result<()> {
        let (fig, [[mut ax]]) = plt::subplots()?;
        ax.xy(&self.x, &self.y).plot();
        fig.save().to_file(fout)?;
        Ok(())
    }
}

impl std::fmt::Display for XySeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (x, y) in self.x.iter().zip(self.y.iter()) {
            writeln!(f, "{} {}", x, y)?
        }
        Ok(())
    }
}

fn parse_field(field: &str, line: usize) -> Result<f64> {
    field.parse::<f64>().map_err(|e| PlotError::Parse {
        line,
        reason: format!("invalid float '{}': {}", field, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_two_columns() {
        let series = XySeries::from_text("1 2\n3.5 -4\n1e3 0.25\n").unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.x, vec![1., 3.5, 1e3]);
        assert_eq!(series.y, vec![2., -4., 0.25]);
    }

    #[test]
    fn parse_accepts_extra_whitespace() {
        let series = XySeries::from_text("  1\t 2 \n0 0").unwrap();
        assert_eq!(series.x, vec![1., 0.]);
        assert_eq!(series.y, vec![2., 0.]);
    }

    #[test]
    fn parse_empty_text_gives_empty_series() {
        let series = XySeries::from_text("").unwrap();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
    }

    #[test]
    fn parse_rejects_three_columns() {
        let err = XySeries::from_text("1 2\n3 4 5\n").unwrap_err();
        match err {
            PlotError::Parse { line, .. } => assert_eq!(line, 2),
            e => panic!("expected a parse error, got {}", e),
        }
    }

    #[test]
    fn parse_rejects_one_column() {
        let err = XySeries::from_text("7\n").unwrap_err();
        match err {
            PlotError::Parse { line, .. } => assert_eq!(line, 1),
            e => panic!("expected a parse error, got {}", e),
        }
    }

    #[test]
    fn parse_rejects_non_numeric_token() {
        let err = XySeries::from_text("1 2\n3 abc\n").unwrap_err();
        match err {
            PlotError::Parse { line, .. } => assert_eq!(line, 2),
            e => panic!("expected a parse error, got {}", e),
        }
    }

    #[test]
    fn from_reader_reads_to_end() {
        let input = std::io::Cursor::new(b"0 1\n2 3\n".to_vec());
        let series = XySeries::from_reader(input).unwrap();
        assert_eq!(series.x, vec![0., 2.]);
        assert_eq!(series.y, vec![1., 3.]);
    }

    #[test]
    fn close_path_appends_first_point() {
        let mut series = XySeries::from_text("0 0\n1 0\n1 1\n0 1\n").unwrap();
        series.close_path().unwrap();
        assert_eq!(series.len(), 5);
        assert_eq!(series.x, vec![0., 1., 1., 0., 0.]);
        assert_eq!(series.y, vec![0., 0., 1., 1., 0.]);
    }

    #[test]
    fn close_path_single_point() {
        let mut series = XySeries::from_text("2 3\n").unwrap();
        series.close_path().unwrap();
        assert_eq!(series.x, vec![2., 2.]);
        assert_eq!(series.y, vec![3., 3.]);
    }

    #[test]
    fn close_path_fails_on_empty_series() {
        let mut series = XySeries::new(0);
        let err = series.close_path().unwrap_err();
        match err {
            PlotError::EmptyInput => (),
            e => panic!("expected an empty input error, got {}", e),
        }
    }

    #[test]
    fn display_prints_one_pair_per_line() {
        let series = XySeries::from_text("1 2\n3 4\n").unwrap();
        assert_eq!(series.to_string(), "1 2\n3 4\n");
    }
}
