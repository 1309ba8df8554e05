use std::io::{self, Write};

use address_space::{AccessKind, Stats, Translation, TranslationError};

/// Receives every translated address, then the run totals.
pub trait Reporter {
    fn report(
        &mut self,
        logical_address: u64,
        result: &Result<Translation, TranslationError>,
    ) -> io::Result<()>;

    fn finish(&mut self, stats: &Stats) -> io::Result<()>;
}

/// Writes one line per address in the classic
/// `Virtual Address: ... -> Physical Address: ...` layout.
pub struct TextReporter<W: Write> {
    out: W,
    verbose: bool,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            verbose: false,
        }
    }

    /// Also print whether each access hit, faulted or evicted a page.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn header(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "Randomly generated virtual addresses and their translations:"
        )
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(
        &mut self,
        logical_address: u64,
        result: &Result<Translation, TranslationError>,
    ) -> io::Result<()> {
        write!(self.out, "Virtual Address: {:5} -> ", logical_address)?;
        match result {
            Ok(translation) => {
                write!(
                    self.out,
                    "Physical Address: {:5}",
                    translation.physical_address
                )?;
                if self.verbose {
                    match translation.kind {
                        AccessKind::Hit => write!(self.out, " (hit)")?,
                        AccessKind::Fault { evicted: None } => write!(
                            self.out,
                            " (fault, page {} -> frame {})",
                            translation.page_number, translation.frame_number
                        )?,
                        AccessKind::Fault {
                            evicted: Some(evicted),
                        } => write!(
                            self.out,
                            " (fault, page {} -> frame {}, evicted page {})",
                            translation.page_number, translation.frame_number, evicted
                        )?,
                    }
                }
                writeln!(self.out)
            }
            Err(err) => writeln!(self.out, "Error: {}", err),
        }
    }

    fn finish(&mut self, stats: &Stats) -> io::Result<()> {
        writeln!(
            self.out,
            "{} accesses, {} hits, {} faults, {} evictions (hit ratio {:.2})",
            stats.accesses,
            stats.hits,
            stats.faults,
            stats.evictions,
            stats.hit_ratio()
        )?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(verbose: bool, logical_address: u64, result: Result<Translation, TranslationError>) -> String {
        let mut reporter = TextReporter::new(Vec::new()).verbose(verbose);
        reporter.report(logical_address, &result).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    fn translation(kind: AccessKind) -> Translation {
        Translation {
            logical_address: 300,
            page_number: 1,
            offset: 44,
            frame_number: 2,
            physical_address: 556,
            kind,
        }
    }

    #[test]
    fn plain_line() {
        let line = render(false, 300, Ok(translation(AccessKind::Hit)));
        assert_eq!(line, "Virtual Address:   300 -> Physical Address:   556\n");
    }

    #[test]
    fn verbose_eviction() {
        let line = render(
            true,
            300,
            Ok(translation(AccessKind::Fault { evicted: Some(9) })),
        );
        assert_eq!(
            line,
            "Virtual Address:   300 -> Physical Address:   556 (fault, page 1 -> frame 2, evicted page 9)\n"
        );
    }

    #[test]
    fn out_of_bounds_line() {
        let err = TranslationError::OutOfBounds {
            address: 5000,
            page_number: 19,
        };
        let line = render(false, 5000, Err(err));
        assert_eq!(
            line,
            "Virtual Address:  5000 -> Error: page number 19 out of bounds for logical address 5000\n"
        );
    }

    #[test]
    fn summary() {
        let mut reporter = TextReporter::new(Vec::new());
        let stats = Stats {
            accesses: 4,
            hits: 1,
            faults: 3,
            evictions: 0,
        };
        reporter.finish(&stats).unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "4 accesses, 1 hits, 3 faults, 0 evictions (hit ratio 0.25)\n");
    }
}
